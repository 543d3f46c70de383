//! Test utilities and mock types for Carta development.
//!
//! Provides region [`fixtures`] and [`TableKernel`], a
//! [`GeometryKernel`] whose answers come from explicit tables so tests
//! can pin exact distances, zero perimeters or missing contacts.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::sync::atomic::{AtomicUsize, Ordering};

use carta_core::{GeometryKernel, Region};
use carta_geom::PlanarKernel;
use geo_types::{MultiLineString, MultiPolygon, Point};

/// Table-driven [`GeometryKernel`].
///
/// Seeded from [`PlanarKernel`] answers over a fixed list of geometries,
/// then overridden entry by entry. Geometries are matched by equality, so
/// the kernel panics if asked about a shape it was not built with.
/// Counts `touches` queries for cache tests.
#[derive(Debug)]
pub struct TableKernel {
    geometries: Vec<MultiPolygon<f64>>,
    perimeters: Vec<f64>,
    centroids: Vec<Option<Point<f64>>>,
    /// `Some(shared length)` for touching pairs, row-major.
    contacts: Vec<Option<f64>>,
    distances: Vec<f64>,
    overlaps: Vec<Option<f64>>,
    planar: PlanarKernel,
    touch_queries: AtomicUsize,
}

impl TableKernel {
    pub fn for_regions(regions: &[Region]) -> Self {
        Self::from_geometries(regions.iter().map(|r| r.geometry.clone()).collect())
    }

    pub fn from_geometries(geometries: Vec<MultiPolygon<f64>>) -> Self {
        let planar = PlanarKernel::default();
        let n = geometries.len();
        let mut contacts = vec![None; n * n];
        let mut distances = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let (a, b) = (&geometries[i], &geometries[j]);
                if planar.touches(a, b) {
                    contacts[i * n + j] = Some(planar.shared_boundary_length(a, b));
                }
                distances[i * n + j] = planar.distance(a, b);
            }
        }
        Self {
            perimeters: geometries.iter().map(|g| planar.perimeter(g)).collect(),
            centroids: geometries.iter().map(|g| planar.centroid(g)).collect(),
            overlaps: vec![None; n],
            contacts,
            distances,
            geometries,
            planar,
            touch_queries: AtomicUsize::new(0),
        }
    }

    pub fn with_perimeter(mut self, i: usize, perimeter: f64) -> Self {
        self.perimeters[i] = perimeter;
        self
    }

    pub fn with_centroid(mut self, i: usize, centroid: Option<Point<f64>>) -> Self {
        self.centroids[i] = centroid;
        self
    }

    /// Symmetric override of the distance between `i` and `j`.
    pub fn with_distance(mut self, i: usize, j: usize, distance: f64) -> Self {
        let n = self.geometries.len();
        self.distances[i * n + j] = distance;
        self.distances[j * n + i] = distance;
        self
    }

    /// Symmetric override of the contact between `i` and `j`: `None`
    /// means the pair does not touch.
    pub fn with_contact(mut self, i: usize, j: usize, shared_length: Option<f64>) -> Self {
        let n = self.geometries.len();
        self.contacts[i * n + j] = shared_length;
        self.contacts[j * n + i] = shared_length;
        self
    }

    /// Fixed coastline overlap for region `i`, whatever the linework.
    pub fn with_boundary_overlap(mut self, i: usize, length: f64) -> Self {
        self.overlaps[i] = Some(length);
        self
    }

    /// Number of `touches` calls so far.
    pub fn touch_queries(&self) -> usize {
        self.touch_queries.load(Ordering::Relaxed)
    }

    pub fn reset_counts(&self) {
        self.touch_queries.store(0, Ordering::Relaxed);
    }

    fn slot(&self, geometry: &MultiPolygon<f64>) -> usize {
        self.geometries
            .iter()
            .position(|g| g == geometry)
            .expect("TableKernel queried with a geometry it was not built with")
    }

    fn pair(&self, a: &MultiPolygon<f64>, b: &MultiPolygon<f64>) -> usize {
        self.slot(a) * self.geometries.len() + self.slot(b)
    }
}

impl GeometryKernel for TableKernel {
    fn perimeter(&self, geometry: &MultiPolygon<f64>) -> f64 {
        self.perimeters[self.slot(geometry)]
    }

    fn centroid(&self, geometry: &MultiPolygon<f64>) -> Option<Point<f64>> {
        self.centroids[self.slot(geometry)]
    }

    fn touches(&self, a: &MultiPolygon<f64>, b: &MultiPolygon<f64>) -> bool {
        self.touch_queries.fetch_add(1, Ordering::Relaxed);
        self.contacts[self.pair(a, b)].is_some()
    }

    fn shared_boundary_length(&self, a: &MultiPolygon<f64>, b: &MultiPolygon<f64>) -> f64 {
        self.contacts[self.pair(a, b)].unwrap_or(0.0)
    }

    fn distance(&self, a: &MultiPolygon<f64>, b: &MultiPolygon<f64>) -> f64 {
        self.distances[self.pair(a, b)]
    }

    fn outer_boundary(&self, geometries: &[&MultiPolygon<f64>]) -> MultiLineString<f64> {
        self.planar.outer_boundary(geometries)
    }

    fn boundary_overlap(&self, geometry: &MultiPolygon<f64>, lines: &MultiLineString<f64>) -> f64 {
        self.overlaps[self.slot(geometry)]
            .unwrap_or_else(|| self.planar.boundary_overlap(geometry, lines))
    }
}
