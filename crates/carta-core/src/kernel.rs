//! The geometry capability interface.
//!
//! Relationship models never call a geometry library directly; every
//! primitive they need goes through [`GeometryKernel`], so the models are
//! independent of which kernel computes perimeters, contacts and
//! distances.

use geo_types::{MultiLineString, MultiPolygon, Point};

/// Geometric primitives required by the relationship models.
///
/// All region geometries are homogenized to [`MultiPolygon`] before they
/// reach the kernel. Implementations are infallible; the models validate
/// the returned quantities (zero perimeters, non-finite distances) and
/// report failures with the offending region's id.
pub trait GeometryKernel {
    /// Total boundary length (exterior and interior rings).
    fn perimeter(&self, geometry: &MultiPolygon<f64>) -> f64;

    /// Area-weighted centroid, or `None` for an empty geometry.
    fn centroid(&self, geometry: &MultiPolygon<f64>) -> Option<Point<f64>>;

    /// Cheap conservative prefilter: `false` only if `a` and `b` certainly
    /// do not touch. The default never rules a pair out.
    fn may_touch(&self, _a: &MultiPolygon<f64>, _b: &MultiPolygon<f64>) -> bool {
        true
    }

    /// True if the boundaries meet and the interiors do not intersect.
    fn touches(&self, a: &MultiPolygon<f64>, b: &MultiPolygon<f64>) -> bool;

    /// Length of the boundary shared by `a` and `b`, summed over every
    /// shared segment. Zero for point contacts.
    fn shared_boundary_length(&self, a: &MultiPolygon<f64>, b: &MultiPolygon<f64>) -> f64;

    /// Minimum distance between `a` and `b`; zero if they intersect or
    /// touch.
    fn distance(&self, a: &MultiPolygon<f64>, b: &MultiPolygon<f64>) -> f64;

    /// Exterior rings of the union of all `geometries`: the outer
    /// coastline of the region collection.
    fn outer_boundary(&self, geometries: &[&MultiPolygon<f64>]) -> MultiLineString<f64>;

    /// Length of `geometry`'s boundary lying on `lines`.
    fn boundary_overlap(&self, geometry: &MultiPolygon<f64>, lines: &MultiLineString<f64>) -> f64;
}

impl<K: GeometryKernel + ?Sized> GeometryKernel for &K {
    fn perimeter(&self, geometry: &MultiPolygon<f64>) -> f64 {
        (**self).perimeter(geometry)
    }

    fn centroid(&self, geometry: &MultiPolygon<f64>) -> Option<Point<f64>> {
        (**self).centroid(geometry)
    }

    fn may_touch(&self, a: &MultiPolygon<f64>, b: &MultiPolygon<f64>) -> bool {
        (**self).may_touch(a, b)
    }

    fn touches(&self, a: &MultiPolygon<f64>, b: &MultiPolygon<f64>) -> bool {
        (**self).touches(a, b)
    }

    fn shared_boundary_length(&self, a: &MultiPolygon<f64>, b: &MultiPolygon<f64>) -> f64 {
        (**self).shared_boundary_length(a, b)
    }

    fn distance(&self, a: &MultiPolygon<f64>, b: &MultiPolygon<f64>) -> f64 {
        (**self).distance(a, b)
    }

    fn outer_boundary(&self, geometries: &[&MultiPolygon<f64>]) -> MultiLineString<f64> {
        (**self).outer_boundary(geometries)
    }

    fn boundary_overlap(&self, geometry: &MultiPolygon<f64>, lines: &MultiLineString<f64>) -> f64 {
        (**self).boundary_overlap(geometry, lines)
    }
}
