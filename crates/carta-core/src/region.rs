//! Region records as supplied by callers, and homogenized regions.

use geo_types::{Geometry, MultiPolygon, Point};
use indexmap::IndexMap;

/// A raw input record: string properties plus one geometry.
///
/// Which properties serve as id and name is decided when the record set
/// is built, not by the record.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionRecord {
    /// Named attributes, in insertion order.
    pub properties: IndexMap<String, String>,
    /// The region's shape. Must be a `Polygon` or `MultiPolygon`.
    pub geometry: Geometry<f64>,
}

impl RegionRecord {
    /// A record with no properties.
    pub fn new(geometry: impl Into<Geometry<f64>>) -> Self {
        Self {
            properties: IndexMap::new(),
            geometry: geometry.into(),
        }
    }

    /// Add or replace a property.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Look up a property.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}

/// A homogenized region: id, name, multipolygon geometry and centroid.
#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    /// Unique opaque id.
    pub id: String,
    /// Unique display name.
    pub name: String,
    /// Geometry, promoted to a multipolygon.
    pub geometry: MultiPolygon<f64>,
    /// Centroid, computed once at construction.
    pub centroid: Point<f64>,
}
