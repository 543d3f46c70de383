//! Record homogenization: records in, regions out, input order kept.

use carta_core::{GeometryKernel, Region, RegionRecord, RelationError};
use geo_types::{Geometry, MultiPolygon};

use crate::config::RelationConfig;

fn property<'r>(
    record: &'r RegionRecord,
    field: &str,
    position: usize,
) -> Result<&'r str, RelationError> {
    record
        .property(field)
        .ok_or_else(|| RelationError::InvalidInput {
            reason: format!("record {position} has no '{field}' property"),
        })
}

fn kind_name(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}

/// Turn records into regions in input order.
///
/// Extracts id and name from the configured properties, promotes polygons
/// to multipolygons, and computes each centroid through `kernel`.
pub(crate) fn homogenize<K: GeometryKernel>(
    records: Vec<RegionRecord>,
    config: &RelationConfig,
    kernel: &K,
) -> Result<Vec<Region>, RelationError> {
    records
        .into_iter()
        .enumerate()
        .map(|(position, record)| {
            let id = property(&record, &config.id_field, position)?.to_owned();
            let name = property(&record, &config.name_field, position)?.to_owned();
            let geometry = match record.geometry {
                Geometry::Polygon(poly) => MultiPolygon::new(vec![poly]),
                Geometry::MultiPolygon(multi) => multi,
                other => {
                    return Err(RelationError::InvalidInput {
                        reason: format!(
                            "region '{id}' has non-polygonal geometry ({})",
                            kind_name(&other)
                        ),
                    })
                }
            };
            let centroid = kernel
                .centroid(&geometry)
                .ok_or_else(|| RelationError::Geometry {
                    region: id.clone(),
                    reason: "geometry is empty and has no centroid".into(),
                })?;
            Ok(Region {
                id,
                name,
                geometry,
                centroid,
            })
        })
        .collect()
}
