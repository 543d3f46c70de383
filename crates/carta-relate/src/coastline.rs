//! Coastline model: the fraction of each region's perimeter facing open
//! coast.
//!
//! Two strategies, selected by [`CoastlineStrategy`](crate::CoastlineStrategy):
//!
//! - [`explicit`] measures each boundary against a coastline linework
//!   (by default the dissolved outer boundary of all regions, see
//!   [`outer_coastline`]).
//! - [`derived`] takes one minus the row sums of the uncorrected
//!   fractional adjacency matrix.
//!
//! The two agree when neighbour detection is exact. Slivers and gaps make
//! the derived strategy over-report coast, because a missed neighbour's
//! border is counted as exposed.

use carta_core::{GeometryKernel, Region, RelationError, SquareMatrix};
use geo_types::{MultiLineString, MultiPolygon};
use tracing::{debug_span, trace, warn};

/// Dissolve all regions and keep the exterior rings.
///
/// Interior rings of the union (lakes, holes between regions) are not
/// part of the coastline.
pub fn outer_coastline<K: GeometryKernel>(regions: &[Region], kernel: &K) -> MultiLineString<f64> {
    let _span = debug_span!("outer_coastline", regions = regions.len()).entered();
    let geometries: Vec<&MultiPolygon<f64>> = regions.iter().map(|r| &r.geometry).collect();
    kernel.outer_boundary(&geometries)
}

/// Boundary length on `coastline` over perimeter, per region.
///
/// Returns `Err(RelationError::Geometry)` for a region with zero or
/// non-finite perimeter.
pub fn explicit<K: GeometryKernel>(
    regions: &[Region],
    kernel: &K,
    coastline: &MultiLineString<f64>,
) -> Result<Vec<f64>, RelationError> {
    let _span = debug_span!("explicit_coastline", regions = regions.len()).entered();
    regions
        .iter()
        .map(|region| {
            let perimeter = kernel.perimeter(&region.geometry);
            if !(perimeter.is_finite() && perimeter > 0.0) {
                warn!(region = %region.id, perimeter, "degenerate perimeter");
                return Err(RelationError::Geometry {
                    region: region.id.clone(),
                    reason: format!("perimeter is {perimeter}, cannot measure coastal share"),
                });
            }
            Ok(kernel.boundary_overlap(&region.geometry, coastline) / perimeter)
        })
        .collect()
}

/// `1 − Σⱼ weight(i, j)` per row of the uncorrected fractional adjacency
/// matrix.
///
/// Values below `noise_floor` are clamped to zero; values are never
/// clamped above.
pub fn derived(raw_weights: &SquareMatrix, noise_floor: f64) -> Vec<f64> {
    let _span = debug_span!("derived_coastline", regions = raw_weights.size()).entered();
    raw_weights
        .rows()
        .enumerate()
        .map(|(row, weights)| {
            let coast = 1.0 - weights.iter().sum::<f64>();
            if coast < noise_floor {
                trace!(row, coast, "coastal share below noise floor");
                0.0
            } else {
                coast
            }
        })
        .collect()
}
