//! Orientation model: where each region sits on the compass axes.

use carta_core::{average_ranks, Region};
use tracing::debug_span;

/// 0-based, tie-averaged ranks of region centroids along each axis, in
/// canonical region order.
///
/// Rank 0 is the smallest coordinate: southernmost for `north_south`,
/// westernmost for `east_west`. Tied coordinates share the mean of their
/// ranks, so values can be half-integers.
#[derive(Clone, Debug, PartialEq)]
pub struct OrientationRanks {
    /// Rank of each centroid's `y`.
    pub north_south: Vec<f64>,
    /// Rank of each centroid's `x`.
    pub east_west: Vec<f64>,
}

impl OrientationRanks {
    /// Rank both centroid axes of `regions`.
    pub fn from_regions(regions: &[Region]) -> Self {
        let _span = debug_span!("orientation_ranks", regions = regions.len()).entered();
        let xs: Vec<f64> = regions.iter().map(|r| r.centroid.x()).collect();
        let ys: Vec<f64> = regions.iter().map(|r| r.centroid.y()).collect();
        Self {
            north_south: zero_based(&ys),
            east_west: zero_based(&xs),
        }
    }

    /// `(north_south, east_west)`.
    pub fn into_pair(self) -> (Vec<f64>, Vec<f64>) {
        (self.north_south, self.east_west)
    }
}

fn zero_based(values: &[f64]) -> Vec<f64> {
    average_ranks(values).into_iter().map(|r| r - 1.0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::{point, MultiPolygon};

    fn at(id: &str, x: f64, y: f64) -> Region {
        Region {
            id: id.into(),
            name: id.to_uppercase(),
            geometry: MultiPolygon::new(Vec::new()),
            centroid: point!(x: x, y: y),
        }
    }

    #[test]
    fn ranks_are_zero_based_per_axis() {
        let regions = [at("a", 3.0, -1.0), at("b", 1.0, 5.0), at("c", 2.0, 0.0)];
        let ranks = OrientationRanks::from_regions(&regions);
        assert_eq!(ranks.east_west, vec![2.0, 0.0, 1.0]);
        assert_eq!(ranks.north_south, vec![0.0, 2.0, 1.0]);
    }

    #[test]
    fn ties_share_the_average() {
        let regions = [at("a", 0.0, 1.0), at("b", 0.0, 1.0), at("c", 1.0, 0.0)];
        let (north_south, east_west) = OrientationRanks::from_regions(&regions).into_pair();
        assert_eq!(east_west, vec![0.5, 0.5, 2.0]);
        assert_eq!(north_south, vec![1.5, 1.5, 0.0]);
    }

    #[test]
    fn no_regions_no_ranks() {
        let ranks = OrientationRanks::from_regions(&[]);
        assert!(ranks.north_south.is_empty());
        assert!(ranks.east_west.is_empty());
    }
}
