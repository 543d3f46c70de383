//! Distance-rank model.
//!
//! Entry `(i, j)` is the rank of region `j`'s distance from region `i`
//! among all other regions: 1 for the nearest, ties averaged. Touching
//! regions are at distance zero. The diagonal is not ranked and keeps the
//! default value 0.

use carta_core::{
    average_ranks, DuplicatePolicy, GeometryKernel, IdentifierIndex, MatrixBuilder, Region,
    RelationError, SquareMatrix,
};
use tracing::{debug_span, warn};

/// Symmetric matrix of minimum distances between regions.
///
/// Each unordered pair is measured once. Returns
/// `Err(RelationError::Geometry)` if the kernel reports a negative or
/// non-finite distance, naming the lower-indexed region of the pair.
pub fn pairwise_distances<K: GeometryKernel>(
    regions: &[Region],
    kernel: &K,
) -> Result<SquareMatrix, RelationError> {
    let _span = debug_span!("pairwise_distances", regions = regions.len()).entered();
    let n = regions.len();
    let mut values = vec![0.0; n * n];
    for i in 0..n {
        for j in (i + 1)..n {
            let d = kernel.distance(&regions[i].geometry, &regions[j].geometry);
            if !d.is_finite() || d < 0.0 {
                warn!(region = %regions[i].id, other = %regions[j].id, distance = d, "invalid distance");
                return Err(RelationError::Geometry {
                    region: regions[i].id.clone(),
                    reason: format!("distance to '{}' is {d}", regions[j].id),
                });
            }
            values[i * n + j] = d;
            values[j * n + i] = d;
        }
    }
    SquareMatrix::from_row_major(n, values)
}

/// Per-row tie-averaged ranks of `distances`, scattered by region id.
pub fn distance_ranks(
    regions: &[Region],
    index: &IdentifierIndex,
    distances: &SquareMatrix,
    policy: DuplicatePolicy,
) -> Result<SquareMatrix, RelationError> {
    let _span = debug_span!("distance_ranks", regions = regions.len()).entered();
    let n = regions.len();
    let mut triples = Vec::with_capacity(n * n.saturating_sub(1));
    for (i, row) in distances.rows().enumerate() {
        let others: Vec<usize> = (0..n).filter(|&j| j != i).collect();
        let values: Vec<f64> = others.iter().map(|&j| row[j]).collect();
        for (&j, rank) in others.iter().zip(average_ranks(&values)) {
            triples.push((regions[i].id.as_str(), regions[j].id.as_str(), rank));
        }
    }
    MatrixBuilder::new(index, n)
        .duplicate_policy(policy)
        .build(triples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::homogenize::homogenize;
    use crate::RelationConfig;
    use carta_core::RegionRecord;
    use carta_geom::PlanarKernel;
    use carta_test_utils::{fixtures, TableKernel};
    use float_cmp::approx_eq;

    fn setup(records: Vec<RegionRecord>) -> (Vec<Region>, IdentifierIndex) {
        let config = RelationConfig::new(fixtures::ID_FIELD, fixtures::NAME_FIELD);
        let regions = homogenize(records, &config, &PlanarKernel::default()).unwrap();
        let index = IdentifierIndex::build(
            regions.iter().map(|r| r.id.clone()),
            regions.iter().map(|r| r.name.clone()),
        )
        .unwrap();
        (regions, index)
    }

    #[test]
    fn distances_are_symmetric_with_zero_diagonal() {
        let (regions, _) = setup(vec![
            fixtures::unit_square("A", "Alpha", 0.0, 0.0),
            fixtures::unit_square("B", "Beta", 2.0, 0.0),
            fixtures::unit_square("C", "Gamma", 5.0, 0.0),
        ]);
        let d = pairwise_distances(&regions, &PlanarKernel::default()).unwrap();
        assert!(approx_eq!(f64, d[(0, 1)], 1.0, epsilon = 1e-12));
        assert!(approx_eq!(f64, d[(0, 2)], 4.0, epsilon = 1e-12));
        assert!(approx_eq!(f64, d[(1, 2)], 2.0, epsilon = 1e-12));
        for i in 0..3 {
            assert_eq!(d[(i, i)], 0.0);
            for j in 0..3 {
                assert_eq!(d[(i, j)], d[(j, i)]);
            }
        }
    }

    #[test]
    fn nearest_neighbour_ranks_first() {
        let (regions, index) = setup(vec![
            fixtures::unit_square("A", "Alpha", 0.0, 0.0),
            fixtures::unit_square("B", "Beta", 2.0, 0.0),
            fixtures::unit_square("C", "Gamma", 5.0, 0.0),
        ]);
        let d = pairwise_distances(&regions, &PlanarKernel::default()).unwrap();
        let ranks = distance_ranks(&regions, &index, &d, DuplicatePolicy::LastWins).unwrap();
        assert_eq!(ranks.row(0), &[0.0, 1.0, 2.0]);
        assert_eq!(ranks.row(1), &[1.0, 0.0, 2.0]);
        assert_eq!(ranks.row(2), &[2.0, 1.0, 0.0]);
    }

    #[test]
    fn equidistant_regions_share_the_average_rank() {
        let (regions, index) = setup(vec![
            fixtures::unit_square("W", "West", 0.0, 0.0),
            fixtures::unit_square("M", "Middle", 2.0, 0.0),
            fixtures::unit_square("E", "East", 4.0, 0.0),
        ]);
        let d = pairwise_distances(&regions, &PlanarKernel::default()).unwrap();
        let ranks = distance_ranks(&regions, &index, &d, DuplicatePolicy::LastWins).unwrap();
        assert_eq!(ranks.row(1), &[1.5, 0.0, 1.5]);
    }

    #[test]
    fn touching_regions_are_at_distance_zero() {
        let (regions, _) = setup(fixtures::block_2x2());
        let d = pairwise_distances(&regions, &PlanarKernel::default()).unwrap();
        assert!(d.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn non_finite_distance_is_an_error() {
        let (regions, _) = setup(fixtures::strip(3));
        let kernel = TableKernel::for_regions(&regions).with_distance(1, 2, f64::NAN);
        let err = pairwise_distances(&regions, &kernel).unwrap_err();
        assert!(matches!(err, RelationError::Geometry { region, .. } if region == regions[1].id));
    }
}
