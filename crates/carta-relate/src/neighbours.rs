//! Neighbour-weight model: who borders whom, and by how much.
//!
//! Entry `(i, j)` of the adjacency matrix is the fraction of region `i`'s
//! perimeter shared with region `j` (or 1.0 in binary mode). The matrix is
//! not symmetric and its diagonal is always zero.

use carta_core::{
    DuplicatePolicy, GeometryKernel, IdentifierIndex, MatrixBuilder, Region, RelationError,
    SquareMatrix,
};
use tracing::{debug, debug_span, warn};

use crate::config::Contiguity;

/// An unordered pair of neighbouring regions, `first < second`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    /// Lower canonical index.
    pub first: usize,
    /// Higher canonical index.
    pub second: usize,
    /// Length of boundary the two regions share.
    pub shared_length: f64,
}

/// Computes adjacency matrices over a region collection.
///
/// Each unordered pair is tested once; the kernel's `may_touch`
/// prefilter skips pairs that cannot be in contact, and output does not
/// depend on it.
#[derive(Debug)]
pub struct NeighbourWeightModel<'a, K> {
    regions: &'a [Region],
    index: &'a IdentifierIndex,
    kernel: &'a K,
    contiguity: Contiguity,
    duplicate_policy: DuplicatePolicy,
}

impl<'a, K: GeometryKernel> NeighbourWeightModel<'a, K> {
    /// Model over `regions`, whose canonical order must match `index`.
    pub fn new(regions: &'a [Region], index: &'a IdentifierIndex, kernel: &'a K) -> Self {
        Self {
            regions,
            index,
            kernel,
            contiguity: Contiguity::default(),
            duplicate_policy: DuplicatePolicy::default(),
        }
    }

    /// Set the contiguity rule (default: [`Contiguity::Rook`]).
    pub fn contiguity(mut self, contiguity: Contiguity) -> Self {
        self.contiguity = contiguity;
        self
    }

    /// Set the scatter duplicate policy.
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Every neighbouring pair under the configured contiguity rule.
    pub fn contacts(&self) -> Vec<Contact> {
        let n = self.regions.len();
        let mut contacts = Vec::new();
        for first in 0..n {
            let a = &self.regions[first].geometry;
            for second in (first + 1)..n {
                let b = &self.regions[second].geometry;
                if !self.kernel.may_touch(a, b) || !self.kernel.touches(a, b) {
                    continue;
                }
                let shared_length = self.kernel.shared_boundary_length(a, b);
                if self.contiguity == Contiguity::Rook && shared_length <= 0.0 {
                    continue;
                }
                contacts.push(Contact {
                    first,
                    second,
                    shared_length,
                });
            }
        }
        debug!(regions = n, contacts = contacts.len(), "neighbour contacts found");
        contacts
    }

    /// Adjacency matrix with 1.0 for every neighbouring pair.
    pub fn binary(&self) -> Result<SquareMatrix, RelationError> {
        let _span = debug_span!("binary_weights", regions = self.regions.len()).entered();
        let triples = self
            .contacts()
            .into_iter()
            .flat_map(|c| [(c.first, c.second, 1.0), (c.second, c.first, 1.0)]);
        self.scatter(triples)
    }

    /// Adjacency matrix of shared border over row perimeter.
    ///
    /// Returns `Err(RelationError::Geometry)` if a region with a neighbour
    /// has zero (or non-finite) perimeter.
    pub fn fractional(&self) -> Result<SquareMatrix, RelationError> {
        let _span = debug_span!("fractional_weights", regions = self.regions.len()).entered();
        let triples = self.fractional_triples()?;
        self.scatter(triples)
    }

    /// Fractional weights divided by each row region's non-coastal share,
    /// `1 − coastline[i]`.
    ///
    /// Returns `Err(RelationError::Geometry)` if a region with a neighbour
    /// has a coastal fraction of 1 or more, and
    /// `Err(RelationError::InvalidInput)` if `coastline` has the wrong
    /// length.
    pub fn coast_corrected(&self, coastline: &[f64]) -> Result<SquareMatrix, RelationError> {
        let _span = debug_span!("coast_corrected_weights", regions = self.regions.len()).entered();
        if coastline.len() != self.regions.len() {
            return Err(RelationError::InvalidInput {
                reason: format!(
                    "coastline has {} entries for {} regions",
                    coastline.len(),
                    self.regions.len()
                ),
            });
        }
        let mut triples = self.fractional_triples()?;
        for (row, _, weight) in &mut triples {
            let inland = 1.0 - coastline[*row];
            if inland <= 0.0 {
                let region = self.regions[*row].id.clone();
                warn!(%region, coastal = coastline[*row], "fully coastal region has a neighbour");
                return Err(RelationError::Geometry {
                    region,
                    reason: format!(
                        "coastal fraction {} leaves no inland border to normalise by",
                        coastline[*row]
                    ),
                });
            }
            *weight /= inland;
        }
        self.scatter(triples)
    }

    fn fractional_triples(&self) -> Result<Vec<(usize, usize, f64)>, RelationError> {
        let contacts = self.contacts();
        let mut triples = Vec::with_capacity(contacts.len() * 2);
        for c in contacts {
            let forward = c.shared_length / self.perimeter(c.first)?;
            let backward = c.shared_length / self.perimeter(c.second)?;
            triples.push((c.first, c.second, forward));
            triples.push((c.second, c.first, backward));
        }
        Ok(triples)
    }

    fn perimeter(&self, i: usize) -> Result<f64, RelationError> {
        let region = &self.regions[i];
        let perimeter = self.kernel.perimeter(&region.geometry);
        if perimeter.is_finite() && perimeter > 0.0 {
            Ok(perimeter)
        } else {
            warn!(region = %region.id, perimeter, "degenerate perimeter");
            Err(RelationError::Geometry {
                region: region.id.clone(),
                reason: format!("perimeter is {perimeter}, cannot normalise shared border"),
            })
        }
    }

    fn scatter(
        &self,
        triples: impl IntoIterator<Item = (usize, usize, f64)>,
    ) -> Result<SquareMatrix, RelationError> {
        let regions = self.regions;
        MatrixBuilder::new(self.index, regions.len())
            .duplicate_policy(self.duplicate_policy)
            .build(
                triples
                    .into_iter()
                    .map(|(row, col, w)| (regions[row].id.as_str(), regions[col].id.as_str(), w)),
            )
    }
}
