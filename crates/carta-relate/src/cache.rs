//! Lazily populated result slots owned by a [`GeometrySet`](crate::GeometrySet).
//!
//! Every slot is filled on first request and kept for the life of the set,
//! except the adjacency slots, whose retention follows
//! [`NeighbourCachePolicy`].

use carta_core::SquareMatrix;
use geo_types::MultiLineString;
use tracing::trace;

use crate::config::NeighbourCachePolicy;
use crate::orientation::OrientationRanks;

/// The adjacency matrices a set can hand out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NeighbourVariant {
    Binary,
    Fractional,
    CoastCorrected,
}

impl NeighbourVariant {
    fn slot(self) -> usize {
        match self {
            Self::Binary => 0,
            Self::Fractional => 1,
            Self::CoastCorrected => 2,
        }
    }
}

/// One slot per adjacency variant.
#[derive(Debug, Default)]
pub(crate) struct NeighbourSlots {
    slots: [Option<SquareMatrix>; 3],
}

impl NeighbourSlots {
    #[cfg(test)]
    pub(crate) fn get(&self, variant: NeighbourVariant) -> Option<&SquareMatrix> {
        self.slots[variant.slot()].as_ref()
    }

    pub(crate) fn take(&mut self, variant: NeighbourVariant) -> Option<SquareMatrix> {
        self.slots[variant.slot()].take()
    }

    /// Store `matrix` for `variant`. Under
    /// [`NeighbourCachePolicy::SingleSlot`] every other variant is dropped
    /// first, so at most one matrix is live.
    pub(crate) fn store(
        &mut self,
        variant: NeighbourVariant,
        matrix: SquareMatrix,
        policy: NeighbourCachePolicy,
    ) -> &SquareMatrix {
        if policy == NeighbourCachePolicy::SingleSlot {
            for (i, slot) in self.slots.iter_mut().enumerate() {
                if i != variant.slot() && slot.take().is_some() {
                    trace!(?variant, evicted = i, "single-slot neighbour cache evicted");
                }
            }
        }
        self.slots[variant.slot()].insert(matrix)
    }

    /// Number of live matrices.
    #[cfg(test)]
    pub(crate) fn live(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

/// All cached results of a [`GeometrySet`](crate::GeometrySet).
#[derive(Debug, Default)]
pub(crate) struct RelationCache {
    pub(crate) neighbours: NeighbourSlots,
    pub(crate) coastline_geometry: Option<MultiLineString<f64>>,
    pub(crate) explicit_coastline: Option<Vec<f64>>,
    pub(crate) derived_coastline: Option<Vec<f64>>,
    pub(crate) distances: Option<SquareMatrix>,
    pub(crate) orientation: Option<OrientationRanks>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_variant_keeps_every_matrix() {
        let mut slots = NeighbourSlots::default();
        let policy = NeighbourCachePolicy::PerVariant;
        slots.store(NeighbourVariant::Binary, SquareMatrix::filled(1, 1.0), policy);
        slots.store(NeighbourVariant::Fractional, SquareMatrix::filled(1, 0.5), policy);
        assert_eq!(slots.live(), 2);
        assert_eq!(slots.get(NeighbourVariant::Binary).map(|m| m[(0, 0)]), Some(1.0));
    }

    #[test]
    fn single_slot_evicts_other_variants() {
        let mut slots = NeighbourSlots::default();
        let policy = NeighbourCachePolicy::SingleSlot;
        slots.store(NeighbourVariant::Binary, SquareMatrix::filled(1, 1.0), policy);
        slots.store(NeighbourVariant::Fractional, SquareMatrix::filled(1, 0.5), policy);
        assert_eq!(slots.live(), 1);
        assert!(slots.get(NeighbourVariant::Binary).is_none());
        assert!(slots.get(NeighbourVariant::Fractional).is_some());
    }

    #[test]
    fn take_empties_the_slot() {
        let mut slots = NeighbourSlots::default();
        slots.store(
            NeighbourVariant::CoastCorrected,
            SquareMatrix::filled(2, 0.0),
            NeighbourCachePolicy::PerVariant,
        );
        assert!(slots.take(NeighbourVariant::CoastCorrected).is_some());
        assert_eq!(slots.live(), 0);
    }
}
