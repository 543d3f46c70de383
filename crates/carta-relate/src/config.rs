//! Relationship configuration and validation.
//!
//! [`RelationConfig`] names the id and name properties of the input
//! records and selects the model variants. [`validate()`](RelationConfig::validate)
//! runs eagerly when a [`GeometrySet`](crate::GeometrySet) is built.

use carta_core::{DuplicatePolicy, RelationError};

/// Property names reserved for internal use; neither may serve as the id
/// or name field.
pub const RESERVED_FIELDS: [&str; 2] = ["__dummy__", "__centroid__"];

/// Default lower bound below which a derived coastal fraction is treated
/// as precision noise and clamped to zero.
pub const DEFAULT_COASTAL_NOISE_FLOOR: f64 = 0.01;

// ── CoastlineStrategy ──────────────────────────────────────────────

/// How each region's coastal exposure is computed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CoastlineStrategy {
    /// `1 − Σ` of the uncorrected fractional neighbour weights, with
    /// values under the noise floor clamped to zero.
    #[default]
    Derived,
    /// Length of the region's boundary lying on the dissolved outer
    /// boundary of all regions, over its perimeter.
    Explicit,
}

// ── Contiguity ─────────────────────────────────────────────────────

/// Which kind of boundary contact makes two regions neighbours.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Contiguity {
    /// Boundaries touch along a stretch of positive length.
    #[default]
    Rook,
    /// Boundaries touch anywhere, including at a single point.
    Queen,
}

// ── BorderWeighting ────────────────────────────────────────────────

/// Weighting of an adjacency matrix entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BorderWeighting {
    /// 1.0 for every touching pair.
    Binary,
    /// Shared border length over the row region's perimeter.
    Fractional,
}

// ── NeighbourCachePolicy ───────────────────────────────────────────

/// How adjacency matrices are memoized on a [`GeometrySet`](crate::GeometrySet).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NeighbourCachePolicy {
    /// Each weighting variant is computed once and kept.
    #[default]
    PerVariant,
    /// One live slot: requesting a variant other than the last one
    /// computed discards the cached matrix and recomputes.
    SingleSlot,
}

// ── RelationConfig ─────────────────────────────────────────────────

/// Configuration for building a [`GeometrySet`](crate::GeometrySet).
#[derive(Clone, Debug, PartialEq)]
pub struct RelationConfig {
    /// Property holding each region's unique id.
    pub id_field: String,
    /// Property holding each region's unique display name.
    pub name_field: String,
    /// Coastal exposure strategy. Default: [`CoastlineStrategy::Derived`].
    pub coastline: CoastlineStrategy,
    /// Divide fractional weights by each row region's non-coastal share.
    /// Always uses the explicit coastline. Default: false.
    pub coastal_correction: bool,
    /// Neighbour definition. Default: [`Contiguity::Rook`].
    pub contiguity: Contiguity,
    /// Derived coastal fractions below this are clamped to zero.
    /// Default: [`DEFAULT_COASTAL_NOISE_FLOOR`].
    pub coastal_noise_floor: f64,
    /// Adjacency memoization. Default: [`NeighbourCachePolicy::PerVariant`].
    pub neighbour_cache: NeighbourCachePolicy,
    /// Duplicate `(row, col)` handling in matrix scatters.
    pub duplicate_policy: DuplicatePolicy,
}

impl RelationConfig {
    /// Configuration with the given id and name properties and default
    /// settings otherwise.
    pub fn new(id_field: impl Into<String>, name_field: impl Into<String>) -> Self {
        Self {
            id_field: id_field.into(),
            name_field: name_field.into(),
            coastline: CoastlineStrategy::default(),
            coastal_correction: false,
            contiguity: Contiguity::default(),
            coastal_noise_floor: DEFAULT_COASTAL_NOISE_FLOOR,
            neighbour_cache: NeighbourCachePolicy::default(),
            duplicate_policy: DuplicatePolicy::default(),
        }
    }

    /// Select the coastline strategy.
    pub fn with_coastline(mut self, strategy: CoastlineStrategy) -> Self {
        self.coastline = strategy;
        self
    }

    /// Enable or disable coastal correction of fractional weights.
    pub fn with_coastal_correction(mut self, enabled: bool) -> Self {
        self.coastal_correction = enabled;
        self
    }

    /// Select the contiguity rule.
    pub fn with_contiguity(mut self, contiguity: Contiguity) -> Self {
        self.contiguity = contiguity;
        self
    }

    /// Select the neighbour cache policy.
    pub fn with_neighbour_cache(mut self, policy: NeighbourCachePolicy) -> Self {
        self.neighbour_cache = policy;
        self
    }

    /// Check structural invariants.
    ///
    /// Rejects reserved or identical id/name fields and a noise floor
    /// outside `[0, 1)`.
    pub fn validate(&self) -> Result<(), RelationError> {
        for field in [&self.id_field, &self.name_field] {
            if RESERVED_FIELDS.contains(&field.as_str()) {
                return Err(RelationError::InvalidInput {
                    reason: format!("'{field}' is a reserved field name"),
                });
            }
        }
        if self.id_field == self.name_field {
            return Err(RelationError::InvalidInput {
                reason: format!(
                    "id and name fields must differ, both are '{}'",
                    self.id_field
                ),
            });
        }
        if !self.coastal_noise_floor.is_finite()
            || !(0.0..1.0).contains(&self.coastal_noise_floor)
        {
            return Err(RelationError::InvalidInput {
                reason: format!(
                    "coastal_noise_floor must be in [0, 1), got {}",
                    self.coastal_noise_floor
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let config = RelationConfig::new("code", "name");
        assert!(config.validate().is_ok());
        assert_eq!(config.coastline, CoastlineStrategy::Derived);
        assert_eq!(config.contiguity, Contiguity::Rook);
        assert_eq!(config.neighbour_cache, NeighbourCachePolicy::PerVariant);
        assert!(!config.coastal_correction);
    }

    #[test]
    fn reserved_fields_are_rejected() {
        for reserved in RESERVED_FIELDS {
            assert!(matches!(
                RelationConfig::new(reserved, "name").validate(),
                Err(RelationError::InvalidInput { .. })
            ));
            assert!(matches!(
                RelationConfig::new("code", reserved).validate(),
                Err(RelationError::InvalidInput { .. })
            ));
        }
    }

    #[test]
    fn identical_fields_are_rejected() {
        assert!(matches!(
            RelationConfig::new("code", "code").validate(),
            Err(RelationError::InvalidInput { .. })
        ));
    }

    #[test]
    fn noise_floor_must_be_a_fraction() {
        let mut config = RelationConfig::new("code", "name");
        config.coastal_noise_floor = 1.0;
        assert!(config.validate().is_err());
        config.coastal_noise_floor = f64::NAN;
        assert!(config.validate().is_err());
        config.coastal_noise_floor = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_methods_set_fields() {
        let config = RelationConfig::new("code", "name")
            .with_coastline(CoastlineStrategy::Explicit)
            .with_coastal_correction(true)
            .with_contiguity(Contiguity::Queen)
            .with_neighbour_cache(NeighbourCachePolicy::SingleSlot);
        assert_eq!(config.coastline, CoastlineStrategy::Explicit);
        assert!(config.coastal_correction);
        assert_eq!(config.contiguity, Contiguity::Queen);
        assert_eq!(config.neighbour_cache, NeighbourCachePolicy::SingleSlot);
    }
}
