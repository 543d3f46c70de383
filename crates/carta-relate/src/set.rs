//! [`GeometrySet`]: the region collection every relationship model reads.

use carta_core::{
    GeometryKernel, IdentifierIndex, KeyKind, Region, RegionRecord, RelationError, SquareMatrix,
};
use carta_geom::PlanarKernel;
use geo_types::{MultiLineString, Point};
use smallvec::SmallVec;
use tracing::{debug, debug_span, trace};

use crate::cache::{NeighbourVariant, RelationCache};
use crate::coastline;
use crate::config::{BorderWeighting, CoastlineStrategy, RelationConfig};
use crate::distance;
use crate::homogenize::homogenize;
use crate::neighbours::NeighbourWeightModel;
use crate::orientation::OrientationRanks;

/// Homogenized regions in canonical order, their identifier index, and
/// lazily computed relationship results.
///
/// Region order is the input record order and never changes. Each result
/// is computed on first request and cached on the set; adjacency matrices
/// follow the configured [`NeighbourCachePolicy`](crate::NeighbourCachePolicy).
/// Cache population needs `&mut self`, so sharing a set across threads
/// requires external synchronization.
///
/// # Examples
///
/// ```
/// use carta_core::RegionRecord;
/// use carta_relate::{BorderWeighting, GeometrySet, RelationConfig};
/// use geo_types::polygon;
///
/// let square = |code: &str, name: &str, x: f64| {
///     RegionRecord::new(polygon![
///         (x: x, y: 0.0), (x: x + 1.0, y: 0.0), (x: x + 1.0, y: 1.0), (x: x, y: 1.0)
///     ])
///     .with_property("code", code)
///     .with_property("name", name)
/// };
/// let mut set = GeometrySet::build(
///     vec![square("a", "Alpha", 0.0), square("b", "Beta", 1.0)],
///     RelationConfig::new("code", "name"),
/// )
/// .unwrap();
///
/// let weights = set.neighbours(BorderWeighting::Fractional).unwrap();
/// assert_eq!(weights[(0, 1)], 0.25);
/// assert_eq!(weights[(1, 1)], 0.0);
/// ```
#[derive(Debug)]
pub struct GeometrySet<K = PlanarKernel> {
    regions: Vec<Region>,
    index: IdentifierIndex,
    config: RelationConfig,
    kernel: K,
    cache: RelationCache,
}

impl GeometrySet<PlanarKernel> {
    /// Build a set over `records` with the default planar kernel.
    ///
    /// Returns `Err(RelationError::InvalidInput)` if `config` is invalid or
    /// a record is malformed, `Err(RelationError::DuplicateKey)` on a
    /// repeated id or name, and `Err(RelationError::Geometry)` for an
    /// empty geometry.
    pub fn build(records: Vec<RegionRecord>, config: RelationConfig) -> Result<Self, RelationError> {
        Self::with_kernel(records, config, PlanarKernel::default())
    }
}

impl<K: GeometryKernel> GeometrySet<K> {
    /// Build a set over `records` with a caller-supplied kernel.
    pub fn with_kernel(
        records: Vec<RegionRecord>,
        config: RelationConfig,
        kernel: K,
    ) -> Result<Self, RelationError> {
        config.validate()?;
        let _span = debug_span!("geometry_set_build", records = records.len()).entered();
        let regions = homogenize(records, &config, &kernel)?;
        let index = IdentifierIndex::build(
            regions.iter().map(|r| r.id.as_str()),
            regions.iter().map(|r| r.name.as_str()),
        )?;
        debug!(regions = regions.len(), "geometry set built");
        Ok(Self {
            regions,
            index,
            config,
            kernel,
            cache: RelationCache::default(),
        })
    }

    /// Use `lines` as the explicit coastline instead of dissolving the
    /// regions. Clears every result derived from the previous coastline.
    pub fn with_coastline(mut self, lines: MultiLineString<f64>) -> Self {
        self.cache.coastline_geometry = Some(lines);
        self.cache.explicit_coastline = None;
        let _ = self.cache.neighbours.take(NeighbourVariant::CoastCorrected);
        self
    }

    // ── Accessors ──────────────────────────────────────────────

    /// Number of regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// True if the set holds no regions.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// All regions in canonical order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// The region at canonical index `i`.
    pub fn region(&self, i: usize) -> Result<&Region, RelationError> {
        self.regions.get(i).ok_or_else(|| RelationError::KeyNotFound {
            kind: KeyKind::Index,
            key: i.to_string(),
        })
    }

    /// Centroid of the region at canonical index `i`.
    pub fn centroid(&self, i: usize) -> Result<Point<f64>, RelationError> {
        self.region(i).map(|r| r.centroid)
    }

    /// The id/name/index lookup, in the same order as [`regions`](Self::regions).
    pub fn index(&self) -> &IdentifierIndex {
        &self.index
    }

    /// Region ids in canonical order.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.index.ids()
    }

    /// Region names in canonical order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.index.names()
    }

    /// The configuration the set was built with.
    pub fn config(&self) -> &RelationConfig {
        &self.config
    }

    /// The geometry kernel.
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    // ── Relationships ──────────────────────────────────────────

    /// Adjacency matrix under `weighting`.
    ///
    /// Fractional weights are coastal-corrected when the configuration
    /// enables it, always against the explicit coastline.
    pub fn neighbours(&mut self, weighting: BorderWeighting) -> Result<&SquareMatrix, RelationError> {
        let variant = match weighting {
            BorderWeighting::Binary => NeighbourVariant::Binary,
            BorderWeighting::Fractional if self.config.coastal_correction => {
                NeighbourVariant::CoastCorrected
            }
            BorderWeighting::Fractional => NeighbourVariant::Fractional,
        };
        self.neighbour_variant(variant)
    }

    /// Indices of the regions bordering region `id`, ascending.
    pub fn neighbours_of(&mut self, id: &str) -> Result<SmallVec<[usize; 8]>, RelationError> {
        let row = self.index.id_to_index(id)?;
        let binary = self.neighbour_variant(NeighbourVariant::Binary)?;
        Ok(binary
            .row(row)
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w != 0.0)
            .map(|(j, _)| j)
            .collect())
    }

    /// Coastal fraction of each region under the configured strategy.
    pub fn coastline(&mut self) -> Result<&[f64], RelationError> {
        match self.config.coastline {
            CoastlineStrategy::Explicit => self.explicit_coastline(),
            CoastlineStrategy::Derived => self.derived_coastline(),
        }
    }

    /// The explicit coastline linework: exterior rings of the dissolved
    /// regions, unless one was supplied with
    /// [`with_coastline`](Self::with_coastline).
    pub fn coastline_geometry(&mut self) -> &MultiLineString<f64> {
        self.cache
            .coastline_geometry
            .get_or_insert_with(|| coastline::outer_coastline(&self.regions, &self.kernel))
    }

    /// Distance-rank matrix: `(i, j)` is the tie-averaged rank of `j`'s
    /// distance from `i`, 1 for the nearest.
    pub fn distances(&mut self) -> Result<&SquareMatrix, RelationError> {
        let ranks = match self.cache.distances.take() {
            Some(ranks) => ranks,
            None => {
                let raw = distance::pairwise_distances(&self.regions, &self.kernel)?;
                distance::distance_ranks(
                    &self.regions,
                    &self.index,
                    &raw,
                    self.config.duplicate_policy,
                )?
            }
        };
        Ok(self.cache.distances.insert(ranks))
    }

    /// Centroid ranks along both axes.
    pub fn orientation(&mut self) -> &OrientationRanks {
        self.cache
            .orientation
            .get_or_insert_with(|| OrientationRanks::from_regions(&self.regions))
    }

    // ── Internals ──────────────────────────────────────────────

    fn model(&self) -> NeighbourWeightModel<'_, K> {
        NeighbourWeightModel::new(&self.regions, &self.index, &self.kernel)
            .contiguity(self.config.contiguity)
            .duplicate_policy(self.config.duplicate_policy)
    }

    fn neighbour_variant(&mut self, variant: NeighbourVariant) -> Result<&SquareMatrix, RelationError> {
        let matrix = match self.cache.neighbours.take(variant) {
            Some(matrix) => {
                trace!(?variant, "neighbour cache hit");
                matrix
            }
            None => {
                debug!(?variant, policy = ?self.config.neighbour_cache, "neighbour cache miss");
                match variant {
                    NeighbourVariant::Binary => self.model().binary()?,
                    NeighbourVariant::Fractional => self.model().fractional()?,
                    NeighbourVariant::CoastCorrected => {
                        let coast = self.explicit_coastline()?.to_vec();
                        self.model().coast_corrected(&coast)?
                    }
                }
            }
        };
        Ok(self
            .cache
            .neighbours
            .store(variant, matrix, self.config.neighbour_cache))
    }

    fn explicit_coastline(&mut self) -> Result<&[f64], RelationError> {
        let values = match self.cache.explicit_coastline.take() {
            Some(values) => values,
            None => {
                let lines = self
                    .cache
                    .coastline_geometry
                    .get_or_insert_with(|| coastline::outer_coastline(&self.regions, &self.kernel));
                coastline::explicit(&self.regions, &self.kernel, lines)?
            }
        };
        Ok(self.cache.explicit_coastline.insert(values))
    }

    fn derived_coastline(&mut self) -> Result<&[f64], RelationError> {
        let values = match self.cache.derived_coastline.take() {
            Some(values) => values,
            None => {
                let floor = self.config.coastal_noise_floor;
                let raw = self.neighbour_variant(NeighbourVariant::Fractional)?;
                coastline::derived(raw, floor)
            }
        };
        Ok(self.cache.derived_coastline.insert(values))
    }
}
