//! Spatial relationships between the regions of a cartogram.
//!
//! A [`GeometrySet`] is built once from region records and hands out the
//! relationship results the layout stage consumes: adjacency weights,
//! coastal exposure, distance ranks and compass orientation. Each model is
//! also usable on its own over a slice of [`Region`]s.
//!
//! Ordering between models: the derived coastline reads the uncorrected
//! fractional adjacency matrix, and coastal correction reads the explicit
//! coastline, so neither depends on its own output.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod cache;
pub mod coastline;
pub mod config;
pub mod distance;
mod homogenize;
pub mod neighbours;
pub mod orientation;
pub mod set;

pub use carta_core::{Region, RegionRecord, RelationError};
pub use config::{
    BorderWeighting, CoastlineStrategy, Contiguity, NeighbourCachePolicy, RelationConfig,
    DEFAULT_COASTAL_NOISE_FLOOR, RESERVED_FIELDS,
};
pub use neighbours::{Contact, NeighbourWeightModel};
pub use orientation::OrientationRanks;
pub use set::GeometrySet;
