//! Core types and traits for the Carta region-relationship engine.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! pieces every relationship model shares: the error type, region
//! records, the bidirectional id/name/index lookup, the dense square
//! matrix with its id-keyed builder, tie-averaged ranking, and the
//! [`GeometryKernel`] capability trait through which all geometric
//! primitives are reached.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod index;
pub mod kernel;
pub mod matrix;
pub mod rank;
pub mod region;

pub use error::{KeyKind, RelationError};
pub use index::IdentifierIndex;
pub use kernel::GeometryKernel;
pub use matrix::{DuplicatePolicy, MatrixBuilder, SquareMatrix};
pub use rank::average_ranks;
pub use region::{Region, RegionRecord};
