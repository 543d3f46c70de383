//! Square-lattice indexing for cartogram cell placement.
//!
//! A [`SquareLattice`] maps between cell numbers, `(col, row)` grid
//! positions and planar coordinates. It has no dependency on region data.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod lattice;

pub use error::GridError;
pub use lattice::SquareLattice;
