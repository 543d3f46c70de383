//! Planar geometry kernel for Carta.
//!
//! [`PlanarKernel`] implements [`carta_core::GeometryKernel`] with the
//! `geo` crate for topology predicates, centroids, lengths and unions,
//! and with exact collinear-overlap arithmetic (see [`segment`]) for the
//! shared-border lengths that `geo` does not expose directly.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod planar;
pub mod segment;

pub use planar::PlanarKernel;
