//! Carta: spatial relationships between the regions of a cartogram.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Carta sub-crates. For most users, adding `carta` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use carta::prelude::*;
//! use geo_types::polygon;
//!
//! let square = |code: &str, name: &str, x: f64, y: f64| {
//!     RegionRecord::new(polygon![
//!         (x: x, y: y), (x: x + 1.0, y: y), (x: x + 1.0, y: y + 1.0), (x: x, y: y + 1.0)
//!     ])
//!     .with_property("code", code)
//!     .with_property("name", name)
//! };
//! let records = vec![
//!     square("sw", "South West", 0.0, 0.0),
//!     square("se", "South East", 1.0, 0.0),
//!     square("nw", "North West", 0.0, 1.0),
//!     square("ne", "North East", 1.0, 1.0),
//! ];
//!
//! let mut set = GeometrySet::build(records, RelationConfig::new("code", "name")).unwrap();
//! let binary = set.neighbours(BorderWeighting::Binary).unwrap();
//! assert_eq!(binary.row(0), &[0.0, 1.0, 1.0, 0.0]);
//! assert_eq!(set.coastline().unwrap(), &[0.5, 0.5, 0.5, 0.5]);
//!
//! // Place the four regions on a 3x3 lattice centred on the origin.
//! let lattice = SquareLattice::new(3, 1.0, (1.0, 1.0)).unwrap();
//! assert_eq!(lattice.cell_to_geo(4).unwrap(), (0.0, 0.0));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `carta-core` | Errors, identifier index, matrices, ranking, the kernel trait |
//! | [`geom`] | `carta-geom` | The planar geometry kernel |
//! | [`relate`] | `carta-relate` | Region sets and the relationship models |
//! | [`grid`] | `carta-grid` | Square-lattice cell indexing |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`carta-core`).
///
/// [`types::IdentifierIndex`], [`types::SquareMatrix`] with its
/// [`types::MatrixBuilder`], and the [`types::GeometryKernel`] trait.
pub use carta_core as types;

/// Planar geometry kernel (`carta-geom`).
pub use carta_geom as geom;

/// Region sets and relationship models (`carta-relate`).
///
/// Build a [`relate::GeometrySet`] once, then request adjacency weights,
/// coastlines, distance ranks and orientation from it.
pub use carta_relate as relate;

/// Square-lattice indexing (`carta-grid`).
pub use carta_grid as grid;

/// Common imports for typical Carta usage.
///
/// ```rust
/// use carta::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use carta_core::{
        DuplicatePolicy, GeometryKernel, IdentifierIndex, KeyKind, Region, RegionRecord,
        SquareMatrix,
    };

    // Errors
    pub use carta_core::RelationError;
    pub use carta_grid::GridError;

    // Geometry
    pub use carta_geom::PlanarKernel;

    // Relationships
    pub use carta_relate::{
        BorderWeighting, CoastlineStrategy, Contiguity, GeometrySet, NeighbourCachePolicy,
        OrientationRanks, RelationConfig,
    };

    // Lattice
    pub use carta_grid::SquareLattice;
}
