//! Error types for lattice construction and lookups.

use std::fmt;

/// Errors arising from lattice construction or cell/coordinate lookups.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Attempted to construct a lattice with zero cells per side.
    EmptyLattice,
    /// The scale factor is not a finite positive number.
    InvalidScale {
        /// The rejected scale factor.
        value: f64,
    },
    /// Cells per side exceeds the supported maximum.
    DimensionTooLarge {
        /// The requested cells per side.
        value: u32,
        /// The maximum allowed.
        max: u32,
    },
    /// A cell number is outside `[0, cell_count)`.
    CellOutOfRange {
        /// The offending cell number.
        cell: u64,
        /// Number of cells in the lattice.
        cell_count: u64,
    },
    /// A grid position is outside `[0, num_cells)` on either axis.
    GridOutOfRange {
        /// Column.
        col: u32,
        /// Row.
        row: u32,
        /// Cells per side.
        num_cells: u32,
    },
    /// A coordinate or offset is NaN or infinite.
    NonFiniteCoordinate {
        /// x component.
        x: f64,
        /// y component.
        y: f64,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLattice => write!(f, "lattice must have at least one cell per side"),
            Self::InvalidScale { value } => {
                write!(f, "scale factor must be finite and positive, got {value}")
            }
            Self::DimensionTooLarge { value, max } => {
                write!(f, "{value} cells per side exceeds maximum {max}")
            }
            Self::CellOutOfRange { cell, cell_count } => {
                write!(f, "cell {cell} out of range for {cell_count} cells")
            }
            Self::GridOutOfRange { col, row, num_cells } => {
                write!(f, "grid position ({col}, {row}) out of range for {num_cells}x{num_cells} lattice")
            }
            Self::NonFiniteCoordinate { x, y } => {
                write!(f, "coordinate ({x}, {y}) is not finite")
            }
        }
    }
}

impl std::error::Error for GridError {}
