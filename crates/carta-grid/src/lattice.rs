//! [`SquareLattice`]: cell numbers, grid positions and coordinates.

use geo_types::Point;
use tracing::debug;

use crate::error::GridError;

/// An `n × n` square lattice of cartogram cells.
///
/// Both axes share the coordinate sequence `k · scale_factor` for
/// `k ∈ [0, n)`, covering `[0, scale_factor · n)`, shifted by the centre
/// offset independently per axis.
///
/// Cells are numbered column-major: `cell = col + row · n`, where `col`
/// indexes the x axis and `row` the y axis.
///
/// # Examples
///
/// ```
/// use carta_grid::SquareLattice;
///
/// let lattice = SquareLattice::new(3, 1.0, (0.0, 0.0)).unwrap();
/// assert_eq!(lattice.cell_count(), 9);
/// assert_eq!(lattice.cell_to_grid(5).unwrap(), (2, 1));
/// assert_eq!(lattice.cell_to_geo(4).unwrap(), (1.0, 1.0));
/// assert_eq!(lattice.geo_to_cell(1.9, 0.2).unwrap(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SquareLattice {
    num_cells: u32,
    scale_factor: f64,
    centre_offset: (f64, f64),
    x_coords: Vec<f64>,
    y_coords: Vec<f64>,
}

impl SquareLattice {
    /// Maximum cells per side.
    pub const MAX_DIM: u32 = 1 << 20;

    /// Create a lattice of `num_cells × num_cells` cells.
    ///
    /// Returns `Err(GridError::EmptyLattice)` if `num_cells` is 0,
    /// `Err(GridError::DimensionTooLarge)` above [`MAX_DIM`](Self::MAX_DIM),
    /// `Err(GridError::InvalidScale)` unless `scale_factor` is finite and
    /// positive, and `Err(GridError::NonFiniteCoordinate)` for a
    /// non-finite offset.
    pub fn new(
        num_cells: u32,
        scale_factor: f64,
        centre_offset: (f64, f64),
    ) -> Result<Self, GridError> {
        if num_cells == 0 {
            return Err(GridError::EmptyLattice);
        }
        if num_cells > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                value: num_cells,
                max: Self::MAX_DIM,
            });
        }
        if !(scale_factor.is_finite() && scale_factor > 0.0) {
            return Err(GridError::InvalidScale {
                value: scale_factor,
            });
        }
        let (dx, dy) = centre_offset;
        if !(dx.is_finite() && dy.is_finite()) {
            return Err(GridError::NonFiniteCoordinate { x: dx, y: dy });
        }
        let base = (0..num_cells).map(|k| f64::from(k) * scale_factor);
        let x_coords = base.clone().map(|v| v - dx).collect();
        let y_coords = base.map(|v| v - dy).collect();
        debug!(num_cells, scale_factor, ?centre_offset, "square lattice built");
        Ok(Self {
            num_cells,
            scale_factor,
            centre_offset,
            x_coords,
            y_coords,
        })
    }

    /// Cells per side.
    pub fn num_cells(&self) -> u32 {
        self.num_cells
    }

    /// Spacing between adjacent coordinates.
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Offset subtracted from each axis.
    pub fn centre_offset(&self) -> (f64, f64) {
        self.centre_offset
    }

    /// Total number of cells, `num_cells²`.
    pub fn cell_count(&self) -> u64 {
        u64::from(self.num_cells) * u64::from(self.num_cells)
    }

    /// x coordinate of each column.
    pub fn x_coords(&self) -> &[f64] {
        &self.x_coords
    }

    /// y coordinate of each row.
    pub fn y_coords(&self) -> &[f64] {
        &self.y_coords
    }

    /// Every cell number in canonical order.
    pub fn cells(&self) -> std::ops::Range<u64> {
        0..self.cell_count()
    }

    /// `(col, row)` of `cell`.
    pub fn cell_to_grid(&self, cell: u64) -> Result<(u32, u32), GridError> {
        if cell >= self.cell_count() {
            return Err(GridError::CellOutOfRange {
                cell,
                cell_count: self.cell_count(),
            });
        }
        let n = u64::from(self.num_cells);
        // Both quotients are < num_cells, which fits in u32.
        Ok(((cell % n) as u32, (cell / n) as u32))
    }

    /// Cell number at `(col, row)`.
    pub fn grid_to_cell(&self, col: u32, row: u32) -> Result<u64, GridError> {
        if col >= self.num_cells || row >= self.num_cells {
            return Err(GridError::GridOutOfRange {
                col,
                row,
                num_cells: self.num_cells,
            });
        }
        Ok(u64::from(col) + u64::from(row) * u64::from(self.num_cells))
    }

    /// `(x, y)` coordinates of `cell`.
    pub fn cell_to_geo(&self, cell: u64) -> Result<(f64, f64), GridError> {
        let (col, row) = self.cell_to_grid(cell)?;
        Ok((self.x_coords[col as usize], self.y_coords[row as usize]))
    }

    /// The cell whose coordinates are nearest `(x, y)`, axis by axis.
    ///
    /// Ties go to the lower coordinate index. Points outside the lattice
    /// snap to the nearest edge cell.
    pub fn geo_to_cell(&self, x: f64, y: f64) -> Result<u64, GridError> {
        if !(x.is_finite() && y.is_finite()) {
            return Err(GridError::NonFiniteCoordinate { x, y });
        }
        let col = nearest(&self.x_coords, x);
        let row = nearest(&self.y_coords, y);
        self.grid_to_cell(col, row)
    }

    /// A point at each cell's coordinates, in input order.
    pub fn points_for<I>(&self, cells: I) -> Result<Vec<Point<f64>>, GridError>
    where
        I: IntoIterator<Item = u64>,
    {
        cells
            .into_iter()
            .map(|cell| self.cell_to_geo(cell).map(Point::from))
            .collect()
    }
}

/// Index of the first coordinate with the smallest distance to `target`.
fn nearest(coords: &[f64], target: f64) -> u32 {
    coords
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| (*a - target).abs().total_cmp(&(*b - target).abs()))
        // Coordinate count equals num_cells, which is a nonzero u32.
        .map_or(0, |(i, _)| i as u32)
}
