//! Dense square matrices and the id-keyed scatter builder.

use std::ops::Index;

use tracing::trace;

use crate::error::RelationError;
use crate::index::IdentifierIndex;

/// Dense `size × size` matrix of `f64`, stored row-major.
///
/// Row `i` and column `j` are canonical region indices as assigned by
/// [`IdentifierIndex`].
#[derive(Clone, Debug, PartialEq)]
pub struct SquareMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SquareMatrix {
    /// A matrix with every entry set to `value`.
    pub fn filled(size: usize, value: f64) -> Self {
        Self {
            size,
            values: vec![value; size * size],
        }
    }

    /// Wrap row-major `values` as a `size × size` matrix.
    ///
    /// Returns `Err(RelationError::InvalidInput)` unless
    /// `values.len() == size * size`.
    pub fn from_row_major(size: usize, values: Vec<f64>) -> Result<Self, RelationError> {
        if values.len() != size * size {
            return Err(RelationError::InvalidInput {
                reason: format!(
                    "{} values cannot fill a {size}x{size} matrix",
                    values.len()
                ),
            });
        }
        Ok(Self { size, values })
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Entry `(row, col)`, or `None` if either is out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.size && col < self.size {
            Some(self.values[row * self.size + col])
        } else {
            None
        }
    }

    /// One row as a slice. Panics if `row >= size`.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.values[row * self.size..(row + 1) * self.size]
    }

    /// Iterate over all rows in order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        // `chunks_exact(0)` panics; an empty matrix simply has no rows.
        self.values.chunks_exact(self.size.max(1)).take(self.size)
    }

    /// Sum of one row.
    pub fn row_sum(&self, row: usize) -> f64 {
        self.row(row).iter().sum()
    }

    /// Row-major backing storage.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    fn slot_mut(&mut self, row: usize, col: usize) -> &mut f64 {
        &mut self.values[row * self.size + col]
    }
}

impl Index<(usize, usize)> for SquareMatrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.size && col < self.size,
            "({row}, {col}) out of bounds for {0}x{0} matrix",
            self.size
        );
        &self.values[row * self.size + col]
    }
}

/// How [`MatrixBuilder`] resolves a `(row, col)` pair that appears more
/// than once in its input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// The later value overwrites the earlier one.
    #[default]
    LastWins,
    /// Values for the same pair are summed.
    Accumulate,
}

/// Scatters `(row id, col id, value)` triples into a [`SquareMatrix`].
///
/// Cells never written keep the builder's default value.
///
/// # Examples
///
/// ```
/// use carta_core::{IdentifierIndex, MatrixBuilder};
///
/// let index = IdentifierIndex::build(["a", "b"], ["A", "B"]).unwrap();
/// let m = MatrixBuilder::new(&index, 2)
///     .build([("a", "b", 0.5), ("b", "a", 0.25)])
///     .unwrap();
/// assert_eq!(m[(0, 1)], 0.5);
/// assert_eq!(m[(1, 0)], 0.25);
/// assert_eq!(m[(0, 0)], 0.0);
/// ```
#[derive(Debug)]
pub struct MatrixBuilder<'a> {
    index: &'a IdentifierIndex,
    size: usize,
    default_value: f64,
    policy: DuplicatePolicy,
}

impl<'a> MatrixBuilder<'a> {
    /// Builder for a `size × size` matrix with default value 0.
    pub fn new(index: &'a IdentifierIndex, size: usize) -> Self {
        Self {
            index,
            size,
            default_value: 0.0,
            policy: DuplicatePolicy::default(),
        }
    }

    /// Set the value of cells no triple writes to.
    pub fn default_value(mut self, value: f64) -> Self {
        self.default_value = value;
        self
    }

    /// Set the duplicate-pair policy (default: [`DuplicatePolicy::LastWins`]).
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Scatter the triples into a fresh matrix.
    ///
    /// Returns `Err(RelationError::KeyNotFound)` for an id the index does
    /// not know, and `Err(RelationError::InvalidInput)` if an id resolves
    /// to an index outside the matrix.
    pub fn build<I, R, C>(self, triples: I) -> Result<SquareMatrix, RelationError>
    where
        I: IntoIterator<Item = (R, C, f64)>,
        R: AsRef<str>,
        C: AsRef<str>,
    {
        let mut matrix = SquareMatrix::filled(self.size, self.default_value);
        let mut written = vec![false; self.size * self.size];

        for (row_id, col_id, value) in triples {
            let row = self.resolve(row_id.as_ref())?;
            let col = self.resolve(col_id.as_ref())?;
            let seen = &mut written[row * self.size + col];
            let slot = matrix.slot_mut(row, col);
            match (self.policy, *seen) {
                (DuplicatePolicy::Accumulate, true) => *slot += value,
                (DuplicatePolicy::LastWins, true) => {
                    trace!(row, col, previous = *slot, value, "duplicate pair overwritten");
                    *slot = value;
                }
                (_, false) => *slot = value,
            }
            *seen = true;
        }

        Ok(matrix)
    }

    fn resolve(&self, id: &str) -> Result<usize, RelationError> {
        let i = self.index.id_to_index(id)?;
        if i >= self.size {
            return Err(RelationError::InvalidInput {
                reason: format!(
                    "id '{id}' maps to index {i}, outside a {0}x{0} matrix",
                    self.size
                ),
            });
        }
        Ok(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KeyKind;
    use float_cmp::approx_eq;

    fn abc() -> IdentifierIndex {
        IdentifierIndex::build(["a", "b", "c"], ["A", "B", "C"]).unwrap()
    }

    // ── SquareMatrix ────────────────────────────────────────────

    #[test]
    fn filled_matrix_has_uniform_entries() {
        let m = SquareMatrix::filled(3, 2.5);
        assert_eq!(m.size(), 3);
        assert!(m.as_slice().iter().all(|&v| v == 2.5));
        assert_eq!(m.row_sum(1), 7.5);
    }

    #[test]
    fn from_row_major_checks_length() {
        let m = SquareMatrix::from_row_major(2, vec![0.0, 1.0, 2.0, 3.0]).unwrap();
        assert_eq!(m[(1, 0)], 2.0);
        assert!(matches!(
            SquareMatrix::from_row_major(2, vec![0.0; 3]),
            Err(RelationError::InvalidInput { .. })
        ));
    }

    #[test]
    fn get_out_of_range_is_none() {
        let m = SquareMatrix::filled(2, 0.0);
        assert_eq!(m.get(1, 1), Some(0.0));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 2), None);
    }

    #[test]
    fn rows_iterate_in_order() {
        let index = abc();
        let m = MatrixBuilder::new(&index, 3)
            .build([("b", "c", 4.0)])
            .unwrap();
        let rows: Vec<&[f64]> = m.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], &[0.0, 0.0, 4.0]);
    }

    #[test]
    fn empty_matrix_has_no_rows() {
        let m = SquareMatrix::filled(0, 0.0);
        assert_eq!(m.rows().count(), 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_out_of_range_panics() {
        let m = SquareMatrix::filled(2, 0.0);
        let _ = m[(2, 0)];
    }

    // ── MatrixBuilder ───────────────────────────────────────────

    #[test]
    fn unwritten_cells_keep_default() {
        let index = abc();
        let m = MatrixBuilder::new(&index, 3)
            .default_value(-1.0)
            .build([("a", "c", 3.0)])
            .unwrap();
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(2, 0)], -1.0);
        assert_eq!(m[(1, 1)], -1.0);
    }

    #[test]
    fn last_write_wins_by_default() {
        let index = abc();
        let m = MatrixBuilder::new(&index, 3)
            .build([("a", "b", 1.0), ("a", "b", 2.0)])
            .unwrap();
        assert_eq!(m[(0, 1)], 2.0);
    }

    #[test]
    fn accumulate_sums_duplicates() {
        let index = abc();
        let m = MatrixBuilder::new(&index, 3)
            .default_value(10.0)
            .duplicate_policy(DuplicatePolicy::Accumulate)
            .build([("a", "b", 1.0), ("a", "b", 2.0), ("b", "a", 5.0)])
            .unwrap();
        // The default is replaced by the first write, not added to.
        assert_eq!(m[(0, 1)], 3.0);
        assert_eq!(m[(1, 0)], 5.0);
    }

    #[test]
    fn accumulated_fractions_sum_within_rounding() {
        let index = abc();
        let m = MatrixBuilder::new(&index, 3)
            .duplicate_policy(DuplicatePolicy::Accumulate)
            .build([("c", "a", 0.1), ("c", "a", 0.2), ("c", "b", 0.7)])
            .unwrap();
        assert!(approx_eq!(f64, m[(2, 0)], 0.3, epsilon = 1e-12));
        assert!(approx_eq!(f64, m.row_sum(2), 1.0, epsilon = 1e-12));
        assert_eq!(m.row_sum(0), 0.0);
    }

    #[test]
    fn unknown_id_is_key_not_found() {
        let index = abc();
        let err = MatrixBuilder::new(&index, 3)
            .build([("a", "zz", 1.0)])
            .unwrap_err();
        assert_eq!(
            err,
            RelationError::KeyNotFound {
                kind: KeyKind::Id,
                key: "zz".into()
            }
        );
    }

    #[test]
    fn id_beyond_matrix_size_is_invalid() {
        let index = abc();
        let err = MatrixBuilder::new(&index, 2)
            .build([("a", "c", 1.0)])
            .unwrap_err();
        assert!(matches!(err, RelationError::InvalidInput { .. }));
    }
}
