//! Gauss and Gauss-Jordan reduction with partial/total pivoting.
//!
//! Both entry points take the matrix by reference, work on a copy, and
//! return a [`Reduction`] aggregate: the reduced matrix, the accumulated
//! row- and column-operation matrices, the column permutation, and the
//! number of usable pivots found. Rank deficiency is a normal outcome —
//! elimination stops at the first step where no candidate pivot in the
//! remaining submatrix exceeds the tolerance, and `pivot_rank` reports how
//! many pivot rows were completed.

pub(crate) mod gauss;
pub(crate) mod gauss_jordan;
pub(crate) mod pivot;

pub use gauss::gauss_reduce;
pub use gauss_jordan::gauss_jordan_reduce;
pub use pivot::{partial_pivot, total_pivot};

use alloc::vec::Vec;

use crate::matrix::Matrix;

/// Default pivot tolerance: entries at or below this magnitude are treated
/// as zero during pivot selection and elimination.
pub const DEFAULT_TOL: f64 = 1e-5;

/// Result of a Gauss or Gauss-Jordan reduction.
///
/// The operation matrices record every elementary operation applied to the
/// working copy, so for a reduction that ran to completion
/// `row_ops * original * col_ops == reduced` (within tolerance).
/// `col_ops` differs from the identity only when total pivoting had to swap
/// columns; `col_order[i]` is the original index of the column now at
/// position `i`, for un-permuting a solution vector.
///
/// # Example
///
/// ```
/// use echelon::{gauss_jordan_reduce, Matrix};
///
/// let m = Matrix::from_rows(2, 2, &[2.0_f64, 1.0, 1.0, 1.0]).unwrap();
/// let r = gauss_jordan_reduce(&m, 1e-5);
/// assert!(r.is_full_rank());
/// assert_eq!(r.reduced, Matrix::eye(2, 2));
/// // No column swaps were needed, so row_ops is the inverse of m.
/// assert_eq!(r.col_order, vec![0, 1]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction<T> {
    /// The reduced matrix (row-echelon or reduced row-echelon form).
    pub reduced: Matrix<T>,
    /// Accumulated row operations, `nrows x nrows`, identity at start.
    pub row_ops: Matrix<T>,
    /// Accumulated column operations, `ncols x ncols`, identity at start.
    pub col_ops: Matrix<T>,
    /// `col_order[i]` is the original index of the column now at position `i`.
    pub col_order: Vec<usize>,
    /// Number of usable pivots found before elimination stopped.
    pub pivot_rank: usize,
}

impl<T> Reduction<T> {
    /// Whether every pivot step found a usable pivot
    /// (`pivot_rank == min(rows, cols)`).
    pub fn is_full_rank(&self) -> bool {
        self.pivot_rank == self.reduced.nrows().min(self.reduced.ncols())
    }
}
