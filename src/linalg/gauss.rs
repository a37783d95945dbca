use alloc::vec::Vec;

use crate::linalg::pivot::total_pivot;
use crate::linalg::Reduction;
use crate::matrix::Matrix;
use crate::traits::FloatScalar;

/// Forward elimination to row-echelon form with total pivoting.
///
/// Works on a copy of `m`. At each pivot step `i` the pivot is selected by
/// [`total_pivot`](crate::linalg::total_pivot), then every row below with an
/// entry of magnitude above `tol` in column `i` is cleared by adding
/// `-(m[j][i] / m[i][i])` times the pivot row. All operations are mirrored
/// onto the returned operation matrices, so
/// `row_ops * m * col_ops == reduced` within tolerance.
///
/// If no usable pivot exists at some step — no candidate in the remaining
/// submatrix exceeds `tol` — elimination stops there and the remaining rows
/// are left unreduced. That is not an error; inspect
/// [`Reduction::pivot_rank`] to detect it.
///
/// # Example
///
/// ```
/// use echelon::{gauss_reduce, Matrix};
///
/// // Singular: the second row is twice the first.
/// let m = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 2.0, 4.0]).unwrap();
/// let r = gauss_reduce(&m, 1e-5);
///
/// assert_eq!(r.pivot_rank, 1);
/// assert_eq!(r.reduced.row_slice(1), &[0.0, 0.0]);
/// ```
pub fn gauss_reduce<T: FloatScalar>(m: &Matrix<T>, tol: T) -> Reduction<T> {
    let nrows = m.nrows();
    let ncols = m.ncols();

    let mut reduced = m.clone();
    let mut row_ops = Matrix::eye(nrows, nrows);
    let mut col_ops = Matrix::eye(ncols, ncols);
    let mut col_order: Vec<usize> = (0..ncols).collect();
    let mut pivot_rank = 0;

    for i in 0..nrows.min(ncols) {
        total_pivot(
            &mut reduced,
            &mut row_ops,
            &mut col_ops,
            &mut col_order,
            i,
            tol,
        );

        if reduced[(i, i)].abs() <= tol {
            // No usable pivot anywhere in the remaining submatrix; the
            // matrix is rank-deficient from this row on.
            break;
        }
        pivot_rank += 1;

        for j in (i + 1)..nrows {
            if reduced[(j, i)].abs() > tol {
                let scale = -(reduced[(j, i)] / reduced[(i, i)]);
                reduced.add_scaled_row(i, j, scale);
                row_ops.add_scaled_row(i, j, scale);
            }
        }
    }

    Reduction {
        reduced,
        row_ops,
        col_ops,
        col_order,
        pivot_rank,
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Forward elimination to row-echelon form. See [`gauss_reduce`].
    pub fn gauss_reduce(&self, tol: T) -> Reduction<T> {
        gauss_reduce(self, tol)
    }
}
