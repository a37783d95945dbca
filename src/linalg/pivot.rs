//! Pivot selection for the elimination step at `(step, step)`.
//!
//! Both strategies fire only when the current pivot magnitude is at or below
//! the tolerance, scan for the largest absolute value among candidates that
//! exceed it, and swap the winner into position. Scan order is fixed and the
//! comparison is strictly greater, so the first candidate with the maximum
//! magnitude wins ties. Every swap is mirrored onto the corresponding
//! operation matrix (and `col_order` for column swaps) so the caller's
//! operation record stays consistent with the working matrix.

use crate::matrix::Matrix;
use crate::traits::FloatScalar;

/// Partial pivoting: search column `step` among rows `step+1..` for the
/// entry with the largest magnitude above `tol` and swap its row into
/// position, mirroring the swap onto `row_ops`.
///
/// Returns `true` if a swap was performed. If the current pivot is already
/// usable, or no candidate exceeds `tol`, the matrix is left as-is.
///
/// ```
/// use echelon::linalg::partial_pivot;
/// use echelon::Matrix;
///
/// let mut m = Matrix::from_rows(2, 2, &[0.0_f64, 1.0, 1.0, 0.0]).unwrap();
/// let mut row_ops = Matrix::eye(2, 2);
/// assert!(partial_pivot(&mut m, &mut row_ops, 0, 1e-5));
/// assert_eq!(m[(0, 0)], 1.0);
/// assert_eq!(row_ops[(0, 1)], 1.0);
/// ```
pub fn partial_pivot<T: FloatScalar>(
    m: &mut Matrix<T>,
    row_ops: &mut Matrix<T>,
    step: usize,
    tol: T,
) -> bool {
    assert!(
        step < m.nrows() && step < m.ncols(),
        "pivot step {} out of range for {}x{} matrix",
        step,
        m.nrows(),
        m.ncols(),
    );

    if m[(step, step)].abs() > tol {
        return false;
    }

    if let Some(row) = best_row_in_column(m, step, step, tol) {
        m.swap_rows(step, row);
        row_ops.swap_rows(step, row);
        return true;
    }

    false
}

/// Total pivoting: partial pivoting first; if no row candidate exists, scan
/// row `step` across columns `step+1..` and swap the best column into
/// position; if that also fails, scan the whole trailing submatrix and swap
/// both the row and the column of the global maximum.
///
/// Row swaps are mirrored onto `row_ops`; column swaps onto `col_ops` and
/// `col_order`. Returns `true` if any swap was performed. When no candidate
/// anywhere exceeds `tol`, the pivot is left as-is and the caller treats the
/// row as non-pivotable.
pub fn total_pivot<T: FloatScalar>(
    m: &mut Matrix<T>,
    row_ops: &mut Matrix<T>,
    col_ops: &mut Matrix<T>,
    col_order: &mut [usize],
    step: usize,
    tol: T,
) -> bool {
    assert!(
        step < m.nrows() && step < m.ncols(),
        "pivot step {} out of range for {}x{} matrix",
        step,
        m.nrows(),
        m.ncols(),
    );
    assert_eq!(
        col_order.len(),
        m.ncols(),
        "column order length must match column count",
    );

    if m[(step, step)].abs() > tol {
        return false;
    }

    if let Some(row) = best_row_in_column(m, step, step, tol) {
        m.swap_rows(step, row);
        row_ops.swap_rows(step, row);
        return true;
    }

    if let Some(col) = best_col_in_row(m, step, step, tol) {
        m.swap_cols(step, col);
        col_ops.swap_cols(step, col);
        col_order.swap(step, col);
        return true;
    }

    // Global scan of the trailing submatrix, row-major order.
    let mut best = T::zero();
    let mut found: Option<(usize, usize)> = None;
    for r in (step + 1)..m.nrows() {
        for c in (step + 1)..m.ncols() {
            let v = m[(r, c)].abs();
            if v > tol && v > best {
                best = v;
                found = Some((r, c));
            }
        }
    }
    if let Some((r, c)) = found {
        m.swap_rows(step, r);
        row_ops.swap_rows(step, r);
        m.swap_cols(step, c);
        col_ops.swap_cols(step, c);
        col_order.swap(step, c);
        return true;
    }

    false
}

/// Row index of the largest magnitude above `tol` in `col`, rows `row+1..`.
fn best_row_in_column<T: FloatScalar>(
    m: &Matrix<T>,
    row: usize,
    col: usize,
    tol: T,
) -> Option<usize> {
    let mut best = T::zero();
    let mut found = None;
    for r in (row + 1)..m.nrows() {
        let v = m[(r, col)].abs();
        if v > tol && v > best {
            best = v;
            found = Some(r);
        }
    }
    found
}

/// Column index of the largest magnitude above `tol` in `row`, columns `col+1..`.
fn best_col_in_row<T: FloatScalar>(
    m: &Matrix<T>,
    row: usize,
    col: usize,
    tol: T,
) -> Option<usize> {
    let mut best = T::zero();
    let mut found = None;
    for c in (col + 1)..m.ncols() {
        let v = m[(row, c)].abs();
        if v > tol && v > best {
            best = v;
            found = Some(c);
        }
    }
    found
}
