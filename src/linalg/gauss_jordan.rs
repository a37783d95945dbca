use crate::linalg::gauss::gauss_reduce;
use crate::linalg::Reduction;
use crate::matrix::Matrix;
use crate::traits::FloatScalar;

/// Gauss-Jordan reduction to reduced row-echelon form.
///
/// Runs [`gauss_reduce`] first, then back-substitutes from the last pivot
/// row to the first: each usable pivot is scaled to exactly 1 and every
/// entry above it in its column is cleared. Rows whose pivot magnitude is at
/// or below `tol` are skipped entirely and left as forward elimination
/// produced them. All operations keep accumulating onto the same `row_ops`,
/// so the invariant `row_ops * m * col_ops == reduced` continues to hold.
///
/// # Example
///
/// ```
/// use echelon::{gauss_jordan_reduce, Matrix};
///
/// let m = Matrix::from_rows(2, 2, &[2.0_f64, 1.0, 1.0, 1.0]).unwrap();
/// let r = gauss_jordan_reduce(&m, 1e-5);
///
/// assert_eq!(r.reduced, Matrix::eye(2, 2));
/// // row_ops accumulated into the inverse of m.
/// assert!((r.row_ops[(0, 0)] - 1.0).abs() < 1e-12);
/// assert!((r.row_ops[(1, 1)] - 2.0).abs() < 1e-12);
/// ```
pub fn gauss_jordan_reduce<T: FloatScalar>(m: &Matrix<T>, tol: T) -> Reduction<T> {
    let mut r = gauss_reduce(m, tol);
    let steps = r.reduced.nrows().min(r.reduced.ncols());

    for line in (0..steps).rev() {
        let pivot = r.reduced[(line, line)];
        if pivot.abs() <= tol {
            // Rank-deficient row; leave it in row-echelon form.
            continue;
        }

        let inv = T::one() / pivot;
        r.reduced.scale_row(line, inv);
        r.row_ops.scale_row(line, inv);

        for above in 0..line {
            let v = r.reduced[(above, line)];
            if v.abs() > tol {
                // The pivot is exactly 1 after scaling.
                r.reduced.add_scaled_row(line, above, -v);
                r.row_ops.add_scaled_row(line, above, -v);
            }
        }
    }

    r
}

impl<T: FloatScalar> Matrix<T> {
    /// Gauss-Jordan reduction to reduced row-echelon form.
    /// See [`gauss_jordan_reduce`].
    pub fn gauss_jordan_reduce(&self, tol: T) -> Reduction<T> {
        gauss_jordan_reduce(self, tol)
    }

    /// Invert a square matrix via Gauss-Jordan reduction.
    ///
    /// Returns `None` when the matrix is empty or rank-deficient at the
    /// given tolerance. With column pivoting folded in, the inverse is
    /// `col_ops * row_ops` of the full-rank reduction.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not square.
    ///
    /// ```
    /// use echelon::Matrix;
    ///
    /// let m = Matrix::from_rows(2, 2, &[4.0_f64, 7.0, 2.0, 6.0]).unwrap();
    /// let inv = m.inverse(1e-5).unwrap();
    /// let id = &m * &inv;
    /// assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
    /// assert!(id[(0, 1)].abs() < 1e-12);
    ///
    /// let singular = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 2.0, 4.0]).unwrap();
    /// assert!(singular.inverse(1e-5).is_none());
    /// ```
    pub fn inverse(&self, tol: T) -> Option<Self> {
        assert!(self.is_square(), "inverse requires a square matrix");
        if self.is_empty() {
            return None;
        }
        let r = gauss_jordan_reduce(self, tol);
        if !r.is_full_rank() {
            return None;
        }
        r.col_ops.matmul(&r.row_ops).ok()
    }
}
