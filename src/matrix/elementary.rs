//! Elementary row and column operations.
//!
//! The three operations that preserve row-equivalence: swap, scale, and
//! scaled-add. All mutate in place and return `&mut Self` so callers can
//! chain them. The reduction routines apply each operation to the working
//! matrix and mirror it onto an operation matrix, so the accumulated
//! operation matrix times the original reproduces the reduced matrix.

use crate::traits::Scalar;

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Swap rows `a` and `b` in place.
    ///
    /// Swapping a row with itself is a no-op.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let mut m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// m.swap_rows(0, 1);
    /// assert_eq!(m[(0, 0)], 3.0);
    /// assert_eq!(m[(1, 0)], 1.0);
    /// ```
    pub fn swap_rows(&mut self, a: usize, b: usize) -> &mut Self {
        assert!(
            a < self.nrows && b < self.nrows,
            "row swap ({}, {}) out of range for {} rows",
            a,
            b,
            self.nrows,
        );
        if a != b {
            let n = self.ncols;
            for j in 0..n {
                self.data.swap(a * n + j, b * n + j);
            }
        }
        self
    }

    /// Swap columns `a` and `b` in place.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let mut m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// m.swap_cols(0, 1);
    /// assert_eq!(m[(0, 0)], 2.0);
    /// assert_eq!(m[(0, 1)], 1.0);
    /// ```
    pub fn swap_cols(&mut self, a: usize, b: usize) -> &mut Self {
        assert!(
            a < self.ncols && b < self.ncols,
            "column swap ({}, {}) out of range for {} columns",
            a,
            b,
            self.ncols,
        );
        if a != b {
            let n = self.ncols;
            for i in 0..self.nrows {
                self.data.swap(i * n + a, i * n + b);
            }
        }
        self
    }

    /// Multiply every entry of `row` by `scale` in place.
    ///
    /// Used in back-substitution to normalize a pivot row to 1.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let mut m = Matrix::from_rows(1, 3, &[2.0, 4.0, 6.0]).unwrap();
    /// m.scale_row(0, 0.5);
    /// assert_eq!(m.row_slice(0), &[1.0, 2.0, 3.0]);
    /// ```
    pub fn scale_row(&mut self, row: usize, scale: T) -> &mut Self {
        assert!(
            row < self.nrows,
            "row {} out of range for {} rows",
            row,
            self.nrows,
        );
        let n = self.ncols;
        for x in &mut self.data[row * n..(row + 1) * n] {
            *x = *x * scale;
        }
        self
    }

    /// Add `scale` times row `src` to row `dst` in place:
    /// `dst[c] += scale * src[c]` for every column `c`.
    ///
    /// Used to zero out a below-pivot entry with
    /// `scale = -(m[j][i] / m[i][i])`.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let mut m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// m.add_scaled_row(0, 1, -3.0);
    /// assert_eq!(m.row_slice(1), &[0.0, -2.0]);
    /// ```
    pub fn add_scaled_row(&mut self, src: usize, dst: usize, scale: T) -> &mut Self {
        assert!(
            src < self.nrows && dst < self.nrows,
            "scaled row add ({} -> {}) out of range for {} rows",
            src,
            dst,
            self.nrows,
        );
        let n = self.ncols;
        for c in 0..n {
            let v = self.data[src * n + c];
            self.data[dst * n + c] = self.data[dst * n + c] + scale * v;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_rows() {
        let mut m = Matrix::from_rows(3, 2, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        m.swap_rows(0, 2);
        assert_eq!(m.row_slice(0), &[5.0, 6.0]);
        assert_eq!(m.row_slice(2), &[1.0, 2.0]);
        assert_eq!(m.row_slice(1), &[3.0, 4.0]);
    }

    #[test]
    fn swap_rows_self_noop() {
        let mut m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        let before = m.clone();
        m.swap_rows(1, 1);
        assert_eq!(m, before);
    }

    #[test]
    fn swap_cols() {
        let mut m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        m.swap_cols(0, 2);
        assert_eq!(m.row_slice(0), &[3.0, 2.0, 1.0]);
        assert_eq!(m.row_slice(1), &[6.0, 5.0, 4.0]);
    }

    #[test]
    fn scale_row() {
        let mut m = Matrix::from_rows(2, 2, &[2.0, 4.0, 1.0, 1.0]).unwrap();
        m.scale_row(0, 0.5);
        assert_eq!(m.row_slice(0), &[1.0, 2.0]);
        assert_eq!(m.row_slice(1), &[1.0, 1.0]);
    }

    #[test]
    fn add_scaled_row() {
        let mut m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 10.0, 20.0, 30.0]).unwrap();
        m.add_scaled_row(0, 1, -10.0);
        assert_eq!(m.row_slice(1), &[0.0, 0.0, 0.0]);
        assert_eq!(m.row_slice(0), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn chaining() {
        let mut m = Matrix::from_rows(2, 2, &[0.0, 1.0, 2.0, 0.0]).unwrap();
        m.swap_rows(0, 1).scale_row(0, 0.5);
        assert_eq!(m.row_slice(0), &[1.0, 0.0]);
        assert_eq!(m.row_slice(1), &[0.0, 1.0]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn swap_rows_out_of_range() {
        let mut m = Matrix::<f64>::zeros(2, 2);
        m.swap_rows(0, 2);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn scale_row_out_of_range() {
        let mut m = Matrix::<f64>::zeros(2, 2);
        m.scale_row(5, 1.0);
    }
}
