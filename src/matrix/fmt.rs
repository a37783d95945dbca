use core::fmt;

use super::Matrix;

/// One bracketed, comma-separated line per row; an empty matrix renders as
/// `"Matrix not initialized!"`.
///
/// ```
/// use echelon::Matrix;
/// let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(format!("{}", m), "[ 1, 2 ]\n[ 3, 4 ]");
/// assert_eq!(format!("{}", Matrix::<f64>::empty()), "Matrix not initialized!");
/// ```
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Matrix not initialized!");
        }
        for i in 0..self.nrows {
            write!(f, "[ {}", self[(i, 0)])?;
            for j in 1..self.ncols {
                write!(f, ", {}", self[(i, j)])?;
            }
            write!(f, " ]")?;
            if i + 1 < self.nrows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
