pub mod aliases;
mod elementary;
mod fmt;
mod ops;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::traits::Scalar;

/// Error raised by fallible matrix operations.
///
/// Dimension problems and invalid accesses are reported to the caller as
/// values; they are never silent and never fatal. Rank deficiency during
/// elimination is *not* an error (see [`crate::linalg::Reduction`]).
///
/// # Example
///
/// ```
/// use echelon::{Matrix, MatrixError};
///
/// let a = Matrix::<f64>::zeros(2, 2);
/// let b = Matrix::<f64>::zeros(3, 3);
/// assert_eq!(
///     a.checked_add(&b).unwrap_err(),
///     MatrixError::IncompatibleSizes { op: '+', left: (2, 2), right: (3, 3) },
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Requested dimensions inconsistent with the supplied data length.
    InvalidSize {
        /// Requested `(rows, cols)`.
        shape: (usize, usize),
        /// Length of the supplied buffer.
        len: usize,
    },
    /// Element access outside `[0, rows) x [0, cols)`.
    OutOfBounds {
        /// Matrix `(rows, cols)`.
        shape: (usize, usize),
        /// Accessed `(row, col)`.
        index: (usize, usize),
    },
    /// Arithmetic between matrices whose shapes don't satisfy the operation.
    IncompatibleSizes {
        /// The attempted operator.
        op: char,
        /// Left operand `(rows, cols)`.
        left: (usize, usize),
        /// Right operand `(rows, cols)`.
        right: (usize, usize),
    },
    /// Operation attempted on an empty (0x0) matrix.
    NotInitialized,
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            MatrixError::InvalidSize { shape, len } => write!(
                f,
                "invalid size: {}x{} matrix from buffer of length {}",
                shape.0, shape.1, len
            ),
            MatrixError::OutOfBounds { shape, index } => write!(
                f,
                "invalid access for {}x{} matrix: position ({}, {})",
                shape.0, shape.1, index.0, index.1
            ),
            MatrixError::IncompatibleSizes { op, left, right } => write!(
                f,
                "incompatible sizes for '{}': {}x{} {} {}x{}",
                op, left.0, left.1, op, right.0, right.1
            ),
            MatrixError::NotInitialized => write!(f, "matrix not initialized"),
        }
    }
}

/// Dynamically-sized heap-allocated dense matrix.
///
/// Row-major `Vec<T>` storage: element `(r, c)` lives at offset
/// `r * ncols + c`. Dimensions are set at runtime; the buffer length always
/// equals `rows * cols` and is empty exactly when either dimension is zero.
/// Cloning copies the buffer — two matrices never share storage.
///
/// Not safe for concurrent mutation from multiple threads.
///
/// # Examples
///
/// ```
/// use echelon::Matrix;
///
/// let a = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 2);
///
/// let id = Matrix::<f64>::eye(3, 3);
/// assert_eq!(id[(0, 0)], 1.0);
/// assert_eq!(id[(0, 1)], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    pub(crate) data: Vec<T>,
    pub(crate) nrows: usize,
    pub(crate) ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Create an empty 0x0 matrix.
    ///
    /// The empty state is valid: it renders as `"Matrix not initialized!"`
    /// and rejects arithmetic with [`MatrixError::NotInitialized`].
    ///
    /// ```
    /// use echelon::Matrix;
    /// let m = Matrix::<f64>::empty();
    /// assert!(m.is_empty());
    /// ```
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            nrows: 0,
            ncols: 0,
        }
    }

    /// Create an `nrows x ncols` matrix with every entry zero.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let m = Matrix::<f64>::zeros(2, 3);
    /// assert_eq!(m.nrows(), 2);
    /// assert_eq!(m[(1, 2)], 0.0);
    /// ```
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            data: vec![T::zero(); nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create an `nrows x ncols` matrix with every entry one.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let m = Matrix::<f64>::ones(2, 2);
    /// assert_eq!(m[(1, 0)], 1.0);
    /// ```
    pub fn ones(nrows: usize, ncols: usize) -> Self {
        Self::fill(nrows, ncols, T::one())
    }

    /// Create a matrix filled with a given value.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let m = Matrix::fill(2, 3, 7.0_f64);
    /// assert_eq!(m[(1, 2)], 7.0);
    /// ```
    pub fn fill(nrows: usize, ncols: usize, value: T) -> Self {
        Self {
            data: vec![value; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create an `nrows x ncols` identity matrix.
    ///
    /// The shape may be rectangular: entry `(i, i)` is one along the main
    /// diagonal, everything else zero.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let id = Matrix::<f64>::eye(2, 3);
    /// assert_eq!(id[(1, 1)], 1.0);
    /// assert_eq!(id[(1, 2)], 0.0);
    /// ```
    pub fn eye(nrows: usize, ncols: usize) -> Self {
        let mut m = Self::zeros(nrows, ncols);
        for i in 0..nrows.min(ncols) {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Create a matrix from a flat slice in row-major order.
    ///
    /// Fails with [`MatrixError::InvalidSize`] if `slice.len()` does not
    /// equal `nrows * ncols`.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(m[(0, 2)], 3.0);
    /// assert_eq!(m[(1, 0)], 4.0);
    ///
    /// assert!(Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0]).is_err());
    /// ```
    pub fn from_rows(nrows: usize, ncols: usize, slice: &[T]) -> Result<Self, MatrixError> {
        if slice.len() != nrows * ncols {
            return Err(MatrixError::InvalidSize {
                shape: (nrows, ncols),
                len: slice.len(),
            });
        }
        Ok(Self {
            data: slice.to_vec(),
            nrows,
            ncols,
        })
    }

    /// Create a matrix from an owned `Vec<T>` in row-major order.
    ///
    /// Fails with [`MatrixError::InvalidSize`] if `data.len()` does not
    /// equal `nrows * ncols`.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m[(1, 1)], 4.0);
    /// ```
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Result<Self, MatrixError> {
        if data.len() != nrows * ncols {
            return Err(MatrixError::InvalidSize {
                shape: (nrows, ncols),
                len: data.len(),
            });
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Discard the current contents and reallocate to a new shape.
    ///
    /// Destructive, not content-preserving: every entry of the resized
    /// matrix is zero. Resizing to `0 x n` or `n x 0` yields the empty state.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let mut m = Matrix::<f64>::ones(2, 2);
    /// m.resize(3, 1);
    /// assert_eq!(m.nrows(), 3);
    /// assert_eq!(m[(2, 0)], 0.0);
    /// ```
    pub fn resize(&mut self, nrows: usize, ncols: usize) -> &mut Self {
        self.data = vec![T::zero(); nrows * ncols];
        self.nrows = nrows;
        self.ncols = ncols;
        self
    }

    /// Return the transposed matrix: `result[(j, i)] == self[(i, j)]`.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// let t = m.transpose();
    /// assert_eq!(t.nrows(), 3);
    /// assert_eq!(t[(2, 0)], 3.0);
    /// assert_eq!(t.transpose(), m);
    /// ```
    pub fn transpose(&self) -> Self {
        let mut out = Self::zeros(self.ncols, self.nrows);
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                out[(j, i)] = self[(i, j)];
            }
        }
        out
    }

    /// Sum of all elements.
    pub fn sum(&self) -> T {
        let mut s = T::zero();
        for &x in &self.data {
            s = s + x;
        }
        s
    }
}

impl<T> Matrix<T> {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Whether the matrix is empty (either dimension zero, no buffer).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let m = Matrix::from_fn(3, 3, |i, j| if i == j { 2.0_f64 } else { 0.0 });
    /// assert_eq!(m[(1, 1)], 2.0);
    /// assert_eq!(m[(0, 1)], 0.0);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }

    /// Bounds-checked element read.
    ///
    /// Fails with [`MatrixError::OutOfBounds`] when `row >= nrows` or
    /// `col >= ncols`.
    ///
    /// ```
    /// use echelon::{Matrix, MatrixError};
    /// let m = Matrix::<f64>::zeros(2, 2);
    /// assert_eq!(*m.at(1, 1).unwrap(), 0.0);
    /// assert_eq!(
    ///     m.at(2, 0).unwrap_err(),
    ///     MatrixError::OutOfBounds { shape: (2, 2), index: (2, 0) },
    /// );
    /// ```
    pub fn at(&self, row: usize, col: usize) -> Result<&T, MatrixError> {
        if row >= self.nrows || col >= self.ncols {
            return Err(MatrixError::OutOfBounds {
                shape: (self.nrows, self.ncols),
                index: (row, col),
            });
        }
        Ok(&self.data[row * self.ncols + col])
    }

    /// Bounds-checked element write access.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let mut m = Matrix::<f64>::zeros(2, 2);
    /// *m.at_mut(0, 1).unwrap() = 5.0;
    /// assert_eq!(m[(0, 1)], 5.0);
    /// assert!(m.at_mut(0, 2).is_err());
    /// ```
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T, MatrixError> {
        if row >= self.nrows || col >= self.ncols {
            return Err(MatrixError::OutOfBounds {
                shape: (self.nrows, self.ncols),
                index: (row, col),
            });
        }
        Ok(&mut self.data[row * self.ncols + col])
    }

    /// Row `i` as a slice (row-major storage makes rows contiguous).
    #[inline]
    pub fn row_slice(&self, i: usize) -> &[T] {
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0_f64, 4.0, 9.0, 16.0]).unwrap();
    /// let r = m.map(|x: f64| x.sqrt());
    /// assert_eq!(r[(1, 1)], 4.0);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Matrix<U>
    where
        T: Copy,
    {
        let data: Vec<U> = self.data.iter().map(|&x| f(x)).collect();
        Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> Default for Matrix<T> {
    fn default() -> Self {
        Self::empty()
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.nrows && col < self.ncols,
            "invalid access for {}x{} matrix: position ({}, {})",
            self.nrows,
            self.ncols,
            row,
            col,
        );
        &self.data[row * self.ncols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.nrows && col < self.ncols,
            "invalid access for {}x{} matrix: position ({}, {})",
            self.nrows,
            self.ncols,
            row,
            col,
        );
        &mut self.data[row * self.ncols + col]
    }
}
