use alloc::vec;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::traits::Scalar;

use super::{Matrix, MatrixError};

// ── Checked arithmetic ──────────────────────────────────────────────
//
// The checked methods are the primary fallible API; the operator impls
// below delegate to them and panic with the error text. Shape mismatch is
// reported before emptiness, matching the reference behavior.

impl<T: Scalar> Matrix<T> {
    /// Element-wise sum: `c[i][j] = a[i][j] + b[i][j]`.
    ///
    /// Fails with [`MatrixError::IncompatibleSizes`] on shape mismatch and
    /// [`MatrixError::NotInitialized`] when the operands are empty.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// let b = Matrix::from_rows(2, 2, &[4.0, 3.0, 2.0, 1.0]).unwrap();
    /// let c = a.checked_add(&b).unwrap();
    /// assert_eq!(c[(0, 0)], 5.0);
    /// assert_eq!(c[(1, 1)], 5.0);
    /// ```
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.zip_elementwise(rhs, '+', |a, b| a + b)
    }

    /// Element-wise difference: `c[i][j] = a[i][j] - b[i][j]`.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.zip_elementwise(rhs, '-', |a, b| a - b)
    }

    /// Element-wise (Hadamard) product: `c[i][j] = a[i][j] * b[i][j]`.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// let b = Matrix::from_rows(2, 2, &[5.0, 6.0, 7.0, 8.0]).unwrap();
    /// let c = a.element_mul(&b).unwrap();
    /// assert_eq!(c[(0, 0)], 5.0);
    /// assert_eq!(c[(1, 1)], 32.0);
    /// ```
    pub fn element_mul(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.zip_elementwise(rhs, '*', |a, b| a * b)
    }

    fn zip_elementwise(
        &self,
        rhs: &Self,
        op: char,
        f: impl Fn(T, T) -> T,
    ) -> Result<Self, MatrixError> {
        if (self.nrows, self.ncols) != (rhs.nrows, rhs.ncols) {
            return Err(MatrixError::IncompatibleSizes {
                op,
                left: (self.nrows, self.ncols),
                right: (rhs.nrows, rhs.ncols),
            });
        }
        if self.is_empty() {
            return Err(MatrixError::NotInitialized);
        }
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        })
    }

    /// Matrix product: `(M x N) * (N x P) -> (M x P)`.
    ///
    /// Fails with [`MatrixError::IncompatibleSizes`] when
    /// `self.ncols != rhs.nrows`.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// let id = Matrix::<f64>::eye(2, 2);
    /// assert_eq!(a.matmul(&id).unwrap(), a);
    /// ```
    pub fn matmul(&self, rhs: &Self) -> Result<Self, MatrixError> {
        if self.ncols != rhs.nrows {
            return Err(MatrixError::IncompatibleSizes {
                op: 'x',
                left: (self.nrows, self.ncols),
                right: (rhs.nrows, rhs.ncols),
            });
        }
        if self.is_empty() || rhs.is_empty() {
            return Err(MatrixError::NotInitialized);
        }
        let m = self.nrows;
        let n = self.ncols;
        let p = rhs.ncols;
        let mut data = vec![T::zero(); m * p];
        for i in 0..m {
            for k in 0..n {
                let a_ik = self.data[i * n + k];
                for j in 0..p {
                    data[i * p + j] = data[i * p + j] + a_ik * rhs.data[k * p + j];
                }
            }
        }
        Ok(Matrix {
            data,
            nrows: m,
            ncols: p,
        })
    }

    /// Add `s` along the main diagonal: `self + s * I`.
    ///
    /// Off-diagonal entries are untouched; this is a shift by a scalar
    /// multiple of the identity, not an element-wise add.
    ///
    /// ```
    /// use echelon::Matrix;
    /// let m = Matrix::<f64>::zeros(2, 3);
    /// let shifted = m.scalar_add(2.0).unwrap();
    /// assert_eq!(shifted[(1, 1)], 2.0);
    /// assert_eq!(shifted[(0, 1)], 0.0);
    /// ```
    pub fn scalar_add(&self, s: T) -> Result<Self, MatrixError> {
        if self.is_empty() {
            return Err(MatrixError::NotInitialized);
        }
        let mut out = self.clone();
        for i in 0..self.nrows.min(self.ncols) {
            out[(i, i)] = out[(i, i)] + s;
        }
        Ok(out)
    }

    /// Subtract `s` along the main diagonal: `self - s * I`.
    pub fn scalar_sub(&self, s: T) -> Result<Self, MatrixError> {
        if self.is_empty() {
            return Err(MatrixError::NotInitialized);
        }
        let mut out = self.clone();
        for i in 0..self.nrows.min(self.ncols) {
            out[(i, i)] = out[(i, i)] - s;
        }
        Ok(out)
    }
}

fn unwrap_or_panic<T: Scalar>(r: Result<Matrix<T>, MatrixError>) -> Matrix<T> {
    match r {
        Ok(m) => m,
        Err(e) => panic!("{}", e),
    }
}

// ── Element-wise addition ───────────────────────────────────────────

impl<T: Scalar> Add for Matrix<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<T: Scalar> Add<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self + rhs
    }
}

impl<T: Scalar> Add<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: Matrix<T>) -> Matrix<T> {
        self + &rhs
    }
}

impl<T: Scalar> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        unwrap_or_panic(self.checked_add(rhs))
    }
}

// ── Element-wise subtraction ────────────────────────────────────────

impl<T: Scalar> Sub for Matrix<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self - rhs
    }
}

impl<T: Scalar> Sub<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: Matrix<T>) -> Matrix<T> {
        self - &rhs
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        unwrap_or_panic(self.checked_sub(rhs))
    }
}

impl<T: Scalar> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        *self = &*self + rhs;
    }
}

impl<T: Scalar> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        *self = &*self - rhs;
    }
}

// ── Matrix multiplication: (M x N) * (N x P) → (M x P) ──────────────

impl<T: Scalar> Mul for Matrix<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self * rhs
    }
}

impl<T: Scalar> Mul<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        self * &rhs
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        unwrap_or_panic(self.matmul(rhs))
    }
}

// ── Diagonal shift: matrix ± scalar ─────────────────────────────────

impl<T: Scalar> Add<T> for Matrix<T> {
    type Output = Self;
    fn add(self, rhs: T) -> Self {
        unwrap_or_panic(self.scalar_add(rhs))
    }
}

impl<T: Scalar> Add<T> for &Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: T) -> Matrix<T> {
        unwrap_or_panic(self.scalar_add(rhs))
    }
}

impl<T: Scalar> Sub<T> for Matrix<T> {
    type Output = Self;
    fn sub(self, rhs: T) -> Self {
        unwrap_or_panic(self.scalar_sub(rhs))
    }
}

impl<T: Scalar> Sub<T> for &Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: T) -> Matrix<T> {
        unwrap_or_panic(self.scalar_sub(rhs))
    }
}

// ── Scalar multiplication and division ──────────────────────────────

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        self.map(|x| x * rhs)
    }
}

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: T) -> Matrix<T> {
        self.map(|x| x * rhs)
    }
}

impl<T: Scalar> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        for x in self.data.iter_mut() {
            *x = *x * rhs;
        }
    }
}

impl<T: Scalar> Div<T> for Matrix<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        self.map(|x| x / rhs)
    }
}

impl<T: Scalar> Div<T> for &Matrix<T> {
    type Output = Matrix<T>;
    fn div(self, rhs: T) -> Matrix<T> {
        self.map(|x| x / rhs)
    }
}

impl<T: Scalar> DivAssign<T> for Matrix<T> {
    fn div_assign(&mut self, rhs: T) {
        for x in self.data.iter_mut() {
            *x = *x / rhs;
        }
    }
}

// ── scalar * matrix (concrete impls) ────────────────────────────────

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar> Neg for Matrix<T> {
    type Output = Self;
    fn neg(self) -> Self {
        self.map(|x| T::zero() - x)
    }
}

impl<T: Scalar> Neg for &Matrix<T> {
    type Output = Matrix<T>;
    fn neg(self) -> Matrix<T> {
        self.map(|x| T::zero() - x)
    }
}
