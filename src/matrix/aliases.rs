//! Pre-defined type aliases for common `Matrix` element types.

use super::Matrix;

/// Dense matrix with `f32` elements.
pub type Matrixf32 = Matrix<f32>;
/// Dense matrix with `f64` elements.
pub type Matrixf64 = Matrix<f64>;
