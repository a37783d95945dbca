//! # echelon
//!
//! Runtime-sized dense matrices with Gauss and Gauss-Jordan elimination.
//! Pure Rust, no-std compatible (requires `alloc`).
//!
//! ## Quick start
//!
//! ```
//! use echelon::Matrix;
//!
//! // Reduce a matrix to reduced row-echelon form and recover its inverse
//! // from the accumulated row operations.
//! let m = Matrix::from_rows(2, 2, &[2.0_f64, 1.0, 1.0, 1.0]).unwrap();
//! let r = m.gauss_jordan_reduce(1e-5);
//!
//! assert_eq!(r.pivot_rank, 2);
//! assert!((r.reduced[(0, 0)] - 1.0).abs() < 1e-12);
//! assert!((r.row_ops[(0, 1)] - (-1.0)).abs() < 1e-12); // row_ops == m⁻¹
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — Heap-allocated [`Matrix<T>`] with runtime dimensions.
//!   Row-major `Vec<T>` storage. Includes checked element access, arithmetic,
//!   transpose, elementary row/column operations, and text rendering.
//!   [`MatrixError`] covers the fallible-operation taxonomy.
//!
//! - [`linalg`] — Gaussian forward elimination ([`gauss_reduce`]) and
//!   Gauss-Jordan reduction ([`gauss_jordan_reduce`]) with partial and total
//!   pivoting. Each reduction returns a [`Reduction`] aggregate carrying the
//!   reduced matrix, the accumulated row- and column-operation matrices, the
//!   column permutation, and the pivot rank achieved. Rank deficiency is a
//!   normal outcome, not an error: elimination stops at the first unusable
//!   pivot and `pivot_rank` reports how far it got.
//!
//! - [`traits`] — Element trait hierarchy:
//!   - [`Scalar`] — all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`] — real floats (`Scalar + Float`), required by the reductions
//!
//! ## Numerical policy
//!
//! Every negligibility test in the reduction routines compares the
//! **absolute value** of an entry against the caller-supplied tolerance
//! (default [`DEFAULT_TOL`] = 1e-5). A pivot whose magnitude is at or below
//! the tolerance triggers pivot selection; if no candidate in the remaining
//! submatrix exceeds the tolerance, the row is left unreduced.
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Hardware FPU via system libm |
//! | `libm`  | no       | Pure-Rust software float fallback for no-std |
//!
//! ## Thread safety
//!
//! A [`Matrix<T>`] exclusively owns its buffer and is not safe for concurrent
//! mutation from multiple threads; wrap it in a lock if you need that.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod linalg;
pub mod matrix;
pub mod traits;

pub use linalg::{gauss_jordan_reduce, gauss_reduce, Reduction, DEFAULT_TOL};
pub use matrix::aliases::{Matrixf32, Matrixf64};
pub use matrix::{Matrix, MatrixError};
pub use traits::{FloatScalar, Scalar};
