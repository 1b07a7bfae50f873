//! # matrica
//!
//! Pure-Rust linear algebra for fixed-size and dynamically-sized matrices,
//! no-std compatible. Fixed matrices live on the stack with const-generic
//! dimensions; dynamic matrices are heap-allocated with runtime dimensions.
//! Determinants and adjugates use exact cofactor expansion, so integer
//! matrices stay exact.
//!
//! ## Quick start
//!
//! ```
//! use matrica::{Matrix, Vector};
//!
//! let a = Matrix::new([
//!     [4.0_f64, 7.0],
//!     [2.0, 6.0],
//! ]);
//! assert_eq!(a.det(), 10.0);
//!
//! let x = Vector::from_array([1.0, 2.0]);
//! assert_eq!(a.vecmul(&x), Vector::from_array([18.0, 14.0]));
//!
//! let inv = a.inverse().unwrap();
//! let id = a * inv;
//! assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — Fixed-size `Matrix<T, M, N>` with const-generic dimensions.
//!   Stack-allocated column-major storage. Includes arithmetic, scalar
//!   broadcasting, indexing, norms, iteration, and exact cofactor
//!   determinant / adjugate / inverse on square matrices. [`Vector<T, N>`]
//!   and [`ColumnVector<T, N>`] are type aliases for 1-row and 1-column
//!   matrices.
//!
//! - [`dynmatrix`] — Heap-allocated `DynMatrix<T>` with runtime dimensions
//!   (requires `alloc` feature, included with `std`). `Vec<T>` column-major
//!   storage. Implements [`MatrixRef`] / [`MatrixMut`], so the generic
//!   linalg kernels apply directly. Free functions with caller-allocated
//!   outputs ([`add_matrices`], [`subtract_matrices`], [`scale_matrix`],
//!   [`multiply_matrices`], [`multiply_matrix_vector`], [`least_squares`])
//!   return `Result` instead of panicking on shape mismatch.
//!
//! - [`linalg`] — Householder QR kernel ([`linalg::qr_in_place`] /
//!   [`linalg::qr_solve_in_place`]) operating on `&mut impl MatrixMut<T>`,
//!   shared by fixed and dynamic matrices, plus the
//!   [`LinalgError`](linalg::LinalgError) type.
//!
//! - [`traits`] — Element trait hierarchy:
//!   - [`Scalar`] — all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`] — real floats (`Scalar + Float`), required by `inverse`,
//!     norms, and the QR paths
//!   - [`MatrixRef`] / [`MatrixMut`] — generic read/write access for algorithms
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Implies `alloc`. Hardware FPU via system libm |
//! | `alloc` | via std  | `DynMatrix` (heap-allocated, runtime-sized) |
//! | `libm`  | baseline | Pure-Rust software float fallback |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod dynmatrix;
pub mod linalg;
pub mod matrix;
pub mod traits;

pub use matrix::aliases::{
    Matrix2, Matrix2x3, Matrix2x4, Matrix3, Matrix3x2, Matrix3x4, Matrix4, Matrix4x2, Matrix4x3,
};
pub use matrix::vector::{
    ColumnVector, ColumnVector2, ColumnVector3, ColumnVector4, Vector, Vector2, Vector3, Vector4,
};
pub use matrix::Matrix;
#[cfg(feature = "alloc")]
pub use dynmatrix::{
    add_matrices, least_squares, multiply_matrices, multiply_matrix_vector, scale_matrix,
    subtract_matrices, DynMatrix, DynMatrixf32, DynMatrixf64, DynMatrixi32, DynMatrixi64,
    DynMatrixu32, DynMatrixu64,
};
pub use traits::{FloatScalar, MatrixMut, MatrixRef, Scalar};
