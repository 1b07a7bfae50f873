//! Pre-defined type aliases for common `DynMatrix` element types.

use super::DynMatrix;

/// Dynamic matrix with `f32` elements.
pub type DynMatrixf32 = DynMatrix<f32>;
/// Dynamic matrix with `f64` elements.
pub type DynMatrixf64 = DynMatrix<f64>;
/// Dynamic matrix with `i32` elements.
pub type DynMatrixi32 = DynMatrix<i32>;
/// Dynamic matrix with `i64` elements.
pub type DynMatrixi64 = DynMatrix<i64>;
/// Dynamic matrix with `u32` elements.
pub type DynMatrixu32 = DynMatrix<u32>;
/// Dynamic matrix with `u64` elements.
pub type DynMatrixu64 = DynMatrix<u64>;
