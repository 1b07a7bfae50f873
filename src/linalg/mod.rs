pub(crate) mod qr;

pub use qr::{qr_in_place, qr_solve_in_place};

/// Errors from linear algebra operations.
///
/// Returned by `inverse`, `least_squares`, the QR kernel, and the
/// dimension-checked dynamic-matrix free functions.
///
/// ```
/// use matrica::Matrix;
/// use matrica::linalg::LinalgError;
///
/// let singular = Matrix::new([[1.0_f64, 2.0], [2.0, 4.0]]);
/// assert_eq!(singular.inverse().unwrap_err(), LinalgError::Singular);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinalgError {
    /// Matrix is singular or nearly singular.
    Singular,
    /// Operand dimensions are incompatible with the requested operation.
    DimensionMismatch {
        /// Dimensions the operation required.
        expected: (usize, usize),
        /// Dimensions it was given.
        got: (usize, usize),
    },
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::Singular => write!(f, "matrix is singular"),
            LinalgError::DimensionMismatch { expected, got } => write!(
                f,
                "dimension mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, got.0, got.1
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinalgError {}
