use alloc::vec;
use alloc::vec::Vec;

use crate::linalg::{qr_in_place, qr_solve_in_place, LinalgError};
use crate::traits::FloatScalar;

use super::DynMatrix;

/// Solve the least-squares problem `min ||a*x - b||` by Householder QR.
///
/// `a` is M×N with M >= N, `b` is M×1, and `x` is a preallocated N×1
/// output. Returns [`LinalgError::DimensionMismatch`] when the shapes
/// disagree (including underdetermined systems with M < N) and
/// [`LinalgError::Singular`] when `a` is rank deficient. For square `a`
/// this solves the system exactly.
///
/// ```
/// use matrica::{least_squares, DynMatrix};
///
/// // Fit y = c0 + c1*t through (0,1), (1,2), (2,4)
/// let a = DynMatrix::from_rows(3, 2, &[1.0_f64, 0.0, 1.0, 1.0, 1.0, 2.0]);
/// let b = DynMatrix::from_rows(3, 1, &[1.0, 2.0, 4.0]);
/// let mut x = DynMatrix::zeros(2, 1, 0.0);
/// least_squares(&a, &b, &mut x).unwrap();
/// assert!((x[(0, 0)] - 5.0 / 6.0).abs() < 1e-10);
/// assert!((x[(1, 0)] - 1.5).abs() < 1e-10);
/// ```
pub fn least_squares<T: FloatScalar>(
    a: &DynMatrix<T>,
    b: &DynMatrix<T>,
    x: &mut DynMatrix<T>,
) -> Result<(), LinalgError> {
    let m = a.nrows();
    let n = a.ncols();
    if m < n {
        return Err(LinalgError::DimensionMismatch {
            expected: (n, n),
            got: (m, n),
        });
    }
    if (b.nrows(), b.ncols()) != (m, 1) {
        return Err(LinalgError::DimensionMismatch {
            expected: (m, 1),
            got: (b.nrows(), b.ncols()),
        });
    }
    if (x.nrows(), x.ncols()) != (n, 1) {
        return Err(LinalgError::DimensionMismatch {
            expected: (n, 1),
            got: (x.nrows(), x.ncols()),
        });
    }

    let mut qr = a.clone();
    let mut tau = vec![T::zero(); n];
    qr_in_place(&mut qr, &mut tau)?;

    let mut rhs: Vec<T> = b.as_slice().to_vec();
    qr_solve_in_place(&qr, &tau, &mut rhs);
    x.as_mut_slice().copy_from_slice(&rhs[..n]);
    Ok(())
}
