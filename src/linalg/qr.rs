use crate::linalg::LinalgError;
use crate::traits::{FloatScalar, MatrixMut, MatrixRef};

/// QR decomposition in place using Householder reflections.
///
/// On return, `a` contains the packed QR factorization:
/// - Upper triangle (including diagonal): R
/// - Lower triangle (excluding diagonal): Householder vectors, scaled so
///   the implicit leading entry of each vector is 1
///
/// `tau` is filled with the Householder scalar factors (length N).
///
/// Works on rectangular matrices (M >= N).
/// Returns `LinalgError::Singular` if a zero column is encountered.
pub fn qr_in_place<T: FloatScalar>(
    a: &mut impl MatrixMut<T>,
    tau: &mut [T],
) -> Result<(), LinalgError> {
    let m = a.nrows();
    let n = a.ncols();
    assert!(m >= n, "QR decomposition requires M >= N");
    assert_eq!(tau.len(), n, "tau length must equal the column count");

    for col in 0..n {
        // Squared norm of the sub-column a[col:m, col]
        let mut norm_sq = T::zero();
        for i in col..m {
            let v = *a.get(i, col);
            norm_sq = norm_sq + v * v;
        }

        if norm_sq < T::epsilon() {
            return Err(LinalgError::Singular);
        }

        let norm = norm_sq.sqrt();
        let a_col_col = *a.get(col, col);

        // sigma = sign(a[col,col]) * ||x|| so that v0 = a[col,col] + sigma
        // avoids cancellation
        let sigma = if a_col_col < T::zero() { -norm } else { norm };

        // v[col] = a[col,col] + sigma; rest of v is a[col+1:m, col]
        let v0 = a_col_col + sigma;
        *a.get_mut(col, col) = v0;
        tau[col] = v0 / sigma;

        // Scale the stored vector so its leading entry is implicitly 1
        let inv_v0 = T::one() / v0;
        for i in (col + 1)..m {
            *a.get_mut(i, col) = *a.get(i, col) * inv_v0;
        }

        // Apply H = I - tau * v * v^T to the trailing columns
        for j in (col + 1)..n {
            let mut dot = *a.get(col, j);
            for i in (col + 1)..m {
                dot = dot + *a.get(i, col) * *a.get(i, j);
            }
            dot = dot * tau[col];
            *a.get_mut(col, j) = *a.get(col, j) - dot;
            for i in (col + 1)..m {
                *a.get_mut(i, j) = *a.get(i, j) - dot * *a.get(i, col);
            }
        }

        // H maps the working column to -sigma * e1
        *a.get_mut(col, col) = -sigma;
    }

    Ok(())
}

/// Solve `A x = rhs` in the least-squares sense from a packed QR factorization.
///
/// `qr` and `tau` come from [`qr_in_place`]. `rhs` holds the full
/// right-hand side (length M); on return its first N entries contain
/// the solution.
///
/// Applies the stored reflections to form `Q^T rhs`, then back-substitutes
/// against R. The R diagonal is nonzero whenever [`qr_in_place`] succeeded.
pub fn qr_solve_in_place<T: FloatScalar>(qr: &impl MatrixRef<T>, tau: &[T], rhs: &mut [T]) {
    let m = qr.nrows();
    let n = qr.ncols();
    assert_eq!(tau.len(), n, "tau length must equal the column count");
    assert_eq!(rhs.len(), m, "rhs length must equal the row count");

    // Q^T rhs: apply the reflections in factorization order
    for col in 0..n {
        let mut dot = rhs[col];
        for i in (col + 1)..m {
            dot = dot + *qr.get(i, col) * rhs[i];
        }
        dot = dot * tau[col];
        rhs[col] = rhs[col] - dot;
        for i in (col + 1)..m {
            rhs[i] = rhs[i] - dot * *qr.get(i, col);
        }
    }

    // Back-substitution against R
    for i in (0..n).rev() {
        let mut sum = rhs[i];
        for j in (i + 1)..n {
            sum = sum - *qr.get(i, j) * rhs[j];
        }
        rhs[i] = sum / *qr.get(i, i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Matrix;

    #[test]
    fn qr_r_diagonal_known() {
        // Classic Householder example: R diagonal magnitudes are 14, 175, 35
        let mut a = Matrix::new([
            [12.0_f64, -51.0, 4.0],
            [6.0, 167.0, -68.0],
            [-4.0, 24.0, -41.0],
        ]);
        let mut tau = [0.0; 3];
        qr_in_place(&mut a, &mut tau).unwrap();
        assert!((a[(0, 0)].abs() - 14.0).abs() < 1e-12);
        assert!((a[(1, 1)].abs() - 175.0).abs() < 1e-9);
        assert!((a[(2, 2)].abs() - 35.0).abs() < 1e-9);
    }

    #[test]
    fn qr_diagonal_product_matches_determinant() {
        let m = Matrix::new([
            [12.0_f64, -51.0, 4.0],
            [6.0, 167.0, -68.0],
            [-4.0, 24.0, -41.0],
        ]);
        let mut a = m;
        let mut tau = [0.0; 3];
        qr_in_place(&mut a, &mut tau).unwrap();
        let r_product = (a[(0, 0)] * a[(1, 1)] * a[(2, 2)]).abs();
        // |det(A)| = |det(R)| since Q is orthogonal
        assert!((r_product - m.det().abs()).abs() < 1e-8);
    }

    #[test]
    fn qr_solve_square_system() {
        let mut a = Matrix::new([[2.0_f64, 1.0], [1.0, 3.0]]);
        let mut tau = [0.0; 2];
        qr_in_place(&mut a, &mut tau).unwrap();

        let mut rhs = [3.0, 5.0];
        qr_solve_in_place(&a, &tau, &mut rhs);
        // 2x + y = 3, x + 3y = 5
        assert!((rhs[0] - 0.8).abs() < 1e-12);
        assert!((rhs[1] - 1.4).abs() < 1e-12);
    }

    #[test]
    fn qr_solve_overdetermined() {
        // Fit y = c0 + c1*t through (0,1), (1,2), (2,4)
        let mut a = Matrix::new([[1.0_f64, 0.0], [1.0, 1.0], [1.0, 2.0]]);
        let mut tau = [0.0; 2];
        qr_in_place(&mut a, &mut tau).unwrap();

        let mut rhs = [1.0, 2.0, 4.0];
        qr_solve_in_place(&a, &tau, &mut rhs);
        assert!((rhs[0] - 5.0 / 6.0).abs() < 1e-12);
        assert!((rhs[1] - 1.5).abs() < 1e-12);
    }

    #[test]
    fn qr_solve_exact_quadratic_fit() {
        // Vandermonde system with an exactly representable solution
        let mut a = Matrix::new([
            [1.0_f64, 1.0, 1.0],
            [1.0, 2.0, 4.0],
            [1.0, 3.0, 9.0],
            [1.0, 4.0, 16.0],
        ]);
        let mut tau = [0.0; 3];
        qr_in_place(&mut a, &mut tau).unwrap();

        // y = 2 + 0.5*t + 0.25*t^2 sampled at t = 1..4
        let mut rhs = [2.75, 4.0, 5.75, 8.0];
        qr_solve_in_place(&a, &tau, &mut rhs);
        assert!((rhs[0] - 2.0).abs() < 1e-10);
        assert!((rhs[1] - 0.5).abs() < 1e-10);
        assert!((rhs[2] - 0.25).abs() < 1e-10);
    }

    #[test]
    fn qr_zero_column_is_singular() {
        let mut a = Matrix::new([[1.0_f64, 0.0], [2.0, 0.0], [3.0, 0.0]]);
        let mut tau = [0.0; 2];
        assert_eq!(qr_in_place(&mut a, &mut tau), Err(LinalgError::Singular));
    }

    #[test]
    #[should_panic(expected = "QR decomposition requires M >= N")]
    fn qr_rejects_wide_matrix() {
        let mut a = Matrix::new([[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let mut tau = [0.0; 3];
        let _ = qr_in_place(&mut a, &mut tau);
    }
}
