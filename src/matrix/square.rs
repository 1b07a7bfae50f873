use crate::linalg::LinalgError;
use crate::matrix::vector::Vector;
use crate::traits::{FloatScalar, Scalar};
use crate::Matrix;

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Sum of diagonal elements.
    pub fn trace(&self) -> T {
        let mut sum = T::zero();
        for i in 0..N {
            sum = sum + self[(i, i)];
        }
        sum
    }

    /// Extract the diagonal as a vector.
    pub fn diag(&self) -> Vector<T, N> {
        let mut v = Vector::zeros();
        for i in 0..N {
            v[i] = self[(i, i)];
        }
        v
    }

    /// Create a diagonal matrix from a vector.
    pub fn from_diag(v: &Vector<T, N>) -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m[(i, i)] = v[i];
        }
        m
    }

    /// Integer matrix power via repeated squaring.
    ///
    /// `pow(0)` returns the identity matrix.
    pub fn pow(&self, mut n: u32) -> Self {
        let mut result = Self::eye();
        let mut base = *self;
        while n > 0 {
            if n & 1 == 1 {
                result = result * base;
            }
            base = base * base;
            n >>= 1;
        }
        result
    }

    /// Check if the matrix is symmetric (A == A^T).
    pub fn is_symmetric(&self) -> bool {
        for i in 0..N {
            for j in (i + 1)..N {
                if self[(i, j)] != self[(j, i)] {
                    return false;
                }
            }
        }
        true
    }

    /// Determinant by recursive cofactor expansion along the first row.
    ///
    /// Exact for integer matrices (no pivoting, no division). Cost grows
    /// factorially with `N`, which is fine for the small dimensions this
    /// type targets.
    ///
    /// ```
    /// use matrica::Matrix;
    ///
    /// let m = Matrix::new([[3, -5], [7, 2]]);
    /// assert_eq!(m.det(), 41);
    /// ```
    pub fn det(&self) -> T {
        let mut skip = [false; N];
        self.minor_det(0, N, &mut skip)
    }

    // Signed cofactor expansion over the rows from `row` down, skipping
    // `skip_row` (pass N to keep every row) and the columns masked in
    // `skip`. Returns one once the rows are exhausted.
    fn minor_det(&self, row: usize, skip_row: usize, skip: &mut [bool; N]) -> T {
        let row = if row == skip_row { row + 1 } else { row };
        if row >= N {
            return T::one();
        }
        let mut det = T::zero();
        let mut sign = T::one();
        for col in 0..N {
            if skip[col] {
                continue;
            }
            let a = self[(row, col)];
            if a != T::zero() {
                skip[col] = true;
                det = det + sign * a * self.minor_det(row + 1, skip_row, skip);
                skip[col] = false;
            }
            sign = T::zero() - sign;
        }
        det
    }

    /// Adjugate (transposed cofactor matrix).
    ///
    /// `adj[(i, j)]` is `(-1)^(i+j)` times the determinant of the minor
    /// with row `j` and column `i` removed. Exact for integer matrices;
    /// `self * adj == det * identity` holds exactly.
    pub fn adjugate(&self) -> Self {
        let mut adj = Self::zeros();
        let mut skip = [false; N];
        for i in 0..N {
            for j in 0..N {
                skip[j] = true;
                let minor = self.minor_det(0, i, &mut skip);
                skip[j] = false;
                adj[(j, i)] = if (i + j) % 2 == 0 {
                    minor
                } else {
                    T::zero() - minor
                };
            }
        }
        adj
    }
}

impl<T: FloatScalar, const N: usize> Matrix<T, N, N> {
    /// Inverse via the adjugate: `adj(A) * (1 / det(A))`.
    ///
    /// Returns `Err(LinalgError::Singular)` when the determinant is
    /// exactly zero. Near-singular matrices still invert and simply
    /// produce large entries; callers that care about conditioning
    /// should inspect `det` themselves.
    ///
    /// ```
    /// use matrica::Matrix;
    ///
    /// let m: Matrix<f64, 2, 2> = Matrix::new([[4.0, 7.0], [2.0, 6.0]]);
    /// let inv = m.inverse().unwrap();
    /// let id = m * inv;
    /// assert!((id[(0, 0)] - 1.0).abs() < 1e-14);
    /// assert!(id[(0, 1)].abs() < 1e-14);
    /// ```
    pub fn inverse(&self) -> Result<Self, LinalgError> {
        let det = self.det();
        if det == T::zero() {
            return Err(LinalgError::Singular);
        }
        Ok(self.adjugate() * (T::one() / det))
    }
}
