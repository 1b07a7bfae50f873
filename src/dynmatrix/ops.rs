use alloc::vec;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::linalg::LinalgError;
use crate::traits::Scalar;

use super::DynMatrix;

// ── Element-wise addition ───────────────────────────────────────────

impl<T: Scalar> Add for DynMatrix<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch: {}x{} + {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a + b)
            .collect();
        DynMatrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> Add<&DynMatrix<T>> for DynMatrix<T> {
    type Output = DynMatrix<T>;
    fn add(self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch: {}x{} + {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a + b)
            .collect();
        DynMatrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> Add<DynMatrix<T>> for &DynMatrix<T> {
    type Output = DynMatrix<T>;
    fn add(self, rhs: DynMatrix<T>) -> DynMatrix<T> {
        rhs + self
    }
}

impl<T: Scalar> Add<&DynMatrix<T>> for &DynMatrix<T> {
    type Output = DynMatrix<T>;
    fn add(self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch: {}x{} + {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a + b)
            .collect();
        DynMatrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> AddAssign for DynMatrix<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.add_assign(&rhs);
    }
}

impl<T: Scalar> AddAssign<&DynMatrix<T>> for DynMatrix<T> {
    fn add_assign(&mut self, rhs: &DynMatrix<T>) {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch: {}x{} += {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a + b;
        }
    }
}

// ── Element-wise subtraction ────────────────────────────────────────

impl<T: Scalar> Sub for DynMatrix<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch: {}x{} - {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a - b)
            .collect();
        DynMatrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> Sub<&DynMatrix<T>> for DynMatrix<T> {
    type Output = DynMatrix<T>;
    fn sub(self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch: {}x{} - {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a - b)
            .collect();
        DynMatrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> Sub<DynMatrix<T>> for &DynMatrix<T> {
    type Output = DynMatrix<T>;
    fn sub(self, rhs: DynMatrix<T>) -> DynMatrix<T> {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch: {}x{} - {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a - b)
            .collect();
        DynMatrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> Sub<&DynMatrix<T>> for &DynMatrix<T> {
    type Output = DynMatrix<T>;
    fn sub(self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch: {}x{} - {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a - b)
            .collect();
        DynMatrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> SubAssign for DynMatrix<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.sub_assign(&rhs);
    }
}

impl<T: Scalar> SubAssign<&DynMatrix<T>> for DynMatrix<T> {
    fn sub_assign(&mut self, rhs: &DynMatrix<T>) {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch: {}x{} -= {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a - b;
        }
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar> Neg for DynMatrix<T> {
    type Output = Self;

    fn neg(self) -> Self {
        let data = self.data.iter().map(|&x| T::zero() - x).collect();
        DynMatrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> Neg for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn neg(self) -> DynMatrix<T> {
        let data = self.data.iter().map(|&x| T::zero() - x).collect();
        DynMatrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

// ── Matrix multiplication: (M×N) * (N×P) → (M×P) ──────────────────

impl<T: Scalar> Mul for DynMatrix<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl<T: Scalar> Mul<&DynMatrix<T>> for DynMatrix<T> {
    type Output = DynMatrix<T>;
    fn mul(self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
        &self * rhs
    }
}

impl<T: Scalar> Mul<DynMatrix<T>> for &DynMatrix<T> {
    type Output = DynMatrix<T>;
    fn mul(self, rhs: DynMatrix<T>) -> DynMatrix<T> {
        self * &rhs
    }
}

impl<T: Scalar> Mul<&DynMatrix<T>> for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn mul(self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
        assert_eq!(
            self.ncols, rhs.nrows,
            "dimension mismatch: {}x{} * {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        let m = self.nrows;
        let n = self.ncols;
        let p = rhs.ncols;
        let mut data = vec![T::zero(); m * p];
        // jki order: the inner loop walks contiguous columns of A and C
        for j in 0..p {
            for k in 0..n {
                let b_kj = rhs.data[j * n + k];
                for i in 0..m {
                    data[j * m + i] = data[j * m + i] + self.data[k * m + i] * b_kj;
                }
            }
        }
        DynMatrix {
            data,
            nrows: m,
            ncols: p,
        }
    }
}

// ── Scalar multiplication: matrix * scalar ──────────────────────────

impl<T: Scalar> Mul<T> for DynMatrix<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        let data = self.data.iter().map(|&x| x * rhs).collect();
        DynMatrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> Mul<T> for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn mul(self, rhs: T) -> DynMatrix<T> {
        let data = self.data.iter().map(|&x| x * rhs).collect();
        DynMatrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> MulAssign<T> for DynMatrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        for x in self.data.iter_mut() {
            *x = *x * rhs;
        }
    }
}

// ── scalar * matrix (concrete impls) ────────────────────────────────

macro_rules! impl_scalar_mul_dyn {
    ($($t:ty),*) => {
        $(
            impl Mul<DynMatrix<$t>> for $t {
                type Output = DynMatrix<$t>;
                fn mul(self, rhs: DynMatrix<$t>) -> DynMatrix<$t> {
                    rhs * self
                }
            }

            impl Mul<&DynMatrix<$t>> for $t {
                type Output = DynMatrix<$t>;
                fn mul(self, rhs: &DynMatrix<$t>) -> DynMatrix<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul_dyn!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

// ── Scalar addition / subtraction / division ────────────────────────

impl<T: Scalar> Add<T> for DynMatrix<T> {
    type Output = Self;

    fn add(self, rhs: T) -> Self {
        let data = self.data.iter().map(|&x| x + rhs).collect();
        DynMatrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> Add<T> for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn add(self, rhs: T) -> DynMatrix<T> {
        let data = self.data.iter().map(|&x| x + rhs).collect();
        DynMatrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> AddAssign<T> for DynMatrix<T> {
    fn add_assign(&mut self, rhs: T) {
        for x in self.data.iter_mut() {
            *x = *x + rhs;
        }
    }
}

impl<T: Scalar> Sub<T> for DynMatrix<T> {
    type Output = Self;

    fn sub(self, rhs: T) -> Self {
        let data = self.data.iter().map(|&x| x - rhs).collect();
        DynMatrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> Sub<T> for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn sub(self, rhs: T) -> DynMatrix<T> {
        let data = self.data.iter().map(|&x| x - rhs).collect();
        DynMatrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> SubAssign<T> for DynMatrix<T> {
    fn sub_assign(&mut self, rhs: T) {
        for x in self.data.iter_mut() {
            *x = *x - rhs;
        }
    }
}

impl<T: Scalar> Div<T> for DynMatrix<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        let data = self.data.iter().map(|&x| x / rhs).collect();
        DynMatrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> Div<T> for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn div(self, rhs: T) -> DynMatrix<T> {
        let data = self.data.iter().map(|&x| x / rhs).collect();
        DynMatrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> DivAssign<T> for DynMatrix<T> {
    fn div_assign(&mut self, rhs: T) {
        for x in self.data.iter_mut() {
            *x = *x / rhs;
        }
    }
}

// ── Transpose ───────────────────────────────────────────────────────

impl<T: Scalar> DynMatrix<T> {
    /// Transpose: (M×N) → (N×M).
    ///
    /// ```
    /// use matrica::DynMatrix;
    /// let a = DynMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// let t = a.transpose();
    /// assert_eq!(t.nrows(), 3);
    /// assert_eq!(t.ncols(), 2);
    /// assert_eq!(t[(1, 0)], 2.0);
    /// ```
    pub fn transpose(&self) -> Self {
        DynMatrix::from_fn(self.ncols, self.nrows, |i, j| self.data[i * self.nrows + j])
    }
}

// ── Preallocated-output free functions ──────────────────────────────

fn check_same_dims<T>(a: &DynMatrix<T>, b: &DynMatrix<T>) -> Result<(), LinalgError> {
    if (a.nrows, a.ncols) != (b.nrows, b.ncols) {
        return Err(LinalgError::DimensionMismatch {
            expected: (a.nrows, a.ncols),
            got: (b.nrows, b.ncols),
        });
    }
    Ok(())
}

/// Element-wise sum into a preallocated output: `out = a + b`.
///
/// All three matrices must have identical dimensions, otherwise
/// [`LinalgError::DimensionMismatch`] is returned and `out` is untouched.
///
/// ```
/// use matrica::{add_matrices, DynMatrix};
/// let a = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
/// let b = DynMatrix::from_rows(2, 2, &[5.0, 6.0, 7.0, 8.0]);
/// let mut out = DynMatrix::zeros(2, 2, 0.0);
/// add_matrices(&a, &b, &mut out).unwrap();
/// assert_eq!(out[(0, 0)], 6.0);
/// assert_eq!(out[(1, 1)], 12.0);
/// ```
pub fn add_matrices<T: Scalar>(
    a: &DynMatrix<T>,
    b: &DynMatrix<T>,
    out: &mut DynMatrix<T>,
) -> Result<(), LinalgError> {
    check_same_dims(a, b)?;
    check_same_dims(a, out)?;
    for (o, (&x, &y)) in out.data.iter_mut().zip(a.data.iter().zip(b.data.iter())) {
        *o = x + y;
    }
    Ok(())
}

/// Element-wise difference into a preallocated output: `out = a - b`.
///
/// All three matrices must have identical dimensions, otherwise
/// [`LinalgError::DimensionMismatch`] is returned and `out` is untouched.
pub fn subtract_matrices<T: Scalar>(
    a: &DynMatrix<T>,
    b: &DynMatrix<T>,
    out: &mut DynMatrix<T>,
) -> Result<(), LinalgError> {
    check_same_dims(a, b)?;
    check_same_dims(a, out)?;
    for (o, (&x, &y)) in out.data.iter_mut().zip(a.data.iter().zip(b.data.iter())) {
        *o = x - y;
    }
    Ok(())
}

/// Scalar multiple into a preallocated output: `out = m * s`.
///
/// `m` and `out` must have identical dimensions, otherwise
/// [`LinalgError::DimensionMismatch`] is returned and `out` is untouched.
///
/// ```
/// use matrica::{scale_matrix, DynMatrix};
/// let m = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
/// let mut out = DynMatrix::zeros(2, 2, 0.0);
/// scale_matrix(&m, 3.0, &mut out).unwrap();
/// assert_eq!(out[(1, 1)], 12.0);
/// ```
pub fn scale_matrix<T: Scalar>(
    m: &DynMatrix<T>,
    s: T,
    out: &mut DynMatrix<T>,
) -> Result<(), LinalgError> {
    check_same_dims(m, out)?;
    for (o, &x) in out.data.iter_mut().zip(m.data.iter()) {
        *o = x * s;
    }
    Ok(())
}

/// Matrix product into a preallocated output: `out = a * b`.
///
/// Requires `a.ncols() == b.nrows()` and `out` sized `a.nrows() x b.ncols()`,
/// otherwise [`LinalgError::DimensionMismatch`] is returned and `out` is
/// untouched. Previous contents of `out` are overwritten.
///
/// ```
/// use matrica::{multiply_matrices, DynMatrix};
/// let a = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
/// let b = DynMatrix::from_rows(2, 2, &[5.0, 6.0, 7.0, 8.0]);
/// let mut out = DynMatrix::zeros(2, 2, 0.0);
/// multiply_matrices(&a, &b, &mut out).unwrap();
/// assert_eq!(out[(0, 0)], 19.0);
/// assert_eq!(out[(1, 1)], 50.0);
/// ```
pub fn multiply_matrices<T: Scalar>(
    a: &DynMatrix<T>,
    b: &DynMatrix<T>,
    out: &mut DynMatrix<T>,
) -> Result<(), LinalgError> {
    if a.ncols != b.nrows {
        return Err(LinalgError::DimensionMismatch {
            expected: (a.ncols, b.ncols),
            got: (b.nrows, b.ncols),
        });
    }
    if (out.nrows, out.ncols) != (a.nrows, b.ncols) {
        return Err(LinalgError::DimensionMismatch {
            expected: (a.nrows, b.ncols),
            got: (out.nrows, out.ncols),
        });
    }
    out.zero();
    let m = a.nrows;
    let n = a.ncols;
    for j in 0..b.ncols {
        for k in 0..n {
            let b_kj = b.data[j * n + k];
            for i in 0..m {
                out.data[j * m + i] = out.data[j * m + i] + a.data[k * m + i] * b_kj;
            }
        }
    }
    Ok(())
}

/// Matrix-vector product into a preallocated output: `mv = m * v`.
///
/// Requires `v.len() == m.ncols()` and `mv.len() == m.nrows()`, otherwise
/// [`LinalgError::DimensionMismatch`] is returned and `mv` is untouched.
///
/// ```
/// use matrica::{multiply_matrix_vector, DynMatrix};
/// let m = DynMatrix::from_rows(2, 3, &[1.0, -1.0, 2.0, 0.0, -3.0, 1.0]);
/// let mut mv = [0.0; 2];
/// multiply_matrix_vector(&m, &[2.0, 1.0, 0.0], &mut mv).unwrap();
/// assert_eq!(mv, [1.0, -3.0]);
/// ```
pub fn multiply_matrix_vector<T: Scalar>(
    m: &DynMatrix<T>,
    v: &[T],
    mv: &mut [T],
) -> Result<(), LinalgError> {
    if v.len() != m.ncols {
        return Err(LinalgError::DimensionMismatch {
            expected: (m.ncols, 1),
            got: (v.len(), 1),
        });
    }
    if mv.len() != m.nrows {
        return Err(LinalgError::DimensionMismatch {
            expected: (m.nrows, 1),
            got: (mv.len(), 1),
        });
    }
    for x in mv.iter_mut() {
        *x = T::zero();
    }
    for j in 0..m.ncols {
        let v_j = v[j];
        for i in 0..m.nrows {
            mv[i] = mv[i] + m.data[j * m.nrows + i] * v_j;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub() {
        let a = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = DynMatrix::from_rows(2, 2, &[5.0, 6.0, 7.0, 8.0]);

        let c = &a + &b;
        assert_eq!(c[(0, 0)], 6.0);
        assert_eq!(c[(1, 1)], 12.0);

        let d = &b - &a;
        assert_eq!(d[(0, 0)], 4.0);
        assert_eq!(d[(1, 1)], 4.0);
    }

    #[test]
    fn add_assign() {
        let mut a = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = DynMatrix::from_rows(2, 2, &[5.0, 6.0, 7.0, 8.0]);
        a += &b;
        assert_eq!(a[(0, 0)], 6.0);
        a -= &b;
        assert_eq!(a[(0, 0)], 1.0);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn add_dim_mismatch() {
        let a = DynMatrix::zeros(2, 2, 0.0_f64);
        let b = DynMatrix::zeros(2, 3, 0.0_f64);
        let _ = &a + &b;
    }

    #[test]
    fn neg() {
        let a = DynMatrix::from_rows(2, 2, &[1.0, -2.0, 3.0, -4.0]);
        let b = -a;
        assert_eq!(b[(0, 0)], -1.0);
        assert_eq!(b[(0, 1)], 2.0);
    }

    #[test]
    fn matrix_multiply() {
        let a = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = DynMatrix::from_rows(2, 2, &[5.0, 6.0, 7.0, 8.0]);
        let c = &a * &b;
        assert_eq!(c[(0, 0)], 19.0); // 1*5 + 2*7
        assert_eq!(c[(0, 1)], 22.0);
        assert_eq!(c[(1, 0)], 43.0);
        assert_eq!(c[(1, 1)], 50.0);
    }

    #[test]
    fn matrix_multiply_non_square() {
        let a = DynMatrix::from_rows(2, 3, &[0.0, 4.0, -2.0, -4.0, -3.0, 0.0]);
        let b = DynMatrix::from_rows(3, 2, &[0.0, 1.0, 1.0, -1.0, 2.0, 3.0]);
        let c = &a * &b;
        assert_eq!(c.nrows(), 2);
        assert_eq!(c.ncols(), 2);
        assert_eq!(c[(0, 0)], 0.0);
        assert_eq!(c[(0, 1)], -10.0);
        assert_eq!(c[(1, 0)], -3.0);
        assert_eq!(c[(1, 1)], -1.0);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn multiply_dim_mismatch() {
        let a = DynMatrix::zeros(2, 3, 0.0_f64);
        let b = DynMatrix::zeros(2, 2, 0.0_f64);
        let _ = &a * &b;
    }

    #[test]
    fn scalar_multiply() {
        let a = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = &a * 3.0;
        assert_eq!(b[(0, 0)], 3.0);
        assert_eq!(b[(1, 1)], 12.0);

        let c = 3.0 * &a;
        assert_eq!(c, b);
    }

    #[test]
    fn scalar_add_sub() {
        let a = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = &a + 5.0;
        assert_eq!(b[(0, 0)], 6.0);
        assert_eq!(b[(1, 1)], 9.0);
        let c = b - 5.0;
        assert_eq!(c, a);
    }

    #[test]
    fn scalar_divide() {
        let a = DynMatrix::from_rows(2, 2, &[2.0, 4.0, 6.0, 8.0]);
        let b = &a / 2.0;
        assert_eq!(b[(0, 0)], 1.0);
        assert_eq!(b[(1, 1)], 4.0);
    }

    #[test]
    fn scalar_divide_int_truncates() {
        let a = DynMatrix::from_rows(2, 2, &[7, -7, 3, 10]);
        let b = &a / 2;
        assert_eq!(b[(0, 0)], 3);
        assert_eq!(b[(0, 1)], -3);
        assert_eq!(b[(1, 0)], 1);
        assert_eq!(b[(1, 1)], 5);
    }

    #[test]
    fn scalar_assign_ops() {
        let mut a = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        a *= 2.0;
        assert_eq!(a[(0, 0)], 2.0);
        a /= 2.0;
        assert_eq!(a[(0, 0)], 1.0);
        a += 3.0;
        assert_eq!(a[(0, 0)], 4.0);
        a -= 3.0;
        assert_eq!(a[(0, 0)], 1.0);
    }

    #[test]
    fn transpose() {
        let a = DynMatrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let t = a.transpose();
        assert_eq!(t.nrows(), 3);
        assert_eq!(t.ncols(), 2);
        assert_eq!(t[(0, 0)], 1.0);
        assert_eq!(t[(1, 0)], 2.0);
        assert_eq!(t[(2, 1)], 6.0);
    }

    #[test]
    fn ref_variants() {
        let a = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = DynMatrix::from_rows(2, 2, &[5.0, 6.0, 7.0, 8.0]);

        // All ref combinations should produce the same result
        let sum1 = &a + &b;
        let sum2 = a.clone() + &b;
        let sum3 = &a + b.clone();
        let sum4 = a.clone() + b.clone();
        assert_eq!(sum1, sum2);
        assert_eq!(sum1, sum3);
        assert_eq!(sum1, sum4);
    }

    #[test]
    fn identity_multiply() {
        let a = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let id = DynMatrix::eye(2, 0.0_f64);
        assert_eq!(&a * &id, a);
        assert_eq!(&id * &a, a);
    }

    // ── Free function tests ─────────────────────────────────────

    #[test]
    fn add_matrices_into() {
        let a = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = DynMatrix::from_rows(2, 2, &[5.0, 6.0, 7.0, 8.0]);
        let mut out = DynMatrix::zeros(2, 2, 0.0);
        add_matrices(&a, &b, &mut out).unwrap();
        assert_eq!(out, &a + &b);
    }

    #[test]
    fn subtract_matrices_into() {
        let a = DynMatrix::from_rows(2, 2, &[5.0, 6.0, 7.0, 8.0]);
        let b = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let mut out = DynMatrix::zeros(2, 2, 0.0);
        subtract_matrices(&a, &b, &mut out).unwrap();
        assert_eq!(out, DynMatrix::fill(2, 2, 4.0));
    }

    #[test]
    fn add_matrices_operand_mismatch() {
        let a = DynMatrix::zeros(2, 2, 0.0_f64);
        let b = DynMatrix::zeros(2, 3, 0.0_f64);
        let mut out = DynMatrix::zeros(2, 2, 0.0_f64);
        assert_eq!(
            add_matrices(&a, &b, &mut out),
            Err(LinalgError::DimensionMismatch {
                expected: (2, 2),
                got: (2, 3),
            })
        );
    }

    #[test]
    fn add_matrices_output_mismatch() {
        let a = DynMatrix::zeros(2, 2, 0.0_f64);
        let b = DynMatrix::zeros(2, 2, 0.0_f64);
        let mut out = DynMatrix::zeros(3, 2, 0.0_f64);
        assert_eq!(
            add_matrices(&a, &b, &mut out),
            Err(LinalgError::DimensionMismatch {
                expected: (2, 2),
                got: (3, 2),
            })
        );
    }

    #[test]
    fn scale_matrix_into() {
        let m = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let mut out = DynMatrix::zeros(2, 2, 0.0);
        scale_matrix(&m, 5.0, &mut out).unwrap();
        assert_eq!(out, &m * 5.0);
    }

    #[test]
    fn multiply_matrices_into() {
        let a = DynMatrix::from_rows(2, 3, &[0.0, 4.0, -2.0, -4.0, -3.0, 0.0]);
        let b = DynMatrix::from_rows(3, 2, &[0.0, 1.0, 1.0, -1.0, 2.0, 3.0]);
        let mut out = DynMatrix::zeros(2, 2, 0.0);
        multiply_matrices(&a, &b, &mut out).unwrap();
        assert_eq!(out, &a * &b);
    }

    #[test]
    fn multiply_matrices_overwrites_output() {
        let a = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = DynMatrix::from_rows(2, 2, &[5.0, 6.0, 7.0, 8.0]);
        let mut out = DynMatrix::fill(2, 2, 99.0);
        multiply_matrices(&a, &b, &mut out).unwrap();
        assert_eq!(out[(0, 0)], 19.0);
        assert_eq!(out[(1, 1)], 50.0);
    }

    #[test]
    fn multiply_matrices_inner_mismatch() {
        let a = DynMatrix::zeros(2, 3, 0.0_f64);
        let b = DynMatrix::zeros(2, 2, 0.0_f64);
        let mut out = DynMatrix::zeros(2, 2, 0.0_f64);
        assert_eq!(
            multiply_matrices(&a, &b, &mut out),
            Err(LinalgError::DimensionMismatch {
                expected: (3, 2),
                got: (2, 2),
            })
        );
    }

    #[test]
    fn multiply_matrices_output_mismatch() {
        let a = DynMatrix::zeros(2, 3, 0.0_f64);
        let b = DynMatrix::zeros(3, 4, 0.0_f64);
        let mut out = DynMatrix::zeros(2, 2, 0.0_f64);
        assert_eq!(
            multiply_matrices(&a, &b, &mut out),
            Err(LinalgError::DimensionMismatch {
                expected: (2, 4),
                got: (2, 2),
            })
        );
    }

    #[test]
    fn multiply_matrix_vector_into() {
        let m = DynMatrix::from_rows(2, 3, &[1.0, -1.0, 2.0, 0.0, -3.0, 1.0]);
        let mut mv = [0.0; 2];
        multiply_matrix_vector(&m, &[2.0, 1.0, 0.0], &mut mv).unwrap();
        assert_eq!(mv, [1.0, -3.0]);
    }

    #[test]
    fn multiply_matrix_vector_bad_len() {
        let m = DynMatrix::zeros(2, 3, 0.0_f64);
        let mut mv = [0.0; 2];
        assert_eq!(
            multiply_matrix_vector(&m, &[1.0, 2.0], &mut mv),
            Err(LinalgError::DimensionMismatch {
                expected: (3, 1),
                got: (2, 1),
            })
        );
    }

    #[test]
    fn empty_matrices() {
        let a: DynMatrix<f64> = DynMatrix::new();
        let b: DynMatrix<f64> = DynMatrix::new();
        let mut out: DynMatrix<f64> = DynMatrix::new();
        add_matrices(&a, &b, &mut out).unwrap();
        multiply_matrices(&a, &b, &mut out).unwrap();
        assert_eq!(out, DynMatrix::new());
        assert_eq!(&a + &b, DynMatrix::new());
    }
}
