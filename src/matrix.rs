use crate::error::{MathError, Result};
use crate::util;
use crate::vector3::Vector3;
use itertools::iproduct;
use num_traits::{Float, One, Zero};
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};
use tracing::warn;

/// A fixed-dimension matrix, generic over its floating-point scalar type
/// and its compile-time row and column counts.
///
/// All storage is inline (`[[T; C]; R]`): copies are fully independent,
/// there is no heap indirection, and dimension mismatches between operands
/// are compile errors rather than runtime failures. Operations are pure;
/// each one either returns a new matrix or mutates `self` in a single step.
///
/// # Examples
///
/// ```
/// use linmat::matrix::Matrix;
///
/// let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
/// let b = Matrix::new([[0.0, 1.0], [1.0, 0.0]]);
/// assert_eq!(a * b, Matrix::new([[2.0, 1.0], [4.0, 3.0]]));
/// ```
///
/// # Equality
/// Matrices compare element-wise with at most
/// [`DEFAULT_TOLERANCE`](crate::util::DEFAULT_TOLERANCE) difference per
/// entry; use [`Matrix::almost_eq_tol`] for an explicit tolerance.
#[derive(Debug, Copy, Clone)]
#[must_use]
pub struct Matrix<T: Float, const R: usize, const C: usize> {
    entries: [[T; C]; R],
}

pub type Matrix2f = Matrix<f32, 2, 2>;
pub type Matrix2d = Matrix<f64, 2, 2>;
pub type Matrix3f = Matrix<f32, 3, 3>;
pub type Matrix3d = Matrix<f64, 3, 3>;
pub type Matrix4f = Matrix<f32, 4, 4>;
pub type Matrix4d = Matrix<f64, 4, 4>;

impl<T: Float, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a matrix from exactly `R` rows of exactly `C` entries each.
    /// The shape is checked by the type system.
    pub fn new(entries: [[T; C]; R]) -> Matrix<T, R, C> {
        Matrix { entries }
    }

    /// Creates an all-zero matrix.
    pub fn zero() -> Matrix<T, R, C> {
        Matrix {
            entries: [[T::zero(); C]; R],
        }
    }

    /// Creates a matrix from a runtime-sized nested sequence.
    ///
    /// The dimension-checked [`Matrix::new`] is preferred where the shape is
    /// known statically; this is the fallible path for data arriving with no
    /// compile-time shape. Fails with [`MathError::InvalidArgument`] naming
    /// the expected count when the input does not supply exactly `R` rows of
    /// exactly `C` entries, leaving no partial result.
    pub fn try_from_rows(rows: &[&[T]]) -> Result<Matrix<T, R, C>> {
        if rows.len() != R {
            return Err(MathError::InvalidArgument(format!(
                "number of rows must be {}",
                R
            )));
        }
        let mut m = Self::zero();
        for (r, row) in rows.iter().enumerate() {
            if row.len() != C {
                return Err(MathError::InvalidArgument(format!(
                    "number of columns must be {}",
                    C
                )));
            }
            m.entries[r].copy_from_slice(row);
        }
        Ok(m)
    }

    pub const fn row_count(&self) -> usize {
        R
    }
    pub const fn col_count(&self) -> usize {
        C
    }

    /// Returns a reference to the given row, failing with
    /// [`MathError::OutOfRange`] (naming the maximum valid row) when
    /// `row >= R`. Column bounds within the returned fixed-size row are
    /// checked by ordinary array indexing.
    ///
    /// # Examples
    ///
    /// ```
    /// use linmat::matrix::Matrix3d;
    ///
    /// let m = Matrix3d::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    /// assert_eq!(m.row(1).unwrap()[1], 5.0);
    /// assert!(m.row(5).is_err());
    /// ```
    pub fn row(&self, row: usize) -> Result<&[T; C]> {
        if row >= R {
            return Err(MathError::OutOfRange { row, max_row: R });
        }
        Ok(&self.entries[row])
    }

    /// Mutable variant of [`Matrix::row`].
    pub fn row_mut(&mut self, row: usize) -> Result<&mut [T; C]> {
        if row >= R {
            return Err(MathError::OutOfRange { row, max_row: R });
        }
        Ok(&mut self.entries[row])
    }

    /// Returns the full backing array of rows.
    pub fn rows(&self) -> &[[T; C]; R] {
        &self.entries
    }

    /// Creates a new matrix that is the transpose of this matrix: entry
    /// `(r, c)` of the result equals entry `(c, r)` of the source.
    pub fn transpose(&self) -> Matrix<T, C, R> {
        let mut transposed = Matrix::<T, C, R>::zero();
        for (r, c) in iproduct!(0..C, 0..R) {
            transposed.entries[r][c] = self.entries[c][r];
        }
        transposed
    }

    /// Compares two matrices for element-wise approximate equality with an
    /// explicit tolerance.
    pub fn almost_eq_tol(&self, rhs: Matrix<T, R, C>, tolerance: T) -> bool {
        self.entries
            .iter()
            .zip(rhs.entries.iter())
            .all(|(a, b)| util::almost_eq_slice_tol(a, b, tolerance))
    }
}

impl<T: Float, const N: usize> Matrix<T, N, N> {
    /// Creates an identity matrix: 1 on the diagonal, 0 elsewhere.
    /// Only available for square matrices.
    pub fn identity() -> Matrix<T, N, N> {
        let mut m = Self::zero();
        for i in 0..N {
            m.entries[i][i] = T::one();
        }
        m
    }

    /// Computes the inverse by Gauss-Jordan elimination.
    ///
    /// Valid for any square size; for 2x2 and 3x3 matrices the closed forms
    /// [`Matrix::inverse2x2`] and [`Matrix::inverse3x3`] run in a fixed
    /// number of instructions, while this path is O(N³).
    ///
    /// Conceptually this builds the augmented matrix `[A | I]` and row
    /// reduces the left half to the identity; the two halves are kept as
    /// parallel arrays with every row operation applied to both. Per pivot
    /// column: a pivot within tolerance of zero triggers a search of the
    /// rows below for a usable entry to swap in. If none exists the matrix
    /// is singular and the whole operation fails with
    /// [`MathError::NotInvertible`], no partial result.
    ///
    /// # Examples
    ///
    /// ```
    /// use linmat::matrix::Matrix2d;
    ///
    /// let m = Matrix2d::new([[2.0, 1.0], [1.0, 3.0]]);
    /// let inv = m.inverse().unwrap();
    /// assert_eq!(m * inv, Matrix2d::identity());
    /// ```
    pub fn inverse(&self) -> Result<Matrix<T, N, N>> {
        let mut left = self.entries;
        let mut right = Self::identity().entries;

        for i in 0..N {
            if util::is_zero(left[i][i]) {
                match (i + 1..N).find(|&k| !util::is_zero(left[k][i])) {
                    Some(k) => {
                        left.swap(i, k);
                        right.swap(i, k);
                    }
                    None => return Err(MathError::NotInvertible),
                }
            }

            let inv_pivot = T::one() / left[i][i];
            for j in 0..N {
                left[i][j] = left[i][j] * inv_pivot;
                right[i][j] = right[i][j] * inv_pivot;
            }

            for k in 0..N {
                // Rows already zero in the pivot column need no elimination.
                if k != i && !util::is_zero(left[k][i]) {
                    let factor = left[k][i];
                    for j in 0..N {
                        left[k][j] = left[k][j] - factor * left[i][j];
                        right[k][j] = right[k][j] - factor * right[i][j];
                    }
                }
            }
        }

        Ok(Matrix { entries: right })
    }
}

impl<T: Float> Matrix<T, 2, 2> {
    /// Calculates the determinant.
    pub fn det(&self) -> T {
        let [[a, b], [c, d]] = self.entries;
        a * d - b * c
    }

    /// Computes the inverse by the 2x2 closed form, failing with
    /// [`MathError::NotInvertible`] when the determinant is within tolerance
    /// of zero.
    pub fn inverse2x2(&self) -> Result<Matrix<T, 2, 2>> {
        let [[a, b], [c, d]] = self.entries;

        let det = self.det();
        if util::is_zero(det) {
            return Err(MathError::NotInvertible);
        }
        let inv_det = T::one() / det;

        Ok(Matrix {
            entries: [[d * inv_det, -b * inv_det], [-c * inv_det, a * inv_det]],
        })
    }
}

impl<T: Float> Matrix<T, 3, 3> {
    /// Calculates the determinant by cofactor expansion along the first row.
    pub fn det(&self) -> T {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.entries;
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    /// Computes the inverse by the 3x3 closed form (adjugate over
    /// determinant), failing with [`MathError::NotInvertible`] when the
    /// determinant is within tolerance of zero.
    pub fn inverse3x3(&self) -> Result<Matrix<T, 3, 3>> {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.entries;

        let det = self.det();
        if util::is_zero(det) {
            return Err(MathError::NotInvertible);
        }
        let inv_det = T::one() / det;

        Ok(Matrix {
            entries: [
                [
                    (e * i - f * h) * inv_det,
                    (c * h - b * i) * inv_det,
                    (b * f - c * e) * inv_det,
                ],
                [
                    (f * g - d * i) * inv_det,
                    (a * i - c * g) * inv_det,
                    (c * d - a * f) * inv_det,
                ],
                [
                    (d * h - e * g) * inv_det,
                    (b * g - a * h) * inv_det,
                    (a * e - b * d) * inv_det,
                ],
            ],
        })
    }
}

impl<T: Float> Matrix<T, 4, 4> {
    /// Applies the matrix to a 3D point as a projective transform.
    ///
    /// Computes the homogeneous product with `(x, y, z, 1)`, then divides
    /// the first three components by the fourth (the homogeneous divisor) to
    /// project back into 3D. No zero-divisor check is performed: a divisor
    /// within tolerance of zero produces an infinite or NaN result, the
    /// usual perspective-divide semantics. A warning is logged in that case
    /// since the input was almost certainly degenerate.
    pub fn transform_point(&self, rhs: Vector3<T>) -> Vector3<T> {
        let [[a, b, c, d], [e, f, g, h], [i, j, k, l], [m, n, o, p]] = self.entries;

        let divisor = m * rhs.x + n * rhs.y + o * rhs.z + p;
        if util::is_zero(divisor) {
            warn!("transform_point: near-zero homogeneous divisor, expect a non-finite result");
        }

        Vector3 {
            x: (a * rhs.x + b * rhs.y + c * rhs.z + d) / divisor,
            y: (e * rhs.x + f * rhs.y + g * rhs.z + h) / divisor,
            z: (i * rhs.x + j * rhs.y + k * rhs.z + l) / divisor,
        }
    }
}

impl<T: Float, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Float, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    fn from(entries: [[T; C]; R]) -> Self {
        Self::new(entries)
    }
}

impl<T: Float, const R: usize, const C: usize> PartialEq for Matrix<T, R, C> {
    fn eq(&self, other: &Self) -> bool {
        self.almost_eq_tol(*other, util::default_tolerance())
    }
}

impl<T: Float, const R: usize, const C: usize> Add<Matrix<T, R, C>> for Matrix<T, R, C> {
    type Output = Matrix<T, R, C>;

    fn add(self, rhs: Matrix<T, R, C>) -> Self::Output {
        let mut out = self;
        out += rhs;
        out
    }
}
impl<T: Float, const R: usize, const C: usize> AddAssign<Matrix<T, R, C>> for Matrix<T, R, C> {
    fn add_assign(&mut self, rhs: Matrix<T, R, C>) {
        for (r, c) in iproduct!(0..R, 0..C) {
            self.entries[r][c] = self.entries[r][c] + rhs.entries[r][c];
        }
    }
}

impl<T: Float, const R: usize, const C: usize> Sub<Matrix<T, R, C>> for Matrix<T, R, C> {
    type Output = Matrix<T, R, C>;

    fn sub(self, rhs: Matrix<T, R, C>) -> Self::Output {
        let mut out = self;
        out -= rhs;
        out
    }
}
impl<T: Float, const R: usize, const C: usize> SubAssign<Matrix<T, R, C>> for Matrix<T, R, C> {
    fn sub_assign(&mut self, rhs: Matrix<T, R, C>) {
        for (r, c) in iproduct!(0..R, 0..C) {
            self.entries[r][c] = self.entries[r][c] - rhs.entries[r][c];
        }
    }
}

impl<T: Float, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C> {
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: T) -> Self::Output {
        let mut out = self;
        out *= rhs;
        out
    }
}
impl<T: Float, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C> {
    fn mul_assign(&mut self, rhs: T) {
        for (r, c) in iproduct!(0..R, 0..C) {
            self.entries[r][c] = self.entries[r][c] * rhs;
        }
    }
}

/// Standard matrix product: `R x K` times `K x C` yields `R x C`. The inner
/// dimensions must agree, which the type system enforces before any
/// arithmetic happens; each result entry is the dot product of the
/// corresponding left row and right column, accumulated in `T`.
impl<T: Float, const R: usize, const K: usize, const C: usize> Mul<Matrix<T, K, C>>
    for Matrix<T, R, K>
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: Matrix<T, K, C>) -> Self::Output {
        let mut out = Matrix::<T, R, C>::zero();
        for (r, c) in iproduct!(0..R, 0..C) {
            let mut acc = T::zero();
            for k in 0..K {
                acc = acc + self.entries[r][k] * rhs.entries[k][c];
            }
            out.entries[r][c] = acc;
        }
        out
    }
}

/// Projective transform of a 3D point; see [`Matrix::transform_point`].
impl<T: Float> Mul<Vector3<T>> for Matrix<T, 4, 4> {
    type Output = Vector3<T>;

    fn mul(self, rhs: Vector3<T>) -> Self::Output {
        self.transform_point(rhs)
    }
}

impl<T: Float, const N: usize> One for Matrix<T, N, N> {
    fn one() -> Self {
        Self::identity()
    }
}

impl<T: Float, const R: usize, const C: usize> Zero for Matrix<T, R, C> {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}
