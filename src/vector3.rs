use crate::error::{MathError, Result};
use crate::util;
use num_traits::Float;
use std::fmt;
use std::fmt::Formatter;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use tracing::debug;

/// A 3D vector representation, generic over its floating-point scalar type.
///
/// [`Vector3`] provides the usual vector operations: addition, subtraction,
/// scaling, normalisation, dot and cross products. It is a plain `Copy`
/// value type with no interior state; every operation either returns a new
/// vector or mutates `self` in a single step.
///
/// # Examples
///
/// ```
/// use linmat::vector3::Vector3;
///
/// let v1 = Vector3 { x: 3.0, y: 4.0, z: 0.0 };
/// let v2 = Vector3 { x: 1.0, y: 2.0, z: 3.0 };
///
/// let sum = v1 + v2;
/// assert_eq!(sum, Vector3 { x: 4.0, y: 6.0, z: 3.0 });
/// assert_eq!(v1.len(), 5.0);
/// ```
///
/// # Equality
/// Two vectors are considered equal if each pair of components differs by at
/// most [`DEFAULT_TOLERANCE`](crate::util::DEFAULT_TOLERANCE). This handles
/// floating point imprecision; use [`Vector3::almost_eq_tol`] for an
/// explicit tolerance.
#[derive(Debug, Copy, Clone)]
pub struct Vector3<T: Float> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// [`Vector3`] with single precision.
pub type Vector3f = Vector3<f32>;
/// [`Vector3`] with double precision.
pub type Vector3d = Vector3<f64>;

impl<T: Float> Vector3<T> {
    pub fn new(x: T, y: T, z: T) -> Vector3<T> {
        Vector3 { x, y, z }
    }

    /// Creates a new vector with all components set to the given value.
    #[must_use]
    pub fn splat(v: T) -> Vector3<T> {
        Vector3 { x: v, y: v, z: v }
    }

    /// Returns the zero vector, the recognised "no direction" special value.
    #[must_use]
    pub fn zero() -> Vector3<T> {
        Self::splat(T::zero())
    }

    /// Returns a vector with all components set to 1.
    #[must_use]
    pub fn one() -> Vector3<T> {
        Self::splat(T::one())
    }

    /// Returns the squared length of the vector.
    ///
    /// Use this instead of [`len`](Vector3::len) when comparing lengths to
    /// avoid the computationally expensive square root operation.
    #[must_use]
    pub fn len_squared(&self) -> T {
        self.dot(*self)
    }

    /// Returns the length (magnitude) of the vector.
    #[must_use]
    pub fn len(&self) -> T {
        self.len_squared().sqrt()
    }

    /// Scales the vector in place so its length becomes 1.
    ///
    /// If the current length is within tolerance of zero there is no
    /// meaningful direction to keep; the vector is left unchanged. This is
    /// the documented no-op case, not an error.
    pub fn normalize(&mut self) {
        let len = self.len();
        if util::is_zero(len) {
            debug!("normalize: near-zero length, leaving vector unchanged");
            return;
        }
        let inv_len = T::one() / len;
        self.x = self.x * inv_len;
        self.y = self.y * inv_len;
        self.z = self.z * inv_len;
    }

    /// Returns a normalised (unit) vector in the same direction as this
    /// vector, or the vector unchanged if its length is within tolerance of
    /// zero.
    #[must_use]
    pub fn normed(&self) -> Vector3<T> {
        let mut rv = *self;
        rv.normalize();
        rv
    }

    /// Returns the dot product of two vectors.
    #[must_use]
    pub fn dot(&self, rhs: Vector3<T>) -> T {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Returns the cross product of two vectors (right-hand rule).
    ///
    /// # Examples
    ///
    /// ```
    /// use linmat::vector3::Vector3d;
    /// let x = Vector3d::new(1.0, 0.0, 0.0);
    /// let y = Vector3d::new(0.0, 1.0, 0.0);
    /// assert_eq!(x.cross(y), Vector3d::new(0.0, 0.0, 1.0));
    /// ```
    #[must_use]
    pub fn cross(&self, rhs: Vector3<T>) -> Vector3<T> {
        Vector3 {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    /// Returns the vector divided by a scalar, failing with
    /// [`MathError::DivisionByZero`] when the scalar is within tolerance of
    /// zero.
    pub fn divided(&self, scalar: T) -> Result<Vector3<T>> {
        if util::is_zero(scalar) {
            return Err(MathError::DivisionByZero);
        }
        let inv = T::one() / scalar;
        Ok(*self * inv)
    }

    /// Divides the vector by a scalar in place, failing with
    /// [`MathError::DivisionByZero`] when the scalar is within tolerance of
    /// zero. On failure the vector is left unchanged.
    pub fn divide_by(&mut self, scalar: T) -> Result<()> {
        *self = self.divided(scalar)?;
        Ok(())
    }

    /// Checks if the vector is approximately equal to another vector, with
    /// an explicit per-component tolerance.
    pub fn almost_eq_tol(&self, rhs: Vector3<T>, tolerance: T) -> bool {
        util::almost_eq_tol(self.x, rhs.x, tolerance)
            && util::almost_eq_tol(self.y, rhs.y, tolerance)
            && util::almost_eq_tol(self.z, rhs.z, tolerance)
    }
}

impl<T: Float> Default for Vector3<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Float> PartialEq for Vector3<T> {
    fn eq(&self, other: &Self) -> bool {
        self.almost_eq_tol(*other, util::default_tolerance())
    }
}

impl<T: Float> From<[T; 3]> for Vector3<T> {
    fn from(value: [T; 3]) -> Self {
        Vector3 {
            x: value[0],
            y: value[1],
            z: value[2],
        }
    }
}

impl<T: Float> From<Vector3<T>> for [T; 3] {
    fn from(value: Vector3<T>) -> Self {
        [value.x, value.y, value.z]
    }
}

impl<T: Float + fmt::Display> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision();

        write!(f, "vec(")?;
        if let Some(p) = precision {
            write!(f, "{0:.1$}", self.x, p)?;
            write!(f, ", {0:.1$}", self.y, p)?;
            write!(f, ", {0:.1$}", self.z, p)?;
        } else {
            write!(f, "{}, {}, {}", self.x, self.y, self.z)?;
        }
        write!(f, ")")
    }
}

impl<T: Float> Add<Vector3<T>> for Vector3<T> {
    type Output = Vector3<T>;

    fn add(self, rhs: Vector3<T>) -> Self::Output {
        Vector3 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}
impl<T: Float> AddAssign<Vector3<T>> for Vector3<T> {
    fn add_assign(&mut self, rhs: Vector3<T>) {
        *self = *self + rhs;
    }
}

impl<T: Float> Sub<Vector3<T>> for Vector3<T> {
    type Output = Vector3<T>;

    fn sub(self, rhs: Vector3<T>) -> Self::Output {
        Vector3 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}
impl<T: Float> SubAssign<Vector3<T>> for Vector3<T> {
    fn sub_assign(&mut self, rhs: Vector3<T>) {
        *self = *self - rhs;
    }
}

impl<T: Float> Neg for Vector3<T> {
    type Output = Vector3<T>;

    fn neg(self) -> Self::Output {
        Vector3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl<T: Float> Mul<T> for Vector3<T> {
    type Output = Vector3<T>;

    fn mul(self, rhs: T) -> Self::Output {
        Vector3 {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}
impl<T: Float> MulAssign<T> for Vector3<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl Mul<Vector3<f32>> for f32 {
    type Output = Vector3<f32>;

    fn mul(self, rhs: Vector3<f32>) -> Self::Output {
        rhs * self
    }
}
impl Mul<Vector3<f64>> for f64 {
    type Output = Vector3<f64>;

    fn mul(self, rhs: Vector3<f64>) -> Self::Output {
        rhs * self
    }
}

impl<T: Float> Sum for Vector3<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, v| acc + v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Basic Operations ====================

    #[test]
    fn vector3_addition() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
    }

    #[test]
    fn vector3_subtraction() {
        let a = Vector3::new(5.0, 7.0, 9.0);
        let b = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(a - b, Vector3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn vector3_add_assign() {
        let mut a = Vector3::new(1.0, 2.0, 3.0);
        a += Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a, Vector3::new(5.0, 7.0, 9.0));
    }

    #[test]
    fn vector3_sub_assign() {
        let mut a = Vector3::new(5.0, 7.0, 9.0);
        a -= Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(a, Vector3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn vector3_scalar_multiplication() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, Vector3::new(2.0, 4.0, 6.0));

        let mut b = Vector3::new(1.0_f32, 2.0, 3.0);
        b *= 3.0;
        assert_eq!(b, Vector3::new(3.0, 6.0, 9.0));
    }

    #[test]
    fn vector3_negation() {
        let a = Vector3::new(1.0, -2.0, 3.0);
        assert_eq!(-a, Vector3::new(-1.0, 2.0, -3.0));
    }

    #[test]
    fn vector3_division() {
        let a = Vector3::new(4.0, 6.0, 8.0);
        assert_eq!(a.divided(2.0).unwrap(), Vector3::new(2.0, 3.0, 4.0));

        let mut b = Vector3::new(4.0, 6.0, 8.0);
        b.divide_by(2.0).unwrap();
        assert_eq!(b, Vector3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn vector3_division_by_zero_fails() {
        let mut a = Vector3::new(1.0_f32, 1.0, 1.0);
        assert_eq!(a.divide_by(0.0).unwrap_err(), MathError::DivisionByZero);
        // The failed division leaves the vector unchanged.
        assert_eq!(a, Vector3::new(1.0, 1.0, 1.0));

        // Near-zero divisors within tolerance also fail.
        assert_eq!(
            Vector3d::new(1.0, 2.0, 3.0).divided(1e-12).unwrap_err(),
            MathError::DivisionByZero
        );
    }

    #[test]
    fn vector3_constants() {
        assert_eq!(Vector3::zero(), Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(Vector3::one(), Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(Vector3::splat(2.5), Vector3::new(2.5, 2.5, 2.5));
        assert_eq!(Vector3d::default(), Vector3d::zero());
    }

    #[test]
    fn vector3_sum() {
        let vecs = vec![
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(4.0, -5.0, 6.0),
            Vector3::new(-7.0, 8.0, 9.0),
        ];
        let sum: Vector3<f64> = vecs.into_iter().sum();
        assert_eq!(sum, Vector3::new(-2.0, 5.0, 18.0));
    }

    #[test]
    fn vector3_array_conversions() {
        let v: Vector3<f64> = [1.0, 2.0, 3.0].into();
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
        let arr: [f64; 3] = v.into();
        assert_eq!(arr, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn vector3_display() {
        let v = Vector3::new(1.5, 2.5, -3.0);
        assert_eq!(format!("{v}"), "vec(1.5, 2.5, -3)");
        let v2 = Vector3::new(1.23456, 7.89012, 0.5);
        assert_eq!(format!("{v2:.2}"), "vec(1.23, 7.89, 0.50)");
    }

    // ==================== Geometric Operations ====================

    #[test]
    fn vector3_len_and_len_squared() {
        let v = Vector3::new(2.0, 3.0, 6.0);
        assert_eq!(v.len_squared(), 49.0);
        assert_eq!(v.len(), 7.0);
    }

    #[test]
    fn vector3_normalize() {
        let mut v = Vector3::new(3.0, 0.0, 4.0);
        v.normalize();
        assert_eq!(v, Vector3::new(0.6, 0.0, 0.8));
        assert!(util::almost_eq(v.len(), 1.0));

        assert_eq!(
            Vector3d::new(1.0, 2.0, 2.0).normed(),
            Vector3d::new(1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0)
        );
    }

    #[test]
    fn vector3_normalize_zero_is_noop() {
        let mut v = Vector3d::zero();
        v.normalize();
        assert_eq!(v, Vector3d::zero());

        // Within tolerance of zero: also left unchanged.
        let tiny = Vector3d::new(1e-10, -1e-10, 0.0);
        assert_eq!(tiny.normed(), tiny);
    }

    #[test]
    fn vector3_dot() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, -5.0, 6.0);
        assert_eq!(a.dot(b), 12.0);
        // Orthogonal vectors have zero dot product.
        let x = Vector3d::new(1.0, 0.0, 0.0);
        let y = Vector3d::new(0.0, 1.0, 0.0);
        assert_eq!(x.dot(y), 0.0);
    }

    #[test]
    fn vector3_cross() {
        let x = Vector3d::new(1.0, 0.0, 0.0);
        let y = Vector3d::new(0.0, 1.0, 0.0);
        let z = Vector3d::new(0.0, 0.0, 1.0);
        assert_eq!(x.cross(y), z);
        assert_eq!(y.cross(z), x);
        assert_eq!(z.cross(x), y);
    }

    #[test]
    fn vector3_cross_with_self_is_zero() {
        let v = Vector3::new(1.5, -2.5, 3.5);
        assert_eq!(v.cross(v), Vector3::zero());
    }

    #[test]
    fn vector3_cross_properties() {
        let a = Vector3::new(2.0, -1.0, 3.5);
        let b = Vector3::new(-4.0, 0.5, 1.0);
        let c = a.cross(b);
        // The cross product is orthogonal to both inputs.
        assert!(util::is_zero(c.dot(a)));
        assert!(util::is_zero(c.dot(b)));
        // And anticommutative.
        assert_eq!(c, -b.cross(a));
    }

    // ==================== Equality ====================

    #[test]
    fn vector3_approximate_equality() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(1.0 + 1e-9, 2.0 - 1e-9, 3.0);
        assert_eq!(a, b);
        assert_ne!(a, Vector3::new(1.0, 2.0, 3.1));
        assert!(a.almost_eq_tol(Vector3::new(1.05, 2.0, 3.0), 0.1));
        assert!(!a.almost_eq_tol(Vector3::new(1.05, 2.0, 3.0), 0.01));
    }
}
