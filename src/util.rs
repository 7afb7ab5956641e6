use crate::error::{MathError, Result};
use num_traits::Float;
use std::fmt::Display;
use std::ops::{Add, Mul};

/// Absolute tolerance used by every comparison in the crate unless an
/// explicit tolerance is supplied. Comparisons are inclusive:
/// values differing by exactly the tolerance count as equal.
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// [`DEFAULT_TOLERANCE`] converted to the scalar type in use. Falls back to
/// the type's machine epsilon if the constant is not representable in `T`.
#[must_use]
pub fn default_tolerance<T: Float>() -> T {
    T::from(DEFAULT_TOLERANCE).unwrap_or_else(T::epsilon)
}

/// Checks two scalars for approximate equality with an explicit tolerance.
#[must_use]
pub fn almost_eq_tol<T: Float>(a: T, b: T, tolerance: T) -> bool {
    (a - b).abs() <= tolerance
}

/// Checks two scalars for approximate equality with the default tolerance.
///
/// # Examples
///
/// ```
/// use linmat::util::almost_eq;
/// assert!(almost_eq(0.1 + 0.2, 0.3));
/// assert!(!almost_eq(0.1, 0.2));
/// ```
#[must_use]
pub fn almost_eq<T: Float>(a: T, b: T) -> bool {
    almost_eq_tol(a, b, default_tolerance())
}

/// Checks whether a scalar is within an explicit tolerance of zero.
#[must_use]
pub fn is_zero_tol<T: Float>(value: T, tolerance: T) -> bool {
    almost_eq_tol(value, T::zero(), tolerance)
}

/// Checks whether a scalar is within the default tolerance of zero.
#[must_use]
pub fn is_zero<T: Float>(value: T) -> bool {
    is_zero_tol(value, default_tolerance())
}

/// Checks two slices for element-wise approximate equality with an explicit
/// tolerance. Slices of different lengths are unequal, not an error.
#[must_use]
pub fn almost_eq_slice_tol<T: Float>(a: &[T], b: &[T], tolerance: T) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b.iter())
            .all(|(&x, &y)| almost_eq_tol(x, y, tolerance))
}

/// Checks two slices for element-wise approximate equality with the default
/// tolerance.
#[must_use]
pub fn almost_eq_slice<T: Float>(a: &[T], b: &[T]) -> bool {
    almost_eq_slice_tol(a, b, default_tolerance())
}

/// A linear interpolation between two values: `a*(1-alpha) + b*alpha`.
///
/// Works for any value supporting scalar-weighted addition, so scalars and
/// [`Vector3`](crate::vector3::Vector3) both interpolate.
///
/// `alpha` must lie in `[0, 1]` inclusive; anything outside that range fails
/// with [`MathError::InvalidArgument`] naming the offending value. Callers
/// must not rely on extrapolation.
///
/// # Examples
///
/// ```
/// use linmat::util::lerp;
/// let start = 0.0;
/// let end = 10.0;
/// assert_eq!(lerp(start, end, 0.0).unwrap(), start);
/// assert_eq!(lerp(start, end, 1.0).unwrap(), end);
/// assert_eq!(lerp(start, end, 0.5).unwrap(), 5.0);
/// ```
pub fn lerp<V, T>(a: V, b: V, alpha: T) -> Result<V>
where
    T: Float + Display,
    V: Mul<T, Output = V> + Add<Output = V>,
{
    if alpha < T::zero() || alpha > T::one() {
        return Err(MathError::InvalidArgument(format!(
            "alpha must be in the range 0 to 1, but was {alpha}"
        )));
    }
    Ok(a * (T::one() - alpha) + b * alpha)
}
