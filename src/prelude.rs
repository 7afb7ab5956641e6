#[allow(unused_imports)]
pub use num_traits;

#[allow(unused_imports)]
pub use crate::{
    error::{MathError, Result},
    matrix::{Matrix, Matrix2d, Matrix2f, Matrix3d, Matrix3f, Matrix4d, Matrix4f},
    util,
    util::{almost_eq, is_zero, lerp, DEFAULT_TOLERANCE},
    vector3::{Vector3, Vector3d, Vector3f},
};
