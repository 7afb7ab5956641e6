//! Fixed-size linear algebra for graphics and simulation code: 3D vectors
//! and compile-time-dimensioned matrices with floating-point entries, plus
//! the shared numeric helpers (tolerance-based comparison, linear
//! interpolation) the value types are built on.
//!
//! Everything is a plain `Copy` value type with inline storage; there are no
//! allocations, no internal locking and no I/O. Dimension mismatches between
//! matrix operands are compile errors, and the fallible operations (checked
//! division, bounds-checked row access, inversion) report typed
//! [`MathError`](error::MathError) kinds callers can match on.
//!
//! # Examples
//!
//! ```
//! use linmat::prelude::*;
//!
//! let m = Matrix2d::new([[2.0, 1.0], [1.0, 3.0]]);
//! let inv = m.inverse2x2()?;
//! assert_eq!(m * inv, Matrix2d::identity());
//!
//! let v = Vector3d::new(3.0, 0.0, 4.0);
//! assert_eq!(v.len(), 5.0);
//! # Ok::<(), MathError>(())
//! ```

pub mod error;
pub mod matrix;
pub mod prelude;
pub mod util;
pub mod vector3;
