//! Engine Math Library
//!
//! Fixed-size vector types with 2, 3 and 4 components over a floating-point scalar
//! (`f32` or `f64`), together with the approximate-equality policy used to compare them.
//!
//! All operations are total: division by a near-zero scalar, normalization of the zero
//! vector, projection onto a zero-length target and reflection across a zero normal fall
//! back to the zero vector (or the identity) instead of producing infinities or NaNs.
//!
//! Debug builds only assert on a near-zero divisor when the `strict-division` feature is
//! enabled. Without it, every build takes the zero-vector fallback silently (a `trace` log
//! record is emitted through the `log` facade).
//!
//! # Examples
//! ```
//! use engine_math::{Vector2f, Vector3f};
//!
//! let cross = Vector3f::new(1.0, 2.0, 3.0).cross(Vector3f::new(4.0, 5.0, 6.0));
//! assert_eq!(cross, Vector3f::new(-3.0, 6.0, -3.0));
//!
//! let angle = Vector2f::new(1.0, 1.0).angle_to(Vector2f::new(1.0, -1.0));
//! assert!((angle + std::f32::consts::FRAC_PI_2).abs() < 1e-6);
//!
//! assert_eq!(Vector2f::new(-1.0, 2.0).to_string(), "(-1.00, 2.00)");
//! ```

// =============================================================================
// Modules
// =============================================================================

pub mod error;
pub mod float_comparator;
pub mod scalar;
pub mod vector2;
pub mod vector3;
pub mod vector4;

mod components;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{MathError, MathResult};
pub use float_comparator::{ApproxEq, FloatComparator};
pub use scalar::Scalar;
pub use vector2::{Vector2, Vector2d, Vector2f};
pub use vector3::{Vector3, Vector3d, Vector3f};
pub use vector4::{Vector4, Vector4d, Vector4f};

/// Number of decimal digits used by the vector `Display` impls when the formatter
/// does not specify a precision.
pub const DEFAULT_DISPLAY_PRECISION: usize = 2;
