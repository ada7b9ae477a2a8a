//! Scalar kinds the vector types are generic over
//!
//! The vector types accept any [`Scalar`], which is implemented for `f32` and `f64`.
//! Machine epsilon comes from [`num_traits::Float::epsilon`] and serves two distinct
//! purposes:
//! - as an *absolute* threshold for the division guards ([`is_safe_divisor`]);
//! - scaled by 5 as the *relative* tolerance of the vector equality operators
//!   ([`Scalar::EQUALITY_EPSILON`]).

use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

use num_traits::Float;

/// Floating-point kinds usable as vector components
pub trait Scalar:
    Float
    + Default
    + fmt::Debug
    + fmt::Display
    + FromStr<Err = ParseFloatError>
    + Send
    + Sync
    + 'static
{
    /// Relative tolerance used by the vector `==`/`!=` operators: `5 * epsilon`.
    const EQUALITY_EPSILON: Self;

    /// Returns `2`.
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

impl Scalar for f32 {
    const EQUALITY_EPSILON: Self = 5.0 * f32::EPSILON;
}

impl Scalar for f64 {
    const EQUALITY_EPSILON: Self = 5.0 * f64::EPSILON;
}

/// Checks whether `divisor` is far enough from zero for a vector division
///
/// A divisor passes when its magnitude is strictly greater than machine epsilon. Callers
/// take the zero-vector fallback when this returns `false`. With the `strict-division`
/// feature the check additionally asserts in debug builds.
#[inline]
pub fn is_safe_divisor<T: Scalar>(divisor: T) -> bool {
    let safe = divisor.abs() > T::epsilon();

    #[cfg(feature = "strict-division")]
    debug_assert!(safe, "Division by near-zero scalar {}", divisor);

    if !safe {
        log::trace!("division by near-zero scalar {divisor}, using the zero vector");
    }
    safe
}
