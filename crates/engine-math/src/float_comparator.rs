//! Relative-tolerance comparison of floating-point values
//!
//! [`FloatComparator`] decides whether two scalars are "equal enough", scaling the tolerance
//! by the magnitude of the larger operand.
//!
//! The vector `==`/`!=` operators use [`FloatComparator::vector_equality`]. Other tolerances are
//! available through [`ApproxEq::approx_eq_with`].
//!
//! For background on approximate floating-point comparison, see:
//! <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>

use crate::scalar::Scalar;

/// Compares scalars with a relative tolerance
///
/// # Examples
/// ```
/// use engine_math::FloatComparator;
///
/// let comparator = FloatComparator::new(1e-3_f64);
/// assert!(comparator.compare(1000.0, 1000.5));
/// assert!(!comparator.compare(1.0, 1.5));
/// assert!(comparator.compare(0.0, -0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatComparator<T> {
    /// Tolerance as a fraction of the larger operand's magnitude
    pub epsilon: T,
}

impl<T> FloatComparator<T> {
    /// Creates a comparator with the given relative tolerance
    #[inline]
    pub const fn new(epsilon: T) -> Self {
        Self { epsilon }
    }
}

impl<T: Scalar> FloatComparator<T> {
    /// Comparator used by the vector equality operators (`5 * epsilon`)
    #[inline]
    pub fn vector_equality() -> Self {
        Self::new(T::EQUALITY_EPSILON)
    }

    /// Returns `true` if `lhs` and `rhs` are equal within the relative tolerance
    ///
    /// Identical finite values (including zeros of either sign) are always equal. Otherwise
    /// the values are equal iff `|lhs - rhs| < max(|lhs|, |rhs|) * epsilon`. NaN is never
    /// equal to anything.
    #[inline]
    pub fn compare(&self, lhs: T, rhs: T) -> bool {
        if lhs.is_nan() || rhs.is_nan() {
            return false;
        }

        let diff = (lhs - rhs).abs();
        // Identical finite values, including both zeros and subnormals where `max * epsilon`
        // underflows to zero.
        if diff == T::zero() {
            return true;
        }

        let max = lhs.abs().max(rhs.abs());
        diff < max * self.epsilon
    }
}

impl<T: Scalar> Default for FloatComparator<T> {
    /// Comparator with a tolerance of one machine epsilon
    fn default() -> Self {
        Self::new(T::epsilon())
    }
}

/// Types that can be compared for approximate equality with a [`FloatComparator`]
///
/// Compound types are equal when every pair of components is.
pub trait ApproxEq {
    /// Scalar kind of the compared components
    type Element: Scalar;

    /// Compares `self` and `other` component-wise with `comparator`.
    fn approx_eq_with(&self, other: &Self, comparator: &FloatComparator<Self::Element>) -> bool;

    /// Compares `self` and `other` with the tolerance of the vector equality operators.
    #[inline]
    fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_with(other, &FloatComparator::vector_equality())
    }
}

macro_rules! scalar_approx_eq {
    ($($types:ty),+) => {
        $(
            impl ApproxEq for $types {
                type Element = $types;

                #[inline]
                fn approx_eq_with(&self, other: &Self, comparator: &FloatComparator<$types>) -> bool {
                    comparator.compare(*self, *other)
                }
            }
        )+
    };
}
scalar_approx_eq!(f32, f64);
