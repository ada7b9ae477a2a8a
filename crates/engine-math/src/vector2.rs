//! Two-component vectors
//!
//! [`Vector2`] is generic over the [`Scalar`] kind, with [`Vector2f`] and [`Vector2d`] as the
//! single- and double-precision aliases. Besides the methods on the type, this module offers
//! free functions ([`dot`], [`cross`], [`angle`], [`distance`], [`project`], [`lerp`],
//! [`reflect`]) that forward to the corresponding method of their first argument.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use num_traits::AsPrimitive;

use crate::components::{components_from_slice, parse_components};
use crate::error::{MathError, MathResult};
use crate::float_comparator::{ApproxEq, FloatComparator};
use crate::scalar::{is_safe_divisor, Scalar};
use crate::DEFAULT_DISPLAY_PRECISION;

/// A 2D vector
///
/// Equality is approximate: components are compared with
/// [`FloatComparator::vector_equality`] (a relative tolerance of `5 * epsilon`).
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

/// A 2D vector with `f32` components
pub type Vector2f = Vector2<f32>;
/// A 2D vector with `f64` components
pub type Vector2d = Vector2<f64>;

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Vector2<T> {}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Vector2<T> {}

impl<T> Vector2<T> {
    /// Creates a new 2D vector
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Scalar> Vector2<T> {
    /// The zero vector
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// A vector with every component set to 1
    #[inline]
    pub fn one() -> Self {
        Self::new(T::one(), T::one())
    }

    /// A unit vector pointing in the X direction
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero())
    }

    /// A unit vector pointing in the Y direction
    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// Creates a vector from its X component, with Y set to zero
    #[inline]
    pub fn with_x(x: T) -> Self {
        Self::new(x, T::zero())
    }

    /// Creates a vector with all components set to the same value
    #[inline]
    pub fn splat(value: T) -> Self {
        Self::new(value, value)
    }

    /// Converts a vector of another scalar kind, casting each component with `as`
    ///
    /// Narrowing is not checked: precision may be lost and large values may become infinite.
    ///
    /// # Examples
    /// ```
    /// use engine_math::{Vector2d, Vector2f};
    ///
    /// let v = Vector2d::cast_from(Vector2f::new(0.5, -2.0));
    /// assert_eq!(v, Vector2d::new(0.5, -2.0));
    /// ```
    #[inline]
    pub fn cast_from<U: AsPrimitive<T>>(other: Vector2<U>) -> Self {
        Self::new(other.x.as_(), other.y.as_())
    }

    /// Converts this vector to another scalar kind, casting each component with `as`
    #[inline]
    pub fn cast<U: Scalar>(self) -> Vector2<U>
    where
        T: AsPrimitive<U>,
    {
        Vector2::new(self.x.as_(), self.y.as_())
    }

    /// Overwrites this vector with the components of `other`, cast to this scalar kind
    #[inline]
    pub fn assign_cast<U: AsPrimitive<T>>(&mut self, other: Vector2<U>) -> &mut Self {
        *self = Self::cast_from(other);
        self
    }

    /// Computes the length of the vector
    #[inline]
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }

    /// Computes the squared length of the vector
    ///
    /// Cheaper than [`length`](Self::length) when only relative magnitudes matter.
    #[inline]
    pub fn length_squared(self) -> T {
        self.x * self.x + self.y * self.y
    }

    /// Returns a unit vector with the same direction
    ///
    /// Returns the zero vector when the length is not greater than machine epsilon.
    #[inline]
    pub fn normalized(self) -> Self {
        let length = self.length();
        if length > T::epsilon() {
            self / length
        } else {
            log::trace!("normalizing degenerate vector {self}, using the zero vector");
            Self::zero()
        }
    }

    /// Normalizes the vector in place, see [`normalized`](Self::normalized)
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// Computes the dot product of two vectors
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product ("perp-dot") `x1 * y2 - y1 * x2`
    ///
    /// This is the Z component of the 3D cross product of both vectors extended with Z = 0.
    /// Positive when `other` lies counter-clockwise of `self`.
    #[inline]
    pub fn cross(self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }

    /// Returns `(y, -x)`, one of the two vectors perpendicular to `self`
    ///
    /// See [`perpendicular_clockwise`](Self::perpendicular_clockwise) for the other one.
    ///
    /// # Examples
    /// ```
    /// use engine_math::Vector2f;
    ///
    /// let v = Vector2f::new(1.0, 2.0);
    /// assert_eq!(v.perpendicular(), Vector2f::new(2.0, -1.0));
    /// assert_eq!(v.perpendicular_clockwise(), Vector2f::new(-2.0, 1.0));
    /// assert_eq!(v.dot(v.perpendicular()), 0.0);
    /// ```
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Returns `(-y, x)`, the opposite of [`perpendicular`](Self::perpendicular)
    #[inline]
    pub fn perpendicular_clockwise(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Selects [`perpendicular_clockwise`](Self::perpendicular_clockwise) when `clockwise` is
    /// set, [`perpendicular`](Self::perpendicular) otherwise
    #[inline]
    pub fn perpendicular_with(self, clockwise: bool) -> Self {
        if clockwise {
            self.perpendicular_clockwise()
        } else {
            self.perpendicular()
        }
    }

    /// Computes the signed angle from `self` to `other` in radians, in `[-π, π]`
    ///
    /// Uses `atan2(cross, dot)`, which stays accurate for nearly parallel vectors. The sign
    /// follows the sign of [`cross`](Self::cross).
    ///
    /// # Examples
    /// ```
    /// use engine_math::Vector2f;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// let angle = Vector2f::new(1.0, 1.0).angle_to(Vector2f::new(1.0, -1.0));
    /// assert!((angle + FRAC_PI_2).abs() < 1e-6);
    /// ```
    #[inline]
    pub fn angle_to(self, other: Self) -> T {
        self.cross(other).atan2(self.dot(other))
    }

    /// Computes the distance between two points
    #[inline]
    pub fn distance_to(self, other: Self) -> T {
        (self - other).length()
    }

    /// Projects `self` onto `onto`
    ///
    /// Returns the zero vector when the squared length of `onto` is below machine epsilon.
    #[inline]
    pub fn projected(self, onto: Self) -> Self {
        let length_squared = onto.length_squared();
        if length_squared < T::epsilon() {
            log::trace!("projecting onto degenerate vector {onto}, using the zero vector");
            return Self::zero();
        }
        onto * (self.dot(onto) / length_squared)
    }

    /// Projects the vector in place, see [`projected`](Self::projected)
    #[inline]
    pub fn project(&mut self, onto: Self) -> &mut Self {
        *self = self.projected(onto);
        self
    }

    /// Linear interpolation between two vectors
    ///
    /// `t` is not clamped: values outside `[0, 1]` extrapolate.
    #[inline]
    pub fn lerp(self, other: Self, t: T) -> Self {
        self * (T::one() - t) + other * t
    }

    /// Reflects `self` across the line with the given normal
    ///
    /// The normal does not need to be unit length. A zero normal leaves the vector unchanged.
    #[inline]
    pub fn reflected(self, normal: Self) -> Self {
        let n = normal.normalized();
        self - n * (T::two() * self.dot(n))
    }

    /// Reflects the vector in place, see [`reflected`](Self::reflected)
    #[inline]
    pub fn reflect(&mut self, normal: Self) -> &mut Self {
        *self = self.reflected(normal);
        self
    }

    /// Returns the component-wise minimum of two vectors
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Returns the component-wise maximum of two vectors
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Returns the component-wise absolute values
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Checks if all components are finite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Returns the components as an array
    #[inline]
    pub fn to_array(self) -> [T; 2] {
        [self.x, self.y]
    }

    /// Renders the vector as `"(x, y)"` with `precision` decimal digits per component
    pub fn to_string_with_precision(&self, precision: usize) -> String {
        format!("{:.*}", precision, self)
    }
}

impl<T: Scalar> Default for Vector2<T> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar> ApproxEq for Vector2<T> {
    type Element = T;

    #[inline]
    fn approx_eq_with(&self, other: &Self, comparator: &FloatComparator<T>) -> bool {
        comparator.compare(self.x, other.x) && comparator.compare(self.y, other.y)
    }
}

impl<T: Scalar> PartialEq for Vector2<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

// Operator implementations for Vector2
impl<T: Scalar> Add for Vector2<T> {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl<T: Scalar> AddAssign for Vector2<T> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x = self.x + other.x;
        self.y = self.y + other.y;
    }
}

impl<T: Scalar> Sub for Vector2<T> {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl<T: Scalar> SubAssign for Vector2<T> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x = self.x - other.x;
        self.y = self.y - other.y;
    }
}

impl<T: Scalar> Neg for Vector2<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: Scalar> Mul<T> for Vector2<T> {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl<T: Scalar> MulAssign<T> for Vector2<T> {
    #[inline]
    fn mul_assign(&mut self, scalar: T) {
        self.x = self.x * scalar;
        self.y = self.y * scalar;
    }
}

impl<T: Scalar> Div<T> for Vector2<T> {
    type Output = Self;
    /// Divides each component by `scalar`, or returns the zero vector when `|scalar|` is not
    /// greater than machine epsilon
    #[inline]
    fn div(self, scalar: T) -> Self {
        if is_safe_divisor(scalar) {
            Self::new(self.x / scalar, self.y / scalar)
        } else {
            Self::zero()
        }
    }
}

impl<T: Scalar> DivAssign<T> for Vector2<T> {
    #[inline]
    fn div_assign(&mut self, scalar: T) {
        *self = *self / scalar;
    }
}

macro_rules! scalar_mul_vector2 {
    ($($types:ty),+) => {
        $(
            impl Mul<Vector2<$types>> for $types {
                type Output = Vector2<$types>;
                #[inline]
                fn mul(self, vector: Vector2<$types>) -> Vector2<$types> {
                    vector * self
                }
            }
        )+
    };
}
scalar_mul_vector2!(f32, f64);

impl<T> Index<usize> for Vector2<T> {
    type Output = T;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Index out of bounds for Vector2"),
        }
    }
}

impl<T> IndexMut<usize> for Vector2<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Index out of bounds for Vector2"),
        }
    }
}

impl<T> From<[T; 2]> for Vector2<T> {
    #[inline]
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<Vector2<T>> for [T; 2] {
    #[inline]
    fn from(vector: Vector2<T>) -> Self {
        [vector.x, vector.y]
    }
}

impl<T: Scalar> TryFrom<&[T]> for Vector2<T> {
    type Error = MathError;

    fn try_from(slice: &[T]) -> MathResult<Self> {
        components_from_slice::<T, 2>(slice).map(Self::from)
    }
}

impl<T: Scalar> fmt::Display for Vector2<T> {
    /// Formats as `(x, y)` using the formatter's precision, two decimal digits by default
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_DISPLAY_PRECISION);
        write!(f, "({:.*}, {:.*})", precision, self.x, precision, self.y)
    }
}

impl<T: Scalar> FromStr for Vector2<T> {
    type Err = MathError;

    /// Parses the `Display` form, e.g. `"(1.00, -2.50)"`
    fn from_str(s: &str) -> MathResult<Self> {
        parse_components::<T, 2>(s).map(Self::from)
    }
}

// Free-function forms of the binary operations

/// Dot product of two vectors, same as [`Vector2::dot`]
#[inline]
pub fn dot<T: Scalar>(v1: Vector2<T>, v2: Vector2<T>) -> T {
    v1.dot(v2)
}

/// 2D cross product of two vectors, same as [`Vector2::cross`]
#[inline]
pub fn cross<T: Scalar>(v1: Vector2<T>, v2: Vector2<T>) -> T {
    v1.cross(v2)
}

/// Signed angle from `v1` to `v2`, same as [`Vector2::angle_to`]
#[inline]
pub fn angle<T: Scalar>(v1: Vector2<T>, v2: Vector2<T>) -> T {
    v1.angle_to(v2)
}

/// Distance between two points, same as [`Vector2::distance_to`]
#[inline]
pub fn distance<T: Scalar>(v1: Vector2<T>, v2: Vector2<T>) -> T {
    v1.distance_to(v2)
}

/// Projection of `v1` onto `v2`, same as [`Vector2::projected`]
#[inline]
pub fn project<T: Scalar>(v1: Vector2<T>, v2: Vector2<T>) -> Vector2<T> {
    v1.projected(v2)
}

/// Linear interpolation between two vectors, same as [`Vector2::lerp`]
#[inline]
pub fn lerp<T: Scalar>(v1: Vector2<T>, v2: Vector2<T>, t: T) -> Vector2<T> {
    v1.lerp(v2, t)
}

/// Reflection of `v` across `normal`, same as [`Vector2::reflected`]
#[inline]
pub fn reflect<T: Scalar>(v: Vector2<T>, normal: Vector2<T>) -> Vector2<T> {
    v.reflected(normal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() <= 4.0 * f32::EPSILON * expected.abs().max(1.0),
            "{actual} is not close to {expected}"
        );
    }

    #[test]
    fn test_vector2_size() {
        assert_eq!(std::mem::size_of::<Vector2f>(), 2 * std::mem::size_of::<f32>());
        assert_eq!(std::mem::size_of::<Vector2d>(), 2 * std::mem::size_of::<f64>());
    }

    #[test]
    fn test_vector2_creation() {
        let v = Vector2f::default();
        assert_eq!(v.x, 0.0);
        assert_eq!(v.y, 0.0);

        let v = Vector2f::with_x(1.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 0.0);

        let v = Vector2f::new(1.0, 2.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);

        let v = Vector2f::splat(5.0);
        assert_eq!(v.x, 5.0);
        assert_eq!(v.y, 5.0);
    }

    #[test]
    fn test_vector2_constants() {
        assert_eq!(Vector2f::zero().to_array(), [0.0, 0.0]);
        assert_eq!(Vector2f::one().to_array(), [1.0, 1.0]);
        assert_eq!(Vector2f::unit_x().to_array(), [1.0, 0.0]);
        assert_eq!(Vector2f::unit_y().to_array(), [0.0, 1.0]);

        // Constants are plain values
        let mut zero = Vector2d::zero();
        zero.x = 3.0;
        assert_eq!(zero.x, 3.0);
        assert_eq!(Vector2d::zero(), Vector2d::new(0.0, 0.0));
    }

    #[test]
    fn test_vector2_copy_is_independent() {
        let v = Vector2f::new(1.0, 2.0);
        let mut copy = v;
        copy.x = 10.0;
        assert_eq!(v.x, 1.0);
        assert_eq!(copy.x, 10.0);
    }

    #[test]
    fn test_vector2_cast() {
        let v = Vector2f::new(1.5, -2.25);
        let widened: Vector2d = v.cast();
        assert_eq!(widened.x, 1.5);
        assert_eq!(widened.y, -2.25);

        let narrowed = Vector2f::cast_from(Vector2d::new(0.1, 1e300));
        assert_eq!(narrowed.x, 0.1f32);
        assert_eq!(narrowed.y, f32::INFINITY);

        let mut target = Vector2f::zero();
        target.assign_cast(Vector2d::new(3.0, 4.0));
        assert_eq!(target.to_array(), [3.0, 4.0]);
    }

    #[test]
    fn test_vector2_operations() {
        let a = Vector2f::new(1.0, 2.0);
        let b = Vector2f::new(3.0, 4.0);

        // Addition
        let c = a + b;
        assert_eq!(c.to_array(), [4.0, 6.0]);

        // Subtraction
        let c = a - b;
        assert_eq!(c.to_array(), [-2.0, -2.0]);

        // Multiplication, both directions
        let c = a * 2.0;
        assert_eq!(c.to_array(), [2.0, 4.0]);
        let c = 2.0 * a;
        assert_eq!(c.to_array(), [2.0, 4.0]);

        // Division
        let c = b / 2.0;
        assert_eq!(c.to_array(), [1.5, 2.0]);

        // Negation
        let c = -a;
        assert_eq!(c.to_array(), [-1.0, -2.0]);
    }

    #[test]
    fn test_vector2_assign_operations() {
        let b = Vector2f::new(3.0, 4.0);

        let mut v = Vector2f::new(1.0, 2.0);
        v += b;
        assert_eq!(v.to_array(), [4.0, 6.0]);

        let mut v = Vector2f::new(1.0, 2.0);
        v -= b;
        assert_eq!(v.to_array(), [-2.0, -2.0]);

        let mut v = Vector2f::new(1.0, 2.0);
        v *= 2.0;
        assert_eq!(v.to_array(), [2.0, 4.0]);

        let mut v = Vector2f::new(1.0, 2.0);
        v /= 2.0;
        assert_eq!(v.to_array(), [0.5, 1.0]);
    }

    #[cfg(not(feature = "strict-division"))]
    #[test]
    fn test_vector2_division_by_zero() {
        let v = Vector2f::new(1.0, 2.0);
        assert_eq!((v / 0.0).to_array(), [0.0, 0.0]);
        assert_eq!((v / (f32::EPSILON / 2.0)).to_array(), [0.0, 0.0]);

        let mut v = Vector2d::new(1.0, 2.0);
        v /= -0.0;
        assert_eq!(v.to_array(), [0.0, 0.0]);
        assert!(v.is_finite());
    }

    #[test]
    fn test_vector2_equality() {
        let v1 = Vector2f::new(1.0, 2.0);
        let v2 = Vector2f::new(1.0, 2.0);
        let v3 = Vector2f::new(3.0, 4.0);

        assert!(v1 == v2);
        assert!(!(v1 == v3));
        assert!(!(v1 != v2));
        assert!(v1 != v3);

        // Within a few epsilon of the larger magnitude
        let nudged = Vector2f::new(1.0 + f32::EPSILON, 2.0 - 2.0 * f32::EPSILON);
        assert_eq!(v1, nudged);

        // Only one component differing is enough
        assert_ne!(v1, Vector2f::new(1.0, 2.001));
        assert_eq!(Vector2f::new(0.0, -0.0), Vector2f::zero());

        // Subnormal components
        let tiny = Vector2d::new(1e-310, 1.0);
        assert_eq!(tiny, tiny);
        assert!(!(tiny != tiny));
    }

    #[test]
    fn test_vector2_approx_eq_with() {
        let v1 = Vector2d::new(100.0, 200.0);
        let v2 = Vector2d::new(100.5, 199.5);
        assert!(!v1.approx_eq(&v2));
        assert!(v1.approx_eq_with(&v2, &FloatComparator::new(0.01)));
    }

    #[test]
    fn test_vector2_length() {
        let v = Vector2f::new(3.0, 4.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.length_squared(), 25.0);
        assert_eq!(Vector2f::zero().length(), 0.0);
    }

    #[test]
    fn test_vector2_normalized() {
        let v = Vector2f::new(3.0, 4.0);
        let length = v.length();

        let normalized = v.normalized();
        assert_close(normalized.length(), 1.0);
        assert_eq!(normalized, v / length);
        assert_eq!(normalized, Vector2f::new(0.6, 0.8));

        let mut v = Vector2f::new(3.0, 4.0);
        v.normalize();
        assert_close(v.length(), 1.0);
        assert_eq!(v, Vector2f::new(0.6, 0.8));
    }

    #[test]
    fn test_vector2_normalize_degenerate() {
        assert_eq!(Vector2f::zero().normalized().to_array(), [0.0, 0.0]);

        let tiny = Vector2f::new(f32::EPSILON / 4.0, 0.0);
        assert_eq!(tiny.normalized().to_array(), [0.0, 0.0]);

        let mut v = Vector2d::new(1e-20, -1e-20);
        v.normalize();
        assert_eq!(v.to_array(), [0.0, 0.0]);
    }

    #[test]
    fn test_vector2_normalize_chaining() {
        let mut v = Vector2f::new(0.0, 10.0);
        let length = v.normalize().length();
        assert_eq!(length, 1.0);
        assert_eq!(v, Vector2f::unit_y());
    }

    #[test]
    fn test_vector2_dot() {
        let v1 = Vector2f::new(1.0, 2.0);
        let v2 = Vector2f::new(3.0, 4.0);
        assert_eq!(v1.dot(v2), 11.0);
        assert_eq!(dot(v1, v2), 11.0);
        assert_eq!(Vector2f::unit_x().dot(Vector2f::unit_y()), 0.0);
    }

    #[test]
    fn test_vector2_cross() {
        let v1 = Vector2f::new(1.0, 2.0);
        let v2 = Vector2f::new(3.0, 4.0);
        assert_eq!(v1.cross(v2), -2.0);
        assert_eq!(v2.cross(v1), 2.0);
        assert_eq!(cross(v1, v2), -2.0);
        assert_eq!(Vector2f::unit_x().cross(Vector2f::unit_y()), 1.0);
    }

    #[test]
    fn test_vector2_perpendicular() {
        let v = Vector2f::new(1.0, 2.0);

        let counterclockwise = v.perpendicular();
        let clockwise = v.perpendicular_clockwise();

        assert_eq!(counterclockwise, Vector2f::new(2.0, -1.0));
        assert_eq!(clockwise, Vector2f::new(-2.0, 1.0));
        assert_eq!(v.dot(counterclockwise), 0.0);
        assert_eq!(v.dot(clockwise), 0.0);

        assert_eq!(v.perpendicular_with(false), counterclockwise);
        assert_eq!(v.perpendicular_with(true), clockwise);
    }

    #[test]
    fn test_vector2_angle_to() {
        let v1 = Vector2f::new(1.0, 1.0);
        let v2 = Vector2f::new(1.0, -1.0);
        let v3 = Vector2f::new(-1.0, 1.0);
        let v4 = Vector2f::new(1.0, 0.0);

        assert_close(v1.angle_to(v2), -FRAC_PI_2);
        assert_close(v1.angle_to(v3), FRAC_PI_2);
        assert_close(v2.angle_to(v3), PI);
        assert_close(v1.angle_to(v4), -FRAC_PI_4);

        // Signed: swapping the arguments flips the sign
        assert_close(v2.angle_to(v1), FRAC_PI_2);
        assert_eq!(angle(v1, v2), v1.angle_to(v2));

        assert_eq!(v1.angle_to(v1), 0.0);
        assert_eq!(v1.angle_to(Vector2f::zero()), 0.0);
    }

    #[test]
    fn test_vector2_distance_to() {
        let v1 = Vector2f::new(0.0, 3.0);
        let v2 = Vector2f::new(4.0, 0.0);
        assert_eq!(v1.distance_to(v2), 5.0);
        assert_eq!(v2.distance_to(v1), 5.0);
        assert_eq!(distance(v1, v2), 5.0);
        assert_eq!(v1.distance_to(v1), 0.0);
    }

    #[test]
    fn test_vector2_projected() {
        let v1 = Vector2f::new(2.0, 6.0);
        let v2 = Vector2f::new(2.0, 1.0);

        let expected = Vector2f::new(4.0, 2.0);
        assert_eq!(v1.projected(v2), expected);
        assert_eq!(project(v1, v2), expected);

        let mut v = v1;
        v.project(v2);
        assert_eq!(v, expected);
    }

    #[test]
    fn test_vector2_project_degenerate() {
        let v = Vector2f::new(3.0, 2.0);
        assert_eq!(v.projected(Vector2f::zero()).to_array(), [0.0, 0.0]);

        let mut v = Vector2d::new(3.0, 2.0);
        v.project(Vector2d::new(1e-9, 0.0));
        assert_eq!(v.to_array(), [0.0, 0.0]);
    }

    #[test]
    fn test_vector2_lerp() {
        let v1 = Vector2f::new(1.0, 2.0);
        let v2 = Vector2f::new(3.0, 4.0);

        assert_eq!(v1.lerp(v2, 0.0), v1);
        assert_eq!(v1.lerp(v2, 1.0), v2);
        assert_eq!(v1.lerp(v2, 0.5), Vector2f::new(2.0, 3.0));
        assert_eq!(lerp(v1, v2, 0.5), Vector2f::new(2.0, 3.0));

        // No clamping
        assert_eq!(v1.lerp(v2, 2.0), Vector2f::new(5.0, 6.0));
        assert_eq!(v1.lerp(v2, -1.0), Vector2f::new(-1.0, 0.0));
    }

    #[test]
    fn test_vector2_reflected() {
        let v = Vector2f::new(1.0, 3.0);
        let normal = Vector2f::new(-1.0, 2.0);
        let expected = Vector2f::new(3.0, -1.0);

        assert_eq!(v.reflected(normal), expected);
        assert_eq!(reflect(v, normal), expected);

        let mut v = Vector2f::new(1.0, 3.0);
        v.reflect(normal);
        assert_eq!(v, expected);
    }

    #[test]
    fn test_vector2_reflect_zero_normal() {
        let v = Vector2f::new(1.0, -3.0);
        assert_eq!(v.reflected(Vector2f::zero()).to_array(), [1.0, -3.0]);
    }

    #[test]
    fn test_vector2_reflect_chaining() {
        let mut v = Vector2f::new(1.0, -1.0);
        v.reflect(Vector2f::unit_y()).reflect(Vector2f::unit_x());
        assert_eq!(v, Vector2f::new(-1.0, 1.0));
    }

    #[test]
    fn test_vector2_min_max_abs() {
        let a = Vector2f::new(1.0, -5.0);
        let b = Vector2f::new(3.0, 2.0);

        assert_eq!(a.min(b), Vector2f::new(1.0, -5.0));
        assert_eq!(a.max(b), Vector2f::new(3.0, 2.0));
        assert_eq!(a.abs(), Vector2f::new(1.0, 5.0));
        assert!(a.is_finite());
        assert!(!Vector2f::new(f32::NAN, 0.0).is_finite());
    }

    #[test]
    fn test_vector2_indexing() {
        let mut v = Vector2f::new(1.0, 2.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);

        v[0] = 3.0;
        assert_eq!(v.x, 3.0);
    }

    #[test]
    #[should_panic(expected = "Index out of bounds for Vector2")]
    fn test_vector2_index_out_of_bounds() {
        let v = Vector2f::new(1.0, 2.0);
        let _ = v[2];
    }

    #[test]
    fn test_vector2_array_conversions() {
        let v = Vector2f::from([1.0, 2.0]);
        assert_eq!(v, Vector2f::new(1.0, 2.0));

        let array: [f32; 2] = v.into();
        assert_eq!(array, [1.0, 2.0]);

        let slice: &[f64] = &[5.0, 6.0];
        let v = Vector2d::try_from(slice).unwrap();
        assert_eq!(v, Vector2d::new(5.0, 6.0));

        let slice: &[f64] = &[5.0, 6.0, 7.0];
        assert_eq!(
            Vector2d::try_from(slice),
            Err(MathError::ComponentCount {
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn test_vector2_to_string() {
        let v = Vector2f::new(-1.0, 2.0);
        assert_eq!(v.to_string(), "(-1.00, 2.00)");
        assert_eq!(format!("{v}"), "(-1.00, 2.00)");
        assert_eq!(format!("{v:.3}"), "(-1.000, 2.000)");
        assert_eq!(v.to_string_with_precision(0), "(-1, 2)");
        assert_eq!(Vector2d::new(0.125, 1.0 / 3.0).to_string_with_precision(4), "(0.1250, 0.3333)");
    }

    #[test]
    fn test_vector2_from_str() {
        let v: Vector2f = "(-1.00, 2.00)".parse().unwrap();
        assert_eq!(v, Vector2f::new(-1.0, 2.0));

        let v = Vector2d::new(0.25, -7.5);
        assert_eq!(v.to_string().parse::<Vector2d>().unwrap(), v);

        assert!(matches!(
            "(1, 2, 3)".parse::<Vector2f>(),
            Err(MathError::ComponentCount {
                expected: 2,
                found: 3
            })
        ));
        assert!(matches!(
            "1, 2".parse::<Vector2f>(),
            Err(MathError::MissingDelimiters { .. })
        ));
    }
}
