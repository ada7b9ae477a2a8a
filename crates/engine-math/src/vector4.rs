//! Four-component vectors
//!
//! [`Vector4`] follows the same contract as the 2D and 3D vectors, with two differences:
//!
//! - [`Vector4::cross`] only looks at the XYZ parts and always returns `w = 0`.
//! - [`Vector4::angle_to`] uses `acos(a · b / (|a| |b|))` rather than `atan2`. It is less
//!   accurate for nearly parallel vectors, and is NaN when either vector has zero length.
//!
//! # Examples
//! ```
//! use engine_math::Vector4f;
//!
//! let a = Vector4f::new(1.0, 0.0, 0.0, 7.0);
//! let b = Vector4f::new(0.0, 1.0, 0.0, -3.0);
//! assert_eq!(a.cross(b), Vector4f::unit_z());
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use num_traits::AsPrimitive;

use crate::components::{components_from_slice, parse_components};
use crate::error::{MathError, MathResult};
use crate::float_comparator::{ApproxEq, FloatComparator};
use crate::scalar::{is_safe_divisor, Scalar};
use crate::DEFAULT_DISPLAY_PRECISION;

/// A 4D vector
///
/// Compared with `==` using the relative tolerance of [`FloatComparator::vector_equality`].
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

/// A 4D vector with `f32` components
pub type Vector4f = Vector4<f32>;
/// A 4D vector with `f64` components
pub type Vector4d = Vector4<f64>;

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Vector4<T> {}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Vector4<T> {}

impl<T> Vector4<T> {
    /// Creates a new 4D vector
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }
}

impl<T: Scalar> Vector4<T> {
    /// The zero vector
    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// A vector with every component set to 1
    #[inline]
    pub fn one() -> Self {
        Self::splat(T::one())
    }

    /// A unit vector pointing in the X direction
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::zero())
    }

    /// A unit vector pointing in the Y direction
    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one(), T::zero(), T::zero())
    }

    /// A unit vector pointing in the Z direction
    #[inline]
    pub fn unit_z() -> Self {
        Self::new(T::zero(), T::zero(), T::one(), T::zero())
    }

    /// A unit vector pointing in the W direction
    #[inline]
    pub fn unit_w() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }

    /// Creates a vector from its X component, the others set to zero
    #[inline]
    pub fn with_x(x: T) -> Self {
        Self::new(x, T::zero(), T::zero(), T::zero())
    }

    /// Creates a vector from its X and Y components, the others set to zero
    #[inline]
    pub fn with_xy(x: T, y: T) -> Self {
        Self::new(x, y, T::zero(), T::zero())
    }

    /// Creates a vector from its X, Y and Z components, with W set to zero
    #[inline]
    pub fn with_xyz(x: T, y: T, z: T) -> Self {
        Self::new(x, y, z, T::zero())
    }

    /// Creates a vector with all components set to the same value
    #[inline]
    pub fn splat(value: T) -> Self {
        Self::new(value, value, value, value)
    }

    /// Converts a vector of another scalar kind, casting each component with `as`
    ///
    /// Narrowing is not checked: precision may be lost and large values may become infinite.
    #[inline]
    pub fn cast_from<U: AsPrimitive<T>>(other: Vector4<U>) -> Self {
        Self::new(other.x.as_(), other.y.as_(), other.z.as_(), other.w.as_())
    }

    /// Converts this vector to another scalar kind, casting each component with `as`
    #[inline]
    pub fn cast<U: Scalar>(self) -> Vector4<U>
    where
        T: AsPrimitive<U>,
    {
        Vector4::new(self.x.as_(), self.y.as_(), self.z.as_(), self.w.as_())
    }

    /// Overwrites this vector with the components of `other`, cast to this scalar kind
    #[inline]
    pub fn assign_cast<U: AsPrimitive<T>>(&mut self, other: Vector4<U>) -> &mut Self {
        *self = Self::cast_from(other);
        self
    }

    /// Computes the length of the vector
    #[inline]
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }

    /// Computes the squared length of the vector
    #[inline]
    pub fn length_squared(self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
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
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Computes the 3D cross product of the XYZ parts, with W set to zero
    ///
    /// The W components of both operands are ignored.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
            T::zero(),
        )
    }

    /// Computes the unsigned angle between two vectors in radians, in `[0, π]`
    ///
    /// Computed as `acos(a · b / (|a| |b|))`. The cosine is not clamped, so rounding can make
    /// nearly parallel vectors produce NaN, and a zero-length operand always does.
    ///
    /// # Examples
    /// ```
    /// use engine_math::Vector4d;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let angle = Vector4d::unit_x().angle_to(Vector4d::unit_w());
    /// assert!((angle - FRAC_PI_2).abs() < 1e-12);
    /// assert!(Vector4d::unit_x().angle_to(Vector4d::zero()).is_nan());
    /// ```
    #[inline]
    pub fn angle_to(self, other: Self) -> T {
        let length_product = self.length() * other.length();
        (self.dot(other) / length_product).acos()
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

    /// Reflects `self` across the hyperplane with the given normal
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
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
            self.w.min(other.w),
        )
    }

    /// Returns the component-wise maximum of two vectors
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
            self.w.max(other.w),
        )
    }

    /// Returns the component-wise absolute values
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs(), self.w.abs())
    }

    /// Checks if all components are finite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    /// Returns the components as an array
    #[inline]
    pub fn to_array(self) -> [T; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Renders the vector as `"(x, y, z, w)"` with `precision` decimal digits per component
    pub fn to_string_with_precision(&self, precision: usize) -> String {
        format!("{:.*}", precision, self)
    }
}

impl<T: Scalar> Default for Vector4<T> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar> ApproxEq for Vector4<T> {
    type Element = T;

    #[inline]
    fn approx_eq_with(&self, other: &Self, comparator: &FloatComparator<T>) -> bool {
        comparator.compare(self.x, other.x)
            && comparator.compare(self.y, other.y)
            && comparator.compare(self.z, other.z)
            && comparator.compare(self.w, other.w)
    }
}

impl<T: Scalar> PartialEq for Vector4<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

// Operator implementations for Vector4
impl<T: Scalar> Add for Vector4<T> {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl<T: Scalar> AddAssign for Vector4<T> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x = self.x + other.x;
        self.y = self.y + other.y;
        self.z = self.z + other.z;
        self.w = self.w + other.w;
    }
}

impl<T: Scalar> Sub for Vector4<T> {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

impl<T: Scalar> SubAssign for Vector4<T> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x = self.x - other.x;
        self.y = self.y - other.y;
        self.z = self.z - other.z;
        self.w = self.w - other.w;
    }
}

impl<T: Scalar> Neg for Vector4<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl<T: Scalar> Mul<T> for Vector4<T> {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: T) -> Self {
        Self::new(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
            self.w * scalar,
        )
    }
}

impl<T: Scalar> MulAssign<T> for Vector4<T> {
    #[inline]
    fn mul_assign(&mut self, scalar: T) {
        self.x = self.x * scalar;
        self.y = self.y * scalar;
        self.z = self.z * scalar;
        self.w = self.w * scalar;
    }
}

impl<T: Scalar> Div<T> for Vector4<T> {
    type Output = Self;
    /// Divides each component by `scalar`, or returns the zero vector when `|scalar|` is not
    /// greater than machine epsilon
    #[inline]
    fn div(self, scalar: T) -> Self {
        if is_safe_divisor(scalar) {
            Self::new(
                self.x / scalar,
                self.y / scalar,
                self.z / scalar,
                self.w / scalar,
            )
        } else {
            Self::zero()
        }
    }
}

impl<T: Scalar> DivAssign<T> for Vector4<T> {
    #[inline]
    fn div_assign(&mut self, scalar: T) {
        *self = *self / scalar;
    }
}

macro_rules! scalar_mul_vector4 {
    ($($types:ty),+) => {
        $(
            impl Mul<Vector4<$types>> for $types {
                type Output = Vector4<$types>;
                #[inline]
                fn mul(self, vector: Vector4<$types>) -> Vector4<$types> {
                    vector * self
                }
            }
        )+
    };
}
scalar_mul_vector4!(f32, f64);

impl<T> Index<usize> for Vector4<T> {
    type Output = T;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Index out of bounds for Vector4"),
        }
    }
}

impl<T> IndexMut<usize> for Vector4<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Index out of bounds for Vector4"),
        }
    }
}

impl<T> From<[T; 4]> for Vector4<T> {
    #[inline]
    fn from([x, y, z, w]: [T; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl<T> From<Vector4<T>> for [T; 4] {
    #[inline]
    fn from(vector: Vector4<T>) -> Self {
        [vector.x, vector.y, vector.z, vector.w]
    }
}

impl<T: Scalar> TryFrom<&[T]> for Vector4<T> {
    type Error = MathError;

    /// Builds a vector from a slice of exactly four components
    fn try_from(slice: &[T]) -> MathResult<Self> {
        components_from_slice::<T, 4>(slice).map(Self::from)
    }
}

impl<T: Scalar> fmt::Display for Vector4<T> {
    /// Formats as `(x, y, z, w)` using the formatter's precision, two decimal digits by default
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_DISPLAY_PRECISION);
        write!(
            f,
            "({:.*}, {:.*}, {:.*}, {:.*})",
            precision, self.x, precision, self.y, precision, self.z, precision, self.w
        )
    }
}

impl<T: Scalar> FromStr for Vector4<T> {
    type Err = MathError;

    /// Parses the `Display` form, e.g. `"(1.00, -2.50, 0.00, 1.00)"`
    fn from_str(s: &str) -> MathResult<Self> {
        parse_components::<T, 4>(s).map(Self::from)
    }
}

// Free-function forms of the binary operations

/// Dot product of two vectors, same as [`Vector4::dot`]
#[inline]
pub fn dot<T: Scalar>(v1: Vector4<T>, v2: Vector4<T>) -> T {
    v1.dot(v2)
}

/// Cross product of the XYZ parts, same as [`Vector4::cross`]
#[inline]
pub fn cross<T: Scalar>(v1: Vector4<T>, v2: Vector4<T>) -> Vector4<T> {
    v1.cross(v2)
}

/// Angle between two vectors, same as [`Vector4::angle_to`]
#[inline]
pub fn angle<T: Scalar>(v1: Vector4<T>, v2: Vector4<T>) -> T {
    v1.angle_to(v2)
}

/// Distance between two points, same as [`Vector4::distance_to`]
#[inline]
pub fn distance<T: Scalar>(v1: Vector4<T>, v2: Vector4<T>) -> T {
    v1.distance_to(v2)
}

/// Projection of `v1` onto `v2`, same as [`Vector4::projected`]
#[inline]
pub fn project<T: Scalar>(v1: Vector4<T>, v2: Vector4<T>) -> Vector4<T> {
    v1.projected(v2)
}

/// Linear interpolation between two vectors, same as [`Vector4::lerp`]
#[inline]
pub fn lerp<T: Scalar>(v1: Vector4<T>, v2: Vector4<T>, t: T) -> Vector4<T> {
    v1.lerp(v2, t)
}

/// Reflection of `v` across `normal`, same as [`Vector4::reflected`]
#[inline]
pub fn reflect<T: Scalar>(v: Vector4<T>, normal: Vector4<T>) -> Vector4<T> {
    v.reflected(normal)
}
