//! Three-component vectors and their free-function operations

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use num_traits::AsPrimitive;

use crate::components::{components_from_slice, parse_components};
use crate::error::{MathError, MathResult};
use crate::float_comparator::{ApproxEq, FloatComparator};
use crate::scalar::{is_safe_divisor, Scalar};
use crate::DEFAULT_DISPLAY_PRECISION;

/// A 3D vector
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

pub type Vector3f = Vector3<f32>;
pub type Vector3d = Vector3<f64>;

#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Vector3<T> {}
#[cfg(feature = "bytemuck")]
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Vector3<T> {}

impl<T> Vector3<T> {
    /// Creates a new 3D vector
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Scalar> Vector3<T> {
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    #[inline]
    pub fn one() -> Self {
        Self::new(T::one(), T::one(), T::one())
    }

    #[inline]
    pub fn unit_x() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    #[inline]
    pub fn unit_y() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    #[inline]
    pub fn unit_z() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    /// Creates a vector from its X component, the others set to zero
    #[inline]
    pub fn with_x(x: T) -> Self {
        Self::new(x, T::zero(), T::zero())
    }

    /// Creates a vector from its X and Y components, with Z set to zero
    #[inline]
    pub fn with_xy(x: T, y: T) -> Self {
        Self::new(x, y, T::zero())
    }

    /// Creates a vector with all components set to the same value
    #[inline]
    pub fn splat(value: T) -> Self {
        Self::new(value, value, value)
    }

    /// Converts a vector of another scalar kind, casting each component with `as`
    #[inline]
    pub fn cast_from<U: AsPrimitive<T>>(other: Vector3<U>) -> Self {
        Self::new(other.x.as_(), other.y.as_(), other.z.as_())
    }

    /// Converts this vector to another scalar kind, casting each component with `as`
    #[inline]
    pub fn cast<U: Scalar>(self) -> Vector3<U>
    where
        T: AsPrimitive<U>,
    {
        Vector3::new(self.x.as_(), self.y.as_(), self.z.as_())
    }

    /// Overwrites this vector with the components of `other`, cast to this scalar kind
    #[inline]
    pub fn assign_cast<U: AsPrimitive<T>>(&mut self, other: Vector3<U>) -> &mut Self {
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
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns a unit vector with the same direction, or zero for a degenerate vector
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

    /// Normalizes the vector in place
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// Computes the dot product of two vectors
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product of two vectors (right-handed)
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Computes the unsigned angle between two vectors in radians, in `[0, π]`
    ///
    /// Uses `atan2(|a × b|, a · b)`. The angle to a zero vector is 0.
    #[inline]
    pub fn angle_to(self, other: Self) -> T {
        self.cross(other).length().atan2(self.dot(other))
    }

    /// Computes the distance between two points
    #[inline]
    pub fn distance_to(self, other: Self) -> T {
        (self - other).length()
    }

    /// Projects `self` onto `onto`, or returns zero when `onto` is degenerate
    #[inline]
    pub fn projected(self, onto: Self) -> Self {
        let length_squared = onto.length_squared();
        if length_squared < T::epsilon() {
            log::trace!("projecting onto degenerate vector {onto}, using the zero vector");
            return Self::zero();
        }
        onto * (self.dot(onto) / length_squared)
    }

    #[inline]
    pub fn project(&mut self, onto: Self) -> &mut Self {
        *self = self.projected(onto);
        self
    }

    /// Linear interpolation between two vectors; `t` is not clamped
    #[inline]
    pub fn lerp(self, other: Self, t: T) -> Self {
        self * (T::one() - t) + other * t
    }

    /// Reflects `self` across the plane with the given normal
    ///
    /// The normal is normalized first; a zero normal leaves the vector unchanged.
    #[inline]
    pub fn reflected(self, normal: Self) -> Self {
        let n = normal.normalized();
        self - n * (T::two() * self.dot(n))
    }

    #[inline]
    pub fn reflect(&mut self, normal: Self) -> &mut Self {
        *self = self.reflected(normal);
        self
    }

    /// Returns the component-wise minimum of two vectors
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Returns the component-wise maximum of two vectors
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    /// Returns the component-wise absolute values
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Checks if all components are finite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    #[inline]
    pub fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Renders the vector as `"(x, y, z)"` with `precision` decimal digits per component
    pub fn to_string_with_precision(&self, precision: usize) -> String {
        format!("{:.*}", precision, self)
    }
}

impl<T: Scalar> Default for Vector3<T> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar> ApproxEq for Vector3<T> {
    type Element = T;

    #[inline]
    fn approx_eq_with(&self, other: &Self, comparator: &FloatComparator<T>) -> bool {
        comparator.compare(self.x, other.x)
            && comparator.compare(self.y, other.y)
            && comparator.compare(self.z, other.z)
    }
}

impl<T: Scalar> PartialEq for Vector3<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

// Operator implementations for Vector3
impl<T: Scalar> Add for Vector3<T> {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<T: Scalar> AddAssign for Vector3<T> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x = self.x + other.x;
        self.y = self.y + other.y;
        self.z = self.z + other.z;
    }
}

impl<T: Scalar> Sub for Vector3<T> {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: Scalar> SubAssign for Vector3<T> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x = self.x - other.x;
        self.y = self.y - other.y;
        self.z = self.z - other.z;
    }
}

impl<T: Scalar> Neg for Vector3<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Scalar> Mul<T> for Vector3<T> {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: T) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl<T: Scalar> MulAssign<T> for Vector3<T> {
    #[inline]
    fn mul_assign(&mut self, scalar: T) {
        self.x = self.x * scalar;
        self.y = self.y * scalar;
        self.z = self.z * scalar;
    }
}

impl<T: Scalar> Div<T> for Vector3<T> {
    type Output = Self;
    /// Divides each component by `scalar`, or returns zero when `|scalar| <= epsilon`
    #[inline]
    fn div(self, scalar: T) -> Self {
        if is_safe_divisor(scalar) {
            Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
        } else {
            Self::zero()
        }
    }
}

impl<T: Scalar> DivAssign<T> for Vector3<T> {
    #[inline]
    fn div_assign(&mut self, scalar: T) {
        *self = *self / scalar;
    }
}

macro_rules! scalar_mul_vector3 {
    ($($types:ty),+) => {
        $(
            impl Mul<Vector3<$types>> for $types {
                type Output = Vector3<$types>;
                #[inline]
                fn mul(self, vector: Vector3<$types>) -> Vector3<$types> {
                    vector * self
                }
            }
        )+
    };
}
scalar_mul_vector3!(f32, f64);

impl<T> Index<usize> for Vector3<T> {
    type Output = T;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Index out of bounds for Vector3"),
        }
    }
}

impl<T> IndexMut<usize> for Vector3<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Index out of bounds for Vector3"),
        }
    }
}

impl<T> From<[T; 3]> for Vector3<T> {
    #[inline]
    fn from([x, y, z]: [T; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<T> From<Vector3<T>> for [T; 3] {
    #[inline]
    fn from(vector: Vector3<T>) -> Self {
        [vector.x, vector.y, vector.z]
    }
}

impl<T: Scalar> TryFrom<&[T]> for Vector3<T> {
    type Error = MathError;

    fn try_from(slice: &[T]) -> MathResult<Self> {
        components_from_slice::<T, 3>(slice).map(Self::from)
    }
}

impl<T: Scalar> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_DISPLAY_PRECISION);
        write!(
            f,
            "({:.*}, {:.*}, {:.*})",
            precision, self.x, precision, self.y, precision, self.z
        )
    }
}

impl<T: Scalar> FromStr for Vector3<T> {
    type Err = MathError;

    fn from_str(s: &str) -> MathResult<Self> {
        parse_components::<T, 3>(s).map(Self::from)
    }
}

// Free-function forms of the binary operations

#[inline]
pub fn dot<T: Scalar>(v1: Vector3<T>, v2: Vector3<T>) -> T {
    v1.dot(v2)
}

#[inline]
pub fn cross<T: Scalar>(v1: Vector3<T>, v2: Vector3<T>) -> Vector3<T> {
    v1.cross(v2)
}

#[inline]
pub fn angle<T: Scalar>(v1: Vector3<T>, v2: Vector3<T>) -> T {
    v1.angle_to(v2)
}

#[inline]
pub fn distance<T: Scalar>(v1: Vector3<T>, v2: Vector3<T>) -> T {
    v1.distance_to(v2)
}

/// Projection of `v1` onto `v2`
#[inline]
pub fn project<T: Scalar>(v1: Vector3<T>, v2: Vector3<T>) -> Vector3<T> {
    v1.projected(v2)
}

#[inline]
pub fn lerp<T: Scalar>(v1: Vector3<T>, v2: Vector3<T>, t: T) -> Vector3<T> {
    v1.lerp(v2, t)
}

/// Reflection of `v` across the plane with the given normal
#[inline]
pub fn reflect<T: Scalar>(v: Vector3<T>, normal: Vector3<T>) -> Vector3<T> {
    v.reflected(normal)
}
