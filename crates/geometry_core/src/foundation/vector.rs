//! Fixed-size numeric vector
//!
//! `Vector<N, T>` is a small value type with its arity fixed by the type.
//! Combining two vectors of different arity does not type-check, and the
//! arity-specific operations (the 2/3/4 component constructors and the cross
//! product) only exist on the matching `Vector<N, T>`, so misuse is a build
//! error rather than a runtime one.
//!
//! ```rust
//! use geometry_core::foundation::vector::{Vector, Vector3};
//!
//! let u = Vector3::new(1_i32, 2, 3);
//! let v = Vector3::new(3, 2, 1);
//! assert_eq!(u * v, 10);                        // dot product
//! assert_eq!(u % v, Vector3::new(-4, 8, -4));   // cross product
//! assert_eq!((u + 10).to_string(), "[11, 12, 13]");
//! assert_eq!(Vector::<3, i32>::splat(7), Vector3::new(7, 7, 7));
//! ```
//!
//! Component access, scalar division and normalization report misuse through
//! [`GeometryError`] while the `bounds-checks` feature is enabled. The
//! operator forms (`v[i]`, `v / s`, `v /= s`) cannot return a `Result` and
//! panic with the same error instead.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use super::scalar::Scalar;
use crate::core::checks;
use crate::core::error::{GeometryError, GeometryResult};

/// Vector of `N` elements of type `T`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector<const N: usize, T> {
    elements: [T; N],
}

/// Two component vector
pub type Vector2<T> = Vector<2, T>;

/// Three component vector
pub type Vector3<T> = Vector<3, T>;

/// Four component vector
pub type Vector4<T> = Vector<4, T>;

impl<const N: usize, T: Scalar> Vector<N, T> {
    const NON_EMPTY: () = assert!(N > 0, "vector arity must be at least 1");

    /// Create the zero vector
    pub fn zero() -> Self {
        Self::splat(T::ZERO)
    }

    /// Create a vector with `s` in every component
    pub fn splat(s: T) -> Self {
        Self { elements: [s; N] }
    }

    /// Create a vector from an array
    pub const fn from_array(elements: [T; N]) -> Self {
        Self { elements }
    }

    /// Create a vector by copying a slice of exactly `N` elements
    ///
    /// # Errors
    /// `IndexOutOfBounds` naming the slice length when it is not `N`.
    pub fn from_slice(values: &[T]) -> GeometryResult<Self> {
        let elements: [T; N] = values
            .try_into()
            .map_err(|_| GeometryError::out_of_bounds(values.len(), N))?;
        Ok(Self { elements })
    }

    /// Create a vector by evaluating `f` for every index
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self {
            elements: std::array::from_fn(f),
        }
    }

    /// Number of components
    pub const fn arity(&self) -> usize {
        N
    }

    /// Get the component at `i`
    ///
    /// # Errors
    /// `IndexOutOfBounds(i, 0, N)` when `i >= N`.
    pub fn get(&self, i: usize) -> GeometryResult<T> {
        checks::index(i, N)?;
        Ok(self.elements[i])
    }

    /// Set the component at `i`
    ///
    /// # Errors
    /// `IndexOutOfBounds(i, 0, N)` when `i >= N`.
    pub fn set(&mut self, i: usize, value: T) -> GeometryResult<()> {
        checks::index(i, N)?;
        self.elements[i] = value;
        Ok(())
    }

    /// Mutable reference to the component at `i`
    ///
    /// # Errors
    /// `IndexOutOfBounds(i, 0, N)` when `i >= N`.
    pub fn get_mut(&mut self, i: usize) -> GeometryResult<&mut T> {
        checks::index(i, N)?;
        Ok(&mut self.elements[i])
    }

    /// Components as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Components as a mutable slice
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.elements
    }

    /// Copy the components into caller-provided storage
    pub fn to_array(&self, out: &mut [T; N]) {
        *out = self.elements;
    }

    /// Consume the vector, returning its components
    pub fn into_array(self) -> [T; N] {
        self.elements
    }

    /// Apply `f` to every component
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Vector<N, U> {
        Vector {
            elements: self.elements.map(f),
        }
    }

    /// Dot product
    pub fn dot(&self, other: &Self) -> T {
        self.elements
            .iter()
            .zip(other.elements.iter())
            .fold(T::ZERO, |acc, (&a, &b)| acc + a * b)
    }

    /// True if every component is zero
    pub fn is_zero(&self) -> bool {
        self.elements.iter().all(|e| e.is_zero())
    }

    /// Euclidean length
    pub fn length(&self) -> T::Float {
        use super::scalar::FloatScalar;
        self.dot(self).to_float().sqrt()
    }

    /// Normalize in place
    ///
    /// Integer vectors are truncated toward zero after the division.
    ///
    /// # Errors
    /// `Arithmetic` when the vector has zero length.
    pub fn normalize(&mut self) -> GeometryResult<()> {
        let norm = self.length();
        if checks::ENABLED && norm.is_zero() {
            return Err(GeometryError::Arithmetic("Can not normalize the zero vector.".to_string()));
        }
        for e in &mut self.elements {
            if !e.is_zero() {
                *e = T::from_float(e.to_float() / norm);
            }
        }
        Ok(())
    }

    /// Normalized copy in the floating companion type
    ///
    /// # Errors
    /// `Arithmetic` when the vector has zero length.
    pub fn normalized(&self) -> GeometryResult<Vector<N, T::Float>> {
        let mut v = self.map(Scalar::to_float);
        v.normalize()?;
        Ok(v)
    }

    /// Distance between two points
    pub fn distance(&self, other: &Self) -> T::Float {
        (*self - *other).length()
    }

    /// Largest component
    pub fn max(&self) -> T {
        self.elements[self.max_index()]
    }

    /// Smallest component
    pub fn min(&self) -> T {
        self.elements[self.min_index()]
    }

    /// Index of the largest component; the first one wins on ties
    pub fn max_index(&self) -> usize {
        let () = Self::NON_EMPTY;
        let mut m = 0;
        for i in 1..N {
            if self.elements[i] > self.elements[m] {
                m = i;
            }
        }
        m
    }

    /// Index of the smallest component; the first one wins on ties
    pub fn min_index(&self) -> usize {
        let () = Self::NON_EMPTY;
        let mut m = 0;
        for i in 1..N {
            if self.elements[i] < self.elements[m] {
                m = i;
            }
        }
        m
    }

    /// Sum of components
    pub fn sum(&self) -> T {
        self.elements.iter().fold(T::ZERO, |acc, &e| acc + e)
    }

    /// Vector with `i32` components, truncating toward zero
    pub fn to_int(&self) -> Vector<N, i32> {
        self.map(Scalar::to_i32)
    }

    /// Vector with `f32` components
    pub fn to_float(&self) -> Vector<N, f32> {
        self.map(Scalar::to_f32)
    }

    /// Vector with `f64` components
    pub fn to_double(&self) -> Vector<N, f64> {
        self.map(Scalar::to_f64)
    }

    /// Scalar division into the floating companion type
    ///
    /// # Errors
    /// `DivisionByZero` when `s` is zero.
    pub fn try_div(&self, s: T) -> GeometryResult<Vector<N, T::Float>> {
        checks::divisor(s.is_zero())?;
        let s = s.to_float();
        Ok(self.map(|e| e.to_float() / s))
    }

    /// In-place scalar division in the element type
    ///
    /// # Errors
    /// `DivisionByZero` when `s` is zero; the vector is left unchanged.
    pub fn try_div_assign(&mut self, s: T) -> GeometryResult<()> {
        checks::divisor(s.is_zero())?;
        for e in &mut self.elements {
            *e /= s;
        }
        Ok(())
    }
}

impl<T: Copy> Vector<2, T> {
    /// Create a 2 element vector
    pub const fn new(x: T, y: T) -> Self {
        Self { elements: [x, y] }
    }

    /// First component
    pub const fn x(&self) -> T {
        self.elements[0]
    }

    /// Second component
    pub const fn y(&self) -> T {
        self.elements[1]
    }
}

/// Three component operations.
///
/// The constructor and cross product are only defined for `N == 3`:
///
/// ```rust,compile_fail
/// use geometry_core::foundation::vector::Vector2;
///
/// let u = Vector2::new(1.0_f32, 0.0);
/// let _ = u % u;
/// ```
///
/// ```rust,compile_fail
/// use geometry_core::foundation::vector::Vector2;
///
/// let _ = Vector2::new(1.0_f32, 2.0, 3.0);
/// ```
impl<T: Copy> Vector<3, T> {
    /// Create a 3 element vector
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { elements: [x, y, z] }
    }

    /// First component
    pub const fn x(&self) -> T {
        self.elements[0]
    }

    /// Second component
    pub const fn y(&self) -> T {
        self.elements[1]
    }

    /// Third component
    pub const fn z(&self) -> T {
        self.elements[2]
    }
}

impl<T: Scalar> Vector<3, T> {
    /// Cross product, perpendicular to both operands
    pub fn cross(&self, other: &Self) -> Self {
        let [a0, a1, a2] = self.elements;
        let [b0, b1, b2] = other.elements;
        Self::new(a1 * b2 - a2 * b1, a2 * b0 - a0 * b2, a0 * b1 - a1 * b0)
    }
}

impl<T: Copy> Vector<4, T> {
    /// Create a 4 element vector
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { elements: [x, y, z, w] }
    }

    /// First component
    pub const fn x(&self) -> T {
        self.elements[0]
    }

    /// Second component
    pub const fn y(&self) -> T {
        self.elements[1]
    }

    /// Third component
    pub const fn z(&self) -> T {
        self.elements[2]
    }

    /// Fourth component
    pub const fn w(&self) -> T {
        self.elements[3]
    }
}

impl<const N: usize, T: Scalar> Default for Vector<N, T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize, T> From<[T; N]> for Vector<N, T> {
    fn from(elements: [T; N]) -> Self {
        Self { elements }
    }
}

impl<const N: usize, T> From<Vector<N, T>> for [T; N] {
    fn from(v: Vector<N, T>) -> Self {
        v.elements
    }
}

impl<const N: usize, T: Scalar> Index<usize> for Vector<N, T> {
    type Output = T;

    /// # Panics
    /// With `IndexOutOfBounds` when `i >= N`.
    fn index(&self, i: usize) -> &T {
        checks::or_panic(checks::index(i, N));
        &self.elements[i]
    }
}

impl<const N: usize, T: Scalar> IndexMut<usize> for Vector<N, T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        checks::or_panic(checks::index(i, N));
        &mut self.elements[i]
    }
}

impl<const N: usize, T: Scalar> Add for Vector<N, T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_fn(|i| self.elements[i] + rhs.elements[i])
    }
}

impl<const N: usize, T: Scalar> Sub for Vector<N, T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_fn(|i| self.elements[i] - rhs.elements[i])
    }
}

/// Dot product
impl<const N: usize, T: Scalar> Mul for Vector<N, T> {
    type Output = T;

    fn mul(self, rhs: Self) -> T {
        self.dot(&rhs)
    }
}

/// Cross product
impl<T: Scalar> Rem for Vector<3, T> {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self {
        self.cross(&rhs)
    }
}

impl<const N: usize, T: Scalar> Neg for Vector<N, T> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|e| -e)
    }
}

impl<const N: usize, T: Scalar> AddAssign for Vector<N, T> {
    fn add_assign(&mut self, rhs: Self) {
        for (e, r) in self.elements.iter_mut().zip(rhs.elements) {
            *e += r;
        }
    }
}

impl<const N: usize, T: Scalar> SubAssign for Vector<N, T> {
    fn sub_assign(&mut self, rhs: Self) {
        for (e, r) in self.elements.iter_mut().zip(rhs.elements) {
            *e -= r;
        }
    }
}

// Scalar operators are generated per element type so that both `v + s` and
// `s + v` can be written.
macro_rules! impl_scalar_ops {
    ($($t:ty),*) => {$(
        impl<const N: usize> Add<$t> for Vector<N, $t> {
            type Output = Self;

            fn add(self, s: $t) -> Self {
                self.map(|e| e + s)
            }
        }

        impl<const N: usize> Add<Vector<N, $t>> for $t {
            type Output = Vector<N, $t>;

            fn add(self, v: Vector<N, $t>) -> Vector<N, $t> {
                v + self
            }
        }

        impl<const N: usize> Sub<$t> for Vector<N, $t> {
            type Output = Self;

            fn sub(self, s: $t) -> Self {
                self.map(|e| e - s)
            }
        }

        impl<const N: usize> Mul<$t> for Vector<N, $t> {
            type Output = Self;

            fn mul(self, s: $t) -> Self {
                self.map(|e| e * s)
            }
        }

        impl<const N: usize> Mul<Vector<N, $t>> for $t {
            type Output = Vector<N, $t>;

            fn mul(self, v: Vector<N, $t>) -> Vector<N, $t> {
                v * self
            }
        }

        impl<const N: usize> Div<$t> for Vector<N, $t> {
            type Output = Vector<N, <$t as Scalar>::Float>;

            /// # Panics
            /// With `DivisionByZero` when `s` is zero.
            fn div(self, s: $t) -> Self::Output {
                checks::or_panic(self.try_div(s))
            }
        }

        impl<const N: usize> AddAssign<$t> for Vector<N, $t> {
            fn add_assign(&mut self, s: $t) {
                for e in &mut self.elements {
                    *e += s;
                }
            }
        }

        impl<const N: usize> SubAssign<$t> for Vector<N, $t> {
            fn sub_assign(&mut self, s: $t) {
                for e in &mut self.elements {
                    *e -= s;
                }
            }
        }

        impl<const N: usize> MulAssign<$t> for Vector<N, $t> {
            fn mul_assign(&mut self, s: $t) {
                for e in &mut self.elements {
                    *e *= s;
                }
            }
        }

        impl<const N: usize> DivAssign<$t> for Vector<N, $t> {
            /// # Panics
            /// With `DivisionByZero` when `s` is zero.
            fn div_assign(&mut self, s: $t) {
                checks::or_panic(self.try_div_assign(s));
            }
        }
    )*};
}

impl_scalar_ops!(i32, i64, f32, f64);

impl<const N: usize, T: fmt::Display> fmt::Display for Vector<N, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, e) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{e}")?;
        }
        write!(f, "]")
    }
}

impl<const N: usize, T: AbsDiffEq> AbsDiffEq for Vector<N, T>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.elements
            .iter()
            .zip(other.elements.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<const N: usize, T: RelativeEq> RelativeEq for Vector<N, T>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.elements
            .iter()
            .zip(other.elements.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<const N: usize, T: UlpsEq> UlpsEq for Vector<N, T>
where
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.elements
            .iter()
            .zip(other.elements.iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}
