//! Scalar element types for fixed vectors
//!
//! [`Scalar`] is implemented for `i32`, `i64`, `f32` and `f64`. Every scalar
//! names a floating-point companion type used for lengths and divisions, so
//! an integer vector divided by a scalar still yields fractional components.

use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Numeric element type of a [`Vector`](super::vector::Vector)
pub trait Scalar:
    Copy
    + Debug
    + Display
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + 'static
{
    /// Additive identity
    const ZERO: Self;
    /// Multiplicative identity
    const ONE: Self;

    /// Floating-point type used for lengths and quotients
    type Float: FloatScalar;

    /// Widen to the floating companion type
    fn to_float(self) -> Self::Float;
    /// Narrow from the floating companion type, truncating toward zero for integers
    fn from_float(value: Self::Float) -> Self;
    /// Convert to `i32`, truncating toward zero
    fn to_i32(self) -> i32;
    /// Convert to `f32`
    fn to_f32(self) -> f32;
    /// Convert to `f64`
    fn to_f64(self) -> f64;

    /// Exact comparison against zero
    fn is_zero(self) -> bool;
}

/// Floating-point scalar
pub trait FloatScalar: Scalar<Float = Self> {
    /// Square root
    fn sqrt(self) -> Self;
}

macro_rules! impl_scalar {
    ($t:ty, $float:ty, $zero:expr, $one:expr) => {
        impl Scalar for $t {
            const ZERO: Self = $zero;
            const ONE: Self = $one;

            type Float = $float;

            #[inline]
            fn to_float(self) -> $float {
                self as $float
            }

            #[inline]
            fn from_float(value: $float) -> Self {
                value as $t
            }

            #[inline]
            fn to_i32(self) -> i32 {
                self as i32
            }

            #[inline]
            fn to_f32(self) -> f32 {
                self as f32
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            #[allow(clippy::float_cmp)]
            fn is_zero(self) -> bool {
                self == $zero
            }
        }
    };
}

impl_scalar!(i32, f32, 0, 1);
impl_scalar!(i64, f64, 0, 1);
impl_scalar!(f32, f32, 0.0, 1.0);
impl_scalar!(f64, f64, 0.0, 1.0);

impl FloatScalar for f32 {
    #[inline]
    fn sqrt(self) -> Self {
        f32::sqrt(self)
    }
}

impl FloatScalar for f64 {
    #[inline]
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }
}
