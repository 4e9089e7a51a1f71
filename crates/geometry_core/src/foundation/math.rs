//! Math utilities and types
//!
//! Convenience aliases for the vectors used by the rendering engine, plus
//! conversions to and from nalgebra's statically sized vectors so geometry
//! data can be handed to code written against the engine-wide math types.

use nalgebra::SVector;

use super::scalar::Scalar;
use super::vector::Vector;

/// 2D vector type
pub type Vec2 = Vector<2, f32>;

/// 3D vector type
pub type Vec3 = Vector<3, f32>;

/// 4D vector type (homogeneous coordinates, RGBA colors)
pub type Vec4 = Vector<4, f32>;

impl<const N: usize, T> From<Vector<N, T>> for SVector<T, N>
where
    T: Scalar + nalgebra::Scalar,
{
    fn from(v: Vector<N, T>) -> Self {
        Self::from_column_slice(v.as_slice())
    }
}

impl<const N: usize, T> From<SVector<T, N>> for Vector<N, T>
where
    T: Scalar + nalgebra::Scalar,
{
    fn from(v: SVector<T, N>) -> Self {
        Self::from_fn(|i| v[i])
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Vec3};

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }

    /// Linear interpolation between two points
    pub fn lerp(a: Vec3, b: Vec3, t: f32) -> Vec3 {
        a + (b - a) * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_nalgebra_roundtrip() {
        let v = Vec3::new(1.0, -2.0, 3.5);
        let n: nalgebra::Vector3<f32> = v.into();
        assert_eq!(n, nalgebra::Vector3::new(1.0, -2.0, 3.5));

        let back: Vec3 = n.into();
        assert_eq!(back, v);
    }

    #[test]
    fn test_cross_matches_nalgebra() {
        let a = Vec3::new(0.2, 1.5, -3.0);
        let b = Vec3::new(-1.0, 0.4, 2.2);
        let expected: Vec3 = nalgebra::Vector3::from(a).cross(&nalgebra::Vector3::from(b)).into();
        assert_relative_eq!(a % b, expected, epsilon = 1e-6);
    }

    #[test]
    fn test_utils() {
        assert_relative_eq!(utils::deg_to_rad(180.0), constants::PI);
        assert_relative_eq!(utils::rad_to_deg(constants::PI / 2.0), 90.0, epsilon = 1e-4);

        let mid = utils::lerp(Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 4.0, -6.0), 0.5);
        assert_relative_eq!(mid, Vec3::new(1.0, 2.0, -3.0));
    }
}
