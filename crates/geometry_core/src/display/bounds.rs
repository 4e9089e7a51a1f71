//! Bounding boxes and planes

use nalgebra::Vector3;

use crate::geometry::GeometrySet;

/// Plane defined by a unit normal and its signed distance from the origin
///
/// Points with a non-negative [`Plane::signed_distance`] are on the side the
/// normal points to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal
    pub normal: Vector3<f32>,
    /// Offset along the normal
    pub distance: f32,
}

impl Plane {
    /// Create a plane, normalizing `normal` and scaling `distance` with it
    ///
    /// Returns `None` for a zero normal.
    pub fn new(normal: Vector3<f32>, distance: f32) -> Option<Self> {
        let length = normal.norm();
        if length == 0.0 {
            return None;
        }
        Some(Self {
            normal: normal / length,
            distance: distance / length,
        })
    }

    /// Signed distance from the plane to `point`
    pub fn signed_distance(&self, point: &Vector3<f32>) -> f32 {
        self.normal.dot(point) + self.distance
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vector3<f32>,
    /// Maximum corner
    pub max: Vector3<f32>,
}

impl Aabb {
    /// Create a box from its minimum and maximum corners
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    /// Create a box centered at a point with given half-extents
    pub fn from_center_extents(center: Vector3<f32>, extents: Vector3<f32>) -> Self {
        Self {
            min: center - extents,
            max: center + extents,
        }
    }

    /// Smallest box containing every point, `None` for no points
    pub fn from_points(points: impl IntoIterator<Item = Vector3<f32>>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::new(first, first), |bounds, p| Self {
            min: bounds.min.inf(&p),
            max: bounds.max.sup(&p),
        }))
    }

    /// Box around a flat `x, y, z, x, y, z, ...` position array
    pub fn from_positions(positions: &[f32]) -> Option<Self> {
        Self::from_points(
            positions
                .chunks_exact(3)
                .map(|p| Vector3::new(p[0], p[1], p[2])),
        )
    }

    /// Center of the box
    pub fn center(&self) -> Vector3<f32> {
        (self.min + self.max) * 0.5
    }

    /// Half-size of the box
    pub fn extents(&self) -> Vector3<f32> {
        (self.max - self.min) * 0.5
    }

    /// Corner picking `max` on every axis whose flag is set and `min` otherwise
    pub fn corner(&self, x: bool, y: bool, z: bool) -> Vector3<f32> {
        Vector3::new(
            if x { self.max.x } else { self.min.x },
            if y { self.max.y } else { self.min.y },
            if z { self.max.z } else { self.min.z },
        )
    }

    /// True if `point` lies inside or on the box
    pub fn contains_point(&self, point: &Vector3<f32>) -> bool {
        (0..3).all(|i| point[i] >= self.min[i] && point[i] <= self.max[i])
    }
}

impl<const S: usize> GeometrySet<3, S> {
    /// Bounding box of every vertex position, `None` for an empty set
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_positions(self.vertices())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_plane_is_normalized() {
        let plane = Plane::new(Vector3::new(0.0, 0.0, 2.0), -4.0).unwrap();
        assert_relative_eq!(plane.normal, Vector3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(plane.distance, -2.0);
        assert_relative_eq!(plane.signed_distance(&Vector3::new(5.0, 5.0, 3.0)), 1.0);
        assert!(Plane::new(Vector3::zeros(), 1.0).is_none());
    }

    #[test]
    fn test_corner_selection() {
        let aabb = Aabb::new(Vector3::new(-1.0, -2.0, -3.0), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(aabb.corner(true, false, true), Vector3::new(1.0, -2.0, 3.0));
        assert_eq!(aabb.corner(false, false, false), aabb.min);
        assert_eq!(aabb.center(), Vector3::zeros());
        assert_eq!(aabb.extents(), Vector3::new(1.0, 2.0, 3.0));
        assert!(aabb.contains_point(&Vector3::new(1.0, 0.0, -3.0)));
        assert!(!aabb.contains_point(&Vector3::new(1.5, 0.0, 0.0)));
    }

    #[test]
    fn test_bounds_of_geometry_set() {
        let mut set = GeometrySet::<3, 2>::new(2);
        set.vertices_mut()
            .copy_from_slice(&[0.0, 1.0, 2.0, -1.0, 4.0, 0.5, 3.0, -2.0, 1.0, 0.0, 0.0, 0.0]);

        let bounds = set.bounds().unwrap();
        assert_eq!(bounds.min, Vector3::new(-1.0, -2.0, 0.0));
        assert_eq!(bounds.max, Vector3::new(3.0, 4.0, 2.0));
        assert!(GeometrySet::<3, 2>::new(0).bounds().is_none());
    }
}
