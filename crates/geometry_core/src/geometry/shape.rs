//! Dimension and shape vocabulary for geometry sets
//!
//! A geometry set is parameterised by two const generics: the spatial
//! dimension `D` (components per vertex position) and the shape `S`
//! (corners per primitive). The enums below name the valid values; the
//! aliases at the bottom spell out the common combinations.

use std::fmt;

use super::set::GeometrySet;

/// Number of spatial axes per vertex position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryDimension {
    /// The plane (x, y)
    Plane = 2,
    /// Space (x, y, z)
    Space = 3,
}

impl GeometryDimension {
    /// Look up the dimension with `axes` components
    pub const fn from_axes(axes: usize) -> Option<Self> {
        match axes {
            2 => Some(Self::Plane),
            3 => Some(Self::Space),
            _ => None,
        }
    }

    /// Number of axes
    pub const fn axes(self) -> usize {
        self as usize
    }
}

/// Number of corners per primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryShape {
    /// Single vertex
    Point = 1,
    /// Line segment
    Line = 2,
    /// Triangle
    Triangle = 3,
    /// Quadrilateral
    Quad = 4,
}

impl GeometryShape {
    /// Look up the shape with `corners` vertices
    pub const fn from_corners(corners: usize) -> Option<Self> {
        match corners {
            1 => Some(Self::Point),
            2 => Some(Self::Line),
            3 => Some(Self::Triangle),
            4 => Some(Self::Quad),
            _ => None,
        }
    }

    /// Number of corners
    pub const fn corners(self) -> usize {
        self as usize
    }
}

impl fmt::Display for GeometryShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Point => "point",
            Self::Line => "line",
            Self::Triangle => "triangle",
            Self::Quad => "quad",
        };
        f.write_str(name)
    }
}

impl fmt::Display for GeometryDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D", self.axes())
    }
}

/// Points in the plane
pub type Points2D = GeometrySet<2, 1>;
/// Points in space
pub type Points3D = GeometrySet<3, 1>;
/// Line segments in the plane
pub type Lines2D = GeometrySet<2, 2>;
/// Line segments in space
pub type Lines3D = GeometrySet<3, 2>;
/// Triangles in the plane
pub type Triangles2D = GeometrySet<2, 3>;
/// Triangles in space
pub type Triangles3D = GeometrySet<3, 3>;
/// Quads in the plane
pub type Quads2D = GeometrySet<2, 4>;
/// Quads in space
pub type Quads3D = GeometrySet<3, 4>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(GeometryShape::from_corners(3), Some(GeometryShape::Triangle));
        assert_eq!(GeometryShape::from_corners(5), None);
        assert_eq!(GeometryDimension::from_axes(3), Some(GeometryDimension::Space));
        assert_eq!(GeometryDimension::from_axes(1), None);
        assert_eq!(GeometryShape::Quad.corners(), 4);
    }

    #[test]
    fn test_enum_values_usable_as_const_arguments() {
        type SpaceLines = GeometrySet<{ GeometryDimension::Space as usize }, { GeometryShape::Line as usize }>;
        let set = SpaceLines::new(1);
        assert_eq!(set.vertex_len(), 6);
        assert_eq!(SpaceLines::shape(), GeometryShape::Line);
        assert_eq!(SpaceLines::dimension(), GeometryDimension::Space);
    }

    #[test]
    fn test_display() {
        assert_eq!(GeometryShape::Triangle.to_string(), "triangle");
        assert_eq!(GeometryDimension::Plane.to_string(), "2D");
    }
}
