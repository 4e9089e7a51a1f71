//! Attribute array descriptions

use std::fmt;

use crate::geometry::{GeometrySet, TEX_COORD_COMPONENTS};

/// Which attribute an array carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// Vertex positions, one component per spatial axis
    Position,
    /// Texture coordinates, always two components
    TexCoord,
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position => f.write_str("position"),
            Self::TexCoord => f.write_str("texcoord"),
        }
    }
}

/// Shape of one flat attribute array
///
/// Data is corner-major then component-minor within a primitive, and
/// primitives follow each other without padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeLayout {
    /// Attribute carried by the array
    pub kind: AttributeKind,
    /// Components per corner
    pub components: usize,
    /// Corners per primitive
    pub corners: usize,
    /// Number of primitives
    pub primitives: usize,
}

impl AttributeLayout {
    /// Vertex position layout of a set
    pub fn positions<const D: usize, const S: usize>(set: &GeometrySet<D, S>) -> Self {
        Self {
            kind: AttributeKind::Position,
            components: D,
            corners: S,
            primitives: set.size(),
        }
    }

    /// Texture coordinate layout of a set
    pub fn tex_coords<const D: usize, const S: usize>(set: &GeometrySet<D, S>) -> Self {
        Self {
            kind: AttributeKind::TexCoord,
            components: TEX_COORD_COMPONENTS,
            corners: S,
            primitives: set.size(),
        }
    }

    /// Floats per primitive
    pub const fn stride(&self) -> usize {
        self.components * self.corners
    }

    /// Floats in the whole array
    pub const fn len(&self) -> usize {
        self.stride() * self.primitives
    }

    /// True if the array holds no data
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes in the whole array
    pub const fn byte_len(&self) -> usize {
        self.len() * std::mem::size_of::<f32>()
    }
}

impl<const D: usize, const S: usize> GeometrySet<D, S> {
    /// Layouts of the position and texture coordinate arrays, in that order
    pub fn attribute_layouts(&self) -> [AttributeLayout; 2] {
        [AttributeLayout::positions(self), AttributeLayout::tex_coords(self)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layouts_match_set_arrays() {
        let set = GeometrySet::<3, 3>::new(4);

        let positions = AttributeLayout::positions(&set);
        assert_eq!(positions.stride(), 9);
        assert_eq!(positions.len(), set.vertex_len());
        assert_eq!(positions.byte_len(), set.vertex_bytes().len());

        let tex_coords = AttributeLayout::tex_coords(&set);
        assert_eq!(tex_coords.stride(), 6);
        assert_eq!(tex_coords.len(), set.tex_coord_len());
        assert_eq!(tex_coords.byte_len(), set.tex_coord_bytes().len());

        assert_eq!(set.attribute_layouts(), [positions, tex_coords]);
    }

    #[test]
    fn test_empty_layout() {
        let set = GeometrySet::<2, 1>::new(0);
        assert!(AttributeLayout::positions(&set).is_empty());
        assert_eq!(AttributeKind::TexCoord.to_string(), "texcoord");
    }
}
