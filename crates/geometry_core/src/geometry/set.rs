//! Geometry container
//!
//! A geometry set stores `count` homogeneous primitives living in `D`
//! spatial axes with `S` corners each. Its data lives in three separate
//! contiguous arrays:
//!
//! | array | length | layout per primitive |
//! |---|---|---|
//! | indices | `count` | one `i32` |
//! | vertices | `count * D * S` | corner-major, axis-minor |
//! | texture coordinates | `count * 2 * S` | corner-major, always 2 components |
//!
//! Primitives follow each other in order. The rendering backend reads the
//! arrays directly for upload; everyone else goes through a
//! [`GeometryIterator`] or [`GeometrySet::primitives_mut`].
//!
//! ```rust
//! use geometry_core::geometry::GeometrySet;
//!
//! // Two triangles in the plane
//! let mut set = GeometrySet::<2, 3>::new(2);
//! let mut elm = set.iter();
//! while elm.has_more() {
//!     let mut element = elm.element().unwrap();
//!     element.vert[0][0] = 1.0; // corner 0, x
//!     element.vert[0][1] = 1.0; // corner 0, y
//!     element.vert[1][0] = 3.0;
//!     element.vert[1][1] = 1.0;
//!     element.vert[2][0] = 1.0;
//!     element.vert[2][1] = 3.0;
//!     elm.advance().unwrap();
//! }
//! assert_eq!(set.vertices(), &[1.0, 1.0, 3.0, 1.0, 1.0, 3.0, 1.0, 1.0, 3.0, 1.0, 1.0, 3.0]);
//! ```

use super::accessor::PrimitiveAccessor;
use super::iterator::{Element, GeometryIterator};
use super::shape::{GeometryDimension, GeometryShape};
use crate::core::config::AllocationConfig;

/// Texture coordinates are planar regardless of the set's dimension
pub const TEX_COORD_COMPONENTS: usize = 2;

/// Index of the `i`-th primitive, saturating at `i32::MAX`
fn sequential_index(i: usize) -> i32 {
    i32::try_from(i).unwrap_or(i32::MAX)
}

/// Fixed-shape collection of primitives in flat attribute arrays
///
/// `GeometrySet` is not `Clone`: it exclusively owns its three
/// arrays and releases them once when dropped. Owners that need value
/// semantics call [`GeometrySet::deep_copy`] explicitly.
///
/// Only planar or spatial sets of points, lines, triangles or quads exist:
///
/// ```rust,compile_fail
/// use geometry_core::geometry::GeometrySet;
///
/// let _ = GeometrySet::<4, 3>::new(1);
/// ```
#[derive(Debug)]
pub struct GeometrySet<const D: usize, const S: usize> {
    indices: Box<[i32]>,
    vertices: Box<[f32]>,
    tex_coords: Box<[f32]>,
}

impl<const D: usize, const S: usize> GeometrySet<D, S> {
    const LAYOUT_CHECK: () = {
        assert!(D == 2 || D == 3, "geometry dimension must be 2 (plane) or 3 (space)");
        assert!(S >= 1 && S <= 4, "geometry shape must have between 1 and 4 corners");
    };

    /// Floats per primitive in the vertex array
    pub const VERTEX_STRIDE: usize = D * S;

    /// Floats per primitive in the texture coordinate array
    pub const TEX_COORD_STRIDE: usize = TEX_COORD_COMPONENTS * S;

    /// Create a geometry set of `count` primitives
    ///
    /// The arrays are allocated up front. Their initial contents are not part
    /// of the contract; write every primitive before reading it back.
    pub fn new(count: usize) -> Self {
        Self::with_config(count, &AllocationConfig::default())
    }

    /// Create a geometry set of `count` primitives with explicit fill values
    pub fn with_config(count: usize, config: &AllocationConfig) -> Self {
        let () = Self::LAYOUT_CHECK;

        let indices: Box<[i32]> = if config.sequential_indices {
            (0..count).map(sequential_index).collect()
        } else {
            vec![0; count].into_boxed_slice()
        };
        let vertices = vec![config.vertex_fill; count * Self::VERTEX_STRIDE].into_boxed_slice();
        let tex_coords = vec![config.tex_coord_fill; count * Self::TEX_COORD_STRIDE].into_boxed_slice();

        log::debug!(
            "Allocated {}D {} set: {} primitive(s), {} vertex floats, {} texcoord floats",
            D,
            Self::shape(),
            count,
            vertices.len(),
            tex_coords.len()
        );

        Self {
            indices,
            vertices,
            tex_coords,
        }
    }

    /// Copy the set and all of its data into a new, independently owned set
    pub fn deep_copy(&self) -> Self {
        log::trace!("Deep-copying set of {} primitive(s)", self.size());
        Self {
            indices: self.indices.clone(),
            vertices: self.vertices.clone(),
            tex_coords: self.tex_coords.clone(),
        }
    }

    /// Iterator positioned on the first primitive
    ///
    /// An empty set yields an iterator that is already exhausted.
    pub fn iter(&mut self) -> GeometryIterator<'_, D, S> {
        GeometryIterator::bind(self)
    }

    /// One [`Element`] per primitive, in order
    pub fn primitives_mut(&mut self) -> impl Iterator<Item = Element<'_, D, S>> + '_ {
        self.vertices
            .chunks_exact_mut(Self::VERTEX_STRIDE)
            .zip(self.tex_coords.chunks_exact_mut(Self::TEX_COORD_STRIDE))
            .map(|(vert, texc)| Element {
                vert: PrimitiveAccessor::new(vert),
                texc: PrimitiveAccessor::new(texc),
            })
    }

    /// Number of primitives
    pub fn size(&self) -> usize {
        self.indices.len()
    }

    /// True if the set holds no primitives
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Spatial dimension of the set
    pub const fn dimension() -> GeometryDimension {
        match GeometryDimension::from_axes(D) {
            Some(dimension) => dimension,
            None => panic!("geometry dimension must be 2 (plane) or 3 (space)"),
        }
    }

    /// Primitive shape of the set
    pub const fn shape() -> GeometryShape {
        match GeometryShape::from_corners(S) {
            Some(shape) => shape,
            None => panic!("geometry shape must have between 1 and 4 corners"),
        }
    }

    /// Length of the index array
    pub fn index_len(&self) -> usize {
        self.indices.len()
    }

    /// Length of the vertex array
    pub fn vertex_len(&self) -> usize {
        self.vertices.len()
    }

    /// Length of the texture coordinate array
    pub fn tex_coord_len(&self) -> usize {
        self.tex_coords.len()
    }

    /// Index array
    pub fn indices(&self) -> &[i32] {
        &self.indices
    }

    /// Mutable index array
    pub fn indices_mut(&mut self) -> &mut [i32] {
        &mut self.indices
    }

    /// Vertex array
    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    /// Mutable vertex array
    pub fn vertices_mut(&mut self) -> &mut [f32] {
        &mut self.vertices
    }

    /// Texture coordinate array
    pub fn tex_coords(&self) -> &[f32] {
        &self.tex_coords
    }

    /// Mutable texture coordinate array
    pub fn tex_coords_mut(&mut self) -> &mut [f32] {
        &mut self.tex_coords
    }

    /// Index array as raw bytes for upload
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Vertex array as raw bytes for upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Texture coordinate array as raw bytes for upload
    pub fn tex_coord_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.tex_coords)
    }

    pub(crate) fn attribute_arrays_mut(&mut self) -> (&mut [f32], &mut [f32]) {
        (&mut self.vertices, &mut self.tex_coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::vector::Vector2;

    #[test]
    fn test_array_lengths() {
        let set = GeometrySet::<3, 4>::new(5);
        assert_eq!(set.size(), 5);
        assert_eq!(set.index_len(), 5);
        assert_eq!(set.vertex_len(), 5 * 3 * 4);
        assert_eq!(set.tex_coord_len(), 5 * 2 * 4);
        assert_eq!(GeometrySet::<3, 4>::shape(), GeometryShape::Quad);
        assert_eq!(GeometrySet::<3, 4>::dimension(), GeometryDimension::Space);
    }

    #[test]
    fn test_tex_coord_length_ignores_dimension() {
        let set = GeometrySet::<3, 2>::new(4);
        assert_eq!(set.vertex_len(), 24);
        assert_eq!(set.tex_coord_len(), 16);
    }

    #[test]
    fn test_with_config() {
        let config = AllocationConfig {
            vertex_fill: -1.0,
            tex_coord_fill: 0.5,
            sequential_indices: true,
        };
        let set = GeometrySet::<2, 1>::with_config(3, &config);
        assert_eq!(set.indices(), &[0, 1, 2]);
        assert!(set.vertices().iter().all(|&v| v == -1.0));
        assert!(set.tex_coords().iter().all(|&t| t == 0.5));
    }

    #[test]
    fn test_sequential_index_saturates() {
        assert_eq!(sequential_index(0), 0);
        assert_eq!(sequential_index(i32::MAX as usize), i32::MAX);
        assert_eq!(sequential_index(i32::MAX as usize + 1), i32::MAX);
        assert_eq!(sequential_index(usize::MAX), i32::MAX);
    }

    #[test]
    fn test_empty_set() {
        let set = GeometrySet::<2, 3>::new(0);
        assert!(set.is_empty());
        assert_eq!(set.vertex_len(), 0);
        assert!(set.vertex_bytes().is_empty());
    }

    #[test]
    fn test_deep_copy_is_independent() {
        let mut original = GeometrySet::<2, 2>::new(1);
        original.vertices_mut().copy_from_slice(&[1.0, 2.0, 3.0, 4.0]);

        let mut copy = original.deep_copy();
        copy.vertices_mut()[0] = 9.0;

        assert_eq!(original.vertices(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(copy.vertices(), &[9.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_primitives_mut_visits_every_primitive() {
        let mut set = GeometrySet::<2, 2>::new(3);
        for (i, mut prim) in set.primitives_mut().enumerate() {
            let x = i as f32;
            prim.vert.assign_all(&[Vector2::new(x, 0.0), Vector2::new(x, 1.0)]);
            prim.texc.corner(1).unwrap().assign(&Vector2::new(1.0, x));
        }
        assert_eq!(set.vertices(), &[0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0, 2.0, 0.0, 2.0, 1.0]);
        assert_eq!(&set.tex_coords()[8..12], &[0.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_byte_views() {
        let mut set = GeometrySet::<3, 1>::new(2);
        set.vertices_mut()[0] = 1.0;
        assert_eq!(set.vertex_bytes().len(), 6 * std::mem::size_of::<f32>());
        assert_eq!(&set.vertex_bytes()[..4], &1.0_f32.to_ne_bytes());
        assert_eq!(set.index_bytes().len(), 2 * std::mem::size_of::<i32>());
        assert_eq!(set.tex_coord_bytes().len(), 4 * std::mem::size_of::<f32>());
    }
}
