//! Geometry storage
//!
//! [`GeometrySet`] owns the flat attribute arrays. [`GeometryIterator`]
//! walks them one primitive at a time and hands out an [`Element`], whose
//! `vert` and `texc` accessors address the current primitive by corner and
//! then by component.

pub mod accessor;
pub mod iterator;
pub mod set;
pub mod shape;

#[cfg(test)]
mod tests;

pub use accessor::{CornerAccessor, PrimitiveAccessor};
pub use iterator::{Element, GeometryIterator, IteratorState};
pub use set::{GeometrySet, TEX_COORD_COMPONENTS};
pub use shape::{
    GeometryDimension, GeometryShape, Lines2D, Lines3D, Points2D, Points3D, Quads2D, Quads3D,
    Triangles2D, Triangles3D,
};
