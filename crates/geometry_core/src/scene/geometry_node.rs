//! Scene node holding one geometry set

use std::fmt;

use crate::geometry::GeometrySet;

/// Scene node that exclusively owns a geometry set
///
/// Cloning the node deep-copies its geometry. Replacing the geometry drops
/// the previous set.
#[derive(Debug)]
pub struct GeometryNode<const D: usize, const S: usize> {
    geometry: Box<GeometrySet<D, S>>,
}

impl<const D: usize, const S: usize> GeometryNode<D, S> {
    /// Wrap `geometry` in a node that takes ownership of it
    pub fn new(geometry: GeometrySet<D, S>) -> Self {
        Self {
            geometry: Box::new(geometry),
        }
    }

    /// Geometry held by the node
    pub fn geometry(&self) -> &GeometrySet<D, S> {
        &self.geometry
    }

    /// Mutable geometry held by the node
    pub fn geometry_mut(&mut self) -> &mut GeometrySet<D, S> {
        &mut self.geometry
    }

    /// Replace the node's geometry, returning the previous set
    pub fn set_geometry(&mut self, geometry: GeometrySet<D, S>) -> GeometrySet<D, S> {
        log::debug!("GeometryNode: replacing {} face(s) with {}", self.geometry.size(), geometry.size());
        *std::mem::replace(&mut self.geometry, Box::new(geometry))
    }

    /// Take the geometry out of the node
    pub fn into_geometry(self) -> GeometrySet<D, S> {
        *self.geometry
    }
}

impl<const D: usize, const S: usize> Default for GeometryNode<D, S> {
    /// Node holding an empty set
    fn default() -> Self {
        Self::new(GeometrySet::new(0))
    }
}

impl<const D: usize, const S: usize> Clone for GeometryNode<D, S> {
    fn clone(&self) -> Self {
        Self::new(self.geometry.deep_copy())
    }
}

impl<const D: usize, const S: usize> fmt::Display for GeometryNode<D, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeometryNode\nFaces: {}", self.geometry.size())
    }
}
