//! Cursor over the primitives of a geometry set
//!
//! # State machine
//!
//! ```text
//!   Default ──► Unbound                      (no transitions out)
//!   GeometrySet::iter() ──► Active{count}    (Exhausted if count == 0)
//!   Active{r > 1} ──advance()──► Active{r - 1}
//!   Active{1}     ──advance()──► Exhausted   (terminal)
//! ```
//!
//! [`GeometryIterator::element`] is only valid while `Active`; every other
//! state answers with `InvalidIteratorAccess`. Advancing outside `Active`
//! fails with `IteratorOverflow`.
//!
//! The iterator mutably borrows the set it was created from, so it cannot
//! outlive the set and nothing else can touch the arrays while it is alive.

use super::accessor::PrimitiveAccessor;
use super::set::GeometrySet;
use crate::core::checks;
use crate::core::error::{GeometryError, GeometryResult};

/// Iterator lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IteratorState {
    /// Default-constructed, never bound to a set
    #[default]
    Unbound,
    /// Bound and positioned on a primitive; `remaining` counts it and everything after it
    Active {
        /// Primitives left, including the current one
        remaining: usize,
    },
    /// Walked past the last primitive
    Exhausted,
}

/// Structured view of the current primitive
///
/// ```text
/// element.vert[corner][axis]      axis in 0..D
/// element.texc[corner][component] component in 0..2
/// ```
#[derive(Debug)]
pub struct Element<'a, const D: usize, const S: usize> {
    /// Vertex positions, `D` components per corner
    pub vert: PrimitiveAccessor<'a, S, D>,
    /// Texture coordinates, always 2 components per corner
    pub texc: PrimitiveAccessor<'a, S, 2>,
}

/// Cursor over the primitives of a [`GeometrySet`]
#[derive(Debug)]
pub struct GeometryIterator<'a, const D: usize, const S: usize> {
    state: IteratorState,
    count: usize,
    // Views starting at the current primitive
    vertices: &'a mut [f32],
    tex_coords: &'a mut [f32],
}

impl<const D: usize, const S: usize> Default for GeometryIterator<'_, D, S> {
    /// An unbound iterator; binding only happens through [`GeometrySet::iter`]
    fn default() -> Self {
        Self {
            state: IteratorState::Unbound,
            count: 0,
            vertices: Default::default(),
            tex_coords: Default::default(),
        }
    }
}

impl<'a, const D: usize, const S: usize> GeometryIterator<'a, D, S> {
    pub(crate) fn bind(set: &'a mut GeometrySet<D, S>) -> Self {
        let count = set.size();
        let state = if count == 0 {
            IteratorState::Exhausted
        } else {
            IteratorState::Active { remaining: count }
        };
        let (vertices, tex_coords) = set.attribute_arrays_mut();
        log::trace!("Bound iterator over {count} primitive(s), state {state:?}");
        Self {
            state,
            count,
            vertices,
            tex_coords,
        }
    }

    /// Current lifecycle state
    pub const fn state(&self) -> IteratorState {
        self.state
    }

    /// True while positioned on a primitive
    pub const fn has_more(&self) -> bool {
        matches!(self.state, IteratorState::Active { .. })
    }

    /// Primitives left, including the current one
    pub const fn remaining(&self) -> usize {
        match self.state {
            IteratorState::Active { remaining } => remaining,
            IteratorState::Unbound | IteratorState::Exhausted => 0,
        }
    }

    /// Index of the current primitive within its set
    pub const fn position(&self) -> Option<usize> {
        match self.state {
            IteratorState::Active { remaining } => Some(self.count - remaining),
            IteratorState::Unbound | IteratorState::Exhausted => None,
        }
    }

    /// Accessors for the current primitive
    ///
    /// # Errors
    /// `InvalidIteratorAccess` when the iterator is unbound or exhausted.
    pub fn element(&mut self) -> GeometryResult<Element<'_, D, S>> {
        if checks::ENABLED && !self.has_more() {
            return Err(GeometryError::InvalidIteratorAccess);
        }
        let vert_end = GeometrySet::<D, S>::VERTEX_STRIDE.min(self.vertices.len());
        let texc_end = GeometrySet::<D, S>::TEX_COORD_STRIDE.min(self.tex_coords.len());
        Ok(Element {
            vert: PrimitiveAccessor::new(&mut self.vertices[..vert_end]),
            texc: PrimitiveAccessor::new(&mut self.tex_coords[..texc_end]),
        })
    }

    /// Move to the next primitive
    ///
    /// Both attribute views move forward by one primitive's stride in their
    /// own array.
    ///
    /// # Errors
    /// `IteratorOverflow` when the iterator is unbound or exhausted.
    pub fn advance(&mut self) -> GeometryResult<()> {
        let IteratorState::Active { remaining } = self.state else {
            if checks::ENABLED {
                return Err(GeometryError::IteratorOverflow);
            }
            return Ok(());
        };

        let vertices = std::mem::take(&mut self.vertices);
        let vert_step = GeometrySet::<D, S>::VERTEX_STRIDE.min(vertices.len());
        self.vertices = &mut vertices[vert_step..];

        let tex_coords = std::mem::take(&mut self.tex_coords);
        let texc_step = GeometrySet::<D, S>::TEX_COORD_STRIDE.min(tex_coords.len());
        self.tex_coords = &mut tex_coords[texc_step..];

        self.state = if remaining > 1 {
            IteratorState::Active { remaining: remaining - 1 }
        } else {
            IteratorState::Exhausted
        };
        log::trace!("Iterator advanced to {:?}", self.state);
        Ok(())
    }
}
