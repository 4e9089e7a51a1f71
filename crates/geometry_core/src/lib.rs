//! # Geometry Core
//!
//! Statically-shaped geometry storage for the rendering engine.
//!
//! ## Features
//!
//! - **Fixed Vectors**: `Vector<N, T>` with compile-time arity, arithmetic,
//!   dot/cross products and bounds-checked component access
//! - **Geometry Sets**: batches of points, lines, triangles or quads stored in
//!   flat per-attribute arrays ready for upload
//! - **Accessor Chain**: `element.vert[corner][axis]` style addressing over the
//!   flat arrays, checked per level
//! - **Visibility**: perspective frustum with bounding-box culling
//! - **Upload Seam**: attribute layouts and a backend trait for bulk transfer
//! - **Scene Collaborators**: geometry and render-state nodes
//!
//! ## Quick Start
//!
//! ```rust
//! use geometry_core::prelude::*;
//!
//! fn main() -> Result<(), GeometryError> {
//!     // Two triangles in the plane
//!     let mut set = GeometrySet::<2, 3>::new(2);
//!     let mut elm = set.iter();
//!     while elm.has_more() {
//!         let mut element = elm.element()?;
//!         element.vert.corner(0)?.assign(&Vec2::new(1.0, 1.0));
//!         element.vert.corner(1)?.assign(&Vec2::new(3.0, 1.0));
//!         element.vert.corner(2)?.assign(&Vec2::new(1.0, 3.0));
//!         elm.advance()?;
//!     }
//!     assert_eq!(&set.vertices()[..6], &[1.0, 1.0, 3.0, 1.0, 1.0, 3.0]);
//!     Ok(())
//! }
//! ```
//!
//! ## Bounds checking
//!
//! Every index, iterator-state and zero-divisor check is controlled by the
//! `bounds-checks` cargo feature, enabled by default. Building without it
//! removes the checks entirely. Misuse is then no longer reported as a
//! [`GeometryError`]: out-of-range indexing falls through to slice indexing
//! (which panics), iterator misuse is ignored and division by zero follows
//! the element type's own arithmetic.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

// Core error and configuration modules
pub mod core;
pub mod config;

pub mod display;
pub mod foundation;
pub mod geometry;
pub mod render;
pub mod scene;

pub use crate::core::error::{GeometryError, GeometryResult};

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        GeometryError, GeometryResult,
        config::{Config, ConfigError},
        core::config::{AllocationConfig, GeometryConfig, LoggingConfig},
        display::{Aabb, Frustum, Plane},
        foundation::{
            math::{Vec2, Vec3, Vec4},
            scalar::{FloatScalar, Scalar},
            vector::{Vector, Vector2, Vector3, Vector4},
        },
        geometry::{
            CornerAccessor, Element, GeometryDimension, GeometryIterator, GeometrySet,
            GeometryShape, IteratorState, PrimitiveAccessor,
        },
        render::{upload_geometry, AttributeKind, AttributeLayout, RenderBackend, RenderError, StagingBackend},
        scene::{GeometryNode, RenderStateNode, RenderStateOption},
    };
}
