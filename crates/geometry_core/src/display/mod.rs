//! Viewing volumes and visibility tests
//!
//! A [`Frustum`] describes what a perspective camera can see. Geometry is
//! culled against it through axis-aligned bounding boxes ([`Aabb`]), which
//! a spatial geometry set can compute for itself.

pub mod bounds;
pub mod frustum;

pub use bounds::{Aabb, Plane};
pub use frustum::Frustum;
