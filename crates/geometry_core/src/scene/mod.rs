//! Scene nodes that own or annotate geometry

pub mod geometry_node;
pub mod render_state;

pub use geometry_node::GeometryNode;
pub use render_state::{RenderStateNode, RenderStateOption};
