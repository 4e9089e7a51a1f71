//! Upload seam between geometry sets and a rendering backend
//!
//! The renderer never walks a geometry set primitive by primitive. It takes
//! the flat attribute arrays wholesale, described by an [`AttributeLayout`],
//! and hands them to a [`RenderBackend`] for bulk transfer.

pub mod backend;
pub mod layout;
pub mod staging;

pub use backend::{upload_geometry, BackendResult, RenderBackend};
pub use layout::{AttributeKind, AttributeLayout};
pub use staging::StagingBackend;

/// Rendering errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// Byte payload does not match the size its layout describes
    ///
    /// Raised before anything reaches the backend, so a mismatched upload
    /// leaves the backend untouched.
    #[error("Layout mismatch: expected {expected} bytes, got {actual}")]
    LayoutMismatch {
        /// Byte length described by the layout
        expected: usize,
        /// Byte length actually supplied
        actual: usize,
    },

    /// Backend-specific error occurred
    #[error("Backend error: {0}")]
    Backend(String),
}
