//! CPU-side backend that records uploads

use super::backend::{BackendResult, RenderBackend};
use super::layout::{AttributeKind, AttributeLayout};

/// Backend that keeps every upload in host memory
///
/// Useful for headless runs and for inspecting exactly what a real backend
/// would receive.
#[derive(Debug, Default, Clone)]
pub struct StagingBackend {
    indices: Vec<u8>,
    attributes: Vec<(AttributeLayout, Vec<u8>)>,
}

impl StagingBackend {
    /// Create an empty staging backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently uploaded index bytes
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Every attribute upload, in order
    pub fn attributes(&self) -> &[(AttributeLayout, Vec<u8>)] {
        &self.attributes
    }

    /// Most recent upload of `kind`, if any
    pub fn attribute(&self, kind: AttributeKind) -> Option<(&AttributeLayout, &[u8])> {
        self.attributes
            .iter()
            .rev()
            .find(|(layout, _)| layout.kind == kind)
            .map(|(layout, bytes)| (layout, bytes.as_slice()))
    }

    /// Most recent upload of `kind` reinterpreted as floats
    pub fn attribute_floats(&self, kind: AttributeKind) -> Option<Vec<f32>> {
        self.attribute(kind)
            .map(|(_, bytes)| bytes.chunks_exact(4).map(bytemuck::pod_read_unaligned::<f32>).collect())
    }

    /// Total bytes received
    pub fn total_bytes(&self) -> usize {
        self.indices.len() + self.attributes.iter().map(|(_, bytes)| bytes.len()).sum::<usize>()
    }

    /// Drop everything recorded so far
    pub fn clear(&mut self) {
        self.indices.clear();
        self.attributes.clear();
    }
}

impl RenderBackend for StagingBackend {
    fn upload_attribute(&mut self, layout: &AttributeLayout, bytes: &[u8]) -> BackendResult<()> {
        log::debug!("Staging {} bytes of {} data", bytes.len(), layout.kind);
        self.attributes.push((*layout, bytes.to_vec()));
        Ok(())
    }

    fn upload_indices(&mut self, bytes: &[u8]) -> BackendResult<()> {
        self.indices = bytes.to_vec();
        Ok(())
    }
}
