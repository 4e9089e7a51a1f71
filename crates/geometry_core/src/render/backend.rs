//! Backend abstraction for geometry upload
//!
//! A backend receives whole attribute arrays as raw bytes together with the
//! layout describing them. It never sees accessors or iterators.

use super::layout::AttributeLayout;
use super::RenderError;
use crate::geometry::GeometrySet;

/// Result type for backend operations
pub type BackendResult<T> = Result<T, RenderError>;

/// Rendering backend that accepts bulk attribute uploads
pub trait RenderBackend {
    /// Upload one attribute array
    ///
    /// `bytes` holds exactly `layout.byte_len()` bytes of native-endian `f32`s.
    fn upload_attribute(&mut self, layout: &AttributeLayout, bytes: &[u8]) -> BackendResult<()>;

    /// Upload the per-primitive index array, native-endian `i32`s
    fn upload_indices(&mut self, bytes: &[u8]) -> BackendResult<()>;
}

fn check_layout(layout: &AttributeLayout, bytes: &[u8]) -> BackendResult<()> {
    if layout.byte_len() != bytes.len() {
        return Err(RenderError::LayoutMismatch {
            expected: layout.byte_len(),
            actual: bytes.len(),
        });
    }
    Ok(())
}

/// Push a geometry set's indices, positions and texture coordinates to `backend`
///
/// # Errors
/// `LayoutMismatch` if an array disagrees with its layout, or whatever the
/// backend reports. Uploads that already happened are not rolled back.
pub fn upload_geometry<B, const D: usize, const S: usize>(
    backend: &mut B,
    set: &GeometrySet<D, S>,
) -> BackendResult<()>
where
    B: RenderBackend + ?Sized,
{
    let [positions, tex_coords] = set.attribute_layouts();
    check_layout(&positions, set.vertex_bytes())?;
    check_layout(&tex_coords, set.tex_coord_bytes())?;

    backend.upload_indices(set.index_bytes())?;
    backend.upload_attribute(&positions, set.vertex_bytes())?;
    backend.upload_attribute(&tex_coords, set.tex_coord_bytes())?;

    log::info!(
        "Uploaded {} {}D {}(s): {} position bytes, {} texcoord bytes",
        set.size(),
        D,
        GeometrySet::<D, S>::shape(),
        positions.byte_len(),
        tex_coords.byte_len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::layout::AttributeKind;

    struct FailingBackend;

    impl RenderBackend for FailingBackend {
        fn upload_attribute(&mut self, layout: &AttributeLayout, _bytes: &[u8]) -> BackendResult<()> {
            Err(RenderError::Backend(format!("no room for {}", layout.kind)))
        }

        fn upload_indices(&mut self, _bytes: &[u8]) -> BackendResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_backend_error_propagates() {
        let set = GeometrySet::<2, 3>::new(1);
        let result = upload_geometry(&mut FailingBackend, &set);
        assert_eq!(result, Err(RenderError::Backend("no room for position".to_string())));
    }

    #[test]
    fn test_layout_mismatch_detected() {
        let layout = AttributeLayout {
            kind: AttributeKind::Position,
            components: 3,
            corners: 1,
            primitives: 2,
        };
        assert_eq!(
            check_layout(&layout, &[0_u8; 8]),
            Err(RenderError::LayoutMismatch { expected: 24, actual: 8 })
        );
        assert!(check_layout(&layout, &[0_u8; 24]).is_ok());
    }

    #[test]
    fn test_upload_through_trait_object() {
        let set = GeometrySet::<3, 1>::new(2);
        let mut staging = crate::render::StagingBackend::new();
        let backend: &mut dyn RenderBackend = &mut staging;
        upload_geometry(backend, &set).unwrap();
        assert_eq!(staging.attributes().len(), 2);
    }
}
