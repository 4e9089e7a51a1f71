//! Perspective viewing frustum
//!
//! The frustum combines a symmetric perspective projection (vertical field
//! of view, aspect ratio, near and far distances) with a view transform
//! placing the camera in the world. The camera looks down its local `-Z`
//! axis with `+Y` up.
//!
//! Its six clipping planes are extracted from the combined view-projection
//! matrix (Gribb-Hartmann) and recomputed whenever a parameter or the view
//! changes. Plane normals point into the frustum.
//!
//! ```rust
//! use geometry_core::display::{Aabb, Frustum};
//! use nalgebra::{Point3, Vector3};
//!
//! let mut frustum = Frustum::new(std::f32::consts::FRAC_PI_2, 1.0, 0.1, 100.0).unwrap();
//! frustum.look_at(&Point3::new(0.0, 0.0, 10.0), &Point3::origin(), &Vector3::y());
//!
//! let unit = Aabb::from_center_extents(Vector3::zeros(), Vector3::repeat(0.5));
//! assert!(frustum.is_visible(&unit));
//! ```

use std::f32::consts::PI;

use nalgebra::{Isometry3, Matrix4, Point3, RowVector4, Vector3};

use super::bounds::{Aabb, Plane};
use crate::core::error::{GeometryError, GeometryResult};

/// Index of each clipping plane in [`Frustum::planes`]
pub mod plane_index {
    /// Left clipping plane
    pub const LEFT: usize = 0;
    /// Right clipping plane
    pub const RIGHT: usize = 1;
    /// Bottom clipping plane
    pub const BOTTOM: usize = 2;
    /// Top clipping plane
    pub const TOP: usize = 3;
    /// Near clipping plane
    pub const NEAR: usize = 4;
    /// Far clipping plane
    pub const FAR: usize = 5;
}

/// Perspective viewing volume with cached clipping planes
#[derive(Debug, Clone, PartialEq)]
pub struct Frustum {
    fov: f32,
    aspect: f32,
    near: f32,
    far: f32,
    view: Isometry3<f32>,
    planes: [Plane; 6],
}

fn check_parameters(fov: f32, aspect: f32, near: f32, far: f32) -> GeometryResult<()> {
    if !(fov > 0.0 && fov < PI) {
        return Err(GeometryError::InvalidProjection(format!(
            "field of view must lie in (0, pi), got {fov}"
        )));
    }
    if !(aspect > 0.0 && aspect.is_finite()) {
        return Err(GeometryError::InvalidProjection(format!(
            "aspect ratio must be positive, got {aspect}"
        )));
    }
    if !(near > 0.0 && far > near && far.is_finite()) {
        return Err(GeometryError::InvalidProjection(format!(
            "clipping distances must satisfy 0 < near < far, got near {near}, far {far}"
        )));
    }
    Ok(())
}

fn plane_from_row(row: RowVector4<f32>) -> Plane {
    let normal = Vector3::new(row[0], row[1], row[2]);
    let length = normal.norm();
    Plane {
        normal: normal / length,
        distance: row[3] / length,
    }
}

impl Frustum {
    /// Create a frustum at the origin looking down `-Z`
    ///
    /// `fov` is the vertical field of view in radians.
    ///
    /// # Errors
    /// `InvalidProjection` unless `0 < fov < pi`, `aspect > 0` and
    /// `0 < near < far`.
    pub fn new(fov: f32, aspect: f32, near: f32, far: f32) -> GeometryResult<Self> {
        check_parameters(fov, aspect, near, far)?;
        let mut frustum = Self {
            fov,
            aspect,
            near,
            far,
            view: Isometry3::identity(),
            planes: [Plane {
                normal: Vector3::zeros(),
                distance: 0.0,
            }; 6],
        };
        frustum.update_planes();
        Ok(frustum)
    }

    /// Vertical field of view in radians
    pub const fn fov(&self) -> f32 {
        self.fov
    }

    /// Width over height
    pub const fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Distance to the near clipping plane
    pub const fn near(&self) -> f32 {
        self.near
    }

    /// Distance to the far clipping plane
    pub const fn far(&self) -> f32 {
        self.far
    }

    /// Set the vertical field of view
    ///
    /// # Errors
    /// `InvalidProjection` if the value is out of range; the frustum is unchanged.
    pub fn set_fov(&mut self, fov: f32) -> GeometryResult<()> {
        check_parameters(fov, self.aspect, self.near, self.far)?;
        self.fov = fov;
        self.update_planes();
        Ok(())
    }

    /// Set the aspect ratio
    ///
    /// # Errors
    /// `InvalidProjection` if the value is out of range; the frustum is unchanged.
    pub fn set_aspect(&mut self, aspect: f32) -> GeometryResult<()> {
        check_parameters(self.fov, aspect, self.near, self.far)?;
        self.aspect = aspect;
        self.update_planes();
        Ok(())
    }

    /// Set the near clipping distance
    ///
    /// # Errors
    /// `InvalidProjection` if the value is out of range; the frustum is unchanged.
    pub fn set_near(&mut self, near: f32) -> GeometryResult<()> {
        check_parameters(self.fov, self.aspect, near, self.far)?;
        self.near = near;
        self.update_planes();
        Ok(())
    }

    /// Set the far clipping distance
    ///
    /// # Errors
    /// `InvalidProjection` if the value is out of range; the frustum is unchanged.
    pub fn set_far(&mut self, far: f32) -> GeometryResult<()> {
        check_parameters(self.fov, self.aspect, self.near, far)?;
        self.far = far;
        self.update_planes();
        Ok(())
    }

    /// World-to-camera transform
    pub const fn view(&self) -> &Isometry3<f32> {
        &self.view
    }

    /// Replace the world-to-camera transform
    pub fn set_view(&mut self, view: Isometry3<f32>) {
        self.view = view;
        self.update_planes();
    }

    /// Place the camera at `eye` looking towards `target`
    pub fn look_at(&mut self, eye: &Point3<f32>, target: &Point3<f32>, up: &Vector3<f32>) {
        self.set_view(Isometry3::look_at_rh(eye, target, up));
    }

    /// Camera position in world space
    pub fn position(&self) -> Vector3<f32> {
        self.view.inverse().translation.vector
    }

    /// Extent of the near clipping plane as `(left, right, top, bottom)`
    pub fn near_plane_bounds(&self) -> (f32, f32, f32, f32) {
        let ty = (self.fov * 0.5).tan();
        let tx = ty * self.aspect;
        let right = tx * self.near;
        let top = ty * self.near;
        (-right, right, top, -top)
    }

    /// Perspective projection matrix mapping camera space to clip space
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        let f = 1.0 / (self.fov * 0.5).tan();
        let a = (self.far + self.near) / (self.near - self.far);
        let b = (2.0 * self.far * self.near) / (self.near - self.far);
        Matrix4::new(
            f / self.aspect, 0.0, 0.0, 0.0,
            0.0, f, 0.0, 0.0,
            0.0, 0.0, a, b,
            0.0, 0.0, -1.0, 0.0,
        )
    }

    /// Projection combined with the view transform
    pub fn view_projection_matrix(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view.to_homogeneous()
    }

    /// Clipping planes, ordered as in [`plane_index`]
    pub const fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// True unless the box lies entirely outside one of the clipping planes
    ///
    /// Each plane is tested against the box corner furthest along its
    /// normal. Boxes near a frustum edge may be reported visible although
    /// they are not; boxes reported invisible never are.
    pub fn is_visible(&self, aabb: &Aabb) -> bool {
        self.planes.iter().all(|plane| {
            let positive = aabb.corner(plane.normal.x > 0.0, plane.normal.y > 0.0, plane.normal.z > 0.0);
            plane.signed_distance(&positive) >= 0.0
        })
    }

    fn update_planes(&mut self) {
        let m = self.view_projection_matrix();
        let w = m.row(3).into_owned();
        let x = m.row(0).into_owned();
        let y = m.row(1).into_owned();
        let z = m.row(2).into_owned();

        self.planes = [
            plane_from_row(w + x),
            plane_from_row(w - x),
            plane_from_row(w + y),
            plane_from_row(w - y),
            plane_from_row(w + z),
            plane_from_row(w - z),
        ];
        log::trace!(
            "Frustum planes updated: fov {}, aspect {}, near {}, far {}",
            self.fov,
            self.aspect,
            self.near,
            self.far
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Perspective3;
    use std::f32::consts::FRAC_PI_2;

    fn unit_box_at(center: Vector3<f32>) -> Aabb {
        Aabb::from_center_extents(center, Vector3::repeat(0.5))
    }

    #[test]
    fn test_projection_matches_nalgebra() {
        let frustum = Frustum::new(1.2, 16.0 / 9.0, 0.5, 250.0).unwrap();
        let expected = Perspective3::new(16.0 / 9.0, 1.2, 0.5, 250.0).to_homogeneous();
        assert_relative_eq!(frustum.projection_matrix(), expected, epsilon = 1e-5);
    }

    #[test]
    fn test_near_and_far_planes_at_origin() {
        let frustum = Frustum::new(FRAC_PI_2, 1.0, 1.0, 100.0).unwrap();
        let near = frustum.planes()[plane_index::NEAR];
        assert_relative_eq!(near.normal, Vector3::new(0.0, 0.0, -1.0), epsilon = 1e-5);
        assert_relative_eq!(near.distance, -1.0, epsilon = 1e-4);

        let far = frustum.planes()[plane_index::FAR];
        assert_relative_eq!(far.normal, Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-5);
        assert_relative_eq!(far.distance, 100.0, epsilon = 1e-2);

        for plane in frustum.planes() {
            assert_relative_eq!(plane.normal.norm(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_visibility_at_origin() {
        let frustum = Frustum::new(FRAC_PI_2, 1.0, 1.0, 100.0).unwrap();
        assert!(frustum.is_visible(&unit_box_at(Vector3::new(0.0, 0.0, -5.0))));
        // behind the camera
        assert!(!frustum.is_visible(&unit_box_at(Vector3::new(0.0, 0.0, 5.0))));
        // beyond the far plane
        assert!(!frustum.is_visible(&unit_box_at(Vector3::new(0.0, 0.0, -150.0))));
        // outside the 90 degree cone on the left and above
        assert!(!frustum.is_visible(&unit_box_at(Vector3::new(-20.0, 0.0, -5.0))));
        assert!(!frustum.is_visible(&unit_box_at(Vector3::new(0.0, 20.0, -5.0))));
        // straddling the right plane
        assert!(frustum.is_visible(&unit_box_at(Vector3::new(5.0, 0.0, -5.0))));
    }

    #[test]
    fn test_look_at_moves_planes() {
        let mut frustum = Frustum::new(FRAC_PI_2, 1.0, 0.1, 50.0).unwrap();
        frustum.look_at(&Point3::new(0.0, 0.0, 10.0), &Point3::origin(), &Vector3::y());

        assert_relative_eq!(frustum.position(), Vector3::new(0.0, 0.0, 10.0), epsilon = 1e-5);
        assert!(frustum.is_visible(&unit_box_at(Vector3::zeros())));
        assert!(!frustum.is_visible(&unit_box_at(Vector3::new(0.0, 0.0, 20.0))));
        assert!(!frustum.is_visible(&unit_box_at(Vector3::new(0.0, 0.0, -45.0))));
    }

    #[test]
    fn test_setters_recompute_planes() {
        let mut frustum = Frustum::new(FRAC_PI_2, 1.0, 1.0, 100.0).unwrap();
        let distant = unit_box_at(Vector3::new(0.0, 0.0, -60.0));
        assert!(frustum.is_visible(&distant));

        frustum.set_far(30.0).unwrap();
        assert_eq!(frustum.far(), 30.0);
        assert!(!frustum.is_visible(&distant));

        let wide = unit_box_at(Vector3::new(8.0, 0.0, -5.0));
        assert!(!frustum.is_visible(&wide));
        frustum.set_aspect(3.0).unwrap();
        assert!(frustum.is_visible(&wide));
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        assert!(matches!(
            Frustum::new(0.0, 1.0, 0.1, 10.0),
            Err(GeometryError::InvalidProjection(_))
        ));
        assert!(Frustum::new(1.0, -1.0, 0.1, 10.0).is_err());
        assert!(Frustum::new(1.0, 1.0, 10.0, 1.0).is_err());

        let mut frustum = Frustum::new(1.0, 1.0, 0.1, 10.0).unwrap();
        assert!(frustum.set_near(20.0).is_err());
        assert_eq!(frustum.near(), 0.1);
        assert!(frustum.set_fov(PI).is_err());
        assert_eq!(frustum.fov(), 1.0);
    }

    #[test]
    fn test_near_plane_bounds() {
        let frustum = Frustum::new(FRAC_PI_2, 2.0, 1.0, 10.0).unwrap();
        let (left, right, top, bottom) = frustum.near_plane_bounds();
        assert_relative_eq!(right, 2.0, epsilon = 1e-5);
        assert_relative_eq!(left, -2.0, epsilon = 1e-5);
        assert_relative_eq!(top, 1.0, epsilon = 1e-5);
        assert_relative_eq!(bottom, -1.0, epsilon = 1e-5);
    }
}
