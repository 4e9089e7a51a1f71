//! Geometry demo application
//!
//! Builds a unit cube out of six textured quads, wraps it in scene nodes,
//! culls it against a camera frustum and pushes it through the staging
//! backend, logging what a renderer would receive.

use geometry_core::prelude::*;
use geometry_core::foundation::logging;
use geometry_core::geometry::Quads3D;
use nalgebra::{Point3, Vector3};

const CONFIG_PATH: &str = "geometry_demo.toml";

/// Corner positions of each cube face, counter-clockwise seen from outside
const CUBE_FACES: [[[f32; 3]; 4]; 6] = [
    [[-0.5, -0.5, 0.5], [0.5, -0.5, 0.5], [0.5, 0.5, 0.5], [-0.5, 0.5, 0.5]],
    [[0.5, -0.5, -0.5], [-0.5, -0.5, -0.5], [-0.5, 0.5, -0.5], [0.5, 0.5, -0.5]],
    [[0.5, -0.5, 0.5], [0.5, -0.5, -0.5], [0.5, 0.5, -0.5], [0.5, 0.5, 0.5]],
    [[-0.5, -0.5, -0.5], [-0.5, -0.5, 0.5], [-0.5, 0.5, 0.5], [-0.5, 0.5, -0.5]],
    [[-0.5, 0.5, 0.5], [0.5, 0.5, 0.5], [0.5, 0.5, -0.5], [-0.5, 0.5, -0.5]],
    [[-0.5, -0.5, -0.5], [0.5, -0.5, -0.5], [0.5, -0.5, 0.5], [-0.5, -0.5, 0.5]],
];

/// Vertical field of view of the demo camera, in degrees
const CAMERA_FOV: f32 = 45.0;

const QUAD_TEX_COORDS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

fn build_cube(config: &AllocationConfig) -> Result<Quads3D, GeometryError> {
    let mut cube = Quads3D::with_config(CUBE_FACES.len(), config);
    let mut elm = cube.iter();
    let mut faces = CUBE_FACES.iter();

    while elm.has_more() {
        let face = faces.next().ok_or(GeometryError::IteratorOverflow)?;
        let mut element = elm.element()?;
        for (corner, (position, uv)) in face.iter().zip(QUAD_TEX_COORDS.iter()).enumerate() {
            element.vert.corner(corner)?.assign(&Vec3::from(*position));
            element.texc.corner(corner)?.assign(&Vec2::from(*uv));
        }
        elm.advance()?;
    }
    Ok(cube)
}

/// Face normals from the first three corners of every quad
fn face_normals(cube: &mut Quads3D) -> Result<Vec<Vec3>, GeometryError> {
    let mut normals = Vec::with_capacity(cube.size());
    for element in cube.primitives_mut() {
        let a = element.vert.read(0)?;
        let b = element.vert.read(1)?;
        let c = element.vert.read(2)?;
        normals.push(((b - a) % (c - a)).normalized()?);
    }
    Ok(normals)
}

fn run() -> Result<(), DemoError> {
    let config = GeometryConfig::load_or_default(CONFIG_PATH)?;
    config.validate()?;
    if !logging::init_with_config(&config.logging) {
        eprintln!("Logger already initialised");
    }

    log::info!("Building cube geometry...");
    let mut cube = build_cube(&config.allocation)?;
    for (face, normal) in face_normals(&mut cube)?.iter().enumerate() {
        log::debug!("Face {face} normal {normal}");
    }

    let mut frustum = Frustum::new(CAMERA_FOV.to_radians(), 800.0 / 600.0, 0.1, 100.0)?;
    frustum.look_at(&Point3::new(2.0, 2.0, 10.0), &Point3::origin(), &Vector3::y());
    let visible = cube.bounds().is_some_and(|bounds| frustum.is_visible(&bounds));
    log::info!("Cube visible from {:?}: {visible}", frustum.position());
    if !visible {
        log::warn!("Cube culled, nothing to upload");
        return Ok(());
    }

    let node = GeometryNode::new(cube);
    log::info!("{node}");

    let mut state = RenderStateNode::new();
    state.enable(RenderStateOption::TEXTURE | RenderStateOption::LIGHTING | RenderStateOption::DEPTH_TEST);
    state.disable(RenderStateOption::WIREFRAME);
    log::info!("{state}");

    let mut backend = StagingBackend::new();
    upload_geometry(&mut backend, node.geometry())?;

    let positions = backend.attribute_floats(AttributeKind::Position).unwrap_or_default();
    if let Some(corner) = positions.get(..3) {
        let first = Vec3::from_slice(corner)?;
        log::info!("First staged corner: {first}");
    }
    log::info!("Staged {} bytes in total", backend.total_bytes());
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    run()?;
    Ok(())
}
