// Shared fixtures for the pick-core integration tests.

#![allow(dead_code)]

use glam::Vec3;
use pick_core::{Camera, Renderer, RendererId, Scene, ScreenPoint, Sphere, Viewport};

pub const WIDTH: u32 = 640;
pub const HEIGHT: u32 = 480;

/// Camera on +Z at distance 10 looking at the origin.
pub fn front_camera() -> Camera {
    Camera {
        eye: Vec3::new(0.0, 0.0, 10.0),
        target: Vec3::ZERO,
        up: Vec3::Y,
        znear: 1.0,
        zfar: 100.0,
        ..Camera::default()
    }
}

pub fn renderer_with(spheres: &[Sphere]) -> Renderer {
    let mut scene = Scene::new();
    for s in spheres {
        scene.add_sphere(s.clone());
    }
    let mut renderer = Renderer::new(RendererId(7), scene, Viewport::new(WIDTH, HEIGHT));
    renderer.set_camera(front_camera());
    renderer
}

/// Unit sphere at the origin seen from +Z.
pub fn single_sphere_renderer() -> Renderer {
    renderer_with(&[Sphere::new(Vec3::ZERO, 1.0)])
}

/// Pixel containing the projection of `p`.
pub fn screen_of(renderer: &Renderer, p: Vec3) -> ScreenPoint {
    let d = renderer
        .viewport()
        .project(&renderer.camera().view_projection(), p)
        .expect("point in front of the camera");
    ScreenPoint::from_display(d.x, d.y)
}
