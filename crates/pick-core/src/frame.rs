//! Per-pixel depth and prop-id capture of a rendered frame.
//!
//! The capture ray-casts every pixel covered by a sphere's projected bounds
//! and keeps the nearest hit, storing the same normalized depth a hardware
//! depth buffer would hold for that surface.

use crate::camera::Camera;
use crate::constants::BACKGROUND_DEPTH;
use crate::point::ScreenPoint;
use crate::ray::Ray;
use crate::scene::{Scene, Sphere};
use crate::viewport::Viewport;
use glam::Mat4;

#[derive(Clone, Debug)]
pub struct DepthFrame {
    viewport: Viewport,
    /// View-projection the frame was captured with.
    view_proj: Mat4,
    depth: Vec<f32>,
    props: Vec<Option<u32>>,
}

/// Half-open pixel rectangle `[x0, x1) x [y0, y1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PixelRect {
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
}

impl DepthFrame {
    /// Frame with every pixel at background depth and no prop.
    pub fn cleared(viewport: Viewport) -> Self {
        let n = viewport.pixel_count();
        Self {
            viewport,
            view_proj: Mat4::IDENTITY,
            depth: vec![BACKGROUND_DEPTH; n],
            props: vec![None; n],
        }
    }

    /// Rasterize the spheres of `scene` as seen by `camera`.
    pub fn capture(scene: &Scene, camera: &Camera, viewport: Viewport) -> Self {
        let view_proj = camera.view_projection();
        let mut frame = Self {
            view_proj,
            ..Self::cleared(viewport)
        };
        let inverse = view_proj.inverse();
        for (index, sphere) in scene.spheres().iter().enumerate() {
            let Some(rect) = projected_rect(sphere, &view_proj, viewport) else {
                continue;
            };
            for y in rect.y0..rect.y1 {
                for x in rect.x0..rect.x1 {
                    let screen = ScreenPoint::new(x as i32, y as i32);
                    let Some(ray) = Ray::through_pixel_with(&inverse, camera.eye, viewport, screen)
                    else {
                        continue;
                    };
                    let Some(t) = ray.intersect_sphere(sphere.center, sphere.radius) else {
                        continue;
                    };
                    let clip = view_proj * ray.at(t).extend(1.0);
                    if clip.w <= 0.0 {
                        continue;
                    }
                    let depth = clip.z / clip.w;
                    if !(0.0..=1.0).contains(&depth) {
                        // outside the clipping range
                        continue;
                    }
                    let slot = frame.index(screen);
                    if depth < frame.depth[slot] {
                        frame.depth[slot] = depth;
                        frame.props[slot] = Some(index as u32);
                    }
                }
            }
        }
        frame
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// View-projection the depths were captured with.
    pub fn view_projection(&self) -> Mat4 {
        self.view_proj
    }

    /// Normalized depth at `p`, `None` outside the frame.
    pub fn depth_at(&self, p: ScreenPoint) -> Option<f32> {
        self.viewport
            .contains(p)
            .then(|| self.depth[self.index(p)])
    }

    /// Index of the sphere drawn at `p`, `None` for background or outside the frame.
    pub fn prop_at(&self, p: ScreenPoint) -> Option<usize> {
        if !self.viewport.contains(p) {
            return None;
        }
        self.props[self.index(p)].map(|i| i as usize)
    }

    /// Number of pixels covered by geometry.
    pub fn covered_pixels(&self) -> usize {
        self.props.iter().filter(|p| p.is_some()).count()
    }

    #[inline]
    fn index(&self, p: ScreenPoint) -> usize {
        p.y as usize * self.viewport.width as usize + p.x as usize
    }
}

/// Screen rectangle covering the projection of the sphere's bounding box.
/// Falls back to the whole viewport when a corner is behind the eye.
fn projected_rect(sphere: &Sphere, view_proj: &Mat4, viewport: Viewport) -> Option<PixelRect> {
    let full = PixelRect {
        x0: 0,
        y0: 0,
        x1: viewport.width,
        y1: viewport.height,
    };
    let (mut min_x, mut min_y) = (f32::INFINITY, f32::INFINITY);
    let (mut max_x, mut max_y) = (f32::NEG_INFINITY, f32::NEG_INFINITY);
    for corner in sphere.bounds().corners() {
        let Some(d) = viewport.project(view_proj, corner) else {
            return Some(full);
        };
        min_x = min_x.min(d.x);
        min_y = min_y.min(d.y);
        max_x = max_x.max(d.x);
        max_y = max_y.max(d.y);
    }
    let clamp_x = |v: f32| v.clamp(0.0, viewport.width as f32) as u32;
    let clamp_y = |v: f32| v.clamp(0.0, viewport.height as f32) as u32;
    let rect = PixelRect {
        x0: clamp_x(min_x.floor()),
        y0: clamp_y(min_y.floor()),
        x1: clamp_x(max_x.ceil() + 1.0),
        y1: clamp_y(max_y.ceil() + 1.0),
    };
    (rect.x0 < rect.x1 && rect.y0 < rect.y1).then_some(rect)
}
