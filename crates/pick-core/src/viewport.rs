use crate::constants::HOMOGENEOUS_W_EPSILON;
use crate::point::ScreenPoint;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Size of the render surface in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Zero dimensions are clamped to one pixel.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, p: ScreenPoint) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as u32) < self.width && (p.y as u32) < self.height
    }

    #[inline]
    pub fn display_to_ndc(&self, x: f32, y: f32) -> Vec2 {
        let ndc_x = (2.0 * x / self.width as f32) - 1.0;
        let ndc_y = 1.0 - (2.0 * y / self.height as f32);
        Vec2::new(ndc_x, ndc_y)
    }

    #[inline]
    pub fn ndc_to_display(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.width as f32,
            (1.0 - ndc.y) * 0.5 * self.height as f32,
        )
    }

    /// Map display coordinates plus normalized depth back to world space
    /// through `inverse_view_proj`, dividing by the homogeneous `w`.
    ///
    /// Returns `None` when `w` vanishes or the result is not finite.
    pub fn unproject(&self, inverse_view_proj: &Mat4, x: f32, y: f32, depth: f32) -> Option<Vec3> {
        let ndc = self.display_to_ndc(x, y);
        let world = *inverse_view_proj * Vec4::new(ndc.x, ndc.y, depth, 1.0);
        if world.w.abs() < HOMOGENEOUS_W_EPSILON {
            return None;
        }
        let p = world.truncate() / world.w;
        p.is_finite().then_some(p)
    }

    /// World point to `(display_x, display_y, depth)`. `None` if the point is
    /// at or behind the eye.
    pub fn project(&self, view_proj: &Mat4, p: Vec3) -> Option<Vec3> {
        let clip = *view_proj * p.extend(1.0);
        if clip.w <= HOMOGENEOUS_W_EPSILON {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        let display = self.ndc_to_display(Vec2::new(ndc.x, ndc.y));
        Some(Vec3::new(display.x, display.y, ndc.z))
    }
}
