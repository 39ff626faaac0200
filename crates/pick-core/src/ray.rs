use crate::camera::Camera;
use crate::constants::PARALLEL_EPSILON;
use crate::point::ScreenPoint;
use crate::viewport::Viewport;
use glam::{Mat4, Vec3};

/// Half-line in world space. `direction` is unit length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// Infinite plane through `origin` with unit `normal`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub origin: Vec3,
    pub normal: Vec3,
}

impl Plane {
    /// The world z = 0 plane.
    pub const XY: Plane = Plane {
        origin: Vec3::ZERO,
        normal: Vec3::Z,
    };

    pub fn new(origin: Vec3, normal: Vec3) -> Self {
        Self {
            origin,
            normal: normal.normalize_or_zero(),
        }
    }

    pub fn signed_distance(&self, p: Vec3) -> f32 {
        (p - self.origin).dot(self.normal)
    }
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Ray from the camera eye through the centre of `screen`.
    pub fn through_pixel(camera: &Camera, viewport: Viewport, screen: ScreenPoint) -> Option<Ray> {
        let inverse = camera.view_projection().inverse();
        Self::through_pixel_with(&inverse, camera.eye, viewport, screen)
    }

    /// Same as [`Ray::through_pixel`] with a precomputed inverse
    /// view-projection, for callers casting many rays per frame.
    pub fn through_pixel_with(
        inverse_view_proj: &Mat4,
        eye: Vec3,
        viewport: Viewport,
        screen: ScreenPoint,
    ) -> Option<Ray> {
        let c = screen.center();
        let far = viewport.unproject(inverse_view_proj, c.x, c.y, 1.0)?;
        let dir = far - eye;
        if dir.length_squared() < f32::EPSILON {
            return None;
        }
        Some(Ray::new(eye, dir))
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance to the first crossing of the sphere surface in front of the
    /// origin. A ray starting inside the sphere reports the exit point.
    #[inline]
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.dot(oc) - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let root = disc.sqrt();
        let t_near = -b - root;
        if t_near >= 0.0 {
            return Some(t_near);
        }
        let t_far = -b + root;
        (t_far >= 0.0).then_some(t_far)
    }

    /// Distance to the plane crossing. `None` when the ray runs parallel to
    /// the plane or crosses it behind the origin.
    #[inline]
    pub fn intersect_plane(&self, plane: &Plane) -> Option<f32> {
        let denom = plane.normal.dot(self.direction);
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }
        let t = (plane.origin - self.origin).dot(plane.normal) / denom;
        (t >= 0.0).then_some(t)
    }
}
