//! Perspective camera used by the renderer, the pick strategies and the
//! trackball navigation.
//!
//! Matrices follow the wgpu conventions: right-handed view space and a
//! projection mapping the clipping range to normalized depth `[0, 1]`.

use crate::bounds::Aabb;
use crate::constants::{
    CLIPPING_PADDING, DEFAULT_ZFAR, DEFAULT_ZNEAR, MIN_FRAMING_RADIUS, NEAR_CLIPPING_RATIO,
    VIEW_ANGLE_DEGREES, WINDOW_HEIGHT, WINDOW_WIDTH,
};
use glam::{Mat4, Quat, Vec3};

#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    /// Focal point.
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 1.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: WINDOW_WIDTH as f32 / WINDOW_HEIGHT as f32,
            fovy_radians: VIEW_ANGLE_DEGREES.to_radians(),
            znear: DEFAULT_ZNEAR,
            zfar: DEFAULT_ZFAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Unit vector from the eye towards the focal point.
    pub fn direction(&self) -> Vec3 {
        (self.target - self.eye).normalize_or_zero()
    }

    pub fn distance(&self) -> f32 {
        self.eye.distance(self.target)
    }

    /// Unit vector pointing to the right of the view.
    pub fn right(&self) -> Vec3 {
        self.direction().cross(self.up).normalize_or_zero()
    }

    /// Place the focal point at the centre of `bounds` and back the eye off
    /// along +Z until the bounding sphere fits the view angle.
    pub fn reset_to_bounds(&mut self, bounds: &Aabb) {
        let (center, radius) = if bounds.is_empty() {
            (Vec3::ZERO, MIN_FRAMING_RADIUS)
        } else {
            (bounds.center(), bounds.radius().max(MIN_FRAMING_RADIUS))
        };
        let distance = radius / (self.fovy_radians * 0.5).sin();
        self.target = center;
        self.eye = center + Vec3::Z * distance;
        self.up = Vec3::Y;
        self.reset_clipping_range(bounds);
    }

    /// Fit near/far around `bounds` measured along the view direction.
    pub fn reset_clipping_range(&mut self, bounds: &Aabb) {
        if bounds.is_empty() {
            return;
        }
        let dir = self.direction();
        let (mut near, mut far) = (f32::INFINITY, f32::NEG_INFINITY);
        for corner in bounds.corners() {
            let d = (corner - self.eye).dot(dir);
            near = near.min(d);
            far = far.max(d);
        }
        let span = (far - near).max(f32::EPSILON);
        near -= span * CLIPPING_PADDING;
        far += span * CLIPPING_PADDING;
        if far <= 0.0 {
            // everything is behind the eye
            far = 1.0;
        }
        self.znear = near.max(far * NEAR_CLIPPING_RATIO);
        self.zfar = far;
    }

    /// Rotate the eye about the view-up vector centred at the focal point.
    pub fn azimuth(&mut self, degrees: f32) {
        let axis = self.up.normalize_or_zero();
        if axis == Vec3::ZERO {
            return;
        }
        let rotation = Quat::from_axis_angle(axis, degrees.to_radians());
        self.eye = self.target + rotation * (self.eye - self.target);
    }

    /// Rotate the eye about the right axis centred at the focal point.
    /// Positive angles move the eye towards view-up.
    pub fn elevation(&mut self, degrees: f32) {
        let axis = -self.right();
        if axis == Vec3::ZERO {
            return;
        }
        let rotation = Quat::from_axis_angle(axis, degrees.to_radians());
        self.eye = self.target + rotation * (self.eye - self.target);
    }

    /// Make view-up perpendicular to the view direction.
    pub fn orthogonalize_view_up(&mut self) {
        let dir = self.direction();
        let right = dir.cross(self.up);
        if right.length_squared() < f32::EPSILON {
            return;
        }
        self.up = right.cross(dir).normalize();
    }

    /// Move the eye towards the focal point; `factor > 1` moves closer.
    pub fn dolly(&mut self, factor: f32) {
        if factor <= 0.0 || !factor.is_finite() {
            return;
        }
        let distance = self.distance() / factor;
        self.eye = self.target - self.direction() * distance;
    }

    /// Translate eye and focal point together.
    pub fn translate(&mut self, offset: Vec3) {
        self.eye += offset;
        self.target += offset;
    }
}
