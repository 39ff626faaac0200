//! Screen-space and world-space point types.
//!
//! Screen points follow the window convention: origin at the top-left pixel,
//! `y` growing downwards. World points are plain values in scene space.

use glam::{Vec2, Vec3};
use std::fmt;

/// Integer pixel coordinate within the render surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Pixel containing the given (sub-pixel) display coordinate.
    pub fn from_display(x: f32, y: f32) -> Self {
        Self {
            x: x.floor() as i32,
            y: y.floor() as i32,
        }
    }

    /// Display coordinate of the pixel centre. Picks are resolved through this.
    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.x as f32 + 0.5, self.y as f32 + 0.5)
    }
}

/// 3D coordinate in scene space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WorldPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl WorldPoint {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn distance(self, other: WorldPoint) -> f32 {
        self.to_vec3().distance(other.to_vec3())
    }

    pub fn is_finite(self) -> bool {
        self.to_vec3().is_finite()
    }
}

impl From<Vec3> for WorldPoint {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<WorldPoint> for Vec3 {
    fn from(p: WorldPoint) -> Self {
        p.to_vec3()
    }
}

impl fmt::Display for WorldPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}
