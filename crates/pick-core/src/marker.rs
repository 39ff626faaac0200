//! Marker placement: turns a picked world point into a visual marker owned
//! by the renderer's scene.

use crate::bounds::Aabb;
use crate::constants::{MARKER_COLOR, MARKER_SIZE};
use crate::point::WorldPoint;
use crate::renderer::{Renderer, RendererId};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerStyle {
    pub color: [f32; 3],
    /// World-space extent of the cross drawn at the marker position.
    pub size: f32,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            color: MARKER_COLOR,
            size: MARKER_SIZE,
        }
    }
}

/// A placed marker. Markers are drawn but never picked.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub position: WorldPoint,
    pub renderer: RendererId,
    pub style: MarkerStyle,
}

impl Marker {
    pub fn bounds(&self) -> Aabb {
        Aabb::around(self.position.to_vec3(), self.style.size * 0.5)
    }
}

#[derive(Clone, Debug, Default)]
pub struct MarkerPlacement {
    style: MarkerStyle,
}

impl MarkerPlacement {
    pub fn new(style: MarkerStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> MarkerStyle {
        self.style
    }

    /// Create a marker at `point` and register it with `renderer` so the
    /// next render draws it. Placing twice at the same point yields two markers.
    pub fn place(&self, point: WorldPoint, renderer: &mut Renderer) -> Marker {
        let marker = Marker {
            position: point,
            renderer: renderer.id(),
            style: self.style,
        };
        renderer.add_marker(marker.clone());
        log::info!(
            "[mark] placed marker #{} at {}",
            renderer.scene().markers().len(),
            point
        );
        marker
    }
}
