//! Default camera navigation: trackball-style rotate, pan and dolly.

use crate::camera::Camera;
use crate::constants::{
    DOLLY_BASE, MOTION_FACTOR, ROTATE_DEGREES_ACROSS_WINDOW, SCROLL_DOLLY_FRACTION,
};
use crate::input::InputEvent;
use crate::point::ScreenPoint;
use crate::viewport::Viewport;

/// Consumes input events and moves the camera.
pub trait Navigation {
    /// Returns true when `camera` was modified.
    fn handle(&mut self, event: &InputEvent, camera: &mut Camera, viewport: Viewport) -> bool;
}

/// Navigation that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoNavigation;

impl Navigation for NoNavigation {
    fn handle(&mut self, _event: &InputEvent, _camera: &mut Camera, _viewport: Viewport) -> bool {
        false
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interaction {
    #[default]
    Idle,
    Rotate,
    Pan,
    Dolly,
}

/// Primary drag rotates about the focal point, shift+primary or middle drag
/// pans, secondary drag and the wheel dolly.
#[derive(Clone, Copy, Debug, Default)]
pub struct Trackball {
    interaction: Interaction,
    last: Option<ScreenPoint>,
}

impl Trackball {
    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    fn begin(&mut self, interaction: Interaction, position: ScreenPoint) -> bool {
        self.interaction = interaction;
        self.last = Some(position);
        false
    }

    fn end(&mut self) -> bool {
        self.interaction = Interaction::Idle;
        false
    }

    fn drag(&mut self, position: ScreenPoint, camera: &mut Camera, viewport: Viewport) -> bool {
        let last = self.last.replace(position);
        let Some(last) = last else {
            return false;
        };
        let dx = (position.x - last.x) as f32;
        // screen y grows downwards, camera motion is expressed with y up
        let dy = (last.y - position.y) as f32;
        if dx == 0.0 && dy == 0.0 {
            return false;
        }
        match self.interaction {
            Interaction::Idle => false,
            Interaction::Rotate => {
                rotate(camera, viewport, dx, dy);
                true
            }
            Interaction::Pan => {
                pan(camera, viewport, dx, dy);
                true
            }
            Interaction::Dolly => {
                let center_y = viewport.height as f32 * 0.5;
                camera.dolly(DOLLY_BASE.powf(MOTION_FACTOR * dy / center_y));
                true
            }
        }
    }
}

impl Navigation for Trackball {
    fn handle(&mut self, event: &InputEvent, camera: &mut Camera, viewport: Viewport) -> bool {
        match *event {
            InputEvent::PrimaryPress { position, shift } => {
                let interaction = if shift {
                    Interaction::Pan
                } else {
                    Interaction::Rotate
                };
                self.begin(interaction, position)
            }
            InputEvent::MiddlePress { position } => self.begin(Interaction::Pan, position),
            InputEvent::SecondaryPress { position } => self.begin(Interaction::Dolly, position),
            InputEvent::PrimaryRelease
            | InputEvent::MiddleRelease
            | InputEvent::SecondaryRelease => self.end(),
            InputEvent::PointerMoved { position } => self.drag(position, camera, viewport),
            InputEvent::Scroll { delta } => {
                if delta == 0.0 {
                    return false;
                }
                camera.dolly(DOLLY_BASE.powf(MOTION_FACTOR * SCROLL_DOLLY_FRACTION * delta));
                true
            }
        }
    }
}

fn rotate(camera: &mut Camera, viewport: Viewport, dx: f32, dy: f32) {
    let delta_azimuth = -ROTATE_DEGREES_ACROSS_WINDOW / viewport.width as f32;
    let delta_elevation = -ROTATE_DEGREES_ACROSS_WINDOW / viewport.height as f32;
    camera.azimuth(dx * delta_azimuth * MOTION_FACTOR);
    camera.elevation(dy * delta_elevation * MOTION_FACTOR);
    camera.orthogonalize_view_up();
}

/// Move eye and focal point so the scene follows the pointer at focal depth.
fn pan(camera: &mut Camera, viewport: Viewport, dx: f32, dy: f32) {
    let world_per_pixel =
        2.0 * camera.distance() * (camera.fovy_radians * 0.5).tan() / viewport.height as f32;
    let up = camera.up.normalize_or_zero();
    let offset = (camera.right() * -dx - up * dy) * world_per_pixel;
    camera.translate(offset);
}
