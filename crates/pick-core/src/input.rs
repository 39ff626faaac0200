use crate::point::ScreenPoint;

/// Platform-independent pointer input, already mapped to surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PrimaryPress { position: ScreenPoint, shift: bool },
    PrimaryRelease,
    MiddlePress { position: ScreenPoint },
    MiddleRelease,
    SecondaryPress { position: ScreenPoint },
    SecondaryRelease,
    PointerMoved { position: ScreenPoint },
    /// Wheel notches, positive away from the user.
    Scroll { delta: f32 },
}

impl InputEvent {
    /// Pointer position carried by the event, if any.
    pub fn position(&self) -> Option<ScreenPoint> {
        match *self {
            InputEvent::PrimaryPress { position, .. }
            | InputEvent::MiddlePress { position }
            | InputEvent::SecondaryPress { position }
            | InputEvent::PointerMoved { position } => Some(position),
            _ => None,
        }
    }
}
