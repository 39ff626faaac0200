//! Bridges pointer input to the pick/mark pipeline while keeping the default
//! camera navigation for every event.

use crate::input::InputEvent;
use crate::marker::{Marker, MarkerPlacement};
use crate::navigation::{Navigation, Trackball};
use crate::pick::{PickResult, PickStrategy, Picker};
use crate::point::ScreenPoint;
use crate::renderer::Renderer;

pub struct InputController<N: Navigation = Trackball> {
    strategy: PickStrategy,
    placement: MarkerPlacement,
    navigation: N,
}

impl<N: Navigation + Default> InputController<N> {
    pub fn with_strategy(strategy: PickStrategy) -> Self {
        Self::new(strategy, MarkerPlacement::default(), N::default())
    }
}

impl<N: Navigation> InputController<N> {
    pub fn new(strategy: PickStrategy, placement: MarkerPlacement, navigation: N) -> Self {
        Self {
            strategy,
            placement,
            navigation,
        }
    }

    pub fn strategy(&self) -> &PickStrategy {
        &self.strategy
    }

    /// Swap the active strategy; takes effect on the next press.
    pub fn set_strategy(&mut self, strategy: PickStrategy) {
        log::info!("[pick] strategy {} -> {}", self.strategy.kind(), strategy.kind());
        self.strategy = strategy;
    }

    pub fn navigation(&self) -> &N {
        &self.navigation
    }

    /// Handle one event. A primary press is picked first and, on a hit,
    /// marked; every event is then forwarded to navigation.
    pub fn handle_event(&mut self, event: &InputEvent, renderer: &mut Renderer) -> Option<Marker> {
        let marker = match *event {
            InputEvent::PrimaryPress { position, .. } => self.pick_and_mark(position, renderer),
            _ => None,
        };
        let mut camera = renderer.camera().clone();
        if self.navigation.handle(event, &mut camera, renderer.viewport()) {
            renderer.set_camera(camera);
        }
        marker
    }

    fn pick_and_mark(&self, position: ScreenPoint, renderer: &mut Renderer) -> Option<Marker> {
        match self.strategy.pick(position, renderer) {
            PickResult::Hit(point) => Some(self.placement.place(point, renderer)),
            PickResult::Miss => None,
        }
    }
}
