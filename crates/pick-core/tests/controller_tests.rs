// End-to-end click handling: controller -> strategy -> marker placement -> navigation.

mod common;

use common::*;
use glam::Vec3;
use pick_core::*;

#[derive(Default)]
struct RecordingNavigation {
    events: Vec<InputEvent>,
}

impl Navigation for RecordingNavigation {
    fn handle(&mut self, event: &InputEvent, _camera: &mut Camera, _viewport: Viewport) -> bool {
        self.events.push(*event);
        false
    }
}

fn press(position: ScreenPoint) -> InputEvent {
    InputEvent::PrimaryPress {
        position,
        shift: false,
    }
}

#[test]
fn surface_click_on_sphere_center_places_marker_on_front_surface() {
    let mut renderer = single_sphere_renderer();
    let mut controller: InputController = InputController::with_strategy(PickStrategy::from_kind(
        StrategyKind::Surface,
    ));
    let center = screen_of(&renderer, Vec3::ZERO);

    let marker = controller
        .handle_event(&press(center), &mut renderer)
        .expect("sphere under the cursor");

    let p = marker.position.to_vec3();
    assert!((p.length() - 1.0).abs() < 1e-3);
    assert!((p.z - 1.0).abs() < 1e-2, "expected the camera-facing pole, got {p}");
    assert_eq!(marker.renderer, renderer.id());
    assert_eq!(renderer.scene().markers(), &[marker]);
}

#[test]
fn depth_click_in_empty_corner_places_nothing() {
    let mut renderer = single_sphere_renderer();
    let _ = renderer.render();
    let mut controller: InputController = InputController::with_strategy(PickStrategy::from_kind(
        StrategyKind::DepthBuffer,
    ));

    let placed = controller.handle_event(&press(ScreenPoint::new(2, 2)), &mut renderer);

    assert!(placed.is_none());
    assert!(renderer.scene().markers().is_empty());
}

#[test]
fn ground_clicks_at_two_pixels_place_two_markers_on_the_plane() {
    let mut renderer = single_sphere_renderer();
    let mut controller: InputController = InputController::with_strategy(PickStrategy::default());

    for (x, y) in [(100, 100), (500, 400)] {
        let _ = controller.handle_event(&press(ScreenPoint::new(x, y)), &mut renderer);
        let _ = controller.handle_event(&InputEvent::PrimaryRelease, &mut renderer);
    }

    let markers = renderer.scene().markers();
    assert_eq!(markers.len(), 2);
    assert!(markers[0].position.distance(markers[1].position) > 1.0);
    for m in markers {
        assert!(m.position.z.abs() < 1e-3);
    }
}

#[test]
fn depth_click_before_first_render_is_silently_ignored() {
    let mut renderer = single_sphere_renderer();
    let mut controller: InputController = InputController::with_strategy(PickStrategy::from_kind(
        StrategyKind::DepthBuffer,
    ));
    let center = screen_of(&renderer, Vec3::ZERO);

    assert!(controller.handle_event(&press(center), &mut renderer).is_none());
    assert!(renderer.scene().markers().is_empty());
}

#[test]
fn every_event_reaches_navigation_whatever_the_pick_outcome() {
    let mut renderer = single_sphere_renderer();
    let mut controller = InputController::new(
        PickStrategy::from_kind(StrategyKind::Surface),
        MarkerPlacement::default(),
        RecordingNavigation::default(),
    );
    let events = [
        press(ScreenPoint::new(3, 3)),
        InputEvent::PrimaryRelease,
        press(ScreenPoint::new(320, 240)),
        InputEvent::PointerMoved {
            position: ScreenPoint::new(330, 240),
        },
        InputEvent::PrimaryRelease,
        InputEvent::Scroll { delta: 1.0 },
    ];
    for e in &events {
        let _ = controller.handle_event(e, &mut renderer);
    }
    assert_eq!(controller.navigation().events, events);
    assert_eq!(renderer.scene().markers().len(), 1);
}

#[test]
fn pick_uses_the_camera_before_navigation_moves_it() {
    let mut renderer = single_sphere_renderer();
    let mut controller: InputController = InputController::with_strategy(PickStrategy::from_kind(
        StrategyKind::Surface,
    ));
    let eye_before = renderer.camera().eye;

    let marker = controller
        .handle_event(&press(ScreenPoint::new(320, 240)), &mut renderer)
        .unwrap();
    let _ = controller.handle_event(
        &InputEvent::PointerMoved {
            position: ScreenPoint::new(360, 200),
        },
        &mut renderer,
    );

    assert!((marker.position.z - 1.0).abs() < 1e-2);
    assert!(renderer.camera().eye.distance(eye_before) > 1e-3);
    assert!(renderer.is_dirty());
}

#[test]
fn strategy_can_be_swapped_at_runtime() {
    let mut renderer = single_sphere_renderer();
    let mut controller: InputController = InputController::with_strategy(PickStrategy::from_kind(
        StrategyKind::Surface,
    ));
    let background = ScreenPoint::new(20, 20);

    assert!(controller.handle_event(&press(background), &mut renderer).is_none());
    controller.set_strategy(PickStrategy::from_kind(StrategyKind::GroundPlane));
    assert_eq!(controller.strategy().kind(), StrategyKind::GroundPlane);
    assert!(controller.handle_event(&press(background), &mut renderer).is_some());
}

#[test]
fn placing_twice_at_one_point_keeps_both_markers() {
    let mut renderer = single_sphere_renderer();
    let covered_before = renderer.render().covered_pixels();
    let placement = MarkerPlacement::new(MarkerStyle {
        color: [1.0, 0.0, 0.0],
        size: 0.25,
    });
    // in front of the sphere, on the view axis
    let p = WorldPoint::new(0.0, 0.0, 3.0);

    let a = placement.place(p, &mut renderer);
    let b = placement.place(p, &mut renderer);

    assert_eq!(a, b);
    assert_eq!(renderer.scene().markers().len(), 2);
    assert_eq!(a.style, placement.style());
    assert_eq!(a.style.size, 0.25);
    assert!(renderer.is_dirty());
    assert!(renderer.scene().bounds().max.z >= 3.0);

    // markers are drawn but neither pickable nor written to the depth frame
    let _ = renderer.render();
    let frame = renderer.frame().unwrap();
    assert_eq!(frame.covered_pixels(), covered_before);
    let center = screen_of(&renderer, Vec3::ZERO);
    assert_eq!(frame.prop_at(center), Some(0));
    let hit = DepthBufferPick.pick(center, &renderer).point().unwrap();
    assert!((hit.z - 1.0).abs() < 1e-2);
}

#[test]
fn controller_without_navigation_only_marks() {
    let mut renderer = single_sphere_renderer();
    let _ = renderer.render();
    let mut controller: InputController<NoNavigation> =
        InputController::with_strategy(PickStrategy::from_kind(StrategyKind::Surface));
    let camera = renderer.camera().clone();

    let events = [
        press(ScreenPoint::new(320, 240)),
        InputEvent::PointerMoved {
            position: ScreenPoint::new(400, 100),
        },
        InputEvent::PrimaryRelease,
        InputEvent::Scroll { delta: 3.0 },
    ];
    for e in &events {
        let _ = controller.handle_event(e, &mut renderer);
    }

    assert_eq!(renderer.camera(), &camera);
    assert_eq!(renderer.scene().markers().len(), 1);
}

#[test]
fn only_pointer_events_carry_a_position() {
    let at = ScreenPoint::new(12, 34);
    for event in [
        press(at),
        InputEvent::MiddlePress { position: at },
        InputEvent::SecondaryPress { position: at },
        InputEvent::PointerMoved { position: at },
    ] {
        assert_eq!(event.position(), Some(at));
    }
    for event in [
        InputEvent::PrimaryRelease,
        InputEvent::MiddleRelease,
        InputEvent::SecondaryRelease,
        InputEvent::Scroll { delta: 1.0 },
    ] {
        assert_eq!(event.position(), None);
    }
}
