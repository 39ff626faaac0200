// Host-side tests for the three pick strategies.

mod common;

use common::*;
use glam::Vec3;
use pick_core::*;

const CORNERS: [ScreenPoint; 4] = [
    ScreenPoint::new(0, 0),
    ScreenPoint::new(WIDTH as i32 - 1, 0),
    ScreenPoint::new(0, HEIGHT as i32 - 1),
    ScreenPoint::new(WIDTH as i32 - 1, HEIGHT as i32 - 1),
];

#[test]
fn ground_plane_hits_every_pixel_when_facing_the_plane() {
    let renderer = single_sphere_renderer();
    let picker = GroundPlanePick::default();
    let mut checked = 0;
    for y in (0..HEIGHT as i32).step_by(37).chain([HEIGHT as i32 - 1]) {
        for x in (0..WIDTH as i32).step_by(41).chain([WIDTH as i32 - 1]) {
            let result = picker.pick(ScreenPoint::new(x, y), &renderer);
            let p = result.point().unwrap_or_else(|| panic!("miss at ({x}, {y})"));
            assert!(p.z.abs() < 1e-3, "({x}, {y}) landed off the plane: {p}");
            checked += 1;
        }
    }
    assert!(checked > 100);
}

#[test]
fn ground_plane_ignores_occluding_geometry() {
    let renderer = single_sphere_renderer();
    let center = screen_of(&renderer, Vec3::ZERO);
    let p = GroundPlanePick::default()
        .pick(center, &renderer)
        .point()
        .unwrap();
    // the sphere surface is at z = 1, the plane at z = 0
    assert!(p.z.abs() < 1e-3);
    assert!(p.x.abs() < 0.05 && p.y.abs() < 0.05);
}

#[test]
fn ground_plane_behind_the_eye_is_a_miss() {
    let mut renderer = single_sphere_renderer();
    let mut camera = renderer.camera().clone();
    camera.target = Vec3::new(0.0, 0.0, 20.0);
    renderer.set_camera(camera);
    for corner in CORNERS {
        assert_eq!(
            GroundPlanePick::default().pick(corner, &renderer),
            PickResult::Miss
        );
    }
}

#[test]
fn parallel_ray_never_crosses_the_plane() {
    let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::X);
    assert_eq!(ray.intersect_plane(&Plane::XY), None);
    let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(1.0, 0.0, -1.0));
    let t = ray.intersect_plane(&Plane::XY).unwrap();
    assert!(ray.at(t).z.abs() < 1e-5);
}

#[test]
fn focal_plane_pick_lies_on_the_focal_plane() {
    let renderer = single_sphere_renderer();
    let camera = renderer.camera().clone();
    let p = GroundPlanePick::focal()
        .pick(ScreenPoint::new(100, 50), &renderer)
        .point()
        .unwrap()
        .to_vec3();
    assert!((p - camera.target).dot(camera.direction()).abs() < 1e-3);
}

#[test]
fn surface_pick_on_sphere_lands_on_its_surface() {
    let renderer = single_sphere_renderer();
    for screen in [
        ScreenPoint::new(320, 240),
        ScreenPoint::new(290, 215),
        ScreenPoint::new(350, 270),
        ScreenPoint::new(320, 170),
    ] {
        let p = SurfacePick.pick(screen, &renderer).point().unwrap();
        let d = p.to_vec3().length();
        assert!((d - 1.0).abs() < 1e-3, "{screen:?}: |p - c| = {d}");
        assert!(p.z > 0.0, "hit the far side at {screen:?}");
    }
}

#[test]
fn surface_and_depth_miss_on_background() {
    let mut renderer = single_sphere_renderer();
    let _ = renderer.render();
    for corner in CORNERS {
        assert_eq!(SurfacePick.pick(corner, &renderer), PickResult::Miss);
        assert_eq!(DepthBufferPick.pick(corner, &renderer), PickResult::Miss);
    }
}

#[test]
fn surface_pick_prefers_the_sphere_nearest_the_camera() {
    let far = Sphere::new(Vec3::ZERO, 1.0);
    let near = Sphere::new(Vec3::new(0.0, 0.0, 3.0), 1.0);
    for spheres in [[far.clone(), near.clone()], [near.clone(), far.clone()]] {
        let mut renderer = renderer_with(&spheres);
        let _ = renderer.render();
        let center = screen_of(&renderer, Vec3::ZERO);
        let surface = SurfacePick.pick(center, &renderer).point().unwrap();
        let depth = DepthBufferPick.pick(center, &renderer).point().unwrap();
        assert!((surface.z - 4.0).abs() < 1e-2, "surface pick at {surface}");
        assert!((depth.z - 4.0).abs() < 1e-2, "depth pick at {depth}");
    }
}

#[test]
fn depth_pick_before_first_render_is_a_miss() {
    let renderer = single_sphere_renderer();
    assert!(renderer.frame().is_none());
    let center = screen_of(&renderer, Vec3::ZERO);
    assert_eq!(DepthBufferPick.pick(center, &renderer), PickResult::Miss);
}

#[test]
fn depth_pick_matches_surface_pick_on_geometry() {
    let mut renderer = single_sphere_renderer();
    let _ = renderer.render();
    for screen in [
        ScreenPoint::new(320, 240),
        ScreenPoint::new(300, 220),
        ScreenPoint::new(355, 262),
        ScreenPoint::new(320, 170),
    ] {
        let surface = SurfacePick.pick(screen, &renderer).point().unwrap();
        let depth = DepthBufferPick.pick(screen, &renderer).point().unwrap();
        assert!(
            surface.distance(depth) < 1e-2,
            "{screen:?}: surface {surface} vs depth {depth}"
        );
    }
}

#[test]
fn depth_pick_after_resize_without_render_is_a_miss() {
    let mut renderer = single_sphere_renderer();
    let _ = renderer.render();
    let center = ScreenPoint::new(320, 240);
    assert!(DepthBufferPick.pick(center, &renderer).is_hit());
    renderer.set_viewport(800, 600);
    assert_eq!(DepthBufferPick.pick(center, &renderer), PickResult::Miss);
    let _ = renderer.render();
    assert!(DepthBufferPick.pick(ScreenPoint::new(400, 300), &renderer).is_hit());
}

#[test]
fn picking_is_a_pure_query() {
    let mut renderer = single_sphere_renderer();
    let _ = renderer.render();
    let markers_before = renderer.scene().markers().len();
    for kind in StrategyKind::ALL {
        let strategy = PickStrategy::from_kind(kind);
        for screen in [ScreenPoint::new(320, 240), ScreenPoint::new(10, 10)] {
            let first = strategy.pick(screen, &renderer);
            let second = strategy.pick(screen, &renderer);
            assert_eq!(first, second, "{kind} at {screen:?}");
        }
    }
    assert_eq!(renderer.scene().markers().len(), markers_before);
    assert!(!renderer.is_dirty());
}

#[test]
fn strategy_enum_dispatches_to_its_variant() {
    let mut renderer = single_sphere_renderer();
    let _ = renderer.render();
    let background = ScreenPoint::new(5, 5);
    assert!(PickStrategy::from_kind(StrategyKind::GroundPlane)
        .pick(background, &renderer)
        .is_hit());
    assert!(!PickStrategy::from_kind(StrategyKind::Surface)
        .pick(background, &renderer)
        .is_hit());
    assert!(!PickStrategy::from_kind(StrategyKind::DepthBuffer)
        .pick(background, &renderer)
        .is_hit());
    assert_eq!(PickStrategy::default().kind(), StrategyKind::GroundPlane);
}

#[test]
fn strategy_names_parse() {
    for kind in StrategyKind::ALL {
        assert_eq!(kind.name().parse::<StrategyKind>(), Ok(kind));
    }
    assert_eq!(" Depth ".parse::<StrategyKind>(), Ok(StrategyKind::DepthBuffer));
    assert!("lasso".parse::<StrategyKind>().is_err());
}

#[test]
fn surface_pick_on_random_scene_hits_sphere_surfaces() {
    let config = SessionConfig::default();
    let mut renderer = Renderer::from_config(&config, 1234);
    let _ = renderer.render();
    let spheres = renderer.scene().spheres().to_vec();
    assert_eq!(spheres.len(), DEFAULT_SPHERE_COUNT);
    let eye = renderer.camera().eye;
    for sphere in &spheres {
        let screen = screen_of(&renderer, sphere.center);
        let (index, p) = SurfacePick.pick_sphere(screen, &renderer).unwrap();
        let hit = &spheres[index];
        let p = p.to_vec3();
        assert!(((p - hit.center).length() - hit.radius).abs() < 1e-3);
        // visible side of whichever sphere was struck
        assert!((p - hit.center).dot(eye - hit.center) > 0.0);
    }
}

#[test]
fn pick_result_never_carries_non_finite_points() {
    let nan = WorldPoint::new(f32::NAN, 0.0, 0.0);
    assert_eq!(PickResult::from(Some(nan)), PickResult::Miss);
    assert_eq!(PickResult::from(None), PickResult::Miss);
    let ok = WorldPoint::new(1.0, 2.0, 3.0);
    assert_eq!(PickResult::from(Some(ok)), PickResult::Hit(ok));
}

#[test]
fn depth_pick_after_camera_drag_stays_on_the_drawn_surface() {
    let center = Vec3::new(2.0, 0.0, 0.0);
    let mut renderer = renderer_with(&[Sphere::new(center, 1.0)]);
    let _ = renderer.render();
    let drawn_at = screen_of(&renderer, center);
    let mut controller: InputController = InputController::with_strategy(PickStrategy::from_kind(
        StrategyKind::DepthBuffer,
    ));

    // rotate the camera without rendering again
    for event in [
        InputEvent::PrimaryPress {
            position: ScreenPoint::new(2, 2),
            shift: false,
        },
        InputEvent::PointerMoved {
            position: ScreenPoint::new(40, 2),
        },
        InputEvent::PrimaryRelease,
    ] {
        assert!(controller.handle_event(&event, &mut renderer).is_none());
    }
    assert!(renderer.is_dirty());
    assert_ne!(
        renderer.frame().unwrap().view_projection(),
        renderer.camera().view_projection()
    );

    let press = InputEvent::PrimaryPress {
        position: drawn_at,
        shift: false,
    };
    let marker = controller.handle_event(&press, &mut renderer).unwrap();
    let d = (marker.position.to_vec3() - center).length();
    assert!((d - 1.0).abs() < 1e-2, "marker {} is {d} from the centre", marker.position);
}

#[test]
fn ground_pick_onto_a_tilted_plane() {
    let renderer = single_sphere_renderer();
    let plane = Plane::new(Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 1.0, 1.0));
    let picker = GroundPlanePick::new(plane);
    for screen in CORNERS.into_iter().chain([ScreenPoint::new(320, 240)]) {
        let p = picker.pick(screen, &renderer).point().unwrap();
        assert!(plane.signed_distance(p.to_vec3()).abs() < 1e-3, "{screen:?}: {p}");
    }
}

#[test]
fn ground_pick_with_ray_parallel_to_the_plane_is_a_miss() {
    let renderer = single_sphere_renderer();
    let screen = ScreenPoint::new(200, 150);
    let ray = Ray::through_pixel(renderer.camera(), renderer.viewport(), screen).unwrap();
    let normal = ray.direction.cross(Vec3::Y);
    let plane = Plane::new(Vec3::new(5.0, 0.0, 0.0), normal);
    assert_eq!(
        GroundPlanePick::new(plane).pick(screen, &renderer),
        PickResult::Miss
    );
}

#[test]
fn degenerate_camera_misses_with_every_strategy() {
    let mut renderer = single_sphere_renderer();
    let mut camera = renderer.camera().clone();
    camera.eye = camera.target;
    renderer.set_camera(camera);
    let _ = renderer.render();
    for kind in StrategyKind::ALL {
        for screen in [ScreenPoint::new(320, 240), ScreenPoint::new(10, 10)] {
            assert_eq!(
                PickStrategy::from_kind(kind).pick(screen, &renderer),
                PickResult::Miss,
                "{kind} at {screen:?}"
            );
        }
    }
}
