mod gpu;

use anyhow::Context;
use pick_core::{
    InputController, InputEvent, PickStrategy, Renderer, ScreenPoint, SessionConfig, Trackball,
    WINDOW_TITLE,
};
use winit::{dpi::PhysicalSize, event::*, event_loop::EventLoop, window::WindowBuilder};

use gpu::GpuState;

/// Everything the event handlers mutate: the render target, the controller
/// and the latest pointer state.
struct Session {
    renderer: Renderer,
    controller: InputController<Trackball>,
    cursor: ScreenPoint,
    shift: bool,
}

impl Session {
    fn dispatch(&mut self, event: InputEvent) {
        if let Some(marker) = self.controller.handle_event(&event, &mut self.renderer) {
            log::debug!("[click] {:?} -> {}", event, marker.position);
        }
    }

    fn mouse_input(&mut self, state: ElementState, button: MouseButton) {
        let position = self.cursor;
        let event = match (button, state) {
            (MouseButton::Left, ElementState::Pressed) => InputEvent::PrimaryPress {
                position,
                shift: self.shift,
            },
            (MouseButton::Left, ElementState::Released) => InputEvent::PrimaryRelease,
            (MouseButton::Middle, ElementState::Pressed) => InputEvent::MiddlePress { position },
            (MouseButton::Middle, ElementState::Released) => InputEvent::MiddleRelease,
            (MouseButton::Right, ElementState::Pressed) => InputEvent::SecondaryPress { position },
            (MouseButton::Right, ElementState::Released) => InputEvent::SecondaryRelease,
            _ => return,
        };
        self.dispatch(event);
    }
}

fn scroll_notches(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => y,
        // trackpads report pixels; ~50 px per notch
        MouseScrollDelta::PixelDelta(p) => p.y as f32 / 50.0,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SessionConfig::from_args(std::env::args().skip(1))?
        .with_env_overrides(|key| std::env::var(key).ok())?;
    let seed = config.resolve_seed();
    let renderer = Renderer::from_config(&config, seed);
    log::info!(
        "[pick] strategy {} (set {} to change)",
        config.strategy,
        pick_core::STRATEGY_ENV
    );
    let mut session = Session {
        renderer,
        controller: InputController::with_strategy(PickStrategy::from_kind(config.strategy)),
        cursor: ScreenPoint::default(),
        shift: false,
    };

    let event_loop = EventLoop::new().context("event loop")?;
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(PhysicalSize::new(config.window_width, config.window_height))
        .build(&event_loop)
        .context("window")?;

    let size = window.inner_size();
    session.renderer.set_viewport(size.width, size.height);
    let mut state = pollster::block_on(GpuState::new(&window, &session.renderer)).context("gpu")?;
    // The first frame must exist before depth picking can answer.
    session.renderer.render();

    event_loop
        .run(move |event, elwt| {
            let Event::WindowEvent { event, .. } = event else {
                return;
            };
            match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::Resized(size) => {
                    state.resize(size);
                    session.renderer.set_viewport(size.width, size.height);
                }
                WindowEvent::ModifiersChanged(modifiers) => {
                    session.shift = modifiers.state().shift_key();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    session.cursor = ScreenPoint::from_display(position.x as f32, position.y as f32);
                    session.dispatch(InputEvent::PointerMoved {
                        position: session.cursor,
                    });
                }
                WindowEvent::MouseInput {
                    state: pressed,
                    button,
                    ..
                } => {
                    session.mouse_input(pressed, button);
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    session.dispatch(InputEvent::Scroll {
                        delta: scroll_notches(delta),
                    });
                }
                WindowEvent::RedrawRequested => {
                    if session.renderer.is_dirty() {
                        session.renderer.render();
                    }
                    match state.render(&session.renderer) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                        Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                        Err(e) => log::warn!("[render] skipped frame: {e}"),
                    }
                    return;
                }
                _ => return,
            }
            if session.renderer.is_dirty() {
                state.window.request_redraw();
            }
        })
        .context("event loop")?;
    Ok(())
}
