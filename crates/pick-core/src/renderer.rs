//! The render target a session draws into: scene, camera, viewport and the
//! depth/prop capture of the most recent frame.
//!
//! Front ends rasterize the scene themselves; [`Renderer::render`] records
//! what that frame contains so depth-buffer picking can read it back.

use crate::camera::Camera;
use crate::config::SessionConfig;
use crate::frame::DepthFrame;
use crate::marker::Marker;
use crate::scene::Scene;
use crate::viewport::Viewport;

/// Identifies the renderer a marker is drawn in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RendererId(pub u32);

#[derive(Clone, Debug)]
pub struct Renderer {
    id: RendererId,
    scene: Scene,
    camera: Camera,
    viewport: Viewport,
    background: [f32; 3],
    auto_clipping: bool,
    frame: Option<DepthFrame>,
    frame_count: u64,
    dirty: bool,
}

impl Renderer {
    pub fn new(id: RendererId, scene: Scene, viewport: Viewport) -> Self {
        let camera = Camera {
            aspect: viewport.aspect(),
            ..Camera::default()
        };
        Self {
            id,
            scene,
            camera,
            viewport,
            background: [0.0, 0.0, 0.0],
            auto_clipping: true,
            frame: None,
            frame_count: 0,
            dirty: true,
        }
    }

    /// Renderer for a session: random scene from the config's seed, camera
    /// framed on the spheres.
    pub fn from_config(config: &SessionConfig, seed: u64) -> Self {
        let scene = Scene::from_seed(config.sphere_count, seed);
        log::info!(
            "[scene] generated {} spheres (seed {})",
            scene.spheres().len(),
            seed
        );
        let mut renderer = Self::new(RendererId::default(), scene, config.viewport());
        renderer.set_background(config.background);
        renderer.reset_camera();
        renderer
    }

    pub fn id(&self) -> RendererId {
        self.id
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
        self.camera.aspect = self.viewport.aspect();
        self.dirty = true;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = Viewport::new(width, height);
        self.camera.aspect = self.viewport.aspect();
        self.dirty = true;
    }

    pub fn background(&self) -> [f32; 3] {
        self.background
    }

    pub fn set_background(&mut self, rgb: [f32; 3]) {
        self.background = rgb;
        self.dirty = true;
    }

    /// Keep near/far fitted to the scene on every render. On by default;
    /// when off, `render` uses the camera's clipping range as set.
    pub fn set_auto_clipping(&mut self, enabled: bool) {
        self.auto_clipping = enabled;
    }

    /// Frame the spheres with the camera.
    pub fn reset_camera(&mut self) {
        let bounds = self.scene.sphere_bounds();
        self.camera.reset_to_bounds(&bounds);
        self.camera.aspect = self.viewport.aspect();
        self.dirty = true;
    }

    pub(crate) fn add_marker(&mut self, marker: Marker) {
        self.scene.push_marker(marker);
        self.dirty = true;
    }

    /// Capture the current state as the most recent frame.
    ///
    /// With auto clipping on, near/far are refitted to everything drawn,
    /// markers included. Since near is kept above `NEAR_CLIPPING_RATIO` of
    /// far, a marker very far from the spheres can push near past them.
    pub fn render(&mut self) -> &DepthFrame {
        if self.auto_clipping {
            let bounds = self.scene.bounds();
            self.camera.reset_clipping_range(&bounds);
        }
        let frame = DepthFrame::capture(&self.scene, &self.camera, self.viewport);
        self.frame_count += 1;
        self.dirty = false;
        log::debug!(
            "[render] frame {} captured, {} px covered",
            self.frame_count,
            frame.covered_pixels()
        );
        self.frame.insert(frame)
    }

    /// Most recent frame, `None` before the first render.
    pub fn frame(&self) -> Option<&DepthFrame> {
        self.frame.as_ref()
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Whether the scene, camera or viewport changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}
