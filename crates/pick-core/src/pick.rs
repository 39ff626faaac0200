//! Screen-to-world pick strategies.
//!
//! Every strategy resolves a pixel to either a world point or [`PickResult::Miss`].
//! A miss is an ordinary outcome (clicking background), not an error. Strategies
//! only read the renderer they are handed; they never touch scene state.

use crate::point::{ScreenPoint, WorldPoint};
use crate::ray::{Plane, Ray};
use crate::renderer::Renderer;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PickResult {
    Hit(WorldPoint),
    Miss,
}

impl PickResult {
    pub fn is_hit(&self) -> bool {
        matches!(self, PickResult::Hit(_))
    }

    pub fn point(self) -> Option<WorldPoint> {
        match self {
            PickResult::Hit(p) => Some(p),
            PickResult::Miss => None,
        }
    }
}

impl From<Option<WorldPoint>> for PickResult {
    fn from(p: Option<WorldPoint>) -> Self {
        match p {
            Some(p) if p.is_finite() => PickResult::Hit(p),
            _ => PickResult::Miss,
        }
    }
}

/// Resolve a pixel of `renderer` to a world point.
pub trait Picker {
    fn pick(&self, screen: ScreenPoint, renderer: &Renderer) -> PickResult;
}

/// Plane a [`GroundPlanePick`] projects onto.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReferencePlane {
    /// Fixed plane in world space.
    World(Plane),
    /// Plane through the camera focal point facing the eye.
    Focal,
}

/// Projects the pixel ray onto a reference plane, ignoring all geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundPlanePick {
    pub reference: ReferencePlane,
}

impl Default for GroundPlanePick {
    fn default() -> Self {
        Self {
            reference: ReferencePlane::World(Plane::XY),
        }
    }
}

impl GroundPlanePick {
    pub fn new(plane: Plane) -> Self {
        Self {
            reference: ReferencePlane::World(plane),
        }
    }

    pub fn focal() -> Self {
        Self {
            reference: ReferencePlane::Focal,
        }
    }
}

impl Picker for GroundPlanePick {
    fn pick(&self, screen: ScreenPoint, renderer: &Renderer) -> PickResult {
        let camera = renderer.camera();
        let plane = match self.reference {
            ReferencePlane::World(plane) => plane,
            ReferencePlane::Focal => Plane::new(camera.target, -camera.direction()),
        };
        Ray::through_pixel(camera, renderer.viewport(), screen)
            .and_then(|ray| ray.intersect_plane(&plane).map(|t| WorldPoint::from(ray.at(t))))
            .into()
    }
}

/// Ray-casts against the spheres; the nearest surface wins.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfacePick;

impl SurfacePick {
    /// Like [`Picker::pick`] but also reports which sphere was hit.
    pub fn pick_sphere(
        &self,
        screen: ScreenPoint,
        renderer: &Renderer,
    ) -> Option<(usize, WorldPoint)> {
        let ray = Ray::through_pixel(renderer.camera(), renderer.viewport(), screen)?;
        let hit = renderer.scene().raycast(&ray)?;
        Some((hit.sphere, hit.point.into()))
    }
}

impl Picker for SurfacePick {
    fn pick(&self, screen: ScreenPoint, renderer: &Renderer) -> PickResult {
        self.pick_sphere(screen, renderer).map(|(_, p)| p).into()
    }
}

/// Reads the depth of the most recent frame at the pixel and unprojects it
/// through that frame's view-projection.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DepthBufferPick;

impl Picker for DepthBufferPick {
    fn pick(&self, screen: ScreenPoint, renderer: &Renderer) -> PickResult {
        let Some(frame) = renderer.frame() else {
            // nothing rendered yet
            return PickResult::Miss;
        };
        let viewport = renderer.viewport();
        if frame.viewport() != viewport || frame.prop_at(screen).is_none() {
            return PickResult::Miss;
        }
        let Some(depth) = frame.depth_at(screen) else {
            return PickResult::Miss;
        };
        // unproject with the camera the depth was captured under
        let inverse = frame.view_projection().inverse();
        let c = screen.center();
        viewport
            .unproject(&inverse, c.x, c.y, depth)
            .map(WorldPoint::from)
            .into()
    }
}

/// Names a strategy in configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StrategyKind {
    #[default]
    GroundPlane,
    Surface,
    DepthBuffer,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::GroundPlane,
        StrategyKind::Surface,
        StrategyKind::DepthBuffer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::GroundPlane => "ground",
            StrategyKind::Surface => "surface",
            StrategyKind::DepthBuffer => "depth",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ground" | "plane" | "world" => Ok(StrategyKind::GroundPlane),
            "surface" | "prop" => Ok(StrategyKind::Surface),
            "depth" | "zbuffer" => Ok(StrategyKind::DepthBuffer),
            other => Err(other.to_string()),
        }
    }
}

/// The closed set of strategies an input controller can run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PickStrategy {
    GroundPlane(GroundPlanePick),
    Surface(SurfacePick),
    DepthBuffer(DepthBufferPick),
}

impl Default for PickStrategy {
    fn default() -> Self {
        Self::from_kind(StrategyKind::default())
    }
}

impl PickStrategy {
    pub fn from_kind(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::GroundPlane => PickStrategy::GroundPlane(GroundPlanePick::default()),
            StrategyKind::Surface => PickStrategy::Surface(SurfacePick),
            StrategyKind::DepthBuffer => PickStrategy::DepthBuffer(DepthBufferPick),
        }
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            PickStrategy::GroundPlane(_) => StrategyKind::GroundPlane,
            PickStrategy::Surface(_) => StrategyKind::Surface,
            PickStrategy::DepthBuffer(_) => StrategyKind::DepthBuffer,
        }
    }
}

impl Picker for PickStrategy {
    fn pick(&self, screen: ScreenPoint, renderer: &Renderer) -> PickResult {
        match self {
            PickStrategy::GroundPlane(p) => p.pick(screen, renderer),
            PickStrategy::Surface(p) => p.pick(screen, renderer),
            PickStrategy::DepthBuffer(p) => p.pick(screen, renderer),
        }
    }
}
