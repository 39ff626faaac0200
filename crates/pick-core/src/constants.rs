// Shared scene/camera/interaction tuning constants used by the core and the native frontend.

// Scene generation
pub const DEFAULT_SPHERE_COUNT: usize = 10;
pub const SPHERE_CENTER_RANGE: (f32, f32) = (-5.0, 5.0); // per axis
pub const SPHERE_RADIUS_RANGE: (f32, f32) = (0.5, 1.0);
pub const SPHERE_COLOR_RANGE: (f32, f32) = (0.4, 1.0); // per channel, keeps spheres bright
pub const SPHERE_PHI_RESOLUTION: u32 = 11; // latitude rings, poles included
pub const SPHERE_THETA_RESOLUTION: u32 = 21; // longitude segments

// Sphere material
pub const SPHERE_DIFFUSE: f32 = 0.8;
pub const SPHERE_SPECULAR: f32 = 0.5;
pub const SPHERE_SPECULAR_POWER: f32 = 30.0;
pub const SPHERE_SPECULAR_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

// Window
pub const WINDOW_WIDTH: u32 = 640;
pub const WINDOW_HEIGHT: u32 = 480;
pub const WINDOW_TITLE: &str = "Sphere Pick";
pub const BACKGROUND_RGB: [f32; 3] = [0.3, 0.4, 0.5];

// Camera
pub const VIEW_ANGLE_DEGREES: f32 = 30.0; // vertical field of view
pub const DEFAULT_ZNEAR: f32 = 0.01;
pub const DEFAULT_ZFAR: f32 = 1000.01;
pub const CLIPPING_PADDING: f32 = 0.05; // fraction of the depth span added on both ends
pub const NEAR_CLIPPING_RATIO: f32 = 0.001; // near is never closer than far * ratio
pub const MIN_FRAMING_RADIUS: f32 = 0.5; // used when the scene is empty or a single point

// Picking
pub const PARALLEL_EPSILON: f32 = 1e-6; // |n . d| below this means ray parallel to plane
pub const HOMOGENEOUS_W_EPSILON: f32 = 1e-12;
pub const BACKGROUND_DEPTH: f32 = 1.0; // cleared depth, far plane

// Markers
pub const MARKER_SIZE: f32 = 0.4; // world-space extent of the 3D cross
pub const MARKER_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

// Trackball navigation
pub const MOTION_FACTOR: f32 = 10.0;
pub const ROTATE_DEGREES_ACROSS_WINDOW: f32 = 20.0; // scaled by MOTION_FACTOR
pub const DOLLY_BASE: f32 = 1.1;
pub const SCROLL_DOLLY_FRACTION: f32 = 0.2; // share of MOTION_FACTOR applied per wheel notch
