pub mod bounds;
pub mod camera;
pub mod config;
pub mod constants;
pub mod controller;
pub mod frame;
pub mod input;
pub mod marker;
pub mod mesh;
pub mod navigation;
pub mod pick;
pub mod point;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod viewport;
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use bounds::*;
pub use camera::*;
pub use config::*;
pub use constants::*;
pub use controller::*;
pub use frame::*;
pub use input::*;
pub use marker::*;
pub use navigation::*;
pub use pick::*;
pub use point::*;
pub use ray::*;
pub use renderer::*;
pub use scene::*;
pub use viewport::*;
