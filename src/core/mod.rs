pub mod camera;
pub mod constants;
pub mod episodes;
pub mod error;
pub mod journey;
pub mod mesh;
pub mod model;
pub mod progress;
pub mod scene;
pub mod texture;
pub mod view;

pub use camera::*;
pub use constants::*;
pub use episodes::*;
pub use error::HubError;
pub use journey::*;
pub use progress::*;
pub use scene::*;
pub use view::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static LOGO_WGSL: &str = include_str!("../../shaders/logo.wgsl");
pub static BACKDROP_WGSL: &str = include_str!("../../shaders/backdrop.wgsl");
