pub mod catalog;
pub mod constants;
pub mod error;
pub mod glb;
pub mod gpu;
pub mod interp;
pub mod inventory;
pub mod materials;
pub mod scene;
pub mod scroll;
pub mod state;
pub mod timeline;
pub mod tour;
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use catalog::*;
pub use constants::*;
pub use error::ShowcaseError;
pub use interp::*;
pub use inventory::*;
pub use materials::*;
pub use scroll::*;
pub use state::*;
pub use timeline::*;
pub use tour::*;
