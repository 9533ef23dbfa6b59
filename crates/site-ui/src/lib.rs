pub mod components;
pub mod header;
pub mod render;

pub use components::*;
pub use header::*;
pub use render::*;
