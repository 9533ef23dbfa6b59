pub mod author;
pub mod config;
pub mod error;
pub mod navigation;
pub mod site;

pub use author::*;
pub use error::*;
pub use navigation::*;
pub use site::*;
// config holds the process-wide loader; use site_types::config::* explicitly.
