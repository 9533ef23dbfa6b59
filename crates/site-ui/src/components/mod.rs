// Leaf components
pub mod author_bio;
pub mod social_links;

// Header variants, depends on author_bio and social_links
pub mod site_header;

// Outer shell, depends on site_header
pub mod page_shell;

pub use author_bio::*;
pub use page_shell::*;
pub use site_header::*;
pub use social_links::*;
