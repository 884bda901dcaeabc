mod context;
mod resolver;

pub use context::EditorContext;
pub use resolver::{resolve_current_line, resolve_region};
