pub mod hooks;
mod toggle;

pub use hooks::{Hooks, IgnoreHook, PreHook};
pub use toggle::Toggler;
