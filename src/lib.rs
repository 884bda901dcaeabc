//! Toggle line and block comments over editor selections.
//!
//! The engine is pure text logic: a host hands over a comment syntax and
//! exposes its marks and lines through [`EditorContext`]; a [`Toggler`]
//! returns a [`ToggleEdit`] describing the replacement lines, which the host
//! writes back itself.

pub mod atoms;
pub mod coordinator;
pub mod molecules;
pub mod types;

pub use crate::coordinator::{Hooks, Toggler};
pub use crate::molecules::comment::{CommentMatcher, comment_line, uncomment_line};
pub use crate::molecules::editor::TextBuffer;
pub use crate::molecules::region::{EditorContext, resolve_current_line, resolve_region};
pub use crate::types::{
    CommentDescriptor, LineKind, Mark, MotionKind, Region, ToggleAction, ToggleConfig, ToggleEdit,
};
