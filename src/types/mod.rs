mod comment;
mod config;
mod edit;
mod motion;
mod region;

pub use comment::{CommentDescriptor, LineKind};
pub use config::ToggleConfig;
pub use edit::{ToggleAction, ToggleEdit};
pub use motion::{Mark, MotionKind};
pub use region::Region;
