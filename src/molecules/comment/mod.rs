mod matcher;
mod transform;

pub use matcher::CommentMatcher;
pub use transform::{
    close_block, comment_line, comment_span, open_block, unclose_block, uncomment_line,
    unopen_block,
};
