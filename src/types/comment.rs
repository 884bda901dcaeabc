use serde::{Deserialize, Serialize};

use crate::atoms::text;

/// Left and right halves of a comment syntax. `right` is empty for line
/// comments such as `//` or `#`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommentDescriptor {
    pub left: String,
    #[serde(default)]
    pub right: String,
}

impl CommentDescriptor {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }

    pub fn line(left: impl Into<String>) -> Self {
        Self::new(left, "")
    }

    pub fn block(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::new(left, right)
    }

    /// Parse a vim-style commentstring such as `"/* %s */"` or `"# %s"`.
    ///
    /// Each side of the `%s` placeholder loses one surrounding blank. Without
    /// a placeholder the whole string is taken as a line comment prefix.
    pub fn from_commentstring(cstr: &str) -> Self {
        match cstr.split_once("%s") {
            Some((left, right)) => Self::new(text::trim(left), text::trim(right)),
            None => Self::line(text::trim(cstr)),
        }
    }

    pub fn is_line(&self) -> bool {
        self.right.is_empty()
    }
}

/// How a multi-line region is commented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineKind {
    /// Every line in the region gets its own delimiters.
    #[default]
    Line,
    /// One delimiter pair spans the region: only the first and last lines are touched.
    Block,
}

impl LineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineKind::Line => "line",
            LineKind::Block => "block",
        }
    }
}
