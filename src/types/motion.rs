use serde::{Deserialize, Serialize};

/// How the selection handed to a toggle was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MotionKind {
    /// Whatever the last operator left behind (e.g. `gcc` on the current line).
    #[default]
    FromContext,
    Line,
    Char,
    VisualBlock,
    VisualChar,
}

impl MotionKind {
    /// Visual motions read the selection marks, everything else the
    /// last-change marks.
    pub fn is_visual(&self) -> bool {
        matches!(self, MotionKind::VisualBlock | MotionKind::VisualChar)
    }

    pub fn is_charwise(&self) -> bool {
        matches!(self, MotionKind::Char | MotionKind::VisualChar)
    }

    /// The mark pair bounding a selection made with this motion.
    pub fn marks(&self) -> (Mark, Mark) {
        if self.is_visual() {
            (Mark::SelectionStart, Mark::SelectionEnd)
        } else {
            (Mark::ChangeStart, Mark::ChangeEnd)
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MotionKind::FromContext => "context",
            MotionKind::Line => "line",
            MotionKind::Char => "char",
            MotionKind::VisualBlock => "visual-block",
            MotionKind::VisualChar => "visual-char",
        }
    }
}

/// Host-maintained buffer positions bounding a selection or the last change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    SelectionStart,
    SelectionEnd,
    ChangeStart,
    ChangeEnd,
}

impl Mark {
    /// The vim register name of the mark.
    pub fn as_char(&self) -> char {
        match self {
            Mark::SelectionStart => '<',
            Mark::SelectionEnd => '>',
            Mark::ChangeStart => '[',
            Mark::ChangeEnd => ']',
        }
    }
}
