use super::{LineKind, MotionKind};

/// Lines targeted by one toggle, together with the mark coordinates they came from.
///
/// `start_line`/`end_line` are 1-based line numbers as the host reports them,
/// `start_col`/`end_col` the column half of the same marks. Lines are a
/// snapshot: for a single line this is the current line, for a block-wise
/// region only the first and last lines, otherwise every line in range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub start_line: usize,
    pub end_line: usize,
    pub start_col: usize,
    pub end_col: usize,
    pub motion: MotionKind,
    pub line_kind: LineKind,
    pub lines: Vec<String>,
}

impl Region {
    /// 0-based index of the first line, for slicing host line arrays.
    pub fn start_index(&self) -> usize {
        self.start_line.saturating_sub(1)
    }

    /// Exclusive 0-based end index; equal to the 1-based inclusive end line.
    pub fn end_index(&self) -> usize {
        self.end_line
    }

    pub fn is_single_line(&self) -> bool {
        self.start_line == self.end_line
    }

    /// 0-based buffer row of each entry in `lines`.
    pub fn rows(&self) -> Vec<usize> {
        let start = self.start_index();
        if self.is_single_line() {
            vec![start]
        } else if self.line_kind == LineKind::Block {
            vec![start, self.end_index() - 1]
        } else {
            (start..self.end_index()).collect()
        }
    }
}
