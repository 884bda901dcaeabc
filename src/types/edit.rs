use super::Region;

/// Which way a toggle went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Comment,
    Uncomment,
    Unchanged,
}

/// Replacement text for the lines of a resolved region, for the host to write.
///
/// `lines` runs parallel to `region.lines`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleEdit {
    pub region: Region,
    pub lines: Vec<String>,
    pub action: ToggleAction,
}

impl ToggleEdit {
    /// `(row, text)` for every rewritten line, rows 0-based.
    pub fn changes(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.region
            .rows()
            .into_iter()
            .zip(self.lines.iter().map(String::as_str))
    }

    pub fn is_noop(&self) -> bool {
        self.action == ToggleAction::Unchanged || self.lines == self.region.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LineKind, MotionKind};

    #[test]
    fn test_changes_follow_block_rows() {
        let edit = ToggleEdit {
            region: Region {
                start_line: 2,
                end_line: 6,
                start_col: 0,
                end_col: 0,
                motion: MotionKind::VisualChar,
                line_kind: LineKind::Block,
                lines: vec!["a".into(), "b".into()],
            },
            lines: vec!["/* a".into(), "b */".into()],
            action: ToggleAction::Comment,
        };

        let changes: Vec<_> = edit.changes().collect();
        assert_eq!(changes, vec![(1, "/* a"), (5, "b */")]);
        assert!(!edit.is_noop());
    }
}
