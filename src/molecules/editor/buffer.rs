use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use unicode_segmentation::UnicodeSegmentation;

use crate::molecules::region::EditorContext;
use crate::types::{Mark, ToggleEdit};

/// Line-vector buffer with a cursor and the four marks a toggle reads.
///
/// Rows passed to [`TextBuffer::set_cursor`] are 0-based; mark lines are
/// 1-based like an editor reports them.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    lines: Vec<String>,
    cursor_row: usize,
    cursor_col: usize,
    marks: HashMap<Mark, (usize, usize)>,
    errors: RefCell<Vec<String>>,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            ..Self::default()
        }
    }

    pub fn from_string(content: &str) -> Self {
        let lines: Vec<String> = if content.is_empty() {
            vec![String::new()]
        } else {
            content.lines().map(String::from).collect()
        };

        Self {
            lines,
            ..Self::default()
        }
    }

    pub fn content(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn cursor_position(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    pub fn set_cursor(&mut self, row: usize, col: usize) {
        self.cursor_row = row.min(self.lines.len().saturating_sub(1));
        let line_len = self.current_line_len();
        self.cursor_col = col.min(line_len);
    }

    fn current_line_len(&self) -> usize {
        self.lines
            .get(self.cursor_row)
            .map(|l| l.graphemes(true).count())
            .unwrap_or(0)
    }

    pub fn current_line_content(&self) -> &str {
        self.lines.get(self.cursor_row).map(|s| s.as_str()).unwrap_or("")
    }

    /// Set a mark; `line` is 1-based.
    pub fn set_mark(&mut self, mark: Mark, line: usize, col: usize) {
        self.marks.insert(mark, (line, col));
    }

    pub fn clear_marks(&mut self) {
        self.marks.clear();
    }

    /// Record a visual selection between two 1-based `(line, col)` points and
    /// move the cursor to its end.
    pub fn select(&mut self, start: (usize, usize), end: (usize, usize)) {
        self.set_mark(Mark::SelectionStart, start.0, start.1);
        self.set_mark(Mark::SelectionEnd, end.0, end.1);
        self.set_cursor(end.0.saturating_sub(1), end.1);
    }

    /// Record the span of the last operator motion, like `[` and `]`.
    pub fn set_change(&mut self, start_line: usize, end_line: usize) {
        self.set_mark(Mark::ChangeStart, start_line, 0);
        self.set_mark(Mark::ChangeEnd, end_line, 0);
    }

    /// Write a toggle result back and mark the changed lines.
    pub fn apply(&mut self, edit: &ToggleEdit) {
        for (row, text) in edit.changes() {
            if let Some(line) = self.lines.get_mut(row) {
                *line = text.to_string();
            }
        }
        self.set_change(edit.region.start_line, edit.region.end_line);
        let line_len = self.current_line_len();
        self.cursor_col = self.cursor_col.min(line_len);
    }

    /// Messages received through [`EditorContext::notify_error`].
    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

impl EditorContext for TextBuffer {
    fn mark(&self, mark: Mark) -> (usize, usize) {
        self.marks
            .get(&mark)
            .copied()
            .unwrap_or((self.cursor_row + 1, self.cursor_col))
    }

    fn cursor(&self) -> (usize, usize) {
        (self.cursor_row + 1, self.cursor_col)
    }

    fn current_line(&self) -> String {
        self.current_line_content().to_string()
    }

    fn lines(&self, start: usize, end: usize) -> Vec<String> {
        let end = end.min(self.lines.len());
        let start = start.min(end);
        self.lines[start..end].to_vec()
    }

    fn notify_error(&self, message: &str) {
        log::error!("{}", message);
        self.errors.borrow_mut().push(message.to_string());
    }
}
