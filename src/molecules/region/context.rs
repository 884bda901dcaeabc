use crate::types::Mark;

/// What the toggle engine needs from the host editor.
///
/// Every call reads a snapshot; the engine never writes through this trait.
/// Columns are grapheme indices into the line, not byte offsets. Hosts that
/// track byte columns convert before answering.
pub trait EditorContext {
    /// `(line, col)` of a mark: 1-based line, 0-based grapheme column.
    fn mark(&self, mark: Mark) -> (usize, usize);

    /// `(line, col)` of the cursor, in the same units as [`EditorContext::mark`].
    fn cursor(&self) -> (usize, usize);

    /// Text of the line under the cursor.
    fn current_line(&self) -> String;

    /// Lines `start..end`, 0-based and end-exclusive.
    fn lines(&self, start: usize, end: usize) -> Vec<String>;

    /// Fire-and-forget user-visible error.
    fn notify_error(&self, message: &str) {
        log::error!("{}", message);
    }
}
