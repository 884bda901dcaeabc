//! Literal delimiter matching for one comment syntax.
//!
//! Delimiters go through [`regex::escape`] before being assembled, so `*`, `(`
//! or `$` in a comment token never act as pattern syntax.

use regex::Regex;

use crate::types::CommentDescriptor;

#[derive(Debug, Clone)]
pub struct CommentMatcher {
    descriptor: CommentDescriptor,
    line: Regex,
    block: Regex,
    uncomment: Regex,
    closing: Regex,
}

impl CommentMatcher {
    pub fn new(descriptor: &CommentDescriptor) -> Result<Self, regex::Error> {
        let left = regex::escape(&descriptor.left);
        let right = regex::escape(&descriptor.right);

        Ok(Self {
            descriptor: descriptor.clone(),
            line: Regex::new(&format!(r"^\s*{left}"))?,
            block: Regex::new(&format!(r"^{left}\s?(.*?)\s?{right}$"))?,
            uncomment: Regex::new(&format!(r"^(\s*){left}\s?(.*?){right}$"))?,
            closing: Regex::new(&format!(r"{right}$"))?,
        })
    }

    pub fn descriptor(&self) -> &CommentDescriptor {
        &self.descriptor
    }

    /// Whether the line starts with the left delimiter once leading
    /// whitespace is skipped.
    pub fn is_line_commented(&self, line: &str) -> bool {
        self.line.is_match(line)
    }

    /// Match the whole line as `left [middle] right` and return the middle.
    ///
    /// One blank on each inner side of the delimiters is not part of the
    /// middle. `Some("")` means a commented but content-free line (`/**/`),
    /// `None` that the line is not block-commented at all.
    pub fn is_block_commented<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.block
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Split a commented line into its indentation and the text between the
    /// delimiters, a single blank after `left` excluded.
    pub fn split_commented<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str)> {
        let caps = self.uncomment.captures(line)?;
        let indent = caps.get(1).map_or("", |m| m.as_str());
        let chars = caps.get(2).map_or("", |m| m.as_str());
        Some((indent, chars))
    }

    /// Whether the line ends with the right delimiter.
    pub fn is_closed(&self, line: &str) -> bool {
        self.closing.is_match(line)
    }

    /// Whether a first/last line pair is wrapped in one block comment.
    pub fn is_block_bounded(&self, first: &str, last: &str) -> bool {
        self.is_line_commented(first) && self.is_closed(last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(left: &str, right: &str) -> CommentMatcher {
        CommentMatcher::new(&CommentDescriptor::new(left, right)).unwrap()
    }

    // ── is_line_commented ─────────────────────────────────────────

    #[test]
    fn test_line_commented_basic() {
        let m = matcher("//", "");
        assert!(m.is_line_commented("// hello"));
        assert!(m.is_line_commented("//hello"));
        assert!(m.is_line_commented("    // hello"));
        assert!(m.is_line_commented("\t//"));
    }

    #[test]
    fn test_line_commented_false() {
        let m = matcher("//", "");
        assert!(!m.is_line_commented("hello // trailing"));
        assert!(!m.is_line_commented("/ / x"));
        assert!(!m.is_line_commented(""));
        assert!(!m.is_line_commented("   "));
    }

    #[test]
    fn test_line_commented_metacharacters_are_literal() {
        let m = matcher("/*", "*/");
        assert!(m.is_line_commented("  /* x */"));
        assert!(!m.is_line_commented("  / x"));
        assert!(!m.is_line_commented("//"));

        let m = matcher("$.", "");
        assert!(m.is_line_commented("$. x"));
        assert!(!m.is_line_commented("$x"));
    }

    // ── is_block_commented ────────────────────────────────────────

    #[test]
    fn test_block_commented_captures_middle() {
        let m = matcher("/*", "*/");
        assert_eq!(m.is_block_commented("/* x */"), Some("x"));
        assert_eq!(m.is_block_commented("/*x*/"), Some("x"));
        assert_eq!(m.is_block_commented("/* a */ b */"), Some("a */ b"));
    }

    #[test]
    fn test_block_commented_empty_middle() {
        let m = matcher("/*", "*/");
        assert_eq!(m.is_block_commented("/**/"), Some(""));
        assert_eq!(m.is_block_commented("/*  */"), Some(""));
    }

    #[test]
    fn test_block_commented_is_anchored_both_ends() {
        let m = matcher("/*", "*/");
        assert_eq!(m.is_block_commented("x /* y */"), None);
        assert_eq!(m.is_block_commented("/* y */ x"), None);
        assert_eq!(m.is_block_commented("  /* y */"), None);
        assert_eq!(m.is_block_commented("/* open"), None);
        assert_eq!(m.is_block_commented(""), None);
    }

    #[test]
    fn test_block_commented_html() {
        let m = matcher("<!--", "-->");
        assert_eq!(m.is_block_commented("<!-- note -->"), Some("note"));
    }

    // ── split_commented ───────────────────────────────────────────

    #[test]
    fn test_split_commented() {
        let m = matcher("/*", "*/");
        assert_eq!(m.split_commented("  /* x */"), Some(("  ", "x ")));
        assert_eq!(m.split_commented("/**/"), Some(("", "")));
        assert_eq!(m.split_commented("  /* open"), None);

        let m = matcher("--", "");
        assert_eq!(m.split_commented("  -- x"), Some(("  ", "x")));
        assert_eq!(m.split_commented("--"), Some(("", "")));
    }

    // ── block bounds ──────────────────────────────────────────────

    #[test]
    fn test_is_block_bounded() {
        let m = matcher("/*", "*/");
        assert!(m.is_block_bounded("  /* first", "last */"));
        assert!(!m.is_block_bounded("first", "last */"));
        assert!(!m.is_block_bounded("/* first", "last"));
    }
}
