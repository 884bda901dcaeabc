//! Rewriting single lines to and from their commented form.
//!
//! All functions here are line-local and never fail. The only state shared
//! across lines is the optional `spacing` a caller computes for a whole region.

use unicode_segmentation::UnicodeSegmentation;

use super::CommentMatcher;
use crate::atoms::text;
use crate::types::{CommentDescriptor, ToggleAction};

fn padded_left(left: &str, pad: bool) -> String {
    if pad && !left.is_empty() {
        format!("{} ", left)
    } else {
        left.to_string()
    }
}

fn padded_right(right: &str, pad: bool) -> String {
    if pad && !right.is_empty() {
        format!(" {}", right)
    } else {
        right.to_string()
    }
}

/// Comment one line.
///
/// `spacing` is a shared indentation: the left delimiter goes in at its
/// length instead of after the line's own indentation, so every line of a
/// region puts its delimiter in the same column.
///
/// An empty line becomes `spacing + left` with neither padding nor the right
/// delimiter, so an empty last line of a block never receives the closing
/// token.
pub fn comment_line(
    line: &str,
    left: &str,
    right: &str,
    pad: bool,
    spacing: Option<&str>,
) -> String {
    if text::is_empty(line) {
        return format!("{}{}", spacing.unwrap_or(""), left);
    }

    let (indent, rest) = text::split_indent(line);
    let at = spacing.unwrap_or(indent).len();

    let mut out = text::replace_at(at, indent, &padded_left(left, pad));
    out.push_str(rest);
    out.push_str(&padded_right(right, pad));
    out
}

/// Uncomment one line. Lines that are not commented come back unchanged.
///
/// A commented line with nothing between the delimiters becomes the empty
/// string, dropping its indentation.
pub fn uncomment_line(line: &str, matcher: &CommentMatcher, pad: bool) -> String {
    if !matcher.is_line_commented(line) {
        return line.to_string();
    }

    let Some((indent, chars)) = matcher.split_commented(line) else {
        return line.to_string();
    };

    if chars.is_empty() {
        return String::new();
    }

    // Only block syntaxes get a blank before the right delimiter.
    let chars = if pad && !matcher.descriptor().is_line() {
        strip_trailing_blank(chars)
    } else {
        chars
    };

    format!("{}{}", indent, chars)
}

fn strip_trailing_blank(s: &str) -> &str {
    match s.chars().next_back() {
        Some(c) if c.is_whitespace() => &s[..s.len() - c.len_utf8()],
        _ => s,
    }
}

/// Open a block comment on the first line of a region.
pub fn open_block(line: &str, left: &str, pad: bool) -> String {
    comment_line(line, left, "", pad, None)
}

/// Close a block comment on the last line of a region.
///
/// Goes through [`comment_line`] with no left delimiter, so an empty last
/// line stays empty and the block is left unclosed.
pub fn close_block(line: &str, right: &str, pad: bool) -> String {
    comment_line(line, "", right, pad, None)
}

/// Remove the left delimiter, and one following blank when padding, from
/// the first line of a block comment.
pub fn unopen_block(line: &str, left: &str, pad: bool) -> String {
    let (indent, rest) = text::split_indent(line);
    let Some(rest) = rest.strip_prefix(left) else {
        return line.to_string();
    };
    let rest = if pad {
        rest.strip_prefix(' ').unwrap_or(rest)
    } else {
        rest
    };

    if rest.is_empty() {
        String::new()
    } else {
        format!("{}{}", indent, rest)
    }
}

/// Remove the right delimiter, and one preceding blank when padding, from
/// the last line of a block comment.
pub fn unclose_block(line: &str, right: &str, pad: bool) -> String {
    let Some(rest) = line.strip_suffix(right) else {
        return line.to_string();
    };
    let rest = if pad {
        rest.strip_suffix(' ').unwrap_or(rest)
    } else {
        rest
    };
    rest.to_string()
}

/// Toggle a block comment around the grapheme columns `start..=end` of a line.
///
/// Columns past the end of the line are clamped. When the span already reads
/// as a block comment it is unwrapped, otherwise it is wrapped; the returned
/// action says which.
pub fn comment_span(
    line: &str,
    start: usize,
    end: usize,
    matcher: &CommentMatcher,
    pad: bool,
) -> (String, ToggleAction) {
    let CommentDescriptor { left, right } = matcher.descriptor();
    let graphemes: Vec<&str> = line.graphemes(true).collect();
    if graphemes.is_empty() {
        return (comment_line(line, left, right, pad, None), ToggleAction::Comment);
    }

    let last = graphemes.len() - 1;
    let (start, end) = (start.min(end).min(last), end.max(start).min(last));

    let before: String = graphemes[..start].concat();
    let span: String = graphemes[start..=end].concat();
    let after: String = graphemes[end + 1..].concat();

    let (middle, action) = match matcher.is_block_commented(&span) {
        Some(inner) => (inner.to_string(), ToggleAction::Uncomment),
        None => (
            format!("{}{}{}", padded_left(left, pad), span, padded_right(right, pad)),
            ToggleAction::Comment,
        ),
    };

    (format!("{}{}{}", before, middle, after), action)
}
