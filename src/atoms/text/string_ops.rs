//! Small string helpers the comment engine is built on.
//!
//! Everything here is total over `&str`: offsets past the end are clamped and
//! never split a UTF-8 sequence.

/// True only for the zero-length string. A line holding spaces is not empty.
pub fn is_empty(line: &str) -> bool {
    line.is_empty()
}

/// Strip at most one whitespace character from each end.
///
/// This is a single-pass edge trim: `"  x  "` becomes `" x "`. Callers that
/// need every surrounding blank removed should use [`str::trim`].
pub fn trim(s: &str) -> &str {
    let s = match s.chars().next() {
        Some(c) if c.is_whitespace() => &s[c.len_utf8()..],
        _ => s,
    };
    match s.chars().next_back() {
        Some(c) if c.is_whitespace() => &s[..s.len() - c.len_utf8()],
        _ => s,
    }
}

/// Splice `replacement` into `s` at byte offset `pos`.
///
/// Nothing is removed: the result is `s[..pos] + replacement + s[pos..]`.
/// Comment placement relies on this to drop a delimiter into an indentation
/// run at a shared column while keeping whatever indentation lies past it.
pub fn replace_at(pos: usize, s: &str, replacement: &str) -> String {
    let mut pos = pos.min(s.len());
    while !s.is_char_boundary(pos) {
        pos -= 1;
    }

    let mut out = String::with_capacity(s.len() + replacement.len());
    out.push_str(&s[..pos]);
    out.push_str(replacement);
    out.push_str(&s[pos..]);
    out
}

/// Split a line into its leading whitespace run and the rest.
pub fn split_indent(line: &str) -> (&str, &str) {
    let body = line.trim_start_matches(char::is_whitespace);
    line.split_at(line.len() - body.len())
}

/// The leading whitespace run of a line.
pub fn indent_of(line: &str) -> &str {
    split_indent(line).0
}

/// Longest leading run `a` shares with `b`, cut on a char boundary of `a`.
pub fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .char_indices()
        .zip(b.chars())
        .take_while(|((_, x), y)| x == y)
        .last()
        .map_or(0, |((i, c), _)| i + c.len_utf8());
    &a[..len]
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── is_empty ──────────────────────────────────────────────────

    #[test]
    fn test_is_empty_only_for_zero_length() {
        assert!(is_empty(""));
        assert!(!is_empty(" "));
        assert!(!is_empty("\t"));
        assert!(!is_empty("x"));
    }

    // ── trim ──────────────────────────────────────────────────────

    #[test]
    fn test_trim_single_edge() {
        assert_eq!(trim(" x "), "x");
        assert_eq!(trim("x"), "x");
        assert_eq!(trim("/* "), "/*");
        assert_eq!(trim(" */"), "*/");
    }

    #[test]
    fn test_trim_strips_only_one_character_per_side() {
        // Narrow behaviour is kept; a full trim differs here.
        assert_eq!(trim("  x  "), " x ");
        assert_ne!(trim("  x  "), "  x  ".trim());
        assert_eq!(trim("\t\tx"), "\tx");
    }

    #[test]
    fn test_trim_blank_inputs() {
        assert_eq!(trim(""), "");
        assert_eq!(trim(" "), "");
        assert_eq!(trim("  "), "");
        assert_eq!(trim("   "), " ");
    }

    #[test]
    fn test_trim_multibyte_whitespace() {
        assert_eq!(trim("\u{3000}x\u{3000}"), "x");
    }

    // ── replace_at ────────────────────────────────────────────────

    #[test]
    fn test_replace_at_inserts_without_removing() {
        assert_eq!(replace_at(2, "    ", "// "), "  //   ");
        assert_eq!(replace_at(0, "abc", "X"), "Xabc");
        assert_eq!(replace_at(3, "abc", "X"), "abcX");
    }

    #[test]
    fn test_replace_at_clamps_past_end() {
        assert_eq!(replace_at(10, "  ", "--"), "  --");
        assert_eq!(replace_at(4, "", "#"), "#");
    }

    #[test]
    fn test_replace_at_respects_char_boundaries() {
        // 'é' is two bytes; offset 1 falls inside it.
        assert_eq!(replace_at(1, "é", "#"), "#é");
    }

    // ── split_indent ──────────────────────────────────────────────

    #[test]
    fn test_split_indent() {
        assert_eq!(split_indent("    let x = 1;"), ("    ", "let x = 1;"));
        assert_eq!(split_indent("\t x"), ("\t ", "x"));
        assert_eq!(split_indent("x"), ("", "x"));
        assert_eq!(split_indent("   "), ("   ", ""));
        assert_eq!(split_indent(""), ("", ""));
    }

    #[test]
    fn test_indent_of() {
        assert_eq!(indent_of("  a b"), "  ");
        assert_eq!(indent_of("a  "), "");
    }

    // ── common_prefix ─────────────────────────────────────────────

    #[test]
    fn test_common_prefix() {
        assert_eq!(common_prefix("    ", "  "), "  ");
        assert_eq!(common_prefix("\t", "    "), "");
        assert_eq!(common_prefix("\t  ", "\t "), "\t ");
        assert_eq!(common_prefix("", "  "), "");
    }
}
