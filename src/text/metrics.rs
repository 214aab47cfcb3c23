//! Visible-width measurement for styled strings.
//!
//! Styled output carries SGR sequences, hyperlinks (OSC 8) and the odd
//! cursor movement, none of which occupy a column. Measuring the raw string
//! would over-count and break every box border and soft-wrap calculation.

use std::borrow::Cow;
use unicode_width::UnicodeWidthStr;

const ESC: u8 = 0x1B;

/// Remove ANSI escape sequences (CSI, OSC, DCS and two-byte escapes).
///
/// Returns `Cow::Borrowed` when the input contains no escape byte.
pub fn strip(s: &str) -> Cow<'_, str> {
    if !s.as_bytes().contains(&ESC) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(strip_ansi_escapes::strip_str(s))
}

/// Number of terminal columns `s` occupies once escape sequences are removed.
///
/// A string made only of escape sequences has width 0.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip(s).as_ref())
}

/// Right-pad `s` with spaces until its visible width reaches `width`.
///
/// Strings already at or beyond `width` are returned unchanged.
pub fn pad_end(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_width(s));
    let mut out = String::with_capacity(s.len() + fill);
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(fill));
    out
}

/// Physical rows a single logical line occupies at `columns` width.
///
/// An empty line still takes one row; a line exactly `columns` wide does not
/// spill onto a second row.
pub fn rows_for(line: &str, columns: u16) -> usize {
    if columns == 0 {
        return 1;
    }
    visible_width(line).div_ceil(usize::from(columns)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_borrows() {
        assert!(matches!(strip("hello"), Cow::Borrowed(_)));
        assert_eq!(visible_width("hello"), 5);
    }

    #[test]
    fn test_sgr_sequences() {
        assert_eq!(visible_width("\x1b[31mred\x1b[0m"), 3);
        assert_eq!(visible_width("\x1b[38;5;196mred\x1b[39m"), 3);
        assert_eq!(visible_width("\x1b[38;2;255;0;0mred\x1b[0m"), 3);
        assert_eq!(visible_width("\x1b[1m\x1b[2mbold dim\x1b[22m"), 8);
    }

    #[test]
    fn test_cursor_sequences() {
        assert_eq!(visible_width("\x1b[999D\x1b[Jtext"), 4);
        assert_eq!(visible_width("\x1b[3A\x1b[Gx"), 1);
    }

    #[test]
    fn test_osc_terminators() {
        assert_eq!(
            visible_width("\x1b]8;;https://example.com\x07link\x1b]8;;\x07"),
            4
        );
        assert_eq!(visible_width("\x1b]0;title\x1b\\text"), 4);
    }

    #[test]
    fn test_matches_manual_strip() {
        let cases = [
            ("\x1b[2m│\x1b[22m  value", "│  value"),
            ("\x1b[7mv\x1b[27malue", "value"),
            ("a\x1b[36mb\x1b[39mc", "abc"),
            ("\x1b]8;;file:///tmp\x07tmp\x1b]8;;\x07 dir", "tmp dir"),
        ];
        for (styled, plain) in cases {
            assert_eq!(strip(styled), plain);
            assert_eq!(visible_width(styled), plain.chars().count());
        }
    }

    #[test]
    fn test_escape_only_string() {
        let s = "\x1b[31m\x1b[0m";
        assert!(!s.is_empty());
        assert_eq!(visible_width(s), 0);
    }

    #[test]
    fn test_wide_characters() {
        assert_eq!(visible_width("日本"), 4);
        assert_eq!(visible_width("\x1b[31m日本\x1b[0m"), 4);
    }

    #[test]
    fn test_pad_end() {
        assert_eq!(pad_end("ab", 5), "ab   ");
        assert_eq!(pad_end("\x1b[2mab\x1b[22m", 4), "\x1b[2mab\x1b[22m  ");
        assert_eq!(pad_end("abcdef", 3), "abcdef");
    }

    #[test]
    fn test_rows_for() {
        assert_eq!(rows_for("", 80), 1);
        assert_eq!(rows_for("abc", 80), 1);
        assert_eq!(rows_for(&"x".repeat(80), 80), 1);
        assert_eq!(rows_for(&"x".repeat(81), 80), 2);
        assert_eq!(rows_for(&format!("\x1b[31m{}\x1b[0m", "x".repeat(20)), 10), 2);
        assert_eq!(rows_for("abc", 0), 1);
    }
}
