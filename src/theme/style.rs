//! Style: colour + modifier pairs and the painters that apply them.
//!
//! Layout code never emits SGR bytes itself. It asks a [`Painter`] to wrap a
//! piece of text, so swapping the painter (plain, ANSI, something custom)
//! never changes a measured width.

use bitflags::bitflags;
use std::fmt::Write;

/// The 16-colour palette used by prompt chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Bright black, used for inactive bars.
    Gray,
    /// Errors and cancellation.
    Red,
    /// Success and selected marks.
    Green,
    /// Validation errors and warnings.
    Yellow,
    /// Informational markers.
    Blue,
    /// Spinner glyphs.
    Magenta,
    /// Active prompt chrome.
    Cyan,
}

impl Color {
    /// SGR foreground code for this colour.
    const fn sgr(self) -> u8 {
        match self {
            Self::Gray => 90,
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
        }
    }
}

bitflags! {
    /// Text style modifiers.
    ///
    /// These can be combined using bitwise OR.
    ///
    /// # Example
    /// ```
    /// use flyprompt::Modifiers;
    /// let style = Modifiers::DIM | Modifiers::STRIKETHROUGH;
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Dim/faint text
        const DIM = 0b0000_0010;
        /// Reversed colors (fg/bg swapped)
        const INVERSE = 0b0000_0100;
        /// Hidden/invisible text
        const HIDDEN = 0b0000_1000;
        /// Strikethrough text
        const STRIKETHROUGH = 0b0001_0000;
    }
}

impl std::fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// Open/close SGR pairs, in emission order.
const MODIFIER_CODES: [(Modifiers, u8, u8); 5] = [
    (Modifiers::BOLD, 1, 22),
    (Modifiers::DIM, 2, 22),
    (Modifiers::INVERSE, 7, 27),
    (Modifiers::HIDDEN, 8, 28),
    (Modifiers::STRIKETHROUGH, 9, 29),
];

/// A semantic style: optional foreground colour plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Foreground colour, `None` keeps the terminal default.
    pub fg: Option<Color>,
    /// Modifier set.
    pub modifiers: Modifiers,
}

impl Style {
    /// No styling at all.
    pub const PLAIN: Self = Self::new(None, Modifiers::empty());
    /// Muted text.
    pub const DIM: Self = Self::new(None, Modifiers::DIM);
    /// Reversed video, used for the text cursor cell.
    pub const INVERSE: Self = Self::new(None, Modifiers::INVERSE);
    /// Struck-through dim text, used for cancelled values.
    pub const CANCELLED: Self = Self::new(None, Modifiers::DIM.union(Modifiers::STRIKETHROUGH));

    /// Create a new style.
    pub const fn new(fg: Option<Color>, modifiers: Modifiers) -> Self {
        Self { fg, modifiers }
    }

    /// A plain foreground colour.
    pub const fn fg(color: Color) -> Self {
        Self::new(Some(color), Modifiers::empty())
    }

    /// Add modifiers to this style.
    #[must_use]
    pub const fn with(self, modifiers: Modifiers) -> Self {
        Self::new(self.fg, self.modifiers.union(modifiers))
    }
}

impl From<Color> for Style {
    fn from(color: Color) -> Self {
        Self::fg(color)
    }
}

/// Applies a [`Style`] to a piece of text.
///
/// Implementations must be pure: the same input always yields the same
/// output, and the visible characters are never altered.
pub trait Painter: Send + Sync {
    /// Wrap `text` in whatever the style requires.
    fn paint(&self, text: &str, style: Style) -> String;
}

/// Painter that returns text untouched (`NO_COLOR`, tests, pipes).
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPainter;

impl Painter for PlainPainter {
    fn paint(&self, text: &str, _style: Style) -> String {
        text.to_owned()
    }
}

/// Painter emitting SGR sequences.
///
/// Each attribute is closed with its own reset code rather than `\x1b[0m`,
/// so a dim span nested inside a yellow line keeps the line yellow.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiPainter;

impl Painter for AnsiPainter {
    fn paint(&self, text: &str, style: Style) -> String {
        if style == Style::PLAIN || text.is_empty() {
            return text.to_owned();
        }

        let mut out = String::with_capacity(text.len() + 16);
        if let Some(color) = style.fg {
            let _ = write!(out, "\x1b[{}m", color.sgr());
        }
        for (flag, open, _) in MODIFIER_CODES {
            if style.modifiers.contains(flag) {
                let _ = write!(out, "\x1b[{open}m");
            }
        }

        out.push_str(text);

        for (flag, _, close) in MODIFIER_CODES.iter().rev() {
            if style.modifiers.contains(*flag) {
                let _ = write!(out, "\x1b[{close}m");
            }
        }
        if style.fg.is_some() {
            out.push_str("\x1b[39m");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::visible_width;

    #[test]
    fn test_plain_painter_is_identity() {
        assert_eq!(PlainPainter.paint("abc", Style::fg(Color::Red)), "abc");
    }

    #[test]
    fn test_ansi_color() {
        assert_eq!(AnsiPainter.paint("ok", Color::Green.into()), "\x1b[32mok\x1b[39m");
    }

    #[test]
    fn test_ansi_modifiers_close_in_reverse() {
        let painted = AnsiPainter.paint("x", Style::CANCELLED);
        assert_eq!(painted, "\x1b[2m\x1b[9mx\x1b[29m\x1b[22m");
    }

    #[test]
    fn test_ansi_preserves_visible_width() {
        let style = Style::fg(Color::Yellow).with(Modifiers::INVERSE | Modifiers::BOLD);
        let painted = AnsiPainter.paint("value", style);
        assert_eq!(visible_width(&painted), 5);
    }

    #[test]
    fn test_ansi_plain_and_empty_passthrough() {
        assert_eq!(AnsiPainter.paint("x", Style::PLAIN), "x");
        assert_eq!(AnsiPainter.paint("", Style::DIM), "");
    }
}
