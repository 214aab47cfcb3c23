//! Theme module: glyphs and styling behind one handle.
//!
//! - [`Symbols`]: unicode / ASCII glyph sets, chosen by one capability flag
//! - [`Style`], [`Color`], [`Modifiers`]: semantic styling
//! - [`Painter`]: the swappable function that turns a style into bytes

mod style;
mod symbols;

pub use style::{AnsiPainter, Color, Modifiers, Painter, PlainPainter, Style};
pub use symbols::{unicode_supported, Symbols};

use std::env;
use std::fmt;
use std::sync::Arc;

/// Glyphs plus painter, passed to every renderer.
#[derive(Clone)]
pub struct Theme {
    symbols: &'static Symbols,
    painter: Arc<dyn Painter>,
}

impl Theme {
    /// Create a theme from explicit parts.
    pub fn new(symbols: &'static Symbols, painter: Arc<dyn Painter>) -> Self {
        Self { symbols, painter }
    }

    /// Unstyled theme, useful when output is not a terminal.
    pub fn plain(unicode: bool) -> Self {
        Self::new(Symbols::for_capability(unicode), Arc::new(PlainPainter))
    }

    /// ANSI-coloured theme.
    pub fn ansi(unicode: bool) -> Self {
        Self::new(Symbols::for_capability(unicode), Arc::new(AnsiPainter))
    }

    /// Theme for the current process.
    ///
    /// Unicode support comes from [`unicode_supported`]; colour is disabled
    /// when `NO_COLOR` is set to a non-empty value.
    pub fn detect() -> Self {
        let unicode = unicode_supported();
        let no_color = env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        if no_color {
            Self::plain(unicode)
        } else {
            Self::ansi(unicode)
        }
    }

    /// The glyph set.
    #[inline]
    pub const fn symbols(&self) -> &'static Symbols {
        self.symbols
    }

    /// Apply a style to text.
    #[inline]
    pub fn paint(&self, text: &str, style: impl Into<Style>) -> String {
        self.painter.paint(text, style.into())
    }

    /// Shorthand for a dimmed span.
    #[inline]
    pub fn dim(&self, text: &str) -> String {
        self.paint(text, Style::DIM)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

impl fmt::Debug for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Theme")
            .field("unicode", &(*self.symbols == Symbols::UNICODE))
            .finish_non_exhaustive()
    }
}
