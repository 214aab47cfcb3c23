//! Note: a titled, bordered block painted in one write.
//!
//! ```text
//! ◇  Title ──────╮
//! │              │
//! │  body line   │
//! │              │
//! ├──────────────╯
//! ```

use crate::text::{pad_end, visible_width};
use crate::theme::{Color, Theme};
use std::io::Write;

/// Configuration for [`render_note`].
#[derive(Debug, Clone)]
pub struct NoteConfig {
    /// Style body text as muted. The title is never dimmed.
    pub dimmed: bool,
}

impl Default for NoteConfig {
    fn default() -> Self {
        Self { dimmed: true }
    }
}

/// Width of the padded content column for `body` under `title`.
///
/// This is the widest body line or the title, whichever is wider, plus two.
pub fn content_width(body: &str, title: &str) -> usize {
    let widest = body.split('\n').map(visible_width).max().unwrap_or(0);
    widest.max(visible_width(title)) + 2
}

/// Build the note block. Every line ends with `\n`.
pub fn render_note(body: &str, title: &str, theme: &Theme, config: &NoteConfig) -> String {
    let symbols = theme.symbols();
    let padded = format!("\n{body}\n");
    let width = content_width(&padded, title);
    let title_width = visible_width(title);
    let rule = symbols.bar_h.repeat(width.saturating_sub(title_width + 1).max(1));

    let mut out = String::new();
    out.push_str(&theme.paint(symbols.bar, Color::Gray));
    out.push('\n');
    out.push_str(&format!(
        "{}  {title} {}\n",
        theme.paint(symbols.step_submit, Color::Green),
        theme.paint(&format!("{rule}{}", symbols.corner_top_right), Color::Gray),
    ));

    let bar = theme.paint(symbols.bar, Color::Gray);
    for line in padded.split('\n') {
        let text = if config.dimmed {
            theme.dim(line)
        } else {
            line.to_owned()
        };
        out.push_str(&format!("{bar}  {}{bar}\n", pad_end(&text, width)));
    }

    out.push_str(&theme.paint(
        &format!(
            "{}{}{}",
            symbols.connect_left,
            symbols.bar_h.repeat(width + 2),
            symbols.corner_bottom_right
        ),
        Color::Gray,
    ));
    out.push('\n');
    out
}

/// Paint a note straight to `writer` as a single atomic write.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn note<W: Write + ?Sized>(
    writer: &mut W,
    body: &str,
    title: &str,
    theme: &Theme,
    config: &NoteConfig,
) -> std::io::Result<()> {
    writer.write_all(render_note(body, title, theme, config).as_bytes())?;
    writer.flush()
}
