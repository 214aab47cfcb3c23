//! Printer: static, one-shot output around prompts.
//!
//! ```text
//! ┌  create-app
//! │
//! ●  Using template "minimal"
//! │
//! ◇  Scaffolded 12 files
//! │
//! └  Done
//! ```
//!
//! Every call is one atomic write. Nothing here repaints.

use crate::error::Result;
use crate::layout::{render_note, NoteConfig};
use crate::theme::{Color, Symbols, Theme};
use std::io::{self, Stdout, Write};

/// Writes intro/outro lines, log lines and notes.
pub struct Printer<W: Write> {
    writer: W,
    theme: Theme,
    note_config: NoteConfig,
}

impl Printer<Stdout> {
    /// Printer on stdout with the detected theme.
    pub fn stdout() -> Self {
        Self::new(io::stdout(), Theme::detect())
    }
}

impl<W: Write> Printer<W> {
    /// Create a printer.
    pub fn new(writer: W, theme: Theme) -> Self {
        Self {
            writer,
            theme,
            note_config: NoteConfig::default(),
        }
    }

    /// Use `config` for every [`Printer::note`].
    #[must_use]
    pub fn with_note_config(mut self, config: NoteConfig) -> Self {
        self.note_config = config;
        self
    }

    /// The theme in use.
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Give the writer back.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Opening line of a session.
    pub fn intro(&mut self, title: &str) -> Result<()> {
        let start = self.theme.paint(self.theme.symbols().bar_start, Color::Gray);
        self.emit(&format!("{start}  {title}\n"))
    }

    /// Closing line of a session.
    pub fn outro(&mut self, message: &str) -> Result<()> {
        let symbols = self.theme.symbols();
        let text = format!(
            "{}\n{}  {message}\n\n",
            self.theme.paint(symbols.bar, Color::Gray),
            self.theme.paint(symbols.bar_end, Color::Gray),
        );
        self.emit(&text)
    }

    /// Closing line when the session was abandoned.
    pub fn cancel(&mut self, message: &str) -> Result<()> {
        let text = format!(
            "{}  {}\n\n",
            self.theme.paint(self.theme.symbols().bar_end, Color::Gray),
            self.theme.paint(message, Color::Red),
        );
        self.emit(&text)
    }

    /// Log a message under `symbol` (a gray bar when `None`).
    ///
    /// The first line sits next to the symbol; later lines continue in the
    /// gutter.
    pub fn message(&mut self, message: &str, symbol: Option<&str>) -> Result<()> {
        let bar = self.theme.paint(self.theme.symbols().bar, Color::Gray);
        let symbol = symbol.map_or_else(|| bar.clone(), ToOwned::to_owned);

        let mut parts = vec![bar.clone()];
        if !message.is_empty() {
            let mut lines = message.split('\n');
            let first = lines.next().unwrap_or_default();
            parts.push(format!("{symbol}  {first}"));
            parts.extend(lines.map(|line| format!("{bar}  {line}")));
        }

        let mut text = parts.join("\n");
        text.push('\n');
        self.emit(&text)
    }

    /// Informational line.
    pub fn info(&mut self, message: &str) -> Result<()> {
        self.symbol_message(message, |s| s.info, Color::Blue)
    }

    /// Something worked.
    pub fn success(&mut self, message: &str) -> Result<()> {
        self.symbol_message(message, |s| s.success, Color::Green)
    }

    /// One step of a longer process is done.
    pub fn step(&mut self, message: &str) -> Result<()> {
        self.symbol_message(message, |s| s.step_submit, Color::Green)
    }

    /// Something needs attention.
    pub fn warn(&mut self, message: &str) -> Result<()> {
        self.symbol_message(message, |s| s.warn, Color::Yellow)
    }

    /// Something failed.
    pub fn error(&mut self, message: &str) -> Result<()> {
        self.symbol_message(message, |s| s.error, Color::Red)
    }

    /// Titled, bordered block.
    pub fn note(&mut self, body: &str, title: &str) -> Result<()> {
        let text = render_note(body, title, &self.theme, &self.note_config);
        self.emit(&text)
    }

    fn symbol_message(
        &mut self,
        message: &str,
        pick: fn(&Symbols) -> &'static str,
        color: Color,
    ) -> Result<()> {
        let symbol = self.theme.paint(pick(self.theme.symbols()), color);
        self.message(message, Some(symbol.as_str()))
    }

    fn emit(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> std::fmt::Debug for Printer<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Printer")
            .field("theme", &self.theme)
            .field("note_config", &self.note_config)
            .finish_non_exhaustive()
    }
}
