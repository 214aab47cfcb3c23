//! Task log: an append-only block of output under a heading.
//!
//! Every append erases the previous frame and repaints the whole
//! accumulated text, so a transform can restyle (or truncate) earlier lines.
//! Finishing replaces the heading and frame with one static line.

use super::lifecycle::LiveLease;
use super::surface::Surface;
use crate::error::Result;
use crate::terminal::OutputBuffer;
use crate::text::rows_for;
use crate::theme::Color;
use std::fmt;
use std::io::Write;

type Transform = Box<dyn Fn(&str) -> String + Send>;

/// Configuration for [`TaskLog`].
#[derive(Debug, Clone, Default)]
pub struct TaskLogConfig {
    /// Show only the last `limit` lines of the frame. `None` shows all.
    pub limit: Option<usize>,
}

/// Accumulated text plus the frame last painted from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogBuffer {
    text: String,
    frame: String,
}

impl LogBuffer {
    /// Append one chunk verbatim. Line breaks come only from the text itself.
    pub fn push(&mut self, chunk: &str) {
        self.text.push_str(chunk);
    }

    /// Everything appended so far.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The frame as last painted.
    pub fn frame(&self) -> &str {
        &self.frame
    }

    /// Screen rows the painted frame occupies at `columns`.
    pub fn frame_rows(&self, columns: u16) -> usize {
        frame_rows(&self.frame, columns)
    }
}

/// Rows a block of text occupies, soft wraps included.
fn frame_rows(frame: &str, columns: u16) -> usize {
    frame.lines().map(|line| rows_for(line, columns)).sum()
}

/// Rows to climb from the cursor left behind by painting `frame` to the
/// frame's first row.
///
/// After a trailing newline the cursor sits on the row below the frame;
/// otherwise it sits on the frame's last row.
fn cursor_climb(frame: &str, columns: u16) -> usize {
    let rows = frame_rows(frame, columns);
    if frame.is_empty() || frame.ends_with('\n') {
        rows
    } else {
        rows - 1
    }
}

fn tail_lines(frame: &str, limit: usize) -> String {
    let lines: Vec<&str> = frame.lines().collect();
    let mut tail = lines[lines.len().saturating_sub(limit)..].join("\n");
    if frame.ends_with('\n') && !tail.is_empty() {
        tail.push('\n');
    }
    tail
}

/// Live block of streamed output under a titled heading.
pub struct TaskLog<W: Write> {
    writer: W,
    surface: Surface,
    heading: String,
    config: TaskLogConfig,
    buffer: LogBuffer,
    transform: Option<Transform>,
    out: OutputBuffer,
    _lease: LiveLease,
}

impl<W: Write> TaskLog<W> {
    /// Claim the output and write the heading.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::LiveRegionBusy`](crate::Error::LiveRegionBusy)
    /// while another live region runs, or if the heading cannot be written.
    pub fn new(writer: W, title: &str, surface: Surface) -> Result<Self> {
        Self::build(writer, title, surface, TaskLogConfig::default(), None)
    }

    /// Like [`TaskLog::new`], with custom configuration.
    pub fn with_config(writer: W, title: &str, surface: Surface, config: TaskLogConfig) -> Result<Self> {
        Self::build(writer, title, surface, config, None)
    }

    /// Like [`TaskLog::new`], repainting the text through `transform`.
    pub fn with_transform<F>(writer: W, title: &str, surface: Surface, transform: F) -> Result<Self>
    where
        F: Fn(&str) -> String + Send + 'static,
    {
        Self::build(writer, title, surface, TaskLogConfig::default(), Some(Box::new(transform)))
    }

    fn build(
        mut writer: W,
        title: &str,
        surface: Surface,
        config: TaskLogConfig,
        transform: Option<Transform>,
    ) -> Result<Self> {
        let lease = surface.lifecycle.claim_live("task log")?;

        let theme = &surface.theme;
        let symbols = theme.symbols();
        let heading = format!(
            "{}\n{}  {title}\n",
            theme.paint(symbols.bar, Color::Gray),
            theme.paint(symbols.step_active, Color::Cyan),
        );

        let mut out = OutputBuffer::new();
        out.write_str(&heading);
        out.flush_to(&mut writer)?;
        tracing::debug!(title, "task log started");

        Ok(Self {
            writer,
            surface,
            heading,
            config,
            buffer: LogBuffer::default(),
            transform,
            out,
            _lease: lease,
        })
    }

    /// Append a chunk and repaint the frame.
    pub fn append(&mut self, chunk: &str) -> Result<()> {
        self.buffer.push(chunk);
        let mut frame = match &self.transform {
            Some(transform) => transform(&self.buffer.text),
            None => self.buffer.text.clone(),
        };
        if let Some(limit) = self.config.limit {
            frame = tail_lines(&frame, limit);
        }

        let columns = self.surface.size().columns;
        let climb = cursor_climb(&self.buffer.frame, columns);

        self.out.clear();
        self.out.erase_rows_above(climb);
        self.out.write_str(&frame);
        self.buffer.frame = frame;
        tracing::trace!(climb, bytes = self.buffer.text.len(), "task log repaint");

        self.out.flush_to(&mut self.writer)?;
        Ok(())
    }

    /// Rows the current frame occupies at the current width.
    pub fn frame_rows(&self) -> usize {
        self.buffer.frame_rows(self.surface.size().columns)
    }

    /// Accumulated text and last frame.
    pub const fn buffer(&self) -> &LogBuffer {
        &self.buffer
    }

    /// Replace heading and frame with an error line, then dump the frame so
    /// the output that led to the failure stays visible.
    pub fn fail(mut self, message: &str) -> Result<()> {
        let theme = &self.surface.theme;
        let line = theme.paint(&format!("{}  {message}", theme.symbols().step_error), Color::Red);
        self.finish(&line, true)
    }

    /// Replace heading and frame with a success line.
    pub fn success(mut self, message: &str) -> Result<()> {
        let theme = &self.surface.theme;
        let line = theme.paint(&format!("{}  {message}", theme.symbols().step_submit), Color::Green);
        self.finish(&line, false)
    }

    fn finish(&mut self, line: &str, dump: bool) -> Result<()> {
        let columns = self.surface.size().columns;
        let climb = frame_rows(&self.heading, columns) + cursor_climb(&self.buffer.frame, columns);
        let theme = &self.surface.theme;
        let bar = theme.paint(theme.symbols().bar, Color::Gray);

        self.out.clear();
        self.out.erase_rows_above(climb);
        self.out.write_line(&bar);
        self.out.write_line(line);
        if dump && !self.buffer.frame.is_empty() {
            self.out.write_str(&self.buffer.frame);
            if !self.buffer.frame.ends_with('\n') {
                self.out.write_str("\n");
            }
        }
        self.out.flush_to(&mut self.writer)?;

        tracing::debug!(dump, "task log finished");
        Ok(())
    }
}

impl<W: Write> fmt::Debug for TaskLog<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskLog")
            .field("buffer", &self.buffer)
            .field("config", &self.config)
            .field("transform", &self.transform.is_some())
            .finish_non_exhaustive()
    }
}
