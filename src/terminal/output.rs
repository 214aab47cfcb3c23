//! `OutputBuffer`: Single-syscall output buffer for live-region frames.

use std::io::Write;

/// Pre-allocated buffer for building one frame of escape sequences and text.
///
/// An erase and the repaint that follows it are accumulated here, then
/// flushed in a single `write()` so the terminal never shows the gap between
/// them.
#[derive(Debug, Clone)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical prompt frame (1KB).
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write a string.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Write a string followed by a newline.
    #[inline]
    pub fn write_line(&mut self, s: &str) {
        self.write_str(s);
        self.data.push(b'\n');
    }

    /// Move the cursor up `rows` rows, keeping the column.
    ///
    /// Zero is a no-op: `CSI 0 A` moves one row on most terminals.
    #[inline]
    pub fn cursor_up(&mut self, rows: usize) {
        if rows > 0 {
            let _ = write!(self.data, "\x1b[{rows}A");
        }
    }

    /// Return the cursor to column 0 of the current row.
    #[inline]
    pub fn line_start(&mut self) {
        self.data.push(b'\r');
    }

    /// Erase from the cursor to the end of the screen.
    #[inline]
    pub fn erase_down(&mut self) {
        self.data.extend_from_slice(b"\x1b[J");
    }

    /// Erase the `rows` rows directly above the cursor and park it at the
    /// start of the first erased row.
    ///
    /// With `rows == 0` only the current row (from column 0) is cleared.
    pub fn erase_rows_above(&mut self, rows: usize) {
        self.cursor_up(rows);
        self.line_start();
        self.erase_down();
    }

    /// Hide cursor.
    #[inline]
    pub fn cursor_hide(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25l");
    }

    /// Show cursor.
    #[inline]
    pub fn cursor_show(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25h");
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write + ?Sized>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}
