//! Live module: regions that repaint themselves in place.
//!
//! - [`Spinner`]: one animated line driven by a [`Ticker`]
//! - [`TaskLog`]: streamed output under a heading, repainted per append
//! - [`Lifecycle`]: exit hooks and the one-live-region-at-a-time slot
//!
//! A live region owns the bottom of the output while it runs. Nothing else
//! should write to the same stream until it finishes.

mod lifecycle;
mod spinner;
mod surface;
mod task_log;
mod ticker;

pub use lifecycle::{ExitEvent, HookHandle, Lifecycle, LiveLease};
pub use spinner::{FrameState, Spinner, SpinnerConfig};
pub use surface::Surface;
pub use task_log::{LogBuffer, TaskLog, TaskLogConfig};
pub use ticker::{Tick, Ticker};

#[cfg(test)]
pub(crate) mod testing {
    use super::{Lifecycle, Surface};
    use crate::terminal::FixedGeometry;
    use crate::theme::Theme;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    /// Cloneable in-memory writer shared with a live region's thread.
    #[derive(Debug, Clone, Default)]
    pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        pub fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Plain unicode surface with a fixed size.
    pub fn test_surface(columns: u16, rows: u16, lifecycle: &Arc<Lifecycle>) -> Surface {
        Surface::new(
            Theme::plain(true),
            Arc::new(FixedGeometry::new(columns, rows)),
            Arc::clone(lifecycle),
        )
    }

    /// Feed raw output through a terminal emulator and return the visible
    /// rows, trailing blanks removed. `\n` is translated the way a tty in
    /// cooked mode does.
    pub fn screen_lines(raw: &str, columns: u16, rows: u16) -> Vec<String> {
        let mut parser = vt100::Parser::new(rows, columns, 0);
        parser.process(raw.replace('\n', "\r\n").as_bytes());
        let mut lines: Vec<String> = parser
            .screen()
            .rows(0, columns)
            .map(|row| row.trim_end().to_string())
            .collect();
        while lines.last().is_some_and(String::is_empty) {
            lines.pop();
        }
        lines
    }
}
