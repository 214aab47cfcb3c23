//! Spinner: one animated line, repainted on a fixed interval.
//!
//! # Lifecycle
//!
//! ```text
//!   start(msg) ──▶ running ──▶ stop(msg, code) ──▶ stopped
//!                     │
//!                     └── exit hook (panic / fault / SIGINT / SIGTERM / exit)
//! ```
//!
//! Every path into `stopped` erases the animated line and writes exactly one
//! static line, then the ticker is joined and the exit hook deregistered.

use super::lifecycle::{ExitEvent, HookHandle, LiveLease};
use super::surface::Surface;
use super::ticker::{Tick, Ticker};
use crate::error::{Error, Result};
use crate::terminal::OutputBuffer;
use crate::text::rows_for;
use crate::theme::{Color, Theme};
use std::io::{self, Stdout, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, TryLockError};
use std::thread;
use std::time::Duration;

/// Dots counter advances in eighths of a dot per tick.
const DOTS_STEPS_PER_DOT: usize = 8;

/// Most dots ever drawn after the message.
const MAX_DOTS: usize = 3;

/// Configuration for the spinner.
#[derive(Debug, Clone)]
pub struct SpinnerConfig {
    /// Repaint interval. `None` uses the glyph set's own pace.
    pub interval: Option<Duration>,
    /// Final message when interrupted or dropped while running.
    pub cancel_message: String,
    /// Final message when a fault ends the run.
    pub error_message: String,
}

impl Default for SpinnerConfig {
    fn default() -> Self {
        Self {
            interval: None,
            cancel_message: "Canceled".to_string(),
            error_message: "Something went wrong".to_string(),
        }
    }
}

/// Mutable animation state, advanced once per tick.
#[derive(Debug, Clone, Default)]
pub struct FrameState {
    active: bool,
    message: String,
    frame_index: usize,
    /// Fractional dots, in eighths.
    dots_counter: usize,
    /// Rows the last painted frame occupies, including soft wraps.
    painted_rows: usize,
}

impl FrameState {
    /// Fresh, active state for `message`.
    pub fn new(message: &str) -> Self {
        Self {
            active: true,
            message: trim_dots(message).to_owned(),
            ..Self::default()
        }
    }

    /// Whether the spinner is running.
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// The message shown next to the glyph.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Replace the message; it shows up on the next tick.
    pub fn set_message(&mut self, message: &str) {
        self.message = trim_dots(message).to_owned();
    }

    /// Index of the glyph the next frame will draw.
    pub const fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// Number of animated dots the next frame will draw (0 to 3).
    pub const fn dots(&self) -> usize {
        let whole = self.dots_counter / DOTS_STEPS_PER_DOT;
        if whole > MAX_DOTS {
            MAX_DOTS
        } else {
            whole
        }
    }

    /// Move to the next glyph and dots step.
    ///
    /// The dots counter grows by an eighth per tick until it reaches the
    /// frame count, then starts over at zero.
    pub fn advance(&mut self, frame_count: usize) {
        self.frame_index = (self.frame_index + 1) % frame_count.max(1);
        if self.dots_counter < frame_count * DOTS_STEPS_PER_DOT {
            self.dots_counter += 1;
        } else {
            self.dots_counter = 0;
        }
    }

    /// Erase the previous frame, paint the current one and advance.
    pub fn paint(&mut self, out: &mut OutputBuffer, theme: &Theme, columns: u16) {
        let frames = theme.symbols().spinner_frames;
        let glyph = frames[self.frame_index % frames.len()];
        let line = format!(
            "{}  {}{}",
            theme.paint(glyph, Color::Magenta),
            self.message,
            ".".repeat(self.dots())
        );

        self.erase(out);
        out.write_str(&line);
        self.painted_rows = rows_for(&line, columns);
        self.advance(frames.len());
    }

    /// Erase the animated frame and leave `line` in its place.
    pub fn finish(&mut self, out: &mut OutputBuffer, line: &str) {
        self.erase(out);
        out.write_line(line);
        self.active = false;
        self.painted_rows = 0;
    }

    /// The cursor sits on the frame's last row; climb to its first.
    fn erase(&self, out: &mut OutputBuffer) {
        out.erase_rows_above(self.painted_rows.saturating_sub(1));
    }
}

fn trim_dots(message: &str) -> &str {
    message.trim_end_matches('.')
}

struct Inner<W> {
    frame: FrameState,
    writer: W,
    out: OutputBuffer,
}

struct Shared<W> {
    surface: Surface,
    config: SpinnerConfig,
    inner: Mutex<Inner<W>>,
    ticker: Mutex<Option<Ticker>>,
    hook: Mutex<Option<HookHandle>>,
    lease: Mutex<Option<LiveLease>>,
}

/// Animated single-line progress indicator.
///
/// Only one live region may run per [`Lifecycle`](super::Lifecycle);
/// starting a second one fails with [`Error::LiveRegionBusy`].
pub struct Spinner<W: Write + Send + 'static> {
    shared: Arc<Shared<W>>,
}

impl Spinner<Stdout> {
    /// Spinner on stdout with the detected surface.
    pub fn stdout() -> Self {
        Self::with_config(io::stdout(), Surface::detect(), SpinnerConfig::default())
    }
}

impl Default for Spinner<Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write + Send + 'static> Spinner<W> {
    /// Create a stopped spinner writing to `writer`.
    pub fn new(writer: W, surface: Surface) -> Self {
        Self::with_config(writer, surface, SpinnerConfig::default())
    }

    /// Create a stopped spinner with custom configuration.
    pub fn with_config(writer: W, surface: Surface, config: SpinnerConfig) -> Self {
        Self {
            shared: Arc::new(Shared {
                surface,
                config,
                inner: Mutex::new(Inner {
                    frame: FrameState::default(),
                    writer,
                    out: OutputBuffer::new(),
                }),
                ticker: Mutex::new(None),
                hook: Mutex::new(None),
                lease: Mutex::new(None),
            }),
        }
    }

    /// Start animating `message` (trailing dots are dropped).
    ///
    /// Writes a separator line and the first frame immediately.
    pub fn start(&self, message: &str) -> Result<()> {
        let shared = &self.shared;
        let lease = shared.surface.lifecycle.claim_live("spinner")?;

        {
            let mut inner = shared.lock();
            let Inner { frame, writer, out } = &mut *inner;
            let theme = &shared.surface.theme;

            *frame = FrameState::new(message);
            out.clear();
            out.cursor_hide();
            out.write_line(&theme.paint(theme.symbols().bar, Color::Gray));
            frame.paint(out, theme, shared.surface.size().columns);

            if let Err(err) = out.flush_to(writer) {
                frame.active = false;
                return Err(err.into());
            }
        }
        *lock(&shared.lease) = Some(lease);

        let weak = Arc::downgrade(shared);
        let ticker = Ticker::spawn(shared.interval(), move |tick| {
            if let Some(shared) = weak.upgrade() {
                shared.tick(tick);
            }
        });
        match ticker {
            Ok(ticker) => *lock(&shared.ticker) = Some(ticker),
            Err(err) => {
                shared.finish(None, 2)?;
                return Err(err.into());
            }
        }

        let weak = Arc::downgrade(shared);
        let hook = shared.surface.lifecycle.register(move |event| {
            if let Some(shared) = weak.upgrade() {
                shared.finish_for(event);
            }
        });
        *lock(&shared.hook) = Some(hook);

        tracing::debug!(message = trim_dots(message), "spinner started");
        Ok(())
    }

    /// Change the message. It becomes visible on the next tick.
    pub fn message(&self, message: &str) {
        self.shared.lock().frame.set_message(message);
    }

    /// Stop the spinner and leave one static line.
    ///
    /// `code` picks the glyph: 0 success, 1 cancelled, anything else error.
    /// `message` defaults to the current message. Stopping a stopped
    /// spinner does nothing.
    pub fn stop(&self, message: Option<&str>, code: i32) -> Result<()> {
        self.shared.finish(message, code)
    }

    /// Whether the spinner is running.
    pub fn is_active(&self) -> bool {
        self.shared.lock().frame.is_active()
    }
}

impl<W: Write + Send + 'static> Drop for Spinner<W> {
    fn drop(&mut self) {
        let message = self.shared.config.cancel_message.clone();
        if let Err(err) = self.shared.finish(Some(&message), 1) {
            tracing::warn!(error = %err, "failed to finalize dropped spinner");
        }
    }
}

impl<W: Write + Send + 'static> std::fmt::Debug for Spinner<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Spinner")
            .field("frame", &self.shared.lock().frame)
            .field("config", &self.shared.config)
            .finish_non_exhaustive()
    }
}

impl<W: Write> Shared<W> {
    fn lock(&self) -> MutexGuard<'_, Inner<W>> {
        lock(&self.inner)
    }

    fn interval(&self) -> Duration {
        self.config.interval.unwrap_or_else(|| {
            Duration::from_millis(self.surface.theme.symbols().spinner_interval_ms)
        })
    }

    fn tick(&self, tick: Tick) {
        let mut inner = self.lock();
        let Inner { frame, writer, out } = &mut *inner;
        if !frame.is_active() {
            return;
        }

        out.clear();
        frame.paint(out, &self.surface.theme, self.surface.size().columns);
        if let Err(err) = out.flush_to(writer) {
            tracing::warn!(frame = tick.frame, error = %err, "spinner frame dropped");
        }
        tracing::trace!(frame = tick.frame, "spinner tick");
    }

    fn finish(&self, message: Option<&str>, code: i32) -> Result<()> {
        let Some(inner) = self.cancel_ticker_and_lock(false) else {
            return Ok(());
        };
        self.finish_locked(inner, message, code)
    }

    /// Exit-hook path: the event may fire on the thread that holds the
    /// state lock (a panic mid-tick), so never block on it indefinitely.
    fn finish_for(&self, event: ExitEvent) {
        let code = event.exit_code();
        let message = if code > 1 {
            &self.config.error_message
        } else {
            &self.config.cancel_message
        };

        let Some(inner) = self.cancel_ticker_and_lock(true) else {
            tracing::warn!(?event, "spinner state busy, final frame skipped");
            return;
        };
        if let Err(err) = self.finish_locked(inner, Some(message), code) {
            tracing::warn!(?event, error = %err, "failed to finalize spinner");
        }
    }

    fn cancel_ticker_and_lock(&self, patient: bool) -> Option<MutexGuard<'_, Inner<W>>> {
        let ticker = lock(&self.ticker).take();
        if let Some(ticker) = ticker {
            ticker.cancel();
        }

        if !patient {
            return Some(self.lock());
        }
        for _ in 0..50 {
            match self.inner.try_lock() {
                Ok(guard) => return Some(guard),
                Err(TryLockError::Poisoned(poisoned)) => return Some(poisoned.into_inner()),
                Err(TryLockError::WouldBlock) => thread::sleep(Duration::from_millis(2)),
            }
        }
        None
    }

    fn finish_locked(
        &self,
        mut inner: MutexGuard<'_, Inner<W>>,
        message: Option<&str>,
        code: i32,
    ) -> Result<()> {
        let Inner { frame, writer, out } = &mut *inner;
        if !frame.is_active() {
            return Ok(());
        }

        let theme = &self.surface.theme;
        let symbols = theme.symbols();
        let step = match code {
            0 => theme.paint(symbols.step_submit, Color::Green),
            1 => theme.paint(symbols.step_cancel, Color::Red),
            _ => theme.paint(symbols.step_error, Color::Red),
        };
        let message = message.map_or_else(|| frame.message().to_owned(), |m| trim_dots(m).to_owned());

        out.clear();
        frame.finish(out, &format!("{step}  {message}"));
        out.cursor_show();
        let result = out.flush_to(writer);
        drop(inner);

        drop(lock(&self.hook).take());
        drop(lock(&self.lease).take());
        tracing::debug!(code, "spinner stopped");

        result.map_err(Error::from)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
