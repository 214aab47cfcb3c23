//! Ticker: Dedicated thread that drives a live region's repaint.
//!
//! The ticker calls its callback at a fixed interval until cancelled.
//! Cancellation is idempotent and joins the thread, so once `cancel`
//! returns no further tick can run.

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender};
use std::io;
use std::sync::{Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// A tick event passed to the callback.
#[derive(Debug, Clone, Copy)]
pub struct Tick {
    /// Frame number (monotonically increasing).
    pub frame: u64,
    /// Time elapsed since the ticker was started.
    pub elapsed: Duration,
}

/// Cancellable periodic task.
pub struct Ticker {
    /// Handle to the ticker thread.
    handle: Mutex<Option<JoinHandle<()>>>,
    /// Dropping the sender wakes the thread and ends the loop.
    shutdown: Mutex<Option<Sender<()>>>,
}

impl Ticker {
    /// Spawn a ticker calling `on_tick` every `interval`.
    ///
    /// The first tick fires one interval after spawning.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS fails to spawn the ticker thread.
    pub fn spawn<F>(interval: Duration, on_tick: F) -> io::Result<Self>
    where
        F: FnMut(Tick) + Send + 'static,
    {
        // Zero-capacity: nothing is ever sent, disconnect is the signal.
        let (shutdown_tx, shutdown_rx) = bounded::<()>(0);

        let handle = thread::Builder::new()
            .name("flyprompt-ticker".to_string())
            .spawn(move || {
                Self::run_loop(&shutdown_rx, interval, on_tick);
            })?;

        Ok(Self {
            handle: Mutex::new(Some(handle)),
            shutdown: Mutex::new(Some(shutdown_tx)),
        })
    }

    /// Stop the ticker and wait for an in-flight tick to finish.
    ///
    /// Safe to call any number of times, from any thread. Called from the
    /// ticker's own callback it signals shutdown without joining.
    pub fn cancel(&self) {
        drop(
            self.shutdown
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .take(),
        );

        let handle = self
            .handle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = handle {
            if handle.thread().id() == thread::current().id() {
                return;
            }
            let _ = handle.join();
        }
    }

    /// Check whether the ticker has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.shutdown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }

    /// Main ticker loop.
    fn run_loop<F: FnMut(Tick)>(shutdown: &Receiver<()>, interval: Duration, mut on_tick: F) {
        let start = Instant::now();
        let mut frame = 0u64;
        let mut next_tick = start + interval;

        loop {
            let wait = next_tick.saturating_duration_since(Instant::now());
            match shutdown.recv_timeout(wait) {
                Err(RecvTimeoutError::Timeout) => {}
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }

            let now = Instant::now();
            on_tick(Tick {
                frame,
                elapsed: now - start,
            });

            frame += 1;
            next_tick += interval;

            // Handle case where we're behind (catch up without bursting)
            if next_tick < now {
                next_tick = now + interval;
            }
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ticker")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_ticker_basic() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let ticker = Ticker::spawn(Duration::from_millis(10), move |tick| {
            let _ = tx.send(tick.frame);
        })
        .unwrap();

        // Should receive ticks
        assert_eq!(rx.recv_timeout(Duration::from_millis(500)), Ok(0));
        assert_eq!(rx.recv_timeout(Duration::from_millis(500)), Ok(1));

        ticker.cancel();
    }

    #[test]
    fn test_no_ticks_after_cancel() {
        let count = Arc::new(AtomicU64::new(0));
        let counter = Arc::clone(&count);
        let ticker = Ticker::spawn(Duration::from_millis(5), move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

        thread::sleep(Duration::from_millis(30));
        ticker.cancel();
        let after_cancel = count.load(Ordering::SeqCst);

        thread::sleep(Duration::from_millis(30));
        assert_eq!(count.load(Ordering::SeqCst), after_cancel);
        assert!(ticker.is_cancelled());
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let ticker = Ticker::spawn(Duration::from_millis(100), |_| {}).unwrap();
        ticker.cancel();
        ticker.cancel();
        drop(ticker);
    }

    #[test]
    fn test_cancel_wakes_sleeping_thread() {
        let ticker = Ticker::spawn(Duration::from_secs(60), |_| {}).unwrap();
        let start = Instant::now();
        ticker.cancel();
        assert!(start.elapsed() < Duration::from_secs(5));
    }
}
