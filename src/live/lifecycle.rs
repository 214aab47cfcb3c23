//! Lifecycle: process-level exit hooks and the single live-region slot.
//!
//! A live region registers a hook for the duration of its run. Whatever ends
//! the process first (a panic, a fault reported by the caller's runtime,
//! SIGINT, SIGTERM or an explicit [`Lifecycle::exit`]) is dispatched to the
//! registered hooks before the process is allowed to go down, so the region
//! can paint its final static frame.
//!
//! Registration is explicit and scoped: [`Lifecycle::register`] returns a
//! [`HookHandle`] that deregisters on drop. Tests build their own
//! [`Lifecycle`] and inject events with [`Lifecycle::dispatch`]; only
//! [`Lifecycle::global`] is wired to the real process.

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::panic;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError, Weak};

/// Abnormal or final process events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExitEvent {
    /// Uncaught synchronous fault (a panic on any thread).
    Panic,
    /// Unhandled asynchronous fault, reported by the caller's runtime.
    Fault,
    /// External interrupt (SIGINT).
    Interrupt,
    /// External termination request (SIGTERM).
    Terminate,
    /// The process is exiting with the given code.
    Exit(i32),
}

impl ExitEvent {
    /// Exit code a live region should finish with for this event.
    ///
    /// Signals map to the cancelled code 1, faults to the error code 2.
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Interrupt | Self::Terminate => 1,
            Self::Panic | Self::Fault => 2,
            Self::Exit(code) => code,
        }
    }
}

type Hook = Arc<dyn Fn(ExitEvent) + Send + Sync>;

/// Registry of exit hooks plus the live-region slot.
pub struct Lifecycle {
    hooks: Mutex<BTreeMap<u64, Hook>>,
    next_id: AtomicU64,
    live: AtomicBool,
}

impl Lifecycle {
    /// Create an isolated lifecycle, not connected to process signals.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            hooks: Mutex::new(BTreeMap::new()),
            next_id: AtomicU64::new(0),
            live: AtomicBool::new(false),
        })
    }

    /// The process-wide lifecycle.
    ///
    /// On first use this installs a panic hook (chained in front of the
    /// existing one) and, on unix, a SIGINT/SIGTERM listener. After hooks
    /// run, the panic continues to the previous hook and the signal's
    /// default action is emulated, so nothing is swallowed.
    pub fn global() -> Arc<Self> {
        static GLOBAL: OnceLock<Arc<Lifecycle>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| {
            let lifecycle = Self::new();
            if let Err(err) = install_process_bridge(&lifecycle) {
                tracing::warn!(error = %err, "exit hooks limited to panics and explicit exits");
            }
            lifecycle
        }))
    }

    /// Register a hook, active until the returned handle is dropped.
    pub fn register<F>(self: &Arc<Self>, hook: F) -> HookHandle
    where
        F: Fn(ExitEvent) + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.lock_hooks().insert(id, Arc::new(hook));
        tracing::debug!(id, "registered exit hook");
        HookHandle {
            lifecycle: Arc::downgrade(self),
            id,
        }
    }

    /// Number of registered hooks.
    pub fn hook_count(&self) -> usize {
        self.lock_hooks().len()
    }

    /// Run every registered hook for `event`.
    ///
    /// Hooks may deregister themselves (or others) while running.
    pub fn dispatch(&self, event: ExitEvent) {
        let hooks: Vec<Hook> = self.lock_hooks().values().cloned().collect();
        tracing::debug!(?event, hooks = hooks.len(), "dispatching exit event");
        for hook in hooks {
            hook(event);
        }
    }

    /// Dispatch [`ExitEvent::Exit`] and terminate the process.
    pub fn exit(&self, code: i32) -> ! {
        self.dispatch(ExitEvent::Exit(code));
        std::process::exit(code)
    }

    /// Claim the live-region slot for `owner`.
    ///
    /// Only one spinner or task log may own the output at a time.
    pub fn claim_live(self: &Arc<Self>, owner: &'static str) -> Result<LiveLease> {
        self.live
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| Error::LiveRegionBusy(owner))?;
        tracing::debug!(owner, "live region claimed");
        Ok(LiveLease {
            lifecycle: Arc::clone(self),
            owner,
        })
    }

    /// Whether a live region currently owns the output.
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn lock_hooks(&self) -> std::sync::MutexGuard<'_, BTreeMap<u64, Hook>> {
        self.hooks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn deregister(&self, id: u64) {
        if self.lock_hooks().remove(&id).is_some() {
            tracing::debug!(id, "deregistered exit hook");
        }
    }
}

impl std::fmt::Debug for Lifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lifecycle")
            .field("hooks", &self.hook_count())
            .field("live", &self.is_live())
            .finish()
    }
}

/// Registration of one exit hook. Dropping it deregisters the hook.
#[derive(Debug)]
pub struct HookHandle {
    lifecycle: Weak<Lifecycle>,
    id: u64,
}

impl HookHandle {
    /// Deregister now. Equivalent to dropping the handle.
    pub fn release(self) {}
}

impl Drop for HookHandle {
    fn drop(&mut self) {
        if let Some(lifecycle) = self.lifecycle.upgrade() {
            lifecycle.deregister(self.id);
        }
    }
}

/// Ownership of the live-region slot, released on drop.
#[derive(Debug)]
pub struct LiveLease {
    lifecycle: Arc<Lifecycle>,
    owner: &'static str,
}

impl Drop for LiveLease {
    fn drop(&mut self) {
        self.lifecycle.live.store(false, Ordering::Release);
        tracing::debug!(owner = self.owner, "live region released");
    }
}

/// Connect the process's panic hook and termination signals to `lifecycle`.
fn install_process_bridge(lifecycle: &Arc<Lifecycle>) -> Result<()> {
    install_panic_hook(lifecycle);

    #[cfg(unix)]
    install_signal_listener(lifecycle)?;

    Ok(())
}

/// Dispatch [`ExitEvent::Panic`] in front of the current panic hook, which
/// still runs afterwards.
fn install_panic_hook(lifecycle: &Arc<Lifecycle>) {
    let target = Arc::clone(lifecycle);
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        target.dispatch(ExitEvent::Panic);
        previous(info);
    }));
}

#[cfg(unix)]
fn install_signal_listener(lifecycle: &Arc<Lifecycle>) -> Result<()> {
    use signal_hook::consts::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT, SIGTERM]).map_err(Error::Signal)?;
    let target = Arc::clone(lifecycle);

    std::thread::Builder::new()
        .name("flyprompt-signals".to_string())
        .spawn(move || {
            for signal in signals.forever() {
                let event = if signal == SIGINT {
                    ExitEvent::Interrupt
                } else {
                    ExitEvent::Terminate
                };
                target.dispatch(event);
                if let Err(err) = signal_hook::low_level::emulate_default_handler(signal) {
                    tracing::warn!(signal, error = %err, "failed to re-raise signal");
                }
            }
        })?;

    Ok(())
}
