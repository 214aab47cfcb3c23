//! Error types shared by the live-region renderers.

use thiserror::Error;

/// Unified result type for the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced while painting to the terminal.
#[derive(Debug, Error)]
pub enum Error {
    /// Another live region (spinner or task log) already owns the output.
    #[error("a live region is already active; stop it before starting `{0}`")]
    LiveRegionBusy(&'static str),
    /// The process signal bridge could not be installed.
    #[error("failed to install signal handlers: {0}")]
    Signal(#[source] std::io::Error),
    /// Writing to the output stream failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
