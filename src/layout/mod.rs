//! Layout module: pure computations that decide what goes on which row.
//!
//! - [`viewport`]: fixed-height window over a list, cursor always visible
//! - [`note`]: bordered block sized from the visible width of its content
//!
//! Neither keeps state between calls.

pub mod note;
pub mod viewport;

pub use note::{content_width, note, render_note, NoteConfig};
pub use viewport::{effective_rows, render_window, row_budget, ViewportRequest, Window};
