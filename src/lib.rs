//! # Flyprompt
//!
//! Flicker-free rendering core for interactive terminal prompts.
//!
//! Flyprompt turns a prompt snapshot (state, value, cursor, error) into the
//! exact text that draws it, and keeps animated regions honest: every
//! repaint erases exactly the rows the previous frame used, soft wraps
//! included, and every way out of a live region leaves one static line.
//!
//! ## Core Concepts
//!
//! - **Visible width**: layout measures what the terminal shows, not bytes
//! - **Stateless viewport**: long lists are windowed from (length, cursor, height) alone
//! - **Live regions**: spinner and task log own the bottom of the output one at a time
//! - **Lifecycle**: panics, signals and exits finalize the live region before the process goes
//!
//! ## Example
//!
//! ```rust,ignore
//! use flyprompt::{Spinner, Printer};
//!
//! let mut printer = Printer::stdout();
//! printer.intro("create-app")?;
//!
//! let spinner = Spinner::stdout();
//! spinner.start("Installing dependencies")?;
//! // ...
//! spinner.stop(Some("Installed"), 0)?;
//!
//! printer.outro("Done")?;
//! ```
//!
//! Styles compose from a colour and [`Modifiers`]:
//!
//! ```rust
//! use flyprompt::{Color, Modifiers, Style};
//!
//! let style = Style::fg(Color::Yellow).with(Modifiers::BOLD | Modifiers::INVERSE);
//! assert!(style.modifiers.contains(Modifiers::BOLD));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod layout;
pub mod live;
pub mod printer;
pub mod prompt;
pub mod terminal;
pub mod text;
pub mod theme;

// Re-exports for convenience
pub use error::{Error, Result};
pub use layout::{note, render_note, render_window, NoteConfig, ViewportRequest, Window};
pub use live::{ExitEvent, HookHandle, Lifecycle, Spinner, SpinnerConfig, Surface, TaskLog, TaskLogConfig};
pub use printer::Printer;
pub use prompt::{
    ConfirmView, MultiSelectView, PromptState, PromptView, SelectOption, SelectView, TextView,
};
pub use terminal::{FixedGeometry, Geometry, LiveGeometry, TerminalSize};
pub use text::{pad_end, rows_for, strip, visible_width};
pub use theme::{unicode_supported, AnsiPainter, Color, Modifiers, Painter, PlainPainter, Style, Symbols, Theme};
