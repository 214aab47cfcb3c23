//! Prompt module: frame templates for each prompt type.
//!
//! A prompt engine owns keystrokes, validation and the value itself. On every
//! state change it fills one of these views with a snapshot and asks for a
//! frame:
//!
//! ```text
//!   engine state ──▶ XxxView { state, value, cursor, error } ──▶ render() ──▶ String
//! ```
//!
//! Every frame ends with a newline and is meant to be written in one go.

mod confirm;
mod multiselect;
mod select;
mod text;

pub use confirm::ConfirmView;
pub use multiselect::MultiSelectView;
pub use select::SelectView;
pub use text::TextView;

use crate::terminal::Geometry;
use crate::theme::{Color, Theme};
use std::borrow::Cow;
use std::fmt::Display;

/// Lifecycle phase of a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PromptState {
    /// First frame, nothing typed yet.
    #[default]
    Initial,
    /// Accepting input.
    Active,
    /// Validation failed; the error is shown under the value.
    Error,
    /// The user gave up.
    Cancel,
    /// A value was accepted.
    Submit,
}

impl PromptState {
    /// Whether this is a final frame.
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Cancel | Self::Submit)
    }

    /// Gutter colour for the body of the frame.
    const fn bar_color(self) -> Color {
        match self {
            Self::Initial | Self::Active => Color::Cyan,
            Self::Error => Color::Yellow,
            Self::Cancel | Self::Submit => Color::Gray,
        }
    }
}

/// One choice in a select or multiselect list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption<V> {
    /// Value handed back to the caller. Options are identified by it.
    pub value: V,
    /// Shown text. Falls back to the value's `Display`.
    pub label: Option<String>,
    /// Extra text shown next to the active option.
    pub hint: Option<String>,
}

impl<V> SelectOption<V> {
    /// Option labelled by its value.
    pub const fn new(value: V) -> Self {
        Self {
            value,
            label: None,
            hint: None,
        }
    }

    /// Set the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the hint.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl<V: Display> SelectOption<V> {
    /// The text to show for this option.
    pub fn label(&self) -> Cow<'_, str> {
        self.label
            .as_deref()
            .map_or_else(|| Cow::Owned(self.value.to_string()), Cow::Borrowed)
    }
}

/// A prompt snapshot that can be turned into a frame.
pub trait PromptView {
    /// Build the full frame for the current state.
    ///
    /// `geometry` is read on every call so list windows follow resizes.
    fn render(&self, theme: &Theme, geometry: &dyn Geometry) -> String;
}

/// `│` separator line, then the state glyph and the message.
pub(crate) fn title(theme: &Theme, state: PromptState, message: &str) -> String {
    format!(
        "{}\n{}  {message}\n",
        theme.paint(theme.symbols().bar, Color::Gray),
        state_symbol(theme, state)
    )
}

/// Glyph marking the prompt's state.
pub fn state_symbol(theme: &Theme, state: PromptState) -> String {
    let symbols = theme.symbols();
    match state {
        PromptState::Initial | PromptState::Active => theme.paint(symbols.step_active, Color::Cyan),
        PromptState::Cancel => theme.paint(symbols.step_cancel, Color::Red),
        PromptState::Error => theme.paint(symbols.step_error, Color::Yellow),
        PromptState::Submit => theme.paint(symbols.step_submit, Color::Green),
    }
}

pub(crate) fn bar(theme: &Theme, state: PromptState) -> String {
    theme.paint(theme.symbols().bar, state.bar_color())
}

pub(crate) fn bar_end(theme: &Theme, state: PromptState) -> String {
    theme.paint(theme.symbols().bar_end, state.bar_color())
}
