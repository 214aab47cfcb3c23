//! Yes / no toggle.

use super::{bar, bar_end, title, PromptState, PromptView};
use crate::terminal::Geometry;
use crate::theme::{Color, Style, Theme};

/// Snapshot of a confirm prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmView {
    /// Question shown in the title line.
    pub message: String,
    /// Current phase.
    pub state: PromptState,
    /// Current answer.
    pub value: bool,
    /// Label for `true`.
    pub active: String,
    /// Label for `false`.
    pub inactive: String,
}

impl ConfirmView {
    /// Prompt answering "Yes" by default.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            state: PromptState::Initial,
            value: true,
            active: "Yes".to_string(),
            inactive: "No".to_string(),
        }
    }

    fn label(&self) -> &str {
        if self.value {
            &self.active
        } else {
            &self.inactive
        }
    }

    fn choice(theme: &Theme, label: &str, selected: bool) -> String {
        let symbols = theme.symbols();
        if selected {
            format!("{} {label}", theme.paint(symbols.radio_active, Color::Green))
        } else {
            format!("{} {}", theme.dim(symbols.radio_inactive), theme.dim(label))
        }
    }
}

impl PromptView for ConfirmView {
    fn render(&self, theme: &Theme, _geometry: &dyn Geometry) -> String {
        let head = title(theme, self.state, &self.message);
        let gutter = bar(theme, self.state);

        match self.state {
            PromptState::Submit => format!("{head}{gutter}  {}\n", theme.dim(self.label())),
            PromptState::Cancel => format!(
                "{head}{gutter}  {}\n{gutter}\n",
                theme.paint(self.label(), Style::CANCELLED)
            ),
            PromptState::Initial | PromptState::Active | PromptState::Error => format!(
                "{head}{gutter}  {} {} {}\n{}\n",
                Self::choice(theme, &self.active, self.value),
                theme.dim("/"),
                Self::choice(theme, &self.inactive, !self.value),
                bar_end(theme, self.state),
            ),
        }
    }
}
