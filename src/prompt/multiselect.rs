//! Any number of choices from a list.

use super::{bar, bar_end, title, PromptState, PromptView, SelectOption};
use crate::layout::{render_window, row_budget, ViewportRequest};
use crate::terminal::Geometry;
use crate::theme::{Color, Style, Theme};
use std::fmt::Display;

/// Snapshot of a multiselect prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiSelectView<V> {
    /// Question shown in the title line.
    pub message: String,
    /// Current phase.
    pub state: PromptState,
    /// Choices, in display order.
    pub options: Vec<SelectOption<V>>,
    /// Values currently checked.
    pub selected: Vec<V>,
    /// Index of the highlighted option.
    pub cursor: usize,
    /// Cap on visible rows. The terminal height caps it too.
    pub max_items: Option<usize>,
    /// Validation error; may span several lines.
    pub error: Option<String>,
}

impl<V: PartialEq> MultiSelectView<V> {
    /// Prompt with nothing checked.
    pub fn new(message: impl Into<String>, options: Vec<SelectOption<V>>) -> Self {
        Self {
            message: message.into(),
            state: PromptState::Initial,
            options,
            selected: Vec::new(),
            cursor: 0,
            max_items: None,
            error: None,
        }
    }

    /// Whether `option` is checked.
    pub fn is_selected(&self, option: &SelectOption<V>) -> bool {
        self.selected.contains(&option.value)
    }

    fn checked(&self) -> impl Iterator<Item = &SelectOption<V>> {
        self.options.iter().filter(|option| self.is_selected(option))
    }
}

impl<V: PartialEq + Display> MultiSelectView<V> {
    fn option_row(&self, theme: &Theme, option: &SelectOption<V>, active: bool) -> String {
        let symbols = theme.symbols();
        let label = option.label();
        let selected = self.is_selected(option);

        let mut row = match (active, selected) {
            (true, false) => format!("{} {label}", theme.paint(symbols.checkbox_active, Color::Cyan)),
            (true, true) => format!("{} {label}", theme.paint(symbols.checkbox_selected, Color::Green)),
            (false, true) => format!(
                "{} {}",
                theme.paint(symbols.checkbox_selected, Color::Green),
                theme.dim(&label)
            ),
            (false, false) => {
                return format!("{} {}", theme.dim(symbols.checkbox_inactive), theme.dim(&label));
            }
        };
        if let Some(hint) = &option.hint {
            row.push(' ');
            row.push_str(&theme.dim(&format!("({hint})")));
        }
        row
    }

    fn list(&self, theme: &Theme, geometry: &dyn Geometry, gutter: &str) -> String {
        let request = ViewportRequest {
            items: &self.options,
            cursor: self.cursor,
            max_items: self.max_items,
            row_budget: row_budget(geometry.size().rows),
        };
        render_window(&request, &theme.dim("..."), |option, active| {
            self.option_row(theme, option, active)
        })
        .join(format!("\n{gutter}  ").as_str())
    }

    /// First error line after the corner, the rest indented under it.
    fn error_footer(&self, theme: &Theme) -> String {
        let corner = bar_end(theme, PromptState::Error);
        self.error
            .as_deref()
            .unwrap_or_default()
            .split('\n')
            .enumerate()
            .map(|(i, line)| {
                if i == 0 {
                    format!("{corner}  {}", theme.paint(line, Color::Yellow))
                } else {
                    format!("   {line}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<V: PartialEq + Display> PromptView for MultiSelectView<V> {
    fn render(&self, theme: &Theme, geometry: &dyn Geometry) -> String {
        let head = title(theme, self.state, &self.message);
        let gutter = bar(theme, self.state);
        let separator = theme.dim(", ");

        match self.state {
            PromptState::Submit => {
                let labels: Vec<String> = self.checked().map(|o| theme.dim(&o.label())).collect();
                let shown = if labels.is_empty() {
                    theme.dim("none")
                } else {
                    labels.join(separator.as_str())
                };
                format!("{head}{gutter}  {shown}\n")
            }
            PromptState::Cancel => {
                let labels: Vec<String> = self
                    .checked()
                    .map(|o| theme.paint(&o.label(), Style::CANCELLED))
                    .collect();
                if labels.is_empty() {
                    format!("{head}{gutter}\n")
                } else {
                    format!("{head}{gutter}  {}\n{gutter}\n", labels.join(separator.as_str()))
                }
            }
            PromptState::Error => format!(
                "{head}{gutter}  {}\n{}\n",
                self.list(theme, geometry, &gutter),
                self.error_footer(theme)
            ),
            PromptState::Initial | PromptState::Active => format!(
                "{head}{gutter}  {}\n{}\n",
                self.list(theme, geometry, &gutter),
                bar_end(theme, self.state)
            ),
        }
    }
}
