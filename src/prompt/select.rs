//! Single choice from a list.

use super::{bar, bar_end, title, PromptState, PromptView, SelectOption};
use crate::layout::{render_window, row_budget, ViewportRequest};
use crate::terminal::Geometry;
use crate::theme::{Color, Style, Theme};
use std::fmt::Display;

/// Snapshot of a select prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectView<V> {
    /// Question shown in the title line.
    pub message: String,
    /// Current phase.
    pub state: PromptState,
    /// Choices, in display order.
    pub options: Vec<SelectOption<V>>,
    /// Index of the highlighted option.
    pub cursor: usize,
    /// Cap on visible rows. The terminal height caps it too.
    pub max_items: Option<usize>,
}

impl<V> SelectView<V> {
    /// Prompt with the cursor on the first option.
    pub fn new(message: impl Into<String>, options: Vec<SelectOption<V>>) -> Self {
        Self {
            message: message.into(),
            state: PromptState::Initial,
            options,
            cursor: 0,
            max_items: None,
        }
    }

    /// The highlighted option, if any.
    pub fn selected(&self) -> Option<&SelectOption<V>> {
        self.options.get(self.cursor)
    }
}

impl<V: Display> SelectView<V> {
    fn option_row(theme: &Theme, option: &SelectOption<V>, active: bool) -> String {
        let symbols = theme.symbols();
        let label = option.label();
        if !active {
            return format!("{} {}", theme.dim(symbols.radio_inactive), theme.dim(&label));
        }

        let mut row = format!("{} {label}", theme.paint(symbols.radio_active, Color::Green));
        if let Some(hint) = &option.hint {
            row.push(' ');
            row.push_str(&theme.dim(&format!("({hint})")));
        }
        row
    }
}

impl<V: Display> PromptView for SelectView<V> {
    fn render(&self, theme: &Theme, geometry: &dyn Geometry) -> String {
        let head = title(theme, self.state, &self.message);
        let gutter = bar(theme, self.state);
        let chosen = self.selected().map(SelectOption::label).unwrap_or_default();

        match self.state {
            PromptState::Submit => format!("{head}{gutter}  {}\n", theme.dim(&chosen)),
            PromptState::Cancel => format!(
                "{head}{gutter}  {}\n{gutter}\n",
                theme.paint(&chosen, Style::CANCELLED)
            ),
            PromptState::Initial | PromptState::Active | PromptState::Error => {
                let request = ViewportRequest {
                    items: &self.options,
                    cursor: self.cursor,
                    max_items: self.max_items,
                    row_budget: row_budget(geometry.size().rows),
                };
                let rows = render_window(&request, &theme.dim("..."), |option, active| {
                    Self::option_row(theme, option, active)
                });
                format!(
                    "{head}{gutter}  {}\n{}\n",
                    rows.join(format!("\n{gutter}  ").as_str()),
                    bar_end(theme, self.state)
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::testing::{plain, tall};
    use crate::terminal::FixedGeometry;

    fn fruit() -> SelectView<&'static str> {
        SelectView::new(
            "Pick a fruit",
            vec![
                SelectOption::new("apple"),
                SelectOption::new("banana").with_hint("yellow"),
                SelectOption::new("cherry").with_label("Cherry"),
            ],
        )
    }

    #[test]
    fn test_list_frame() {
        let mut view = fruit();
        view.cursor = 1;
        assert_eq!(
            view.render(&plain(), &tall()),
            "│\n◆  Pick a fruit\n│  ○ apple\n│  ● banana (yellow)\n│  ○ Cherry\n└\n"
        );
    }

    #[test]
    fn test_submit_shows_choice() {
        let mut view = fruit();
        view.cursor = 2;
        view.state = PromptState::Submit;
        assert_eq!(view.render(&plain(), &tall()), "│\n◇  Pick a fruit\n│  Cherry\n");

        view.state = PromptState::Cancel;
        assert_eq!(view.render(&plain(), &tall()), "│\n■  Pick a fruit\n│  Cherry\n│\n");
    }

    #[test]
    fn test_long_list_is_windowed() {
        let options = (0..100).map(SelectOption::new).collect();
        let view = SelectView {
            cursor: 50,
            max_items: Some(10),
            ..SelectView::new("Number", options)
        };
        let frame = view.render(&plain(), &FixedGeometry::new(80, 50));
        let body: Vec<&str> = frame.lines().skip(2).collect();

        // ten option rows plus the closing line
        assert_eq!(body.len(), 11);
        assert_eq!(body[0], "│  ...");
        assert_eq!(body[1], "│  ○ 44");
        assert!(body.contains(&"│  ● 50"));
        assert_eq!(body[9], "│  ...");
        assert_eq!(body[10], "└");
    }

    #[test]
    fn test_window_follows_terminal_height() {
        let options: Vec<_> = (0..30).map(SelectOption::new).collect();
        let view = SelectView::new("Number", options);
        let geometry = FixedGeometry::new(80, 12);

        let rows = |view: &SelectView<i32>| view.render(&plain(), &geometry).lines().count() - 3;
        assert_eq!(rows(&view), 8);
        geometry.resize(80, 30);
        assert_eq!(rows(&view), 26);
    }
}
