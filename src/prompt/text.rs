//! Free-text and password input.

use super::{bar, bar_end, title, PromptState, PromptView};
use crate::terminal::Geometry;
use crate::theme::{Color, Modifiers, Style, Theme};
use unicode_segmentation::UnicodeSegmentation;

/// Snapshot of a text prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextView {
    /// Question shown in the title line.
    pub message: String,
    /// Current phase.
    pub state: PromptState,
    /// Typed value.
    pub value: String,
    /// Cursor position, in graphemes from the start of `value`.
    pub cursor: usize,
    /// Shown while the value is empty.
    pub placeholder: Option<String>,
    /// Validation error, shown in the error state.
    pub error: Option<String>,
    /// Replace every grapheme with the theme's mask glyph.
    pub masked: bool,
}

impl TextView {
    /// Empty prompt in its initial state.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Empty password prompt.
    pub fn password(message: impl Into<String>) -> Self {
        Self {
            masked: true,
            ..Self::new(message)
        }
    }

    /// The value as displayed: masked graphemes for a password.
    fn display_value(&self, theme: &Theme) -> String {
        if self.masked {
            theme
                .symbols()
                .password_mask
                .repeat(self.value.graphemes(true).count())
        } else {
            self.value.clone()
        }
    }

    /// Value with the grapheme under the cursor inverted. At the end of the
    /// value the cursor is an inverted, hidden `_`.
    fn value_with_cursor(&self, theme: &Theme) -> String {
        let shown = self.display_value(theme);
        let graphemes: Vec<&str> = shown.graphemes(true).collect();
        if self.cursor >= graphemes.len() {
            return format!(
                "{shown}{}",
                theme.paint("_", Style::INVERSE.with(Modifiers::HIDDEN))
            );
        }

        let before = graphemes[..self.cursor].concat();
        let after = graphemes[self.cursor + 1..].concat();
        format!(
            "{before}{}{after}",
            theme.paint(graphemes[self.cursor], Style::INVERSE)
        )
    }

    fn placeholder_cell(&self, theme: &Theme) -> String {
        let Some(placeholder) = self.placeholder.as_deref().filter(|p| !p.is_empty()) else {
            return theme.paint("_", Style::INVERSE.with(Modifiers::HIDDEN));
        };
        let mut graphemes = placeholder.graphemes(true);
        let first = graphemes.next().unwrap_or_default();
        format!(
            "{}{}",
            theme.paint(first, Style::INVERSE),
            theme.dim(graphemes.as_str())
        )
    }
}

impl PromptView for TextView {
    fn render(&self, theme: &Theme, _geometry: &dyn Geometry) -> String {
        let head = title(theme, self.state, &self.message);
        let value = if self.value.is_empty() {
            self.placeholder_cell(theme)
        } else {
            self.value_with_cursor(theme)
        };

        match self.state {
            PromptState::Error => format!(
                "{head}{}  {value}\n{}  {}\n",
                bar(theme, self.state),
                bar_end(theme, self.state),
                theme.paint(self.error.as_deref().unwrap_or_default(), Color::Yellow),
            ),
            PromptState::Submit => {
                let shown = if self.value.is_empty() {
                    self.placeholder.clone().unwrap_or_default()
                } else {
                    self.display_value(theme)
                };
                format!("{head}{}  {}\n", bar(theme, self.state), theme.dim(&shown))
            }
            PromptState::Cancel => {
                let mut frame = format!(
                    "{head}{}  {}\n",
                    bar(theme, self.state),
                    theme.paint(&self.display_value(theme), Style::CANCELLED)
                );
                if !self.value.trim().is_empty() {
                    frame.push_str(&bar(theme, self.state));
                    frame.push('\n');
                }
                frame
            }
            PromptState::Initial | PromptState::Active => format!(
                "{head}{}  {value}\n{}\n",
                bar(theme, self.state),
                bar_end(theme, self.state),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::testing::{plain, tall};
    use crate::text::visible_width;
    use crate::theme::Symbols;
    use std::sync::Arc;

    fn ansi() -> Theme {
        Theme::new(Symbols::unicode(), Arc::new(crate::theme::AnsiPainter))
    }

    #[test]
    fn test_initial_frame_with_placeholder() {
        let mut view = TextView::new("Project name?");
        view.placeholder = Some("my-app".to_string());
        assert_eq!(view.render(&plain(), &tall()), "│\n◆  Project name?\n│  my-app\n└\n");

        let frame = view.render(&ansi(), &tall());
        assert!(frame.contains("\x1b[7mm\x1b[27m\x1b[2my-app\x1b[22m"));
    }

    #[test]
    fn test_empty_value_shows_hidden_cursor() {
        let view = TextView::new("Name?");
        let frame = view.render(&ansi(), &tall());
        assert!(frame.contains("\x1b[7m\x1b[8m_\x1b[28m\x1b[27m"));
    }

    #[test]
    fn test_cursor_inside_value() {
        let view = TextView {
            value: "héllo".to_string(),
            cursor: 1,
            state: PromptState::Active,
            ..TextView::new("Word?")
        };
        let frame = view.render(&ansi(), &tall());
        assert!(frame.contains("h\x1b[7mé\x1b[27mllo"));
    }

    #[test]
    fn test_cursor_at_end_keeps_width() {
        let view = TextView {
            value: "abc".to_string(),
            cursor: 3,
            state: PromptState::Active,
            ..TextView::new("Word?")
        };
        let frame = view.render(&ansi(), &tall());
        let value_line = frame.lines().nth(2).unwrap();
        // "│  abc_"
        assert_eq!(visible_width(value_line), 7);
    }

    #[test]
    fn test_error_frame() {
        let view = TextView {
            value: "x".to_string(),
            cursor: 1,
            state: PromptState::Error,
            error: Some("Too short".to_string()),
            ..TextView::new("Name?")
        };
        assert_eq!(
            view.render(&plain(), &tall()),
            "│\n▲  Name?\n│  x_\n└  Too short\n"
        );
    }

    #[test]
    fn test_submit_and_cancel() {
        let mut view = TextView {
            value: "done".to_string(),
            cursor: 4,
            state: PromptState::Submit,
            ..TextView::new("Name?")
        };
        assert_eq!(view.render(&plain(), &tall()), "│\n◇  Name?\n│  done\n");

        view.state = PromptState::Cancel;
        assert_eq!(view.render(&plain(), &tall()), "│\n■  Name?\n│  done\n│\n");
        let frame = view.render(&ansi(), &tall());
        assert!(frame.contains("\x1b[2m\x1b[9mdone\x1b[29m\x1b[22m"));

        view.value.clear();
        assert_eq!(view.render(&plain(), &tall()), "│\n■  Name?\n│  \n");
    }

    #[test]
    fn test_password_masks_graphemes() {
        let view = TextView {
            value: "pa🇫🇷s".to_string(),
            cursor: 4,
            state: PromptState::Active,
            ..TextView::password("Secret?")
        };
        let frame = view.render(&plain(), &tall());
        assert_eq!(frame.lines().nth(2).unwrap(), "│  ▪▪▪▪_");

        let submitted = TextView {
            state: PromptState::Submit,
            ..view
        };
        assert!(!submitted.render(&plain(), &tall()).contains("pa"));
    }
}
