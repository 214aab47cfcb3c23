//! Glyph sets for prompt chrome.

use std::env;
use std::sync::OnceLock;

/// Every glyph the renderers draw, in one capability-specific set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbols {
    /// Active / initial prompt marker.
    pub step_active: &'static str,
    /// Cancelled prompt marker.
    pub step_cancel: &'static str,
    /// Prompt in error state.
    pub step_error: &'static str,
    /// Submitted prompt marker.
    pub step_submit: &'static str,
    /// Top of an intro block.
    pub bar_start: &'static str,
    /// Vertical gutter.
    pub bar: &'static str,
    /// Bottom of a prompt block.
    pub bar_end: &'static str,
    /// Selected radio.
    pub radio_active: &'static str,
    /// Unselected radio.
    pub radio_inactive: &'static str,
    /// Checkbox under the cursor.
    pub checkbox_active: &'static str,
    /// Checked checkbox.
    pub checkbox_selected: &'static str,
    /// Unchecked checkbox.
    pub checkbox_inactive: &'static str,
    /// Password mask character.
    pub password_mask: &'static str,
    /// Horizontal rule.
    pub bar_h: &'static str,
    /// Top-right box corner.
    pub corner_top_right: &'static str,
    /// Left T-junction.
    pub connect_left: &'static str,
    /// Bottom-right box corner.
    pub corner_bottom_right: &'static str,
    /// Info log marker.
    pub info: &'static str,
    /// Success log marker.
    pub success: &'static str,
    /// Warning log marker.
    pub warn: &'static str,
    /// Error log marker.
    pub error: &'static str,
    /// Spinner animation frames.
    pub spinner_frames: &'static [&'static str],
    /// Spinner frame interval in milliseconds.
    pub spinner_interval_ms: u64,
}

impl Symbols {
    /// Glyphs for terminals that render box drawing and geometric shapes.
    pub const UNICODE: Self = Self {
        step_active: "◆",
        step_cancel: "■",
        step_error: "▲",
        step_submit: "◇",
        bar_start: "┌",
        bar: "│",
        bar_end: "└",
        radio_active: "●",
        radio_inactive: "○",
        checkbox_active: "◻",
        checkbox_selected: "◼",
        checkbox_inactive: "◻",
        password_mask: "▪",
        bar_h: "─",
        corner_top_right: "╮",
        connect_left: "├",
        corner_bottom_right: "╯",
        info: "●",
        success: "◆",
        warn: "▲",
        error: "■",
        spinner_frames: &["◒", "◐", "◓", "◑"],
        spinner_interval_ms: 80,
    };

    /// Plain ASCII fallback.
    pub const ASCII: Self = Self {
        step_active: "*",
        step_cancel: "x",
        step_error: "x",
        step_submit: "o",
        bar_start: "T",
        bar: "|",
        bar_end: "—",
        radio_active: ">",
        radio_inactive: " ",
        checkbox_active: "[•]",
        checkbox_selected: "[+]",
        checkbox_inactive: "[ ]",
        password_mask: "•",
        bar_h: "-",
        corner_top_right: "+",
        connect_left: "+",
        corner_bottom_right: "+",
        info: "•",
        success: "*",
        warn: "!",
        error: "x",
        spinner_frames: &["•", "o", "O", "0"],
        spinner_interval_ms: 120,
    };

    /// The unicode set.
    pub const fn unicode() -> &'static Self {
        &Self::UNICODE
    }

    /// The ASCII set.
    pub const fn ascii() -> &'static Self {
        &Self::ASCII
    }

    /// Pick the set for a capability flag.
    pub const fn for_capability(unicode: bool) -> &'static Self {
        if unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }

    /// The set matching the current process, resolved once.
    pub fn detect() -> &'static Self {
        Self::for_capability(unicode_supported())
    }
}

/// Whether the attached terminal can draw the unicode set.
///
/// Resolved from the environment on first call and cached for the process.
pub fn unicode_supported() -> bool {
    static SUPPORTED: OnceLock<bool> = OnceLock::new();
    *SUPPORTED.get_or_init(|| {
        let supported = detect_unicode(|key| env::var(key).ok());
        tracing::debug!(supported, "resolved unicode capability");
        supported
    })
}

fn detect_unicode(var: impl Fn(&str) -> Option<String>) -> bool {
    if cfg!(not(windows)) {
        return var("TERM").as_deref() != Some("linux");
    }

    var("WT_SESSION").is_some()
        || var("TERMINUS_SUBLIME").is_some()
        || var("ConEmuTask").as_deref() == Some("{cmd::Cmder}")
        || matches!(var("TERM_PROGRAM").as_deref(), Some("Terminus-Sublime" | "vscode"))
        || matches!(var("TERM").as_deref(), Some("xterm-256color" | "alacritty"))
        || var("TERMINAL_EMULATOR").as_deref() == Some("JetBrains-JediTerm")
}
