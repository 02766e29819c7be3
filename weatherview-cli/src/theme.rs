//! Terminal palette for the light/dark toggle.
//!
//! The browser mirrors the theme flag onto the document root; here it selects
//! the escape codes the renderer paints with.

pub const RESET: &str = "\x1b[0m";

/// ANSI style set selected by the theme flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Headline style (location name).
    pub heading: &'static str,
    /// Regular card text.
    pub text: &'static str,
    /// Secondary text (description, humidity, the loading line).
    pub dim: &'static str,
    /// Error message style.
    pub error: &'static str,
}

const LIGHT: Palette = Palette {
    heading: "\x1b[1;34m",
    text: "\x1b[39m",
    dim: "\x1b[90m",
    error: "\x1b[31m",
};

const DARK: Palette = Palette {
    heading: "\x1b[1;33m",
    text: "\x1b[97m",
    dim: "\x1b[37m",
    error: "\x1b[91m",
};

impl Palette {
    pub fn for_mode(dark: bool) -> Self {
        if dark { DARK } else { LIGHT }
    }
}

/// Label for the theme entry in the action menu, showing the mode a toggle
/// would switch to.
pub fn toggle_label(dark: bool) -> &'static str {
    if dark {
        "Switch to light mode \u{2600}\u{fe0f}"
    } else {
        "Switch to dark mode \u{1f319}"
    }
}
