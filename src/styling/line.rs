//! Styled line and string types for composable terminal output
//!
//! Styles live beside the text rather than inside it, so widths are always
//! measured on plain text and escape sequences never reach the width model.

use anstyle::Style;

use super::width::display_width;

/// A piece of text with an optional style
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyledString {
    pub text: String,
    pub style: Option<Style>,
}

impl StyledString {
    pub fn new(text: impl Into<String>, style: Option<Style>) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn raw(text: impl Into<String>) -> Self {
        Self::new(text, None)
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self::new(text, Some(style))
    }

    /// Returns the display width of the text
    pub fn width(&self) -> usize {
        display_width(&self.text)
    }

    /// Renders to a string with ANSI escape codes
    pub fn render(&self) -> String {
        if let Some(style) = &self.style {
            format!("{}{}{}", style.render(), self.text, style.render_reset())
        } else {
            self.text.clone()
        }
    }
}

/// A line composed of multiple styled strings
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyledLine {
    pub segments: Vec<StyledString>,
}

impl StyledLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a raw (unstyled) segment
    pub fn push_raw(&mut self, text: impl Into<String>) {
        self.segments.push(StyledString::raw(text));
    }

    /// Add a styled segment
    pub fn push_styled(&mut self, text: impl Into<String>, style: Style) {
        self.segments.push(StyledString::styled(text, style));
    }

    /// Returns the total display width
    pub fn width(&self) -> usize {
        self.segments.iter().map(StyledString::width).sum()
    }

    /// Renders the entire line with ANSI escape codes
    pub fn render(&self) -> String {
        self.segments.iter().map(StyledString::render).collect()
    }

    /// Returns the plain text without any styling
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Collapse the line into one segment carrying `style`.
    ///
    /// Any per-segment styles are dropped; the whole line gets a single
    /// opening and reset sequence.
    pub fn restyled(self, style: Style) -> StyledLine {
        let mut line = StyledLine::new();
        line.push_styled(self.plain_text(), style);
        line
    }
}
