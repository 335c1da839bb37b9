//! Light/dark theme flag owned by the dashboard shell.
//!
//! Not persisted: the flag lives as long as the mounted shell and always
//! starts light.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Class placed on `<body>` while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub dark: bool,
}

impl ThemeState {
    /// Flip the flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.dark = !self.dark;
        self.dark
    }

    /// Global marker class that styling reacts to, if any.
    #[must_use]
    pub fn marker(self) -> Option<&'static str> {
        self.dark.then_some(DARK_CLASS)
    }

    /// Header toggle glyph: the theme a click switches to.
    #[must_use]
    pub fn toggle_icon(self) -> &'static str {
        if self.dark { "☀️" } else { "🌙" }
    }
}
