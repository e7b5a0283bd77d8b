//! The light/dark theme flag.

use std::fmt;

/// Storage key the theme flag is kept under.
pub const THEME_KEY: &str = "theme";

/// Color theme of the picker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    /// The default.
    #[default]
    Light,
    /// Dark mode.
    Dark,
}

impl Theme {
    /// Interpret a stored value. Only the literal `"dark"` selects dark mode;
    /// anything else, including nothing, is light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// The value written to storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Whether this is dark mode.
    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// The other theme.
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_dark_literal_is_dark() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("Dark")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("dark ")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("")), Theme::Light);
        assert_eq!(Theme::from_stored(None), Theme::Light);
    }

    #[test]
    fn toggle_round_trip() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::default().is_dark());
    }

    #[test]
    fn stored_form_reads_back() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_stored(Some(theme.as_str())), theme);
        }
    }
}
