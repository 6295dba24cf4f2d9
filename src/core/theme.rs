//! Light/dark theme selection.

use std::str::FromStr;

use crate::core::error::ThemeParseError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value persisted in localStorage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Class applied to `<body>`.
    pub fn body_class(self) -> &'static str {
        match self {
            Self::Light => "light-theme",
            Self::Dark => "dark-theme",
        }
    }

    /// Label for the toggle button, naming the theme a click switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Passer au thème sombre",
            Self::Dark => "Passer au thème clair",
        }
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
    }

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_parse() {
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert!("Dark".parse::<Theme>().is_err());
        assert!("".parse::<Theme>().is_err());
    }

    #[test]
    fn test_body_class() {
        assert_eq!(Theme::Light.body_class(), "light-theme");
        assert_eq!(Theme::Dark.body_class(), "dark-theme");
    }
}
