//! The two-valued theme type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Error returned when a string is neither `light` nor `dark`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid theme value: {0:?}")]
pub struct ParseThemeError(pub String);

/// UI appearance mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light appearance; also the fallback when nothing else is known.
    #[default]
    Light,
    /// Dark appearance.
    Dark,
}

impl Theme {
    /// Both values, in declaration order.
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// Wire/attribute string for this theme.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Map the system "prefers dark" signal onto a theme.
    #[must_use]
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ParseThemeError;

    /// Exact, case-sensitive match against `light` and `dark`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_owned())),
        }
    }
}
