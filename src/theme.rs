//! UI theme selection.
//!
//! Every theme is a separate asset tree bundled into the binary. Unknown
//! theme names never produce an error; callers fall back to a default.

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// Available UI themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Sidebar of operations beside a detail pane
    #[default]
    Default,
    /// Minimal, borderless layout
    Minimal,
    /// Gradient header and card layout
    Modern,
}

impl Theme {
    /// All themes, in the order offered to the UI.
    pub const ALL: [Theme; 3] = [Theme::Default, Theme::Minimal, Theme::Modern];

    pub const fn as_str(self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Minimal => "minimal",
            Theme::Modern => "modern",
        }
    }

    /// Picks the theme named by a request, or `fallback` when the name is
    /// absent or not one of [`Theme::ALL`].
    pub fn select(requested: Option<&str>, fallback: Theme) -> Theme {
        requested
            .and_then(|name| name.parse().ok())
            .unwrap_or(fallback)
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unknown UI theme: {0}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.as_str() == s)
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}
