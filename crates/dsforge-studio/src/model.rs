//! Brands and their themes.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use dsforge_tokens::{default_dark_tokens, default_tokens, TokenTree};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StudioError;

/// Light or dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(StudioError::UnknownMode(other.to_string())),
        }
    }
}

/// A named token tree in one mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub id: String,
    pub name: String,
    pub mode: ThemeMode,
    pub tokens: TokenTree,
}

impl Theme {
    /// Creates a theme with a fresh id.
    pub fn new(name: impl Into<String>, mode: ThemeMode, tokens: TokenTree) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            mode,
            tokens,
        }
    }
}

/// A named collection of themes.
///
/// A brand always holds at least one theme; [`Studio`](crate::Studio)
/// refuses to delete the last one and rejects snapshots that break this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub themes: Vec<Theme>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Brand {
    /// Creates a brand seeded with the default light and dark themes.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: new_id(),
            name: name.into(),
            description: description.into(),
            themes: vec![
                Theme::new("Light", ThemeMode::Light, default_tokens()),
                Theme::new("Dark", ThemeMode::Dark, default_dark_tokens()),
            ],
            created_at: now,
            updated_at: now,
        }
    }

    pub fn theme(&self, id: &str) -> Option<&Theme> {
        self.themes.iter().find(|theme| theme.id == id)
    }

    /// The first theme in `mode`, else the first theme.
    pub fn theme_for_mode(&self, mode: ThemeMode) -> Option<&Theme> {
        self.themes.get(self.theme_index_for_mode(mode))
    }

    pub(crate) fn theme_index_for_mode(&self, mode: ThemeMode) -> usize {
        self.themes
            .iter()
            .position(|theme| theme.mode == mode)
            .unwrap_or(0)
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

pub(crate) fn new_id() -> String {
    Uuid::new_v4().to_string()
}
