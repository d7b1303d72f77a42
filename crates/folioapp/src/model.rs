//! # Domain Model
//!
//! The data types shared by every folio component: [`ContentRecord`] (one
//! portfolio item), [`FilterState`] (what the visitor is currently asking
//! for), [`QueryMode`] (which of the two query semantics is active) and
//! [`ThemeState`] (the site-wide visual mode).
//!
//! ## Sentinels
//!
//! Two reserved values mean "no constraint":
//!
//! | Constant | Value | Used by |
//! |----------|-------|---------|
//! | [`ALL`] | `"all"` | search panel, both the category and technology axes |
//! | [`CHIP_ALL`] | `"All"` | category chips |
//!
//! The spelling differs on purpose: the search panel and the chips are two
//! separate surfaces with their own vocabularies, and matching is
//! case-sensitive on both.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Search-panel sentinel: matches every record on its axis.
pub const ALL: &str = "all";

/// Chip sentinel: matches every record.
pub const CHIP_ALL: &str = "All";

/// One displayable portfolio item.
///
/// Records are validated once when the [`ContentStore`] is built and are
/// never mutated afterwards.
///
/// [`ContentStore`]: crate::content::ContentStore
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRecord {
    /// Identity key, unique across the store.
    pub key: String,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Technology tags, in display order.
    pub tech: Vec<String>,
    pub features: Vec<String>,
    pub link: String,
}

impl ContentRecord {
    /// Whether `tag` is one of this record's technology tags (exact match).
    pub fn has_tech(&self, tag: &str) -> bool {
        self.tech.iter().any(|t| t == tag)
    }
}

/// The active search-panel inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub search_term: String,
    pub category: String,
    pub technology: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category: ALL.to_string(),
            technology: ALL.to_string(),
        }
    }
}

impl FilterState {
    /// True when no axis constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        self.search_term.is_empty() && self.category == ALL && self.technology == ALL
    }
}

/// Which query semantics the current view was computed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryMode {
    /// Three-axis AND search (`query::search`).
    #[default]
    Search,
    /// Single-axis OR chip filter keyed by `FilterState::category` (`query::chip_filter`).
    Chip,
}

/// The site-wide visual mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeState {
    #[default]
    Default,
    Hacker,
}

impl ThemeState {
    /// The persisted string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Hacker => "hacker",
        }
    }

    /// Parses a persisted value. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "default" => Some(Self::Default),
            "hacker" => Some(Self::Hacker),
            _ => None,
        }
    }

    /// The other state.
    pub fn toggled(self) -> Self {
        match self {
            Self::Default => Self::Hacker,
            Self::Hacker => Self::Default,
        }
    }
}

impl fmt::Display for ThemeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
