//! List-query parameters for prompt listings.
//!
//! A [`PromptQuery`] carries the full search / sort / filter state of one
//! interaction. The three dimensions are independent and always applied
//! together: a title search filtered to favorites and sorted by title
//! ascending honours all three at once.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::prompt::validate_no_nul;

/// Escape character used in generated `ILIKE` patterns (PostgreSQL default).
pub const LIKE_ESCAPE: char = '\\';

// ---------------------------------------------------------------------------
// Sort field
// ---------------------------------------------------------------------------

/// Column a prompt listing is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    CreatedAt,
    Title,
}

impl SortField {
    /// Column name as stored in the database.
    ///
    /// This is the only source of identifiers interpolated into the listing
    /// SQL; user input never reaches the `ORDER BY` clause directly.
    pub fn column(&self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::Title => "title",
        }
    }
}

// ---------------------------------------------------------------------------
// Favorite filter
// ---------------------------------------------------------------------------

/// Restriction on the favorite flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FavoriteFilter {
    #[default]
    All,
    Favorites,
    #[serde(alias = "non-favorites")]
    NonFavorites,
}

impl FavoriteFilter {
    /// The `is_favorite` value rows must have, or `None` for no restriction.
    pub fn required_flag(&self) -> Option<bool> {
        match self {
            Self::All => None,
            Self::Favorites => Some(true),
            Self::NonFavorites => Some(false),
        }
    }
}

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

fn default_descending() -> bool {
    true
}

/// Search, sort and favorite-filter state for one listing.
///
/// Defaults match a fresh page: no search text, newest first, all records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub sort: SortField,
    #[serde(default = "default_descending")]
    pub descending: bool,
    #[serde(default, rename = "filter")]
    pub favorites: FavoriteFilter,
}

impl Default for PromptQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: SortField::default(),
            descending: default_descending(),
            favorites: FavoriteFilter::default(),
        }
    }
}

impl PromptQuery {
    /// `ASC` or `DESC`.
    pub fn direction(&self) -> &'static str {
        if self.descending {
            "DESC"
        } else {
            "ASC"
        }
    }

    /// Full `ORDER BY` body: the sort column, then `id` in the same direction.
    ///
    /// Ties on the sort column are broken by `id` so that flipping
    /// `descending` reverses the result exactly.
    pub fn order_clause(&self) -> String {
        let dir = self.direction();
        format!("{} {dir}, id {dir}", self.sort.column())
    }

    /// Reject search text the store cannot accept as a parameter.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_no_nul("Search text", &self.search)
    }

    /// `ILIKE` pattern matching any value that contains the search text.
    pub fn search_pattern(&self) -> String {
        contains_pattern(&self.search)
    }
}

// ---------------------------------------------------------------------------
// LIKE helpers
// ---------------------------------------------------------------------------

/// Escape `%`, `_` and the escape character itself so `text` matches literally
/// inside a `LIKE`/`ILIKE` pattern.
pub fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Build a `%…%` pattern matching values containing `text` as a substring.
///
/// An empty `text` yields `%%`, which matches every value.
pub fn contains_pattern(text: &str) -> String {
    format!("%{}%", escape_like(text))
}
