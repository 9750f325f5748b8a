//! Prompt models and DTOs.
//!
//! Defines the database row struct for `prompts` and the create/update
//! inputs used by the API layer.

use promptbase_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A row from the `prompts` table.
///
/// `prompt` holds the body text.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Prompt {
    pub id: DbId,
    pub title: String,
    pub prompt: String,
    pub is_favorite: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Create DTO
// ---------------------------------------------------------------------------

/// Input for creating a new prompt.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePrompt {
    pub title: String,
    pub prompt: String,
    #[serde(default)]
    pub is_favorite: bool,
}

// ---------------------------------------------------------------------------
// Update DTO
// ---------------------------------------------------------------------------

/// Input for overwriting the mutable fields of a prompt.
///
/// When `expected_updated_at` is set the write only applies if the stored
/// `updated_at` still equals it.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePrompt {
    pub title: String,
    pub prompt: String,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub expected_updated_at: Option<Timestamp>,
}
