//! Edit-session slot.
//!
//! Tracks which prompt, if any, is open for editing. The value travels with
//! every interaction (in and out) instead of living in server memory, so a
//! handler is a pure function of (session, query, action, store).

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// At most one prompt is open for editing at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditSession {
    #[serde(default)]
    pub editing_id: Option<DbId>,
}

impl EditSession {
    /// Open `id` for editing, replacing any current target.
    pub fn open(&mut self, id: DbId) {
        self.editing_id = Some(id);
    }

    /// Close the edit form.
    pub fn clear(&mut self) {
        self.editing_id = None;
    }

    /// Whether `id` is the record currently being edited.
    pub fn is_editing(&self, id: DbId) -> bool {
        self.editing_id == Some(id)
    }

    /// Record a successful update. The edit form closes whichever record
    /// it was open on.
    pub fn complete_update(&mut self) {
        self.clear();
    }

    /// Drop the edit target when its record no longer exists.
    pub fn reconcile(&mut self, target_exists: bool) {
        if !target_exists {
            self.clear();
        }
    }
}
