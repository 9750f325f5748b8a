//! Handler for the single-page interaction endpoint.
//!
//! Each request is one full pass of the prompt page: apply at most one
//! action, re-run the listing with the submitted search / sort / filter
//! state, and hand the (possibly changed) edit session back to the client.
//! Nothing about the page is kept on the server between requests.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use promptbase_core::query::PromptQuery;
use promptbase_core::session::EditSession;
use promptbase_core::types::DbId;
use promptbase_db::models::prompt::{CreatePrompt, Prompt, UpdatePrompt};
use promptbase_db::repositories::PromptRepo;

use crate::error::AppResult;
use crate::handlers::prompts::{create_record, delete_record, update_record};
use crate::response::DataResponse;
use crate::state::AppState;

pub const NOTICE_CREATED: &str = "Prompt added successfully!";
pub const NOTICE_UPDATED: &str = "Prompt updated successfully!";
pub const NOTICE_EDIT_TARGET_MISSING: &str = "Prompt not found.";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// What the user did on this pass.
#[derive(Debug, Default, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Plain re-render (search box, sort or filter changed).
    #[default]
    None,
    Create {
        fields: CreatePrompt,
    },
    OpenEdit {
        id: DbId,
    },
    CloseEdit,
    Update {
        id: DbId,
        fields: UpdatePrompt,
    },
    Delete {
        id: DbId,
    },
}

/// Request body for `POST /interactions`.
#[derive(Debug, Deserialize)]
pub struct InteractionRequest {
    #[serde(default)]
    pub session: EditSession,
    #[serde(default)]
    pub query: PromptQuery,
    #[serde(default)]
    pub action: Action,
}

/// Everything needed to draw the page after this pass.
#[derive(Debug, Serialize)]
pub struct PageView {
    pub session: EditSession,
    pub prompts: Vec<Prompt>,
    /// The record whose edit form is open, if any.
    pub editing: Option<Prompt>,
    pub notice: Option<&'static str>,
}

// ---------------------------------------------------------------------------
// POST /interactions
// ---------------------------------------------------------------------------

/// Apply one action and return the re-derived page view.
///
/// A failing action (validation, missing record, store error) fails the
/// whole request; nothing is written and the client keeps its previous view.
pub async fn interact(
    State(state): State<AppState>,
    Json(body): Json<InteractionRequest>,
) -> AppResult<Json<DataResponse<PageView>>> {
    let pool = &state.pool;
    let mut session = body.session;
    body.query.validate()?;

    let mut notice = match body.action {
        Action::None => None,
        Action::Create { fields } => {
            create_record(pool, fields).await?;
            Some(NOTICE_CREATED)
        }
        Action::OpenEdit { id } => {
            session.open(id);
            None
        }
        Action::CloseEdit => {
            session.clear();
            None
        }
        Action::Update { id, fields } => {
            update_record(pool, id, fields).await?;
            session.complete_update();
            Some(NOTICE_UPDATED)
        }
        Action::Delete { id } => {
            delete_record(pool, id).await?;
            if session.is_editing(id) {
                session.clear();
            }
            None
        }
    };

    let prompts = PromptRepo::list(pool, &body.query).await?;

    let editing = match session.editing_id {
        Some(id) => {
            let found = PromptRepo::find_by_id(pool, id).await?;
            session.reconcile(found.is_some());
            if found.is_none() {
                notice = notice.or(Some(NOTICE_EDIT_TARGET_MISSING));
            }
            found
        }
        None => None,
    };

    tracing::debug!(
        count = prompts.len(),
        editing_id = ?session.editing_id,
        "Interaction rendered"
    );

    Ok(Json(DataResponse {
        data: PageView {
            session,
            prompts,
            editing,
            notice,
        },
    }))
}
