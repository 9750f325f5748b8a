//! Handlers for the prompt CRUD endpoints.
//!
//! The store-facing helpers (`create_record`, `update_record`,
//! `delete_record`) are shared with the interaction handler so both entry
//! points run the same validation and produce the same errors.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use promptbase_core::error::CoreError;
use promptbase_core::prompt::{self, normalize_field, PROMPT_ENTITY};
use promptbase_core::query::PromptQuery;
use promptbase_core::types::DbId;
use promptbase_db::models::prompt::{CreatePrompt, Prompt, UpdatePrompt};
use promptbase_db::repositories::PromptRepo;
use promptbase_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: PROMPT_ENTITY,
        id,
    })
}

/// Fetch a prompt, mapping a missing row to `NotFound`.
pub(crate) async fn ensure_prompt_exists(pool: &DbPool, id: DbId) -> AppResult<Prompt> {
    PromptRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// Trim, validate and insert a new prompt.
pub(crate) async fn create_record(pool: &DbPool, input: CreatePrompt) -> AppResult<Prompt> {
    let input = CreatePrompt {
        title: normalize_field(input.title),
        prompt: normalize_field(input.prompt),
        is_favorite: input.is_favorite,
    };
    prompt::validate_fields(&input.title, &input.prompt)?;

    let created = PromptRepo::create(pool, &input).await?;

    tracing::info!(
        prompt_id = created.id,
        is_favorite = created.is_favorite,
        "Prompt created"
    );

    Ok(created)
}

/// Trim, validate and overwrite an existing prompt.
///
/// A write that matches no row is `NotFound`, unless the row exists and the
/// caller supplied a stale `expected_updated_at`, which is a `Conflict`.
pub(crate) async fn update_record(
    pool: &DbPool,
    id: DbId,
    input: UpdatePrompt,
) -> AppResult<Prompt> {
    let input = UpdatePrompt {
        title: normalize_field(input.title),
        prompt: normalize_field(input.prompt),
        ..input
    };
    prompt::validate_fields(&input.title, &input.prompt)?;

    if let Some(updated) = PromptRepo::update(pool, id, &input).await? {
        tracing::info!(
            prompt_id = updated.id,
            is_favorite = updated.is_favorite,
            "Prompt updated"
        );
        return Ok(updated);
    }

    if input.expected_updated_at.is_some() && PromptRepo::exists(pool, id).await? {
        tracing::info!(prompt_id = id, "Prompt update rejected, record changed since read");
        return Err(AppError::Core(CoreError::Conflict(format!(
            "{PROMPT_ENTITY} with id {id} was modified by another session"
        ))));
    }

    Err(not_found(id))
}

/// Delete a prompt. Deleting an id that does not exist is a no-op.
pub(crate) async fn delete_record(pool: &DbPool, id: DbId) -> AppResult<()> {
    let deleted = PromptRepo::delete(pool, id).await?;
    if deleted {
        tracing::info!(prompt_id = id, "Prompt deleted");
    } else {
        tracing::debug!(prompt_id = id, "Delete of missing prompt ignored");
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// GET /prompts
// ---------------------------------------------------------------------------

/// List prompts matching the search text and favorite filter, sorted as
/// requested.
pub async fn list_prompts(
    State(state): State<AppState>,
    Query(params): Query<PromptQuery>,
) -> AppResult<impl IntoResponse> {
    params.validate()?;
    let prompts = PromptRepo::list(&state.pool, &params).await?;

    tracing::debug!(
        count = prompts.len(),
        sort = params.sort.column(),
        descending = params.descending,
        "Listed prompts"
    );

    Ok(Json(DataResponse { data: prompts }))
}

// ---------------------------------------------------------------------------
// POST /prompts
// ---------------------------------------------------------------------------

/// Create a new prompt.
pub async fn create_prompt(
    State(state): State<AppState>,
    Json(body): Json<CreatePrompt>,
) -> AppResult<impl IntoResponse> {
    let created = create_record(&state.pool, body).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

// ---------------------------------------------------------------------------
// GET /prompts/{id}
// ---------------------------------------------------------------------------

/// Get a single prompt by ID.
pub async fn get_prompt(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let prompt = ensure_prompt_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: prompt }))
}

// ---------------------------------------------------------------------------
// PUT /prompts/{id}
// ---------------------------------------------------------------------------

/// Overwrite title, body and favorite flag of a prompt.
pub async fn update_prompt(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<UpdatePrompt>,
) -> AppResult<impl IntoResponse> {
    let updated = update_record(&state.pool, id, body).await?;
    Ok(Json(DataResponse { data: updated }))
}

// ---------------------------------------------------------------------------
// DELETE /prompts/{id}
// ---------------------------------------------------------------------------

/// Delete a prompt by ID. Always answers 204, even for unknown ids.
pub async fn delete_prompt(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    delete_record(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
