//! Route definitions for prompts and page interactions.
//!
//! ```text
//! PROMPTS (mounted at /prompts):
//! GET    /                                   list_prompts
//! POST   /                                   create_prompt
//! GET    /{id}                               get_prompt
//! PUT    /{id}                               update_prompt
//! DELETE /{id}                               delete_prompt
//!
//! INTERACTIONS (mounted at /interactions):
//! POST   /                                   interact
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{interactions, prompts};
use crate::state::AppState;

/// Prompt CRUD routes -- mounted at `/prompts`.
pub fn prompt_router() -> Router<AppState> {
    Router::new()
        .route("/", get(prompts::list_prompts).post(prompts::create_prompt))
        .route(
            "/{id}",
            get(prompts::get_prompt)
                .put(prompts::update_prompt)
                .delete(prompts::delete_prompt),
        )
}

/// Page interaction route -- mounted at `/interactions`.
pub fn interaction_router() -> Router<AppState> {
    Router::new().route("/", post(interactions::interact))
}
