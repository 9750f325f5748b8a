pub mod health;
pub mod prompts;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /prompts                                         list, create
/// /prompts/{id}                                    get, update, delete
/// /interactions                                    one page pass (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/prompts", prompts::prompt_router())
        .nest("/interactions", prompts::interaction_router())
}
