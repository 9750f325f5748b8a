use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::error::STORE_UNAVAILABLE;
use crate::state::AppState;

/// Reachability of the prompt store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreStatus {
    Available,
    Unavailable,
}

/// Body of `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the store answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub store: StoreStatus,
    /// Same code the API errors carry when the store is down.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
}

/// GET /health -- 200 while the prompt store answers, 503 when it does not.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match promptbase_db::health_check(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                version: env!("CARGO_PKG_VERSION"),
                store: StoreStatus::Available,
                code: None,
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Health check found prompt store unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded",
                    version: env!("CARGO_PKG_VERSION"),
                    store: StoreStatus::Unavailable,
                    code: Some(STORE_UNAVAILABLE),
                }),
            )
        }
    }
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
