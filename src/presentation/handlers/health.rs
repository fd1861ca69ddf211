use crate::infrastructure::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

/// Health check endpoint reporting the donor store size
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up")
    ),
    tag = "health"
)]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let donors = state.donors.list().await;

    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "donors": donors.len()
        })),
    )
}
