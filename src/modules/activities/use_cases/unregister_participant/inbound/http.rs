use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UnregisterParams {
    pub email: String,
}

#[derive(Serialize)]
pub struct UnregisterResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

// Both failure modes (unknown activity, absent participant) map to 404.
pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(params): Query<UnregisterParams>,
) -> impl IntoResponse {
    match state
        .registry
        .unregister(&activity_name, &params.email)
        .await
    {
        Ok(()) => (
            StatusCode::OK,
            Json(UnregisterResponse {
                message: format!("Unregistered {} from {}", params.email, activity_name),
            }),
        )
            .into_response(),
        Err(err) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                detail: err.to_string(),
            }),
        )
            .into_response(),
    }
}
