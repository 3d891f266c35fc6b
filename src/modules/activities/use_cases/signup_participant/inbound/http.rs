use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::activities::core::ports::RegistryError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SignupParams {
    pub email: String,
}

#[derive(Serialize)]
pub struct SignupResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(params): Query<SignupParams>,
) -> impl IntoResponse {
    match state.registry.signup(&activity_name, &params.email).await {
        Ok(()) => (
            StatusCode::OK,
            Json(SignupResponse {
                message: format!("Signed up {} for {}", params.email, activity_name),
            }),
        )
            .into_response(),
        Err(err @ RegistryError::ActivityNotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                detail: err.to_string(),
            }),
        )
            .into_response(),
        Err(err) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                detail: err.to_string(),
            }),
        )
            .into_response(),
    }
}
