use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};
use std::path::Path;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::modules::activities::use_cases::list_activities::inbound::http as list_http;
use crate::modules::activities::use_cases::signup_participant::inbound::http as signup_http;
use crate::modules::activities::use_cases::unregister_participant::inbound::http as unregister_http;
use crate::shell::state::AppState;

pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(root_redirect))
        .route("/activities", get(list_http::handle))
        .route(
            "/activities/{activity_name}/signup",
            post(signup_http::handle),
        )
        .route(
            "/activities/{activity_name}/unregister",
            post(unregister_http::handle),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root_redirect() -> Redirect {
    Redirect::temporary("/static/index.html")
}
