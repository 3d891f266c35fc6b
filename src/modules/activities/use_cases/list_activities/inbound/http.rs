use axum::{Json, extract::State, response::IntoResponse};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.registry.all().await)
}

#[cfg(test)]
mod list_activities_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::activities::adapters::outbound::registry_in_memory::InMemoryActivityRegistry;
    use crate::modules::activities::core::activity::seed_activities;
    use crate::modules::activities::core::ports::ActivityRegistry;
    use crate::shell::state::AppState;

    use super::handle;

    fn make_test_state() -> AppState {
        AppState {
            registry: Arc::new(InMemoryActivityRegistry::seeded()),
        }
    }

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/activities", get(handle))
            .with_state(state)
    }

    #[tokio::test]
    async fn it_should_return_200_with_every_seeded_activity() {
        let response = app(make_test_state())
            .oneshot(Request::get("/activities").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, serde_json::to_value(seed_activities()).unwrap());
    }

    #[tokio::test]
    async fn it_should_reflect_a_prior_signup_in_the_listing() {
        let registry = Arc::new(InMemoryActivityRegistry::seeded());
        registry
            .signup("Gym Class", "new@mergington.edu")
            .await
            .expect("signup failed");
        let state = AppState {
            registry: registry.clone(),
        };

        let response = app(state)
            .oneshot(Request::get("/activities").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let participants = json["Gym Class"]["participants"].as_array().unwrap();
        assert!(participants.contains(&serde_json::json!("new@mergington.edu")));
    }
}
