//! HTTP router.

mod api;

use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::AppState;

pub use api::{
    ExerciseCreate, HealthResponse, ObservationUpdate, SessionCreate, StudentInput,
};

/// Create the HTTP router with all routes configured.
///
/// CORS is wide open: the expected deployment is a local instructor tablet
/// with a browser frontend on a different origin.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(api::root))
        .route("/api/health", get(api::health))
        .route("/sessions", get(api::list_sessions).post(api::create_session))
        .route("/sessions/:session_id", get(api::get_session))
        .route("/sessions/:session_id/exercises", post(api::create_exercise))
        .route("/sessions/:session_id/report", get(api::session_report))
        .route(
            "/exercises/:exercise_id/observations/:observation_id",
            put(api::update_observation),
        )
        .route("/exercises/:exercise_id/complete", put(api::complete_exercise))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;

    #[tokio::test]
    async fn router_has_health_endpoint() {
        let state = Arc::new(AppState::new());
        let server = TestServer::new(create_router(state)).unwrap();

        let response = server.get("/api/health").await;
        response.assert_status_ok();
    }

    #[tokio::test]
    async fn root_returns_banner() {
        let state = Arc::new(AppState::new());
        let server = TestServer::new(create_router(state)).unwrap();

        let response = server.get("/").await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert!(body["message"].as_str().unwrap().contains("checkride"));
    }
}
