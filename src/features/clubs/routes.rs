use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::clubs::handlers;
use crate::features::clubs::services::ClubService;

pub fn routes(service: Arc<ClubService>) -> Router {
    Router::new()
        .route(
            "/api/clubs",
            get(handlers::list_clubs).post(handlers::create_club),
        )
        .route(
            "/api/clubs/{id}",
            get(handlers::get_club)
                .put(handlers::update_club)
                .delete(handlers::delete_club),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{lazy_pool, with_player_auth};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    fn server() -> TestServer {
        let service = Arc::new(ClubService::new(lazy_pool()));
        TestServer::new(with_player_auth(routes(service))).unwrap()
    }

    #[tokio::test]
    async fn test_create_requires_club_name() {
        let response = server().post("/api/clubs").json(&json!({})).await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_name() {
        let response = server()
            .post("/api/clubs")
            .json(&json!({ "clubName": "  " }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "Validation failed");
    }

    #[tokio::test]
    async fn test_update_rejects_long_name() {
        let response = server()
            .put("/api/clubs/1")
            .json(&json!({ "clubName": "x".repeat(101) }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
