use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::hole_stats::handlers;
use crate::features::hole_stats::services::HoleStatsService;

pub fn routes(service: Arc<HoleStatsService>) -> Router {
    Router::new()
        .route(
            "/api/hole-stats",
            get(handlers::list_hole_stats).post(handlers::create_hole_stats),
        )
        .route(
            "/api/hole-stats/{id}",
            get(handlers::get_hole_stats)
                .put(handlers::update_hole_stats)
                .delete(handlers::delete_hole_stats),
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
        let service = Arc::new(HoleStatsService::new(lazy_pool()));
        TestServer::new(with_player_auth(routes(service))).unwrap()
    }

    #[tokio::test]
    async fn test_list_requires_scorecard_id() {
        let response = server().get("/api/hole-stats").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_non_numeric_id_uses_error_envelope() {
        let response = server().get("/api/hole-stats/abc").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_create_rejects_score_above_twenty() {
        let response = server()
            .post("/api/hole-stats")
            .json(&json!({ "scorecardId": 1, "holeId": 1, "score": 25, "putts": 2 }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_rejects_negative_putts() {
        let response = server()
            .put("/api/hole-stats/3")
            .json(&json!({ "putts": -1 }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
