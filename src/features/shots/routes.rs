use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::shots::handlers;
use crate::features::shots::services::ShotService;

pub fn routes(service: Arc<ShotService>) -> Router {
    Router::new()
        .route("/api/shots", get(handlers::list_shots).post(handlers::create_shot))
        .route(
            "/api/shots/{id}",
            get(handlers::get_shot)
                .put(handlers::update_shot)
                .delete(handlers::delete_shot),
        )
        .route(
            "/api/shots/hole-stats/{hole_stats_id}/ids",
            get(handlers::list_shot_ids_by_hole_stats),
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
        let service = Arc::new(ShotService::new(lazy_pool()));
        TestServer::new(with_player_auth(routes(service))).unwrap()
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_direction() {
        let response = server()
            .post("/api/shots")
            .json(&json!({
                "holeStatsId": 1,
                "shotNumber": 1,
                "leftMiddleRight": "hook"
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_rejects_shot_number_zero() {
        let response = server()
            .post("/api/shots")
            .json(&json!({ "holeStatsId": 1, "shotNumber": 0 }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_rejects_invalid_end_location() {
        let response = server()
            .put("/api/shots/2")
            .json(&json!({
                "locationEnd": { "type": "Point", "coordinates": [-200.0, 10.0] }
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
