use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::scorecards::handlers;
use crate::features::scorecards::services::ScorecardService;

pub fn routes(service: Arc<ScorecardService>) -> Router {
    Router::new()
        .route(
            "/api/scorecards",
            get(handlers::list_scorecards).post(handlers::create_scorecard),
        )
        .route(
            "/api/scorecards/{id}",
            get(handlers::get_scorecard)
                .put(handlers::update_scorecard)
                .delete(handlers::delete_scorecard),
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
        let service = Arc::new(ScorecardService::new(lazy_pool()));
        TestServer::new(with_player_auth(routes(service))).unwrap()
    }

    #[tokio::test]
    async fn test_create_requires_scorecard_date() {
        let response = server()
            .post("/api/scorecards")
            .json(&json!({ "teeId": 1 }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_validates_nested_holes() {
        let response = server()
            .post("/api/scorecards")
            .json(&json!({
                "teeId": 1,
                "scorecardDate": "2024-06-01T08:00:00Z",
                "holeStats": [
                    { "holeId": 1, "score": 0, "putts": 2 }
                ]
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "Validation failed");
    }

    #[tokio::test]
    async fn test_create_validates_nested_shots() {
        let response = server()
            .post("/api/scorecards")
            .json(&json!({
                "teeId": 1,
                "scorecardDate": "2024-06-01T08:00:00Z",
                "holeStats": [
                    {
                        "holeId": 1, "score": 4, "putts": 2,
                        "shots": [{ "shotNumber": 1, "shortCenterLong": "far" }]
                    }
                ]
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_rejects_unknown_round_type() {
        let response = server()
            .put("/api/scorecards/1")
            .json(&json!({ "typeOfRound": "league" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_rejects_non_numeric_user_id() {
        let response = server().get("/api/scorecards?userId=me").await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
