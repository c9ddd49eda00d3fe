use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::holes::handlers;
use crate::features::holes::services::HoleService;

pub fn routes(service: Arc<HoleService>) -> Router {
    Router::new()
        .route("/api/holes", get(handlers::list_holes).post(handlers::create_hole))
        .route("/api/holes/multi", post(handlers::create_holes))
        .route(
            "/api/holes/{id}",
            get(handlers::get_hole)
                .put(handlers::update_hole)
                .delete(handlers::delete_hole),
        )
        .route(
            "/api/holes/course/{course_id}/number/{hole_number}",
            get(handlers::get_hole_by_course_and_number),
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
        let service = Arc::new(HoleService::new(lazy_pool()));
        TestServer::new(with_player_auth(routes(service))).unwrap()
    }

    #[tokio::test]
    async fn test_create_rejects_handicap_out_of_range() {
        let response = server()
            .post("/api/holes")
            .json(&json!({ "courseId": 1, "holeNumber": 3, "handicap": 40 }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_green_center() {
        let response = server()
            .post("/api/holes")
            .json(&json!({
                "courseId": 1,
                "holeNumber": 3,
                "handicap": 11,
                "greenCenterLocation": { "type": "Point", "coordinates": [0.0, 120.0] }
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_multi_rejects_empty_list() {
        let response = server()
            .post("/api/holes/multi")
            .json(&json!({ "holes": [] }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_lookup_requires_numeric_hole_number() {
        let response = server().get("/api/holes/course/1/number/first").await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
