use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::tees::handlers;
use crate::features::tees::services::TeeService;

pub fn routes(service: Arc<TeeService>) -> Router {
    Router::new()
        .route("/api/tees", get(handlers::list_tees).post(handlers::create_tee))
        .route(
            "/api/tees/{id}",
            get(handlers::get_tee)
                .put(handlers::update_tee)
                .delete(handlers::delete_tee),
        )
        .route(
            "/api/tees/course/{course_id}",
            get(handlers::list_tees_by_course),
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
        let service = Arc::new(TeeService::new(lazy_pool()));
        TestServer::new(with_player_auth(routes(service))).unwrap()
    }

    #[tokio::test]
    async fn test_create_rejects_slope_out_of_range() {
        let response = server()
            .post("/api/tees")
            .json(&json!({
                "teeName": "White",
                "courseId": 1,
                "slopeRating": 160,
                "courseRating": 72.0
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_update_rejects_course_rating_of_hundred() {
        let response = server()
            .put("/api/tees/1")
            .json(&json!({ "courseRating": 100 }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_course_id_must_be_numeric() {
        let response = server().get("/api/tees/course/abc").await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
