use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::courses::handlers;
use crate::features::courses::services::CourseService;

pub fn routes(service: Arc<CourseService>) -> Router {
    Router::new()
        .route(
            "/api/courses",
            get(handlers::list_courses).post(handlers::create_course),
        )
        .route(
            "/api/courses/{id}",
            get(handlers::get_course)
                .put(handlers::update_course)
                .delete(handlers::delete_course),
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
        let service = Arc::new(CourseService::new(lazy_pool()));
        TestServer::new(with_player_auth(routes(service))).unwrap()
    }

    #[tokio::test]
    async fn test_create_requires_establishment() {
        let response = server()
            .post("/api/courses")
            .json(&json!({ "courseName": "North" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_rejects_zero_establishment_id() {
        let response = server()
            .put("/api/courses/5")
            .json(&json!({ "establishmentId": 0 }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "Validation failed");
    }
}
