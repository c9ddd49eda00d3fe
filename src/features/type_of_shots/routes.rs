use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::type_of_shots::handlers;
use crate::features::type_of_shots::services::TypeOfShotService;

pub fn routes(service: Arc<TypeOfShotService>) -> Router {
    Router::new()
        .route(
            "/api/type-of-shots",
            get(handlers::list_type_of_shots).post(handlers::create_type_of_shot),
        )
        .route(
            "/api/type-of-shots/{id}",
            get(handlers::get_type_of_shot)
                .put(handlers::update_type_of_shot)
                .delete(handlers::delete_type_of_shot),
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
        let service = Arc::new(TypeOfShotService::new(lazy_pool()));
        TestServer::new(with_player_auth(routes(service))).unwrap()
    }

    #[tokio::test]
    async fn test_create_requires_type_of_shot() {
        let response = server().post("/api/type-of-shots").json(&json!({})).await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_name() {
        let response = server()
            .post("/api/type-of-shots")
            .json(&json!({ "typeOfShot": "   " }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "Validation failed");
    }

    #[tokio::test]
    async fn test_create_rejects_long_name() {
        let response = server()
            .post("/api/type-of-shots")
            .json(&json!({ "typeOfShot": "x".repeat(101) }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_update_rejects_empty_name() {
        let response = server()
            .put("/api/type-of-shots/1")
            .json(&json!({ "typeOfShot": "" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_rejected() {
        let response = server().get("/api/type-of-shots/tee-shot").await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
