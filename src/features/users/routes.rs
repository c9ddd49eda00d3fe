use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::users::handlers;
use crate::features::users::services::UserService;

/// Public user routes (registration)
pub fn public_routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route("/api/users", post(handlers::create_user))
        .with_state(service)
}

/// Protected user routes (require JWT authentication)
pub fn protected_routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route("/api/users", get(handlers::list_users))
        .route(
            "/api/users/me",
            get(handlers::get_me)
                .put(handlers::update_me)
                .delete(handlers::delete_me),
        )
        .route(
            "/api/users/{id}",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .route(
            "/api/users/{id}/hcp-history",
            get(handlers::get_user_hcp_history),
        )
        .route("/api/users/{id}/clubs", get(handlers::get_user_clubs))
        .route(
            "/api/users/{id}/clubs/in-bag",
            get(handlers::get_user_clubs_in_bag),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{
        lazy_pool, with_admin_auth, with_player_auth, ADMIN_USER_ID, PLAYER_USER_ID,
    };
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    fn service() -> Arc<UserService> {
        Arc::new(UserService::new(lazy_pool()))
    }

    fn player_server() -> TestServer {
        TestServer::new(with_player_auth(protected_routes(service()))).unwrap()
    }

    #[tokio::test]
    async fn test_register_rejects_invalid_payload() {
        let server = TestServer::new(public_routes(service())).unwrap();
        let response = server
            .post("/api/users")
            .json(&json!({
                "username": "1bad name",
                "email": "not-an-email",
                "password": "short"
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
        assert!(body["errors"].as_array().is_some_and(|e| !e.is_empty()));
    }

    #[tokio::test]
    async fn test_register_rejects_malformed_json() {
        let server = TestServer::new(public_routes(service())).unwrap();
        let response = server
            .post("/api/users")
            .content_type("application/json")
            .bytes("{not json".into())
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_role_cannot_be_changed() {
        let response = player_server()
            .put(&format!("/api/users/{}", PLAYER_USER_ID))
            .json(&json!({ "role": "admin" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "Cannot update role via this endpoint");
    }

    #[tokio::test]
    async fn test_role_cannot_be_changed_via_me() {
        let response = player_server()
            .put("/api/users/me")
            .json(&json!({ "role": "admin" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_null_role_is_still_rejected() {
        let response = player_server()
            .put("/api/users/me")
            .json(&json!({ "role": null }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "Cannot update role via this endpoint");
    }

    #[tokio::test]
    async fn test_player_cannot_update_other_user() {
        let response = player_server()
            .put(&format!("/api/users/{}", ADMIN_USER_ID))
            .json(&json!({ "hcp": 12.0 }))
            .await;
        response.assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_player_cannot_delete_users() {
        let response = player_server()
            .delete(&format!("/api/users/{}", ADMIN_USER_ID))
            .await;
        response.assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_admin_update_of_other_user_is_still_validated() {
        let server = TestServer::new(with_admin_auth(protected_routes(service()))).unwrap();
        let response = server
            .put(&format!("/api/users/{}", PLAYER_USER_ID))
            .json(&json!({ "hcp": 60.0 }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "Validation failed");
    }

    #[tokio::test]
    async fn test_hcp_with_two_decimals_is_rejected() {
        let response = player_server()
            .put("/api/users/me")
            .json(&json!({ "hcp": 18.45 }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "Validation failed");
    }

    #[tokio::test]
    async fn test_protected_routes_require_a_user() {
        let server = TestServer::new(protected_routes(service())).unwrap();
        let response = server.get("/api/users/me").await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }
}
