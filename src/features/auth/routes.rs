use crate::features::auth::handlers;
use crate::features::auth::services::AuthService;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Public auth routes (no authentication required)
pub fn public_routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/api/auth/login", post(handlers::login))
        .with_state(service)
}

/// Protected auth routes (require JWT authentication)
pub fn protected_routes() -> Router {
    Router::new().route("/api/auth/me", get(handlers::get_me))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::AuthConfig;
    use crate::core::middleware::auth_middleware;
    use crate::features::auth::model::UserRole;
    use crate::features::auth::services::TokenService;
    use crate::features::auth::JwtValidator;
    use crate::features::users::services::UserService;
    use crate::shared::test_helpers::lazy_pool;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;
    use std::time::Duration;

    const SECRET: &str = "router-test-secret-with-enough-length!!";

    fn auth_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: SECRET.to_string(),
            issuer: "golf-scorekeeper".to_string(),
            token_expiry: Duration::from_secs(600),
            jwt_leeway: Duration::from_secs(0),
        }
    }

    fn protected_server() -> TestServer {
        let validator = Arc::new(JwtValidator::new(
            SECRET,
            "golf-scorekeeper",
            Duration::from_secs(0),
        ));
        let app = protected_routes().route_layer(axum::middleware::from_fn_with_state(
            validator,
            auth_middleware,
        ));
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_me_requires_authorization_header() {
        let response = protected_server().get("/api/auth/me").await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_me_rejects_non_bearer_scheme() {
        let response = protected_server()
            .get("/api/auth/me")
            .add_header(
                axum::http::header::AUTHORIZATION,
                axum::http::HeaderValue::from_static("Basic dXNlcjpwYXNz"),
            )
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_me_returns_principal_for_valid_token() {
        let token = TokenService::new(&auth_config())
            .issue(9, "seve", UserRole::User)
            .unwrap();

        let response = protected_server()
            .get("/api/auth/me")
            .authorization_bearer(token.access_token)
            .await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["data"]["userId"], 9);
        assert_eq!(body["data"]["username"], "seve");
        assert_eq!(body["data"]["role"], "user");
    }

    #[tokio::test]
    async fn test_login_validates_email() {
        let users = Arc::new(UserService::new(lazy_pool()));
        let tokens = Arc::new(TokenService::new(&auth_config()));
        let server =
            TestServer::new(public_routes(Arc::new(AuthService::new(users, tokens)))).unwrap();

        let response = server
            .post("/api/auth/login")
            .json(&json!({ "email": "nope", "password": "whatever" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
