use axum::{
    body::Body,
    extract::{
        rejection::JsonRejection, FromRequest, FromRequestParts, Path, Query, Request,
    },
    http::request::Parts,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedUser;

/// JSON body extractor whose rejections use the standard error envelope
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| Self(value))
            .map_err(AppJsonRejection)
    }
}

pub struct AppJsonRejection(JsonRejection);

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        let message = match self.0 {
            JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err.body_text()),
            JsonRejection::JsonSyntaxError(err) => {
                format!("Invalid JSON syntax: {}", err.body_text())
            }
            JsonRejection::MissingJsonContentType(_) => {
                "Expected request with `Content-Type: application/json`".to_string()
            }
            _ => "Failed to parse JSON body".to_string(),
        };

        AppError::BadRequest(message).into_response()
    }
}

/// Path extractor; malformed segments become a 400 in the error envelope
pub struct AppPath<T>(pub T);

impl<T, S> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(value)| Self(value))
            .map_err(|e| AppError::BadRequest(format!("Invalid path: {}", e.body_text())))
    }
}

/// Query string extractor with the same rejection shape as [`AppPath`]
pub struct AppQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for AppQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| Self(value))
            .map_err(|e| AppError::BadRequest(format!("Invalid query: {}", e.body_text())))
    }
}

/// The caller inserted by `auth_middleware`; missing means the route is unprotected
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::StatusCode,
        routing::{get, post},
        Router,
    };
    use axum_test::TestServer;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Payload {
        score: i32,
    }

    async fn echo(AppJson(payload): AppJson<Payload>) -> String {
        payload.score.to_string()
    }

    #[derive(Deserialize)]
    struct Filter {
        scorecard_id: i64,
    }

    async fn by_id(AppPath(id): AppPath<i64>) -> String {
        id.to_string()
    }

    async fn filtered(AppQuery(filter): AppQuery<Filter>) -> String {
        filter.scorecard_id.to_string()
    }

    fn server() -> TestServer {
        let app = Router::new()
            .route("/echo", post(echo))
            .route("/items/{id}", get(by_id))
            .route("/items", get(filtered));
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_valid_json_is_extracted() {
        let response = server()
            .post("/echo")
            .json(&serde_json::json!({ "score": 4 }))
            .await;
        response.assert_status_ok();
        response.assert_text("4");
    }

    #[tokio::test]
    async fn test_wrong_field_type_is_bad_request() {
        let response = server()
            .post("/echo")
            .json(&serde_json::json!({ "score": "four" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_bad_request() {
        let response = server().post("/echo").text("score=4").await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_path_is_extracted() {
        let response = server().get("/items/12").await;
        response.assert_status_ok();
        response.assert_text("12");
    }

    #[tokio::test]
    async fn test_bad_path_uses_error_envelope() {
        let response = server().get("/items/twelve").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
        assert!(body["message"]
            .as_str()
            .is_some_and(|m| m.starts_with("Invalid path")));
    }

    #[tokio::test]
    async fn test_missing_query_uses_error_envelope() {
        let response = server().get("/items").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
        assert!(body["message"]
            .as_str()
            .is_some_and(|m| m.starts_with("Invalid query")));
    }

    #[tokio::test]
    async fn test_query_is_extracted() {
        let response = server().get("/items?scorecard_id=7").await;
        response.assert_status_ok();
        response.assert_text("7");
    }
}
