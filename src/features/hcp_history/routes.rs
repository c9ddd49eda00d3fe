use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::hcp_history::handlers;
use crate::features::hcp_history::services::HcpHistoryService;

pub fn routes(service: Arc<HcpHistoryService>) -> Router {
    Router::new()
        .route("/api/hcp-history", post(handlers::create_hcp_history))
        .route(
            "/api/hcp-history/{id}",
            get(handlers::get_hcp_history).put(handlers::update_hcp_history),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{lazy_pool, with_player_auth, ADMIN_USER_ID};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    fn server() -> TestServer {
        let service = Arc::new(HcpHistoryService::new(lazy_pool()));
        TestServer::new(with_player_auth(routes(service))).unwrap()
    }

    #[tokio::test]
    async fn test_create_for_another_player_is_forbidden() {
        let response = server()
            .post("/api/hcp-history")
            .json(&json!({ "userId": ADMIN_USER_ID, "hcp": 10.0, "hcpDate": "2024-01-01" }))
            .await;
        response.assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_create_rejects_out_of_range_hcp() {
        let response = server()
            .post("/api/hcp-history")
            .json(&json!({ "userId": 2, "hcp": 99.0, "hcpDate": "2024-01-01" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_rejects_bad_date() {
        let response = server()
            .post("/api/hcp-history")
            .json(&json!({ "userId": 2, "hcp": 10.0, "hcpDate": "yesterday" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
