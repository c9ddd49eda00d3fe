use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::hole_lengths::handlers;
use crate::features::hole_lengths::services::HoleLengthService;

pub fn routes(service: Arc<HoleLengthService>) -> Router {
    Router::new()
        .route(
            "/api/hole-lengths",
            get(handlers::list_hole_lengths).post(handlers::create_hole_length),
        )
        .route(
            "/api/hole-lengths/{id}",
            get(handlers::get_hole_length)
                .put(handlers::update_hole_length)
                .delete(handlers::delete_hole_length),
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
        let service = Arc::new(HoleLengthService::new(lazy_pool()));
        TestServer::new(with_player_auth(routes(service))).unwrap()
    }

    #[tokio::test]
    async fn test_create_rejects_par_seven() {
        let response = server()
            .post("/api/hole-lengths")
            .json(&json!({ "holeId": 1, "teeId": 1, "length": 480, "par": 7 }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_rejects_zero_length() {
        let response = server()
            .put("/api/hole-lengths/4")
            .json(&json!({ "length": 0 }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
