use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::user_clubs::handlers;
use crate::features::user_clubs::services::UserClubService;

pub fn routes(service: Arc<UserClubService>) -> Router {
    Router::new()
        .route(
            "/api/user-clubs",
            get(handlers::list_user_clubs).post(handlers::create_user_club),
        )
        .route(
            "/api/user-clubs/{id}",
            get(handlers::get_user_club)
                .put(handlers::update_user_club)
                .delete(handlers::delete_user_club),
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
        let service = Arc::new(UserClubService::new(lazy_pool()));
        TestServer::new(with_player_auth(routes(service))).unwrap()
    }

    #[tokio::test]
    async fn test_cannot_fill_someone_elses_bag() {
        let response = server()
            .post("/api/user-clubs")
            .json(&json!({ "userId": ADMIN_USER_ID, "clubId": 1 }))
            .await;
        response.assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_update_rejects_negative_counters() {
        let response = server()
            .put("/api/user-clubs/1")
            .json(&json!({ "averageDistance": -20 }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_rejected() {
        let response = server().get("/api/user-clubs/driver").await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
