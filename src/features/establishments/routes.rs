use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::establishments::handlers;
use crate::features::establishments::services::EstablishmentService;

pub fn routes(service: Arc<EstablishmentService>) -> Router {
    Router::new()
        .route(
            "/api/establishments",
            get(handlers::list_establishments).post(handlers::create_establishment),
        )
        .route(
            "/api/establishments/{id}",
            get(handlers::get_establishment)
                .put(handlers::update_establishment)
                .delete(handlers::delete_establishment),
        )
        .route(
            "/api/establishments/location/{lng}/{lat}",
            get(handlers::find_establishments_nearby),
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
        let service = Arc::new(EstablishmentService::new(lazy_pool()));
        TestServer::new(with_player_auth(routes(service))).unwrap()
    }

    #[tokio::test]
    async fn test_nearby_rejects_out_of_range_latitude() {
        let response = server().get("/api/establishments/location/4.9/95.0").await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_nearby_rejects_oversized_radius() {
        let response = server()
            .get("/api/establishments/location/4.9/52.3")
            .add_query_param("radius", 60000)
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_nearby_rejects_negative_radius() {
        let response = server()
            .get("/api/establishments/location/4.9/52.3")
            .add_query_param("radius", -5)
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_requires_geojson_point() {
        let response = server()
            .post("/api/establishments")
            .json(&json!({
                "establishmentName": "Links",
                "abbreviation": "LNK",
                "establishmentNumber": 1,
                "location": { "type": "Polygon", "coordinates": [1.0, 2.0] }
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_rejects_blank_name() {
        let response = server()
            .put("/api/establishments/3")
            .json(&json!({ "establishmentName": "" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
