mod core;
mod features;
mod shared;

use crate::core::config::Config;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::core::{database, middleware};
use crate::features::auth::routes as auth_routes;
use crate::features::auth::services::{AuthService, TokenService};
use crate::features::auth::JwtValidator;
use crate::features::clubs::{routes as clubs_routes, ClubService};
use crate::features::courses::{routes as courses_routes, CourseService};
use crate::features::establishments::{routes as establishments_routes, EstablishmentService};
use crate::features::hcp_history::{routes as hcp_history_routes, HcpHistoryService};
use crate::features::hole_lengths::{routes as hole_lengths_routes, HoleLengthService};
use crate::features::hole_stats::{routes as hole_stats_routes, HoleStatsService};
use crate::features::holes::{routes as holes_routes, HoleService};
use crate::features::scorecards::{routes as scorecards_routes, ScorecardService};
use crate::features::shots::{routes as shots_routes, ShotService};
use crate::features::tees::{routes as tees_routes, TeeService};
use crate::features::type_of_shots::{routes as type_of_shots_routes, TypeOfShotService};
use crate::features::user_clubs::{routes as user_clubs_routes, UserClubService};
use crate::features::users::{routes as users_routes, UserService};
use axum::extract::DefaultBodyLimit;
use axum::{middleware::from_fn, Router};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!(
        "Configuration loaded (tokio_worker_threads={}, pid={})",
        worker_threads,
        std::process::id()
    );

    let pool = database::create_pool(&config.database).await?;

    tracing::info!("Running database migrations...");
    database::run_migrations(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
    tracing::info!("Database migrations completed successfully");

    // Auth
    let jwt_validator = Arc::new(JwtValidator::new(
        &config.auth.jwt_secret,
        &config.auth.issuer,
        config.auth.jwt_leeway,
    ));
    let token_service = Arc::new(TokenService::new(&config.auth));

    // Players and their equipment
    let user_service = Arc::new(UserService::new(pool.clone()));
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_service),
        Arc::clone(&token_service),
    ));
    let hcp_history_service = Arc::new(HcpHistoryService::new(pool.clone()));
    let club_service = Arc::new(ClubService::new(pool.clone()));
    let user_club_service = Arc::new(UserClubService::new(pool.clone()));

    // Course data
    let establishment_service = Arc::new(EstablishmentService::new(pool.clone()));
    let course_service = Arc::new(CourseService::new(pool.clone()));
    let tee_service = Arc::new(TeeService::new(pool.clone()));
    let hole_service = Arc::new(HoleService::new(pool.clone()));
    let hole_length_service = Arc::new(HoleLengthService::new(pool.clone()));

    // Rounds
    let type_of_shot_service = Arc::new(TypeOfShotService::new(pool.clone()));
    let scorecard_service = Arc::new(ScorecardService::new(pool.clone()));
    let hole_stats_service = Arc::new(HoleStatsService::new(pool.clone()));
    let shot_service = Arc::new(ShotService::new(pool.clone()));
    tracing::info!("Services initialized");

    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    // Protected routes (require JWT authentication)
    let protected_routes = Router::new()
        .merge(auth_routes::protected_routes())
        .merge(users_routes::protected_routes(Arc::clone(&user_service)))
        .merge(hcp_history_routes::routes(hcp_history_service))
        .merge(clubs_routes::routes(club_service))
        .merge(user_clubs_routes::routes(user_club_service))
        .merge(establishments_routes::routes(establishment_service))
        .merge(courses_routes::routes(course_service))
        .merge(tees_routes::routes(tee_service))
        .merge(holes_routes::routes(hole_service))
        .merge(hole_lengths_routes::routes(hole_length_service))
        .merge(type_of_shots_routes::routes(type_of_shot_service))
        .merge(scorecards_routes::routes(scorecard_service))
        .merge(hole_stats_routes::routes(hole_stats_service))
        .merge(shots_routes::routes(shot_service))
        .route_layer(axum::middleware::from_fn_with_state(
            jwt_validator,
            middleware::auth_middleware,
        ));

    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    // Public routes (login and registration)
    let public_routes = Router::new()
        .merge(auth_routes::public_routes(auth_service))
        .merge(users_routes::public_routes(user_service));

    let app = Router::new()
        .merge(swagger)
        .merge(protected_routes)
        .merge(public_routes)
        .merge(health_route)
        .layer(DefaultBodyLimit::max(config.app.max_request_body_size))
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    socket.set_nodelay(true)?;

    let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
    socket.set_tcp_keepalive(&keepalive)?;

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
