use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::controllers::{
    artifact::ArtifactController, health, session::SessionController, tts::TtsController,
};
use crate::domain::artifact::ArtifactStore;
use crate::infrastructure::config::Config;
use crate::infrastructure::middleware::request_id_middleware;

/// Everything the router needs, wired by main or by the test harness
pub struct AppDependencies {
    pub artifact_store: Arc<ArtifactStore>,
    pub tts_controller: Arc<TtsController>,
    pub artifact_controller: Arc<ArtifactController>,
    pub session_controller: Arc<SessionController>,
}

/// Build the application router. Shared between the binary and the e2e tests.
pub fn build_router(deps: AppDependencies) -> Router {
    let tts_routes = Router::new()
        .route("/api/tts/synthesize", post(TtsController::synthesize))
        .with_state(deps.tts_controller);

    let artifact_routes = Router::new()
        .route("/api/artifacts", get(ArtifactController::list))
        .route("/api/artifacts/:name", get(ArtifactController::download))
        .with_state(deps.artifact_controller);

    let session_routes = Router::new()
        .route(
            "/api/session",
            get(SessionController::get).put(SessionController::update),
        )
        .route("/api/session/example", post(SessionController::load_example))
        .route("/api/session/clear", post(SessionController::clear))
        .with_state(deps.session_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(deps.artifact_store)
        .merge(tts_routes)
        .merge(artifact_routes)
        .merge(session_routes)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    deps: AppDependencies,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(deps);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
