use std::sync::Arc;
use tokio::sync::RwLock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use audiotape_backend::controllers::{
    artifact::ArtifactController, session::SessionController, tts::TtsController,
};
use audiotape_backend::domain::artifact::ArtifactStore;
use audiotape_backend::domain::session::SessionState;
use audiotape_backend::domain::tts::TtsService;
use audiotape_backend::infrastructure::config::{Config, LogFormat};
use audiotape_backend::infrastructure::http::{start_http_server, AppDependencies};
use audiotape_backend::infrastructure::repositories::GoogleTtsRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting audiotape backend on {}:{}",
        config.host,
        config.port
    );

    // The artifact store exclusively owns the retained directory
    let artifact_store = Arc::new(ArtifactStore::new(config.artifact_dir.clone()));
    artifact_store.ensure_root().await?;
    tracing::info!(
        dir = %config.artifact_dir.display(),
        retention_days = config.retention_days,
        "Artifact store ready"
    );

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate the speech provider
    let tts_repo = Arc::new(GoogleTtsRepository::new());

    // 2. Instantiate services (inject provider and store)
    let tts_service = Arc::new(TtsService::new(
        tts_repo,
        artifact_store.clone(),
        config.retention(),
    ));

    // 3. Session state, injected into the handlers that use it
    let session_state = Arc::new(RwLock::new(SessionState::new()));

    // 4. Instantiate controllers (inject services)
    let tts_controller = Arc::new(TtsController::new(tts_service));
    let artifact_controller = Arc::new(ArtifactController::new(artifact_store.clone()));
    let session_controller = Arc::new(SessionController::new(session_state));

    let config = Arc::new(config);

    // Start HTTP server with all routes
    start_http_server(
        config,
        AppDependencies {
            artifact_store,
            tts_controller,
            artifact_controller,
            session_controller,
        },
    )
    .await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "audiotape_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "audiotape_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
