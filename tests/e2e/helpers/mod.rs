use anyhow::Result;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;


use api_client::TestClient;
use stub_tts::StubTtsRepository;

use audiotape_backend::controllers::{
    artifact::ArtifactController, session::SessionController, tts::TtsController,
};
use audiotape_backend::domain::artifact::ArtifactStore;
use audiotape_backend::domain::session::SessionState;
use audiotape_backend::domain::tts::TtsService;
use audiotape_backend::infrastructure::http::{build_router, AppDependencies};

/// Stub audio returned by the default provider
pub const STUB_AUDIO: &[u8] = b"ID3\x03stub-mp3-payload";

pub struct TestContext {
    pub client: TestClient,
    pub artifact_store: Arc<ArtifactStore>,
    _artifact_dir: tempfile::TempDir,
}

impl TestContext {
    /// Context whose provider always succeeds with `STUB_AUDIO`
    pub async fn new() -> Result<Self> {
        Self::with_provider(StubTtsRepository::with_audio(STUB_AUDIO.to_vec())).await
    }

    /// Context whose provider always fails with the given message
    pub async fn failing_provider(message: &str) -> Result<Self> {
        Self::with_provider(StubTtsRepository::failing(message)).await
    }

    async fn with_provider(stub: StubTtsRepository) -> Result<Self> {
        let artifact_dir = tempfile::tempdir()?;
        let artifact_store = Arc::new(ArtifactStore::new(artifact_dir.path()));

        let tts_service = Arc::new(TtsService::new(
            Arc::new(stub),
            artifact_store.clone(),
            chrono::Duration::days(7),
        ));
        let session_state = Arc::new(RwLock::new(SessionState::new()));

        let app = build_router(AppDependencies {
            artifact_store: artifact_store.clone(),
            tts_controller: Arc::new(TtsController::new(tts_service)),
            artifact_controller: Arc::new(ArtifactController::new(artifact_store.clone())),
            session_controller: Arc::new(SessionController::new(session_state)),
        });

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self {
            client: TestClient::new(&format!("http://{}", addr)),
            artifact_store,
            _artifact_dir: artifact_dir,
        })
    }
}
