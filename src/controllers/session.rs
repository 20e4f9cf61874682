use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::session::SessionState;

#[derive(Debug, Deserialize)]
pub struct UpdateSessionRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub text: String,
    pub chars: usize,
}

pub struct SessionController {
    state: Arc<RwLock<SessionState>>,
}

impl SessionController {
    pub fn new(state: Arc<RwLock<SessionState>>) -> Self {
        Self { state }
    }

    fn response(state: &SessionState) -> SessionResponse {
        SessionResponse {
            text: state.text().to_string(),
            chars: state.text().chars().count(),
        }
    }

    /// GET /api/session - Current text being edited
    pub async fn get(
        State(controller): State<Arc<SessionController>>,
    ) -> Json<SessionResponse> {
        let state = controller.state.read().await;
        Json(Self::response(&state))
    }

    /// PUT /api/session - Replace the current text
    pub async fn update(
        State(controller): State<Arc<SessionController>>,
        Json(request): Json<UpdateSessionRequest>,
    ) -> Json<SessionResponse> {
        let mut state = controller.state.write().await;
        state.set_text(request.text);
        Json(Self::response(&state))
    }

    /// POST /api/session/example - Load the built-in example passage
    pub async fn load_example(
        State(controller): State<Arc<SessionController>>,
    ) -> Json<SessionResponse> {
        let mut state = controller.state.write().await;
        state.load_example();
        Json(Self::response(&state))
    }

    /// POST /api/session/clear - Reset the text to empty
    pub async fn clear(
        State(controller): State<Arc<SessionController>>,
    ) -> Json<SessionResponse> {
        let mut state = controller.state.write().await;
        state.clear();
        Json(Self::response(&state))
    }
}
