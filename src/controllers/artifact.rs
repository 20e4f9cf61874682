use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::{
    domain::artifact::{Artifact, ArtifactStore},
    error::AppResult,
};

#[derive(Debug, Serialize)]
pub struct ArtifactListResponse {
    pub artifacts: Vec<Artifact>,
}

pub struct ArtifactController {
    store: Arc<ArtifactStore>,
}

impl ArtifactController {
    pub fn new(store: Arc<ArtifactStore>) -> Self {
        Self { store }
    }

    /// GET /api/artifacts - List retained artifacts, newest first
    pub async fn list(
        State(controller): State<Arc<ArtifactController>>,
    ) -> AppResult<Json<ArtifactListResponse>> {
        let artifacts = controller.store.list().await?;
        Ok(Json(ArtifactListResponse { artifacts }))
    }

    /// GET /api/artifacts/:name - Download one artifact by stored name
    pub async fn download(
        State(controller): State<Arc<ArtifactController>>,
        Path(name): Path<String>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let payload = controller.store.read(&name).await?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "audio/mpeg".parse().unwrap());
        headers.insert(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{name}\"").parse().unwrap(),
        );

        Ok((StatusCode::OK, headers, Body::from(payload)))
    }
}
