use super::error::ArtifactStoreError;
use super::model::Artifact;
use super::naming::{derive_name, AUDIO_EXT};
use chrono::{DateTime, Duration, Utc};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Outcome of one retention pass. Per-file failures are counted and logged,
/// never returned as errors.
#[derive(Debug, Default, Clone, Copy)]
pub struct SweepReport {
    pub scanned: usize,
    pub removed: usize,
    pub failed: usize,
}

/// Owns the retained directory. Every write and deletion of audio artifacts
/// goes through this store; nothing else touches the directory.
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the retained directory if it is missing. An already existing
    /// directory is not an error; any other failure is fatal for the caller.
    pub async fn ensure_root(&self) -> Result<(), ArtifactStoreError> {
        match tokio::fs::create_dir_all(&self.root).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(ArtifactStoreError::Directory(e)),
        }
    }

    /// Persist one synthesized payload under a name derived from the source
    /// text. The payload is opaque and written as-is.
    pub async fn create(
        &self,
        text: &str,
        payload: &[u8],
    ) -> Result<Artifact, ArtifactStoreError> {
        self.ensure_root().await?;

        let created_at = Utc::now();
        let name = derive_name(text, created_at);
        let path = self.root.join(&name);

        tokio::fs::write(&path, payload)
            .await
            .map_err(ArtifactStoreError::Write)?;

        tracing::info!(
            artifact = %name,
            size_bytes = payload.len(),
            "Artifact stored"
        );

        Ok(Artifact {
            name,
            path,
            size_bytes: payload.len() as u64,
            created_at,
        })
    }

    /// Delete every artifact whose modification time is older than the
    /// retention window.
    ///
    /// Best-effort by contract: a file that cannot be deleted (permissions,
    /// removed concurrently, vanished) is skipped and stays in place until
    /// the next pass. Unexpired artifacts are untouched, so repeated
    /// invocation is safe.
    pub async fn sweep(&self, retention: Duration) -> SweepReport {
        let mut report = SweepReport::default();

        let mut entries = match tokio::fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(error = %e, "Artifact directory not listable, skipping sweep");
                return report;
            }
        };

        let cutoff = Utc::now() - retention;

        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read directory entry during sweep");
                    report.failed += 1;
                    break;
                }
            };

            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(AUDIO_EXT) {
                continue;
            }
            report.scanned += 1;

            let modified = match entry.metadata().await.and_then(|m| m.modified()) {
                Ok(modified) => DateTime::<Utc>::from(modified),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Could not stat artifact, skipping");
                    report.failed += 1;
                    continue;
                }
            };

            if modified >= cutoff {
                continue;
            }

            match tokio::fs::remove_file(&path).await {
                Ok(()) => {
                    report.removed += 1;
                    tracing::info!(path = %path.display(), "Expired artifact removed");
                }
                Err(e) => {
                    report.failed += 1;
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Could not remove expired artifact, leaving for next sweep"
                    );
                }
            }
        }

        report
    }

    /// List retained artifacts, newest first. Membership is discovered by
    /// directory listing; there is no index or manifest.
    pub async fn list(&self) -> Result<Vec<Artifact>, ArtifactStoreError> {
        let mut artifacts = Vec::new();

        let mut entries = match tokio::fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(artifacts),
            Err(e) => return Err(ArtifactStoreError::Read(e)),
        };

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(AUDIO_EXT) {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()).map(String::from) else {
                continue;
            };

            let metadata = entry.metadata().await?;
            let created_at = metadata
                .modified()
                .map(DateTime::<Utc>::from)
                .unwrap_or_else(|_| Utc::now());

            artifacts.push(Artifact {
                name,
                path,
                size_bytes: metadata.len(),
                created_at,
            });
        }

        artifacts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(artifacts)
    }

    /// Read one artifact's payload by stored name. Names form a flat
    /// namespace; anything that could escape the directory is rejected.
    pub async fn read(&self, name: &str) -> Result<Vec<u8>, ArtifactStoreError> {
        if name.contains('/') || name.contains('\\') || name.contains("..") {
            return Err(ArtifactStoreError::InvalidName(format!(
                "name must not contain path separators: {name}"
            )));
        }
        if !name.ends_with(&format!(".{AUDIO_EXT}")) {
            return Err(ArtifactStoreError::InvalidName(format!(
                "name must end with .{AUDIO_EXT}: {name}"
            )));
        }

        match tokio::fs::read(self.root.join(name)).await {
            Ok(payload) => Ok(payload),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(ArtifactStoreError::NotFound(name.to_string()))
            }
            Err(e) => Err(ArtifactStoreError::Read(e)),
        }
    }
}
