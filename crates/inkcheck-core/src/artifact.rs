//! Artifact storage - screenshot evidence of a verification run
//!
//! Artifacts live at fixed, literal paths under the output directory
//! (`01_main_page.png` and friends). A rerun overwrites them in place;
//! inkcheck never deletes an artifact.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;

use crate::{CheckError, Result};

/// Metadata for a stored screenshot artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    /// Artifact name (file stem, e.g. `01_main_page`)
    pub name: String,
    /// Absolute path the artifact was written to
    pub path: PathBuf,
    /// Size in bytes (always non-zero)
    pub size_bytes: u64,
    /// When captured
    pub captured_at: DateTime<Utc>,
}

/// Writes screenshot artifacts under a fixed output directory
pub struct ArtifactStore {
    output_dir: PathBuf,
}

impl ArtifactStore {
    /// Create a store rooted at the given output directory
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Output directory this store writes into
    pub fn output_dir(&self) -> &PathBuf {
        &self.output_dir
    }

    /// Store PNG screenshot data as `{name}.png`
    ///
    /// Rejects empty payloads: a zero-byte screenshot is never valid
    /// evidence.
    pub async fn store(&self, name: &str, data: &[u8]) -> Result<Artifact> {
        if data.is_empty() {
            return Err(CheckError::Screenshot(format!(
                "Empty screenshot payload for '{}'",
                name
            )));
        }

        fs::create_dir_all(&self.output_dir).await?;

        let path = self.output_dir.join(format!("{}.png", name));
        fs::write(&path, data).await?;

        tracing::info!(
            "Screenshot stored: {} ({} bytes)",
            path.display(),
            data.len()
        );

        Ok(Artifact {
            name: name.to_string(),
            path,
            size_bytes: data.len() as u64,
            captured_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Smallest valid-enough payload for store tests; content is opaque
    // to the store.
    const FAKE_PNG: &[u8] = b"\x89PNG\r\n\x1a\n fake";

    #[tokio::test]
    async fn test_store_writes_literal_path() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path().join("verification"));

        let artifact = store.store("01_main_page", FAKE_PNG).await.unwrap();

        assert_eq!(
            artifact.path,
            dir.path().join("verification").join("01_main_page.png")
        );
        assert!(artifact.path.exists());
        assert_eq!(artifact.size_bytes, FAKE_PNG.len() as u64);
        assert!(artifact.size_bytes > 0);
    }

    #[tokio::test]
    async fn test_store_rejects_empty_payload() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path().to_path_buf());

        let err = store.store("02_booking_success", &[]).await.unwrap_err();
        assert!(matches!(err, CheckError::Screenshot(_)));
    }

    #[tokio::test]
    async fn test_rerun_overwrites_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path().to_path_buf());

        let first = store.store("03_portfolio_page", FAKE_PNG).await.unwrap();
        let second = store
            .store("03_portfolio_page", b"different bytes")
            .await
            .unwrap();

        // Path-identical, content replaced
        assert_eq!(first.path, second.path);
        let on_disk = std::fs::read(&second.path).unwrap();
        assert_eq!(on_disk, b"different bytes");
    }
}
