//! JSON snapshot file corpus repository

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::domain::corpus::{Article, ArticleCorpus, CorpusRepository};
use crate::domain::DomainError;

#[derive(Debug, Serialize)]
struct SnapshotRef<'a> {
    articles: &'a [Article],
}

/// Accepts the wrapped form this repository writes and a bare article list
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Snapshot {
    Wrapped { articles: Vec<Article> },
    Bare(Vec<Article>),
}

impl Snapshot {
    fn into_articles(self) -> Vec<Article> {
        match self {
            Self::Wrapped { articles } | Self::Bare(articles) => articles,
        }
    }
}

/// Corpus repository persisting the latest article batch as a JSON file
///
/// A write lands in a temporary file next to the snapshot and is renamed over
/// it, so readers see either the previous or the new snapshot.
#[derive(Debug)]
pub struct FileCorpusRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileCorpusRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    async fn read_articles(&self) -> Vec<Article> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No corpus snapshot yet");
                return Vec::new();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read corpus snapshot");
                return Vec::new();
            }
        };

        match serde_json::from_slice::<Snapshot>(&bytes) {
            Ok(snapshot) => snapshot.into_articles(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Malformed corpus snapshot");
                Vec::new()
            }
        }
    }
}

fn write_snapshot(path: &Path, payload: &[u8]) -> Result<(), DomainError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    std::fs::create_dir_all(&dir).map_err(|e| {
        DomainError::storage(format!("Failed to create '{}': {}", dir.display(), e))
    })?;

    // Dropped (and deleted) on every early return below
    let mut temp = tempfile::NamedTempFile::new_in(&dir)
        .map_err(|e| DomainError::storage(format!("Failed to create temp file: {}", e)))?;

    temp.write_all(payload)
        .and_then(|_| temp.as_file().sync_all())
        .map_err(|e| DomainError::storage(format!("Failed to write snapshot: {}", e)))?;

    temp.persist(path).map_err(|e| {
        DomainError::storage(format!("Failed to replace '{}': {}", path.display(), e.error))
    })?;

    Ok(())
}

#[async_trait]
impl CorpusRepository for FileCorpusRepository {
    async fn load(&self) -> ArticleCorpus {
        ArticleCorpus::from_articles(&self.read_articles().await)
    }

    async fn replace(&self, articles: Vec<Article>) -> Result<(), DomainError> {
        let payload = serde_json::to_vec_pretty(&SnapshotRef {
            articles: &articles,
        })
        .map_err(|e| DomainError::storage(format!("Failed to serialize snapshot: {}", e)))?;

        let _guard = self.write_lock.lock().await;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || write_snapshot(&path, &payload))
            .await
            .map_err(|e| DomainError::internal(format!("Snapshot writer panicked: {}", e)))??;

        info!(
            path = %self.path.display(),
            articles = articles.len(),
            "Replaced corpus snapshot"
        );

        Ok(())
    }

    async fn article_count(&self) -> usize {
        self.read_articles().await.len()
    }
}
