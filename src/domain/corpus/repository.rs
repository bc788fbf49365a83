//! Corpus repository trait

use async_trait::async_trait;

use super::{Article, ArticleCorpus};
use crate::domain::error::DomainError;

#[cfg(test)]
use mockall::automock;

/// Repository owning the persisted article snapshot
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CorpusRepository: Send + Sync {
    /// Loads the current snapshot as a corpus
    ///
    /// Missing or malformed snapshot data yields an empty corpus rather than an error.
    async fn load(&self) -> ArticleCorpus;

    /// Replaces the snapshot wholesale; readers never observe a partial write
    async fn replace(&self, articles: Vec<Article>) -> Result<(), DomainError>;

    /// Number of articles currently stored
    async fn article_count(&self) -> usize {
        self.load().await.len()
    }
}
