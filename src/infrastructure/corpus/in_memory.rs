//! In-memory corpus repository

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::corpus::{Article, ArticleCorpus, CorpusRepository};
use crate::domain::DomainError;

/// Corpus repository keeping the snapshot behind a swapped `Arc`
#[derive(Debug, Default)]
pub struct InMemoryCorpusRepository {
    snapshot: RwLock<Arc<Vec<Article>>>,
}

impl InMemoryCorpusRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(articles)),
        }
    }

    async fn current(&self) -> Arc<Vec<Article>> {
        self.snapshot.read().await.clone()
    }
}

#[async_trait]
impl CorpusRepository for InMemoryCorpusRepository {
    async fn load(&self) -> ArticleCorpus {
        ArticleCorpus::from_articles(&self.current().await)
    }

    async fn replace(&self, articles: Vec<Article>) -> Result<(), DomainError> {
        let next = Arc::new(articles);
        *self.snapshot.write().await = next;
        Ok(())
    }

    async fn article_count(&self) -> usize {
        self.current().await.len()
    }
}
