//! News fetch service contract

use std::fmt::Debug;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::corpus::Article;
use crate::domain::DomainError;

/// Batch of articles as returned by the news source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadlinesResponse {
    pub status: String,
    #[serde(default)]
    pub total_results: u64,
    #[serde(default)]
    pub articles: Vec<Article>,
}

impl HeadlinesResponse {
    pub fn ok(articles: Vec<Article>) -> Self {
        Self {
            status: "ok".to_string(),
            total_results: articles.len() as u64,
            articles,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Source of recent news articles
///
/// Any non-success answer is reported as `DomainError::Upstream`.
#[async_trait]
pub trait NewsProvider: Send + Sync + Debug {
    /// Articles matching a free-text query
    async fn search(&self, query: &str) -> Result<Vec<Article>, DomainError>;

    /// Current top headlines
    async fn top_headlines(&self) -> Result<HeadlinesResponse, DomainError>;

    fn provider_name(&self) -> &'static str;
}

#[cfg(test)]
pub mod mock {
    use std::sync::Mutex;

    use super::*;

    #[derive(Debug, Default)]
    pub struct MockNewsProvider {
        articles: Vec<Article>,
        error: Option<String>,
        queries: Mutex<Vec<String>>,
    }

    impl MockNewsProvider {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_articles(mut self, articles: Vec<Article>) -> Self {
            self.articles = articles;
            self
        }

        pub fn with_error(mut self, error: impl Into<String>) -> Self {
            self.error = Some(error.into());
            self
        }

        /// Queries received by `search`, in call order
        pub fn queries(&self) -> Vec<String> {
            self.queries.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl NewsProvider for MockNewsProvider {
        async fn search(&self, query: &str) -> Result<Vec<Article>, DomainError> {
            self.queries.lock().unwrap().push(query.to_string());

            if let Some(ref error) = self.error {
                return Err(DomainError::upstream(error));
            }

            Ok(self.articles.clone())
        }

        async fn top_headlines(&self) -> Result<HeadlinesResponse, DomainError> {
            if let Some(ref error) = self.error {
                return Err(DomainError::upstream(error));
            }

            Ok(HeadlinesResponse::ok(self.articles.clone()))
        }

        fn provider_name(&self) -> &'static str {
            "mock"
        }
    }
}
