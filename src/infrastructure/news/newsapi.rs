//! NewsAPI client

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::corpus::Article;
use crate::domain::news::{HeadlinesResponse, NewsProvider};
use crate::domain::DomainError;
use crate::infrastructure::http_client::HttpClientTrait;

pub const DEFAULT_NEWSAPI_BASE_URL: &str = "https://newsapi.org";

/// Request parameters shared by every NewsAPI call
#[derive(Debug, Clone)]
pub struct NewsApiOptions {
    pub language: String,
    pub country: String,
    pub page_size: u32,
}

impl Default for NewsApiOptions {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            country: "us".to_string(),
            page_size: 100,
        }
    }
}

/// NewsAPI (`/v2/everything`, `/v2/top-headlines`) provider
#[derive(Debug)]
pub struct NewsApiProvider<C: HttpClientTrait> {
    client: C,
    api_key: String,
    base_url: String,
    options: NewsApiOptions,
}

impl<C: HttpClientTrait> NewsApiProvider<C> {
    pub fn new(client: C, api_key: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, DEFAULT_NEWSAPI_BASE_URL)
    }

    pub fn with_base_url(
        client: C,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            options: NewsApiOptions::default(),
        }
    }

    pub fn with_options(mut self, options: NewsApiOptions) -> Self {
        self.options = options;
        self
    }

    fn everything_url(&self) -> String {
        format!("{}/v2/everything", self.base_url)
    }

    fn top_headlines_url(&self) -> String {
        format!("{}/v2/top-headlines", self.base_url)
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![("X-Api-Key", self.api_key.as_str())]
    }

    async fn fetch(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<HeadlinesResponse, DomainError> {
        let json = self
            .client
            .get_json(url, self.headers(), query)
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "News request failed");
                DomainError::upstream(format!("Failed to fetch news: {}", e))
            })?;

        let response: HeadlinesResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::upstream(format!("Failed to parse news response: {}", e))
        })?;

        if !response.is_ok() {
            return Err(DomainError::upstream(format!(
                "News source returned status '{}'",
                response.status
            )));
        }

        debug!(
            url = %url,
            total_results = response.total_results,
            returned = response.articles.len(),
            "Fetched news articles"
        );

        Ok(response)
    }
}

#[async_trait]
impl<C: HttpClientTrait> NewsProvider for NewsApiProvider<C> {
    async fn search(&self, query: &str) -> Result<Vec<Article>, DomainError> {
        let params = [
            ("q", query.to_string()),
            ("language", self.options.language.clone()),
            ("pageSize", self.options.page_size.to_string()),
            ("sortBy", "publishedAt".to_string()),
        ];

        let response = self.fetch(&self.everything_url(), &params).await?;
        Ok(response.articles)
    }

    async fn top_headlines(&self) -> Result<HeadlinesResponse, DomainError> {
        let params = [
            ("country", self.options.country.clone()),
            ("pageSize", self.options.page_size.to_string()),
        ];

        self.fetch(&self.top_headlines_url(), &params).await
    }

    fn provider_name(&self) -> &'static str {
        "newsapi"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http_client::mock::MockHttpClient;

    const BASE: &str = "http://news.test";

    fn ok_body() -> serde_json::Value {
        serde_json::json!({
            "status": "ok",
            "totalResults": 2,
            "articles": [
                {"title": "One", "content": "First body"},
                {"title": "Two", "content": null}
            ]
        })
    }

    #[tokio::test]
    async fn test_search_returns_articles() {
        let client = MockHttpClient::new()
            .with_response(format!("{}/v2/everything", BASE), ok_body());
        let provider = NewsApiProvider::with_base_url(client, "key", BASE);

        let articles = provider.search("central bank").await.unwrap();

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].content.as_deref(), Some("First body"));
    }

    #[tokio::test]
    async fn test_search_sends_query_parameters() {
        let client = MockHttpClient::new()
            .with_response(format!("{}/v2/everything", BASE), ok_body());
        let provider = NewsApiProvider::with_base_url(client, "key", BASE);

        provider.search("central bank").await.unwrap();

        let requests = provider.client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].1["q"], "central bank");
        assert_eq!(requests[0].1["language"], "en");
        assert_eq!(requests[0].1["sortBy"], "publishedAt");
    }

    #[tokio::test]
    async fn test_top_headlines() {
        let client = MockHttpClient::new()
            .with_response(format!("{}/v2/top-headlines", BASE), ok_body());
        let provider = NewsApiProvider::with_base_url(client, "key", format!("{}/", BASE));

        let response = provider.top_headlines().await.unwrap();

        assert!(response.is_ok());
        assert_eq!(response.total_results, 2);
    }

    #[tokio::test]
    async fn test_http_failure_is_upstream_error() {
        let client = MockHttpClient::new()
            .with_error(format!("{}/v2/everything", BASE), "HTTP 401: apiKeyInvalid");
        let provider = NewsApiProvider::with_base_url(client, "bad", BASE);

        let err = provider.search("anything").await.unwrap_err();
        assert!(matches!(err, DomainError::Upstream { .. }));
    }

    #[tokio::test]
    async fn test_error_status_is_upstream_error() {
        let client = MockHttpClient::new().with_response(
            format!("{}/v2/top-headlines", BASE),
            serde_json::json!({"status": "error", "code": "rateLimited"}),
        );
        let provider = NewsApiProvider::with_base_url(client, "key", BASE);

        let err = provider.top_headlines().await.unwrap_err();
        assert!(matches!(err, DomainError::Upstream { .. }));
    }
}
