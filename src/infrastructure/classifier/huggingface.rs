//! Hugging Face inference endpoint classifier

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::detection::{RawClassification, TextClassifier};
use crate::domain::DomainError;
use crate::infrastructure::http_client::HttpClientTrait;

pub const DEFAULT_MAX_INPUT_CHARS: usize = 2000;

#[derive(Debug, Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

/// Inference API answers either `[[{label, score}, ...]]` or `[{label, score}, ...]`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

impl InferenceResponse {
    fn into_scores(self) -> Vec<LabelScore> {
        match self {
            Self::Nested(batches) => batches.into_iter().next().unwrap_or_default(),
            Self::Flat(scores) => scores,
        }
    }
}

/// Text classification model served behind an HTTP inference endpoint
#[derive(Debug)]
pub struct HuggingFaceClassifier<C: HttpClientTrait> {
    client: C,
    endpoint: String,
    auth_header: Option<String>,
    max_input_chars: usize,
}

impl<C: HttpClientTrait> HuggingFaceClassifier<C> {
    pub fn new(client: C, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            auth_header: None,
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
        }
    }

    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.auth_header = Some(format!("Bearer {}", token.into()));
        self
    }

    pub fn with_max_input_chars(mut self, max_input_chars: usize) -> Self {
        self.max_input_chars = max_input_chars;
        self
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        let mut headers = vec![("Content-Type", "application/json")];

        if let Some(ref auth) = self.auth_header {
            headers.push(("Authorization", auth.as_str()));
        }

        headers
    }

    fn truncate<'a>(&self, text: &'a str) -> &'a str {
        match text.char_indices().nth(self.max_input_chars) {
            Some((idx, _)) => &text[..idx],
            None => text,
        }
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<RawClassification, DomainError> {
        let response: InferenceResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::provider("huggingface", format!("Failed to parse response: {}", e))
        })?;

        response
            .into_scores()
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .map(|best| RawClassification::new(best.label, best.score))
            .ok_or_else(|| DomainError::provider("huggingface", "No labels in response"))
    }
}

#[async_trait]
impl<C: HttpClientTrait> TextClassifier for HuggingFaceClassifier<C> {
    async fn classify(&self, text: &str) -> Result<RawClassification, DomainError> {
        let body = serde_json::json!({
            "inputs": self.truncate(text),
            "options": {"wait_for_model": true},
        });

        let response = self
            .client
            .post_json(&self.endpoint, self.headers(), &body)
            .await
            .map_err(|e| DomainError::provider("huggingface", e.to_string()))?;

        self.parse_response(response)
    }

    fn classifier_name(&self) -> &'static str {
        "huggingface"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http_client::mock::MockHttpClient;

    const ENDPOINT: &str = "http://inference.test/models/fake-news";

    #[tokio::test]
    async fn test_nested_response_picks_best_label() {
        let client = MockHttpClient::new().with_response(
            ENDPOINT,
            serde_json::json!([[
                {"label": "FAKE", "score": 0.12},
                {"label": "REAL", "score": 0.88}
            ]]),
        );
        let classifier = HuggingFaceClassifier::new(client, ENDPOINT);

        let raw = classifier.classify("text").await.unwrap();

        assert_eq!(raw, RawClassification::new("REAL", 0.88));
    }

    #[tokio::test]
    async fn test_flat_response() {
        let client = MockHttpClient::new().with_response(
            ENDPOINT,
            serde_json::json!([{"label": "LABEL_0", "score": 0.7}]),
        );
        let classifier = HuggingFaceClassifier::new(client, ENDPOINT);

        let raw = classifier.classify("text").await.unwrap();

        assert_eq!(raw.label, "LABEL_0");
    }

    #[tokio::test]
    async fn test_empty_response_is_provider_error() {
        let client = MockHttpClient::new().with_response(ENDPOINT, serde_json::json!([[]]));
        let classifier = HuggingFaceClassifier::new(client, ENDPOINT);

        let err = classifier.classify("text").await.unwrap_err();
        assert!(matches!(err, DomainError::Provider { .. }));
    }

    #[tokio::test]
    async fn test_input_is_truncated_on_char_boundary() {
        let client = MockHttpClient::new().with_response(
            ENDPOINT,
            serde_json::json!([{"label": "REAL", "score": 0.9}]),
        );
        let classifier = HuggingFaceClassifier::new(client, ENDPOINT).with_max_input_chars(3);

        classifier.classify("éàüxyz").await.unwrap();

        let requests = classifier.client.requests();
        assert_eq!(requests[0].1["inputs"], "éàü");
        assert_eq!(requests[0].1["options"]["wait_for_model"], true);
    }

    #[tokio::test]
    async fn test_http_error_is_provider_error() {
        let client = MockHttpClient::new().with_error(ENDPOINT, "HTTP 503: loading");
        let classifier = HuggingFaceClassifier::new(client, ENDPOINT).with_api_token("hf_x");

        let err = classifier.classify("text").await.unwrap_err();
        assert!(matches!(err, DomainError::Provider { .. }));
    }
}
