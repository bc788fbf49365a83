use serde::Deserialize;

use crate::domain::detection::{DEFAULT_MAX_FEATURES, DEFAULT_SIMILARITY_THRESHOLD};
use crate::domain::DomainError;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub news: NewsConfig,
    pub classifier: ClassifierConfig,
    pub corpus: CorpusConfig,
    pub detection: DetectionConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// News source (NewsAPI) settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    /// Falls back to the `NEWS_API_KEY` environment variable
    pub api_key: Option<String>,
    pub base_url: String,
    pub language: String,
    pub country: String,
    pub page_size: u32,
    pub timeout_secs: u64,
}

/// Text classifier inference endpoint settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub endpoint: String,
    /// Falls back to the `HF_API_TOKEN` environment variable
    pub api_token: Option<String>,
    pub timeout_secs: u64,
    pub max_input_chars: usize,
    pub real_labels: Vec<String>,
    pub positive_label_ids: Vec<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CorpusBackend {
    #[default]
    File,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    pub backend: CorpusBackend,
    pub snapshot_path: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    pub similarity_threshold: f64,
    pub max_features: usize,
    /// Words of an uploaded document used as the news search query
    pub document_query_words: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://newsapi.org".to_string(),
            language: "en".to_string(),
            country: "us".to_string(),
            page_size: 100,
            timeout_secs: 10,
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            endpoint:
                "https://api-inference.huggingface.co/models/jy46604790/Fake-News-Bert-Detect"
                    .to_string(),
            api_token: None,
            timeout_secs: 30,
            max_input_chars: 2000,
            real_labels: vec!["REAL".to_string()],
            positive_label_ids: vec!["LABEL_1".to_string()],
        }
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            backend: CorpusBackend::default(),
            snapshot_path: "data/articles.json".to_string(),
        }
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            max_features: DEFAULT_MAX_FEATURES,
            document_query_words: 12,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut app_config: Self = config.try_deserialize()?;
        app_config.apply_env_fallbacks();

        Ok(app_config)
    }

    fn apply_env_fallbacks(&mut self) {
        if self.news.api_key.is_none() {
            self.news.api_key = std::env::var("NEWS_API_KEY").ok();
        }

        if self.classifier.api_token.is_none() {
            self.classifier.api_token = std::env::var("HF_API_TOKEN").ok();
        }
    }

    /// News API key, required to serve any request
    pub fn news_api_key(&self) -> Result<&str, DomainError> {
        self.news
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| DomainError::configuration("Missing NEWS_API_KEY"))
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        self.news_api_key()?;

        if !(0.0..=1.0).contains(&self.detection.similarity_threshold) {
            return Err(DomainError::configuration(format!(
                "detection.similarity_threshold must be within [0, 1], got {}",
                self.detection.similarity_threshold
            )));
        }

        if self.detection.max_features == 0 {
            return Err(DomainError::configuration(
                "detection.max_features must be greater than zero",
            ));
        }

        if self.classifier.endpoint.trim().is_empty() {
            return Err(DomainError::configuration("classifier.endpoint is required"));
        }

        Ok(())
    }
}
