mod app_config;

pub use app_config::{
    AppConfig, ClassifierConfig, CorpusBackend, CorpusConfig, DetectionConfig, LogFormat,
    LoggingConfig, NewsConfig, ServerConfig,
};
