//! Fake news detector
//!
//! Decides whether a text is likely genuine or fabricated by combining:
//! - a TF-IDF similarity check against freshly fetched news articles
//! - an independent pretrained text classifier
//!
//! The two verdicts are merged pessimistically: either one saying "Fake" wins.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use domain::corpus::CorpusRepository;
use domain::detection::{ClassifierScorer, LabelMapping, SimilarityScorer};
use infrastructure::{
    classifier::HuggingFaceClassifier,
    corpus::{FileCorpusRepository, InMemoryCorpusRepository},
    document::PdfTextExtractor,
    http_client::HttpClient,
    news::{NewsApiOptions, NewsApiProvider},
    services::{DetectionService, DetectionServiceDeps},
};
use tracing::info;

use config::CorpusBackend;

/// Build the detection service and its collaborators from configuration
///
/// The classifier and news clients are created once here and shared by
/// every request.
pub fn create_detection_service(config: &AppConfig) -> anyhow::Result<DetectionService> {
    config.validate()?;

    let news_client = HttpClient::with_timeout(Duration::from_secs(config.news.timeout_secs))?;
    let news_provider = NewsApiProvider::with_base_url(
        news_client,
        config.news_api_key()?,
        config.news.base_url.clone(),
    )
    .with_options(NewsApiOptions {
        language: config.news.language.clone(),
        country: config.news.country.clone(),
        page_size: config.news.page_size,
    });

    let classifier_client =
        HttpClient::with_timeout(Duration::from_secs(config.classifier.timeout_secs))?;
    let mut classifier =
        HuggingFaceClassifier::new(classifier_client, config.classifier.endpoint.clone())
            .with_max_input_chars(config.classifier.max_input_chars);

    if let Some(ref token) = config.classifier.api_token {
        classifier = classifier.with_api_token(token.clone());
    }

    let label_mapping = LabelMapping::new(
        config.classifier.real_labels.clone(),
        config.classifier.positive_label_ids.clone(),
    );

    let corpus_repository: Arc<dyn CorpusRepository> = match config.corpus.backend {
        CorpusBackend::File => {
            info!(path = %config.corpus.snapshot_path, "Using file corpus snapshot");
            Arc::new(FileCorpusRepository::new(&config.corpus.snapshot_path))
        }
        CorpusBackend::Memory => {
            info!("Using in-memory corpus snapshot");
            Arc::new(InMemoryCorpusRepository::new())
        }
    };

    let service = DetectionService::new(DetectionServiceDeps {
        news_provider: Arc::new(news_provider),
        corpus_repository,
        extractor: Arc::new(PdfTextExtractor::new()),
        classifier: ClassifierScorer::new(Arc::new(classifier), label_mapping),
        similarity: SimilarityScorer::new(
            config.detection.similarity_threshold,
            config.detection.max_features,
        ),
    })
    .with_document_query_words(config.detection.document_query_words);

    Ok(service)
}
