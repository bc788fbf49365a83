//! Detection service - refreshes the corpus, runs both signals and merges them

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::corpus::CorpusRepository;
use crate::domain::detection::{merge, ClassifierScorer, FinalDecision, SimilarityScorer};
use crate::domain::document::DocumentTextExtractor;
use crate::domain::news::{HeadlinesResponse, NewsProvider};
use crate::domain::DomainError;

pub const DEFAULT_DOCUMENT_QUERY_WORDS: usize = 12;

/// Collaborators the detection service is built from
#[derive(Clone)]
pub struct DetectionServiceDeps {
    pub news_provider: Arc<dyn NewsProvider>,
    pub corpus_repository: Arc<dyn CorpusRepository>,
    pub extractor: Arc<dyn DocumentTextExtractor>,
    pub classifier: ClassifierScorer,
    pub similarity: SimilarityScorer,
}

/// Orchestrates one detection request end to end
pub struct DetectionService {
    news_provider: Arc<dyn NewsProvider>,
    corpus_repository: Arc<dyn CorpusRepository>,
    extractor: Arc<dyn DocumentTextExtractor>,
    classifier: ClassifierScorer,
    similarity: Arc<SimilarityScorer>,
    document_query_words: usize,
}

impl DetectionService {
    pub fn new(deps: DetectionServiceDeps) -> Self {
        Self {
            news_provider: deps.news_provider,
            corpus_repository: deps.corpus_repository,
            extractor: deps.extractor,
            classifier: deps.classifier,
            similarity: Arc::new(deps.similarity),
            document_query_words: DEFAULT_DOCUMENT_QUERY_WORDS,
        }
    }

    pub fn with_document_query_words(mut self, words: usize) -> Self {
        self.document_query_words = words.max(1);
        self
    }

    /// Current top headlines, passed through from the news source
    pub async fn top_headlines(&self) -> Result<HeadlinesResponse, DomainError> {
        self.news_provider.top_headlines().await
    }

    /// Number of articles in the stored snapshot
    pub async fn corpus_size(&self) -> usize {
        self.corpus_repository.article_count().await
    }

    /// Check a typed query: fetch matching news, store it, then detect
    pub async fn check_text(&self, query: &str) -> Result<FinalDecision, DomainError> {
        let query = query.trim();

        if query.is_empty() {
            return Err(DomainError::validation("Query parameter 'query' is required"));
        }

        self.refresh_corpus(query).await?;
        self.detect(query).await
    }

    /// Check an uploaded document
    ///
    /// News is searched with the leading words of the extracted text; the
    /// full text is scored.
    pub async fn check_document(&self, bytes: Vec<u8>) -> Result<FinalDecision, DomainError> {
        if bytes.is_empty() {
            return Err(DomainError::validation("No file provided"));
        }

        let extractor = self.extractor.clone();
        let text = tokio::task::spawn_blocking(move || extractor.extract(&bytes))
            .await
            .map_err(|e| DomainError::extraction(format!("Extractor aborted: {}", e)))??;

        let search_query = leading_words(&text, self.document_query_words);
        if search_query.is_empty() {
            return Err(DomainError::extraction("Extracted text contains no words"));
        }

        debug!(search_query = %search_query, chars = text.chars().count(), "Checking document");

        self.refresh_corpus(&search_query).await?;
        self.detect(&text).await
    }

    /// Score `text` against the stored corpus and the classifier
    pub async fn detect(&self, text: &str) -> Result<FinalDecision, DomainError> {
        let corpus = self.corpus_repository.load().await;

        let scorer = self.similarity.clone();
        let query = text.to_string();
        let similarity_task =
            tokio::task::spawn_blocking(move || scorer.score(&query, &corpus));

        let (similarity, classification) =
            tokio::join!(similarity_task, self.classifier.classify(text));

        let similarity = similarity
            .map_err(|e| DomainError::internal(format!("Similarity scoring aborted: {}", e)))?;
        let classification = classification?;

        let decision = merge(similarity, classification);

        info!(
            result = %decision.result,
            confidence = decision.confidence,
            similarity = ?decision.similarity_check.similarity,
            classifier_result = %decision.bert_check.result,
            "Detection completed"
        );

        Ok(decision)
    }

    async fn refresh_corpus(&self, query: &str) -> Result<(), DomainError> {
        let articles = self.news_provider.search(query).await?;

        if let Err(e) = self.corpus_repository.replace(articles).await {
            warn!(error = %e, "Failed to store article snapshot, using previous corpus");
        }

        Ok(())
    }
}

fn leading_words(text: &str, count: usize) -> String {
    text.split_whitespace()
        .take(count)
        .collect::<Vec<_>>()
        .join(" ")
}
