//! Corpus similarity signal

mod stop_words;
mod tfidf;

pub use stop_words::is_stop_word;
pub use tfidf::{analyze, cosine, fit_transform, SparseVector, TfIdfMatrix};

use tracing::debug;

use super::{Label, SimilarityVerdict};
use crate::domain::corpus::ArticleCorpus;

pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.3;
pub const DEFAULT_MAX_FEATURES: usize = 5000;

pub const INSUFFICIENT_DATA_MESSAGE: &str = "Insufficient data to compare";
pub const NOT_ENOUGH_TEXT_MESSAGE: &str = "Not enough text to compare";
const SIMILAR_FOUND_MESSAGE: &str = "Similar articles found in recent news";
const NO_SIMILAR_MESSAGE: &str = "No sufficiently similar article found in recent news";

/// Compares a text against the reference corpus with TF-IDF cosine similarity
#[derive(Debug, Clone)]
pub struct SimilarityScorer {
    threshold: f64,
    max_features: usize,
}

impl Default for SimilarityScorer {
    fn default() -> Self {
        Self::new(DEFAULT_SIMILARITY_THRESHOLD, DEFAULT_MAX_FEATURES)
    }
}

impl SimilarityScorer {
    pub fn new(threshold: f64, max_features: usize) -> Self {
        Self {
            threshold,
            max_features,
        }
    }

    /// Score `query` against `corpus`
    ///
    /// Never fails: an empty corpus or a text without usable terms yields a
    /// `Fake` verdict with zero confidence. The confidence of a comparison is
    /// the raw similarity, not a calibrated probability.
    pub fn score(&self, query: &str, corpus: &ArticleCorpus) -> SimilarityVerdict {
        if corpus.is_empty() {
            return SimilarityVerdict::undetermined(INSUFFICIENT_DATA_MESSAGE);
        }

        let mut documents: Vec<&str> = corpus.entries().iter().map(String::as_str).collect();
        documents.push(query);

        let Some(matrix) = fit_transform(&documents, self.max_features) else {
            debug!("Vectorization produced an empty vocabulary");
            return SimilarityVerdict::undetermined(NOT_ENOUGH_TEXT_MESSAGE);
        };

        let (query_row, corpus_rows) = match matrix.rows().split_last() {
            Some(split) => split,
            None => return SimilarityVerdict::undetermined(INSUFFICIENT_DATA_MESSAGE),
        };

        let similarity = corpus_rows
            .iter()
            .map(|row| cosine(query_row, row))
            .fold(0.0_f64, f64::max)
            .clamp(0.0, 1.0);

        debug!(
            similarity = similarity,
            corpus_size = corpus_rows.len(),
            vocabulary = matrix.vocabulary_size(),
            "Computed corpus similarity"
        );

        let (result, message) = if similarity > self.threshold {
            (Label::Real, SIMILAR_FOUND_MESSAGE)
        } else {
            (Label::Fake, NO_SIMILAR_MESSAGE)
        };

        SimilarityVerdict {
            message: message.to_string(),
            similarity: Some(similarity),
            result,
            confidence: similarity,
        }
    }
}
