//! TF-IDF vectorizer over unigrams and bigrams

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::stop_words::is_stop_word;

static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"));

/// Sparse, L2-normalized document vector keyed by vocabulary index
pub type SparseVector = HashMap<usize, f64>;

/// Result of fitting the vectorizer on a set of documents
#[derive(Debug, Clone)]
pub struct TfIdfMatrix {
    vocabulary_size: usize,
    rows: Vec<SparseVector>,
}

impl TfIdfMatrix {
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary_size
    }

    pub fn rows(&self) -> &[SparseVector] {
        &self.rows
    }
}

/// Lowercase, tokenize, drop stop words and emit unigrams followed by bigrams
pub fn analyze(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|token| !is_stop_word(token))
        .collect();

    let mut terms: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    terms.extend(tokens.windows(2).map(|pair| format!("{} {}", pair[0], pair[1])));
    terms
}

/// Fit a TF-IDF model on `documents` and transform them
///
/// Returns `None` when no document yields a single term.
pub fn fit_transform(documents: &[&str], max_features: usize) -> Option<TfIdfMatrix> {
    let analyzed: Vec<Vec<String>> = documents.iter().map(|doc| analyze(doc)).collect();

    let mut totals: HashMap<&str, usize> = HashMap::new();
    for terms in &analyzed {
        for term in terms {
            *totals.entry(term.as_str()).or_default() += 1;
        }
    }

    if totals.is_empty() {
        return None;
    }

    let mut ranked: Vec<(&str, usize)> = totals.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(max_features.max(1));

    let mut kept: Vec<&str> = ranked.into_iter().map(|(term, _)| term).collect();
    kept.sort_unstable();
    let vocabulary: HashMap<&str, usize> =
        kept.iter().enumerate().map(|(i, term)| (*term, i)).collect();

    let counts: Vec<HashMap<usize, f64>> = analyzed
        .iter()
        .map(|terms| {
            let mut row = HashMap::new();
            for term in terms {
                if let Some(&idx) = vocabulary.get(term.as_str()) {
                    *row.entry(idx).or_insert(0.0) += 1.0;
                }
            }
            row
        })
        .collect();

    let mut document_frequency = vec![0usize; vocabulary.len()];
    for row in &counts {
        for idx in row.keys() {
            document_frequency[*idx] += 1;
        }
    }

    // Smoothed idf: ln((1 + n) / (1 + df)) + 1
    let n = documents.len() as f64;
    let idf: Vec<f64> = document_frequency
        .iter()
        .map(|df| ((1.0 + n) / (1.0 + *df as f64)).ln() + 1.0)
        .collect();

    let rows = counts
        .into_iter()
        .map(|row| {
            let mut weighted: SparseVector =
                row.into_iter().map(|(idx, tf)| (idx, tf * idf[idx])).collect();
            let norm = weighted.values().map(|w| w * w).sum::<f64>().sqrt();
            if norm > 0.0 {
                weighted.values_mut().for_each(|w| *w /= norm);
            }
            weighted
        })
        .collect();

    Some(TfIdfMatrix {
        vocabulary_size: vocabulary.len(),
        rows,
    })
}

/// Cosine similarity of two L2-normalized sparse vectors
pub fn cosine(a: &SparseVector, b: &SparseVector) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small
        .iter()
        .filter_map(|(idx, w)| large.get(idx).map(|other| w * other))
        .sum()
}
