//! Fake news detection core: similarity and classifier signals plus their merge

mod classifier;
mod label_mapping;
mod merger;
pub mod similarity;
mod verdict;

pub use classifier::{ClassifierScorer, RawClassification, TextClassifier};
pub use label_mapping::LabelMapping;
pub use merger::merge;
pub use similarity::{SimilarityScorer, DEFAULT_MAX_FEATURES, DEFAULT_SIMILARITY_THRESHOLD};
pub use verdict::{ClassifierVerdict, FinalDecision, Label, SimilarityVerdict};

#[cfg(test)]
pub use classifier::mock::MockTextClassifier;
