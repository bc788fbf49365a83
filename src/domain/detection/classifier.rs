//! Text classifier capability and the scorer built on it

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ClassifierVerdict, LabelMapping};
use crate::domain::DomainError;

const CLASSIFIER_MESSAGE: &str = "Text classification completed";

/// Raw output of a classifier: the top label and its probability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawClassification {
    pub label: String,
    pub score: f64,
}

impl RawClassification {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// Pretrained binary text classifier (fabricated vs genuine)
///
/// Implementations hold fixed weights and no per-call mutable state.
#[async_trait]
pub trait TextClassifier: Send + Sync + Debug {
    async fn classify(&self, text: &str) -> Result<RawClassification, DomainError>;

    fn classifier_name(&self) -> &'static str;
}

/// Turns raw classifier output into a `ClassifierVerdict`
#[derive(Debug, Clone)]
pub struct ClassifierScorer {
    classifier: Arc<dyn TextClassifier>,
    mapping: LabelMapping,
}

impl ClassifierScorer {
    pub fn new(classifier: Arc<dyn TextClassifier>, mapping: LabelMapping) -> Self {
        Self { classifier, mapping }
    }

    pub async fn classify(&self, text: &str) -> Result<ClassifierVerdict, DomainError> {
        let raw = self.classifier.classify(text).await?;
        let result = self.mapping.map(&raw.label);

        debug!(
            classifier = self.classifier.classifier_name(),
            label = %raw.label,
            score = raw.score,
            result = %result,
            "Classifier produced a label"
        );

        Ok(ClassifierVerdict {
            message: CLASSIFIER_MESSAGE.to_string(),
            confidence: round_to_hundredths(raw.score),
            result,
        })
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
