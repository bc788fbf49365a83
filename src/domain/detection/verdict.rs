//! Verdict value objects produced by each detection signal

use serde::{Deserialize, Serialize};

/// Final or partial label for a text sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    #[serde(rename = "Réel")]
    Real,
    #[serde(rename = "Fake")]
    Fake,
}

impl Label {
    pub fn is_fake(&self) -> bool {
        matches!(self, Self::Fake)
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real => write!(f, "Réel"),
            Self::Fake => write!(f, "Fake"),
        }
    }
}

/// Outcome of comparing a text against the reference corpus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityVerdict {
    pub message: String,
    /// Best cosine similarity, absent when no comparison could be made
    pub similarity: Option<f64>,
    pub result: Label,
    /// Equal to `similarity` when present; not a calibrated probability
    pub confidence: f64,
}

impl SimilarityVerdict {
    /// Skeptical default used whenever no comparison is possible
    pub fn undetermined(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            similarity: None,
            result: Label::Fake,
            confidence: 0.0,
        }
    }
}

/// Outcome of the text classification model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierVerdict {
    pub message: String,
    pub confidence: f64,
    pub result: Label,
}

/// Merged decision returned to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalDecision {
    pub similarity_check: SimilarityVerdict,
    pub bert_check: ClassifierVerdict,
    pub result: Label,
    pub confidence: f64,
}
