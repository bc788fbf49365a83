//! Domain layer - detection core, collaborator contracts and errors

pub mod corpus;
pub mod detection;
pub mod document;
pub mod error;
pub mod news;

pub use corpus::{Article, ArticleCorpus, ArticleSource, CorpusRepository};
pub use detection::{
    merge, ClassifierScorer, ClassifierVerdict, FinalDecision, Label, LabelMapping,
    RawClassification, SimilarityScorer, SimilarityVerdict, TextClassifier,
};
pub use document::DocumentTextExtractor;
pub use error::DomainError;
pub use news::{HeadlinesResponse, NewsProvider};
