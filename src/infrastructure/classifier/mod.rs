//! Text classifier implementations

mod huggingface;

pub use huggingface::{HuggingFaceClassifier, DEFAULT_MAX_INPUT_CHARS};
