//! Document text extraction contract

use std::fmt::Debug;

use crate::domain::DomainError;

/// Extracts plain text from an uploaded document
///
/// Failures are `DomainError::Extraction`; callers skip scoring entirely.
pub trait DocumentTextExtractor: Send + Sync + Debug {
    fn extract(&self, bytes: &[u8]) -> Result<String, DomainError>;

    fn extractor_name(&self) -> &'static str;
}
