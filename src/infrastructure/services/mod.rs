//! Application services

mod detection_service;

pub use detection_service::{DetectionService, DetectionServiceDeps, DEFAULT_DOCUMENT_QUERY_WORDS};
