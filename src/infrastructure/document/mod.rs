//! Document text extractors

mod pdf;

pub use pdf::PdfTextExtractor;
