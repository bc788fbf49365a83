//! Reference corpus domain

mod article;
mod repository;

pub use article::{Article, ArticleCorpus, ArticleSource};
pub use repository::CorpusRepository;

#[cfg(test)]
pub use repository::MockCorpusRepository;
