//! Corpus repository implementations

mod file_repository;
mod in_memory;

pub use file_repository::FileCorpusRepository;
pub use in_memory::InMemoryCorpusRepository;
