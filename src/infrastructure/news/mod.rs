//! News provider implementations

mod newsapi;

pub use newsapi::{NewsApiOptions, NewsApiProvider, DEFAULT_NEWSAPI_BASE_URL};
