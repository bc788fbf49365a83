//! Infrastructure layer - External service implementations

pub mod classifier;
pub mod corpus;
pub mod document;
pub mod http_client;
pub mod logging;
pub mod news;
pub mod services;
