//! Document fetcher port
//!
//! Side-channel retrieval of documents a carrier generated for a quote
//! (quote letters, rating worksheets). Calls are idempotent, so they are
//! safe to repeat under [`fetch_with_retry`](crate::retry::fetch_with_retry).

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Document not ready: {0}")]
    NotReady(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected status {status} from {location}")]
    UnexpectedStatus { status: u16, location: String },
}

/// A retrieved document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub location: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    async fn fetch(&self, location: &str) -> Result<Document, FetchError>;
}
