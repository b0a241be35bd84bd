//! Documents over HTTP(S).

use super::content_type_for;
use async_trait::async_trait;
use quoting_application::{Document, DocumentFetcher, FetchError};
use reqwest::StatusCode;
use std::time::Duration;

/// Fetches carrier documents with a shared `reqwest` client.
///
/// `202 Accepted` and `404 Not Found` mean the carrier is still generating
/// the document; both are reported as [`FetchError::NotReady`] so the retry
/// budget applies.
#[derive(Debug, Clone)]
pub struct HttpDocumentFetcher {
    client: reqwest::Client,
}

impl HttpDocumentFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl DocumentFetcher for HttpDocumentFetcher {
    async fn fetch(&self, location: &str) -> Result<Document, FetchError> {
        let response = self
            .client
            .get(location)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::ACCEPTED || status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotReady(location.to_string()));
        }
        if !status.is_success() {
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
                location: location.to_string(),
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .unwrap_or_else(|| content_type_for(location).to_string());
        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Document {
            location: location.to_string(),
            content_type,
            bytes: bytes.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_host_is_a_transport_error() {
        let fetcher = HttpDocumentFetcher::new(Duration::from_millis(500)).unwrap();
        // Port 9 on localhost is the discard service and is closed on test hosts
        let err = fetcher.fetch("http://127.0.0.1:9/letter.pdf").await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }
}
