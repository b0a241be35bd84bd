//! Documents from a local directory (dry runs and tests).

use super::content_type_for;
use async_trait::async_trait;
use quoting_application::{Document, DocumentFetcher, FetchError};
use std::io::ErrorKind;
use std::path::PathBuf;

/// Resolves locations relative to a root directory.
///
/// A missing file means the carrier has not produced the document yet.
#[derive(Debug, Clone)]
pub struct LocalDocumentFetcher {
    root: PathBuf,
}

impl LocalDocumentFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl DocumentFetcher for LocalDocumentFetcher {
    async fn fetch(&self, location: &str) -> Result<Document, FetchError> {
        let relative = location.strip_prefix("file://").unwrap_or(location);
        let path = self.root.join(relative);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Document {
                location: path.display().to_string(),
                content_type: content_type_for(location).to_string(),
                bytes,
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(FetchError::NotReady(path.display().to_string()))
            }
            Err(e) => Err(FetchError::Transport(format!("{}: {}", path.display(), e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("letter.txt"), "Dear agent").unwrap();
        let fetcher = LocalDocumentFetcher::new(dir.path());

        let document = fetcher.fetch("file://letter.txt").await.unwrap();
        assert_eq!(document.bytes, b"Dear agent");
        assert_eq!(document.content_type, "text/plain");
    }

    #[tokio::test]
    async fn test_missing_file_is_not_ready() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = LocalDocumentFetcher::new(dir.path());

        let err = fetcher.fetch("later.pdf").await.unwrap_err();
        assert!(matches!(err, FetchError::NotReady(_)));
    }
}
