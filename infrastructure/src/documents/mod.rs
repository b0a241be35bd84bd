//! Document fetchers
//!
//! Implementations of the [`DocumentFetcher`](quoting_application::DocumentFetcher)
//! port used to retrieve quote letters after a carrier answered.

mod local;
#[cfg(feature = "http-documents")]
mod http;

pub use local::LocalDocumentFetcher;
#[cfg(feature = "http-documents")]
pub use http::HttpDocumentFetcher;

/// Best-effort content type from a location's extension
pub(crate) fn content_type_for(location: &str) -> &'static str {
    let extension = location
        .rsplit('/')
        .next()
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("json") => "application/json",
        Some("html" | "htm") => "text/html",
        Some("txt") => "text/plain",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for("letters/app-1.PDF"), "application/pdf");
        assert_eq!(content_type_for("https://x.example/a/b.json"), "application/json");
        assert_eq!(content_type_for("https://x.example.com/letter"), "application/octet-stream");
    }
}
