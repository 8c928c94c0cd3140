use async_trait::async_trait;
use watch_stats_models::{MediaDetails, MediaKind, MediaSummary};

use crate::error::SourceError;

/// Read-only access to a movie/TV metadata catalogue
#[async_trait]
pub trait MetadataClient: Send + Sync {
    fn source_name(&self) -> &str;

    /// Root that image paths are appended to, without a trailing slash
    fn image_base_url(&self) -> &str;

    async fn search(&self, query: &str) -> Result<Vec<MediaSummary>, SourceError>;
    async fn trending(&self, kind: MediaKind) -> Result<Vec<MediaSummary>, SourceError>;
    async fn movie_details(&self, id: u64) -> Result<MediaDetails, SourceError>;

    /// Full URL for a poster/still path at the given size (e.g. `w500`, `original`)
    fn image_url(&self, path: &str, size: &str) -> String {
        let base = self.image_base_url().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}/{}", base, size, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Catalogue;

    #[async_trait]
    impl MetadataClient for Catalogue {
        fn source_name(&self) -> &str {
            "catalogue"
        }

        fn image_base_url(&self) -> &str {
            "https://images.example.org/t/p/"
        }

        async fn search(&self, _query: &str) -> Result<Vec<MediaSummary>, SourceError> {
            Ok(Vec::new())
        }

        async fn trending(&self, _kind: MediaKind) -> Result<Vec<MediaSummary>, SourceError> {
            Ok(Vec::new())
        }

        async fn movie_details(&self, id: u64) -> Result<MediaDetails, SourceError> {
            Err(SourceError::NotFound {
                kind: MediaKind::Movie,
                id,
            })
        }
    }

    #[test]
    fn test_image_url_joins_segments() {
        let client = Catalogue;
        assert_eq!(
            client.image_url("/abc.jpg", "w500"),
            "https://images.example.org/t/p/w500/abc.jpg"
        );
        assert_eq!(
            client.image_url("abc.jpg", "original"),
            "https://images.example.org/t/p/original/abc.jpg"
        );
    }

    #[tokio::test]
    async fn test_not_found_message() {
        let err = Catalogue.movie_details(42).await.unwrap_err();
        assert_eq!(err.to_string(), "movie 42 not found");
        assert!(!err.is_transient());
    }
}
