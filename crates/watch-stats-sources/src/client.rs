use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};
use watch_stats_config::MetadataConfig;
use watch_stats_models::{MediaDetails, MediaKind, MediaSummary};

use crate::cache::{CacheStats, ResponseCache};
use crate::error::SourceError;
use crate::gate::RequestGate;
use crate::traits::MetadataClient;

/// One cache per kind of response
pub struct MetadataCaches {
    pub search: ResponseCache<Vec<MediaSummary>>,
    pub trending: ResponseCache<Vec<MediaSummary>>,
    pub details: ResponseCache<MediaDetails>,
}

impl MetadataCaches {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            search: ResponseCache::new(ttl, capacity),
            trending: ResponseCache::new(ttl, capacity),
            details: ResponseCache::new(ttl, capacity),
        }
    }
}

/// Wraps a client with response caching and a concurrency gate.
/// Only cache misses pass through the gate.
pub struct CachedMetadataClient<C> {
    inner: C,
    caches: MetadataCaches,
    gate: RequestGate,
}

impl<C: MetadataClient> CachedMetadataClient<C> {
    pub fn new(inner: C, caches: MetadataCaches, gate: RequestGate) -> Self {
        Self {
            inner,
            caches,
            gate,
        }
    }

    pub fn with_limits(inner: C, ttl: Duration, capacity: usize, max_concurrent: usize) -> Self {
        Self::new(
            inner,
            MetadataCaches::new(ttl, capacity),
            RequestGate::new(max_concurrent),
        )
    }

    /// Cache TTL, cache capacity and request concurrency from the `[metadata]` settings
    pub fn from_config(inner: C, settings: &MetadataConfig) -> Self {
        Self::with_limits(
            inner,
            settings.cache_ttl(),
            settings.cache_capacity,
            settings.max_concurrent_requests,
        )
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn gate(&self) -> &RequestGate {
        &self.gate
    }

    pub async fn details_stats(&self) -> CacheStats {
        self.caches.details.stats().await
    }

    pub async fn search_stats(&self) -> CacheStats {
        self.caches.search.stats().await
    }
}

#[async_trait]
impl<C: MetadataClient> MetadataClient for CachedMetadataClient<C> {
    fn source_name(&self) -> &str {
        self.inner.source_name()
    }

    fn image_base_url(&self) -> &str {
        self.inner.image_base_url()
    }

    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<Vec<MediaSummary>, SourceError> {
        if let Some(hit) = self.caches.search.get(query).await {
            return Ok(hit);
        }
        let results = self.gate.run(self.inner.search(query)).await?;
        debug!("Search returned {} results", results.len());
        self.caches.search.insert(query, results.clone()).await;
        Ok(results)
    }

    async fn trending(&self, kind: MediaKind) -> Result<Vec<MediaSummary>, SourceError> {
        let key = kind.as_str();
        if let Some(hit) = self.caches.trending.get(key).await {
            return Ok(hit);
        }
        let results = self.gate.run(self.inner.trending(kind)).await?;
        self.caches.trending.insert(key, results.clone()).await;
        Ok(results)
    }

    async fn movie_details(&self, id: u64) -> Result<MediaDetails, SourceError> {
        let key = id.to_string();
        if let Some(hit) = self.caches.details.get(&key).await {
            return Ok(hit);
        }
        let details = self.gate.run(self.inner.movie_details(id)).await?;
        self.caches.details.insert(&key, details.clone()).await;
        Ok(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingClient {
        calls: AtomicUsize,
    }

    impl CountingClient {
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl MetadataClient for CountingClient {
        fn source_name(&self) -> &str {
            "counting"
        }

        fn image_base_url(&self) -> &str {
            "https://img.test"
        }

        async fn search(&self, query: &str) -> Result<Vec<MediaSummary>, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![MediaSummary {
                id: 1,
                kind: MediaKind::Movie,
                title: query.to_string(),
                poster_path: None,
                release_date: None,
                vote_average: None,
            }])
        }

        async fn trending(&self, _kind: MediaKind) -> Result<Vec<MediaSummary>, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }

        async fn movie_details(&self, id: u64) -> Result<MediaDetails, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if id == 0 {
                return Err(SourceError::request("counting", "boom"));
            }
            Ok(MediaDetails {
                id,
                title: format!("Movie {}", id),
                poster_path: None,
                backdrop_path: None,
                runtime: 100,
                release_date: "2001-01-01".to_string(),
                genres: Vec::new(),
                overview: String::new(),
            })
        }
    }

    fn client() -> CachedMetadataClient<CountingClient> {
        CachedMetadataClient::with_limits(
            CountingClient::default(),
            Duration::from_secs(60),
            10,
            2,
        )
    }

    #[tokio::test]
    async fn test_repeated_search_hits_cache() {
        let client = client();
        client.search("Heat").await.unwrap();
        let second = client.search(" heat").await.unwrap();

        assert_eq!(second[0].title, "Heat");
        assert_eq!(client.inner().calls(), 1);
        assert_eq!(client.search_stats().await.hits, 1);
    }

    #[tokio::test]
    async fn test_details_cached_per_id() {
        let client = client();
        client.movie_details(1).await.unwrap();
        client.movie_details(2).await.unwrap();
        client.movie_details(1).await.unwrap();

        assert_eq!(client.inner().calls(), 2);
        assert_eq!(client.details_stats().await.entries, 2);
    }

    #[tokio::test]
    async fn test_from_config_applies_limits() {
        let settings = MetadataConfig {
            cache_capacity: 1,
            max_concurrent_requests: 3,
            ..MetadataConfig::default()
        };
        let client = CachedMetadataClient::from_config(CountingClient::default(), &settings);
        assert_eq!(client.gate().limit(), 3);

        client.movie_details(1).await.unwrap();
        client.movie_details(2).await.unwrap();
        client.movie_details(2).await.unwrap();
        assert_eq!(client.details_stats().await.entries, 1);
        assert_eq!(client.inner().calls(), 2);
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        let client = client();
        assert!(client.movie_details(0).await.is_err());
        assert!(client.movie_details(0).await.is_err());
        assert_eq!(client.inner().calls(), 2);
        assert_eq!(client.gate().available(), 2);
    }

    #[tokio::test]
    async fn test_trending_and_image_url_delegate() {
        let client = client();
        client.trending(MediaKind::Tv).await.unwrap();
        client.trending(MediaKind::Tv).await.unwrap();
        client.trending(MediaKind::Movie).await.unwrap();

        assert_eq!(client.inner().calls(), 2);
        assert_eq!(client.image_url("/x.jpg", "w92"), "https://img.test/w92/x.jpg");
    }
}
