use crate::ports::outbound::{RegistryClient, RegistryMetadata};
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// Cache key for release digests
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct DigestKey {
    package_name: String,
    version: String,
}

impl DigestKey {
    fn new(package_name: &str, version: &str) -> Self {
        Self {
            package_name: package_name.to_string(),
            version: version.to_string(),
        }
    }
}

/// CachingRegistryClient wraps a RegistryClient and adds in-memory caching.
///
/// Implements the decorator pattern so a package appearing in several
/// dependency trees is fetched from the registry once per invocation.
/// The cache is thread-safe and suitable for concurrent lookups; it lives
/// and dies with a single command invocation and is never persisted.
pub struct CachingRegistryClient<R: RegistryClient> {
    inner: R,
    metadata_cache: Arc<DashMap<String, RegistryMetadata>>,
    digest_cache: Arc<DashMap<DigestKey, Option<String>>>,
}

impl<R: RegistryClient> CachingRegistryClient<R> {
    /// Creates a new caching client wrapping the given inner client
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            metadata_cache: Arc::new(DashMap::new()),
            digest_cache: Arc::new(DashMap::new()),
        }
    }

    /// Returns the current metadata cache size (for testing/monitoring)
    #[cfg(test)]
    pub fn metadata_cache_size(&self) -> usize {
        self.metadata_cache.len()
    }
}

#[async_trait]
impl<R: RegistryClient> RegistryClient for CachingRegistryClient<R> {
    async fn fetch_metadata(&self, package_name: &str) -> Result<RegistryMetadata> {
        if let Some(cached) = self.metadata_cache.get(package_name) {
            return Ok(cached.clone());
        }

        let metadata = self.inner.fetch_metadata(package_name).await?;
        self.metadata_cache
            .insert(package_name.to_string(), metadata.clone());

        Ok(metadata)
    }

    async fn fetch_release_digest(
        &self,
        package_name: &str,
        version: &str,
    ) -> Result<Option<String>> {
        let key = DigestKey::new(package_name, version);

        if let Some(cached) = self.digest_cache.get(&key) {
            return Ok(cached.clone());
        }

        let digest = self
            .inner
            .fetch_release_digest(package_name, version)
            .await?;
        self.digest_cache.insert(key, digest.clone());

        Ok(digest)
    }
}
