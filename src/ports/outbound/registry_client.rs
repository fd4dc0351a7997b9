use crate::shared::Result;
use async_trait::async_trait;

/// Package metadata as published by the registry (e.g. the PyPI JSON API).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistryMetadata {
    /// Most recent released version.
    pub latest_version: Option<String>,
    pub license: Option<String>,
    pub license_expression: Option<String>,
    pub classifiers: Vec<String>,
    pub summary: Option<String>,
    pub author: Option<String>,
}

/// RegistryClient port for querying the package registry
///
/// Abstracts the external index used to retrieve latest-version, license,
/// and integrity information. Lookups are best-effort from the caller's
/// point of view: a failure degrades the affected dashboard fields, it
/// never aborts a batch.
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// Fetches registry metadata for a package (latest release).
    ///
    /// # Errors
    /// Returns an error if the network request fails, the registry returns
    /// an error status, or the response cannot be parsed.
    async fn fetch_metadata(&self, package_name: &str) -> Result<RegistryMetadata>;

    /// Fetches the sha256 digest published for a specific release.
    ///
    /// # Returns
    /// The digest of the first release file, or None when the registry
    /// publishes no digest for that version.
    ///
    /// # Errors
    /// Returns an error if the network request fails or the response
    /// cannot be parsed.
    async fn fetch_release_digest(
        &self,
        package_name: &str,
        version: &str,
    ) -> Result<Option<String>>;
}
