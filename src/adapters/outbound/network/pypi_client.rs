use crate::ports::outbound::{RegistryClient, RegistryMetadata};
use crate::shared::error::PkgdashError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct PyPiPackageResponse {
    info: PyPiInfo,
    #[serde(default)]
    urls: Vec<PyPiReleaseFile>,
}

#[derive(Debug, Deserialize)]
struct PyPiInfo {
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    license: Option<String>,
    #[serde(default)]
    license_expression: Option<String>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    classifiers: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct PyPiReleaseFile {
    #[serde(default)]
    digests: PyPiDigests,
}

#[derive(Debug, Deserialize, Default)]
struct PyPiDigests {
    #[serde(default)]
    sha256: Option<String>,
}

/// PyPiRegistryClient adapter for querying the PyPI JSON API
///
/// Implements the RegistryClient port, providing async network access to
/// package metadata: latest version, license, author, summary, and the
/// sha256 digests used for the security-verified check.
pub struct PyPiRegistryClient {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
}

impl PyPiRegistryClient {
    const DEFAULT_BASE_URL: &'static str = "https://pypi.org/pypi";

    /// Creates a new PyPI client with the given request timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("pkgdash/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            max_retries: 3,
        })
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Fetches a PyPI payload with retry logic (linear backoff)
    async fn fetch_with_retry(&self, url: &str) -> Result<PyPiPackageResponse> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.fetch_json(url).await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    }
                }
            }
        }

        Err(last_error.unwrap())
    }

    /// Validates and sanitizes a URL path component
    fn validate_url_component(component: &str, component_type: &str) -> Result<()> {
        // Security: Prevent URL injection attacks
        if component.contains('/') || component.contains('\\') {
            anyhow::bail!(
                "Security: {} contains path separators which are not allowed",
                component_type
            );
        }

        if component.contains("..") {
            anyhow::bail!(
                "Security: {} contains '..' which is not allowed",
                component_type
            );
        }

        if component.contains('#') || component.contains('?') || component.contains('@') {
            anyhow::bail!(
                "Security: {} contains URL-unsafe characters",
                component_type
            );
        }

        Ok(())
    }

    async fn fetch_json(&self, url: &str) -> Result<PyPiPackageResponse> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("Registry returned status code {}", response.status());
        }

        let payload: PyPiPackageResponse = response.json().await?;
        Ok(payload)
    }

    fn package_url(&self, package_name: &str) -> Result<String> {
        Self::validate_url_component(package_name, "Package name")?;
        let encoded = urlencoding::encode(package_name);
        Ok(format!("{}/{}/json", self.base_url, encoded))
    }

    fn release_url(&self, package_name: &str, version: &str) -> Result<String> {
        Self::validate_url_component(package_name, "Package name")?;
        Self::validate_url_component(version, "Version")?;
        let encoded_package = urlencoding::encode(package_name);
        let encoded_version = urlencoding::encode(version);
        Ok(format!(
            "{}/{}/{}/json",
            self.base_url, encoded_package, encoded_version
        ))
    }
}

#[async_trait]
impl RegistryClient for PyPiRegistryClient {
    async fn fetch_metadata(&self, package_name: &str) -> Result<RegistryMetadata> {
        let url = self.package_url(package_name)?;
        let payload = self.fetch_with_retry(&url).await.map_err(|e| {
            PkgdashError::RegistryLookup {
                name: package_name.to_string(),
                details: e.to_string(),
            }
        })?;

        Ok(RegistryMetadata {
            latest_version: payload.info.version,
            license: payload.info.license,
            license_expression: payload.info.license_expression,
            classifiers: payload.info.classifiers,
            summary: payload.info.summary,
            author: payload.info.author,
        })
    }

    async fn fetch_release_digest(
        &self,
        package_name: &str,
        version: &str,
    ) -> Result<Option<String>> {
        let url = self.release_url(package_name, version)?;
        let payload = self.fetch_with_retry(&url).await.map_err(|e| {
            PkgdashError::RegistryLookup {
                name: package_name.to_string(),
                details: e.to_string(),
            }
        })?;

        Ok(payload
            .urls
            .into_iter()
            .find_map(|file| file.digests.sha256))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pypi_client_creation() {
        let client = PyPiRegistryClient::new(Duration::from_secs(10));
        assert!(client.is_ok());
    }

    #[test]
    fn test_package_url_encodes_name() {
        let client = PyPiRegistryClient::new(Duration::from_secs(10)).unwrap();
        let url = client.package_url("charset-normalizer").unwrap();
        assert_eq!(url, "https://pypi.org/pypi/charset-normalizer/json");
    }

    #[test]
    fn test_release_url_includes_version() {
        let client = PyPiRegistryClient::new(Duration::from_secs(10))
            .unwrap()
            .with_base_url("http://localhost:9/pypi".to_string());
        let url = client.release_url("requests", "2.32.3").unwrap();
        assert_eq!(url, "http://localhost:9/pypi/requests/2.32.3/json");
    }

    #[test]
    fn test_validate_url_component_rejects_path_separators() {
        let result = PyPiRegistryClient::validate_url_component("a/b", "Package name");
        assert!(result.is_err());
        let result = PyPiRegistryClient::validate_url_component("a\\b", "Package name");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_url_component_rejects_traversal() {
        let result = PyPiRegistryClient::validate_url_component("..", "Package name");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_url_component_rejects_unsafe_characters() {
        for component in ["a#b", "a?b", "a@b"] {
            assert!(PyPiRegistryClient::validate_url_component(component, "Version").is_err());
        }
    }

    #[test]
    fn test_validate_url_component_accepts_normal_names() {
        assert!(PyPiRegistryClient::validate_url_component("requests", "Package name").is_ok());
        assert!(PyPiRegistryClient::validate_url_component("2.32.3", "Version").is_ok());
    }

    // Integration tests - require network access
    // Uncomment to run against the real PyPI API
    // #[tokio::test]
    // async fn test_fetch_metadata_real() {
    //     let client = PyPiRegistryClient::new(Duration::from_secs(10)).unwrap();
    //     let metadata = client.fetch_metadata("requests").await.unwrap();
    //     assert!(metadata.latest_version.is_some());
    // }
}
