use crate::dashboard::domain::PackageRecord;
use crate::shared::Result;
use async_trait::async_trait;

/// Outcome of resolving one package name against the environment.
///
/// Absence is a value, not an error: a missing package degrades to its
/// own dashboard line and must not abort the batch.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Found(Box<PackageRecord>),
    NotFound,
}

/// MetadataProvider port - the package-metadata collaborator contract
///
/// Abstracts how installed-package metadata is obtained (pip + registry,
/// a local index cache, a mock). The core makes no assumption about the
/// implementation beyond these three operations.
///
/// # Async Support
/// All methods are async so lookups can be parallelized. Implementations
/// must be `Send + Sync` to support concurrent access.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Resolves one package name to a full PackageRecord.
    ///
    /// # Returns
    /// `Resolution::Found` with the record, or `Resolution::NotFound` when
    /// the package is absent from the environment.
    ///
    /// # Errors
    /// Returns an error only for faults beyond simple absence: the package
    /// manager could not be executed, or its metadata is malformed.
    async fn resolve(&self, name: &str) -> Result<Resolution>;

    /// Lists the names of all installed packages, in the order the
    /// underlying package manager reports them.
    ///
    /// # Errors
    /// A failure here is fatal to the list command: without the installed
    /// set there is nothing to render.
    async fn list_installed(&self) -> Result<Vec<String>>;

    /// Checks the latest version available for a package.
    ///
    /// # Returns
    /// The latest version, or None when it cannot be determined (offline
    /// mode, registry unreachable, unknown package).
    async fn check_latest(&self, name: &str) -> Option<String>;
}
