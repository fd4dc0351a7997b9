use crate::dashboard::domain::Requirement;
use crate::shared::Result;
use async_trait::async_trait;

/// Outcome of an update operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The package was already at the latest compatible version.
    AlreadyLatest { version: String },
    /// The package was upgraded.
    Updated { from: Option<String>, to: String },
}

/// PackageEngine port - passthrough operations on the underlying
/// package manager
///
/// Install/remove/update are delegations: this tool performs no
/// resolution of its own.
///
/// # Async Support
/// Operations shell out to the package manager and are async so multiple
/// installs can run concurrently. Implementations must be `Send + Sync`.
#[async_trait]
pub trait PackageEngine: Send + Sync {
    /// Installs one requirement.
    ///
    /// # Returns
    /// The version that ended up installed.
    ///
    /// # Errors
    /// Returns an error when the underlying package manager reports
    /// failure or the installed version cannot be determined afterwards.
    async fn install(&self, requirement: &Requirement) -> Result<String>;

    /// Uninstalls a package by name.
    ///
    /// # Errors
    /// Returns an error when the underlying package manager reports
    /// failure.
    async fn remove(&self, name: &str) -> Result<()>;

    /// Upgrades a package to the latest compatible version.
    ///
    /// # Errors
    /// Returns an error when the underlying package manager reports
    /// failure or the resulting version cannot be determined.
    async fn update(&self, name: &str) -> Result<UpdateOutcome>;
}
