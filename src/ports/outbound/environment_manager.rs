use crate::shared::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// EnvironmentManager port for creating isolated environments
#[async_trait]
pub trait EnvironmentManager: Send + Sync {
    /// Creates a new isolated environment with the given name.
    ///
    /// # Returns
    /// The absolute path of the created environment.
    ///
    /// # Errors
    /// Returns an error when the target path already exists or the
    /// interpreter fails to create the environment.
    async fn create(&self, name: &str) -> Result<PathBuf>;
}
