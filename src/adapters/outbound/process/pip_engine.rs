use super::PipCli;
use crate::adapters::outbound::filesystem::InstallStateStore;
use crate::dashboard::domain::Requirement;
use crate::ports::outbound::{PackageEngine, RegistryClient, UpdateOutcome};
use crate::shared::error::PkgdashError;
use crate::shared::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// PipPackageEngine adapter - install/remove/update passthrough to pip
///
/// Implements the PackageEngine port. After a successful install or update
/// the engine re-reads the installed version via `pip show` (pip's exit
/// status alone does not say which version landed) and records install
/// state, including the registry digest used later by the
/// security-verified check.
pub struct PipPackageEngine<R: RegistryClient> {
    cli: PipCli,
    state: Arc<InstallStateStore>,
    /// None in offline mode; installs then record no digest.
    registry: Option<Arc<R>>,
}

impl<R: RegistryClient> PipPackageEngine<R> {
    pub fn new(cli: PipCli, state: Arc<InstallStateStore>, registry: Option<Arc<R>>) -> Self {
        Self {
            cli,
            state,
            registry,
        }
    }

    /// Best-effort digest lookup; a registry failure never fails the
    /// surrounding install.
    async fn release_digest(&self, normalized_name: &str, version: &str) -> Option<String> {
        let registry = self.registry.as_ref()?;
        registry
            .fetch_release_digest(normalized_name, version)
            .await
            .ok()
            .flatten()
    }

    async fn installed_version(&self, name: &str) -> Result<Option<String>> {
        let records = self.cli.show(&[name.to_string()]).await?;
        Ok(records.into_iter().next().and_then(|r| r.version))
    }
}

#[async_trait]
impl<R: RegistryClient> PackageEngine for PipPackageEngine<R> {
    async fn install(&self, requirement: &Requirement) -> Result<String> {
        let name = requirement.name.as_str();

        self.cli
            .install(&requirement.pip_argument(), false)
            .await
            .map_err(|e| PkgdashError::InstallFailed {
                name: name.to_string(),
                details: e.to_string(),
            })?;

        let version = self.installed_version(name).await?.ok_or_else(|| {
            PkgdashError::InstallFailed {
                name: name.to_string(),
                details: "could not determine the installed version".to_string(),
            }
        })?;

        let digest = self
            .release_digest(&requirement.name.normalized(), &version)
            .await;
        self.state.record_install(name, &version, digest)?;

        Ok(version)
    }

    async fn remove(&self, name: &str) -> Result<()> {
        self.cli
            .uninstall(name)
            .await
            .map_err(|e| PkgdashError::RemoveFailed {
                name: name.to_string(),
                details: e.to_string(),
            })?;

        self.state.remove(name)?;
        Ok(())
    }

    async fn update(&self, name: &str) -> Result<UpdateOutcome> {
        let before = self.installed_version(name).await?;
        if before.is_none() {
            // pip install --upgrade would happily install a missing
            // package; update only operates on installed ones.
            return Err(PkgdashError::PackageNotFound {
                name: name.to_string(),
            }
            .into());
        }

        self.cli
            .install(name, true)
            .await
            .map_err(|e| PkgdashError::UpdateFailed {
                name: name.to_string(),
                details: e.to_string(),
            })?;

        let after = self.installed_version(name).await?.ok_or_else(|| {
            PkgdashError::UpdateFailed {
                name: name.to_string(),
                details: "could not determine the installed version".to_string(),
            }
        })?;

        let normalized = name.to_lowercase().replace('_', "-");
        let digest = self.release_digest(&normalized, &after).await;
        self.state.record_update(name, &after, digest)?;

        if before.as_deref() == Some(after.as_str()) {
            Ok(UpdateOutcome::AlreadyLatest { version: after })
        } else {
            Ok(UpdateOutcome::Updated {
                from: before,
                to: after,
            })
        }
    }
}
