use crate::adapters::outbound::filesystem::InstallStateStore;
use crate::adapters::outbound::process::{PipCli, ShowRecord};
use crate::dashboard::domain::{DependencyRef, PackageRecord};
use crate::dashboard::policies::LicensePriority;
use crate::dashboard::services::DependencyPartitioner;
use crate::ports::outbound::{MetadataProvider, RegistryClient, RegistryMetadata, Resolution};
use crate::shared::error::PkgdashError;
use crate::shared::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// One snapshot of the environment, taken lazily on first use and held for
/// the rest of the invocation. Nothing here outlives the process.
struct EnvironmentSnapshot {
    /// Installed package names in the order pip reports them.
    order: Vec<String>,
    /// pip show records, keyed by normalized name.
    records: HashMap<String, ShowRecord>,
    /// Installed versions, keyed by normalized name.
    versions: HashMap<String, String>,
    /// Direct-dependency map (display names), in pip's Requires order.
    dependency_map: HashMap<String, Vec<String>>,
}

/// PipMetadataProvider adapter - implements the MetadataProvider port by
/// composing pip, the registry client, and the install-state store.
///
/// `pip list` and one batched `pip show` build a per-invocation snapshot;
/// resolving individual names is then a map lookup plus best-effort
/// registry enrichment. A registry failure degrades the affected fields
/// (latest version unknown, no security check) and never aborts a resolve.
pub struct PipMetadataProvider<R: RegistryClient> {
    cli: PipCli,
    state: Arc<InstallStateStore>,
    /// None in offline mode.
    registry: Option<Arc<R>>,
    environment: OnceCell<EnvironmentSnapshot>,
}

fn normalized(name: &str) -> String {
    name.to_lowercase().replace('_', "-")
}

impl<R: RegistryClient> PipMetadataProvider<R> {
    pub fn new(cli: PipCli, state: Arc<InstallStateStore>, registry: Option<Arc<R>>) -> Self {
        Self {
            cli,
            state,
            registry,
            environment: OnceCell::new(),
        }
    }

    async fn snapshot(&self) -> Result<&EnvironmentSnapshot> {
        self.environment
            .get_or_try_init(|| self.build_snapshot())
            .await
    }

    async fn build_snapshot(&self) -> Result<EnvironmentSnapshot> {
        let listed = self.cli.list_installed().await.map_err(|e| {
            PkgdashError::EnvironmentUnavailable {
                details: e.to_string(),
            }
        })?;

        let order: Vec<String> = listed.iter().map(|(name, _)| name.clone()).collect();
        let versions: HashMap<String, String> = listed
            .iter()
            .map(|(name, version)| (normalized(name), version.clone()))
            .collect();

        let show_records = self.cli.show(&order).await?;
        let mut records = HashMap::new();
        let mut dependency_map = HashMap::new();
        for record in show_records {
            let Some(name) = record.name.clone() else {
                continue;
            };
            dependency_map.insert(name.clone(), record.requires.clone());
            records.insert(normalized(&name), record);
        }

        Ok(EnvironmentSnapshot {
            order,
            records,
            versions,
            dependency_map,
        })
    }

    /// Registry enrichment for one package; errors collapse into the
    /// degraded-fields case.
    async fn registry_metadata(&self, normalized_name: &str) -> Option<RegistryMetadata> {
        let registry = self.registry.as_ref()?;
        registry.fetch_metadata(normalized_name).await.ok()
    }

    /// The security-verified check: the registry publishes a digest for the
    /// installed release and it matches the digest recorded at install
    /// time. With no recorded digest, a published digest alone verifies.
    async fn verify_security(&self, normalized_name: &str, display_name: &str, version: &str) -> bool {
        let Some(registry) = self.registry.as_ref() else {
            return false;
        };
        let published = match registry.fetch_release_digest(normalized_name, version).await {
            Ok(Some(digest)) => digest,
            _ => return false,
        };

        match self
            .state
            .entry(display_name)
            .and_then(|entry| entry.security_hash)
        {
            Some(recorded) => recorded == published,
            None => true,
        }
    }

    fn dependency_refs(snapshot: &EnvironmentSnapshot, names: &[String]) -> Vec<DependencyRef> {
        names
            .iter()
            .map(|name| {
                DependencyRef::new(
                    name.clone(),
                    snapshot.versions.get(&normalized(name)).cloned(),
                )
            })
            .collect()
    }
}

#[async_trait]
impl<R: RegistryClient> MetadataProvider for PipMetadataProvider<R> {
    async fn resolve(&self, name: &str) -> Result<Resolution> {
        let snapshot = self.snapshot().await?;
        let key = normalized(name);

        let Some(record) = snapshot.records.get(&key) else {
            return Ok(Resolution::NotFound);
        };

        let display_name = record.name.clone().unwrap_or_else(|| name.to_string());
        let current_version =
            record
                .version
                .clone()
                .ok_or_else(|| PkgdashError::MalformedMetadata {
                    name: display_name.clone(),
                    missing: "Version".to_string(),
                })?;

        let metadata = self.registry_metadata(&key).await.unwrap_or_default();
        let security_verified = self
            .verify_security(&key, &display_name, &current_version)
            .await;

        // pip's own License field wins; registry metadata fills the gaps.
        let license = LicensePriority::select_license(record.license.clone(), None, &[]).or_else(
            || {
                LicensePriority::select_license(
                    metadata.license.clone(),
                    metadata.license_expression.clone(),
                    &metadata.classifiers,
                )
            },
        );

        let (direct, transitive) =
            DependencyPartitioner::partition(&display_name, &snapshot.dependency_map);

        Ok(Resolution::Found(Box::new(PackageRecord {
            name: display_name.clone(),
            current_version,
            latest_version: metadata.latest_version,
            license,
            author: record.author.clone().or(metadata.author),
            summary: record.summary.clone().or(metadata.summary),
            install_date: self.state.install_date(&display_name),
            security_verified,
            direct_dependencies: Self::dependency_refs(snapshot, &direct),
            transitive_dependencies: Self::dependency_refs(snapshot, &transitive),
        })))
    }

    async fn list_installed(&self) -> Result<Vec<String>> {
        Ok(self.snapshot().await?.order.clone())
    }

    async fn check_latest(&self, name: &str) -> Option<String> {
        self.registry_metadata(&normalized(name))
            .await
            .and_then(|metadata| metadata.latest_version)
    }
}
