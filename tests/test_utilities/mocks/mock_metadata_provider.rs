use async_trait::async_trait;
use pkgdash::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

/// Mock MetadataProvider for testing
///
/// Records are returned in whatever state they were registered; resolve
/// calls can be delayed per name to exercise the ordering guarantee.
pub struct MockMetadataProvider {
    records: HashMap<String, PackageRecord>,
    installed_order: Vec<String>,
    resolve_errors: HashMap<String, String>,
    resolve_delays: HashMap<String, Duration>,
    list_fails: bool,
}

impl MockMetadataProvider {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            installed_order: Vec::new(),
            resolve_errors: HashMap::new(),
            resolve_delays: HashMap::new(),
            list_fails: false,
        }
    }

    pub fn with_record(mut self, record: PackageRecord) -> Self {
        self.installed_order.push(record.name.clone());
        self.records.insert(record.name.clone(), record);
        self
    }

    pub fn with_resolve_error(mut self, name: &str, message: &str) -> Self {
        self.resolve_errors
            .insert(name.to_string(), message.to_string());
        self
    }

    pub fn with_resolve_delay(mut self, name: &str, delay: Duration) -> Self {
        self.resolve_delays.insert(name.to_string(), delay);
        self
    }

    pub fn with_list_failure() -> Self {
        let mut mock = Self::new();
        mock.list_fails = true;
        mock
    }

    /// A minimal resolved record for tests that only care about presence.
    pub fn simple_record(name: &str, current: &str, latest: &str) -> PackageRecord {
        PackageRecord {
            name: name.to_string(),
            current_version: current.to_string(),
            latest_version: Some(latest.to_string()),
            license: Some("MIT".to_string()),
            author: Some("Test Author".to_string()),
            summary: Some(format!("{} test package", name)),
            install_date: None,
            security_verified: false,
            direct_dependencies: vec![],
            transitive_dependencies: vec![],
        }
    }
}

impl Default for MockMetadataProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetadataProvider for MockMetadataProvider {
    async fn resolve(&self, name: &str) -> Result<Resolution> {
        if let Some(delay) = self.resolve_delays.get(name) {
            tokio::time::sleep(*delay).await;
        }

        if let Some(message) = self.resolve_errors.get(name) {
            anyhow::bail!("{}", message);
        }

        match self.records.get(name) {
            Some(record) => Ok(Resolution::Found(Box::new(record.clone()))),
            None => Ok(Resolution::NotFound),
        }
    }

    async fn list_installed(&self) -> Result<Vec<String>> {
        if self.list_fails {
            anyhow::bail!("Mock metadata source unreachable");
        }
        Ok(self.installed_order.clone())
    }

    async fn check_latest(&self, name: &str) -> Option<String> {
        self.records.get(name)?.latest_version.clone()
    }
}
