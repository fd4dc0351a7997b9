use async_trait::async_trait;
use pkgdash::prelude::*;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock PackageEngine for testing
pub struct MockPackageEngine {
    install_versions: HashMap<String, String>,
    failures: HashMap<String, String>,
    update_outcomes: HashMap<String, UpdateOutcome>,
    removed: Mutex<Vec<String>>,
}

impl MockPackageEngine {
    pub fn new() -> Self {
        Self {
            install_versions: HashMap::new(),
            failures: HashMap::new(),
            update_outcomes: HashMap::new(),
            removed: Mutex::new(Vec::new()),
        }
    }

    pub fn with_install(mut self, name: &str, version: &str) -> Self {
        self.install_versions
            .insert(name.to_string(), version.to_string());
        self
    }

    pub fn with_failure(mut self, name: &str, reason: &str) -> Self {
        self.failures.insert(name.to_string(), reason.to_string());
        self
    }

    pub fn with_update_outcome(mut self, name: &str, outcome: UpdateOutcome) -> Self {
        self.update_outcomes.insert(name.to_string(), outcome);
        self
    }

    pub fn removed_packages(&self) -> Vec<String> {
        self.removed.lock().unwrap().clone()
    }
}

impl Default for MockPackageEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PackageEngine for MockPackageEngine {
    async fn install(&self, requirement: &Requirement) -> Result<String> {
        let name = requirement.name.as_str();
        if let Some(reason) = self.failures.get(name) {
            anyhow::bail!("{}", reason);
        }
        match self.install_versions.get(name) {
            Some(version) => Ok(version.clone()),
            None => anyhow::bail!("No release found for {}", name),
        }
    }

    async fn remove(&self, name: &str) -> Result<()> {
        if let Some(reason) = self.failures.get(name) {
            anyhow::bail!("{}", reason);
        }
        self.removed.lock().unwrap().push(name.to_string());
        Ok(())
    }

    async fn update(&self, name: &str) -> Result<UpdateOutcome> {
        if let Some(reason) = self.failures.get(name) {
            anyhow::bail!("{}", reason);
        }
        match self.update_outcomes.get(name) {
            Some(outcome) => Ok(outcome.clone()),
            None => Ok(UpdateOutcome::AlreadyLatest {
                version: "1.0.0".to_string(),
            }),
        }
    }
}
