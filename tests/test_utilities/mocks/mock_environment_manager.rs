use async_trait::async_trait;
use pkgdash::prelude::*;
use std::path::PathBuf;
use std::sync::Mutex;

/// Mock EnvironmentManager for testing
pub struct MockEnvironmentManager {
    base: PathBuf,
    existing: Vec<String>,
    created: Mutex<Vec<String>>,
}

impl MockEnvironmentManager {
    pub fn new(base: PathBuf) -> Self {
        Self {
            base,
            existing: Vec::new(),
            created: Mutex::new(Vec::new()),
        }
    }

    pub fn with_existing(mut self, name: &str) -> Self {
        self.existing.push(name.to_string());
        self
    }

    pub fn created_environments(&self) -> Vec<String> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl EnvironmentManager for MockEnvironmentManager {
    async fn create(&self, name: &str) -> Result<PathBuf> {
        if self.existing.iter().any(|e| e == name) {
            anyhow::bail!("Virtual environment already exists: {}", name);
        }
        self.created.lock().unwrap().push(name.to_string());
        Ok(self.base.join(name))
    }
}
