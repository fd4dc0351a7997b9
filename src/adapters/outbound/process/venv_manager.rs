use crate::ports::outbound::EnvironmentManager;
use crate::shared::error::PkgdashError;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// PythonVenvManager adapter - creates virtual environments via
/// `python -m venv`
pub struct PythonVenvManager {
    python_command: String,
}

impl PythonVenvManager {
    pub fn new(python_command: String) -> Self {
        Self { python_command }
    }

    fn resolve_path(name: &str) -> Result<PathBuf> {
        let candidate = Path::new(name);
        if candidate.is_absolute() {
            Ok(candidate.to_path_buf())
        } else {
            Ok(std::env::current_dir()?.join(candidate))
        }
    }
}

#[async_trait]
impl EnvironmentManager for PythonVenvManager {
    async fn create(&self, name: &str) -> Result<PathBuf> {
        if name.trim().is_empty() {
            return Err(PkgdashError::Validation {
                message: "Virtual environment name cannot be empty".to_string(),
            }
            .into());
        }

        let path = Self::resolve_path(name)?;
        if path.exists() {
            return Err(PkgdashError::VenvAlreadyExists { path }.into());
        }

        let output = Command::new(&self.python_command)
            .arg("-m")
            .arg("venv")
            .arg(&path)
            .output()
            .await
            .map_err(|e| PkgdashError::VenvCreationFailed {
                path: path.clone(),
                command: self.python_command.clone(),
                details: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(PkgdashError::VenvCreationFailed {
                path,
                command: self.python_command.clone(),
                details: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_create_refuses_existing_path() {
        let temp_dir = TempDir::new().unwrap();
        let manager = PythonVenvManager::new("python3".to_string());

        let result = manager
            .create(temp_dir.path().to_str().unwrap())
            .await;

        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("already exists"));
    }

    #[tokio::test]
    async fn test_create_rejects_empty_name() {
        let manager = PythonVenvManager::new("python3".to_string());
        let result = manager.create("  ").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_create_reports_missing_interpreter() {
        let temp_dir = TempDir::new().unwrap();
        let manager = PythonVenvManager::new("definitely-not-a-python".to_string());

        let target = temp_dir.path().join("env");
        let result = manager.create(target.to_str().unwrap()).await;

        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to create virtual environment"));
    }
}
