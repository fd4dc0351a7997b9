use crate::shared::error::PkgdashError;
use crate::shared::Result;
use serde::Deserialize;
use std::path::PathBuf;
use std::process::Output;
use tokio::process::Command;

/// One record from `pip show`, parsed from its key-value output.
///
/// Fields that pip prints with an empty value are None.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShowRecord {
    pub name: Option<String>,
    pub version: Option<String>,
    pub license: Option<String>,
    pub author: Option<String>,
    pub summary: Option<String>,
    /// Direct dependencies, in the order pip reports them.
    pub requires: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ListedPackage {
    name: String,
    version: String,
}

/// PipCli - async subprocess wrapper over the pip executable
///
/// All pip invocations in the codebase go through this type so the
/// command name, cache directory, index URL, and the
/// externally-managed-environment retry live in one place.
pub struct PipCli {
    pip_command: String,
    cache_dir: PathBuf,
    index_url: Option<String>,
}

impl PipCli {
    pub fn new(pip_command: String, cache_dir: PathBuf, index_url: Option<String>) -> Self {
        Self {
            pip_command,
            cache_dir,
            index_url,
        }
    }

    /// Runs pip with the given arguments, capturing output.
    ///
    /// # Errors
    /// Returns PipUnavailable when the executable cannot be spawned at all;
    /// a non-zero exit status is returned as a normal Output for the caller
    /// to interpret.
    async fn run(&self, args: &[String]) -> Result<Output> {
        Command::new(&self.pip_command)
            .args(args)
            .output()
            .await
            .map_err(|e| {
                PkgdashError::PipUnavailable {
                    command: self.pip_command.clone(),
                    details: e.to_string(),
                }
                .into()
            })
    }

    /// Runs a mutating pip command, retrying once with
    /// `--break-system-packages` when pip refuses to touch an
    /// externally managed environment.
    async fn run_with_managed_env_retry(&self, args: &[String]) -> Result<()> {
        let output = self.run(args).await?;
        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        if stderr.contains("externally-managed-environment") {
            let mut retry_args = args.to_vec();
            retry_args.push("--break-system-packages".to_string());
            let retry = self.run(&retry_args).await?;
            if retry.status.success() {
                return Ok(());
            }
            anyhow::bail!("{}", String::from_utf8_lossy(&retry.stderr).trim());
        }

        anyhow::bail!("{}", stderr.trim());
    }

    /// Fetches `pip show` records for one or more packages in a single
    /// subprocess call.
    ///
    /// Names absent from the environment are simply missing from the
    /// result; pip's non-zero exit status for them is not an error here.
    pub async fn show(&self, names: &[String]) -> Result<Vec<ShowRecord>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let mut args = vec!["show".to_string()];
        args.extend(names.iter().cloned());

        let output = self.run(&args).await?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(parse_show_output(&stdout))
    }

    /// Lists installed packages as (name, version), in pip's order.
    pub async fn list_installed(&self) -> Result<Vec<(String, String)>> {
        let args = vec!["list".to_string(), "--format=json".to_string()];
        let output = self.run(&args).await?;

        if !output.status.success() {
            anyhow::bail!(
                "pip list failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let listed: Vec<ListedPackage> = serde_json::from_str(stdout.trim())?;
        Ok(listed.into_iter().map(|p| (p.name, p.version)).collect())
    }

    /// Installs (or upgrades) one requirement.
    pub async fn install(&self, pip_argument: &str, upgrade: bool) -> Result<()> {
        let mut args = vec!["install".to_string()];
        if upgrade {
            args.push("--upgrade".to_string());
        }
        args.push("--user".to_string());
        args.push("--cache-dir".to_string());
        args.push(self.cache_dir.display().to_string());
        if let Some(index_url) = &self.index_url {
            args.push("--index-url".to_string());
            args.push(index_url.clone());
        }
        args.push(pip_argument.to_string());

        self.run_with_managed_env_retry(&args).await
    }

    /// Uninstalls a package.
    pub async fn uninstall(&self, name: &str) -> Result<()> {
        let args = vec![
            "uninstall".to_string(),
            "-y".to_string(),
            name.to_string(),
        ];
        self.run_with_managed_env_retry(&args).await
    }
}

/// Parses `pip show` output: key-value lines, records separated by `---`.
fn parse_show_output(stdout: &str) -> Vec<ShowRecord> {
    let mut records = Vec::new();
    let mut current = ShowRecord::default();
    let mut saw_field = false;

    for line in stdout.lines() {
        if line.trim() == "---" {
            if saw_field {
                records.push(std::mem::take(&mut current));
                saw_field = false;
            }
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();

        match key.trim() {
            "Name" => current.name = non_empty(value),
            "Version" => current.version = non_empty(value),
            "License" => current.license = non_empty(value),
            "Author" => current.author = non_empty(value),
            "Summary" => current.summary = non_empty(value),
            "Requires" => {
                current.requires = value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect();
            }
            _ => {}
        }
        saw_field = true;
    }

    if saw_field {
        records.push(current);
    }

    records
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
