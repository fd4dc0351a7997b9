use crate::dashboard::domain::{base_name, PackageName};
use crate::ports::outbound::{PackageEngine, ProgressReporter, UpdateOutcome};
use crate::shared::Result;

/// UpdatePackageUseCase - upgrades a package through the PackageEngine port
pub struct UpdatePackageUseCase<PE, PR> {
    engine: PE,
    progress_reporter: PR,
}

impl<PE, PR> UpdatePackageUseCase<PE, PR>
where
    PE: PackageEngine,
    PR: ProgressReporter,
{
    pub fn new(engine: PE, progress_reporter: PR) -> Self {
        Self {
            engine,
            progress_reporter,
        }
    }

    /// Executes the update use case for one package name.
    pub async fn execute(&self, name: &str) -> Result<UpdateOutcome> {
        let package = PackageName::new(base_name(name).to_string())?;

        self.progress_reporter
            .report(&format!("📦 Updating {}...", package));

        let outcome = self.engine.update(package.as_str()).await?;

        match &outcome {
            UpdateOutcome::AlreadyLatest { version } => {
                self.progress_reporter.report_completion(&format!(
                    "✅ {} is already at the latest version {}",
                    package, version
                ));
            }
            UpdateOutcome::Updated {
                from: Some(from),
                to,
            } => {
                self.progress_reporter.report_completion(&format!(
                    "✅ {} updated from {} to {}",
                    package, from, to
                ));
            }
            UpdateOutcome::Updated { from: None, to } => {
                self.progress_reporter
                    .report_completion(&format!("✅ {} updated to {}", package, to));
            }
        }

        Ok(outcome)
    }
}
