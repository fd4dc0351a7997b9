use crate::dashboard::domain::{base_name, PackageName};
use crate::ports::outbound::{PackageEngine, ProgressReporter};
use crate::shared::Result;

/// RemovePackageUseCase - uninstalls a package through the PackageEngine port
pub struct RemovePackageUseCase<PE, PR> {
    engine: PE,
    progress_reporter: PR,
}

impl<PE, PR> RemovePackageUseCase<PE, PR>
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

    /// Executes the remove use case for one package name.
    pub async fn execute(&self, name: &str) -> Result<()> {
        let package = PackageName::new(base_name(name).to_string())?;

        self.progress_reporter
            .report(&format!("📦 Removing {}...", package));

        self.engine.remove(package.as_str()).await?;

        self.progress_reporter
            .report_completion(&format!("✅ {} uninstalled successfully", package));
        Ok(())
    }
}
