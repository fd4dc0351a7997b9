use crate::ports::outbound::{EnvironmentManager, ProgressReporter};
use crate::shared::Result;
use std::path::PathBuf;

/// CreateVenvUseCase - creates an isolated environment through the
/// EnvironmentManager port and prints activation instructions
pub struct CreateVenvUseCase<EM, PR> {
    environment_manager: EM,
    progress_reporter: PR,
}

impl<EM, PR> CreateVenvUseCase<EM, PR>
where
    EM: EnvironmentManager,
    PR: ProgressReporter,
{
    pub fn new(environment_manager: EM, progress_reporter: PR) -> Self {
        Self {
            environment_manager,
            progress_reporter,
        }
    }

    /// Executes the venv creation use case.
    pub async fn execute(&self, name: &str) -> Result<PathBuf> {
        let path = self.environment_manager.create(name).await?;

        self.progress_reporter.report(&format!(
            "✅ Virtual environment created successfully at: {}",
            path.display()
        ));
        self.progress_reporter.report("");
        self.progress_reporter
            .report("To activate the virtual environment:");
        self.progress_reporter
            .report(&format!("  Windows: {}\\Scripts\\activate", path.display()));
        self.progress_reporter
            .report(&format!("  Unix/MacOS: source {}/bin/activate", path.display()));

        Ok(path)
    }
}
