use crate::application::dto::InstallReport;
use crate::dashboard::domain::Requirement;
use crate::ports::outbound::{PackageEngine, ProgressReporter};
use crate::shared::error::{error_summary, PkgdashError};
use crate::shared::Result;
use futures::stream::{self, StreamExt};

/// Bounded worker count for concurrent installs.
const MAX_PARALLEL_INSTALLS: usize = 4;

/// InstallPackagesUseCase - installs one or more requirements through the
/// PackageEngine port
///
/// Installs run concurrently with a bounded worker count; the report lists
/// successes and failures in request order. One failing name never aborts
/// the rest of the batch.
///
/// # Type Parameters
/// * `PE` - PackageEngine implementation
/// * `PR` - ProgressReporter implementation
pub struct InstallPackagesUseCase<PE, PR> {
    engine: PE,
    progress_reporter: PR,
}

impl<PE, PR> InstallPackagesUseCase<PE, PR>
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

    /// Executes the install use case
    ///
    /// # Arguments
    /// * `specs` - Requirement strings (`name` or `name==version`)
    ///
    /// # Returns
    /// An InstallReport with per-name outcomes; the caller decides the
    /// exit code from `all_succeeded()`.
    pub async fn execute(&self, specs: &[String]) -> Result<InstallReport> {
        if specs.is_empty() {
            return Err(PkgdashError::Validation {
                message: "No packages given to install".to_string(),
            }
            .into());
        }

        self.progress_reporter
            .report(&format!("📦 Installing {} package(s)...", specs.len()));

        let mut results: Vec<(usize, String, std::result::Result<String, String>)> =
            stream::iter(specs.iter().cloned().enumerate())
                .map(|(idx, spec)| {
                    let engine = &self.engine;
                    async move {
                        match Requirement::parse(&spec) {
                            Ok(requirement) => {
                                let name = requirement.name.to_string();
                                match engine.install(&requirement).await {
                                    Ok(version) => (idx, name, Ok(version)),
                                    Err(e) => (idx, name, Err(error_summary(&e))),
                                }
                            }
                            Err(e) => (idx, spec, Err(error_summary(&e))),
                        }
                    }
                })
                .buffer_unordered(MAX_PARALLEL_INSTALLS)
                .collect()
                .await;

        results.sort_by_key(|(idx, ..)| *idx);

        let total = results.len();
        let mut report = InstallReport::default();
        for (done, (_, name, outcome)) in results.into_iter().enumerate() {
            self.progress_reporter
                .report_progress(done + 1, total, Some(name.as_str()));
            match outcome {
                Ok(version) => {
                    self.progress_reporter
                        .report(&format!("  ✓ {}=={} installed successfully", name, version));
                    report.succeeded.push((name, version));
                }
                Err(reason) => {
                    self.progress_reporter
                        .report_error(&format!("  ✗ {}: {}", name, reason));
                    report.failed.push((name, reason));
                }
            }
        }

        if report.all_succeeded() {
            self.progress_reporter.report_completion(&format!(
                "✅ Installed {} package(s)",
                report.succeeded.len()
            ));
        } else {
            self.progress_reporter.report_completion(&format!(
                "⚠️  {} of {} package(s) failed to install",
                report.failed.len(),
                specs.len()
            ));
        }

        Ok(report)
    }
}
