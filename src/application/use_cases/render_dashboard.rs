use crate::application::dto::{DashboardRequest, DashboardResponse};
use crate::dashboard::domain::DashboardEntry;
use crate::dashboard::services::TreeRenderer;
use crate::ports::outbound::{MetadataProvider, ProgressReporter, Resolution};
use crate::shared::error::error_summary;
use crate::shared::Result;
use futures::stream::{self, StreamExt};
use std::time::Duration;

/// RenderDashboardUseCase - core use case behind the `list` command
///
/// Resolves each requested package through the MetadataProvider port with
/// bounded concurrency, then renders the Package Version Dashboard.
///
/// Ordering guarantee: the rendered output order always matches the input
/// name order, regardless of lookup completion order. A timed-out lookup
/// degrades to that package's `!` entry and never blocks the others.
///
/// # Type Parameters
/// * `MP` - MetadataProvider implementation
/// * `PR` - ProgressReporter implementation
pub struct RenderDashboardUseCase<MP, PR> {
    provider: MP,
    progress_reporter: PR,
    resolve_timeout: Duration,
    max_concurrent: usize,
}

impl<MP, PR> RenderDashboardUseCase<MP, PR>
where
    MP: MetadataProvider,
    PR: ProgressReporter,
{
    /// Creates a new RenderDashboardUseCase with injected dependencies
    pub fn new(
        provider: MP,
        progress_reporter: PR,
        resolve_timeout: Duration,
        max_concurrent: usize,
    ) -> Self {
        Self {
            provider,
            progress_reporter,
            resolve_timeout,
            max_concurrent: max_concurrent.max(1),
        }
    }

    /// Executes the dashboard rendering use case
    ///
    /// # Arguments
    /// * `request` - The names to render; empty means every installed package
    ///
    /// # Returns
    /// The rendered dashboard text plus per-entry outcome counts
    ///
    /// # Errors
    /// Only a failure to obtain the installed-package list at all is an
    /// error; per-package faults degrade to `?`/`!` entries.
    pub async fn execute(&self, request: DashboardRequest) -> Result<DashboardResponse> {
        let names = self.requested_names(&request).await?;

        if names.is_empty() {
            self.progress_reporter.report("No packages installed");
            return Ok(DashboardResponse::new(String::new(), 0, 0, 0));
        }

        self.progress_reporter.report(&format!(
            "🔍 Resolving metadata for {} package(s)...",
            names.len()
        ));

        let entries = self.resolve_in_order(names).await;

        let resolved = entries
            .iter()
            .filter(|e| matches!(e, DashboardEntry::Resolved(_)))
            .count();
        let not_found = entries
            .iter()
            .filter(|e| matches!(e, DashboardEntry::NotFound { .. }))
            .count();
        let errors = entries.len() - resolved - not_found;

        let dashboard = TreeRenderer::render(&entries);

        self.progress_reporter.report_completion(&format!(
            "✅ Dashboard ready: {} resolved, {} missing, {} error(s)",
            resolved, not_found, errors
        ));

        Ok(DashboardResponse::new(dashboard, resolved, not_found, errors))
    }

    async fn requested_names(&self, request: &DashboardRequest) -> Result<Vec<String>> {
        if !request.names.is_empty() {
            return Ok(request.names.clone());
        }

        self.progress_reporter.report("📖 Reading installed packages...");
        self.provider.list_installed().await
    }

    /// Resolves all names with bounded concurrency, then restores the
    /// input order regardless of completion order.
    async fn resolve_in_order(&self, names: Vec<String>) -> Vec<DashboardEntry> {
        let mut indexed: Vec<(usize, DashboardEntry)> = stream::iter(names.into_iter().enumerate())
            .map(|(idx, name)| {
                let provider = &self.provider;
                let timeout = self.resolve_timeout;
                async move {
                    let entry = match tokio::time::timeout(timeout, provider.resolve(&name)).await {
                        Ok(Ok(Resolution::Found(record))) => DashboardEntry::Resolved(*record),
                        Ok(Ok(Resolution::NotFound)) => DashboardEntry::NotFound { name },
                        Ok(Err(e)) => DashboardEntry::Error {
                            name,
                            message: error_summary(&e),
                        },
                        Err(_) => DashboardEntry::Error {
                            name,
                            message: "metadata lookup timed out".to_string(),
                        },
                    };
                    (idx, entry)
                }
            })
            .buffer_unordered(self.max_concurrent)
            .collect()
            .await;

        indexed.sort_by_key(|(idx, _)| *idx);
        indexed.into_iter().map(|(_, entry)| entry).collect()
    }
}
