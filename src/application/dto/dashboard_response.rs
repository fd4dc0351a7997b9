/// DashboardResponse - the rendered dashboard plus per-entry outcome counts
#[derive(Debug, Clone)]
pub struct DashboardResponse {
    /// The full rendered tree text.
    pub dashboard: String,
    pub resolved: usize,
    pub not_found: usize,
    pub errors: usize,
}

impl DashboardResponse {
    pub fn new(dashboard: String, resolved: usize, not_found: usize, errors: usize) -> Self {
        Self {
            dashboard,
            resolved,
            not_found,
            errors,
        }
    }

    pub fn total(&self) -> usize {
        self.resolved + self.not_found + self.errors
    }
}
