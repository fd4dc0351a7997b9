/// DashboardRequest - internal request DTO for dashboard rendering
#[derive(Debug, Clone, Default)]
pub struct DashboardRequest {
    /// Package names to render. Empty means every installed package.
    pub names: Vec<String>,
}

impl DashboardRequest {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// A request covering the whole environment.
    pub fn all_installed() -> Self {
        Self::default()
    }
}
