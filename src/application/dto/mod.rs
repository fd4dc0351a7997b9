/// Data transfer objects for the application layer
mod dashboard_request;
mod dashboard_response;
mod install_report;

pub use dashboard_request::DashboardRequest;
pub use dashboard_response::DashboardResponse;
pub use install_report::InstallReport;
