/// Domain layer - Pure domain models with no I/O dependencies
mod entry;
mod package;
mod record;
mod requirement;
mod status;

pub use entry::DashboardEntry;
pub use package::{PackageName, Version};
pub use record::{DependencyRef, PackageRecord};
pub use requirement::{base_name, Requirement};
pub use status::StatusIndicator;
