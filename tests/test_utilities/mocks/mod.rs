mod mock_environment_manager;
mod mock_metadata_provider;
mod mock_package_engine;
mod mock_progress_reporter;

pub use mock_environment_manager::MockEnvironmentManager;
pub use mock_metadata_provider::MockMetadataProvider;
pub use mock_package_engine::MockPackageEngine;
pub use mock_progress_reporter::MockProgressReporter;
