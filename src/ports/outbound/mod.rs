/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (pip subprocesses, the package
/// registry, the console, the file system).
pub mod environment_manager;
pub mod metadata_provider;
pub mod output_presenter;
pub mod package_engine;
pub mod progress_reporter;
pub mod registry_client;

pub use environment_manager::EnvironmentManager;
pub use metadata_provider::{MetadataProvider, Resolution};
pub use output_presenter::OutputPresenter;
pub use package_engine::{PackageEngine, UpdateOutcome};
pub use progress_reporter::ProgressReporter;
pub use registry_client::{RegistryClient, RegistryMetadata};
