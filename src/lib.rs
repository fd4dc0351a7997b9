//! pkgdash - a pip wrapper with a Package Version Dashboard
//!
//! This library wraps an existing package manager (pip) for install,
//! remove, update, and venv operations, and renders a formatted dependency
//! tree summarizing installed packages, their versions, licenses, authors,
//! and dependency graphs. It follows hexagonal architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dashboard`): Pure records, status derivation, and
//!   rendering/partitioning services
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pkgdash::prelude::*;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # async fn demo() -> Result<()> {
//! let settings = Settings::default();
//!
//! // Create adapters
//! let registry = Arc::new(CachingRegistryClient::new(PyPiRegistryClient::new(
//!     settings.resolve_timeout,
//! )?));
//! let state = Arc::new(InstallStateStore::new(settings.state_file.clone()));
//! let cli = PipCli::new(
//!     settings.pip_command.clone(),
//!     settings.cache_dir.clone(),
//!     settings.index_url.clone(),
//! );
//! let provider = PipMetadataProvider::new(cli, state, Some(registry));
//!
//! // Create and execute the use case
//! let use_case = RenderDashboardUseCase::new(
//!     provider,
//!     StderrProgressReporter::new(),
//!     settings.resolve_timeout,
//!     settings.max_concurrent_lookups,
//! );
//! let response = use_case.execute(DashboardRequest::all_installed()).await?;
//! println!("{}", response.dashboard);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, InstallStateStore, StdoutPresenter,
    };
    pub use crate::adapters::outbound::metadata::PipMetadataProvider;
    pub use crate::adapters::outbound::network::{CachingRegistryClient, PyPiRegistryClient};
    pub use crate::adapters::outbound::process::{PipCli, PipPackageEngine, PythonVenvManager};
    pub use crate::application::dto::{DashboardRequest, DashboardResponse, InstallReport};
    pub use crate::application::use_cases::{
        CreateVenvUseCase, InstallPackagesUseCase, RemovePackageUseCase, RenderDashboardUseCase,
        UpdatePackageUseCase,
    };
    pub use crate::config::Settings;
    pub use crate::dashboard::domain::{
        DashboardEntry, DependencyRef, PackageName, PackageRecord, Requirement, StatusIndicator,
        Version,
    };
    pub use crate::dashboard::policies::LicensePriority;
    pub use crate::dashboard::services::{DependencyPartitioner, TreeRenderer};
    pub use crate::ports::outbound::{
        EnvironmentManager, MetadataProvider, OutputPresenter, PackageEngine, ProgressReporter,
        RegistryClient, RegistryMetadata, Resolution, UpdateOutcome,
    };
    pub use crate::shared::error::ExitCode;
    pub use crate::shared::Result;
}
