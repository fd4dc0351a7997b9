/// Use cases - application workflows with generic dependency injection
mod create_venv;
mod install_packages;
mod remove_package;
mod render_dashboard;
mod update_package;

pub use create_venv::CreateVenvUseCase;
pub use install_packages::InstallPackagesUseCase;
pub use remove_package::RemovePackageUseCase;
pub use render_dashboard::RenderDashboardUseCase;
pub use update_package::UpdatePackageUseCase;
