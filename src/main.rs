use owo_colors::OwoColorize;
use pkgdash::cli::{Cli, Command};
use pkgdash::config::{discover_config, load_config_from_path, ConfigFile, Settings};
use pkgdash::prelude::*;
use std::path::Path;
use std::process;
use std::sync::Arc;

type Registry = CachingRegistryClient<PyPiRegistryClient>;

#[tokio::main]
async fn main() {
    let args = Cli::parse_args();

    let code = match run(args).await {
        Ok(code) => code,
        Err(e) => {
            print_error_chain(&e);
            ExitCode::ApplicationError
        }
    };

    process::exit(code.as_i32());
}

async fn run(args: Cli) -> Result<ExitCode> {
    let config = load_config(&args)?;
    let settings = Settings::from_config(config);
    let reporter = StderrProgressReporter::new();

    match args.command {
        Command::Install { packages } => {
            let use_case = InstallPackagesUseCase::new(build_engine(&settings)?, reporter);
            let report = use_case.execute(&packages).await?;
            if report.all_succeeded() {
                Ok(ExitCode::Success)
            } else {
                Ok(ExitCode::OperationFailed)
            }
        }

        Command::Remove { package } => {
            let use_case = RemovePackageUseCase::new(build_engine(&settings)?, reporter);
            match use_case.execute(&package).await {
                Ok(()) => Ok(ExitCode::Success),
                Err(e) => {
                    print_error_chain(&e);
                    Ok(ExitCode::OperationFailed)
                }
            }
        }

        Command::Update { package } => {
            let use_case = UpdatePackageUseCase::new(build_engine(&settings)?, reporter);
            match use_case.execute(&package).await {
                Ok(_) => Ok(ExitCode::Success),
                Err(e) => {
                    print_error_chain(&e);
                    Ok(ExitCode::OperationFailed)
                }
            }
        }

        Command::List { names, output } => {
            let provider = build_provider(&settings)?;
            let use_case = RenderDashboardUseCase::new(
                provider,
                reporter,
                settings.resolve_timeout,
                settings.max_concurrent_lookups,
            );

            // Only an unreachable metadata source fails the list command;
            // per-package faults are already inside the dashboard text.
            let response = match use_case.execute(DashboardRequest::new(names)).await {
                Ok(response) => response,
                Err(e) => {
                    print_error_chain(&e);
                    return Ok(ExitCode::OperationFailed);
                }
            };

            let presenter: Box<dyn OutputPresenter> = match output {
                Some(path) => Box::new(FileSystemWriter::new(path)),
                None => Box::new(StdoutPresenter::new()),
            };
            presenter.present(&response.dashboard)?;

            Ok(ExitCode::Success)
        }

        Command::Venv { name } => {
            let manager = PythonVenvManager::new(settings.python_command.clone());
            let use_case = CreateVenvUseCase::new(manager, reporter);
            match use_case.execute(&name).await {
                Ok(_) => Ok(ExitCode::Success),
                Err(e) => {
                    print_error_chain(&e);
                    Ok(ExitCode::OperationFailed)
                }
            }
        }
    }
}

fn load_config(args: &Cli) -> Result<ConfigFile> {
    match &args.config {
        Some(path) => load_config_from_path(path),
        None => Ok(discover_config(Path::new("."))?.unwrap_or_default()),
    }
}

fn build_registry(settings: &Settings) -> Result<Option<Arc<Registry>>> {
    if settings.offline {
        return Ok(None);
    }
    let client = PyPiRegistryClient::new(settings.resolve_timeout)?;
    Ok(Some(Arc::new(CachingRegistryClient::new(client))))
}

fn build_pip_cli(settings: &Settings) -> PipCli {
    PipCli::new(
        settings.pip_command.clone(),
        settings.cache_dir.clone(),
        settings.index_url.clone(),
    )
}

fn build_engine(settings: &Settings) -> Result<PipPackageEngine<Registry>> {
    let state = Arc::new(InstallStateStore::new(settings.state_file.clone()));
    Ok(PipPackageEngine::new(
        build_pip_cli(settings),
        state,
        build_registry(settings)?,
    ))
}

fn build_provider(settings: &Settings) -> Result<PipMetadataProvider<Registry>> {
    let state = Arc::new(InstallStateStore::new(settings.state_file.clone()));
    Ok(PipMetadataProvider::new(
        build_pip_cli(settings),
        state,
        build_registry(settings)?,
    ))
}

fn print_error_chain(e: &anyhow::Error) {
    eprintln!("\n❌ {}\n", "An error occurred:".red());
    eprintln!("{}", e);

    let mut source = e.source();
    while let Some(err) = source {
        eprintln!("\nCaused by: {}", err);
        source = err.source();
    }

    eprintln!();
}
