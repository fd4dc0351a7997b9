use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow shell scripts and CI systems to distinguish between
/// different kinds of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the command completed, including dashboards that contain
    /// per-package `?`/`!` entries
    Success = 0,
    /// One or more package operations failed (install/remove/update/venv),
    /// or the installed-package list could not be obtained at all
    OperationFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (subprocess spawn failure, state file corruption,
    /// file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::OperationFailed => write!(f, "Operation Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for pkgdash.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum PkgdashError {
    #[error("pip could not be executed: {details}\n\n💡 Hint: Verify that '{command}' is installed and on PATH, or set pip_command in pkgdash.config.yml")]
    PipUnavailable { command: String, details: String },

    #[error("Package '{name}' is not installed in this environment")]
    PackageNotFound { name: String },

    #[error("Metadata for '{name}' is malformed: missing {missing} field\n\n💡 Hint: Reinstalling the package usually repairs its metadata")]
    MalformedMetadata { name: String, missing: String },

    #[error("Failed to contact the package index for '{name}': {details}\n\n💡 Hint: Check your internet connection, or set offline: true in pkgdash.config.yml")]
    RegistryLookup { name: String, details: String },

    #[error("Failed to install '{name}': {details}")]
    InstallFailed { name: String, details: String },

    #[error("Failed to uninstall '{name}': {details}")]
    RemoveFailed { name: String, details: String },

    #[error("Failed to update '{name}': {details}")]
    UpdateFailed { name: String, details: String },

    #[error("Virtual environment already exists: {path}\n\n💡 Hint: Choose another name or delete the existing directory first")]
    VenvAlreadyExists { path: PathBuf },

    #[error("Failed to create virtual environment at {path}: {details}\n\n💡 Hint: Verify that '{command}' is installed and supports the venv module")]
    VenvCreationFailed {
        path: PathBuf,
        command: String,
        details: String,
    },

    #[error("Failed to read the installed-package list: {details}\n\n💡 Hint: The dashboard needs a working pip; run 'pip --version' to diagnose")]
    EnvironmentUnavailable { details: String },

    #[error("Failed to access state file: {path}\nDetails: {details}\n\n💡 Hint: Verify that the file is readable and not a symbolic link")]
    StateFileError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Validation error: {message}")]
    Validation { message: String },
}

/// First line of an error's message, for per-package one-line reporting
/// inside a batch (hints and chains stay out of the dashboard).
pub fn error_summary(error: &anyhow::Error) -> String {
    error
        .to_string()
        .lines()
        .next()
        .unwrap_or("unknown error")
        .to_string()
}
