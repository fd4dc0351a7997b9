/// Filesystem adapters for install-state persistence and output writing
mod file_writer;
mod state_store;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use state_store::{InstallStateStore, StateEntry};
