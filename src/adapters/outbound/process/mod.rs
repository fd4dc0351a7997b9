/// Process adapters - subprocess access to pip and the Python interpreter
mod pip_cli;
mod pip_engine;
mod venv_manager;

pub use pip_cli::{PipCli, ShowRecord};
pub use pip_engine::PipPackageEngine;
pub use venv_manager::PythonVenvManager;
