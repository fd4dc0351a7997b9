use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Wrap pip with a Package Version Dashboard
#[derive(Parser, Debug)]
#[command(name = "pkgdash")]
#[command(version)]
#[command(about = "Wrap pip with a Package Version Dashboard", long_about = None)]
pub struct Cli {
    /// Path to a pkgdash.config.yml (auto-discovered in the working
    /// directory when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Install one or more packages (name or name==version)
    Install {
        #[arg(required = true)]
        packages: Vec<String>,
    },

    /// Uninstall a package
    Remove { package: String },

    /// Upgrade a package to the latest compatible version
    Update { package: String },

    /// Render the Package Version Dashboard
    List {
        /// Restrict the dashboard to these packages (default: all installed)
        names: Vec<String>,

        /// Write the dashboard to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Create an isolated virtual environment
    Venv { name: String },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
