//! `pathguard` - traversal-safe path resolution toolkit.
//!
//! See `README.md` for user documentation and `DESIGN.md` for architecture.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pathguard::cli::{Cli, Command};

fn main() -> Result<()> {
    // Logs go to stderr so --json output on stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let exit_code = match cli.command {
        Command::Schema => {
            let schema = pathguard::model::generate_schema();
            println!("{}", schema);
            0
        }
        Command::Check(args) => pathguard::engine::check(args)?,
        Command::Resolve(args) => pathguard::engine::resolve(args)?,
        Command::Ext(args) => pathguard::engine::ext(args)?,
        Command::EnsureDirs(args) => pathguard::engine::ensure_dirs(args)?,
    };
    std::process::exit(exit_code);
}
