use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Traversal-safe path resolution toolkit.
#[derive(Parser)]
#[command(name = "pathguard", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print JSON Schema for check plans.
    Schema,
    /// Validate every candidate in a check plan against its base.
    Check(CheckArgs),
    /// Resolve path segments against a base directory.
    Resolve(ResolveArgs),
    /// Check a filename's extension against an allowlist.
    Ext(ExtArgs),
    /// Idempotently create subdirectories under a base.
    EnsureDirs(EnsureDirsArgs),
}

#[derive(Args)]
pub struct CheckArgs {
    /// Path to check plan JSON file.
    #[arg(long, required = true)]
    pub plan: PathBuf,

    /// Only validate the plan shape, do not resolve candidates.
    #[arg(long)]
    pub validate_only: bool,

    /// Output structured JSON to stdout.
    #[arg(long)]
    pub json: bool,

    /// Override base directory.
    #[arg(long)]
    pub base: Option<PathBuf>,
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Base directory candidates must stay under.
    #[arg(long, required = true)]
    pub base: PathBuf,

    /// Path segments, joined in order.
    #[arg(required = true)]
    pub segments: Vec<String>,

    /// Output structured JSON to stdout.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ExtArgs {
    /// Filename to check.
    pub filename: String,

    /// Allowlist entry (repeatable); defaults to the built-in set.
    #[arg(long = "allow")]
    pub allow: Vec<String>,
}

#[derive(Args)]
pub struct EnsureDirsArgs {
    /// Base directory to create subdirectories under.
    #[arg(long, required = true)]
    pub base: PathBuf,

    /// Subdirectory names to create.
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Output structured JSON to stdout.
    #[arg(long)]
    pub json: bool,
}
