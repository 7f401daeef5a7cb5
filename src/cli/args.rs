//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::environment::{EnvironmentCode, DEFAULT_SEPARATOR};

/// server-env - Resolve the server environment from environment variables.
#[derive(Debug, Parser)]
#[command(name = "server-env")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Project root containing the dot-env file
    #[arg(long, global = true, env = "SERVER_ENV_ROOT")]
    pub root: Option<String>,

    /// Dot-env file name inside the project root (default: .env)
    #[arg(long, global = true, env = "SERVER_ENV_DOTENV")]
    pub dotenv: Option<String>,

    /// Apache env file to import before resolving
    #[arg(long, global = true, env = "SERVER_ENV_APACHE_FILE")]
    pub apache_env_file: Option<PathBuf>,

    /// Separator for joining variable name parts and the LOCAL prefix
    #[arg(long, global = true, default_value = DEFAULT_SEPARATOR)]
    pub separator: String,

    /// Do not load env files before resolving
    #[arg(long, global = true)]
    pub no_bootstrap: bool,

    /// Print bare values only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve the environment code (default if no command specified)
    Resolve(ResolveArgs),

    /// Read a variable, preferring its LOCAL override
    Get(GetArgs),

    /// Check whether an integer is a valid environment code
    Check(CheckArgs),

    /// List environment codes and names
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResolveArgs {
    /// Variable holding the environment code (e.g. APP_ENV)
    pub var: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with 0 only if the environment is this one
    #[arg(long, conflicts_with = "in_")]
    pub is: Option<EnvironmentCode>,

    /// Exit with 0 only if the environment is one of these (comma-separated)
    #[arg(long = "in", value_delimiter = ',')]
    pub in_: Vec<EnvironmentCode>,
}

/// Arguments for the `get` command.
#[derive(Debug, Clone, clap::Args)]
pub struct GetArgs {
    /// Variable name parts, joined with the separator
    #[arg(required = true)]
    pub parts: Vec<String>,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Integer code to check
    #[arg(allow_negative_numbers = true)]
    pub code: i64,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
