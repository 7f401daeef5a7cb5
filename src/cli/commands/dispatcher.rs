//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use tracing::debug;

use crate::cli::args::{Cli, Commands, ResolveArgs};
use crate::config::{bootstrap, BootstrapConfig, ExecutionContext};
use crate::environment::EnvVarLookup;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Success when `condition` holds, exit code 1 otherwise.
    pub fn from_bool(condition: bool) -> Self {
        if condition {
            Self::success()
        } else {
            Self::failure(1)
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config: BootstrapConfig,
    lookup: EnvVarLookup,
    load_env_files: bool,
}

impl CommandDispatcher {
    /// Create a dispatcher that applies `config` before running commands.
    pub fn new(config: BootstrapConfig, lookup: EnvVarLookup) -> Self {
        Self {
            config,
            lookup,
            load_env_files: true,
        }
    }

    /// Build the dispatcher from global CLI flags.
    pub fn from_cli(cli: &Cli) -> Self {
        let mut builder = BootstrapConfig::builder();
        if let Some(root) = &cli.root {
            builder = builder.root_path(root);
        }
        if let Some(name) = &cli.dotenv {
            builder = builder.dot_env_file_name(name);
        }
        if let Some(path) = &cli.apache_env_file {
            builder = builder.apache_env_file_path(path);
        }

        let dispatcher = Self::new(
            builder.build(),
            EnvVarLookup::new().with_separator(&cli.separator),
        );
        if cli.no_bootstrap {
            dispatcher.without_env_files()
        } else {
            dispatcher
        }
    }

    /// Skip loading env files.
    pub fn without_env_files(mut self) -> Self {
        self.load_env_files = false;
        self
    }

    /// The bootstrap configuration.
    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    /// The variable lookup used by commands.
    pub fn lookup(&self) -> &EnvVarLookup {
        &self.lookup
    }

    /// Dispatch and execute a command.
    ///
    /// Env files are applied first, except for `completions`, which does
    /// not read the environment.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if !matches!(cli.command, Some(Commands::Completions(_))) {
            self.load_env_files()?;
        }

        match &cli.command {
            Some(Commands::Resolve(args)) => {
                let cmd = super::resolve::ResolveCommand::new(self.lookup.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Get(args)) => {
                let cmd = super::get::GetCommand::new(self.lookup.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(args.clone());
                cmd.execute(ui)
            }
            Some(Commands::List(args)) => {
                let cmd = super::list::ListCommand::new(args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to resolve with no variable
                let cmd =
                    super::resolve::ResolveCommand::new(self.lookup.clone(), ResolveArgs::default());
                cmd.execute(ui)
            }
        }
    }

    fn load_env_files(&self) -> Result<()> {
        if !self.load_env_files {
            debug!("Env file loading disabled");
            return Ok(());
        }

        let report = bootstrap(&self.config, ExecutionContext::Cli)?;
        debug!(
            "Bootstrap applied {} files ({} variables)",
            report.applied.len(),
            report.variable_count()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn command_result_from_bool() {
        assert!(CommandResult::from_bool(true).success);
        assert_eq!(CommandResult::from_bool(false).exit_code, 1);
    }

    #[test]
    fn from_cli_builds_config() {
        let cli = Cli::parse_from([
            "server-env",
            "--root",
            "/srv/app/",
            "--dotenv",
            ".env.local",
            "--separator",
            "__",
            "list",
        ]);
        let dispatcher = CommandDispatcher::from_cli(&cli);

        assert_eq!(dispatcher.config().root_path(), Some("/srv/app"));
        assert_eq!(dispatcher.config().dot_env_file_name(), Some(".env.local"));
        assert_eq!(dispatcher.lookup().separator(), "__");
    }

    #[test]
    fn dispatch_applies_dot_env_before_command() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(".env"),
            "SERVER_ENV_DISPATCH_TEST_VAR=from-dotenv\n",
        )
        .unwrap();

        let root = temp.path().to_string_lossy().to_string();
        let cli = Cli::parse_from([
            "server-env",
            "--root",
            root.as_str(),
            "get",
            "SERVER_ENV_DISPATCH_TEST_VAR",
        ]);
        let dispatcher = CommandDispatcher::from_cli(&cli);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("from-dotenv"));
        std::env::remove_var("SERVER_ENV_DISPATCH_TEST_VAR");
    }

    #[test]
    fn dispatch_fails_on_missing_apache_file() {
        let cli = Cli::parse_from([
            "server-env",
            "--apache-env-file",
            "/nonexistent/server-env/envvars",
            "list",
        ]);
        let dispatcher = CommandDispatcher::from_cli(&cli);
        let mut ui = MockUI::new();

        assert!(dispatcher.dispatch(&cli, &mut ui).is_err());
    }

    #[test]
    fn no_bootstrap_skips_env_files() {
        let cli = Cli::parse_from([
            "server-env",
            "--apache-env-file",
            "/nonexistent/server-env/envvars",
            "--no-bootstrap",
            "list",
        ]);
        let dispatcher = CommandDispatcher::from_cli(&cli);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();
        assert!(result.success);
    }

    #[test]
    fn no_command_resolves_development() {
        let cli = Cli::parse_from(["server-env", "--no-bootstrap"]);
        let dispatcher = CommandDispatcher::from_cli(&cli);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();
        assert!(result.success);
        assert!(ui.has_message("Desenvolvimento"));
    }
}
