//! List command implementation.
//!
//! The `server-env list` command prints the code→name table.

use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::environment::EnvironmentCode;
use crate::error::{Result, ServerEnvError};
use crate::ui::{OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

#[derive(Serialize)]
struct ListEntry {
    code: i64,
    environment: EnvironmentCode,
    name: &'static str,
}

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let entries: Vec<ListEntry> = EnvironmentCode::ALL
            .iter()
            .map(|env| ListEntry {
                code: env.code(),
                environment: *env,
                name: env.display_name(),
            })
            .collect();

        if self.args.json {
            let json = serde_json::to_string_pretty(&entries)
                .map_err(|e| ServerEnvError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        for entry in &entries {
            if ui.output_mode() == OutputMode::Quiet {
                ui.message(&format!("{}\t{}", entry.code, entry.name));
            } else {
                ui.message(&format!(
                    "{}  {:<12} {}",
                    entry.code,
                    entry.environment.as_str(),
                    entry.name
                ));
            }
        }

        Ok(CommandResult::success())
    }
}
