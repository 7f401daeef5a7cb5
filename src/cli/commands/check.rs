//! Check command implementation.
//!
//! The `server-env check CODE` command reports whether an integer is a
//! valid environment code.

use crate::cli::args::CheckArgs;
use crate::environment::EnvironmentCode;
use crate::error::Result;
use crate::ui::{OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let code = self.args.code;
        let environment = EnvironmentCode::from_code(code);

        if ui.output_mode() != OutputMode::Quiet {
            match environment {
                Some(env) => ui.success(&format!("{} is {} ({})", code, env, env.display_name())),
                None => ui.error(&format!("{} is not a valid environment code", code)),
            }
        }

        Ok(CommandResult::from_bool(environment.is_some()))
    }
}
