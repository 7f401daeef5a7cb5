//! Get command implementation.
//!
//! The `server-env get PART...` command prints a variable, preferring its
//! `LOCAL` override.

use crate::cli::args::GetArgs;
use crate::environment::EnvVarLookup;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The get command implementation.
pub struct GetCommand {
    lookup: EnvVarLookup,
    args: GetArgs,
}

impl GetCommand {
    /// Create a new get command.
    pub fn new(lookup: EnvVarLookup, args: GetArgs) -> Self {
        Self { lookup, args }
    }
}

impl Command for GetCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match self.lookup.get_env_var(&self.args.parts) {
            Some(value) => {
                ui.message(&value);
                Ok(CommandResult::success())
            }
            None => {
                ui.warning(&format!(
                    "{} is not set",
                    self.lookup.join(&self.args.parts)
                ));
                Ok(CommandResult::failure(1))
            }
        }
    }
}
