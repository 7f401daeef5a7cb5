//! Resolve command implementation.
//!
//! The `server-env resolve [VAR]` command resolves the environment code and
//! optionally tests it against an expected environment.

use crate::cli::args::ResolveArgs;
use crate::environment::{EnvVarLookup, EnvironmentCode, ServerEnvironment};
use crate::error::{Result, ServerEnvError};
use crate::ui::{OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The resolve command implementation.
pub struct ResolveCommand {
    lookup: EnvVarLookup,
    args: ResolveArgs,
}

impl ResolveCommand {
    /// Create a new resolve command.
    pub fn new(lookup: EnvVarLookup, args: ResolveArgs) -> Self {
        Self { lookup, args }
    }

    /// The expected environments, if the command is a test.
    fn expected(&self) -> Option<Vec<EnvironmentCode>> {
        match (self.args.is, self.args.in_.is_empty()) {
            (Some(code), _) => Some(vec![code]),
            (None, false) => Some(self.args.in_.clone()),
            (None, true) => None,
        }
    }

    fn show(&self, env: &ServerEnvironment, ui: &mut dyn UserInterface) -> Result<()> {
        if self.args.json {
            let json =
                serde_json::to_string_pretty(env).map_err(|e| ServerEnvError::Other(e.into()))?;
            ui.message(&json);
            return Ok(());
        }

        if ui.output_mode() == OutputMode::Quiet {
            ui.message(&env.code().to_string());
            return Ok(());
        }

        ui.key_value("code", &env.code().to_string());
        ui.key_value("name", env.name());
        if let Some(environment) = env.environment() {
            ui.key_value("environment", environment.as_str());
        }
        ui.key_value("source", &env.source().to_string());

        if !env.is_valid() {
            ui.warning(&format!(
                "Code {} is not a known environment code",
                env.code()
            ));
        }
        Ok(())
    }
}

impl Command for ResolveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let env = ServerEnvironment::resolve(self.args.var.as_deref(), &self.lookup);

        let Some(expected) = self.expected() else {
            self.show(&env, ui)?;
            return Ok(CommandResult::success());
        };

        let matched = env.is_in(&expected);
        if ui.output_mode() == OutputMode::Quiet {
            return Ok(CommandResult::from_bool(matched));
        }

        let names: Vec<&str> = expected.iter().map(|code| code.as_str()).collect();
        if matched {
            ui.success(&format!("Environment is {}", env.name()));
        } else {
            ui.message(&format!(
                "Environment {} ({}) is not {}",
                env.name(),
                env.code(),
                names.join(", ")
            ));
        }
        Ok(CommandResult::from_bool(matched))
    }
}
