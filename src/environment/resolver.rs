//! Environment resolution.
//!
//! Resolves the environment code for the current process using the
//! precedence chain:
//! 1. `LOCAL_{VAR}` when it holds a valid code
//! 2. `{VAR}`, coerced to an integer whatever its value
//! 3. Fallback to Development when no variable name is given
//!
//! [`ServerEnvironment::resolve_with_bootstrap`] and the process-wide
//! [`ServerEnvironment::init`] first apply the Apache and dot-env files of a
//! [`BootstrapConfig`], so variables from those files take part in the
//! chain above.

use std::env::VarError;
use std::sync::{Mutex, OnceLock, PoisonError};

use serde::Serialize;
use tracing::{debug, warn};

use super::code::{env_strings, name_for_code, parse_code_or_default, EnvironmentCode};
use super::lookup::{present, EnvVarLookup};
use crate::config::{bootstrap, global_bootstrap_config, BootstrapConfig, ExecutionContext};
use crate::error::Result;

/// How the environment code was determined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "variable", rename_all = "snake_case")]
pub enum EnvironmentSource {
    /// Taken from a `LOCAL`-prefixed override variable.
    LocalOverride(String),
    /// Taken from the named variable.
    Variable(String),
    /// No variable was consulted or set; Development.
    Default,
}

impl std::fmt::Display for EnvironmentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LocalOverride(var) => write!(f, "override {}", var),
            Self::Variable(var) => write!(f, "variable {}", var),
            Self::Default => write!(f, "default"),
        }
    }
}

/// The resolved environment of one process.
///
/// Construct it once at startup and pass it by reference, or use
/// [`ServerEnvironment::init`] / [`ServerEnvironment::global`] for a
/// process-wide instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerEnvironment {
    code: i64,
    name: &'static str,
    source: EnvironmentSource,
}

static GLOBAL: OnceLock<ServerEnvironment> = OnceLock::new();
static GLOBAL_INIT: Mutex<()> = Mutex::new(());

impl ServerEnvironment {
    /// Resolve from the process environment.
    ///
    /// # Arguments
    ///
    /// * `base` - Name of the variable holding the environment code
    /// * `lookup` - Separator configuration for the `LOCAL` override
    ///
    /// # Example
    ///
    /// ```
    /// use server_env::environment::{EnvVarLookup, EnvironmentCode, ServerEnvironment};
    ///
    /// let env = ServerEnvironment::resolve(None, &EnvVarLookup::new());
    /// assert!(env.is(EnvironmentCode::Development));
    /// assert_eq!(env.name(), "Desenvolvimento");
    /// ```
    pub fn resolve(base: Option<&str>, lookup: &EnvVarLookup) -> Self {
        Self::resolve_with_env(base, lookup, |key| std::env::var(key))
    }

    /// Resolve with a custom variable source.
    pub fn resolve_with_env<F>(base: Option<&str>, lookup: &EnvVarLookup, env_fn: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        let Some(base) = base else {
            return Self::from_parts(EnvironmentCode::Development.code(), EnvironmentSource::Default);
        };

        // 1. LOCAL override, only when it names a valid code
        let local_key = lookup.local_name(base);
        if let Some(value) = present(env_fn(&local_key)) {
            let code = parse_code_or_default(Some(&value));
            if EnvironmentCode::is_valid(code) {
                return Self::from_parts(code, EnvironmentSource::LocalOverride(local_key));
            }
            debug!("Ignoring {}={:?}: not a valid environment code", local_key, value);
        }

        // 2. The variable itself, any integer accepted
        match present(env_fn(base)) {
            Some(value) => Self::from_parts(
                parse_code_or_default(Some(&value)),
                EnvironmentSource::Variable(base.to_string()),
            ),
            None => Self::from_parts(EnvironmentCode::Development.code(), EnvironmentSource::Default),
        }
    }

    /// Apply the env files of `config`, then resolve from the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Fails when an env file cannot be applied (see [`bootstrap`]).
    pub fn resolve_with_bootstrap(
        base: Option<&str>,
        config: &BootstrapConfig,
        context: ExecutionContext,
        lookup: &EnvVarLookup,
    ) -> Result<Self> {
        let report = bootstrap(config, context)?;
        debug!(
            "Bootstrap applied {} files ({} variables) before resolving",
            report.applied.len(),
            report.variable_count()
        );
        Ok(Self::resolve(base, lookup))
    }

    /// The process-wide instance.
    ///
    /// The first successful call applies the paths given to the global
    /// once-only setters (`set_root_path_once` and friends) and resolves
    /// `base`. Later calls return the same instance and ignore their
    /// arguments. A failed call leaves the instance unset, so a later call
    /// may retry.
    ///
    /// # Errors
    ///
    /// Fails when an env file cannot be applied.
    pub fn init(
        base: Option<&str>,
        context: ExecutionContext,
    ) -> Result<&'static ServerEnvironment> {
        if let Some(env) = GLOBAL.get() {
            return Ok(env);
        }

        let _guard = GLOBAL_INIT.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(env) = GLOBAL.get() {
            return Ok(env);
        }

        let env = Self::resolve_with_bootstrap(
            base,
            &global_bootstrap_config(),
            context,
            &EnvVarLookup::new(),
        )?;
        Ok(GLOBAL.get_or_init(|| env))
    }

    /// The process-wide instance for a process started by the web server.
    ///
    /// Same as [`ServerEnvironment::init`] with [`ExecutionContext::Server`].
    pub fn global(base: Option<&str>) -> Result<&'static ServerEnvironment> {
        Self::init(base, ExecutionContext::Server)
    }

    fn from_parts(code: i64, source: EnvironmentSource) -> Self {
        if !EnvironmentCode::is_valid(code) {
            warn!("Environment code {} ({}) is not a known environment", code, source);
        }
        debug!("Resolved environment code {} from {}", code, source);

        Self {
            code,
            name: name_for_code(code),
            source,
        }
    }

    /// The raw resolved code. May fall outside the defined codes when it
    /// came straight from the variable.
    pub fn code(&self) -> i64 {
        self.code
    }

    /// The resolved code as an [`EnvironmentCode`], if it is a defined one.
    pub fn environment(&self) -> Option<EnvironmentCode> {
        EnvironmentCode::from_code(self.code)
    }

    /// Display name of the resolved environment.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Where the code came from.
    pub fn source(&self) -> &EnvironmentSource {
        &self.source
    }

    /// Whether the resolved code is exactly `code`.
    pub fn is(&self, code: EnvironmentCode) -> bool {
        self.code == code.code()
    }

    /// Whether the resolved code is one of `codes`.
    pub fn is_in(&self, codes: &[EnvironmentCode]) -> bool {
        codes.iter().any(|code| self.is(*code))
    }

    /// Whether the resolved code is one of the defined codes.
    pub fn is_valid(&self) -> bool {
        EnvironmentCode::is_valid(self.code)
    }

    /// The fixed code→name table.
    pub fn env_strings(&self) -> &'static [(i64, &'static str)] {
        env_strings()
    }
}

impl Default for ServerEnvironment {
    fn default() -> Self {
        Self::from_parts(EnvironmentCode::Development.code(), EnvironmentSource::Default)
    }
}
