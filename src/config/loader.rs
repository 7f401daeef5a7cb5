//! Bootstrap loading.
//!
//! Applies env files to the process environment before the environment is
//! resolved:
//!
//! 1. The Apache env file, when running from the command line or when a
//!    path is configured
//! 2. The dot-env file at `{root}/{name}`, when it exists
//!
//! Both overwrite variables already present in the process environment.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::apache::ApacheEnvParser;
use super::env_file::{is_valid_var_name, EnvFileParser};
use super::paths::BootstrapConfig;
use crate::error::Result;

/// Where the host process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionContext {
    /// A command-line process that does not inherit web server variables.
    Cli,
    /// A process started by the web server.
    Server,
}

/// Kind of env file applied during bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvFileKind {
    /// Apache `SetEnv`/`envvars` file.
    Apache,
    /// Dot-env file.
    DotEnv,
}

impl std::fmt::Display for EnvFileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Apache => write!(f, "apache"),
            Self::DotEnv => write!(f, "dotenv"),
        }
    }
}

/// An env file that was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedEnvFile {
    /// Which parser read it.
    pub kind: EnvFileKind,
    /// Path of the file.
    pub path: PathBuf,
    /// Number of variables it set.
    pub variables: usize,
}

/// What bootstrap did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    /// Files applied, in order.
    pub applied: Vec<AppliedEnvFile>,
}

impl BootstrapReport {
    /// Whether any file was applied.
    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }

    /// Total number of variables set.
    pub fn variable_count(&self) -> usize {
        self.applied.iter().map(|file| file.variables).sum()
    }
}

/// Apply env files to the process environment.
///
/// # Errors
///
/// A configured Apache env file that is missing or unreadable is an error.
/// A missing dot-env file is skipped; an unreadable one is an error.
///
/// # Example
///
/// ```
/// use server_env::config::{bootstrap, BootstrapConfig, ExecutionContext};
///
/// // Nothing configured: nothing to apply.
/// let report = bootstrap(&BootstrapConfig::default(), ExecutionContext::Server).unwrap();
/// assert!(report.is_empty());
/// ```
pub fn bootstrap(config: &BootstrapConfig, context: ExecutionContext) -> Result<BootstrapReport> {
    let mut report = BootstrapReport::default();

    let apache_path = config.apache_env_file_path();
    if context == ExecutionContext::Cli || apache_path.is_some() {
        match apache_path {
            Some(path) => {
                let vars = ApacheEnvParser::load(path)?;
                report.applied.push(apply(EnvFileKind::Apache, path, &vars));
            }
            None => debug!("No Apache env file configured, skipping"),
        }
    }

    if let Some(path) = config.dot_env_path() {
        if path.exists() {
            let vars = EnvFileParser::load(&path)?;
            report.applied.push(apply(EnvFileKind::DotEnv, &path, &vars));
        } else {
            debug!("No dot-env file at {}, skipping", path.display());
        }
    }

    Ok(report)
}

fn apply(kind: EnvFileKind, path: &Path, vars: &BTreeMap<String, String>) -> AppliedEnvFile {
    apply_to_process_env(vars);
    info!(
        "Loaded {} variables from {} file {}",
        vars.len(),
        kind,
        path.display()
    );

    AppliedEnvFile {
        kind,
        path: path.to_path_buf(),
        variables: vars.len(),
    }
}

/// Set every variable in the process environment, replacing existing values.
///
/// Names that are empty or contain `=` or NUL, and values containing NUL,
/// cannot be stored in the process environment; those entries are skipped
/// with a warning.
pub fn apply_to_process_env(vars: &BTreeMap<String, String>) {
    for (key, value) in vars {
        if !is_valid_var_name(key) || value.contains('\0') {
            warn!("Skipping variable {:?}: not representable in the environment", key);
            continue;
        }
        debug!("Setting {}", key);
        std::env::set_var(key, value);
    }
}
