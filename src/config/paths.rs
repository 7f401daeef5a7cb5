//! Bootstrap paths.
//!
//! Three paths control which env files are applied before resolution: the
//! project root, the dot-env file name inside it, and an Apache env file.
//! They can be collected through once-only setters ([`OnceConfig`]) or
//! built directly ([`BootstrapConfigBuilder`]); either way the result is an
//! immutable [`BootstrapConfig`].

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing::debug;

/// Dot-env file name used when only the root path is known.
pub const DEFAULT_DOT_ENV_FILE_NAME: &str = ".env";

/// Strip trailing path separators (`/` and `\`) from a root path.
///
/// ```
/// use server_env::config::normalize_root_path;
///
/// assert_eq!(normalize_root_path("/srv/app/"), "/srv/app");
/// assert_eq!(normalize_root_path("C:\\app\\"), "C:\\app");
/// ```
pub fn normalize_root_path(path: &str) -> String {
    path.trim_end_matches(['/', '\\']).to_string()
}

/// Immutable set of bootstrap paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapConfig {
    root_path: Option<String>,
    dot_env_file_name: Option<String>,
    apache_env_file_path: Option<PathBuf>,
}

impl BootstrapConfig {
    /// Start building a config.
    pub fn builder() -> BootstrapConfigBuilder {
        BootstrapConfigBuilder::default()
    }

    /// Project root, without trailing separators.
    pub fn root_path(&self) -> Option<&str> {
        self.root_path.as_deref()
    }

    /// Dot-env file name relative to the root.
    pub fn dot_env_file_name(&self) -> Option<&str> {
        self.dot_env_file_name.as_deref()
    }

    /// Apache env file to import.
    pub fn apache_env_file_path(&self) -> Option<&Path> {
        self.apache_env_file_path.as_deref()
    }

    /// `{root}/{dot_env_file_name}`, defaulting the file name to `.env`.
    ///
    /// Returns `None` when no root path is configured.
    pub fn dot_env_path(&self) -> Option<PathBuf> {
        let root = self.root_path.as_deref()?;
        let file = self
            .dot_env_file_name
            .as_deref()
            .unwrap_or(DEFAULT_DOT_ENV_FILE_NAME);
        Some(PathBuf::from(format!("{}/{}", root, file)))
    }
}

/// Builder for [`BootstrapConfig`].
///
/// # Example
///
/// ```
/// use server_env::config::BootstrapConfig;
///
/// let config = BootstrapConfig::builder()
///     .root_path("/srv/app/")
///     .dot_env_file_name(".env.local")
///     .build();
///
/// assert_eq!(config.root_path(), Some("/srv/app"));
/// assert_eq!(
///     config.dot_env_path().unwrap().to_str(),
///     Some("/srv/app/.env.local")
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct BootstrapConfigBuilder {
    config: BootstrapConfig,
}

impl BootstrapConfigBuilder {
    /// Set the project root. Trailing separators are stripped.
    pub fn root_path(mut self, path: impl AsRef<str>) -> Self {
        self.config.root_path = Some(normalize_root_path(path.as_ref()));
        self
    }

    /// Set the dot-env file name.
    pub fn dot_env_file_name(mut self, name: impl Into<String>) -> Self {
        self.config.dot_env_file_name = Some(name.into());
        self
    }

    /// Set the Apache env file path.
    pub fn apache_env_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.apache_env_file_path = Some(path.into());
        self
    }

    /// Finish building.
    pub fn build(self) -> BootstrapConfig {
        self.config
    }
}

/// Bootstrap paths that can each be assigned only once.
///
/// Assignments after the first are ignored. Each setter returns whether it
/// won, and concurrent setters race safely: exactly one wins.
///
/// # Example
///
/// ```
/// use server_env::config::OnceConfig;
///
/// let config = OnceConfig::new();
/// assert!(config.set_root_path_once("/a"));
/// assert!(!config.set_root_path_once("/b"));
/// assert_eq!(config.root_path(), Some("/a"));
/// ```
#[derive(Debug, Default)]
pub struct OnceConfig {
    root_path: OnceLock<String>,
    dot_env_file_name: OnceLock<String>,
    apache_env_file_path: OnceLock<PathBuf>,
}

impl OnceConfig {
    /// Create an empty config.
    pub const fn new() -> Self {
        Self {
            root_path: OnceLock::new(),
            dot_env_file_name: OnceLock::new(),
            apache_env_file_path: OnceLock::new(),
        }
    }

    /// Set the root path if unset. Trailing separators are stripped.
    pub fn set_root_path_once(&self, path: impl AsRef<str>) -> bool {
        let won = self.root_path.set(normalize_root_path(path.as_ref())).is_ok();
        log_assignment("root path", won);
        won
    }

    /// Set the dot-env file name if unset.
    pub fn set_dot_env_file_name_once(&self, name: impl Into<String>) -> bool {
        let won = self.dot_env_file_name.set(name.into()).is_ok();
        log_assignment("dot-env file name", won);
        won
    }

    /// Set the Apache env file path if unset.
    pub fn set_apache_env_file_path_once(&self, path: impl Into<PathBuf>) -> bool {
        let won = self.apache_env_file_path.set(path.into()).is_ok();
        log_assignment("Apache env file path", won);
        won
    }

    /// The stored root path.
    pub fn root_path(&self) -> Option<&str> {
        self.root_path.get().map(String::as_str)
    }

    /// The stored dot-env file name.
    pub fn dot_env_file_name(&self) -> Option<&str> {
        self.dot_env_file_name.get().map(String::as_str)
    }

    /// The stored Apache env file path.
    pub fn apache_env_file_path(&self) -> Option<&Path> {
        self.apache_env_file_path.get().map(PathBuf::as_path)
    }

    /// Snapshot the current values into an immutable config.
    pub fn snapshot(&self) -> BootstrapConfig {
        BootstrapConfig {
            root_path: self.root_path.get().cloned(),
            dot_env_file_name: self.dot_env_file_name.get().cloned(),
            apache_env_file_path: self.apache_env_file_path.get().cloned(),
        }
    }
}

fn log_assignment(field: &str, won: bool) {
    if won {
        debug!("Set {}", field);
    } else {
        debug!("Ignoring {}: already set", field);
    }
}

static GLOBAL: OnceConfig = OnceConfig::new();

/// The process-wide once-only config.
pub fn global_once_config() -> &'static OnceConfig {
    &GLOBAL
}

/// Set the process-wide root path if unset.
pub fn set_root_path_once(path: impl AsRef<str>) -> bool {
    GLOBAL.set_root_path_once(path)
}

/// Set the process-wide dot-env file name if unset.
pub fn set_dot_env_file_name_once(name: impl Into<String>) -> bool {
    GLOBAL.set_dot_env_file_name_once(name)
}

/// Set the process-wide Apache env file path if unset.
pub fn set_apache_env_file_path_once(path: impl Into<PathBuf>) -> bool {
    GLOBAL.set_apache_env_file_path_once(path)
}

/// Snapshot of the process-wide once-only config.
pub fn global_bootstrap_config() -> BootstrapConfig {
    GLOBAL.snapshot()
}
