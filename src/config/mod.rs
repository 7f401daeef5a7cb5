//! Bootstrap configuration and env file loading.
//!
//! This module handles everything that happens before the environment is
//! resolved:
//! - Once-only bootstrap paths and the immutable config in [`paths`]
//! - Dot-env parsing in [`env_file`]
//! - Apache env file parsing in [`apache`]
//! - Applying files to the process environment in [`loader`]
//!
//! # Example
//!
//! ```
//! use server_env::config::{bootstrap, BootstrapConfig, ExecutionContext};
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".env"), "SERVER_ENV_DOC_EXAMPLE=1").unwrap();
//!
//! let config = BootstrapConfig::builder()
//!     .root_path(temp.path().to_string_lossy())
//!     .build();
//! let report = bootstrap(&config, ExecutionContext::Server).unwrap();
//!
//! assert_eq!(report.variable_count(), 1);
//! assert_eq!(std::env::var("SERVER_ENV_DOC_EXAMPLE").unwrap(), "1");
//! ```

pub mod apache;
pub mod env_file;
pub mod loader;
pub mod paths;

pub use apache::ApacheEnvParser;
pub use env_file::EnvFileParser;
pub use loader::{
    apply_to_process_env, bootstrap, AppliedEnvFile, BootstrapReport, EnvFileKind,
    ExecutionContext,
};
pub use paths::{
    global_bootstrap_config, global_once_config, normalize_root_path, set_apache_env_file_path_once,
    set_dot_env_file_name_once, set_root_path_once, BootstrapConfig, BootstrapConfigBuilder,
    OnceConfig, DEFAULT_DOT_ENV_FILE_NAME,
};
