//! server-env - Resolve the runtime server environment.
//!
//! Reads an environment code (Development, Staging, Production, Mirror,
//! Test) from process environment variables, honoring `LOCAL_`-prefixed
//! overrides, after optionally importing Apache and dot-env files.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Bootstrap paths and env file loading
//! - [`environment`] - Environment codes, variable lookup, and resolution
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Terminal output for CLI commands
//!
//! # Example
//!
//! ```
//! use server_env::environment::{EnvVarLookup, EnvironmentCode, ServerEnvironment};
//! use std::collections::HashMap;
//!
//! let vars: HashMap<&str, &str> = [("APP_ENV", "2"), ("LOCAL_APP_ENV", "0")]
//!     .into_iter()
//!     .collect();
//!
//! let env = ServerEnvironment::resolve_with_env(Some("APP_ENV"), &EnvVarLookup::new(), |key| {
//!     vars.get(key).map(|v| v.to_string()).ok_or(std::env::VarError::NotPresent)
//! });
//!
//! // The valid LOCAL override wins.
//! assert!(env.is(EnvironmentCode::Development));
//! assert!(env.is_in(&[EnvironmentCode::Development, EnvironmentCode::Test]));
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod ui;

pub use environment::{EnvironmentCode, ServerEnvironment};
pub use error::{Result, ServerEnvError};
