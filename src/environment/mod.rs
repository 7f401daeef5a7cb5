//! Environment code resolution.
//!
//! Determines which environment (development, staging, production, mirror,
//! test) the process runs in. For a code variable `X` the priority chain is:
//!
//! 1. `LOCAL_X`, when it holds a valid code
//! 2. `X`, coerced to an integer
//! 3. Fallback to Development

pub mod code;
pub mod lookup;
pub mod resolver;

pub use code::{
    env_strings, name_for_code, parse_code_or_default, EnvironmentCode, UNKNOWN_ENVIRONMENT_NAME,
};
pub use lookup::{get_env_var, EnvVarLookup, DEFAULT_SEPARATOR, LOCAL_PREFIX};
pub use resolver::{EnvironmentSource, ServerEnvironment};
