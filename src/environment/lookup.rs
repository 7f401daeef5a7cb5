//! Override-aware environment variable lookup.
//!
//! For a variable `X`, a variable named `LOCAL_X` takes precedence when it
//! holds a non-empty value. Multi-part names are joined with the separator
//! (`_` by default), so `["DB", "HOST"]` reads `LOCAL_DB_HOST` then
//! `DB_HOST`.

use std::env::VarError;

use tracing::debug;

/// Prefix of override variables.
pub const LOCAL_PREFIX: &str = "LOCAL";

/// Separator used to join name parts unless configured otherwise.
pub const DEFAULT_SEPARATOR: &str = "_";

/// Joins variable names and applies the `LOCAL` override convention.
///
/// # Example
///
/// ```
/// use server_env::environment::EnvVarLookup;
/// use std::collections::HashMap;
///
/// let vars: HashMap<&str, &str> = [("LOCAL_DB_HOST", "127.0.0.1"), ("DB_HOST", "db")]
///     .into_iter()
///     .collect();
/// let lookup = EnvVarLookup::new();
///
/// let value = lookup.get_env_var_with(&["DB", "HOST"], |key| {
///     vars.get(key).map(|v| v.to_string()).ok_or(std::env::VarError::NotPresent)
/// });
/// assert_eq!(value.as_deref(), Some("127.0.0.1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVarLookup {
    separator: String,
}

impl EnvVarLookup {
    /// Create a lookup using the default `_` separator.
    pub fn new() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// Use a different separator for joining parts and the `LOCAL` prefix.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// The configured separator.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Join name parts with the separator.
    pub fn join<S: AsRef<str>>(&self, parts: &[S]) -> String {
        let parts: Vec<&str> = parts.iter().map(AsRef::as_ref).collect();
        parts.join(&self.separator)
    }

    /// Name of the override variable for `name`.
    pub fn local_name(&self, name: &str) -> String {
        format!("{}{}{}", LOCAL_PREFIX, self.separator, name)
    }

    /// Look up `parts` in the process environment.
    pub fn get_env_var<S: AsRef<str>>(&self, parts: &[S]) -> Option<String> {
        self.get_env_var_with(parts, |key| std::env::var(key))
    }

    /// Look up `parts` with a custom variable source.
    ///
    /// Returns the override when it is set and non-empty, otherwise the
    /// plain variable when it is set (possibly empty), otherwise `None`.
    pub fn get_env_var_with<S, F>(&self, parts: &[S], env_fn: F) -> Option<String>
    where
        S: AsRef<str>,
        F: Fn(&str) -> Result<String, VarError>,
    {
        let key = self.join(parts);
        let local_key = self.local_name(&key);

        if let Some(value) = present(env_fn(&local_key)) {
            if !value.is_empty() {
                debug!("Using override {} for {}", local_key, key);
                return Some(value);
            }
        }

        present(env_fn(&key))
    }
}

impl Default for EnvVarLookup {
    fn default() -> Self {
        Self::new()
    }
}

/// Value of a variable lookup, `None` only when the variable is unset.
///
/// A set but non-UTF-8 value is converted lossily.
pub(crate) fn present(result: Result<String, VarError>) -> Option<String> {
    match result {
        Ok(value) => Some(value),
        Err(VarError::NotUnicode(raw)) => Some(raw.to_string_lossy().into_owned()),
        Err(VarError::NotPresent) => None,
    }
}

/// Look up `parts` in the process environment with the default separator.
pub fn get_env_var<S: AsRef<str>>(parts: &[S]) -> Option<String> {
    EnvVarLookup::new().get_env_var(parts)
}
