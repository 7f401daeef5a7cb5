//! .env file parsing.
//!
//! This module provides functionality for parsing environment variable files
//! in the standard KEY=value format.

use std::collections::BTreeMap;
use std::env::VarError;
use std::path::Path;

use crate::environment::lookup::present;
use crate::error::{Result, ServerEnvError};

/// Parses .env files into a map of environment variables.
///
/// # Supported Formats
///
/// - Simple: `KEY=value`
/// - Quoted: `KEY="value with spaces"` or `KEY='single quoted'`
/// - Empty: `KEY=`
/// - Comments: `# This is a comment`
/// - Inline comments after a value: `KEY=value # note`
/// - Whitespace around equals: `KEY = value`
/// - Values with equals signs: `URL=https://example.com?foo=bar`
/// - Shell exports: `export KEY=value`
/// - References: `URL=http://${HOST}/` expands `HOST` from earlier lines,
///   then from the process environment. Unknown references are kept as
///   written. Single-quoted values are not expanded.
///
/// Lines without an `=` are skipped.
///
/// # Example
///
/// ```
/// use server_env::config::EnvFileParser;
///
/// let content = r#"
/// # Database config
/// DB_HOST=db.internal # primary
/// DATABASE_URL=postgres://${DB_HOST}/db
/// DEBUG="true"
/// EMPTY=
/// "#;
///
/// let vars = EnvFileParser::parse(content);
/// assert_eq!(vars.get("DB_HOST"), Some(&"db.internal".to_string()));
/// assert_eq!(vars.get("DATABASE_URL"), Some(&"postgres://db.internal/db".to_string()));
/// assert_eq!(vars.get("DEBUG"), Some(&"true".to_string()));
/// assert_eq!(vars.get("EMPTY"), Some(&"".to_string()));
/// ```
pub struct EnvFileParser;

impl EnvFileParser {
    /// Parse env file content into a map of variables.
    ///
    /// Later assignments of the same key replace earlier ones.
    pub fn parse(content: &str) -> BTreeMap<String, String> {
        Self::parse_with_env(content, |key| std::env::var(key))
    }

    /// Parse with a custom source for references not defined in the file.
    pub fn parse_with_env<F>(content: &str, env_fn: F) -> BTreeMap<String, String>
    where
        F: Fn(&str) -> std::result::Result<String, VarError>,
    {
        let mut vars = BTreeMap::new();

        for line in content.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value, expandable)) = Self::parse_line(line) {
                let value = if expandable {
                    expand(&value, &vars, &env_fn)
                } else {
                    value
                };
                vars.insert(key, value);
            }
        }

        vars
    }

    fn parse_line(line: &str) -> Option<(String, String, bool)> {
        let line = line.strip_prefix("export ").unwrap_or(line);
        let (key, value) = line.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }

        let (value, expandable) = parse_value(value.trim());
        Some((key.to_string(), value, expandable))
    }

    /// Load and parse an env file from a path.
    ///
    /// # Errors
    ///
    /// Returns `EnvFileNotFound` if the file doesn't exist and
    /// `EnvFileParse` if it is not valid UTF-8 or defines a variable the
    /// process environment cannot hold.
    pub fn load(path: &Path) -> Result<BTreeMap<String, String>> {
        let content = read_env_file(path)?;
        let vars = Self::parse(&content);
        validate_vars(path, &vars)?;
        Ok(vars)
    }
}

/// Split a trimmed raw value into its text and whether `${VAR}` references
/// in it are expanded.
fn parse_value(raw: &str) -> (String, bool) {
    if let Some(quote) = raw.chars().next().filter(|c| *c == '"' || *c == '\'') {
        // Text after the closing quote is a comment
        if let Some(end) = raw[1..].find(quote) {
            return (raw[1..1 + end].to_string(), quote == '"');
        }
        return (raw.to_string(), true);
    }

    (strip_inline_comment(raw).to_string(), true)
}

/// Drop a `#` comment that follows whitespace.
fn strip_inline_comment(value: &str) -> &str {
    let cut = value
        .char_indices()
        .find(|&(i, c)| c == '#' && value[..i].ends_with(char::is_whitespace))
        .map(|(i, _)| i);

    match cut {
        Some(i) => value[..i].trim_end(),
        None => value,
    }
}

/// Replace `${NAME}` with the value of `NAME`, looked up in `vars` first and
/// then through `env_fn`.
fn expand<F>(value: &str, vars: &BTreeMap<String, String>, env_fn: &F) -> String
where
    F: Fn(&str) -> std::result::Result<String, VarError>,
{
    let mut result = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start + 2..].find('}') else {
            break;
        };
        let name = &rest[start + 2..start + 2 + len];
        let reference = &rest[start..start + 3 + len];

        result.push_str(&rest[..start]);
        let resolved = if is_reference_name(name) {
            vars.get(name).cloned().or_else(|| present(env_fn(name)))
        } else {
            None
        };
        result.push_str(resolved.as_deref().unwrap_or(reference));
        rest = &rest[start + 3 + len..];
    }

    result.push_str(rest);
    result
}

fn is_reference_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}

/// Whether `key` can be used as a process environment variable name.
pub(crate) fn is_valid_var_name(key: &str) -> bool {
    !key.is_empty() && !key.contains(['=', '\0'])
}

/// Check that every parsed variable can be written to the process
/// environment.
pub(crate) fn validate_vars(path: &Path, vars: &BTreeMap<String, String>) -> Result<()> {
    for (key, value) in vars {
        if !is_valid_var_name(key) {
            return Err(ServerEnvError::EnvFileParse {
                path: path.to_path_buf(),
                message: format!("invalid variable name {:?}", key),
            });
        }
        if value.contains('\0') {
            return Err(ServerEnvError::EnvFileParse {
                path: path.to_path_buf(),
                message: format!("value of {} contains a NUL byte", key),
            });
        }
    }
    Ok(())
}

/// Remove surrounding quotes from a value.
pub(crate) fn unquote(value: &str) -> String {
    let quoted = (value.starts_with('"') && value.ends_with('"'))
        || (value.starts_with('\'') && value.ends_with('\''));

    if quoted && value.len() >= 2 {
        value[1..value.len() - 1].to_string()
    } else {
        value.to_string()
    }
}

/// Read an env file, mapping IO failures to typed errors.
pub(crate) fn read_env_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ServerEnvError::EnvFileNotFound {
            path: path.to_path_buf(),
        },
        std::io::ErrorKind::InvalidData => ServerEnvError::EnvFileParse {
            path: path.to_path_buf(),
            message: "file is not valid UTF-8".to_string(),
        },
        _ => ServerEnvError::Io(e),
    })
}
