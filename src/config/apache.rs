//! Apache env file parsing.
//!
//! Lets command-line processes see the variables a web server would set for
//! the application. Two line forms are understood:
//!
//! - `SetEnv NAME value` directives from a vhost or `.htaccess` file
//! - `export NAME=value` lines from an Apache `envvars` script
//!
//! Everything else (other directives, comments, blank lines) is ignored.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::env_file::{read_env_file, unquote, validate_vars};
use crate::error::Result;

static SET_ENV: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^setenv\s+(\S+)(?:\s+(.*))?$").unwrap());

static EXPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^export\s+([A-Za-z_][A-Za-z0-9_]*)=(.*)$").unwrap());

/// Parses Apache env files.
///
/// # Example
///
/// ```
/// use server_env::config::ApacheEnvParser;
///
/// let content = r#"
/// <VirtualHost *:80>
///     SetEnv APP_ENV 2
///     SetEnv APP_NAME "My App"
/// </VirtualHost>
/// "#;
///
/// let vars = ApacheEnvParser::parse(content);
/// assert_eq!(vars.get("APP_ENV"), Some(&"2".to_string()));
/// assert_eq!(vars.get("APP_NAME"), Some(&"My App".to_string()));
/// ```
pub struct ApacheEnvParser;

impl ApacheEnvParser {
    /// Parse Apache env file content into a map of variables.
    pub fn parse(content: &str) -> BTreeMap<String, String> {
        let mut vars = BTreeMap::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(caps) = SET_ENV.captures(line) {
                let value = caps.get(2).map_or("", |m| m.as_str().trim());
                vars.insert(caps[1].to_string(), unquote(value));
            } else if let Some(caps) = EXPORT.captures(line) {
                vars.insert(caps[1].to_string(), unquote(caps[2].trim()));
            }
        }

        vars
    }

    /// Load and parse an Apache env file.
    ///
    /// # Errors
    ///
    /// Returns `EnvFileNotFound` if the file doesn't exist and
    /// `EnvFileParse` if it names a variable the process environment cannot
    /// hold (such as `SetEnv A=B 1`).
    pub fn load(path: &Path) -> Result<BTreeMap<String, String>> {
        let content = read_env_file(path)?;
        let vars = Self::parse(&content);
        validate_vars(path, &vars)?;
        Ok(vars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServerEnvError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn parses_set_env_directives() {
        let vars = ApacheEnvParser::parse("SetEnv APP_ENV 1\nSetEnv DB_HOST db.internal");
        assert_eq!(vars.get("APP_ENV"), Some(&"1".to_string()));
        assert_eq!(vars.get("DB_HOST"), Some(&"db.internal".to_string()));
    }

    #[test]
    fn set_env_is_case_insensitive() {
        let vars = ApacheEnvParser::parse("setenv APP_ENV 3\nSETENV OTHER x");
        assert_eq!(vars.get("APP_ENV"), Some(&"3".to_string()));
        assert_eq!(vars.get("OTHER"), Some(&"x".to_string()));
    }

    #[test]
    fn set_env_without_value_is_empty() {
        let vars = ApacheEnvParser::parse("SetEnv FLAG");
        assert_eq!(vars.get("FLAG"), Some(&"".to_string()));
    }

    #[test]
    fn set_env_strips_quotes() {
        let vars = ApacheEnvParser::parse("SetEnv GREETING \"hello world\"");
        assert_eq!(vars.get("GREETING"), Some(&"hello world".to_string()));
    }

    #[test]
    fn parses_envvars_exports() {
        let content = r#"
# envvars - default environment variables for apache2ctl
unset HOME
export APACHE_RUN_USER=www-data
export APACHE_LOG_DIR='/var/log/apache2'
"#;
        let vars = ApacheEnvParser::parse(content);
        assert_eq!(vars.len(), 2);
        assert_eq!(vars.get("APACHE_RUN_USER"), Some(&"www-data".to_string()));
        assert_eq!(
            vars.get("APACHE_LOG_DIR"),
            Some(&"/var/log/apache2".to_string())
        );
    }

    #[test]
    fn ignores_other_directives() {
        let content = r#"
<VirtualHost *:80>
    ServerName example.com
    DocumentRoot /var/www
    # SetEnv COMMENTED 1
    SetEnv APP_ENV 2
</VirtualHost>
"#;
        let vars = ApacheEnvParser::parse(content);
        assert_eq!(vars.len(), 1);
        assert_eq!(vars.get("APP_ENV"), Some(&"2".to_string()));
    }

    #[test]
    fn load_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("envvars");
        fs::write(&path, "SetEnv APP_ENV 4\n").unwrap();

        let vars = ApacheEnvParser::load(&path).unwrap();
        assert_eq!(vars.get("APP_ENV"), Some(&"4".to_string()));
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let result = ApacheEnvParser::load(Path::new("/nonexistent/apache/envvars"));
        assert!(matches!(result, Err(ServerEnvError::EnvFileNotFound { .. })));
    }

    #[test]
    fn load_rejects_equals_in_name() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site.conf");
        fs::write(&path, "SetEnv APP_A=B 1\n").unwrap();

        match ApacheEnvParser::load(&path) {
            Err(ServerEnvError::EnvFileParse { message, .. }) => {
                assert!(message.contains("APP_A=B"));
            }
            other => panic!("Expected EnvFileParse, got {:?}", other),
        }
    }

    #[test]
    fn load_rejects_nul_in_value() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("envvars");
        fs::write(&path, "export APP_NAME=a\0b\n").unwrap();

        let result = ApacheEnvParser::load(&path);
        assert!(matches!(result, Err(ServerEnvError::EnvFileParse { .. })));
    }
}
