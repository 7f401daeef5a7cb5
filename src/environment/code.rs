//! Environment codes.
//!
//! The closed set of deployment environments a server can run in, the
//! fixed code→name table, and the explicit string→code coercion used when
//! reading codes out of environment variables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ServerEnvError;

/// A deployment environment.
///
/// # Example
///
/// ```
/// use server_env::environment::EnvironmentCode;
///
/// assert_eq!(EnvironmentCode::Production.code(), 2);
/// assert_eq!(EnvironmentCode::from_code(3), Some(EnvironmentCode::Mirror));
/// assert!(EnvironmentCode::is_valid(4));
/// assert!(!EnvironmentCode::is_valid(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentCode {
    /// Local development.
    Development = 0,
    /// Staging, also known as homologation.
    Staging = 1,
    /// Production.
    Production = 2,
    /// Mirror of production.
    Mirror = 3,
    /// Automated test runs.
    Test = 4,
}

/// Display name used when a resolved code has no entry in the table.
pub const UNKNOWN_ENVIRONMENT_NAME: &str = "Desconhecido";

const ENV_STRINGS: [(i64, &str); 5] = [
    (0, "Desenvolvimento"),
    (1, "Homologação"),
    (2, "Produção"),
    (3, "Espelho"),
    (4, "Teste"),
];

impl EnvironmentCode {
    /// All codes in ascending order.
    pub const ALL: [EnvironmentCode; 5] = [
        Self::Development,
        Self::Staging,
        Self::Production,
        Self::Mirror,
        Self::Test,
    ];

    /// Check whether an integer is one of the five defined codes.
    pub fn is_valid(code: i64) -> bool {
        Self::from_code(code).is_some()
    }

    /// Convert an integer into a code, if it is one.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Development),
            1 => Some(Self::Staging),
            2 => Some(Self::Production),
            3 => Some(Self::Mirror),
            4 => Some(Self::Test),
            _ => None,
        }
    }

    /// The integer value of this code.
    pub fn code(self) -> i64 {
        self as i64
    }

    /// Stable lowercase identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
            Self::Mirror => "mirror",
            Self::Test => "test",
        }
    }

    /// Localized display name from the code→name table.
    pub fn display_name(self) -> &'static str {
        ENV_STRINGS[self as usize].1
    }
}

impl fmt::Display for EnvironmentCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EnvironmentCode {
    type Err = ServerEnvError;

    /// Parse either the integer form (`"2"`) or the identifier (`"production"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = match trimmed.parse::<i64>() {
            Ok(code) => Self::from_code(code),
            Err(_) => match trimmed.to_lowercase().as_str() {
                "development" => Some(Self::Development),
                "staging" | "homologation" => Some(Self::Staging),
                "production" => Some(Self::Production),
                "mirror" => Some(Self::Mirror),
                "test" => Some(Self::Test),
                _ => None,
            },
        };

        parsed.ok_or_else(|| ServerEnvError::InvalidEnvironmentCode {
            value: s.to_string(),
        })
    }
}

/// The fixed code→name table.
pub fn env_strings() -> &'static [(i64, &'static str)] {
    &ENV_STRINGS
}

/// Display name for a raw code, falling back to [`UNKNOWN_ENVIRONMENT_NAME`].
pub fn name_for_code(code: i64) -> &'static str {
    EnvironmentCode::from_code(code)
        .map(EnvironmentCode::display_name)
        .unwrap_or(UNKNOWN_ENVIRONMENT_NAME)
}

/// Coerce an environment variable value into an integer code.
///
/// Leading ASCII whitespace (space, tab, newline, carriage return, vertical
/// tab, form feed) is skipped, then an optional sign and the longest run of
/// ASCII digits are read. Reading stops at the first other character, so
/// `"1e3"` is `1`. Absent, empty, or non-numeric values yield `0`
/// (Development). Values that overflow saturate.
///
/// # Example
///
/// ```
/// use server_env::environment::parse_code_or_default;
///
/// assert_eq!(parse_code_or_default(Some("2")), 2);
/// assert_eq!(parse_code_or_default(Some(" 3abc")), 3);
/// assert_eq!(parse_code_or_default(Some("abc")), 0);
/// assert_eq!(parse_code_or_default(None), 0);
/// ```
pub fn parse_code_or_default(value: Option<&str>) -> i64 {
    let Some(value) = value else {
        return 0;
    };

    let trimmed = value.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0B');
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut result: i64 = 0;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(byte - b'0');
        result = if negative {
            result.saturating_mul(10).saturating_sub(digit)
        } else {
            result.saturating_mul(10).saturating_add(digit)
        };
    }
    result
}
