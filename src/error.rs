//! Unified error type for all filepruner operations.
//!
//! Only configuration-phase failures live here: a value of this type aborts
//! the run before any traversal starts. Failures encountered mid-walk
//! (unreadable entries, failed deletions) are logged where they occur and
//! never become values of this enum.

/// Error type for filepruner operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error reading the config file.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Config directory not found.
    ConfigDirNotFound,
    /// `delete_after` matched neither the day shorthand nor the compound grammar.
    InvalidDuration(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
            Self::InvalidDuration(s) => write!(f, "invalid duration: '{s}'"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
