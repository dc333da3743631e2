use std::fmt;
use thiserror::Error;

/// Unified error type for version-manager operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionManagerError {
    #[error("Error occurred while parsing version!")]
    InvalidFormat { input: String },

    #[error("Cannot rollback!")]
    NoHistory,

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results in version-manager
pub type Result<T> = std::result::Result<T, VersionManagerError>;

/// Stable identifier for each error variant.
///
/// Match on this rather than on the `Display` text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidFormat,
    NoHistory,
    Config,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidFormat => "invalid-format",
            ErrorKind::NoHistory => "no-history",
            ErrorKind::Config => "config",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl VersionManagerError {
    /// Create a parse error for the rejected input
    pub fn invalid_format(input: impl Into<String>) -> Self {
        VersionManagerError::InvalidFormat {
            input: input.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionManagerError::Config(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            VersionManagerError::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            VersionManagerError::NoHistory => ErrorKind::NoHistory,
            VersionManagerError::Config(_) => ErrorKind::Config,
        }
    }
}

impl From<toml::de::Error> for VersionManagerError {
    fn from(err: toml::de::Error) -> Self {
        VersionManagerError::config(err.message())
    }
}
