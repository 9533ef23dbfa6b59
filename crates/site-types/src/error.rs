use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of site configuration errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SiteErrorKind {
    ConfigNotFound,
    ConfigUnreadable,
    ConfigInvalid,
}

impl fmt::Display for SiteErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteErrorKind::ConfigNotFound => write!(f, "ConfigNotFound"),
            SiteErrorKind::ConfigUnreadable => write!(f, "ConfigUnreadable"),
            SiteErrorKind::ConfigInvalid => write!(f, "ConfigInvalid"),
        }
    }
}

/// Structured error raised while resolving build-time configuration.
///
/// Rendering itself never fails; only reading `config.toml` can.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteError {
    pub kind: SiteErrorKind,
    pub message: String,
}

impl SiteError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: SiteErrorKind::ConfigNotFound,
            message: message.into(),
        }
    }

    pub fn unreadable(message: impl Into<String>) -> Self {
        Self {
            kind: SiteErrorKind::ConfigUnreadable,
            message: message.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            kind: SiteErrorKind::ConfigInvalid,
            message: message.into(),
        }
    }
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for SiteError {}

impl From<toml::de::Error> for SiteError {
    fn from(err: toml::de::Error) -> Self {
        SiteError::invalid(err.message().to_string())
    }
}
