use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{AuthorProfile, PathPrefix, SiteError};

/// The site's public identity. Constant for the lifetime of a build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteIdentity {
    pub title: String,
}

impl SiteIdentity {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// The `[site]` table of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub path_prefix: PathPrefix,
}

/// Top-level config file structure matching `config.toml`.
///
/// Every field has a default so an empty or partial file is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSettings,
    #[serde(default)]
    pub author: AuthorProfile,
}

impl SiteConfig {
    pub fn new(title: impl Into<String>, path_prefix: impl Into<PathPrefix>) -> Self {
        Self {
            site: SiteSettings {
                title: title.into(),
                path_prefix: path_prefix.into(),
            },
            author: AuthorProfile::default(),
        }
    }

    pub fn with_author(mut self, author: AuthorProfile) -> Self {
        self.author = author;
        self
    }

    pub fn identity(&self) -> SiteIdentity {
        SiteIdentity::new(self.site.title.clone())
    }

    pub fn path_prefix(&self) -> &PathPrefix {
        &self.site.path_prefix
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, SiteError> {
        Ok(toml::from_str(contents)?)
    }

    /// Read and parse a config file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SiteError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => SiteError::not_found(path.display().to_string()),
            _ => SiteError::unreadable(format!("{}: {e}", path.display())),
        })?;
        Self::from_toml_str(&contents)
    }
}
