use serde::{Deserialize, Serialize};
use std::fmt;

/// Deployment sub-path the site is served under, e.g. `""` or `"/blog"`.
///
/// Resolved once at build time and threaded explicitly into every render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathPrefix(String);

impl PathPrefix {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self(prefix.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The landing-page route: the prefix followed by `/`.
    pub fn root_path(&self) -> String {
        format!("{}/", self.0)
    }

    /// Exact string comparison against [`root_path`](Self::root_path).
    ///
    /// No trailing-slash normalization and no case folding: `/index` and
    /// `/BLOG/` are never the root of `""` and `/blog` respectively.
    pub fn is_root(&self, path: &str) -> bool {
        path.strip_prefix(self.0.as_str()) == Some("/")
    }
}

impl fmt::Display for PathPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PathPrefix {
    fn from(prefix: String) -> Self {
        Self(prefix)
    }
}

impl From<&str> for PathPrefix {
    fn from(prefix: &str) -> Self {
        Self::new(prefix)
    }
}

/// Route information supplied by the router for a single render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationContext {
    /// Already-normalized absolute path of the page being rendered.
    pub current_path: String,
}

impl NavigationContext {
    pub fn new(current_path: impl Into<String>) -> Self {
        Self {
            current_path: current_path.into(),
        }
    }

    pub fn is_root(&self, prefix: &PathPrefix) -> bool {
        prefix.is_root(&self.current_path)
    }
}
