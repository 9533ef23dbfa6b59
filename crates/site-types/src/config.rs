use std::sync::OnceLock;

use crate::{PathPrefix, SiteConfig};

static CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Default path to the config file, relative to the project root.
pub const CONFIG_PATH: &str = "config.toml";

/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_ENV: &str = "SITE_CONFIG";

/// Environment variable overriding `site.path_prefix` at build time.
pub const PATH_PREFIX_ENV: &str = "SITE_PATH_PREFIX";

/// Read the config file, apply environment overrides, and store the result in
/// the global `OnceLock`. Only the first call has effect.
///
/// If the file is missing or unparseable the defaults are used.
pub fn load_site_config() -> &'static SiteConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();

        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| CONFIG_PATH.to_string());
        resolve_site_config(&path, std::env::var(PATH_PREFIX_ENV).ok())
    })
}

/// Load `path` and apply the prefix override, falling back to defaults when
/// the file is missing or unparseable.
pub fn resolve_site_config(path: &str, prefix: Option<String>) -> SiteConfig {
    let config = match SiteConfig::load_from(path) {
        Ok(config) => {
            tracing::info!(path = %path, title = %config.site.title, "loaded site config");
            config
        }
        Err(e) => {
            tracing::warn!(path = %path, error = %e, "using default site config");
            SiteConfig::default()
        }
    };
    let config = with_prefix_override(config, prefix);
    tracing::debug!(root_path = %config.path_prefix().root_path(), "resolved path prefix");
    config
}

/// Get the loaded config. Returns defaults if `load_site_config()` hasn't
/// been called yet.
pub fn site_config() -> &'static SiteConfig {
    static DEFAULT: OnceLock<SiteConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(SiteConfig::default))
}

/// Replace the configured path prefix when an override is present.
pub fn with_prefix_override(mut config: SiteConfig, prefix: Option<String>) -> SiteConfig {
    if let Some(prefix) = prefix {
        config.site.path_prefix = PathPrefix::from(prefix);
    }
    config
}
