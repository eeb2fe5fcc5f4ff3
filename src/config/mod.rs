//! Configuration loaded from `repo-routes.toml`.
//!
//! ```toml
//! [api]
//! base_url = "https://api.github.com/"
//! ```
//!
//! Every section is optional. A missing file at the default path yields
//! [`RoutesConfig::default`]; an explicitly named file must exist.

mod error;

pub use error::ConfigError;

use serde::Deserialize;
use std::fs;
use std::path::Path;
use url::Url;

use crate::uri::RelativeUri;

/// Config file looked up when `-C` is not given.
pub const DEFAULT_CONFIG: &str = "repo-routes.toml";

const DEFAULT_BASE_URL: &str = "https://api.github.com/";

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoutesConfig {
    pub api: ApiConfig,
}

/// `[api]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    /// Absolute base every relative URI is joined against.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl RoutesConfig {
    /// Load configuration from `path`.
    ///
    /// When `explicit` is false a missing file falls back to defaults.
    pub fn load(path: &Path, explicit: bool) -> Result<Self, ConfigError> {
        if !explicit && !path.exists() {
            return Ok(Self::default());
        }
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Parse and validate configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check `base_url` and normalize it to end with `/`.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.api.base_url).map_err(|err| {
            ConfigError::Validation(format!(
                "[api] base_url `{}` is not an absolute URL: {err}",
                self.api.base_url
            ))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "[api] base_url must use http or https, got `{}`",
                url.scheme()
            )));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(ConfigError::Validation(
                "[api] base_url must not carry a query or fragment".into(),
            ));
        }

        let mut normalized = url.to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        self.api.base_url = normalized;
        Ok(())
    }

    /// The validated base URL.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.api.base_url)
            .map_err(|err| ConfigError::Validation(format!("[api] base_url: {err}")))
    }

    /// Join a relative URI onto the configured base.
    pub fn absolute(&self, uri: &RelativeUri) -> Result<Url, ConfigError> {
        uri.join(&self.base_url()?)
            .map_err(|err| ConfigError::Validation(format!("cannot join `{uri}`: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = RoutesConfig::from_str("").unwrap();
        assert_eq!(config, RoutesConfig::default());
        assert_eq!(config.api.base_url, "https://api.github.com/");
    }

    #[test]
    fn test_trailing_slash_added() {
        let config =
            RoutesConfig::from_str("[api]\nbase_url = \"https://ghe.example.com/api/v3\"").unwrap();
        assert_eq!(config.api.base_url, "https://ghe.example.com/api/v3/");

        let uri = routes::issue(1, 2).unwrap();
        assert_eq!(
            config.absolute(&uri).unwrap().as_str(),
            "https://ghe.example.com/api/v3/repositories/1/issues/2"
        );
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let err = RoutesConfig::from_str("[api]\nbase = \"x\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));

        let err = RoutesConfig::from_str("[server]\nport = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_rejects_bad_base_url() {
        for bad in [
            "api.github.com",
            "ftp://example.com/",
            "https://example.com/?q=1",
            "https://example.com/#top",
        ] {
            let content = format!("[api]\nbase_url = \"{bad}\"");
            let err = RoutesConfig::from_str(&content).unwrap_err();
            assert!(matches!(err, ConfigError::Validation(_)), "{bad}");
        }
    }

    #[test]
    fn test_load_missing_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG);
        let config = RoutesConfig::load(&path, false).unwrap();
        assert_eq!(config, RoutesConfig::default());
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        let err = RoutesConfig::load(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::Io(p, _) if p == path));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[api]").unwrap();
        writeln!(file, "base_url = \"http://localhost:8080\"").unwrap();

        let config = RoutesConfig::load(file.path(), true).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080/");
    }
}
