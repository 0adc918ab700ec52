//! Display configuration for tripview using the prefer crate.

use std::path::{Path, PathBuf};

use chrono::FixedOffset;
use serde::Deserialize;
use thiserror::Error;

use crate::format::{parse_offset, FormatError};
use crate::models::FilterType;

/// Environment variable overriding the configured UTC offset.
pub const UTC_OFFSET_ENV: &str = "TRIPVIEW_UTC_OFFSET";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {format} config: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },
    #[error("Unknown filter in config: {0:?}")]
    UnknownFilter(String),
    #[error(transparent)]
    Offset(#[from] FormatError),
}

/// Display settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DisplayConfig {
    /// Offset naive timestamps are placed in and instants are shown in,
    /// e.g. `"+02:00"`. Defaults to UTC.
    #[serde(default)]
    pub utc_offset: Option<String>,
    /// Filter selected when none is requested.
    #[serde(default)]
    pub default_filter: Option<String>,
    /// Filters that are always rendered disabled.
    #[serde(default)]
    pub disabled_filters: Vec<String>,
    /// Where this config was loaded from.
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl DisplayConfig {
    /// Load configuration using prefer crate for discovery.
    /// Falls back to defaults when no file is found or it cannot be parsed.
    pub async fn load() -> Self {
        let config = match prefer::load("tripview").await {
            Ok(pref_config) => {
                Self::load_or_default(pref_config.source_path().map(PathBuf::as_path)).await
            }
            Err(_) => Self::default(),
        };
        config.with_env_overrides()
    }

    /// Load `path` if given, logging and falling back to defaults on failure.
    pub async fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load_from_path(path).await {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config file: {}", e);
                Self::default()
            }
        }
    }

    /// Load configuration from a specific file path.
    /// The format follows the file extension: TOML, YAML, or JSON otherwise.
    pub async fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
        let mut config = Self::parse(&contents, ext)?;
        config.source_path = Some(path.to_path_buf());
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn parse(contents: &str, ext: &str) -> Result<Self, ConfigError> {
        match ext {
            "toml" => toml::from_str(contents).map_err(|e| ConfigError::Parse {
                format: "TOML",
                message: e.to_string(),
            }),
            "yaml" | "yml" => serde_yaml::from_str(contents).map_err(|e| ConfigError::Parse {
                format: "YAML",
                message: e.to_string(),
            }),
            _ => serde_json::from_str(contents).map_err(|e| ConfigError::Parse {
                format: "JSON",
                message: e.to_string(),
            }),
        }
    }

    /// Apply `TRIPVIEW_UTC_OFFSET` if set.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(offset) = std::env::var(UTC_OFFSET_ENV) {
            self.utc_offset = Some(offset);
        }
        self
    }

    /// The configured offset, UTC when unset.
    pub fn offset(&self) -> Result<FixedOffset, ConfigError> {
        match self.utc_offset.as_deref() {
            Some(text) => Ok(parse_offset(text)?),
            None => Ok(parse_offset("UTC")?),
        }
    }

    pub fn default_filter(&self) -> Result<FilterType, ConfigError> {
        match self.default_filter.as_deref() {
            Some(name) => Self::filter(name),
            None => Ok(FilterType::default()),
        }
    }

    pub fn disabled_filters(&self) -> Result<Vec<FilterType>, ConfigError> {
        self.disabled_filters
            .iter()
            .map(|name| Self::filter(name))
            .collect()
    }

    fn filter(name: &str) -> Result<FilterType, ConfigError> {
        FilterType::from_str(name).ok_or_else(|| ConfigError::UnknownFilter(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = DisplayConfig::default();
        assert_eq!(config.offset().unwrap().local_minus_utc(), 0);
        assert_eq!(config.default_filter().unwrap(), FilterType::Everything);
        assert!(config.disabled_filters().unwrap().is_empty());
    }

    #[test]
    fn test_parse_formats() {
        let toml = DisplayConfig::parse("utc_offset = \"+02:00\"\ndefault_filter = \"future\"", "toml").unwrap();
        assert_eq!(toml.offset().unwrap().local_minus_utc(), 7200);
        assert_eq!(toml.default_filter().unwrap(), FilterType::Future);

        let yaml = DisplayConfig::parse("disabled_filters:\n  - past\n  - present\n", "yml").unwrap();
        assert_eq!(
            yaml.disabled_filters().unwrap(),
            vec![FilterType::Past, FilterType::Present]
        );

        let json = DisplayConfig::parse(r#"{"utc_offset": "-05:00"}"#, "json").unwrap();
        assert_eq!(json.offset().unwrap().local_minus_utc(), -5 * 3600);
    }

    #[test]
    fn test_parse_errors() {
        let err = DisplayConfig::parse("utc_offset = [", "toml").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { format: "TOML", .. }));

        let config = DisplayConfig {
            default_filter: Some("tomorrow".to_string()),
            utc_offset: Some("+99".to_string()),
            ..Default::default()
        };
        assert!(matches!(config.default_filter(), Err(ConfigError::UnknownFilter(_))));
        assert!(matches!(config.offset(), Err(ConfigError::Offset(_))));
    }

    #[tokio::test]
    async fn test_load_from_path() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "default_filter = \"past\"").unwrap();

        let config = DisplayConfig::load_from_path(file.path()).await.unwrap();
        assert_eq!(config.default_filter().unwrap(), FilterType::Past);
        assert_eq!(config.source_path.as_deref(), Some(file.path()));
    }

    #[tokio::test]
    async fn test_load_from_missing_path() {
        let err = DisplayConfig::load_from_path(Path::new("/nonexistent/tripview.toml"))
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[tokio::test]
    async fn test_load_or_default_falls_back() {
        assert_eq!(DisplayConfig::load_or_default(None).await, DisplayConfig::default());

        let missing = DisplayConfig::load_or_default(Some(Path::new("/nonexistent/tripview.toml"))).await;
        assert_eq!(missing, DisplayConfig::default());

        let mut broken = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(broken, "disabled_filters: [past").unwrap();
        let config = DisplayConfig::load_or_default(Some(broken.path())).await;
        assert_eq!(config, DisplayConfig::default());

        let mut valid = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        writeln!(valid, r#"{{"default_filter": "present"}}"#).unwrap();
        let config = DisplayConfig::load_or_default(Some(valid.path())).await;
        assert_eq!(config.default_filter().unwrap(), FilterType::Present);
    }

    // The only test touching the process environment, so set and unset stay in one place.
    #[test]
    fn test_env_override() {
        let previous = std::env::var(UTC_OFFSET_ENV).ok();

        std::env::set_var(UTC_OFFSET_ENV, "+05:30");
        let config = DisplayConfig {
            utc_offset: Some("-01:00".to_string()),
            ..Default::default()
        }
        .with_env_overrides();
        assert_eq!(config.utc_offset.as_deref(), Some("+05:30"));
        assert_eq!(config.offset().unwrap().local_minus_utc(), 5 * 3600 + 1800);

        std::env::remove_var(UTC_OFFSET_ENV);
        let config = DisplayConfig {
            utc_offset: Some("-01:00".to_string()),
            ..Default::default()
        }
        .with_env_overrides();
        assert_eq!(config.offset().unwrap().local_minus_utc(), -3600);
        assert_eq!(DisplayConfig::default().with_env_overrides().utc_offset, None);

        if let Some(value) = previous {
            std::env::set_var(UTC_OFFSET_ENV, value);
        }
    }
}
