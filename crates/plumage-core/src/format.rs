//! Configuration file formats.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::ConfigError;

/// Serialization format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
    Yaml,
}

impl ConfigFormat {
    /// Detect the format from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Detect the format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Deserialize `source` in this format.
    pub fn parse<T: DeserializeOwned>(self, source: &str) -> Result<T, ConfigError> {
        match self {
            Self::Json => {
                serde_json::from_str(source).map_err(|e| ConfigError::Json(e.to_string()))
            }
            Self::Toml => toml::from_str(source).map_err(|e| ConfigError::Toml(e.to_string())),
            Self::Yaml => {
                serde_yaml::from_str(source).map_err(|e| ConfigError::Yaml(e.to_string()))
            }
        }
    }

    /// Read and deserialize a file, detecting the format from its extension.
    pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
        let format = Self::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.display().to_string()))?;

        let source = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        tracing::debug!("Loading {:?} configuration from {}", format, path.display());
        format.parse(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VariantsConfig;

    #[test]
    fn detects_format_from_extension() {
        assert_eq!(ConfigFormat::from_extension("json"), Some(ConfigFormat::Json));
        assert_eq!(ConfigFormat::from_extension("TOML"), Some(ConfigFormat::Toml));
        assert_eq!(ConfigFormat::from_extension("yml"), Some(ConfigFormat::Yaml));
        assert_eq!(ConfigFormat::from_extension("tsx"), None);
    }

    #[test]
    fn rejects_unknown_extension() {
        let result: Result<VariantsConfig, _> = ConfigFormat::load(Path::new("button.txt"));

        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn reports_missing_file() {
        let result: Result<VariantsConfig, _> =
            ConfigFormat::load(Path::new("definitely/not/here.json"));

        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn reports_parse_errors_per_format() {
        let json: Result<VariantsConfig, _> = ConfigFormat::Json.parse("{ base: ");
        let toml: Result<VariantsConfig, _> = ConfigFormat::Toml.parse("base = [");
        let yaml: Result<VariantsConfig, _> = ConfigFormat::Yaml.parse("base: [unclosed");

        assert!(matches!(json, Err(ConfigError::Json(_))));
        assert!(matches!(toml, Err(ConfigError::Toml(_))));
        assert!(matches!(yaml, Err(ConfigError::Yaml(_))));
    }
}
