//! Project configuration (plumage.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
pub struct ProjectConfig {
    #[serde(default)]
    pub components: ComponentsConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub resolve: ResolveConfig,
}

#[derive(Debug, Deserialize)]
pub struct ComponentsConfig {
    #[serde(default = "default_components_dir")]
    pub dir: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Framework flavor used by `render`
    #[serde(default = "default_framework")]
    pub framework: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct ResolveConfig {
    /// Validate configs and selections before resolving
    #[serde(default)]
    pub strict: bool,
}

impl Default for ComponentsConfig {
    fn default() -> Self {
        Self {
            dir: default_components_dir(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            framework: default_framework(),
        }
    }
}

fn default_components_dir() -> PathBuf {
    PathBuf::from("components")
}

fn default_framework() -> String {
    "react".to_string()
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load(path: &Path) -> Result<ProjectConfig> {
    if !path.exists() {
        return Ok(ProjectConfig::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ProjectConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}
