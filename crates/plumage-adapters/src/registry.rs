//! Component registry for looking up styled component definitions.
//!
//! Scans a components directory for JSON, TOML, or YAML definition files
//! and renders inline markup through the registered components.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use plumage_core::{ConfigError, ConfigFormat, VariantsConfig};
use serde::Deserialize;
use walkdir::WalkDir;

use crate::element::Element;
use crate::inline::parse_inline_jsx;
use crate::props::Props;
use crate::styled::{Styled, StyledConfig};
use crate::traits::FrameworkAdapter;

/// A component definition file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDefinition {
    /// Component name; defaults to the file stem
    #[serde(default)]
    pub name: Option<String>,

    /// Tag rendered when no `as` prop is given
    #[serde(default = "default_element")]
    pub element: String,

    /// Props applied underneath caller props
    #[serde(default)]
    pub default_props: Props,

    /// Variant configuration
    #[serde(flatten)]
    pub config: VariantsConfig,
}

fn default_element() -> String {
    "div".to_string()
}

impl Default for ComponentDefinition {
    fn default() -> Self {
        Self {
            name: None,
            element: default_element(),
            default_props: Props::new(),
            config: VariantsConfig::default(),
        }
    }
}

impl ComponentDefinition {
    /// Build the styled component for an adapter.
    pub fn styled(&self, adapter: &dyn FrameworkAdapter) -> Styled {
        adapter
            .styled(&self.element, StyledConfig::Variants(self.config.clone()))
            .with_default_props(self.default_props.clone())
    }
}

/// A registered component.
#[derive(Debug, Clone)]
pub struct RegisteredComponent {
    /// Component name as declared
    pub name: String,

    /// Definition file, if loaded from disk
    pub source_path: Option<PathBuf>,

    /// Parsed definition
    pub definition: ComponentDefinition,
}

/// A registry of component definitions.
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    /// Components by lowercase name
    components: HashMap<String, RegisteredComponent>,

    /// Reject definitions with structural problems
    strict: bool,
}

impl ComponentRegistry {
    /// Create a new empty, lenient registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry that rejects invalid definitions.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    /// Register a definition under `name`.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        definition: ComponentDefinition,
    ) -> Result<(), RegistryError> {
        self.insert(name.into(), None, definition)
    }

    fn insert(
        &mut self,
        name: String,
        source_path: Option<PathBuf>,
        definition: ComponentDefinition,
    ) -> Result<(), RegistryError> {
        if let Err(source) = definition.config.validate() {
            if self.strict {
                return Err(RegistryError::Invalid { name, source });
            }
            tracing::warn!("Component {} has configuration issues: {}", name, source);
        }

        self.components.insert(
            name.to_lowercase(),
            RegisteredComponent {
                name,
                source_path,
                definition,
            },
        );
        Ok(())
    }

    /// Scan a directory for definition files and populate the registry.
    ///
    /// Files that fail to load or validate are logged and skipped. Returns
    /// the number of components registered.
    pub fn scan(&mut self, components_dir: &Path) -> Result<usize, RegistryError> {
        if !components_dir.exists() {
            return Err(RegistryError::DirectoryNotFound(
                components_dir.display().to_string(),
            ));
        }

        let mut count = 0;

        for entry in WalkDir::new(components_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !entry.file_type().is_file() || ConfigFormat::from_path(path).is_none() {
                continue;
            }

            // Skip hidden files
            let filename = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
            if filename.starts_with('.') {
                continue;
            }

            let definition: ComponentDefinition = match ConfigFormat::load(path) {
                Ok(d) => d,
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", path.display(), e);
                    continue;
                }
            };

            let name = definition.name.clone().unwrap_or_else(|| {
                path.file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("unknown")
                    .to_string()
            });

            match self.insert(name, Some(path.to_path_buf()), definition) {
                Ok(()) => count += 1,
                Err(e) => tracing::warn!("Skipping {}: {}", path.display(), e),
            }
        }

        tracing::debug!(
            "Registered {} components from {}",
            count,
            components_dir.display()
        );
        Ok(count)
    }

    /// Look up a component by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&RegisteredComponent> {
        self.components.get(&name.to_lowercase())
    }

    /// Check if a component exists.
    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(&name.to_lowercase())
    }

    /// Get all registered component names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.components.values().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Build the styled component for a registered name.
    pub fn styled(
        &self,
        name: &str,
        adapter: &dyn FrameworkAdapter,
    ) -> Result<Styled, RegistryError> {
        self.get(name)
            .map(|c| c.definition.styled(adapter))
            .ok_or_else(|| RegistryError::ComponentNotFound(name.to_string()))
    }

    /// Parse inline markup and render it through the named component.
    pub fn render_inline(
        &self,
        source: &str,
        adapter: &dyn FrameworkAdapter,
    ) -> Result<Element, RegistryError> {
        let jsx = parse_inline_jsx(source)
            .ok_or_else(|| RegistryError::InvalidMarkup(source.to_string()))?;

        let styled = self.styled(&jsx.component, adapter)?;
        Ok(styled.render(&jsx.props).with_children(jsx.children))
    }
}

/// Errors that can occur with the registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Components directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    #[error("Could not parse inline markup: {0}")]
    InvalidMarkup(String),

    #[error("Component {name} is invalid: {source}")]
    Invalid {
        name: String,
        #[source]
        source: ConfigError,
    },
}
