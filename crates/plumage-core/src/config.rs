//! Variant configuration types.

use std::fmt;
use std::path::Path;

use indexmap::IndexMap;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigIssue};
use crate::format::ConfigFormat;

/// Option name -> class fragment.
pub type VariantDefinitions = IndexMap<String, String>;

/// Variant name -> its option definitions, in declaration order.
pub type Variants = IndexMap<String, VariantDefinitions>;

/// A selected or required option.
///
/// Boolean variants use [`OptionValue::Bool`]; every other variant uses
/// [`OptionValue::Key`]. The two never compare equal, even for `"true"`.
/// Numbers in configuration files become keys (`2` -> `"2"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Key(String),
}

impl OptionValue {
    /// Parse a textual value: `true`/`false` become booleans, anything
    /// else is an option key.
    pub fn parse(value: &str) -> Self {
        match value {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            other => Self::Key(other.to_string()),
        }
    }

    /// The key used to look the option up in its definitions.
    pub fn as_key(&self) -> &str {
        match self {
            Self::Bool(true) => "true",
            Self::Bool(false) => "false",
            Self::Key(key) => key,
        }
    }

    /// The boolean value, if this is a boolean option.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Key(_) => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Key(key) => write!(f, "\"{key}\""),
        }
    }
}

impl<'de> Deserialize<'de> for OptionValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(OptionValueVisitor)
    }
}

struct OptionValueVisitor;

impl Visitor<'_> for OptionValueVisitor {
    type Value = OptionValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a boolean, string, or number")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(OptionValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(OptionValue::Key(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(OptionValue::Key(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(OptionValue::Key(v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(OptionValue::Key(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(OptionValue::Key(v))
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Key(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Key(value)
    }
}

/// A class fragment applied when every listed variant resolves to the
/// required option.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompoundVariant {
    /// Required options; an empty map always matches.
    #[serde(default)]
    pub variants: IndexMap<String, OptionValue>,

    #[serde(rename = "className", alias = "class")]
    pub class_name: String,
}

impl CompoundVariant {
    /// Create a compound variant from its predicate entries.
    pub fn new<K, V>(
        predicate: impl IntoIterator<Item = (K, V)>,
        class_name: impl Into<String>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<OptionValue>,
    {
        Self {
            variants: predicate
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            class_name: class_name.into(),
        }
    }
}

/// Root variant configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantsConfig {
    /// Class applied on every resolution
    #[serde(default)]
    pub base: Option<String>,

    /// Declared variants, in declaration order
    #[serde(default)]
    pub variants: Variants,

    /// Compound rules, applied in sequence order
    #[serde(default)]
    pub compound_variants: Vec<CompoundVariant>,

    /// Default option per variant
    #[serde(default)]
    pub default_variants: IndexMap<String, OptionValue>,

    /// Variant names that adapters also forward to the rendered element
    #[serde(default)]
    pub forward_props: Vec<String>,
}

impl VariantsConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base class.
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Declare a variant with its options.
    pub fn variant<K, V>(
        mut self,
        name: impl Into<String>,
        options: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let definitions = options
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.variants.insert(name.into(), definitions);
        self
    }

    /// Append a compound variant.
    pub fn compound<K, V>(
        mut self,
        predicate: impl IntoIterator<Item = (K, V)>,
        class_name: impl Into<String>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<OptionValue>,
    {
        self.compound_variants
            .push(CompoundVariant::new(predicate, class_name));
        self
    }

    /// Set the default option for a variant.
    pub fn default_variant(
        mut self,
        name: impl Into<String>,
        option: impl Into<OptionValue>,
    ) -> Self {
        self.default_variants.insert(name.into(), option.into());
        self
    }

    /// Mark a variant as forwarded to the rendered element.
    pub fn forward_prop(mut self, name: impl Into<String>) -> Self {
        self.forward_props.push(name.into());
        self
    }

    /// Parse a JSON configuration.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        ConfigFormat::Json.parse(source)
    }

    /// Parse a TOML configuration.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        ConfigFormat::Toml.parse(source)
    }

    /// Parse a YAML configuration.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        ConfigFormat::Yaml.parse(source)
    }

    /// Load a configuration file, picking the format from its extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        ConfigFormat::load(path)
    }

    /// Whether `name` is declared as a boolean variant.
    pub fn is_boolean_variant(&self, name: &str) -> bool {
        self.variants.get(name).is_some_and(is_boolean_definitions)
    }

    /// Every structural problem in this configuration, in a stable order.
    pub fn issues(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for (name, definitions) in &self.variants {
            if definitions.is_empty() {
                issues.push(ConfigIssue::EmptyVariant(name.clone()));
            }
        }

        for (index, compound) in self.compound_variants.iter().enumerate() {
            for (variant, option) in &compound.variants {
                match self.variants.get(variant) {
                    None => issues.push(ConfigIssue::UnknownCompoundVariant {
                        index,
                        variant: variant.clone(),
                    }),
                    Some(definitions) if !accepts(definitions, option) => {
                        issues.push(ConfigIssue::UnknownCompoundOption {
                            index,
                            variant: variant.clone(),
                            option: option.clone(),
                        })
                    }
                    Some(_) => {}
                }
            }
        }

        for (variant, option) in &self.default_variants {
            match self.variants.get(variant) {
                None => issues.push(ConfigIssue::UnknownDefaultVariant(variant.clone())),
                Some(definitions) if !accepts(definitions, option) => {
                    issues.push(ConfigIssue::UnknownDefaultOption {
                        variant: variant.clone(),
                        option: option.clone(),
                    })
                }
                Some(_) => {}
            }
        }

        for name in &self.forward_props {
            if !self.variants.contains_key(name) {
                issues.push(ConfigIssue::UnknownForwardProp(name.clone()));
            }
        }

        issues
    }

    /// Reject configurations with structural problems.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let issues = self.issues();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::InvalidConfiguration { issues })
        }
    }
}

/// A variant is boolean when its keys are exactly `true` and/or `false`.
pub(crate) fn is_boolean_definitions(definitions: &VariantDefinitions) -> bool {
    !definitions.is_empty()
        && definitions
            .keys()
            .all(|key| key == "true" || key == "false")
}

/// Whether `option` is a legal selection for a variant with `definitions`.
///
/// Boolean variants accept either boolean since an undeclared side still
/// resolves (to no class). Other variants accept only declared keys.
pub(crate) fn accepts(definitions: &VariantDefinitions, option: &OptionValue) -> bool {
    match option {
        OptionValue::Bool(_) => is_boolean_definitions(definitions),
        OptionValue::Key(key) => {
            !is_boolean_definitions(definitions) && definitions.contains_key(key)
        }
    }
}
