//! Error types for configuration loading, validation, and selection checks.

use std::path::PathBuf;

use crate::config::OptionValue;

/// Errors that can occur when loading or validating a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid JSON: {0}")]
    Json(String),

    #[error("Invalid TOML: {0}")]
    Toml(String),

    #[error("Invalid YAML: {0}")]
    Yaml(String),

    #[error("Invalid configuration: {}", summarize(.issues))]
    InvalidConfiguration { issues: Vec<ConfigIssue> },
}

impl ConfigError {
    /// Validation issues carried by this error, empty for parse errors.
    pub fn issues(&self) -> &[ConfigIssue] {
        match self {
            Self::InvalidConfiguration { issues } => issues,
            _ => &[],
        }
    }
}

fn summarize(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A single structural problem found in a configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigIssue {
    #[error("variant '{0}' has no options")]
    EmptyVariant(String),

    #[error("compound variant #{index} references unknown variant '{variant}'")]
    UnknownCompoundVariant { index: usize, variant: String },

    #[error("compound variant #{index} requires unknown option {option} for variant '{variant}'")]
    UnknownCompoundOption {
        index: usize,
        variant: String,
        option: OptionValue,
    },

    #[error("default references unknown variant '{0}'")]
    UnknownDefaultVariant(String),

    #[error("default option {option} is not declared for variant '{variant}'")]
    UnknownDefaultOption { variant: String, option: OptionValue },

    #[error("forwarded prop '{0}' is not a declared variant")]
    UnknownForwardProp(String),
}

/// Errors reported when checking a selection against a configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SelectionError {
    #[error("Unknown variant: {0}")]
    UnknownVariant(String),

    #[error("Unknown option {option} for variant '{variant}'")]
    UnknownOption { variant: String, option: OptionValue },
}
