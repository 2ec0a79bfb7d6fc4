//! Variant resolution engine.
//!
//! This crate turns a declarative description of named variants (base class,
//! option-to-class mappings, compound rules, and defaults) plus a per-call
//! selection into a single class string.

pub mod class_names;
pub mod config;
pub mod error;
pub mod format;
pub mod resolver;
pub mod selection;
pub mod typed;

pub use config::{CompoundVariant, OptionValue, VariantDefinitions, Variants, VariantsConfig};
pub use error::{ConfigError, ConfigIssue, SelectionError};
pub use format::ConfigFormat;
pub use resolver::Resolver;
pub use selection::Selection;
pub use typed::VariantOption;
