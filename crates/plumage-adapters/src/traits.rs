//! Trait definitions for framework adapters.

use plumage_core::{ConfigError, VariantsConfig};

use crate::preact::PreactAdapter;
use crate::react::ReactAdapter;
use crate::styled::{Styled, StyledConfig};
use crate::variant_props::{ClassAttribute, VariantProps};

/// Trait for framework-specific adapters.
///
/// An adapter only decides how classes reach the rendering primitive; the
/// resolution itself is shared.
pub trait FrameworkAdapter: Send + Sync {
    /// Framework identifier (e.g., "react", "preact")
    fn name(&self) -> &'static str;

    /// Prop that carries classes in this framework
    fn class_attribute(&self) -> ClassAttribute;

    /// Build a prop mapper for `config`.
    fn variant_props(&self, config: VariantsConfig) -> VariantProps {
        VariantProps::new(config, self.class_attribute())
    }

    /// Build a prop mapper, rejecting structural problems in `config`.
    fn strict_variant_props(&self, config: VariantsConfig) -> Result<VariantProps, ConfigError> {
        VariantProps::strict(config, self.class_attribute())
    }

    /// Wrap `tag` as a styled component.
    fn styled(&self, tag: &str, config: StyledConfig) -> Styled {
        Styled::new(tag, config, self.class_attribute())
    }
}

/// Look up a built-in adapter by name.
pub fn adapter_for(name: &str) -> Option<Box<dyn FrameworkAdapter>> {
    match name.to_lowercase().as_str() {
        "react" => Some(Box::new(ReactAdapter::new())),
        "preact" => Some(Box::new(PreactAdapter::new())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_builtin_adapters() {
        assert_eq!(adapter_for("react").map(|a| a.name()), Some("react"));
        assert_eq!(adapter_for("Preact").map(|a| a.name()), Some("preact"));
        assert!(adapter_for("solid").is_none());
    }
}
