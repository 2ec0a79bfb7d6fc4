//! Preact adapter: classes travel in `class`.

use crate::traits::FrameworkAdapter;
use crate::variant_props::ClassAttribute;

/// Preact adapter.
#[derive(Debug, Default)]
pub struct PreactAdapter;

impl PreactAdapter {
    /// Create a new Preact adapter.
    pub fn new() -> Self {
        Self
    }
}

impl FrameworkAdapter for PreactAdapter {
    fn name(&self) -> &'static str {
        "preact"
    }

    fn class_attribute(&self) -> ClassAttribute {
        ClassAttribute::Class
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::{props, PropValue, Props};
    use plumage_core::VariantsConfig;

    #[test]
    fn forwards_explicit_variant_values() {
        let config = VariantsConfig::new()
            .base("btn")
            .variant("disabled", [("true", "opacity-50")])
            .variant("size", [("small", "text-sm"), ("large", "text-lg")])
            .default_variant("size", "small")
            .forward_prop("disabled");

        let result = PreactAdapter::new().variant_props(config).apply(&props([
            ("disabled", PropValue::Boolean(true)),
            ("size", "large".into()),
            ("class", "custom".into()),
        ]));

        assert_eq!(result.get("disabled"), Some(&PropValue::Boolean(true)));
        assert_eq!(
            result["class"],
            PropValue::from("btn opacity-50 text-lg custom")
        );
        assert!(!result.contains_key("size"));
    }

    #[test]
    fn uses_default_variant_values_when_forwarding() {
        let config = VariantsConfig::new()
            .base("btn")
            .variant("disabled", [("true", "opacity-50")])
            .default_variant("disabled", true)
            .forward_prop("disabled");

        let result = PreactAdapter::new().variant_props(config).apply(&Props::new());

        assert_eq!(result.get("disabled"), Some(&PropValue::Boolean(true)));
        assert!(result["class"].as_str().unwrap().contains("opacity-50"));
    }

    #[test]
    fn styled_merges_default_and_caller_classes() {
        let card = PreactAdapter::new()
            .styled("div", "bg-white".into())
            .with_default_props(props([("class", "shadow"), ("className", "rounded")]));

        let element = card.render(&props([("class", "p-4")]));

        assert_eq!(element.prop("class"), Some(&PropValue::from("bg-white shadow p-4 rounded")));
        assert_eq!(element.prop("className"), None);
    }
}
