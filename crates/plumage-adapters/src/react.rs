//! React adapter: classes travel in `className`.

use crate::traits::FrameworkAdapter;
use crate::variant_props::ClassAttribute;

/// React adapter.
#[derive(Debug, Default)]
pub struct ReactAdapter;

impl ReactAdapter {
    /// Create a new React adapter.
    pub fn new() -> Self {
        Self
    }
}

impl FrameworkAdapter for ReactAdapter {
    fn name(&self) -> &'static str {
        "react"
    }

    fn class_attribute(&self) -> ClassAttribute {
        ClassAttribute::ClassName
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::{props, PropValue, Props};
    use plumage_core::VariantsConfig;

    fn disabled_config() -> VariantsConfig {
        VariantsConfig::new()
            .base("btn")
            .variant("disabled", [("true", "opacity-50")])
            .forward_prop("disabled")
    }

    #[test]
    fn forwards_explicit_variant_values() {
        let config = disabled_config()
            .variant("tone", [("neutral", "text-slate-700"), ("accent", "text-teal-600")])
            .default_variant("tone", "neutral");

        let map_props = ReactAdapter::new().variant_props(config);
        let result = map_props.apply(&props([
            ("disabled", PropValue::Boolean(true)),
            ("tone", "accent".into()),
            ("className", "custom".into()),
        ]));

        assert_eq!(result.get("disabled"), Some(&PropValue::Boolean(true)));
        let class = result["className"].as_str().unwrap();
        assert!(class.contains("btn"));
        assert!(class.contains("opacity-50"));
        assert!(class.contains("text-teal-600"));
        assert!(class.contains("custom"));
        assert!(!result.contains_key("tone"));
    }

    #[test]
    fn uses_default_variant_values_when_forwarding() {
        let config = disabled_config().default_variant("disabled", true);

        let result = ReactAdapter::new().variant_props(config).apply(&Props::new());

        assert_eq!(result.get("disabled"), Some(&PropValue::Boolean(true)));
        assert!(result["className"].as_str().unwrap().contains("opacity-50"));
    }

    #[test]
    fn renders_forwarded_props_through_styled_components() {
        let button = ReactAdapter::new().styled("button", disabled_config().into());

        let markup = button
            .render(&props([
                ("className", PropValue::from("custom")),
                ("disabled", true.into()),
            ]))
            .to_html();

        assert_eq!(
            markup,
            r#"<button class="custom btn opacity-50" disabled></button>"#
        );
    }
}
