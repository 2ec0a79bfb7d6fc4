//! Mapping of variant props onto a single class-bearing prop.

use std::collections::HashSet;

use plumage_core::{classes, ConfigError, Resolver, Selection, VariantsConfig};

use crate::props::{class_of, PropValue, Props};

/// Name of the prop that carries classes for a framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassAttribute {
    /// React-style `className`
    #[default]
    ClassName,
    /// Preact/DOM-style `class`
    Class,
}

impl ClassAttribute {
    /// The prop name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClassName => "className",
            Self::Class => "class",
        }
    }
}

/// Strips variant props from a prop bag and replaces them with classes.
#[derive(Debug, Clone)]
pub struct VariantProps {
    resolver: Resolver,
    reserved: HashSet<String>,
    attribute: ClassAttribute,
}

impl VariantProps {
    /// Build from a lenient resolver over `config`.
    pub fn new(config: VariantsConfig, attribute: ClassAttribute) -> Self {
        Self::from_resolver(Resolver::new(config), attribute)
    }

    /// Build from a configuration, rejecting structural problems.
    pub fn strict(config: VariantsConfig, attribute: ClassAttribute) -> Result<Self, ConfigError> {
        Ok(Self::from_resolver(Resolver::strict(config)?, attribute))
    }

    /// Build from an existing resolver.
    pub fn from_resolver(resolver: Resolver, attribute: ClassAttribute) -> Self {
        let reserved = resolver.config().variants.keys().cloned().collect();
        Self {
            resolver,
            reserved,
            attribute,
        }
    }

    /// The underlying resolver.
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// The class prop this mapper writes.
    pub fn attribute(&self) -> ClassAttribute {
        self.attribute
    }

    /// Whether `name` is a declared variant and therefore consumed.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved.contains(name)
    }

    /// Extract the variant selection carried by `props`.
    pub fn selection(&self, props: &Props) -> Selection {
        let mut selection = Selection::new();
        for (name, value) in props {
            if self.is_reserved(name) {
                selection.insert(name.as_str(), value.option_value());
            }
        }
        selection
    }

    /// Map incoming props to the props handed to the rendering primitive.
    ///
    /// Non-variant props pass through untouched. Variants listed in
    /// `forwardProps` are forwarded with their resolved value. The resolved
    /// classes are merged with any caller-supplied class strings.
    pub fn apply(&self, props: &Props) -> Props {
        let selection = self.selection(props);
        let resolved = self.resolver.resolve(&selection);

        let mut result: Props = props
            .iter()
            .filter(|(name, _)| !self.is_reserved(name))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();

        for name in &self.resolver.config().forward_props {
            if let Some(value) = self.resolver.selected(&selection, name) {
                result.insert(name.clone(), PropValue::from(value.clone()));
            }
        }

        let class = match self.attribute {
            ClassAttribute::ClassName => {
                result.shift_remove("class");
                classes!(class_of(props, "className"), class_of(props, "class"), resolved)
            }
            ClassAttribute::Class => {
                // `className` is folded into `class` so the element carries one class prop.
                result.shift_remove("className");
                classes!(resolved, class_of(props, "class"), class_of(props, "className"))
            }
        };
        result.insert(self.attribute.as_str().to_string(), PropValue::String(class));

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::props;
    use pretty_assertions::assert_eq;

    fn config() -> VariantsConfig {
        VariantsConfig::new()
            .base("btn")
            .variant("tone", [("neutral", "text-slate-700"), ("accent", "text-teal-600")])
            .variant("disabled", [("true", "opacity-50")])
            .default_variant("tone", "neutral")
    }

    #[test]
    fn strips_variant_props_and_passes_the_rest() {
        let mapper = VariantProps::new(config(), ClassAttribute::ClassName);

        let result = mapper.apply(&props([
            ("tone", PropValue::from("accent")),
            ("type", "button".into()),
            ("onClick", PropValue::Expression("go".into())),
        ]));

        assert!(!result.contains_key("tone"));
        assert_eq!(result["type"], PropValue::from("button"));
        assert_eq!(result["onClick"], PropValue::Expression("go".into()));
        assert_eq!(result["className"], PropValue::from("btn text-teal-600"));
    }

    #[test]
    fn class_name_flavor_puts_caller_classes_first() {
        let mapper = VariantProps::new(config(), ClassAttribute::ClassName);

        let result = mapper.apply(&props([("className", "custom")]));

        assert_eq!(result["className"], PropValue::from("custom btn text-slate-700"));
    }

    #[test]
    fn class_name_flavor_folds_class() {
        let mapper = VariantProps::new(config(), ClassAttribute::ClassName);

        let result = mapper.apply(&props([("class", "one"), ("className", "two")]));

        assert_eq!(result["className"], PropValue::from("two one btn text-slate-700"));
        assert!(!result.contains_key("class"));
    }

    #[test]
    fn class_flavor_puts_resolved_classes_first_and_folds_class_name() {
        let mapper = VariantProps::new(config(), ClassAttribute::Class);

        let result = mapper.apply(&props([("class", "one"), ("className", "two")]));

        assert_eq!(result["class"], PropValue::from("btn text-slate-700 one two"));
        assert!(!result.contains_key("className"));
    }

    #[test]
    fn always_sets_class_prop() {
        let mapper = VariantProps::new(VariantsConfig::new(), ClassAttribute::ClassName);

        let result = mapper.apply(&Props::new());

        assert_eq!(result["className"], PropValue::from(""));
    }

    #[test]
    fn variant_props_do_not_leak_without_forwarding() {
        let mapper = VariantProps::new(config(), ClassAttribute::ClassName);

        let result = mapper.apply(&props([("disabled", true)]));

        assert!(!result.contains_key("disabled"));
        assert_eq!(result["className"], PropValue::from("btn text-slate-700 opacity-50"));
    }

    #[test]
    fn forwards_resolved_values() {
        let mapper = VariantProps::new(
            config().forward_prop("disabled").forward_prop("tone"),
            ClassAttribute::ClassName,
        );

        let explicit = mapper.apply(&props([("disabled", true)]));
        let implicit = mapper.apply(&Props::new());

        assert_eq!(explicit["disabled"], PropValue::Boolean(true));
        assert_eq!(explicit["tone"], PropValue::from("neutral"));
        assert_eq!(implicit["disabled"], PropValue::Boolean(false));
    }

    #[test]
    fn expression_values_read_as_unset() {
        let mapper = VariantProps::new(config(), ClassAttribute::ClassName);

        let result = mapper.apply(&props([("tone", PropValue::Expression("t".into()))]));

        assert_eq!(result["className"], PropValue::from("btn text-slate-700"));
    }

    #[test]
    fn strict_mapper_rejects_broken_config() {
        let broken = config().forward_prop("ghost");

        assert!(VariantProps::strict(broken, ClassAttribute::Class).is_err());
    }
}
