//! Styled components: an element bound to a variant configuration.

use plumage_core::{classes, VariantsConfig};

use crate::element::{is_valid_tag, Element};
use crate::props::{class_of, PropValue, Props};
use crate::variant_props::{ClassAttribute, VariantProps};

/// Prop that swaps the rendered tag at call time.
pub const AS_PROP: &str = "as";

/// Configuration accepted by [`Styled::new`].
#[derive(Debug, Clone, PartialEq)]
pub enum StyledConfig {
    /// Only a base class, no variants
    Base(String),
    /// A full variant configuration
    Variants(VariantsConfig),
}

impl StyledConfig {
    /// Convert into a variant configuration.
    pub fn into_config(self) -> VariantsConfig {
        match self {
            Self::Base(base) => VariantsConfig::new().base(base),
            Self::Variants(config) => config,
        }
    }
}

impl From<&str> for StyledConfig {
    fn from(base: &str) -> Self {
        Self::Base(base.to_string())
    }
}

impl From<String> for StyledConfig {
    fn from(base: String) -> Self {
        Self::Base(base)
    }
}

impl From<VariantsConfig> for StyledConfig {
    fn from(config: VariantsConfig) -> Self {
        Self::Variants(config)
    }
}

/// An element type wrapped so callers pass variant props instead of classes.
#[derive(Debug, Clone)]
pub struct Styled {
    tag: String,
    mapper: VariantProps,
    default_props: Props,
}

impl Styled {
    /// Wrap `tag` with a configuration.
    pub fn new(
        tag: impl Into<String>,
        config: impl Into<StyledConfig>,
        attribute: ClassAttribute,
    ) -> Self {
        Self::from_mapper(
            tag,
            VariantProps::new(config.into().into_config(), attribute),
        )
    }

    /// Wrap `tag` with an existing prop mapper.
    pub fn from_mapper(tag: impl Into<String>, mapper: VariantProps) -> Self {
        Self {
            tag: tag.into(),
            mapper,
            default_props: Props::new(),
        }
    }

    /// Props applied underneath every caller's props.
    pub fn with_default_props(mut self, default_props: Props) -> Self {
        self.default_props = default_props;
        self
    }

    /// The default tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The prop mapper.
    pub fn mapper(&self) -> &VariantProps {
        &self.mapper
    }

    /// Produce the element for one use site.
    ///
    /// Caller props override defaults, except class strings, which are
    /// combined (defaults first). A string `as` prop that is a valid tag
    /// name replaces the tag.
    pub fn render(&self, props: &Props) -> Element {
        let tag = match props.get(AS_PROP) {
            Some(PropValue::String(tag)) if is_valid_tag(tag) => tag.clone(),
            Some(PropValue::String(tag)) if !tag.is_empty() => {
                tracing::warn!("Ignoring invalid `as` tag {:?}", tag);
                self.tag.clone()
            }
            _ => self.tag.clone(),
        };

        let mut merged = self.default_props.clone();
        for (name, value) in props {
            merged.insert(name.clone(), value.clone());
        }
        merged.shift_remove(AS_PROP);

        for attribute in [ClassAttribute::Class, ClassAttribute::ClassName] {
            let name = attribute.as_str();
            let combined = classes!(
                class_of(&self.default_props, name),
                class_of(props, name)
            );
            if combined.is_empty() {
                merged.shift_remove(name);
            } else {
                merged.insert(name.to_string(), PropValue::String(combined));
            }
        }

        tracing::trace!(tag = %tag, "Rendering styled element");
        Element::new(tag, self.mapper.apply(&merged))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::props;
    use plumage_core::OptionValue;
    use pretty_assertions::assert_eq;

    fn button(attribute: ClassAttribute) -> Styled {
        Styled::new(
            "button",
            VariantsConfig::new()
                .base("px-5 py-2")
                .variant("color", [("neutral", "bg-slate-500"), ("accent", "bg-teal-500")])
                .variant("outlined", [("true", "border-2")])
                .compound(
                    [("color", OptionValue::from("accent")), ("outlined", true.into())],
                    "border-teal-600",
                )
                .default_variant("color", "neutral"),
            attribute,
        )
    }

    #[test]
    fn renders_base_only_string_config() {
        let card = Styled::new("div", "bg-white p-4", ClassAttribute::ClassName);

        let element = card.render(&Props::new());

        assert_eq!(element.tag, "div");
        assert_eq!(element.to_html(), r#"<div class="bg-white p-4"></div>"#);
    }

    #[test]
    fn renders_variants_and_compounds() {
        let element = button(ClassAttribute::ClassName).render(&props([
            ("color", PropValue::from("accent")),
            ("outlined", true.into()),
        ]));

        assert_eq!(
            element.prop("className"),
            Some(&PropValue::from("px-5 py-2 bg-teal-500 border-2 border-teal-600"))
        );
        assert_eq!(element.prop("color"), None);
    }

    #[test]
    fn as_prop_swaps_the_tag() {
        let element = button(ClassAttribute::Class).render(&props([("as", "a"), ("href", "/docs")]));

        assert_eq!(element.tag, "a");
        assert_eq!(element.prop("as"), None);
        assert_eq!(element.prop("href"), Some(&PropValue::from("/docs")));
    }

    #[test]
    fn ignores_malformed_as_tags() {
        let styled = button(ClassAttribute::Class);

        for bad in ["", "a onclick=\"x\"", "div><script", "9lives"] {
            let element = styled.render(&props([("as", bad)]));

            assert_eq!(element.tag, "button");
            assert_eq!(element.prop("as"), None);
        }
    }

    #[test]
    fn default_props_sit_under_caller_props() {
        let styled = button(ClassAttribute::Class).with_default_props(props([
            ("type", PropValue::from("button")),
            ("class", "from-default".into()),
        ]));

        let element = styled.render(&props([("type", "submit"), ("class", "from-caller")]));

        assert_eq!(element.prop("type"), Some(&PropValue::from("submit")));
        assert_eq!(
            element.prop("class"),
            Some(&PropValue::from("px-5 py-2 bg-slate-500 from-default from-caller"))
        );
    }

    #[test]
    fn default_props_can_select_variants() {
        let styled = button(ClassAttribute::ClassName).with_default_props(props([("outlined", true)]));

        let element = styled.render(&Props::new());

        assert_eq!(
            element.prop("className"),
            Some(&PropValue::from("px-5 py-2 bg-slate-500 border-2"))
        );
    }
}
