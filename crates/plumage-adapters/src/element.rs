//! Framework-neutral element description and static markup rendering.

use regex::Regex;
use std::sync::LazyLock;

use crate::props::{PropValue, Props};

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][\w.-]*$").expect("Invalid tag regex"));

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// An element ready to hand to a rendering primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Tag or component name
    pub tag: String,

    /// Final props, including the merged class attribute
    pub props: Props,

    /// Text or nested markup, inserted verbatim
    pub children: Option<String>,
}

impl Element {
    /// Create an element without children.
    pub fn new(tag: impl Into<String>, props: Props) -> Self {
        Self {
            tag: tag.into(),
            props,
            children: None,
        }
    }

    /// Attach children.
    pub fn with_children(mut self, children: Option<String>) -> Self {
        self.children = children;
        self
    }

    /// Look up a final prop.
    pub fn prop(&self, name: &str) -> Option<&PropValue> {
        self.props.get(name)
    }

    /// Render static HTML.
    ///
    /// `className` is written as `class`, `true` booleans as bare attributes;
    /// `false` booleans and expressions are dropped.
    pub fn to_html(&self) -> String {
        let mut attrs: Vec<String> = Vec::new();
        let mut seen: Vec<&str> = Vec::new();

        for (key, value) in &self.props {
            let name = match key.as_str() {
                "className" => "class",
                "children" => continue,
                other => other,
            };
            if seen.contains(&name) {
                continue;
            }

            match value {
                PropValue::String(s) => attrs.push(format!(r#"{}="{}""#, name, html_escape(s))),
                PropValue::Number(n) => attrs.push(format!(r#"{}="{}""#, name, n)),
                PropValue::Boolean(true) => attrs.push(name.to_string()),
                PropValue::Boolean(false) | PropValue::Expression(_) => continue,
            }
            seen.push(name);
        }

        let tag = &self.tag;
        let attrs_str = if attrs.is_empty() {
            String::new()
        } else {
            format!(" {}", attrs.join(" "))
        };

        if VOID_ELEMENTS.contains(&tag.as_str()) {
            return format!("<{tag}{attrs_str} />");
        }

        let children = self.children.as_deref().unwrap_or("");
        format!("<{tag}{attrs_str}>{children}</{tag}>")
    }
}

/// Whether `tag` is a plain element or component name.
pub fn is_valid_tag(tag: &str) -> bool {
    TAG_RE.is_match(tag)
}

/// Escape HTML special characters including single quotes for XSS prevention.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::props;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_attributes_in_prop_order() {
        let element = Element::new(
            "button",
            props([
                ("type", PropValue::from("submit")),
                ("disabled", true.into()),
                ("hidden", false.into()),
                ("onClick", PropValue::Expression("go".into())),
                ("className", "btn btn-lg".into()),
            ]),
        )
        .with_children(Some("Go".to_string()));

        assert_eq!(
            element.to_html(),
            r#"<button type="submit" disabled class="btn btn-lg">Go</button>"#
        );
    }

    #[test]
    fn escapes_attribute_values() {
        let element = Element::new("div", props([("title", r#"a "b" <c>"#)]));

        assert_eq!(
            element.to_html(),
            r#"<div title="a &quot;b&quot; &lt;c&gt;"></div>"#
        );
    }

    #[test]
    fn self_closes_void_elements() {
        let element = Element::new("input", props([("tabIndex", 2.0)]));

        assert_eq!(element.to_html(), r#"<input tabIndex="2" />"#);
    }

    #[test]
    fn validates_tag_names() {
        assert!(is_valid_tag("a"));
        assert!(is_valid_tag("my-element"));
        assert!(is_valid_tag("Card.Header"));
        assert!(!is_valid_tag(""));
        assert!(!is_valid_tag("1div"));
        assert!(!is_valid_tag("div onclick=alert(1)"));
        assert!(!is_valid_tag("a><script"));
    }

    #[test]
    fn writes_one_class_attribute() {
        let element = Element::new("div", props([("class", "a"), ("className", "b")]));

        assert_eq!(element.to_html(), r#"<div class="a"></div>"#);
    }
}
