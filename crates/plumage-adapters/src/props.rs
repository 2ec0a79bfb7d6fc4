//! Property bags passed through adapters.

use indexmap::IndexMap;
use plumage_core::OptionValue;
use serde::Deserialize;

/// Ordered property bag, as handed to a rendering primitive.
pub type Props = IndexMap<String, PropValue>;

/// A property value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    /// Boolean: disabled
    Boolean(bool),
    /// Number: tabIndex={0}
    Number(f64),
    /// String literal: tone="accent"
    String(String),
    /// Opaque expression: onClick={handler}
    #[serde(skip)]
    Expression(String),
}

impl PropValue {
    /// Get as string if it's a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as bool if it's a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Interpret this prop as a variant selection.
    ///
    /// Expressions cannot be evaluated here and read as unset.
    pub fn option_value(&self) -> Option<OptionValue> {
        match self {
            PropValue::Boolean(b) => Some(OptionValue::Bool(*b)),
            PropValue::Number(n) => Some(OptionValue::Key(n.to_string())),
            PropValue::String(s) => Some(OptionValue::Key(s.clone())),
            PropValue::Expression(_) => None,
        }
    }
}

impl From<OptionValue> for PropValue {
    fn from(value: OptionValue) -> Self {
        match value {
            OptionValue::Bool(b) => PropValue::Boolean(b),
            OptionValue::Key(key) => PropValue::String(key),
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::String(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::String(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Boolean(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        PropValue::Number(value)
    }
}

/// Build a [`Props`] bag from `(name, value)` pairs.
pub fn props<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Props
where
    K: Into<String>,
    V: Into<PropValue>,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// The string value of a class-bearing prop, if present.
pub fn class_of<'a>(props: &'a Props, attribute: &str) -> Option<&'a str> {
    props.get(attribute).and_then(PropValue::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_props_to_option_values() {
        assert_eq!(
            PropValue::from("accent").option_value(),
            Some(OptionValue::from("accent"))
        );
        assert_eq!(
            PropValue::Boolean(false).option_value(),
            Some(OptionValue::Bool(false))
        );
        assert_eq!(
            PropValue::Number(2.0).option_value(),
            Some(OptionValue::from("2"))
        );
        assert_eq!(PropValue::Expression("x".into()).option_value(), None);
    }

    #[test]
    fn deserializes_untagged_values() {
        let parsed: Props =
            plumage_core::ConfigFormat::Json.parse(r#"{ "type": "button", "disabled": true, "tabIndex": 0 }"#)
                .unwrap();

        assert_eq!(parsed["type"], PropValue::from("button"));
        assert_eq!(parsed["disabled"], PropValue::Boolean(true));
        assert_eq!(parsed["tabIndex"], PropValue::Number(0.0));
    }

    #[test]
    fn reads_only_string_class_values() {
        let bag = props([("className", PropValue::from("a")), ("class", true.into())]);

        assert_eq!(class_of(&bag, "className"), Some("a"));
        assert_eq!(class_of(&bag, "class"), None);
        assert_eq!(class_of(&bag, "missing"), None);
    }
}
