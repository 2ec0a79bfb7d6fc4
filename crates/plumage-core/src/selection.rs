//! Per-call variant selections.

use indexmap::IndexMap;

use crate::config::OptionValue;
use crate::typed::VariantOption;

/// Chosen options for a single resolution.
///
/// An entry may be explicitly unset, which behaves exactly like an absent
/// entry: the variant falls back to its default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    values: IndexMap<String, Option<OptionValue>>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `option` for `variant`.
    pub fn set(mut self, variant: impl Into<String>, option: impl Into<OptionValue>) -> Self {
        self.insert(variant, Some(option.into()));
        self
    }

    /// Explicitly leave `variant` unset so its default applies.
    pub fn unset(mut self, variant: impl Into<String>) -> Self {
        self.insert(variant, None);
        self
    }

    /// Select a typed option.
    pub fn with<O: VariantOption>(self, option: O) -> Self {
        self.set(O::VARIANT, option.value())
    }

    /// Insert or replace an entry in place.
    pub fn insert(&mut self, variant: impl Into<String>, option: Option<OptionValue>) {
        self.values.insert(variant.into(), option);
    }

    /// The explicit option for `variant`, if one is set.
    pub fn get(&self, variant: &str) -> Option<&OptionValue> {
        self.values.get(variant).and_then(Option::as_ref)
    }

    /// Iterate over explicitly set entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.values
            .iter()
            .filter_map(|(name, value)| value.as_ref().map(|v| (name.as_str(), v)))
    }

    /// Number of explicitly set entries.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether no entry is explicitly set.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parse `name=value` assignments. Values `true` and `false` become
    /// booleans. Returns the offending text for malformed entries.
    pub fn from_assignments<'a>(
        assignments: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, String> {
        let mut selection = Self::new();
        for assignment in assignments {
            let (name, value) = assignment
                .split_once('=')
                .filter(|(name, _)| !name.trim().is_empty())
                .ok_or_else(|| assignment.to_string())?;
            selection.insert(name.trim(), Some(OptionValue::parse(value.trim())));
        }
        Ok(selection)
    }
}

impl<K, V> FromIterator<(K, V)> for Selection
where
    K: Into<String>,
    V: Into<OptionValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut selection = Self::new();
        for (k, v) in iter {
            selection.insert(k, Some(v.into()));
        }
        selection
    }
}
