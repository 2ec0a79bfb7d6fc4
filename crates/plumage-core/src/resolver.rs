//! The variant resolver.
//!
//! A [`Resolver`] is built once from a [`VariantsConfig`] and then called any
//! number of times, from any number of threads, with a [`Selection`]. Output
//! order is base, then one class per declared variant in declaration order,
//! then every matching compound variant in sequence order.

use std::collections::HashSet;
use std::sync::Arc;

use indexmap::IndexSet;
use rayon::prelude::*;

use crate::class_names;
use crate::config::{accepts, is_boolean_definitions, OptionValue, VariantsConfig};
use crate::error::{ConfigError, SelectionError};
use crate::selection::Selection;

static IMPLICIT_FALSE: OptionValue = OptionValue::Bool(false);

/// Resolves selections against an immutable configuration.
#[derive(Debug, Clone)]
pub struct Resolver {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    config: VariantsConfig,
    boolean_variants: HashSet<String>,
}

impl Resolver {
    /// Build a lenient resolver.
    ///
    /// Structural problems (compound variants or defaults naming unknown
    /// variants or options) are not reported; the affected lookups simply
    /// contribute nothing.
    pub fn new(config: VariantsConfig) -> Self {
        let boolean_variants = config
            .variants
            .iter()
            .filter(|(_, definitions)| is_boolean_definitions(definitions))
            .map(|(name, _)| name.clone())
            .collect();

        tracing::trace!(
            variants = config.variants.len(),
            compounds = config.compound_variants.len(),
            "Built variant resolver"
        );

        Self {
            inner: Arc::new(Inner {
                config,
                boolean_variants,
            }),
        }
    }

    /// Build a resolver, rejecting configurations with structural problems.
    pub fn strict(config: VariantsConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// The configuration this resolver closes over.
    pub fn config(&self) -> &VariantsConfig {
        &self.inner.config
    }

    /// Whether `variant` is a declared boolean variant.
    pub fn is_boolean_variant(&self, variant: &str) -> bool {
        self.inner.boolean_variants.contains(variant)
    }

    /// The effective option for `variant`.
    ///
    /// An explicit selection wins, then the configured default, then `false`
    /// for boolean variants. Anything else is unresolved.
    pub fn selected<'a>(&'a self, selection: &'a Selection, variant: &str) -> Option<&'a OptionValue> {
        selection
            .get(variant)
            .or_else(|| self.inner.config.default_variants.get(variant))
            .or_else(|| self.is_boolean_variant(variant).then_some(&IMPLICIT_FALSE))
    }

    /// Resolve a selection to its class string.
    ///
    /// Never fails: unknown variants and options contribute nothing.
    pub fn resolve(&self, selection: &Selection) -> String {
        let config = &self.inner.config;
        let mut out = String::new();

        class_names::push(&mut out, &config.base);

        for (name, definitions) in &config.variants {
            let class = self
                .selected(selection, name)
                .and_then(|option| definitions.get(option.as_key()));
            class_names::push(&mut out, &class);
        }

        for compound in &config.compound_variants {
            let matches = compound
                .variants
                .iter()
                .all(|(name, required)| self.selected(selection, name) == Some(required));
            if matches {
                class_names::push(&mut out, &compound.class_name);
            }
        }

        out
    }

    /// Reject selections naming undeclared variants or options.
    ///
    /// [`resolve`](Self::resolve) never calls this; it is meant for
    /// boundaries that take untyped input.
    pub fn check_selection(&self, selection: &Selection) -> Result<(), SelectionError> {
        for (name, option) in selection.iter() {
            let definitions = self
                .inner
                .config
                .variants
                .get(name)
                .ok_or_else(|| SelectionError::UnknownVariant(name.to_string()))?;

            if !accepts(definitions, option) {
                return Err(SelectionError::UnknownOption {
                    variant: name.to_string(),
                    option: option.clone(),
                });
            }
        }
        Ok(())
    }

    /// Every class token this resolver can emit, first-seen order.
    pub fn classes_used(&self) -> Vec<String> {
        let config = &self.inner.config;
        let mut seen: IndexSet<&str> = IndexSet::new();

        let fragments = config
            .base
            .iter()
            .chain(config.variants.values().flat_map(|d| d.values()))
            .chain(config.compound_variants.iter().map(|c| &c.class_name));

        for fragment in fragments {
            seen.extend(fragment.split_whitespace());
        }

        seen.into_iter().map(str::to_string).collect()
    }

    /// Every selection in the option space.
    ///
    /// Boolean variants contribute `false` and `true`; other variants their
    /// declared keys. The first variant varies slowest.
    pub fn combinations(&self) -> Vec<Selection> {
        let mut combos = vec![Selection::new()];

        for (name, definitions) in &self.inner.config.variants {
            let domain: Vec<OptionValue> = if self.is_boolean_variant(name) {
                vec![OptionValue::Bool(false), OptionValue::Bool(true)]
            } else {
                definitions.keys().cloned().map(OptionValue::Key).collect()
            };

            if domain.is_empty() {
                continue;
            }

            combos = combos
                .into_iter()
                .flat_map(|combo| {
                    domain
                        .iter()
                        .map(move |option| combo.clone().set(name.as_str(), option.clone()))
                })
                .collect();
        }

        combos
    }

    /// Resolve every combination in parallel.
    pub fn matrix(&self) -> Vec<(Selection, String)> {
        let combos = self.combinations();
        tracing::debug!("Resolving {} combinations", combos.len());

        combos
            .into_par_iter()
            .map(|selection| {
                let classes = self.resolve(&selection);
                (selection, classes)
            })
            .collect()
    }
}

impl From<VariantsConfig> for Resolver {
    fn from(config: VariantsConfig) -> Self {
        Self::new(config)
    }
}
