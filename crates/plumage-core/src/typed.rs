//! Typed option sets for callers that know their variants at compile time.

use crate::config::OptionValue;

/// A closed set of options for one variant.
///
/// Usually implemented through [`option_enum!`](crate::option_enum).
pub trait VariantOption: Copy + 'static {
    /// Name of the variant these options belong to.
    const VARIANT: &'static str;

    /// Every option, in declaration order.
    const ALL: &'static [Self];

    /// The definition key for this option.
    fn key(&self) -> &'static str;

    /// This option as a selection value; `true`/`false` keys select the
    /// boolean option.
    fn value(&self) -> OptionValue {
        OptionValue::parse(self.key())
    }
}

/// Declare an enum whose variants are the options of one variant.
///
/// ```
/// use plumage_core::{option_enum, Selection, VariantOption};
///
/// option_enum! {
///     pub enum Tone for "tone" {
///         Neutral => "neutral",
///         Accent => "accent",
///     }
/// }
///
/// let selection = Selection::new().with(Tone::Accent);
/// assert_eq!(selection.get("tone"), Some(&Tone::Accent.value()));
/// assert_eq!(Tone::ALL.len(), 2);
/// ```
#[macro_export]
macro_rules! option_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident for $variant:literal {
            $($option:ident => $key:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($option),+
        }

        impl $crate::VariantOption for $name {
            const VARIANT: &'static str = $variant;
            const ALL: &'static [Self] = &[$(Self::$option),+];

            fn key(&self) -> &'static str {
                match self {
                    $(Self::$option => $key),+
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{Resolver, Selection, VariantOption, VariantsConfig};

    option_enum! {
        enum Size for "size" {
            Small => "small",
            Large => "large",
        }
    }

    #[test]
    fn typed_options_drive_resolution() {
        let resolver = Resolver::new(
            VariantsConfig::new().variant("size", [("small", "text-sm"), ("large", "text-lg")]),
        );

        assert_eq!(resolver.resolve(&Selection::new().with(Size::Large)), "text-lg");
        assert_eq!(resolver.resolve(&Selection::new().with(Size::Small)), "text-sm");
    }

    #[test]
    fn lists_every_option() {
        let keys: Vec<_> = Size::ALL.iter().map(VariantOption::key).collect();

        assert_eq!(keys, vec!["small", "large"]);
        assert_eq!(Size::VARIANT, "size");
    }
}
