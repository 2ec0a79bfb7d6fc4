//! Joining of possibly-absent class fragments.
//!
//! Every present part is split on whitespace and the tokens are joined with
//! single spaces, so the output never has leading, trailing, or doubled
//! spaces.
//!
//! Absent values, empty strings, `0`, and both booleans are dropped. A bare
//! `true` never renders as the text `"true"`; write `cond.then_some("class")`
//! for a conditional fragment.

use std::borrow::Cow;

/// A value that may contribute a class fragment.
pub trait ClassPart {
    /// The fragment this value contributes, if any.
    fn class_part(&self) -> Option<Cow<'_, str>>;
}

impl ClassPart for str {
    fn class_part(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl ClassPart for String {
    fn class_part(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }
}

impl<T: ClassPart + ?Sized> ClassPart for &T {
    fn class_part(&self) -> Option<Cow<'_, str>> {
        (**self).class_part()
    }
}

impl<T: ClassPart> ClassPart for Option<T> {
    fn class_part(&self) -> Option<Cow<'_, str>> {
        self.as_ref().and_then(ClassPart::class_part)
    }
}

/// Booleans never contribute text. Use `cond.then_some("class")` for
/// conditional fragments.
impl ClassPart for bool {
    fn class_part(&self) -> Option<Cow<'_, str>> {
        None
    }
}

macro_rules! impl_numeric_part {
    ($($ty:ty),*) => {
        $(
            impl ClassPart for $ty {
                fn class_part(&self) -> Option<Cow<'_, str>> {
                    (*self != 0).then(|| Cow::Owned(self.to_string()))
                }
            }
        )*
    };
}

impl_numeric_part!(i32, i64, u32, u64, usize);

/// Append one part to `out`, inserting a single separating space.
pub fn push<T: ClassPart + ?Sized>(out: &mut String, part: &T) {
    let Some(fragment) = part.class_part() else {
        return;
    };

    for token in fragment.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
}

/// Join any number of parts into one class string.
///
/// ```
/// use plumage_core::class_names::combine;
///
/// assert_eq!(combine([Some("foo"), None, Some("bar")]), "foo bar");
/// ```
pub fn combine<I>(parts: I) -> String
where
    I: IntoIterator,
    I::Item: ClassPart,
{
    let mut out = String::new();
    for part in parts {
        push(&mut out, &part);
    }
    out
}

/// Join heterogeneous parts into one class string.
///
/// ```
/// use plumage_core::classes;
///
/// let extra: Option<&str> = None;
/// assert_eq!(classes!("btn", extra, false, "btn-lg"), "btn btn-lg");
/// ```
#[macro_export]
macro_rules! classes {
    ($($part:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut out = ::std::string::String::new();
        $( $crate::class_names::push(&mut out, &$part); )*
        out
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_present_values_with_spaces() {
        let result = classes!("foo", None::<&str>, "bar", false, "baz");

        assert_eq!(result, "foo bar baz");
    }

    #[test]
    fn returns_empty_string_for_absent_input() {
        let result = classes!(None::<&str>, Option::<String>::None, false, 0);

        assert_eq!(result, "");
    }

    #[test]
    fn collapses_inner_and_outer_whitespace() {
        let result = combine(["  a  b ", "", "   ", "c"]);

        assert_eq!(result, "a b c");
    }

    #[test]
    fn booleans_never_contribute_text() {
        let active = true;

        assert_eq!(classes!("a", true, false), "a");
        assert_eq!(classes!("a", active.then_some("on")), "a on");
    }

    #[test]
    fn renders_non_zero_numbers() {
        assert_eq!(classes!("z", 10, 0usize), "z 10");
    }

    #[test]
    fn accepts_owned_and_borrowed_strings() {
        let owned = String::from("owned");
        let result = combine(vec![Some(owned.as_str()), Some("borrowed")]);

        assert_eq!(result, "owned borrowed");
        assert_eq!(classes!(owned, Some(String::from("x"))), "owned x");
    }
}
