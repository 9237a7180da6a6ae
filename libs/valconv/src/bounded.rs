use crate::error::ConvertError;
use crate::options::ParseOptions;
use crate::scalar::{non_empty, Scalar};

/// A type with a finite set of declared members, each with one canonical
/// name and one integer code.
///
/// Implemented with `#[derive(BoundedValue)]`, which builds the table at
/// compile time. Name -> member and code -> member are both functions over
/// `VARIANTS`; nothing is discovered at run time.
pub trait BoundedValue: Scalar + Copy + Eq + 'static {
    /// Every declared member, in declaration order.
    const VARIANTS: &'static [Self];

    /// Canonical name. This is what formatting produces.
    fn name(&self) -> &'static str;

    /// Underlying code (the enum discriminant).
    fn code(&self) -> i64;

    /// Extra spellings accepted when parsing. Never produced by formatting.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Exact lookup by canonical name or alias.
    fn from_name(name: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|v| v.name() == name || v.aliases().iter().any(|a| *a == name))
    }

    /// ASCII case-insensitive lookup. First declared match wins.
    fn from_name_ignore_case(name: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| {
            v.name().eq_ignore_ascii_case(name)
                || v.aliases().iter().any(|a| a.eq_ignore_ascii_case(name))
        })
    }

    fn from_code(code: i64) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.code() == code)
    }
}

/// Name-table parser used by derived [`Scalar`] impls.
///
/// A numeric string is never taken as a raw code: with `accept_codes` off
/// it is an unknown name, with it on it must still be a declared code.
pub fn parse_name<T: BoundedValue>(text: &str, options: &ParseOptions) -> Result<T, ConvertError> {
    let text = non_empty(text, options, T::TYPE_NAME)?;

    let found = if options.ignore_case {
        T::from_name_ignore_case(text)
    } else {
        T::from_name(text)
    };
    if let Some(value) = found {
        return Ok(value);
    }

    if options.accept_codes {
        if let Ok(code) = text.parse::<i64>() {
            return T::from_code(code).ok_or(ConvertError::UnknownCode {
                type_name: T::TYPE_NAME,
                code,
            });
        }
    }

    Err(ConvertError::UnknownName {
        type_name: T::TYPE_NAME,
        text: text.to_string(),
    })
}

/// All declared members of `T`.
pub fn variants<T: BoundedValue>() -> impl Iterator<Item = T> {
    T::VARIANTS.iter().copied()
}

/// Canonical names of all declared members of `T`, in declaration order.
pub fn names<T: BoundedValue>() -> impl Iterator<Item = &'static str> {
    T::VARIANTS.iter().map(|v| v.name())
}
