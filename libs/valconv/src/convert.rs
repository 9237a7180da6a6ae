//! Value conversions with fallback.
//!
//! Everything here is total: unparseable text, undeclared codes and absent
//! inputs become `None` or the caller's default. Only [`parse`] reports
//! why. Usage errors (a non-bounded type where a bounded one is required)
//! are rejected by the trait bounds at compile time.

use crate::bounded::BoundedValue;
use crate::error::ConvertError;
use crate::options::ParseOptions;
use crate::scalar::Scalar;

/// Parse `text` exactly. `None` for empty or unparseable input.
pub fn try_parse<T: Scalar>(text: &str) -> Option<T> {
    try_parse_with(text, &ParseOptions::strict())
}

pub fn try_parse_with<T: Scalar>(text: &str, options: &ParseOptions) -> Option<T> {
    match T::parse_scalar(text, options) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::trace!(type_name = T::TYPE_NAME, input = text, error = %e, "parse failed, treating as absent");
            None
        }
    }
}

/// Strict parse that keeps the reason for failure.
pub fn parse<T: Scalar>(text: &str) -> Result<T, ConvertError> {
    T::parse_scalar(text, &ParseOptions::strict())
}

/// Canonical name of `value`.
pub fn format<T: BoundedValue>(value: T) -> &'static str {
    value.name()
}

/// Canonical name of a present value, `default` when absent.
///
/// The name is widened into `D`, so the default need not be a string:
/// `String`, `&str`, `Cow<str>` and `Option<&str>` all work.
pub fn format_or<T, D>(value: Option<T>, default: D) -> D
where
    T: BoundedValue,
    D: From<&'static str>,
{
    match value {
        Some(v) => D::from(format(v)),
        None => default,
    }
}

/// Like [`format_or`] with a lazily built default.
pub fn format_or_else<T, D, F>(value: Option<T>, default: F) -> D
where
    T: BoundedValue,
    D: From<&'static str>,
    F: FnOnce() -> D,
{
    match value {
        Some(v) => D::from(format(v)),
        None => default(),
    }
}

/// Round-trip a present value through its canonical name, yielding the
/// declared member it names. `default` when absent or when the name does
/// not parse back.
pub fn normalize_or<T: BoundedValue>(value: Option<T>, default: Option<T>) -> Option<T> {
    let Some(value) = value else {
        return default;
    };
    match try_parse::<T>(format(value)) {
        Some(normalized) => Some(normalized),
        None => {
            tracing::trace!(type_name = T::TYPE_NAME, name = value.name(), "name did not round-trip, using default");
            default
        }
    }
}

/// Member declared with `code`, `default` if none is.
pub fn from_code_or<T: BoundedValue>(code: i64, default: Option<T>) -> Option<T> {
    match T::from_code(code) {
        Some(value) => Some(value),
        None => {
            tracing::trace!(type_name = T::TYPE_NAME, code, "undeclared code, using default");
            default
        }
    }
}

/// Code of `value`, else the code of `default`, else `None`.
///
/// The default is a `T`, so its code is always read from the table.
pub fn code_or<T: BoundedValue>(value: Option<T>, default: Option<T>) -> Option<i64> {
    value.or(default).map(|v| v.code())
}

/// Parse optional text, `default` when it is absent, empty or unparseable.
pub fn parse_or<T: Scalar>(text: Option<&str>, default: Option<T>) -> Option<T> {
    parse_or_with(text, default, &ParseOptions::strict())
}

pub fn parse_or_with<T: Scalar>(
    text: Option<&str>,
    default: Option<T>,
    options: &ParseOptions,
) -> Option<T> {
    text.and_then(|t| try_parse_with(t, options)).or(default)
}

/// Fallback conversions as methods on an optional bounded value.
pub trait BoundedOptionExt<T: BoundedValue> {
    fn format_or<D: From<&'static str>>(self, default: D) -> D;
    fn normalize_or(self, default: Option<T>) -> Option<T>;
    fn code_or(self, default: Option<T>) -> Option<i64>;
}

impl<T: BoundedValue> BoundedOptionExt<T> for Option<T> {
    fn format_or<D: From<&'static str>>(self, default: D) -> D {
        format_or(self, default)
    }

    fn normalize_or(self, default: Option<T>) -> Option<T> {
        normalize_or(self, default)
    }

    fn code_or(self, default: Option<T>) -> Option<i64> {
        code_or(self, default)
    }
}

/// Scalar parsing as methods on text.
pub trait ScalarStrExt {
    fn try_scalar<T: Scalar>(&self) -> Option<T>;
    fn scalar_or<T: Scalar>(&self, default: T) -> T;
}

impl ScalarStrExt for str {
    fn try_scalar<T: Scalar>(&self) -> Option<T> {
        try_parse(self)
    }

    fn scalar_or<T: Scalar>(&self, default: T) -> T {
        try_parse(self).unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoundedValue;

    #[derive(BoundedValue, Debug, Clone, Copy, PartialEq, Eq)]
    enum Mode {
        Off,
        On,
    }

    #[test]
    fn format_or_widens_into_the_default_type() {
        let s: String = format_or(Some(Mode::On), String::from("none"));
        assert_eq!(s, "On");

        let missing: Option<&str> = format_or(None::<Mode>, None);
        assert_eq!(missing, None);

        let present: Option<&str> = format_or(Some(Mode::Off), None);
        assert_eq!(present, Some("Off"));
    }

    #[test]
    fn format_or_else_only_builds_default_when_absent() {
        let name: String = format_or_else(Some(Mode::Off), || unreachable!());
        assert_eq!(name, "Off");
        let name: String = format_or_else(None::<Mode>, || "n/a".to_string());
        assert_eq!(name, "n/a");
    }

    #[test]
    fn parse_or_handles_absent_text() {
        assert_eq!(parse_or::<Mode>(None, Some(Mode::Off)), Some(Mode::Off));
        assert_eq!(parse_or(Some(""), Some(Mode::On)), Some(Mode::On));
        assert_eq!(parse_or::<Mode>(Some(""), None), None);
        assert_eq!(parse_or(Some("On"), Some(Mode::Off)), Some(Mode::On));
        assert_eq!(parse_or(Some("12"), Some(0u32)), Some(12));
        assert_eq!(parse_or(Some("x"), Some(0u32)), Some(0));
    }

    #[test]
    fn parse_or_with_applies_options() {
        let opts = ParseOptions::lenient();
        assert_eq!(parse_or_with(Some(" on "), None, &opts), Some(Mode::On));
        assert_eq!(parse_or_with::<Mode>(Some(" on "), None, &ParseOptions::strict()), None);
    }

    #[test]
    fn code_or_prefers_value() {
        assert_eq!(code_or(Some(Mode::On), Some(Mode::Off)), Some(1));
        assert_eq!(code_or(None, Some(Mode::On)), Some(1));
        assert_eq!(code_or::<Mode>(None, None), None);
    }

    #[test]
    fn strict_parse_reports_reason() {
        assert_eq!(parse::<Mode>("On"), Ok(Mode::On));
        assert_eq!(
            parse::<Mode>("Auto"),
            Err(ConvertError::UnknownName { type_name: "Mode", text: "Auto".into() })
        );
    }

    #[test]
    fn extension_methods() {
        assert_eq!(Some(Mode::On).format_or("?"), "On");
        assert_eq!(None::<Mode>.format_or("?"), "?");
        assert_eq!(None::<Mode>.normalize_or(Some(Mode::Off)), Some(Mode::Off));
        assert_eq!(Some(Mode::Off).code_or(None), Some(0));
        assert_eq!("On".try_scalar::<Mode>(), Some(Mode::On));
        assert_eq!("nope".scalar_or(Mode::Off), Mode::Off);
        assert_eq!("17".scalar_or(0i64), 17);
    }
}
