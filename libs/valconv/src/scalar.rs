use std::fmt::Display;

use crate::error::ConvertError;
use crate::options::ParseOptions;

/// A single value that can be read from text.
///
/// Two kinds of implementors:
/// - bounded types, via `#[derive(BoundedValue)]` — name-table lookup;
/// - primitives (integers, floats, `bool`, `char`, `String`) — their
///   standard textual form.
///
/// Empty text (after optional trimming) is always [`ConvertError::Empty`],
/// never a value.
pub trait Scalar: Sized {
    /// Name used in errors and logs.
    const TYPE_NAME: &'static str;

    fn parse_scalar(text: &str, options: &ParseOptions) -> Result<Self, ConvertError>;
}

/// Trim per `options` and reject empty input.
pub(crate) fn non_empty<'a>(
    text: &'a str,
    options: &ParseOptions,
    type_name: &'static str,
) -> Result<&'a str, ConvertError> {
    let text = options.prepare(text);
    if text.is_empty() {
        Err(ConvertError::Empty { type_name })
    } else {
        Ok(text)
    }
}

fn malformed(type_name: &'static str, text: &str, reason: impl Display) -> ConvertError {
    ConvertError::Malformed {
        type_name,
        text: text.to_string(),
        reason: reason.to_string(),
    }
}

macro_rules! from_str_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);

                fn parse_scalar(text: &str, options: &ParseOptions) -> Result<Self, ConvertError> {
                    let text = non_empty(text, options, Self::TYPE_NAME)?;
                    text.parse::<$ty>().map_err(|e| malformed(Self::TYPE_NAME, text, e))
                }
            }
        )*
    };
}

from_str_scalar!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char,
);

impl Scalar for bool {
    const TYPE_NAME: &'static str = "bool";

    fn parse_scalar(text: &str, options: &ParseOptions) -> Result<Self, ConvertError> {
        let text = non_empty(text, options, Self::TYPE_NAME)?;
        if options.ignore_case {
            if text.eq_ignore_ascii_case("true") {
                return Ok(true);
            }
            if text.eq_ignore_ascii_case("false") {
                return Ok(false);
            }
        }
        text.parse::<bool>().map_err(|e| malformed(Self::TYPE_NAME, text, e))
    }
}

impl Scalar for String {
    const TYPE_NAME: &'static str = "String";

    fn parse_scalar(text: &str, options: &ParseOptions) -> Result<Self, ConvertError> {
        non_empty(text, options, Self::TYPE_NAME).map(str::to_string)
    }
}
