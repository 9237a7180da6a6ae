//! Serialize a bounded value as its canonical name.
//!
//! ```ignore
//! #[derive(Serialize, Deserialize)]
//! struct Pixel {
//!     #[serde(with = "valconv::serde_name")]
//!     color: Color,
//!     #[serde(with = "valconv::serde_name::option", default)]
//!     tint: Option<Color>,
//! }
//! ```
//!
//! Deserialization uses strict matching; aliases are accepted.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

use crate::bounded::{parse_name, BoundedValue};
use crate::options::ParseOptions;

pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: BoundedValue,
    S: Serializer,
{
    serializer.serialize_str(value.name())
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: BoundedValue,
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_name(&text, &ParseOptions::strict()).map_err(D::Error::custom)
}

/// Same as the parent module, for `Option<T>` fields. `None` is `null`.
pub mod option {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::bounded::{parse_name, BoundedValue};
    use crate::options::ParseOptions;

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: BoundedValue,
        S: Serializer,
    {
        match value {
            Some(v) => serializer.serialize_some(v.name()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: BoundedValue,
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(text) => parse_name(&text, &ParseOptions::strict())
                .map(Some)
                .map_err(D::Error::custom),
            None => Ok(None),
        }
    }
}
