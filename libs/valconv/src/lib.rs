//! Safe conversions between strings, integer codes and bounded value
//! types, with absence and caller-supplied fallbacks instead of errors.

// Lets the derive's `::valconv::` paths resolve inside this crate's own tests.
extern crate self as valconv;

pub mod bounded;
pub mod convert;
pub mod error;
pub mod options;
pub mod scalar;
pub mod serde_name;

pub use bounded::BoundedValue;
pub use convert::{BoundedOptionExt, ScalarStrExt};
pub use error::ConvertError;
pub use options::ParseOptions;
pub use scalar::Scalar;
pub use valconv_derive::BoundedValue;
