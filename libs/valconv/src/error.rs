/// Why a text or code could not be turned into a value.
///
/// All variants are data faults: the fallback operations in
/// [`crate::convert`] absorb them into absence or the caller's default.
/// They only reach the caller through the strict [`crate::convert::parse`]
/// and through serde deserialization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("empty input for {type_name}")]
    Empty { type_name: &'static str },

    #[error("'{text}' is not a declared {type_name}")]
    UnknownName { type_name: &'static str, text: String },

    #[error("code {code} is not a declared {type_name}")]
    UnknownCode { type_name: &'static str, code: i64 },

    #[error("cannot parse '{text}' as {type_name}: {reason}")]
    Malformed {
        type_name: &'static str,
        text: String,
        reason: String,
    },
}

impl ConvertError {
    pub fn type_name(&self) -> &'static str {
        match self {
            ConvertError::Empty { type_name }
            | ConvertError::UnknownName { type_name, .. }
            | ConvertError::UnknownCode { type_name, .. }
            | ConvertError::Malformed { type_name, .. } => type_name,
        }
    }

    /// `true` when the input was absent rather than wrong.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, ConvertError::Empty { .. })
    }
}
