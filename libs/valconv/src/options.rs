use serde::Deserialize;

/// How text is matched when parsing a scalar.
///
/// The default is the exact form: canonical names (or aliases) only,
/// case-sensitive, no trimming, numeric codes rejected. Callers may embed
/// this in their own config and deserialize it:
///
/// ```ignore
/// { "trim": true, "ignore_case": true }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParseOptions {
    /// Strip surrounding whitespace before matching.
    pub trim: bool,
    /// Match names and boolean literals ASCII case-insensitively.
    pub ignore_case: bool,
    /// Accept a decimal code for bounded types, but only when it belongs
    /// to a declared member.
    pub accept_codes: bool,
}

impl ParseOptions {
    /// Exact matching. Same as `default()`.
    pub const fn strict() -> Self {
        Self {
            trim: false,
            ignore_case: false,
            accept_codes: false,
        }
    }

    /// Trimmed, case-insensitive matching. Codes still rejected.
    pub const fn lenient() -> Self {
        Self {
            trim: true,
            ignore_case: true,
            accept_codes: false,
        }
    }

    pub const fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    pub const fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    pub const fn with_accept_codes(mut self, accept_codes: bool) -> Self {
        self.accept_codes = accept_codes;
        self
    }

    /// Apply trimming. The result is what every parser matches against.
    pub(crate) fn prepare<'a>(&self, text: &'a str) -> &'a str {
        if self.trim { text.trim() } else { text }
    }
}
