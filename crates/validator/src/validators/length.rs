//! String length measurement
//!
//! By default, length is measured in UTF-16 code units, the unit browsers
//! use for `maxlength` and `String.length`. `Chars` counts Unicode scalar
//! values instead; `Bytes` is the fastest and only correct for ASCII input.

use serde::{Deserialize, Serialize};

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LengthMode {
    /// Count bytes (fastest, ASCII-only correct).
    Bytes,
    /// Count Unicode scalar values.
    Chars,
    /// Count UTF-16 code units (an astral character counts as two).
    #[default]
    Utf16,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    #[must_use]
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
            LengthMode::Utf16 => input.encode_utf16().count(),
        }
    }
}
