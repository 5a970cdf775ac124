//! Split enum values into strings and numbers.

use serde::Serialize;
use serde_json::Number;

use crate::EnumValue;

/// Enum values split by type, each side in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct StringsAndNumbers {
    /// String values.
    pub strings: Vec<String>,
    /// Numeric values.
    pub numbers: Vec<Number>,
}

impl StringsAndNumbers {
    /// Returns `true` if both sides are non-empty.
    #[inline]
    #[must_use]
    pub const fn is_mixed(&self) -> bool {
        !self.strings.is_empty() && !self.numbers.is_empty()
    }
}

impl FromIterator<EnumValue> for StringsAndNumbers {
    fn from_iter<T: IntoIterator<Item = EnumValue>>(iter: T) -> Self {
        let mut parts = Self::default();
        for value in iter {
            match value {
                EnumValue::String(s) => parts.strings.push(s),
                EnumValue::Number(n) => parts.numbers.push(n),
            }
        }
        parts
    }
}

/// Stable split of `values` into strings and numbers.
pub fn partition<I>(values: I) -> StringsAndNumbers
where
    I: IntoIterator<Item = EnumValue>,
{
    values.into_iter().collect()
}
