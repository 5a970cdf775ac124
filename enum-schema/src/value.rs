//! Enum member values: strings and numbers.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// The value of one enum member.
///
/// Serializes untagged, so `EnumValue::String("a")` is `"a"` and
/// `EnumValue::Number(2)` is `2` in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::exhaustive_enums)] // JSON enum members are strings or numbers, nothing else
#[serde(untagged)]
pub enum EnumValue {
    /// A string member value.
    String(String),
    /// A numeric member value.
    Number(Number),
}

impl EnumValue {
    /// Build a numeric value from a float. Returns `None` for NaN and infinities.
    #[must_use]
    pub fn float(value: f64) -> Option<Self> {
        Number::from_f64(value).map(Self::Number)
    }

    /// Returns `true` for numeric values.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Returns the string value, if this is one.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    /// The mapping key this value is stored under when used as a lookup key.
    ///
    /// Strings are their own key. Numbers use their canonical key form, see
    /// [`number_key`].
    #[must_use]
    pub fn as_key(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            Self::Number(n) => number_key(n),
        }
    }
}

impl From<&str> for EnumValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for EnumValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for EnumValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<i32> for EnumValue {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<u64> for EnumValue {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<Number> for EnumValue {
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

impl From<EnumValue> for Value {
    fn from(value: EnumValue) -> Self {
        match value {
            EnumValue::String(s) => Self::String(s),
            EnumValue::Number(n) => Self::Number(n),
        }
    }
}

/// Render a number the way it appears as a reverse-lookup key.
///
/// Integral values (including floats like `2.0`) render without a fraction,
/// negative zero renders as `"0"`, everything else uses the shortest
/// round-trip form.
#[must_use]
pub fn number_key(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(0.0) => "0".to_string(),
        #[allow(clippy::cast_possible_truncation)]
        Some(f) if f.fract() == 0.0 && f.abs() < 9.007_199_254_740_992e15 => {
            (f as i64).to_string()
        },
        _ => n.to_string(),
    }
}

/// One named enum member.
///
/// This is the clean input model: a name paired with a tagged value, with no
/// reverse-lookup entries to filter out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct EnumMember {
    /// Symbolic member name.
    pub name: String,
    /// Member value.
    pub value: EnumValue,
}

impl EnumMember {
    /// Create a member.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<EnumValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
