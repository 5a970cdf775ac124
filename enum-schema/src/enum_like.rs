//! Reflection-style enum mappings and member extraction.
//!
//! Many enum reflection formats store numeric members twice: once as
//! `name -> value` and once as a reverse entry `value -> name`, so that
//! `Direction.Up == 1` and `Direction[1] == "Up"` both hold. String members
//! get no reverse entry. [`EnumLike`] stores such a mapping as-is, and
//! [`EnumLike::extract_values`] recovers the genuine members from it.
//!
//! ```
//! # use enum_schema::{EnumLike, EnumValue};
//! let direction: EnumLike = serde_json::from_str(
//!     r#"{"Up": 1, "Down": 2, "1": "Up", "2": "Down"}"#,
//! ).unwrap();
//! assert_eq!(
//!     direction.extract_values(),
//!     vec![EnumValue::from(1), EnumValue::from(2)],
//! );
//! ```

use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{EnumMember, EnumValue, SchemaError};

/// An insertion-ordered mapping of keys to enum values, reverse entries included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnumLike {
    entries: IndexMap<String, EnumValue>,
}

impl EnumLike {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the reflection form of a list of members.
    ///
    /// Every member is inserted as `name -> value`; numeric members also get
    /// the reverse entry `value -> name`. A later entry with an existing key
    /// overwrites the value but keeps the original position.
    #[must_use]
    pub fn from_members<I>(members: I) -> Self
    where
        I: IntoIterator<Item = EnumMember>,
    {
        let mut enum_like = Self::new();
        for member in members {
            if let EnumValue::Number(_) = member.value {
                let reverse_key = member.value.as_key();
                enum_like.insert(member.name.clone(), member.value);
                enum_like.insert(reverse_key, EnumValue::String(member.name));
            } else {
                enum_like.insert(member.name, member.value);
            }
        }
        enum_like
    }

    /// Parse a mapping from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Insert a raw entry. Returns the previous value for the key, if any.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<EnumValue>,
    ) -> Option<EnumValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Look up a raw entry.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&EnumValue> {
        self.entries.get(key)
    }

    /// Number of raw entries, reverse entries included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the mapping has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over raw entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EnumValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns `true` if `key` is a reverse-lookup entry rather than a member.
    ///
    /// A key is a reverse entry when its value, used as a key, leads back to
    /// a number. Member keys point at strings (or nothing).
    #[must_use]
    pub fn is_reverse_entry(&self, key: &str) -> bool {
        self.entries
            .get(key)
            .and_then(|value| self.entries.get(&value.as_key()))
            .is_some_and(EnumValue::is_number)
    }

    /// The genuine members, in insertion order, with reverse entries dropped.
    #[must_use]
    pub fn members(&self) -> Vec<EnumMember> {
        self.entries
            .iter()
            .filter(|(key, _)| {
                let reverse = self.is_reverse_entry(key);
                if reverse {
                    tracing::trace!(key = %key, "skipping reverse-lookup entry");
                }
                !reverse
            })
            .map(|(key, value)| EnumMember::new(key.clone(), value.clone()))
            .collect()
    }

    /// The genuine member values, in insertion order.
    #[must_use]
    pub fn extract_values(&self) -> Vec<EnumValue> {
        self.members().into_iter().map(|m| m.value).collect()
    }
}

impl FromStr for EnumLike {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}

impl<K, V> FromIterator<(K, V)> for EnumLike
where
    K: Into<String>,
    V: Into<EnumValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Free-function form of [`EnumLike::extract_values`].
#[must_use]
pub fn extract_values(enum_like: &EnumLike) -> Vec<EnumValue> {
    enum_like.extract_values()
}
