//! OpenAPI versions and the version comparison capability.
//!
//! The selector only ever asks one question: does the target version reach
//! `3.1.0`, where `type` may be an array? That question is answered by a
//! [`VersionComparator`], so callers can swap in their own notion of
//! version ordering. The default, [`DeclarationOrder`], orders versions the
//! way [`OpenApiVersion`] declares them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::SchemaError;

/// Version strings accepted by [`OpenApiVersion::from_str`], oldest first.
pub const KNOWN_VERSIONS: [&str; 5] = ["3.0.0", "3.0.1", "3.0.2", "3.0.3", "3.1.0"];

/// A known OpenAPI specification version.
///
/// Variants are declared oldest first and `Ord` follows that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[non_exhaustive]
pub enum OpenApiVersion {
    /// OpenAPI 3.0.0
    V3_0_0,
    /// OpenAPI 3.0.1
    V3_0_1,
    /// OpenAPI 3.0.2
    V3_0_2,
    /// OpenAPI 3.0.3
    V3_0_3,
    /// OpenAPI 3.1.0, the first version with JSON Schema type arrays.
    #[default]
    V3_1_0,
}

impl OpenApiVersion {
    /// Latest version this crate knows about.
    pub const LATEST: Self = Self::V3_1_0;

    /// Threshold at which mixed enums use a `type` array instead of `oneOf`.
    pub const MULTI_TYPE: Self = Self::V3_1_0;

    /// The version string, e.g. `"3.0.3"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V3_0_0 => "3.0.0",
            Self::V3_0_1 => "3.0.1",
            Self::V3_0_2 => "3.0.2",
            Self::V3_0_3 => "3.0.3",
            Self::V3_1_0 => "3.1.0",
        }
    }
}

impl fmt::Display for OpenApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OpenApiVersion {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "3.0.0" => Ok(Self::V3_0_0),
            "3.0.1" => Ok(Self::V3_0_1),
            "3.0.2" => Ok(Self::V3_0_2),
            "3.0.3" => Ok(Self::V3_0_3),
            "3.1.0" => Ok(Self::V3_1_0),
            _ => Err(SchemaError::unsupported_version(s)),
        }
    }
}

impl Serialize for OpenApiVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OpenApiVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<Self>().map_err(serde::de::Error::custom)
    }
}

/// Answers whether an actual version satisfies a minimum version.
///
/// Implemented for any `Fn(OpenApiVersion, OpenApiVersion) -> bool`, so a
/// closure can stand in for the real comparator:
///
/// ```
/// # use enum_schema::{OpenApiVersion, VersionComparator};
/// let never = |_: OpenApiVersion, _: OpenApiVersion| false;
/// assert!(!never.satisfies(OpenApiVersion::V3_1_0, OpenApiVersion::V3_1_0));
/// ```
pub trait VersionComparator {
    /// Returns `true` when `actual` is at least `threshold`.
    fn satisfies(&self, actual: OpenApiVersion, threshold: OpenApiVersion) -> bool;
}

impl<F> VersionComparator for F
where
    F: Fn(OpenApiVersion, OpenApiVersion) -> bool,
{
    fn satisfies(&self, actual: OpenApiVersion, threshold: OpenApiVersion) -> bool {
        self(actual, threshold)
    }
}

/// Default comparator: position in [`KNOWN_VERSIONS`].
#[derive(Debug, Clone, Copy, Default)]
#[allow(clippy::exhaustive_structs)] // Stateless unit comparator, built by name
pub struct DeclarationOrder;

impl VersionComparator for DeclarationOrder {
    fn satisfies(&self, actual: OpenApiVersion, threshold: OpenApiVersion) -> bool {
        satisfies_version(actual, threshold)
    }
}

/// Returns `true` when `actual` is the same as or newer than `threshold`.
#[inline]
#[must_use]
pub fn satisfies_version(actual: OpenApiVersion, threshold: OpenApiVersion) -> bool {
    actual >= threshold
}
