//! Document-level settings consumed by schema builders.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{OpenApiVersion, SchemaError};

/// Settings of the OpenAPI document a fragment will be embedded in.
///
/// Only the target version matters to enum schemas today.
///
/// ```
/// # use enum_schema::{ComponentsObject, OpenApiVersion};
/// let components: ComponentsObject = serde_json::from_str(r#"{"openapi":"3.0.3"}"#).unwrap();
/// assert_eq!(components.openapi, OpenApiVersion::V3_0_3);
/// assert_eq!(ComponentsObject::default().openapi, OpenApiVersion::LATEST);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "camelCase")]
pub struct ComponentsObject {
    /// Target OpenAPI version.
    #[serde(default)]
    pub openapi: OpenApiVersion,
}

impl ComponentsObject {
    /// Settings targeting `openapi`.
    #[must_use]
    pub const fn new(openapi: OpenApiVersion) -> Self {
        Self { openapi }
    }

    /// Read the settings from a full OpenAPI document.
    ///
    /// The document's top-level `openapi` field must be present and name a
    /// known version.
    pub fn from_document(document: &Value) -> Result<Self, SchemaError> {
        let raw = document
            .get("openapi")
            .and_then(Value::as_str)
            .ok_or(SchemaError::MissingVersion)?;
        Ok(Self::new(raw.parse()?))
    }
}

impl From<OpenApiVersion> for ComponentsObject {
    fn from(openapi: OpenApiVersion) -> Self {
        Self::new(openapi)
    }
}
