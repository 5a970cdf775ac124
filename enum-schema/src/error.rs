//! SchemaError enum and implementations.

/// Error type for the input boundaries of the crate.
///
/// Building a schema from an [`EnumLike`](crate::EnumLike) never fails. Errors
/// only come from turning loosely typed input (version strings, JSON objects,
/// OpenAPI documents) into the typed model.
///
/// # Example
///
/// ```
/// # use enum_schema::{OpenApiVersion, SchemaError};
/// let error = "2.0".parse::<OpenApiVersion>().unwrap_err();
/// match error {
///     SchemaError::UnsupportedVersion { version } => assert_eq!(version, "2.0"),
///     _ => println!("{}", error),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SchemaError {
    /// The version string is not one of the known OpenAPI versions.
    UnsupportedVersion {
        /// The version string that was provided
        version: String,
    },

    /// The OpenAPI document has no top-level `openapi` string field.
    MissingVersion,

    /// The enum description could not be read (e.g. a member value is
    /// neither a string nor a number).
    InvalidEnum {
        /// Description of what was wrong
        message: String,
    },
}

impl SchemaError {
    /// Create an error for an unknown OpenAPI version string.
    #[inline]
    #[must_use]
    pub fn unsupported_version(version: &str) -> Self {
        Self::UnsupportedVersion {
            version: version.to_string(),
        }
    }

    /// Create an error for an unreadable enum description.
    #[inline]
    #[must_use]
    pub fn invalid_enum(message: impl Into<String>) -> Self {
        Self::InvalidEnum {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedVersion { version } => {
                write!(
                    f,
                    "unsupported OpenAPI version `{version}` (expected one of: {})",
                    crate::version::KNOWN_VERSIONS.join(", ")
                )
            },
            Self::MissingVersion => {
                write!(f, "document has no `openapi` version field")
            },
            Self::InvalidEnum { message } => {
                write!(f, "invalid enum description: {message}")
            },
        }
    }
}

impl std::error::Error for SchemaError {}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_enum(err.to_string())
    }
}
