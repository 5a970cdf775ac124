//! Schema fragments for native enums and the rules that pick their shape.
//!
//! | Members              | Target version | Fragment                                         |
//! |----------------------|----------------|--------------------------------------------------|
//! | strings and numbers  | >= 3.1.0       | `{"type":["string","number"],"enum":[..]}`       |
//! | strings and numbers  | < 3.1.0        | `{"oneOf":[{"type":"string",..},{"type":"number",..}]}` |
//! | strings only         | any            | `{"type":"string","enum":[..]}`                  |
//! | numbers only / empty | any            | `{"type":"number","enum":[..]}`                  |

use serde::Serialize;

use crate::{
    ComponentsObject, DeclarationOrder, EnumLike, EnumMember, EnumValue, OpenApiVersion,
    StringsAndNumbers, VersionComparator, partition,
};

// ============================================================================
// TYPES
// ============================================================================

/// The primitive JSON Schema types an enum can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[non_exhaustive]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    /// `"string"`
    String,
    /// `"number"`
    Number,
}

impl PrimitiveType {
    /// The JSON Schema type name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
        }
    }
}

/// A single-type enum: `{"type": "...", "enum": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct EnumSchema {
    /// Type of every value in `enum_values`.
    #[serde(rename = "type")]
    pub schema_type: PrimitiveType,
    /// Allowed values, possibly empty.
    #[serde(rename = "enum")]
    pub enum_values: Vec<EnumValue>,
}

impl EnumSchema {
    /// String enum.
    #[must_use]
    pub fn strings(values: Vec<String>) -> Self {
        Self {
            schema_type: PrimitiveType::String,
            enum_values: values.into_iter().map(EnumValue::String).collect(),
        }
    }

    /// Number enum.
    #[must_use]
    pub fn numbers(values: Vec<serde_json::Number>) -> Self {
        Self {
            schema_type: PrimitiveType::Number,
            enum_values: values.into_iter().map(EnumValue::Number).collect(),
        }
    }
}

/// A mixed enum using a JSON Schema type array (OpenAPI 3.1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct MultiTypeEnumSchema {
    /// Always `["string", "number"]`.
    #[serde(rename = "type")]
    pub schema_type: [PrimitiveType; 2],
    /// String values first, then numbers.
    #[serde(rename = "enum")]
    pub enum_values: Vec<EnumValue>,
}

/// A mixed enum as a union of a string enum and a number enum (OpenAPI 3.0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct OneOfEnumSchema {
    /// The string alternative, then the number alternative.
    #[serde(rename = "oneOf")]
    pub one_of: [EnumSchema; 2],
}

/// Schema fragment describing the allowed values of an enum.
///
/// Serializes (untagged) to exactly one of the shapes in the module table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
#[serde(untagged)]
pub enum SchemaFragment {
    /// Every value has the same type.
    Typed(EnumSchema),
    /// Strings and numbers under one `type` array.
    MultiType(MultiTypeEnumSchema),
    /// Strings and numbers as two `oneOf` alternatives.
    OneOf(OneOfEnumSchema),
}

impl SchemaFragment {
    /// All allowed values, strings before numbers for mixed enums.
    #[must_use]
    pub fn enum_values(&self) -> Vec<&EnumValue> {
        match self {
            Self::Typed(schema) => schema.enum_values.iter().collect(),
            Self::MultiType(schema) => schema.enum_values.iter().collect(),
            Self::OneOf(schema) => schema
                .one_of
                .iter()
                .flat_map(|alt| alt.enum_values.iter())
                .collect(),
        }
    }
}

// ============================================================================
// SELECTION
// ============================================================================

/// Pick the fragment shape for already partitioned values.
pub fn select_schema<C>(
    parts: StringsAndNumbers,
    version: OpenApiVersion,
    comparator: &C,
) -> SchemaFragment
where
    C: VersionComparator + ?Sized,
{
    if parts.is_mixed() {
        let StringsAndNumbers { strings, numbers } = parts;
        if comparator.satisfies(version, OpenApiVersion::MULTI_TYPE) {
            tracing::debug!(
                strings = strings.len(),
                numbers = numbers.len(),
                %version,
                "mixed enum as type array"
            );
            let enum_values = strings
                .into_iter()
                .map(EnumValue::String)
                .chain(numbers.into_iter().map(EnumValue::Number))
                .collect();
            return SchemaFragment::MultiType(MultiTypeEnumSchema {
                schema_type: [PrimitiveType::String, PrimitiveType::Number],
                enum_values,
            });
        }
        tracing::debug!(
            strings = strings.len(),
            numbers = numbers.len(),
            %version,
            "mixed enum as oneOf"
        );
        return SchemaFragment::OneOf(OneOfEnumSchema {
            one_of: [EnumSchema::strings(strings), EnumSchema::numbers(numbers)],
        });
    }

    if parts.strings.is_empty() {
        SchemaFragment::Typed(EnumSchema::numbers(parts.numbers))
    } else {
        SchemaFragment::Typed(EnumSchema::strings(parts.strings))
    }
}

/// Build the schema for a reflection-style enum mapping.
///
/// ```
/// # use enum_schema::{build_schema, ComponentsObject, EnumLike, OpenApiVersion};
/// let status: EnumLike = r#"{"Active": "active", "Retired": 0, "0": "Retired"}"#.parse().unwrap();
///
/// let v31 = build_schema(&status, &ComponentsObject::new(OpenApiVersion::V3_1_0));
/// assert_eq!(
///     serde_json::to_string(&v31).unwrap(),
///     r#"{"type":["string","number"],"enum":["active",0]}"#,
/// );
///
/// let v30 = build_schema(&status, &ComponentsObject::new(OpenApiVersion::V3_0_3));
/// assert_eq!(
///     serde_json::to_string(&v30).unwrap(),
///     r#"{"oneOf":[{"type":"string","enum":["active"]},{"type":"number","enum":[0]}]}"#,
/// );
/// ```
pub fn build_schema(enum_like: &EnumLike, components: &ComponentsObject) -> SchemaFragment {
    build_schema_with(enum_like, components, &DeclarationOrder)
}

/// [`build_schema`] with a caller-supplied version comparator.
pub fn build_schema_with<C>(
    enum_like: &EnumLike,
    components: &ComponentsObject,
    comparator: &C,
) -> SchemaFragment
where
    C: VersionComparator + ?Sized,
{
    let parts = partition(enum_like.extract_values());
    select_schema(parts, components.openapi, comparator)
}

/// Build the schema for a clean member list.
///
/// No reverse-entry filtering happens here: every member counts.
pub fn build_member_schema(
    members: &[EnumMember],
    components: &ComponentsObject,
) -> SchemaFragment {
    let parts = partition(members.iter().map(|m| m.value.clone()));
    select_schema(parts, components.openapi, &DeclarationOrder)
}
