//! Conversion of enum fragments into utoipa OpenAPI schema objects.
//!
//! Use this when the surrounding document is assembled with utoipa's
//! builders; otherwise the fragments serialize directly with serde.

use serde_json::Value;
use utoipa::openapi::{
    RefOr, Type,
    schema::{Object, ObjectBuilder, OneOfBuilder, Schema, SchemaType},
};

use crate::{EnumSchema, EnumValue, MultiTypeEnumSchema, PrimitiveType, SchemaFragment};

impl PrimitiveType {
    /// The matching utoipa schema type.
    #[must_use]
    pub const fn openapi_type(self) -> Type {
        match self {
            Self::String => Type::String,
            Self::Number => Type::Number,
        }
    }
}

fn enum_values(values: &[EnumValue]) -> Vec<Value> {
    values.iter().cloned().map(Value::from).collect()
}

fn typed_object(schema: &EnumSchema) -> Object {
    ObjectBuilder::new()
        .schema_type(SchemaType::Type(schema.schema_type.openapi_type()))
        .enum_values(Some(enum_values(&schema.enum_values)))
        .build()
}

fn multi_type_object(schema: &MultiTypeEnumSchema) -> Object {
    ObjectBuilder::new()
        .schema_type(SchemaType::Array(
            schema
                .schema_type
                .iter()
                .map(|t| t.openapi_type())
                .collect(),
        ))
        .enum_values(Some(enum_values(&schema.enum_values)))
        .build()
}

impl SchemaFragment {
    /// Convert into a utoipa schema, ready to register as a component or
    /// inline as a property.
    #[must_use]
    pub fn to_openapi(&self) -> RefOr<Schema> {
        match self {
            Self::Typed(schema) => RefOr::T(Schema::Object(typed_object(schema))),
            Self::MultiType(schema) => RefOr::T(Schema::Object(multi_type_object(schema))),
            Self::OneOf(schema) => {
                let builder = schema.one_of.iter().fold(OneOfBuilder::new(), |builder, alt| {
                    builder.item(RefOr::T(Schema::Object(typed_object(alt))))
                });
                RefOr::T(Schema::OneOf(builder.build()))
            },
        }
    }
}

impl From<SchemaFragment> for RefOr<Schema> {
    fn from(fragment: SchemaFragment) -> Self {
        fragment.to_openapi()
    }
}

/// Serialize a utoipa schema to a JSON string.
pub fn schema_to_json(schema: &RefOr<Schema>) -> String {
    serde_json::to_string(schema).unwrap_or_else(|_| r#"{"type":"object"}"#.to_string())
}
