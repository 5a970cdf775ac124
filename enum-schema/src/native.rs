//! Trait for Rust enums that describe themselves as native enums.

use crate::{ComponentsObject, EnumLike, EnumMember, SchemaFragment, build_member_schema};

/// Trait for types whose values form a fixed set of named strings or numbers.
///
/// ```
/// use enum_schema::{ComponentsObject, EnumMember, NativeEnum, OpenApiVersion};
///
/// enum Priority {
///     Low = 1,
///     High = 2,
/// }
///
/// impl NativeEnum for Priority {
///     fn members() -> Vec<EnumMember> {
///         vec![
///             EnumMember::new("Low", Self::Low as i64),
///             EnumMember::new("High", Self::High as i64),
///         ]
///     }
/// }
///
/// let schema = Priority::native_enum_schema(&ComponentsObject::new(OpenApiVersion::V3_0_0));
/// assert_eq!(serde_json::to_string(&schema).unwrap(), r#"{"type":"number","enum":[1,2]}"#);
/// ```
pub trait NativeEnum {
    /// The members, in declaration order.
    fn members() -> Vec<EnumMember>;

    /// Name used when the schema is registered as a component.
    ///
    /// Defaults to the last path segment of the Rust type name.
    fn schema_name() -> &'static str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }

    /// Reflection-style mapping of the members, reverse entries included.
    fn enum_like() -> EnumLike {
        EnumLike::from_members(Self::members())
    }

    /// Schema fragment for the members.
    fn native_enum_schema(components: &ComponentsObject) -> SchemaFragment {
        build_member_schema(&Self::members(), components)
    }
}
