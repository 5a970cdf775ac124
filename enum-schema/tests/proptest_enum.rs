#![allow(clippy::unwrap_used)]
//! Property-based tests for extraction, partitioning, and shape selection.
//!
//! Generated enums use upper-case member names, lower-case string values
//! and integer values, so no string value can collide with a member name or
//! a reverse-lookup key.

use enum_schema::{
    ComponentsObject, EnumLike, EnumMember, EnumValue, OpenApiVersion, SchemaFragment,
    build_schema, partition,
};
use proptest::prelude::*;
use serde_json::Number;

fn member_value() -> impl Strategy<Value = EnumValue> {
    prop_oneof![
        "[a-z]{1,8}".prop_map(EnumValue::from),
        any::<i32>().prop_map(EnumValue::from),
    ]
}

fn members() -> impl Strategy<Value = Vec<EnumMember>> {
    prop::collection::btree_map("[A-Z][A-Z0-9_]{0,8}", member_value(), 0..12).prop_map(|map| {
        map.into_iter()
            .map(|(name, value)| EnumMember::new(name, value))
            .collect()
    })
}

fn version() -> impl Strategy<Value = OpenApiVersion> {
    prop_oneof![
        Just(OpenApiVersion::V3_0_0),
        Just(OpenApiVersion::V3_0_3),
        Just(OpenApiVersion::V3_1_0),
    ]
}

fn values_of(members: &[EnumMember]) -> Vec<EnumValue> {
    members.iter().map(|m| m.value.clone()).collect()
}

proptest! {
    /// Reverse entries never survive extraction.
    #[test]
    fn extraction_recovers_members(members in members()) {
        let enum_like = EnumLike::from_members(members.clone());
        prop_assert_eq!(enum_like.extract_values(), values_of(&members));
        prop_assert_eq!(enum_like.members(), members);
    }

    /// Rebuilding a mapping from extracted members and extracting again is stable.
    #[test]
    fn extraction_is_idempotent(members in members()) {
        let first = EnumLike::from_members(members);
        let second = EnumLike::from_members(first.members());
        prop_assert_eq!(
            partition(second.extract_values()),
            partition(first.extract_values())
        );
    }

    /// Each partition keeps the relative order of the source.
    #[test]
    fn partition_is_stable(values in prop::collection::vec(member_value(), 0..20)) {
        let parts = partition(values.clone());
        let strings: Vec<String> = values
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect();
        let numbers: Vec<Number> = values
            .iter()
            .filter_map(|v| match v {
                EnumValue::Number(n) => Some(n.clone()),
                EnumValue::String(_) => None,
            })
            .collect();
        prop_assert_eq!(parts.strings, strings);
        prop_assert_eq!(parts.numbers, numbers);
    }

    /// The fragment shape follows the member types and the target version.
    #[test]
    fn shape_follows_members_and_version(members in members(), version in version()) {
        let schema = build_schema(
            &EnumLike::from_members(members.clone()),
            &ComponentsObject::new(version),
        );
        let has_strings = members.iter().any(|m| !m.value.is_number());
        let has_numbers = members.iter().any(|m| m.value.is_number());

        match schema {
            SchemaFragment::MultiType(_) => {
                prop_assert!(has_strings && has_numbers);
                prop_assert_eq!(version, OpenApiVersion::V3_1_0);
            },
            SchemaFragment::OneOf(_) => {
                prop_assert!(has_strings && has_numbers);
                prop_assert!(version < OpenApiVersion::V3_1_0);
            },
            SchemaFragment::Typed(_) => {
                prop_assert!(!(has_strings && has_numbers));
            },
            other => {
                prop_assert!(false, "unexpected fragment shape: {:?}", other);
            },
        }
    }

    /// Every member value appears exactly once, strings before numbers.
    #[test]
    fn fragment_lists_all_values(members in members(), version in version()) {
        let schema = build_schema(
            &EnumLike::from_members(members.clone()),
            &ComponentsObject::new(version),
        );
        let parts = partition(values_of(&members));
        let expected: Vec<EnumValue> = parts
            .strings
            .into_iter()
            .map(EnumValue::String)
            .chain(parts.numbers.into_iter().map(EnumValue::Number))
            .collect();
        let actual: Vec<EnumValue> = schema.enum_values().into_iter().cloned().collect();
        prop_assert_eq!(actual, expected);
    }
}
