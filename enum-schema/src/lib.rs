// =============================================================================
// CRATE-LEVEL QUALITY LINTS
// =============================================================================
#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]
#![warn(unreachable_pub)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
// =============================================================================
// CLIPPY CONFIGURATION
// =============================================================================
#![allow(clippy::doc_markdown)] // OpenAPI and JSON Schema names in docs
#![allow(clippy::missing_errors_doc)] // # Errors sections - doc-heavy
#![allow(clippy::float_cmp)] // Exact zero / integral checks on enum numbers

//! enum-schema - OpenAPI schema fragments for native enums
//!
//! # Overview
//!
//! A native enum is a set of named members whose values are strings or
//! numbers. This crate turns one into the `enum` schema an OpenAPI document
//! needs, choosing the shape the target OpenAPI version supports:
//!
//! - strings only: `{"type":"string","enum":[...]}`
//! - numbers only (or no members): `{"type":"number","enum":[...]}`
//! - both, OpenAPI 3.1: `{"type":["string","number"],"enum":[...]}`
//! - both, OpenAPI 3.0: `{"oneOf":[{"type":"string",...},{"type":"number",...}]}`
//!
//! # Inputs
//!
//! Enums arrive either as a reflection-style [`EnumLike`] mapping (numeric
//! members carry `value -> name` reverse entries, which are filtered out) or
//! as a clean list of [`EnumMember`]s. Rust types can implement
//! [`NativeEnum`] to describe their members once.
//!
//! # Example
//!
//! ```
//! use enum_schema::{build_schema, ComponentsObject, EnumLike, OpenApiVersion};
//!
//! let role: EnumLike = r#"{"Admin": "admin", "Guest": 2, "2": "Guest"}"#.parse().unwrap();
//! let components = ComponentsObject::new(OpenApiVersion::V3_1_0);
//!
//! let schema = build_schema(&role, &components);
//! assert_eq!(
//!     serde_json::to_string(&schema).unwrap(),
//!     r#"{"type":["string","number"],"enum":["admin",2]}"#,
//! );
//! ```
//!
//! # Modules
//!
//! - [`enum_like`]: reflection mappings and member extraction
//! - [`partition`]: splitting values into strings and numbers
//! - [`schema`]: fragment types and shape selection
//! - [`version`]: OpenAPI versions and version comparison
//! - [`openapi`]: conversion into utoipa schema objects

mod components;
pub mod enum_like;
mod error;
mod native;
pub mod openapi;
pub mod partition;
pub mod schema;
mod value;
pub mod version;

pub use components::ComponentsObject;
pub use enum_like::{EnumLike, extract_values};
pub use error::SchemaError;
pub use native::NativeEnum;
pub use openapi::schema_to_json;
pub use partition::{StringsAndNumbers, partition};
pub use schema::{
    EnumSchema, MultiTypeEnumSchema, OneOfEnumSchema, PrimitiveType, SchemaFragment,
    build_member_schema, build_schema, build_schema_with, select_schema,
};
pub use value::{EnumMember, EnumValue, number_key};
pub use version::{DeclarationOrder, OpenApiVersion, VersionComparator, satisfies_version};
