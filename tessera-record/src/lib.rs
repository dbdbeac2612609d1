//! Schema-driven record construction and conversion.
//!
//! Provides the building blocks for treating plain JSON mappings as
//! structured records:
//!
//! - **Schema descriptors**: each record type registers a static [`Schema`]
//!   describing its fields (see [`Record`])
//! - **Strict building**: [`from_map`] promotes nested mappings to nested
//!   records and rejects unknown keys at any depth
//! - **Lenient conversion**: [`DictConvert`] filters unknown keys on input
//!   and omits null fields on output
//!
//! Schemas are normally generated by the `record!` macro from the companion
//! macros crate; the trait can also be implemented by hand, as the tests in
//! this crate do.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use tessera_record::{DictConvert, FieldDef, FieldKind, Record, Schema};
//!
//! #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
//! struct User {
//!     name: String,
//!     #[serde(default)]
//!     email: Option<String>,
//! }
//!
//! impl Record for User {
//!     fn schema() -> &'static Schema {
//!         static SCHEMA: Schema = Schema {
//!             name: "User",
//!             fields: &[
//!                 FieldDef { name: "name", required: true, kind: FieldKind::Value },
//!                 FieldDef { name: "email", required: false, kind: FieldKind::Value },
//!             ],
//!         };
//!         &SCHEMA
//!     }
//! }
//!
//! let data = match json!({ "name": "ada", "shoe_size": 36 }) {
//!     serde_json::Value::Object(map) => map,
//!     _ => unreachable!(),
//! };
//!
//! // Unknown keys are dropped, null fields are omitted on the way out.
//! let user = User::from_dict(&data).unwrap();
//! assert_eq!(user.name, "ada");
//! assert!(!user.to_dict().unwrap().contains_key("email"));
//! ```

mod build;
mod convert;
mod error;
mod schema;

pub use build::from_map;
pub use convert::DictConvert;
pub use error::{RecordError, Result};
pub use schema::{FieldDef, FieldKind, Record, Schema, SchemaFn};
