//! Schema descriptors for record types.
//!
//! A [`Schema`] is the static description of a record type: its name and an
//! ordered list of [`FieldDef`]s. Schemas are registered once per type through
//! the [`Record`] trait, normally by the `record!` macro, and drive both the
//! strict builder and dict conversion.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Accessor for a nested record's schema.
///
/// Stored as a function pointer so mutually referencing record types do not
/// need their statics initialized in any particular order.
pub type SchemaFn = fn() -> &'static Schema;

/// How a field participates in nested construction.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// A plain value; passed through to deserialization untouched.
    Value,
    /// A field whose type is itself a record; mappings are promoted.
    Record(SchemaFn),
    /// A sequence of records; element mappings are promoted.
    RecordList(SchemaFn),
}

impl FieldKind {
    /// The nested record schema, if this kind carries one.
    pub fn nested(&self) -> Option<&'static Schema> {
        match self {
            Self::Value => None,
            Self::Record(schema) | Self::RecordList(schema) => Some(schema()),
        }
    }
}

/// A single declared field of a record type.
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    /// Field name as it appears in mappings.
    pub name: &'static str,
    /// Whether construction fails when the field is absent.
    pub required: bool,
    /// Field kind, driving nested promotion.
    pub kind: FieldKind,
}

/// Static description of a record type.
#[derive(Debug)]
pub struct Schema {
    /// Record type name, used in error messages.
    pub name: &'static str,
    /// Declared fields, in declaration order.
    pub fields: &'static [FieldDef],
}

impl Schema {
    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Whether a field with this name is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Declared field names, in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }

    /// Fields that must be present for construction to succeed.
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldDef> + '_ {
        self.fields.iter().filter(|f| f.required)
    }
}

/// A structured record type with a registered schema.
///
/// Records serialize to and deserialize from JSON objects; the schema mirrors
/// the struct's fields and is what the builders consult before handing the
/// mapping to serde.
pub trait Record: Serialize + DeserializeOwned {
    /// The type's static schema.
    fn schema() -> &'static Schema;
}
