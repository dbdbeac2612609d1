//! Declarative macros for defining record types and constant string enums.
//!
//! # Record definition
//!
//! [`record!`] generates a struct together with its schema registration, so
//! the type works with the strict builder and dict conversion out of the box:
//!
//! ```
//! use tessera_macros::record;
//!
//! record! {
//!     pub struct Address {
//!         street: String,
//!         city: String,
//!         zip: Option<String>,
//!     }
//! }
//!
//! record! {
//!     pub struct Customer {
//!         name: String,
//!         address: nested Address,
//!     }
//! }
//! ```
//!
//! Field grammar:
//!
//! - `name: Ty` — required field
//! - `name: Option<Ty>` — optional field (omitted mappings leave it `None`)
//! - `name: nested Ty` — required field whose type is itself a record
//! - `name: nested Option<Ty>` — optional record field
//! - `name: nested Vec<Ty>` — list of records
//!
//! Generated structs derive `Debug`, `Clone`, `PartialEq`, and the serde
//! traits; further derives pass through as outer attributes
//! (`#[derive(Eq, PartialOrd, Ord, Hash)]` for ordered, hashable records).
//! Callers must depend on `serde` with the `derive` feature.
//!
//! # Constant string enums
//!
//! [`const_enum!`] defines a closed set of named string constants where each
//! member's string value is its own name:
//!
//! ```
//! use tessera_macros::const_enum;
//!
//! const_enum! {
//!     pub enum Booze { Whiskey, Beer, Vodka }
//! }
//!
//! assert_eq!(Booze::Beer.to_string(), "Beer");
//! assert_eq!(format!("{:?}", Booze::Beer), "Beer");
//! assert_eq!(Booze::from_name("Vodka"), Some(Booze::Vodka));
//! ```

use thiserror::Error;

#[doc(hidden)]
pub use tessera_record::{FieldDef, FieldKind, Record, Schema};

/// Error returned when parsing a constant enum member from a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {enum_name} member `{value}`")]
pub struct ParseConstEnumError {
    /// Name of the enum type.
    pub enum_name: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Define a record struct and register its schema.
///
/// See the crate docs for the field grammar. The macro expands to the struct
/// definition plus an implementation of the `Record` trait carrying a static
/// schema, which the builders in `tessera-record` consult.
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($body:tt)*
        }
    ) => {
        $crate::__record_field! {
            meta = [$(#[$meta])*],
            vis = [$vis],
            name = $name,
            fields = [],
            defs = [],
            rest = [$($body)*],
        }
    };
}

/// Field muncher for [`record!`]. Not part of the public API.
#[doc(hidden)]
#[macro_export]
macro_rules! __record_field {
    // All fields consumed: emit the struct and its Record impl.
    (
        meta = [$($meta:tt)*],
        vis = [$($vis:tt)*],
        name = $name:ident,
        fields = [$({ $($field:tt)* })*],
        defs = [$({ $($def:tt)* })*],
        rest = [],
    ) => {
        $($meta)*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        $($vis)* struct $name {
            $( $($field)* ),*
        }

        impl $crate::Record for $name {
            fn schema() -> &'static $crate::Schema {
                static SCHEMA: $crate::Schema = $crate::Schema {
                    name: stringify!($name),
                    fields: &[ $( $($def)* ),* ],
                };
                &SCHEMA
            }
        }
    };

    // name: nested Vec<Ty>
    (
        meta = $meta:tt,
        vis = $vis:tt,
        name = $name:ident,
        fields = [$($fields:tt)*],
        defs = [$($defs:tt)*],
        rest = [$(#[$fmeta:meta])* $field:ident : nested Vec<$t:ty> $(, $($tail:tt)*)?],
    ) => {
        $crate::__record_field! {
            meta = $meta,
            vis = $vis,
            name = $name,
            fields = [$($fields)* { $(#[$fmeta])* pub $field: Vec<$t> }],
            defs = [$($defs)* { $crate::FieldDef {
                name: stringify!($field),
                required: true,
                kind: $crate::FieldKind::RecordList(<$t as $crate::Record>::schema),
            } }],
            rest = [$($($tail)*)?],
        }
    };

    // name: nested Option<Ty>
    (
        meta = $meta:tt,
        vis = $vis:tt,
        name = $name:ident,
        fields = [$($fields:tt)*],
        defs = [$($defs:tt)*],
        rest = [$(#[$fmeta:meta])* $field:ident : nested Option<$t:ty> $(, $($tail:tt)*)?],
    ) => {
        $crate::__record_field! {
            meta = $meta,
            vis = $vis,
            name = $name,
            fields = [$($fields)* { $(#[$fmeta])* #[serde(default)] pub $field: Option<$t> }],
            defs = [$($defs)* { $crate::FieldDef {
                name: stringify!($field),
                required: false,
                kind: $crate::FieldKind::Record(<$t as $crate::Record>::schema),
            } }],
            rest = [$($($tail)*)?],
        }
    };

    // name: nested Ty
    (
        meta = $meta:tt,
        vis = $vis:tt,
        name = $name:ident,
        fields = [$($fields:tt)*],
        defs = [$($defs:tt)*],
        rest = [$(#[$fmeta:meta])* $field:ident : nested $t:ty $(, $($tail:tt)*)?],
    ) => {
        $crate::__record_field! {
            meta = $meta,
            vis = $vis,
            name = $name,
            fields = [$($fields)* { $(#[$fmeta])* pub $field: $t }],
            defs = [$($defs)* { $crate::FieldDef {
                name: stringify!($field),
                required: true,
                kind: $crate::FieldKind::Record(<$t as $crate::Record>::schema),
            } }],
            rest = [$($($tail)*)?],
        }
    };

    // name: Option<Ty>
    (
        meta = $meta:tt,
        vis = $vis:tt,
        name = $name:ident,
        fields = [$($fields:tt)*],
        defs = [$($defs:tt)*],
        rest = [$(#[$fmeta:meta])* $field:ident : Option<$t:ty> $(, $($tail:tt)*)?],
    ) => {
        $crate::__record_field! {
            meta = $meta,
            vis = $vis,
            name = $name,
            fields = [$($fields)* { $(#[$fmeta])* #[serde(default)] pub $field: Option<$t> }],
            defs = [$($defs)* { $crate::FieldDef {
                name: stringify!($field),
                required: false,
                kind: $crate::FieldKind::Value,
            } }],
            rest = [$($($tail)*)?],
        }
    };

    // name: Ty
    (
        meta = $meta:tt,
        vis = $vis:tt,
        name = $name:ident,
        fields = [$($fields:tt)*],
        defs = [$($defs:tt)*],
        rest = [$(#[$fmeta:meta])* $field:ident : $t:ty $(, $($tail:tt)*)?],
    ) => {
        $crate::__record_field! {
            meta = $meta,
            vis = $vis,
            name = $name,
            fields = [$($fields)* { $(#[$fmeta])* pub $field: $t }],
            defs = [$($defs)* { $crate::FieldDef {
                name: stringify!($field),
                required: true,
                kind: $crate::FieldKind::Value,
            } }],
            rest = [$($($tail)*)?],
        }
    };
}

/// Define an enum of string constants whose values equal their names.
///
/// For every member `M` of a generated enum `E`:
/// `E::M.to_string() == E::M.name() == format!("{:?}", E::M)`, and the serde
/// string form is the same name. Members can be looked up with
/// `E::from_name`, or parsed via `FromStr` (failing with
/// [`ParseConstEnumError`]).
#[macro_export]
macro_rules! const_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// All members, in declaration order.
            pub const VARIANTS: &'static [$name] = &[$($name::$variant),+];

            /// The member's name, which is also its string value.
            pub const fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }

            /// Look up a member by name.
            pub fn from_name(name: &str) -> ::core::option::Option<Self> {
                match name {
                    $(stringify!($variant) => ::core::option::Option::Some($name::$variant),)+
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.name())
            }
        }

        // The enum path is omitted: `{:?}` prints the bare member name.
        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl ::core::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.name()
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::ParseConstEnumError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                Self::from_name(s).ok_or_else(|| $crate::ParseConstEnumError {
                    enum_name: stringify!($name),
                    value: s.to_string(),
                })
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.name())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value = <::std::string::String as ::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                Self::from_name(&value).ok_or_else(|| {
                    <D::Error as ::serde::de::Error>::custom(::std::format!(
                        "unknown {} member `{}`",
                        stringify!($name),
                        value
                    ))
                })
            }
        }
    };
}
