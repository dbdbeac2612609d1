// Tessera - small building blocks for structured records and HTTP logging
//
// This library bundles a handful of independent utilities: schema-driven
// record construction from nested mappings, lenient dict conversion, a
// process-wide singleton registry, constant string enums, and an HTTP
// roundtrip logging hook with its formatter.

// Re-export record construction and conversion
pub use tessera_record::{
    DictConvert, FieldDef, FieldKind, Record, RecordError, Result, Schema, SchemaFn, from_map,
};

// Re-export the declarative macros and their support types
pub use tessera_macros::{ParseConstEnumError, const_enum, record};

// Member crates under their own names
pub use tessera_httplog as httplog;
pub use tessera_registry as registry;

// Prelude for common imports
pub mod prelude {
    pub use crate::httplog::{
        HTTP_LOG_CHANNEL,
        HttpFormatter,
        LineFormatter,
        MessageFormatter,
        RequestInfo,
        ResponseInfo,
        StderrHandler,
        log_roundtrip,
        set_handler,
    };
    pub use crate::registry::{Registry, global, instance};
    pub use crate::{
        DictConvert,
        Record,
        RecordError,
        Schema,
        const_enum,
        from_map,
        record,
    };
}
