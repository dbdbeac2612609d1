//! Record construction and conversion errors.

use thiserror::Error;

/// Result type for record operations.
pub type Result<T> = std::result::Result<T, RecordError>;

/// Errors raised while building or converting records.
#[derive(Debug, Error)]
pub enum RecordError {
    /// A mapping contained a key not declared on the record's schema.
    ///
    /// Only the strict builder raises this; [`DictConvert::from_dict`]
    /// silently drops unknown keys instead.
    ///
    /// [`DictConvert::from_dict`]: crate::DictConvert::from_dict
    #[error("unexpected field `{field}` for record `{record}`")]
    UnexpectedField {
        /// Name of the record whose schema rejected the key.
        record: &'static str,
        /// The offending key.
        field: String,
    },

    /// A required field was absent from the input mapping.
    #[error("missing required field `{field}` for record `{record}`")]
    MissingField {
        /// Name of the record being built.
        record: &'static str,
        /// The absent field.
        field: String,
    },

    /// The mapping passed schema checks but field values did not deserialize.
    #[error("failed to build record `{record}`: {source}")]
    Deserialize {
        /// Name of the record being built.
        record: &'static str,
        source: serde_json::Error,
    },

    /// The record could not be serialized back into a mapping.
    #[error("failed to serialize record `{record}`: {source}")]
    Serialize {
        /// Name of the record being serialized.
        record: &'static str,
        source: serde_json::Error,
    },
}

impl RecordError {
    /// Name of the record the error refers to.
    pub fn record(&self) -> &'static str {
        match self {
            Self::UnexpectedField { record, .. }
            | Self::MissingField { record, .. }
            | Self::Deserialize { record, .. }
            | Self::Serialize { record, .. } => record,
        }
    }

    /// The field name, for field-addressed errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::UnexpectedField { field, .. } | Self::MissingField { field, .. } => {
                Some(field)
            }
            _ => None,
        }
    }
}
