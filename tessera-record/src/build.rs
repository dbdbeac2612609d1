//! Strict construction of records from nested mappings.
//!
//! [`from_map`] is the strict counterpart to [`DictConvert::from_dict`]: a key
//! that is not declared on the schema fails construction instead of being
//! dropped, at every nesting level.
//!
//! [`DictConvert::from_dict`]: crate::DictConvert::from_dict

use serde_json::{Map, Value};

use crate::{FieldKind, Record, RecordError, Result, Schema};

/// Build a record from a mapping, promoting nested mappings to nested records.
///
/// For every field whose declared type is itself a record, a JSON object value
/// is validated against the nested schema before deserialization, so errors
/// name the record that rejected the input. Any other value passes through
/// unchanged. Keys not declared on the schema fail with
/// [`RecordError::UnexpectedField`]; absent required fields fail with
/// [`RecordError::MissingField`].
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use tessera_record::{from_map, FieldDef, FieldKind, Record, Schema};
///
/// #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// impl Record for Point {
///     fn schema() -> &'static Schema {
///         static SCHEMA: Schema = Schema {
///             name: "Point",
///             fields: &[
///                 FieldDef { name: "x", required: true, kind: FieldKind::Value },
///                 FieldDef { name: "y", required: true, kind: FieldKind::Value },
///             ],
///         };
///         &SCHEMA
///     }
/// }
///
/// let map = serde_json::Map::from_iter([
///     ("x".to_string(), json!(1)),
///     ("y".to_string(), json!(2)),
/// ]);
/// let point: Point = from_map(map).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
pub fn from_map<T: Record>(map: Map<String, Value>) -> Result<T> {
    let schema = T::schema();
    let promoted = promote(schema, map)?;
    serde_json::from_value(Value::Object(promoted))
        .map_err(|source| RecordError::Deserialize {
            record: schema.name,
            source,
        })
}

/// Validate a mapping against a schema, recursing into record-typed fields.
fn promote(schema: &'static Schema, map: Map<String, Value>) -> Result<Map<String, Value>> {
    let mut out = Map::with_capacity(map.len());

    for (key, value) in map {
        let field = schema.field(&key).ok_or_else(|| RecordError::UnexpectedField {
            record: schema.name,
            field: key.clone(),
        })?;

        let value = match (field.kind, value) {
            (FieldKind::Record(nested), Value::Object(inner)) => {
                Value::Object(promote(nested(), inner)?)
            }
            (FieldKind::RecordList(nested), Value::Array(items)) => Value::Array(
                items
                    .into_iter()
                    .map(|item| match item {
                        Value::Object(inner) => Ok(Value::Object(promote(nested(), inner)?)),
                        other => Ok(other),
                    })
                    .collect::<Result<Vec<_>>>()?,
            ),
            (_, value) => value,
        };
        out.insert(key, value);
    }

    for field in schema.required_fields() {
        if !out.contains_key(field.name) {
            return Err(RecordError::MissingField {
                record: schema.name,
                field: field.name.to_string(),
            });
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Address {
        street: String,
        city: String,
        #[serde(default)]
        zip: Option<String>,
    }

    impl Record for Address {
        fn schema() -> &'static Schema {
            static SCHEMA: Schema = Schema {
                name: "Address",
                fields: &[
                    crate::FieldDef {
                        name: "street",
                        required: true,
                        kind: FieldKind::Value,
                    },
                    crate::FieldDef {
                        name: "city",
                        required: true,
                        kind: FieldKind::Value,
                    },
                    crate::FieldDef {
                        name: "zip",
                        required: false,
                        kind: FieldKind::Value,
                    },
                ],
            };
            &SCHEMA
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Customer {
        name: String,
        address: Address,
        #[serde(default)]
        deliveries: Vec<Address>,
    }

    impl Record for Customer {
        fn schema() -> &'static Schema {
            static SCHEMA: Schema = Schema {
                name: "Customer",
                fields: &[
                    crate::FieldDef {
                        name: "name",
                        required: true,
                        kind: FieldKind::Value,
                    },
                    crate::FieldDef {
                        name: "address",
                        required: true,
                        kind: FieldKind::Record(<Address as Record>::schema),
                    },
                    crate::FieldDef {
                        name: "deliveries",
                        required: false,
                        kind: FieldKind::RecordList(<Address as Record>::schema),
                    },
                ],
            };
            &SCHEMA
        }
    }

    fn object(value: serde_json::Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_nested_mapping_promoted_to_record() {
        let customer: Customer = from_map(object(json!({
            "name": "Ada",
            "address": { "street": "1 Main St", "city": "Truro" },
        })))
        .unwrap();

        assert_eq!(customer.name, "Ada");
        assert_eq!(
            customer.address,
            Address {
                street: "1 Main St".to_string(),
                city: "Truro".to_string(),
                zip: None,
            }
        );
    }

    #[test]
    fn test_matches_direct_construction() {
        let built: Customer = from_map(object(json!({
            "name": "Ada",
            "address": { "street": "1 Main St", "city": "Truro", "zip": "TR1" },
        })))
        .unwrap();

        let direct = Customer {
            name: "Ada".to_string(),
            address: Address {
                street: "1 Main St".to_string(),
                city: "Truro".to_string(),
                zip: Some("TR1".to_string()),
            },
            deliveries: Vec::new(),
        };
        assert_eq!(built, direct);
    }

    #[test]
    fn test_unexpected_top_level_key_rejected() {
        let err = from_map::<Customer>(object(json!({
            "name": "Ada",
            "address": { "street": "1 Main St", "city": "Truro" },
            "nickname": "ada",
        })))
        .unwrap_err();

        match err {
            RecordError::UnexpectedField { record, field } => {
                assert_eq!(record, "Customer");
                assert_eq!(field, "nickname");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unexpected_nested_key_names_nested_record() {
        let err = from_map::<Customer>(object(json!({
            "name": "Ada",
            "address": { "street": "1 Main St", "city": "Truro", "country": "UK" },
        })))
        .unwrap_err();

        match err {
            RecordError::UnexpectedField { record, field } => {
                assert_eq!(record, "Address");
                assert_eq!(field, "country");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_required_field() {
        let err = from_map::<Customer>(object(json!({
            "address": { "street": "1 Main St", "city": "Truro" },
        })))
        .unwrap_err();

        match err {
            RecordError::MissingField { record, field } => {
                assert_eq!(record, "Customer");
                assert_eq!(field, "name");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_record_list_elements_checked() {
        let err = from_map::<Customer>(object(json!({
            "name": "Ada",
            "address": { "street": "1 Main St", "city": "Truro" },
            "deliveries": [{ "street": "2 Side St", "city": "Truro", "planet": "Earth" }],
        })))
        .unwrap_err();

        match err {
            RecordError::UnexpectedField { record, field } => {
                assert_eq!(record, "Address");
                assert_eq!(field, "planet");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_mapping_value_passes_through() {
        // A record-typed field holding a non-object is left for serde, which
        // reports a type error rather than a schema error.
        let err = from_map::<Customer>(object(json!({
            "name": "Ada",
            "address": "not a mapping",
        })))
        .unwrap_err();

        assert!(matches!(err, RecordError::Deserialize { record: "Customer", .. }));
    }
}
