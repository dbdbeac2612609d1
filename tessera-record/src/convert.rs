//! Lenient dict conversion for record types.
//!
//! [`DictConvert`] is the forgiving counterpart to the strict builder: unknown
//! keys are silently dropped on the way in, and null-valued fields are omitted
//! on the way out.

use serde::ser::Error as _;
use serde_json::{Map, Value};

use crate::{FieldKind, Record, RecordError, Result, Schema};

/// Dict conversion capability, available on every [`Record`] type.
pub trait DictConvert: Record {
    /// Build a record from a mapping, ignoring unknown keys.
    ///
    /// The mapping is filtered down to declared field names before
    /// deserialization; anything else is silently discarded. A required field
    /// absent from the filtered mapping fails with
    /// [`RecordError::MissingField`].
    fn from_dict(data: &Map<String, Value>) -> Result<Self> {
        let schema = Self::schema();
        let mut filtered = Map::with_capacity(schema.fields.len());

        for field in schema.fields {
            match data.get(field.name) {
                Some(value) => {
                    filtered.insert(field.name.to_string(), value.clone());
                }
                None if field.required => {
                    return Err(RecordError::MissingField {
                        record: schema.name,
                        field: field.name.to_string(),
                    });
                }
                None => {}
            }
        }

        serde_json::from_value(Value::Object(filtered)).map_err(|source| {
            RecordError::Deserialize {
                record: schema.name,
                source,
            }
        })
    }

    /// Build one record per input mapping, preserving input order.
    fn from_list(items: &[Map<String, Value>]) -> Result<Vec<Self>> {
        items.iter().map(Self::from_dict).collect()
    }

    /// Serialize the record to a mapping, omitting null-valued fields.
    ///
    /// The null filter follows the schema: it applies to this record's own
    /// mapping, to record-typed fields, and to elements of record-list
    /// fields. Nulls inside plain value fields are preserved, as are present
    /// falsy values (`0`, `""`, `[]`).
    fn to_dict(&self) -> Result<Map<String, Value>> {
        let schema = Self::schema();
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => Ok(strip_nulls(schema, map)),
            Ok(_) => Err(RecordError::Serialize {
                record: schema.name,
                source: serde_json::Error::custom("record did not serialize to a mapping"),
            }),
            Err(source) => Err(RecordError::Serialize {
                record: schema.name,
                source,
            }),
        }
    }
}

impl<T: Record> DictConvert for T {}

/// Remove null entries from a record mapping, recursing into record fields.
fn strip_nulls(schema: &'static Schema, map: Map<String, Value>) -> Map<String, Value> {
    let mut out = Map::with_capacity(map.len());

    for (key, value) in map {
        if value.is_null() {
            continue;
        }
        let kind = schema.field(&key).map(|f| f.kind);
        let value = match (kind, value) {
            (Some(FieldKind::Record(nested)), Value::Object(inner)) => {
                Value::Object(strip_nulls(nested(), inner))
            }
            (Some(FieldKind::RecordList(nested)), Value::Array(items)) => Value::Array(
                items
                    .into_iter()
                    .map(|item| match item {
                        Value::Object(inner) => Value::Object(strip_nulls(nested(), inner)),
                        other => other,
                    })
                    .collect(),
            ),
            (_, value) => value,
        };
        out.insert(key, value);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldDef;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Line {
        sku: String,
        quantity: u32,
        #[serde(default)]
        note: Option<String>,
    }

    impl Record for Line {
        fn schema() -> &'static Schema {
            static SCHEMA: Schema = Schema {
                name: "Line",
                fields: &[
                    FieldDef {
                        name: "sku",
                        required: true,
                        kind: FieldKind::Value,
                    },
                    FieldDef {
                        name: "quantity",
                        required: true,
                        kind: FieldKind::Value,
                    },
                    FieldDef {
                        name: "note",
                        required: false,
                        kind: FieldKind::Value,
                    },
                ],
            };
            &SCHEMA
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Order {
        id: u64,
        #[serde(default)]
        discount: Option<f64>,
        #[serde(default)]
        lines: Vec<Line>,
        #[serde(default)]
        tags: Vec<String>,
    }

    impl Record for Order {
        fn schema() -> &'static Schema {
            static SCHEMA: Schema = Schema {
                name: "Order",
                fields: &[
                    FieldDef {
                        name: "id",
                        required: true,
                        kind: FieldKind::Value,
                    },
                    FieldDef {
                        name: "discount",
                        required: false,
                        kind: FieldKind::Value,
                    },
                    FieldDef {
                        name: "lines",
                        required: false,
                        kind: FieldKind::RecordList(<Line as Record>::schema),
                    },
                    FieldDef {
                        name: "tags",
                        required: false,
                        kind: FieldKind::Value,
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
    fn test_from_dict_drops_unknown_keys() {
        let order = Order::from_dict(&object(json!({
            "id": 7,
            "extra_junk": 1,
            "more_junk": { "deep": true },
        })))
        .unwrap();

        assert_eq!(order.id, 7);
        assert!(!order.to_dict().unwrap().contains_key("extra_junk"));
    }

    #[test]
    fn test_from_dict_missing_required_field() {
        let err = Order::from_dict(&object(json!({ "discount": 0.1 }))).unwrap_err();
        match err {
            RecordError::MissingField { record, field } => {
                assert_eq!(record, "Order");
                assert_eq!(field, "id");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_list_preserves_order() {
        let dicts = vec![
            object(json!({ "sku": "a", "quantity": 1 })),
            object(json!({ "sku": "b", "quantity": 2 })),
            object(json!({ "sku": "c", "quantity": 3 })),
        ];
        let lines = Line::from_list(&dicts).unwrap();

        assert_eq!(lines.len(), 3);
        let skus: Vec<_> = lines.iter().map(|l| l.sku.as_str()).collect();
        assert_eq!(skus, vec!["a", "b", "c"]);
        for (line, dict) in lines.iter().zip(&dicts) {
            assert_eq!(line, &Line::from_dict(dict).unwrap());
        }
    }

    #[test]
    fn test_to_dict_omits_null_fields() {
        let order = Order {
            id: 1,
            discount: None,
            lines: Vec::new(),
            tags: Vec::new(),
        };
        let dict = order.to_dict().unwrap();

        assert!(!dict.contains_key("discount"));
        // Present falsy values stay.
        assert_eq!(dict.get("lines"), Some(&json!([])));
        assert_eq!(dict.get("tags"), Some(&json!([])));
    }

    #[test]
    fn test_to_dict_keeps_falsy_values() {
        let line = Line {
            sku: String::new(),
            quantity: 0,
            note: None,
        };
        let dict = line.to_dict().unwrap();

        assert_eq!(dict.get("sku"), Some(&json!("")));
        assert_eq!(dict.get("quantity"), Some(&json!(0)));
        assert!(!dict.contains_key("note"));
    }

    #[test]
    fn test_to_dict_strips_nulls_inside_record_lists() {
        let order = Order {
            id: 2,
            discount: Some(0.5),
            lines: vec![Line {
                sku: "a".to_string(),
                quantity: 1,
                note: None,
            }],
            tags: Vec::new(),
        };
        let dict = order.to_dict().unwrap();

        assert_eq!(
            dict.get("lines"),
            Some(&json!([{ "sku": "a", "quantity": 1 }]))
        );
    }

    #[test]
    fn test_roundtrip_through_dict() {
        let order = Order {
            id: 3,
            discount: Some(0.25),
            lines: vec![Line {
                sku: "z".to_string(),
                quantity: 9,
                note: Some("gift".to_string()),
            }],
            tags: vec!["rush".to_string()],
        };
        let rebuilt = Order::from_dict(&order.to_dict().unwrap()).unwrap();
        assert_eq!(rebuilt, order);
    }
}
