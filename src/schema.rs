// ABOUTME: Tagged field-list schemas and the projection utilities that enforce them
// ABOUTME: Projects argument bags onto request bodies and decodes upstream responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 dravr.ai

//! # Schemas
//!
//! A [`SchemaDef`] is a static, ordered list of [`FieldDef`]s mirroring one
//! definition of the upstream OpenAPI document. Two operations interpret it:
//!
//! - [`project_body`] turns a loose argument bag into a request body. Fields
//!   the schema does not declare are dropped, declared fields missing from the
//!   bag take their zero value, and present fields must type-check.
//! - [`decode`] checks an upstream response against the schema. Unknown
//!   fields are ignored and absent fields stay absent; any type mismatch is
//!   reported so the caller can fall back to the raw body.
//!
//! Output objects always list fields in schema order.

use std::fmt;

use serde_json::{json, Map, Value};

use crate::types::ArgumentBag;

/// Wire type of a single schema field
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// JSON string (also used for int64, timestamps and durations)
    String,
    /// JSON boolean
    Boolean,
    /// JSON number without a fractional part
    Integer,
    /// Any JSON number
    Number,
    /// Free-form JSON object
    Object,
    /// Array of strings
    StringArray,
    /// Array of free-form objects
    ObjectArray,
    /// Nested object with its own schema
    Struct(&'static SchemaDef),
    /// Array of nested objects sharing one schema
    StructArray(&'static SchemaDef),
}

impl FieldKind {
    /// Name of the JSON type this kind expects, used in error messages
    pub const fn expected(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Object | Self::Struct(_) => "object",
            Self::StringArray | Self::ObjectArray | Self::StructArray(_) => "array",
        }
    }

    /// Zero value used when a declared field is missing from an argument bag
    pub fn zero_value(&self) -> Value {
        match self {
            Self::String => Value::String(String::new()),
            Self::Boolean => Value::Bool(false),
            Self::Integer => Value::from(0),
            Self::Number => Value::from(0.0),
            Self::Object => Value::Object(Map::new()),
            Self::StringArray | Self::ObjectArray | Self::StructArray(_) => Value::Array(Vec::new()),
            Self::Struct(schema) => Value::Object(schema.zero_object()),
        }
    }

    /// JSON Schema fragment describing this kind (without a description)
    pub fn json_schema(&self) -> Value {
        match self {
            Self::String | Self::Boolean | Self::Integer | Self::Number | Self::Object => {
                json!({ "type": self.expected() })
            }
            Self::StringArray => json!({ "type": "array", "items": { "type": "string" } }),
            Self::ObjectArray => json!({ "type": "array", "items": { "type": "object" } }),
            Self::Struct(schema) => schema.json_schema(),
            Self::StructArray(schema) => json!({ "type": "array", "items": schema.json_schema() }),
        }
    }
}

/// One declared field of a schema
#[derive(Debug)]
pub struct FieldDef {
    /// Wire name (camelCase, as the upstream API spells it)
    pub name: &'static str,
    /// Wire type
    pub kind: FieldKind,
    /// Free-text description taken from the upstream API documentation
    pub description: &'static str,
}

/// A named, ordered field list mirroring one upstream schema definition
#[derive(Debug)]
pub struct SchemaDef {
    /// Schema identifier as it appears in the upstream document
    pub name: &'static str,
    /// Declared fields, in wire order
    pub fields: &'static [FieldDef],
}

impl SchemaDef {
    /// An object with every declared field set to its zero value
    pub fn zero_object(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .map(|f| (f.name.to_owned(), f.kind.zero_value()))
            .collect()
    }

    /// JSON Schema object with one described property per field
    pub fn json_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .fields
            .iter()
            .map(|f| (f.name.to_owned(), described(f.kind.json_schema(), f.description)))
            .collect();
        json!({ "type": "object", "properties": properties })
    }
}

/// Attach a description to a JSON Schema fragment
pub(crate) fn described(mut schema: Value, description: &str) -> Value {
    if let Some(obj) = schema.as_object_mut() {
        obj.insert(
            "description".to_owned(),
            Value::String(description.to_owned()),
        );
    }
    schema
}

// ============================================================================
// Errors
// ============================================================================

/// Why a value could not be projected onto or decoded against a schema
#[derive(Debug)]
pub enum SchemaError {
    /// The input was not valid JSON
    Syntax(serde_json::Error),
    /// A value had the wrong JSON type for its declared field
    Mismatch {
        /// Dotted path of the offending field (`$` for the root)
        path: String,
        /// The JSON type the schema declares
        expected: &'static str,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "invalid JSON: {e}"),
            Self::Mismatch { path, expected } => write!(f, "{path}: expected {expected}"),
        }
    }
}

impl std::error::Error for SchemaError {}

fn mismatch(path: &str, kind: &FieldKind) -> SchemaError {
    SchemaError::Mismatch {
        path: path.to_owned(),
        expected: kind.expected(),
    }
}

fn child_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_owned()
    } else {
        format!("{parent}.{name}")
    }
}

// ============================================================================
// Projection (argument bag -> request body)
// ============================================================================

/// Project an argument bag onto `schema`, producing a complete request body
///
/// Undeclared keys are dropped. Declared keys that are missing or `null`
/// take their zero value. Declared keys with the wrong type are an error.
pub fn project_body(bag: &ArgumentBag, schema: &SchemaDef) -> Result<Map<String, Value>, SchemaError> {
    project_object(bag, schema, "")
}

fn project_object(
    obj: &Map<String, Value>,
    schema: &SchemaDef,
    path: &str,
) -> Result<Map<String, Value>, SchemaError> {
    let mut out = Map::with_capacity(schema.fields.len());
    for field in schema.fields {
        let value = match obj.get(field.name) {
            None | Some(Value::Null) => field.kind.zero_value(),
            Some(v) => project_value(v, &field.kind, &child_path(path, field.name))?,
        };
        out.insert(field.name.to_owned(), value);
    }
    Ok(out)
}

fn project_value(value: &Value, kind: &FieldKind, path: &str) -> Result<Value, SchemaError> {
    match kind {
        FieldKind::Struct(schema) => value
            .as_object()
            .ok_or_else(|| mismatch(path, kind))
            .and_then(|obj| project_object(obj, schema, path))
            .map(Value::Object),
        FieldKind::StructArray(schema) => {
            let items = value.as_array().ok_or_else(|| mismatch(path, kind))?;
            items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let item_path = format!("{path}[{i}]");
                    match item {
                        Value::Null => Ok(Value::Object(schema.zero_object())),
                        Value::Object(obj) => {
                            project_object(obj, schema, &item_path).map(Value::Object)
                        }
                        _ => Err(mismatch(&item_path, &FieldKind::Struct(*schema))),
                    }
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array)
        }
        _ => check_scalar(value, kind, path),
    }
}

// ============================================================================
// Decoding (response body -> typed value)
// ============================================================================

/// Decode a raw response body against `schema`
///
/// Returns only the declared fields present in the body, in schema order.
/// Fails if the body is not a JSON object or a declared field has the wrong
/// type; callers treat that as a degraded success and show the raw body.
pub fn decode(body: &[u8], schema: &SchemaDef) -> Result<Value, SchemaError> {
    let parsed: Value = serde_json::from_slice(body).map_err(SchemaError::Syntax)?;
    let obj = parsed.as_object().ok_or_else(|| SchemaError::Mismatch {
        path: "$".to_owned(),
        expected: "object",
    })?;
    decode_object(obj, schema, "").map(Value::Object)
}

fn decode_object(
    obj: &Map<String, Value>,
    schema: &SchemaDef,
    path: &str,
) -> Result<Map<String, Value>, SchemaError> {
    let mut out = Map::new();
    for field in schema.fields {
        match obj.get(field.name) {
            None | Some(Value::Null) => {}
            Some(v) => {
                let decoded = decode_value(v, &field.kind, &child_path(path, field.name))?;
                out.insert(field.name.to_owned(), decoded);
            }
        }
    }
    Ok(out)
}

fn decode_value(value: &Value, kind: &FieldKind, path: &str) -> Result<Value, SchemaError> {
    match kind {
        FieldKind::Struct(schema) => value
            .as_object()
            .ok_or_else(|| mismatch(path, kind))
            .and_then(|obj| decode_object(obj, schema, path))
            .map(Value::Object),
        FieldKind::StructArray(schema) => {
            let items = value.as_array().ok_or_else(|| mismatch(path, kind))?;
            items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let item_path = format!("{path}[{i}]");
                    item.as_object()
                        .ok_or_else(|| mismatch(&item_path, &FieldKind::Struct(*schema)))
                        .and_then(|obj| decode_object(obj, schema, &item_path))
                        .map(Value::Object)
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array)
        }
        _ => check_scalar(value, kind, path),
    }
}

// ============================================================================
// Shared leaf checks
// ============================================================================

/// Type-check a non-struct value, coercing numbers to the declared kind
fn check_scalar(value: &Value, kind: &FieldKind, path: &str) -> Result<Value, SchemaError> {
    let ok = match (kind, value) {
        (FieldKind::String, Value::String(_))
        | (FieldKind::Boolean, Value::Bool(_))
        | (FieldKind::Number, Value::Number(_))
        | (FieldKind::Object, Value::Object(_))
        | (FieldKind::ObjectArray, Value::Array(_)) => true,
        (FieldKind::Integer, Value::Number(n)) => {
            return integer_value(n).ok_or_else(|| mismatch(path, kind));
        }
        (FieldKind::StringArray, Value::Array(items)) => {
            for (i, item) in items.iter().enumerate() {
                if !item.is_string() {
                    return Err(mismatch(&format!("{path}[{i}]"), &FieldKind::String));
                }
            }
            true
        }
        _ => false,
    };

    if ok {
        Ok(value.clone())
    } else {
        Err(mismatch(path, kind))
    }
}

/// Accept integral numbers, including floats like `3.0`
fn integer_value(n: &serde_json::Number) -> Option<Value> {
    if let Some(i) = n.as_i64() {
        return Some(Value::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Some(Value::from(u));
    }
    n.as_f64()
        .filter(|f| f.fract() == 0.0 && f.abs() < 9.007_199_254_740_992e15)
        .map(|f| Value::from(f as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    static HASH: SchemaDef = SchemaDef {
        name: "Hash",
        fields: &[
            FieldDef {
                name: "type",
                kind: FieldKind::String,
                description: "The algorithm used to compute the hash value.",
            },
            FieldDef {
                name: "value",
                kind: FieldKind::String,
                description: "The hash value.",
            },
        ],
    };

    static FILE: SchemaDef = SchemaDef {
        name: "File",
        fields: &[
            FieldDef {
                name: "name",
                kind: FieldKind::String,
                description: "The name of the file.",
            },
            FieldDef {
                name: "hashes",
                kind: FieldKind::StructArray(&HASH),
                description: "The hashes of the file content.",
            },
            FieldDef {
                name: "primary",
                kind: FieldKind::Struct(&HASH),
                description: "Primary hash.",
            },
            FieldDef {
                name: "count",
                kind: FieldKind::Integer,
                description: "A count.",
            },
            FieldDef {
                name: "cached",
                kind: FieldKind::Boolean,
                description: "Whether cached.",
            },
            FieldDef {
                name: "tags",
                kind: FieldKind::StringArray,
                description: "Tags.",
            },
        ],
    };

    fn bag(value: Value) -> ArgumentBag {
        value.as_object().cloned().expect("object")
    }

    #[test]
    fn project_drops_undeclared_and_zeroes_missing() {
        let body = project_body(
            &bag(json!({"name": "f1", "parent": "projects/p1", "bogus": 1})),
            &FILE,
        )
        .expect("project");

        assert_eq!(body["name"], "f1");
        assert!(body.get("parent").is_none());
        assert!(body.get("bogus").is_none());
        assert_eq!(body["hashes"], json!([]));
        assert_eq!(body["primary"], json!({"type": "", "value": ""}));
        assert_eq!(body["count"], json!(0));
        assert_eq!(body["cached"], json!(false));
        assert_eq!(body["tags"], json!([]));
    }

    #[test]
    fn project_keeps_schema_order() {
        let body = project_body(&bag(json!({"tags": ["a"], "name": "n"})), &FILE).expect("project");
        let keys: Vec<&str> = body.keys().map(String::as_str).collect();
        assert_eq!(keys, ["name", "hashes", "primary", "count", "cached", "tags"]);
    }

    #[test]
    fn project_recurses_into_nested_structs() {
        let body = project_body(
            &bag(json!({"hashes": [{"type": "SHA256", "extra": true}, null]})),
            &FILE,
        )
        .expect("project");
        assert_eq!(
            body["hashes"],
            json!([{"type": "SHA256", "value": ""}, {"type": "", "value": ""}])
        );
    }

    #[test]
    fn project_rejects_wrong_types_with_path() {
        let err = project_body(&bag(json!({"primary": {"value": 7}})), &FILE).unwrap_err();
        assert_eq!(err.to_string(), "primary.value: expected string");

        let err = project_body(&bag(json!({"tags": ["ok", 3]})), &FILE).unwrap_err();
        assert_eq!(err.to_string(), "tags[1]: expected string");
    }

    #[test]
    fn integers_accept_integral_floats_only() {
        let body = project_body(&bag(json!({"count": 3.0})), &FILE).expect("project");
        assert_eq!(body["count"], json!(3));

        let err = project_body(&bag(json!({"count": 3.5})), &FILE).unwrap_err();
        assert_eq!(err.to_string(), "count: expected integer");
    }

    #[test]
    fn decode_keeps_only_present_declared_fields() {
        let decoded = decode(
            br#"{"name":"f1","unknown":1,"hashes":[{"type":"MD5","value":"abc"}]}"#,
            &FILE,
        )
        .expect("decode");
        assert_eq!(
            decoded,
            json!({"name": "f1", "hashes": [{"type": "MD5", "value": "abc"}]})
        );
    }

    #[test]
    fn decode_rejects_non_objects_and_mismatches() {
        assert!(matches!(
            decode(b"[1,2,3]", &FILE),
            Err(SchemaError::Mismatch { .. })
        ));
        assert!(matches!(decode(b"not json", &FILE), Err(SchemaError::Syntax(_))));
        assert!(decode(br#"{"cached":"yes"}"#, &FILE).is_err());
    }

    #[test]
    fn decode_skips_nulls() {
        let decoded = decode(br#"{"name":null,"count":2}"#, &FILE).expect("decode");
        assert_eq!(decoded, json!({"count": 2}));
    }

    #[test]
    fn json_schema_describes_nested_fields() {
        let schema = FILE.json_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["hashes"]["type"], "array");
        assert_eq!(
            schema["properties"]["hashes"]["items"]["properties"]["value"]["description"],
            "The hash value."
        );
        assert_eq!(schema["properties"]["tags"]["items"]["type"], "string");
    }
}
