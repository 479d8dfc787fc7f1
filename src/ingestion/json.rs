//! JSON ingestion.
//!
//! Accepted documents:
//! - an array of objects: `[{"id":1}, {"id":2}]`
//! - a single object: `{"id":1}`
//! - newline-delimited objects (NDJSON): `{"id":1}\n{"id":2}\n`
//!
//! With a schema, nested fields can be addressed with dot paths (`user.name`). Without one,
//! [`ingest_json_records_from_str`] infers the schema from the records themselves.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value as JsonValue};

use crate::error::{TableError, TableResult};
use crate::types::{DataSet, DataType, Field, Schema, Value};

type JsonObject = Map<String, JsonValue>;

/// Read a JSON file into a [`DataSet`] shaped by `schema`.
pub fn ingest_json_from_path(path: impl AsRef<Path>, schema: &Schema) -> TableResult<DataSet> {
    let text = fs::read_to_string(path)?;
    ingest_json_from_str(&text, schema)
}

/// Parse JSON text into a [`DataSet`] shaped by `schema`.
pub fn ingest_json_from_str(input: &str, schema: &Schema) -> TableResult<DataSet> {
    let objects = parse_objects(input)?;
    let rows = objects
        .iter()
        .enumerate()
        .map(|(i, obj)| record_to_row(i + 1, obj, schema))
        .collect::<TableResult<Vec<_>>>()?;
    Ok(DataSet::new(schema.clone(), rows))
}

/// Parse JSON records, inferring the schema.
///
/// Columns follow the key order of the first record. A column's type comes from its non-null
/// values: integers widen to `Float64` when any value has a fraction, and columns that are
/// always null are `Utf8`. Records missing a key get [`Value::Null`] there.
pub fn ingest_json_records_from_str(input: &str) -> TableResult<DataSet> {
    let objects = parse_objects(input)?;
    let schema = infer_schema(&objects)?;
    let rows = objects
        .iter()
        .enumerate()
        .map(|(i, obj)| {
            schema
                .fields
                .iter()
                .map(|field| match obj.get(&field.name) {
                    Some(v) => convert(i + 1, &field.name, field.data_type, v),
                    None => Ok(Value::Null),
                })
                .collect::<TableResult<Vec<_>>>()
        })
        .collect::<TableResult<Vec<_>>>()?;
    Ok(DataSet::new(schema, rows))
}

/// Infer a flat schema from JSON records (see [`ingest_json_records_from_str`]).
pub fn infer_schema(objects: &[JsonObject]) -> TableResult<Schema> {
    let Some(first) = objects.first() else {
        return Ok(Schema::new(Vec::new()));
    };

    let mut fields = Vec::with_capacity(first.len());
    for key in first.keys() {
        let mut data_type: Option<DataType> = None;
        for (i, obj) in objects.iter().enumerate() {
            let Some(v) = obj.get(key).filter(|v| !v.is_null()) else {
                continue;
            };
            let seen = scalar_type(i + 1, key, v)?;
            data_type = Some(match (data_type, seen) {
                (None, t) => t,
                (Some(a), b) if a == b => a,
                (Some(DataType::Int64), DataType::Float64)
                | (Some(DataType::Float64), DataType::Int64) => DataType::Float64,
                (Some(a), b) => {
                    return Err(TableError::SchemaMismatch {
                        message: format!(
                            "field '{key}' mixes {a:?} and {b:?} values (row {})",
                            i + 1
                        ),
                    });
                }
            });
        }
        fields.push(Field::new(key.clone(), data_type.unwrap_or(DataType::Utf8)));
    }
    Ok(Schema::new(fields))
}

fn parse_objects(input: &str) -> TableResult<Vec<JsonObject>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TableError::SchemaMismatch {
            message: "json input is empty".to_string(),
        });
    }

    let values = match serde_json::from_str::<JsonValue>(trimmed) {
        Ok(JsonValue::Array(items)) => items,
        Ok(v @ JsonValue::Object(_)) => vec![v],
        Ok(_) => {
            return Err(TableError::SchemaMismatch {
                message: "json must be an object, an array of objects, or NDJSON".to_string(),
            });
        }
        Err(_) => trimmed
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                serde_json::from_str::<JsonValue>(line.trim()).map_err(|e| {
                    TableError::SchemaMismatch {
                        message: format!("invalid ndjson at line {}: {e}", i + 1),
                    }
                })
            })
            .collect::<TableResult<Vec<_>>>()?,
    };

    values
        .into_iter()
        .enumerate()
        .map(|(i, v)| match v {
            JsonValue::Object(obj) => Ok(obj),
            _ => Err(TableError::SchemaMismatch {
                message: format!("row {} is not a json object", i + 1),
            }),
        })
        .collect()
}

fn record_to_row(row: usize, obj: &JsonObject, schema: &Schema) -> TableResult<Vec<Value>> {
    schema
        .fields
        .iter()
        .map(|field| {
            let v = lookup(obj, &field.name).ok_or_else(|| TableError::SchemaMismatch {
                message: format!("row {row} missing required field '{}'", field.name),
            })?;
            convert(row, &field.name, field.data_type, v)
        })
        .collect()
}

fn lookup<'a>(obj: &'a JsonObject, path: &str) -> Option<&'a JsonValue> {
    if let Some(v) = obj.get(path) {
        return Some(v);
    }
    let mut segments = path.split('.');
    let mut current = obj.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

fn scalar_type(row: usize, column: &str, v: &JsonValue) -> TableResult<DataType> {
    match v {
        JsonValue::Bool(_) => Ok(DataType::Bool),
        JsonValue::Number(n) if n.is_i64() || n.is_u64() => Ok(DataType::Int64),
        JsonValue::Number(_) => Ok(DataType::Float64),
        JsonValue::String(_) => Ok(DataType::Utf8),
        _ => Err(TableError::ParseError {
            row,
            column: column.to_string(),
            raw: v.to_string(),
            message: "expected a scalar value".to_string(),
        }),
    }
}

fn convert(row: usize, column: &str, data_type: DataType, v: &JsonValue) -> TableResult<Value> {
    if v.is_null() {
        return Ok(Value::Null);
    }

    let converted = match data_type {
        DataType::Utf8 => v.as_str().map(|s| Value::Utf8(s.to_string())),
        DataType::Bool => v.as_bool().map(Value::Bool),
        DataType::Int64 => v.as_i64().map(Value::Int64),
        DataType::Float64 => v.as_f64().map(Value::Float64),
    };

    converted.ok_or_else(|| TableError::ParseError {
        row,
        column: column.to_string(),
        raw: v.to_string(),
        message: format!("expected {data_type:?}"),
    })
}
