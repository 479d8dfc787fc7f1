//! CSV ingestion.

use std::io::Read;
use std::path::Path;

use crate::error::{TableError, TableResult};
use crate::types::{DataSet, DataType, Schema, Value};

/// Read a headered CSV file into a [`DataSet`].
///
/// - Headers must name every schema field; column order may differ and extra columns are
///   ignored.
/// - Cells are parsed according to the field type; blank cells become [`Value::Null`].
pub fn ingest_csv_from_path(path: impl AsRef<Path>, schema: &Schema) -> TableResult<DataSet> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;
    ingest_csv_from_reader(&mut rdr, schema)
}

/// Read CSV records from an existing reader (which must have headers enabled).
pub fn ingest_csv_from_reader<R: Read>(
    rdr: &mut csv::Reader<R>,
    schema: &Schema,
) -> TableResult<DataSet> {
    let headers = rdr.headers()?.clone();
    let positions = schema
        .fields
        .iter()
        .map(|field| {
            headers
                .iter()
                .position(|h| h.trim() == field.name)
                .ok_or_else(|| TableError::SchemaMismatch {
                    message: format!(
                        "missing required column '{}'. headers={:?}",
                        field.name,
                        headers.iter().collect::<Vec<_>>()
                    ),
                })
        })
        .collect::<TableResult<Vec<usize>>>()?;

    let mut rows = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        // 1-based, counting the header line.
        let line = i + 2;
        let row = schema
            .fields
            .iter()
            .zip(&positions)
            .map(|(field, &pos)| {
                parse_cell(line, &field.name, field.data_type, record.get(pos).unwrap_or(""))
            })
            .collect::<TableResult<Vec<Value>>>()?;
        rows.push(row);
    }

    Ok(DataSet::new(schema.clone(), rows))
}

fn parse_cell(row: usize, column: &str, data_type: DataType, raw: &str) -> TableResult<Value> {
    let text = raw.trim();
    if text.is_empty() {
        return Ok(Value::Null);
    }

    let parse_error = |message: String| TableError::ParseError {
        row,
        column: column.to_string(),
        raw: raw.to_string(),
        message,
    };

    match data_type {
        DataType::Utf8 => Ok(Value::Utf8(text.to_string())),
        DataType::Int64 => text
            .parse::<i64>()
            .map(Value::Int64)
            .map_err(|e| parse_error(e.to_string())),
        DataType::Float64 => text
            .parse::<f64>()
            .map(Value::Float64)
            .map_err(|e| parse_error(e.to_string())),
        DataType::Bool => match text.to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(Value::Bool(true)),
            "false" | "no" | "0" => Ok(Value::Bool(false)),
            _ => Err(parse_error("expected bool (true/false/yes/no/1/0)".to_string())),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::parse_cell;
    use crate::types::{DataType, Value};

    #[test]
    fn blank_cells_are_null_for_every_type() {
        for dt in [DataType::Int64, DataType::Float64, DataType::Bool, DataType::Utf8] {
            assert_eq!(parse_cell(2, "c", dt, "  ").unwrap(), Value::Null);
        }
    }

    #[test]
    fn cells_parse_by_type() {
        assert_eq!(parse_cell(2, "age", DataType::Int64, " 25 ").unwrap(), Value::Int64(25));
        assert_eq!(parse_cell(2, "s", DataType::Float64, "98.5").unwrap(), Value::Float64(98.5));
        assert_eq!(parse_cell(2, "ok", DataType::Bool, "Yes").unwrap(), Value::Bool(true));
        assert_eq!(
            parse_cell(2, "name", DataType::Utf8, "John").unwrap(),
            Value::Utf8("John".into())
        );
    }

    #[test]
    fn parse_errors_name_row_and_column() {
        let msg = parse_cell(7, "ok", DataType::Bool, "maybe").unwrap_err().to_string();
        assert!(msg.contains("row 7"));
        assert!(msg.contains("column 'ok'"));
        assert!(msg.contains("raw='maybe'"));
    }
}
