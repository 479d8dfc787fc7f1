use table_pipeline::ingestion::ingest_from_path;
use table_pipeline::ingestion::json::{ingest_json_from_path, ingest_json_from_str, ingest_json_records_from_str};
use table_pipeline::processing::{process, TableQuery};
use table_pipeline::sample::{people_columns, people_schema};
use table_pipeline::types::{DataType, Field, Schema, Value};

#[test]
fn ingest_json_array_from_path_happy_path() {
    let ds = ingest_json_from_path("tests/fixtures/people.json", &people_schema()).unwrap();

    assert_eq!(ds.row_count(), 6);
    assert_eq!(ds.rows[0][1], Value::from("John"));
    assert_eq!(ds.rows[3][2], Value::Int64(32));
}

#[test]
fn ingest_from_path_detects_json() {
    let ds = ingest_from_path("tests/fixtures/people.json", &people_schema()).unwrap();
    assert_eq!(ds.row_count(), 6);
}

#[test]
fn inferred_records_feed_the_pipeline() {
    let text = std::fs::read_to_string("tests/fixtures/people.json").unwrap();
    let ds = ingest_json_records_from_str(&text).unwrap();
    assert_eq!(ds.schema, people_schema());

    let mut query = TableQuery::default();
    query.filters.insert("status".into(), "active".into());
    let out = process(&ds, &people_columns(), &query);
    assert_eq!(out.total_matched, 4);
}

#[test]
fn ingest_json_nested_fields_from_ndjson() {
    let schema = Schema::new(vec![
        Field::new("id", DataType::Int64),
        Field::new("user.name", DataType::Utf8),
        Field::new("active", DataType::Bool),
    ]);
    let input = r#"
{"id":1,"user":{"name":"Ada"},"active":true}
{"id":2,"user":{"name":"Grace"},"active":null}
"#;
    let ds = ingest_json_from_str(input, &schema).unwrap();
    assert_eq!(ds.row_count(), 2);
    assert_eq!(ds.rows[1][1], Value::from("Grace"));
    assert_eq!(ds.rows[1][2], Value::Null);
}

#[test]
fn ingest_json_errors_on_missing_field() {
    let input = r#"[{"id":1,"name":"John","age":25}]"#;
    let err = ingest_json_from_str(input, &people_schema()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("schema mismatch"));
    assert!(msg.contains("missing required field 'status'"));
}

#[test]
fn ingest_json_errors_on_type_mismatch() {
    let input = r#"[{"id":"one","name":"John","age":25,"status":"Active"}]"#;
    let err = ingest_json_from_str(input, &people_schema()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("failed to parse value"));
    assert!(msg.contains("column 'id'"));
}
