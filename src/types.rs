//! Core data model types for table processing.
//!
//! A table is backed by an in-memory [`DataSet`]: a [`Schema`] (a list of typed [`Field`]s) plus
//! row-major [`Value`] storage. Every row has the same shape, so a row together with the schema
//! behaves like a key → value record (see [`RowView`]).

use std::borrow::Cow;
use std::cmp::Ordering;

/// Returned for cells that are absent from a (ragged) row.
static NULL: Value = Value::Null;

/// Logical data type for a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point number.
    Float64,
    /// Boolean.
    Bool,
    /// UTF-8 string.
    Utf8,
}

/// A single named, typed field in a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field/column key.
    pub name: String,
    /// Field data type.
    pub data_type: DataType,
}

impl Field {
    /// Create a new field.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// Ordered list of fields shared by every row of a [`DataSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Ordered list of fields.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a new schema from fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Iterate field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Returns the index of a field by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}

/// A single scalar cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing/empty value.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    Utf8(String),
}

impl Value {
    /// Textual form used for searching, filtering and default cell display.
    ///
    /// Numbers use their shortest decimal form (`25`, `98.5`, `30` for `30.0`), booleans are
    /// `true`/`false` and [`Value::Null`] is the empty string. Negative zero renders as `0`.
    /// Large floats are written out in full (`1e21` becomes `1000000000000000000000`), never
    /// in exponent notation.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Value::Null => Cow::Borrowed(""),
            Value::Int64(v) => Cow::Owned(v.to_string()),
            Value::Float64(v) if *v == 0.0 => Cow::Borrowed("0"),
            Value::Float64(v) => Cow::Owned(v.to_string()),
            Value::Bool(true) => Cow::Borrowed("true"),
            Value::Bool(false) => Cow::Borrowed("false"),
            Value::Utf8(s) => Cow::Borrowed(s.as_str()),
        }
    }

    /// Natural ordering used when sorting a column.
    ///
    /// Numbers compare numerically (integers and floats against each other), strings compare
    /// lexicographically and `false < true`. Mixed types fall back to a fixed rank:
    /// null, then bool, then number, then string.
    pub fn cmp_natural(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Int64(a), Value::Int64(b)) => a.cmp(b),
            (Value::Float64(a), Value::Float64(b)) => a.total_cmp(b),
            (Value::Int64(a), Value::Float64(b)) => (*a as f64).total_cmp(b),
            (Value::Float64(a), Value::Int64(b)) => a.total_cmp(&(*b as f64)),
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Utf8(a), Value::Utf8(b)) => a.cmp(b),
            _ => self.type_rank().cmp(&other.type_rank()),
        }
    }

    fn type_rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int64(_) | Value::Float64(_) => 2,
            Value::Utf8(_) => 3,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Utf8(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Utf8(v)
    }
}

/// In-memory tabular dataset.
///
/// Rows are stored as `Vec<Vec<Value>>` in the same order as the [`Schema`] fields. Processing
/// never mutates a dataset; derived views are built from row indices.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    /// Schema describing row shape.
    pub schema: Schema,
    /// Row-major value storage.
    pub rows: Vec<Vec<Value>>,
}

impl DataSet {
    /// Create a dataset from schema and rows.
    pub fn new(schema: Schema, rows: Vec<Vec<Value>>) -> Self {
        Self { schema, rows }
    }

    /// Create a dataset with no rows.
    pub fn empty(schema: Schema) -> Self {
        Self {
            schema,
            rows: Vec::new(),
        }
    }

    /// Number of rows in the dataset.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Borrow row `index` as a keyed record.
    pub fn row(&self, index: usize) -> Option<RowView<'_>> {
        self.rows
            .get(index)
            .map(|values| RowView::new(&self.schema, values))
    }

    /// Iterate all rows as keyed records, in storage order.
    pub fn records(&self) -> impl Iterator<Item = RowView<'_>> {
        self.rows
            .iter()
            .map(|values| RowView::new(&self.schema, values))
    }

    /// Cell at (`row`, `column`). Cells outside a short row read as [`Value::Null`].
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn value(&self, row: usize, column: usize) -> &Value {
        self.rows[row].get(column).unwrap_or(&NULL)
    }

    /// Build a dataset from the rows at `indices`, in that order.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    pub fn select_rows(&self, indices: &[usize]) -> Self {
        Self {
            schema: self.schema.clone(),
            rows: indices.iter().map(|&i| self.rows[i].clone()).collect(),
        }
    }
}

/// A borrowed row paired with its schema, addressable by column key.
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    schema: &'a Schema,
    values: &'a [Value],
}

impl<'a> RowView<'a> {
    /// Pair `values` with the schema that describes them.
    pub fn new(schema: &'a Schema, values: &'a [Value]) -> Self {
        Self { schema, values }
    }

    /// Value stored under `key`, if the schema has such a column.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        let idx = self.schema.index_of(key)?;
        Some(self.values.get(idx).unwrap_or(&NULL))
    }

    /// Raw values in schema order.
    pub fn values(&self) -> &'a [Value] {
        self.values
    }

    /// Schema of the owning dataset.
    pub fn schema(&self) -> &'a Schema {
        self.schema
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::{DataSet, DataType, Field, Schema, Value};

    fn sample_dataset() -> DataSet {
        let schema = Schema::new(vec![
            Field::new("id", DataType::Int64),
            Field::new("active", DataType::Bool),
            Field::new("name", DataType::Utf8),
        ]);

        let rows = vec![
            vec![Value::Int64(1), Value::Bool(true), Value::Utf8("a".to_string())],
            vec![Value::Int64(2), Value::Bool(false), Value::Utf8("b".to_string())],
            vec![Value::Int64(3)],
        ];

        DataSet::new(schema, rows)
    }

    #[test]
    fn schema_index_of_works() {
        let ds = sample_dataset();
        assert_eq!(ds.schema.index_of("id"), Some(0));
        assert_eq!(ds.schema.index_of("name"), Some(2));
        assert_eq!(ds.schema.index_of("missing"), None);
    }

    #[test]
    fn text_form_matches_display_conventions() {
        assert_eq!(Value::Int64(25).as_text(), "25");
        assert_eq!(Value::Float64(98.5).as_text(), "98.5");
        assert_eq!(Value::Float64(30.0).as_text(), "30");
        assert_eq!(Value::Bool(true).as_text(), "true");
        assert_eq!(Value::Utf8("John".into()).as_text(), "John");
        assert_eq!(Value::Null.as_text(), "");
    }

    #[test]
    fn negative_zero_reads_as_zero() {
        assert_eq!(Value::Float64(-0.0).as_text(), "0");
        assert_eq!(Value::Float64(0.0).as_text(), "0");
        assert_eq!(Value::Float64(-0.5).as_text(), "-0.5");
    }

    #[test]
    fn natural_order_is_numeric_for_numbers() {
        // Lexicographic order would put "10" before "9".
        assert_eq!(Value::Int64(9).cmp_natural(&Value::Int64(10)), Ordering::Less);
        assert_eq!(Value::Int64(2).cmp_natural(&Value::Float64(1.5)), Ordering::Greater);
        assert_eq!(Value::Float64(2.0).cmp_natural(&Value::Int64(2)), Ordering::Equal);
    }

    #[test]
    fn natural_order_ranks_mixed_types() {
        assert_eq!(Value::Null.cmp_natural(&Value::Bool(false)), Ordering::Less);
        assert_eq!(Value::Bool(true).cmp_natural(&Value::Int64(0)), Ordering::Less);
        assert_eq!(Value::Int64(99).cmp_natural(&Value::Utf8("a".into())), Ordering::Less);
        assert_eq!(Value::Null.cmp_natural(&Value::Null), Ordering::Equal);
        assert_eq!(
            Value::Utf8("Bob".into()).cmp_natural(&Value::Utf8("Alice".into())),
            Ordering::Greater
        );
    }

    #[test]
    fn row_view_looks_up_by_key_and_pads_short_rows() {
        let ds = sample_dataset();
        let first = ds.row(0).unwrap();
        assert_eq!(first.get("name"), Some(&Value::Utf8("a".to_string())));
        assert_eq!(first.get("missing"), None);

        let short = ds.row(2).unwrap();
        assert_eq!(short.get("name"), Some(&Value::Null));
        assert_eq!(ds.value(2, 1), &Value::Null);
        assert!(ds.row(3).is_none());
    }

    #[test]
    fn select_rows_preserves_schema_and_order() {
        let ds = sample_dataset();
        let out = ds.select_rows(&[1, 0]);
        assert_eq!(out.schema, ds.schema);
        assert_eq!(out.rows[0][0], Value::Int64(2));
        assert_eq!(out.rows[1][0], Value::Int64(1));
        // Original unchanged
        assert_eq!(ds.row_count(), 3);
    }
}
