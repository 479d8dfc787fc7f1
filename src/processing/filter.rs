//! Per-column exact-match filters.

use crate::processing::FilterState;
use crate::types::{DataSet, Schema};

/// Resolve `filters` against `schema`.
///
/// Returns `(column index, lower-cased value)` for every non-empty filter on a known column.
/// Empty values and unknown columns impose no constraint and are dropped here.
pub fn active_filters(schema: &Schema, filters: &FilterState) -> Vec<(usize, String)> {
    filters
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .filter_map(|(key, value)| Some((schema.index_of(key)?, value.to_lowercase())))
        .collect()
}

/// Keep the rows of `indices` whose values match every active filter, case-insensitively.
///
/// Filters compose with AND; relative order of `indices` is preserved.
pub fn apply_filters(dataset: &DataSet, indices: Vec<usize>, filters: &FilterState) -> Vec<usize> {
    let active = active_filters(&dataset.schema, filters);
    if active.is_empty() {
        return indices;
    }

    indices
        .into_iter()
        .filter(|&row| {
            active
                .iter()
                .all(|(col, wanted)| dataset.value(row, *col).as_text().to_lowercase() == *wanted)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{active_filters, apply_filters};
    use crate::processing::FilterState;
    use crate::types::{DataSet, DataType, Field, Schema, Value};

    fn sample_dataset() -> DataSet {
        let schema = Schema::new(vec![
            Field::new("id", DataType::Int64),
            Field::new("age", DataType::Int64),
            Field::new("status", DataType::Utf8),
        ]);
        let rows = vec![
            vec![Value::Int64(1), Value::Int64(25), Value::Utf8("Active".into())],
            vec![Value::Int64(2), Value::Int64(30), Value::Utf8("Inactive".into())],
            vec![Value::Int64(3), Value::Int64(25), Value::Utf8("Inactive".into())],
            vec![Value::Int64(4), Value::Int64(25), Value::Utf8("Active".into())],
        ];
        DataSet::new(schema, rows)
    }

    fn filters(pairs: &[(&str, &str)]) -> FilterState {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn no_filters_keeps_all_rows() {
        let ds = sample_dataset();
        assert_eq!(apply_filters(&ds, vec![0, 1, 2, 3], &FilterState::new()), vec![0, 1, 2, 3]);
    }

    #[test]
    fn filter_is_exact_and_case_insensitive() {
        let ds = sample_dataset();
        let out = apply_filters(&ds, vec![0, 1, 2, 3], &filters(&[("status", "active")]));
        assert_eq!(out, vec![0, 3]);
    }

    #[test]
    fn filters_compose_with_and() {
        let ds = sample_dataset();
        let f = filters(&[("status", "Inactive"), ("age", "25")]);
        assert_eq!(apply_filters(&ds, vec![0, 1, 2, 3], &f), vec![2]);
    }

    #[test]
    fn empty_and_unknown_filters_are_ignored() {
        let ds = sample_dataset();
        let f = filters(&[("status", ""), ("email", "x@y.z")]);
        assert!(active_filters(&ds.schema, &f).is_empty());
        assert_eq!(apply_filters(&ds, vec![3, 1], &f), vec![3, 1]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let ds = sample_dataset();
        let f = filters(&[("age", "25")]);
        let once = apply_filters(&ds, vec![0, 1, 2, 3], &f);
        let twice = apply_filters(&ds, once.clone(), &f);
        assert_eq!(once, twice);
    }

    #[test]
    fn zero_filter_matches_negative_zero() {
        let schema = Schema::new(vec![Field::new("delta", DataType::Float64)]);
        let ds = DataSet::new(
            schema,
            vec![vec![Value::Float64(-0.0)], vec![Value::Float64(1.5)], vec![Value::Float64(0.0)]],
        );
        assert_eq!(apply_filters(&ds, vec![0, 1, 2], &filters(&[("delta", "0")])), vec![0, 2]);
    }
}
