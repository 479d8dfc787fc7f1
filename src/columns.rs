//! Column descriptors and the column-derived widget data (filter options, filter chips).

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::processing::FilterState;
use crate::types::{DataSet, RowView};

/// Pure function producing the displayed form of a cell from its whole record.
pub type CellRenderer = Arc<dyn Fn(&RowView<'_>) -> String + Send + Sync>;

/// Describes how one column is labeled, filtered and rendered. Never stores data.
#[derive(Clone)]
pub struct ColumnDescriptor {
    /// Key of the record field shown in this column.
    pub key: String,
    /// Header text.
    pub label: String,
    /// Whether a filter selector is offered for this column.
    pub filterable: bool,
    renderer: Option<CellRenderer>,
}

impl ColumnDescriptor {
    /// A plain, non-filterable column rendering the raw value.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            filterable: false,
            renderer: None,
        }
    }

    /// Set whether the column offers a filter selector.
    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    /// Render cells of this column with `renderer` instead of the raw value.
    pub fn with_renderer<F>(mut self, renderer: F) -> Self
    where
        F: Fn(&RowView<'_>) -> String + Send + Sync + 'static,
    {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    /// Whether a custom cell renderer is attached.
    pub fn has_renderer(&self) -> bool {
        self.renderer.is_some()
    }

    /// Displayed form of this column's cell in `row`.
    ///
    /// Falls back to the value's textual form, or an empty string when the record has no such
    /// field.
    pub fn render(&self, row: &RowView<'_>) -> String {
        match &self.renderer {
            Some(renderer) => renderer(row),
            None => row
                .get(&self.key)
                .map(|v| v.as_text().into_owned())
                .unwrap_or_default(),
        }
    }
}

impl fmt::Debug for ColumnDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("filterable", &self.filterable)
            .field("renderer_set", &self.renderer.is_some())
            .finish()
    }
}

/// Distinct textual values of column `key`, in first-seen order.
///
/// These are the options of the column's filter selector. Returns an empty list for unknown
/// columns.
pub fn distinct_values(dataset: &DataSet, key: &str) -> Vec<String> {
    let Some(idx) = dataset.schema.index_of(key) else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for row in 0..dataset.row_count() {
        let text = dataset.value(row, idx).as_text();
        if seen.insert(text.to_string()) {
            out.push(text.into_owned());
        }
    }
    out
}

/// One active filter, as shown in the chip row above the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    /// Filtered column key.
    pub key: String,
    /// Column header text.
    pub label: String,
    /// Selected value.
    pub value: String,
}

/// Chips for every non-empty filter on a described column, in column order.
///
/// The order follows the column descriptors, not the order in which filters were selected.
pub fn filter_chips(columns: &[ColumnDescriptor], filters: &FilterState) -> Vec<FilterChip> {
    columns
        .iter()
        .filter_map(|col| {
            let value = filters.get(&col.key).filter(|v| !v.is_empty())?;
            Some(FilterChip {
                key: col.key.clone(),
                label: col.label.clone(),
                value: value.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{distinct_values, filter_chips, ColumnDescriptor, FilterChip};
    use crate::processing::FilterState;
    use crate::types::{DataSet, DataType, Field, Schema, Value};

    fn sample_dataset() -> DataSet {
        let schema = Schema::new(vec![
            Field::new("id", DataType::Int64),
            Field::new("status", DataType::Utf8),
        ]);
        let rows = vec![
            vec![Value::Int64(1), Value::Utf8("Active".into())],
            vec![Value::Int64(2), Value::Utf8("Inactive".into())],
            vec![Value::Int64(3), Value::Utf8("Active".into())],
            vec![Value::Int64(4), Value::Null],
        ];
        DataSet::new(schema, rows)
    }

    #[test]
    fn render_uses_text_form_without_renderer() {
        let ds = sample_dataset();
        let col = ColumnDescriptor::new("id", "ID");
        assert_eq!(col.render(&ds.row(1).unwrap()), "2");
        assert!(!col.has_renderer());
        assert!(!col.filterable);
    }

    #[test]
    fn render_uses_custom_renderer() {
        let ds = sample_dataset();
        let col = ColumnDescriptor::new("status", "Status").with_renderer(|row| {
            match row.get("status") {
                Some(Value::Utf8(s)) if s == "Active" => "●".to_string(),
                _ => "○".to_string(),
            }
        });
        assert_eq!(col.render(&ds.row(0).unwrap()), "●");
        assert_eq!(col.render(&ds.row(1).unwrap()), "○");
    }

    #[test]
    fn render_unknown_key_is_empty() {
        let ds = sample_dataset();
        let col = ColumnDescriptor::new("email", "Email");
        assert_eq!(col.render(&ds.row(0).unwrap()), "");
    }

    #[test]
    fn distinct_values_keep_first_seen_order() {
        let ds = sample_dataset();
        assert_eq!(distinct_values(&ds, "status"), vec!["Active", "Inactive", ""]);
        assert_eq!(distinct_values(&ds, "id"), vec!["1", "2", "3", "4"]);
        assert!(distinct_values(&ds, "missing").is_empty());
    }

    #[test]
    fn chips_skip_empty_and_undescribed_filters() {
        let columns = vec![
            ColumnDescriptor::new("name", "Name").filterable(true),
            ColumnDescriptor::new("status", "Status").filterable(true),
        ];
        let mut filters = FilterState::new();
        filters.insert("status".into(), "Active".into());
        filters.insert("name".into(), String::new());
        filters.insert("age".into(), "25".into());

        assert_eq!(
            filter_chips(&columns, &filters),
            vec![FilterChip {
                key: "status".into(),
                label: "Status".into(),
                value: "Active".into(),
            }]
        );
    }
}
