//! Free-text search across described columns.

use crate::columns::ColumnDescriptor;
use crate::types::DataSet;

/// Indices of rows where at least one described column contains `term`, case-insensitively.
///
/// Values are compared through their textual form. An empty term matches every row. Columns
/// whose key is not in the schema never match.
pub fn search(dataset: &DataSet, columns: &[ColumnDescriptor], term: &str) -> Vec<usize> {
    if term.is_empty() {
        return (0..dataset.row_count()).collect();
    }

    let needle = term.to_lowercase();
    let col_idxs: Vec<usize> = columns
        .iter()
        .filter_map(|col| dataset.schema.index_of(&col.key))
        .collect();

    (0..dataset.row_count())
        .filter(|&row| {
            col_idxs.iter().any(|&col| {
                dataset
                    .value(row, col)
                    .as_text()
                    .to_lowercase()
                    .contains(&needle)
            })
        })
        .collect()
}
