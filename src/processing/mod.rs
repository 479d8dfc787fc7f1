//! The table processing pipeline: search → filter → sort → paginate.
//!
//! [`process`] is a pure, total function of the dataset, the column descriptors and a
//! [`TableQuery`]. It never mutates its inputs and never fails: unknown sort keys and filter
//! columns are ignored, out-of-range pages are clamped. Callers re-run it whenever any input
//! changes.
//!
//! Each step also works on its own, over row indices:
//!
//! - [`search()`]: case-insensitive substring match across described columns
//! - [`apply_filters()`]: case-insensitive exact match per column, AND-composed
//! - [`sort_indices()`]: stable single-column sort
//! - [`paginate()`]: page clamping and slicing
//!
//! ## Example
//!
//! ```rust
//! use table_pipeline::columns::ColumnDescriptor;
//! use table_pipeline::processing::{process, SortState, TableQuery};
//! use table_pipeline::types::{DataSet, DataType, Field, Schema, Value};
//!
//! let schema = Schema::new(vec![
//!     Field::new("name", DataType::Utf8),
//!     Field::new("age", DataType::Int64),
//! ]);
//! let ds = DataSet::new(
//!     schema,
//!     vec![
//!         vec![Value::from("John"), Value::Int64(25)],
//!         vec![Value::from("Jane"), Value::Int64(30)],
//!         vec![Value::from("Bob"), Value::Int64(32)],
//!     ],
//! );
//! let columns = vec![ColumnDescriptor::new("name", "Name"), ColumnDescriptor::new("age", "Age")];
//!
//! let query = TableQuery {
//!     search: "j".to_string(),
//!     sort: SortState::descending("age"),
//!     page_size: 1,
//!     ..TableQuery::default()
//! };
//! let result = process(&ds, &columns, &query);
//!
//! assert_eq!(result.total_matched, 2);
//! assert_eq!(result.total_pages, 2);
//! assert_eq!(result.rows.rows[0][0], Value::from("Jane"));
//! ```

pub mod filter;
mod observer;
pub mod paginate;
pub mod search;
pub mod sort;

use std::collections::BTreeMap;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::columns::ColumnDescriptor;
use crate::types::{DataSet, RowView, Value};

pub use filter::{active_filters, apply_filters};
pub use observer::{
    CompositeObserver, ProcessingEvent, ProcessingObserver, ProcessingStats, StdErrProcessingObserver,
};
pub use paginate::{paginate, total_pages, PageWindow};
pub use search::search;
pub use sort::{sort_indices, SortDirection, SortState};

/// Selected filter value per column key. Missing or empty entries impose no constraint.
pub type FilterState = BTreeMap<String, String>;

/// Page size used when a query does not name one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Everything the pipeline needs besides the data itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableQuery {
    /// Free-text search term.
    pub search: String,
    /// Per-column filter values.
    pub filters: FilterState,
    /// Sort column and direction.
    pub sort: SortState,
    /// Requested 1-based page.
    pub page: usize,
    /// Rows per page.
    pub page_size: usize,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            filters: FilterState::new(),
            sort: SortState::none(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// The visible page of a processed table plus pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedResult {
    /// Visible rows, in display order. Shares the source schema.
    pub rows: DataSet,
    /// Source-dataset index of each visible row.
    pub source_indices: Vec<usize>,
    /// Rows passing search and filters, independent of sort and page.
    pub total_matched: usize,
    /// `max(1, ceil(total_matched / page_size))`.
    pub total_pages: usize,
    /// Effective page after clamping.
    pub page: usize,
    /// Effective page size.
    pub page_size: usize,
}

impl ProcessedResult {
    /// Number of visible rows.
    pub fn len(&self) -> usize {
        self.rows.row_count()
    }

    /// Whether the page shows no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.rows.is_empty()
    }

    /// Visible row `position` as a keyed record.
    pub fn row(&self, position: usize) -> Option<RowView<'_>> {
        self.rows.row(position)
    }

    /// Values of column `key` across the visible rows.
    pub fn column(&self, key: &str) -> Vec<&Value> {
        match self.rows.schema.index_of(key) {
            Some(idx) => (0..self.len()).map(|row| self.rows.value(row, idx)).collect(),
            None => Vec::new(),
        }
    }

    /// Whether this is the first page.
    pub fn is_first_page(&self) -> bool {
        self.page <= 1
    }

    /// Whether this is the last page.
    pub fn is_last_page(&self) -> bool {
        self.page >= self.total_pages
    }
}

/// Run the full pipeline for `query`.
pub fn process(dataset: &DataSet, columns: &[ColumnDescriptor], query: &TableQuery) -> ProcessedResult {
    process_observed(dataset, columns, query, None)
}

/// Run the full pipeline for `query`, reporting each step to `observer`.
pub fn process_observed(
    dataset: &DataSet,
    columns: &[ColumnDescriptor],
    query: &TableQuery,
    observer: Option<&dyn ProcessingObserver>,
) -> ProcessedResult {
    let start = Instant::now();
    let emit = |event: ProcessingEvent| {
        if let Some(obs) = observer {
            obs.on_event(&event);
        }
    };
    emit(ProcessingEvent::RunStarted {
        rows: dataset.row_count(),
    });

    let matched = search(dataset, columns, &query.search);
    emit(ProcessingEvent::SearchApplied {
        term: query.search.clone(),
        matched: matched.len(),
    });

    let mut matched = apply_filters(dataset, matched, &query.filters);
    emit(ProcessingEvent::FiltersApplied {
        active: active_filters(&dataset.schema, &query.filters).len(),
        matched: matched.len(),
    });

    if !sort_indices(dataset, &mut matched, &query.sort) {
        if let Some(key) = &query.sort.key {
            emit(ProcessingEvent::SortSkipped { key: key.clone() });
        }
    }

    let window = paginate(matched.len(), query.page, query.page_size);
    if window.page != query.page {
        emit(ProcessingEvent::PageClamped {
            requested: query.page,
            effective: window.page,
        });
    }

    let source_indices = matched[window.range.clone()].to_vec();
    let result = ProcessedResult {
        rows: dataset.select_rows(&source_indices),
        source_indices,
        total_matched: matched.len(),
        total_pages: window.total_pages,
        page: window.page,
        page_size: window.page_size,
    };

    emit(ProcessingEvent::RunFinished {
        elapsed: start.elapsed(),
        stats: ProcessingStats {
            rows_scanned: dataset.row_count(),
            matched: result.total_matched,
            visible: result.len(),
            page: result.page,
            total_pages: result.total_pages,
        },
    });

    result
}
