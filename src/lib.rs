//! `table-pipeline` drives client-side data tables: free-text search, per-column filters,
//! sortable columns and pagination over an in-memory [`types::DataSet`].
//!
//! The heart of the crate is [`processing::process`], a pure and total function of
//! (dataset, columns, search term, filters, sort, page, page size) that yields the visible page
//! plus pagination metadata. [`table::DataTable`] wraps it with the per-widget state and the
//! rules a table UI needs (header clicks toggle sort direction, only allowed page sizes are
//! accepted, the page is re-clamped whenever the result shrinks).
//!
//! ## Pipeline
//!
//! 1. **Search**: keep rows where any described column contains the term (case-insensitive).
//! 2. **Filter**: keep rows whose value equals each non-empty filter (case-insensitive).
//! 3. **Sort**: stable sort on one column, numeric for numbers, lexicographic for strings.
//! 4. **Paginate**: clamp the page into `1..=total_pages` and slice.
//!
//! ## Quick example
//!
//! ```rust
//! use table_pipeline::sample;
//! use table_pipeline::table::DataTable;
//! use table_pipeline::types::Value;
//!
//! # fn main() -> Result<(), table_pipeline::TableError> {
//! let mut table = DataTable::new(sample::people(), sample::people_columns(), sample::people_options())?;
//!
//! table.set_search("john");
//! let page = table.view();
//! assert_eq!(page.total_matched, 1);
//! assert_eq!(page.row(0).unwrap().get("name"), Some(&Value::from("John")));
//!
//! table.set_search("");
//! table.set_filter("status", "Active");
//! table.toggle_sort("age");
//! assert_eq!(table.page_label(), "Page 1 of 11");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`processing`]: the pipeline and its individual steps
//! - [`table`]: the widget controller
//! - [`state`]: the serializable per-widget state
//! - [`columns`]: column descriptors, filter options and filter chips
//! - [`config`]: table options and JSON configuration files
//! - [`ingestion`]: loading datasets from CSV or JSON
//! - [`types`]: schema, values and datasets
//! - [`sample`]: the 100-record reference dataset
//! - [`error`]: error types for the fallible edges

pub mod columns;
pub mod config;
pub mod error;
pub mod ingestion;
pub mod processing;
pub mod sample;
pub mod state;
pub mod table;
pub mod types;

pub use error::{TableError, TableResult};
