//! The table widget controller.
//!
//! [`DataTable`] owns a dataset, its column descriptors, the [`TableOptions`] and one
//! [`TableState`]. Every user action (typing a search, picking a filter, clicking a header,
//! paging, changing the page size) goes through a method here, which updates the state and
//! re-runs the pipeline so the stored page is always valid for the new result: the table never
//! shows an empty page while matching rows exist.
//!
//! ```rust
//! use table_pipeline::sample;
//! use table_pipeline::table::DataTable;
//!
//! # fn main() -> Result<(), table_pipeline::TableError> {
//! let mut table = DataTable::new(sample::people(), sample::people_columns(), sample::people_options())?;
//! table.set_page_size(10);
//! table.go_to_page(5);
//! table.set_page_size(25);
//! assert_eq!(table.state().page, 4);
//! assert_eq!(table.page_label(), "Page 4 of 4");
//! # Ok(())
//! # }
//! ```

use crate::columns::{distinct_values, filter_chips, ColumnDescriptor, FilterChip};
use crate::config::TableOptions;
use crate::error::{TableError, TableResult};
use crate::processing::{paginate, process, process_observed, ProcessedResult, SortState};
use crate::state::TableState;
use crate::types::{DataSet, Schema};

/// A data table widget: dataset, columns, options and the state of one instance.
#[derive(Debug)]
pub struct DataTable {
    dataset: DataSet,
    columns: Vec<ColumnDescriptor>,
    options: TableOptions,
    state: TableState,
    total_matched: usize,
    total_pages: usize,
}

impl DataTable {
    /// Create a table on page 1 with the initial page size from `options`.
    ///
    /// Fails if `options` is invalid or a column key is not part of the dataset schema.
    pub fn new(
        dataset: DataSet,
        columns: Vec<ColumnDescriptor>,
        options: TableOptions,
    ) -> TableResult<Self> {
        options.validate()?;
        check_columns(&dataset.schema, &columns)?;

        let state = TableState::new(options.initial_page_size());
        let mut table = Self {
            dataset,
            columns,
            options,
            state,
            total_matched: 0,
            total_pages: 1,
        };
        table.refresh();
        Ok(table)
    }

    /// The backing dataset.
    pub fn dataset(&self) -> &DataSet {
        &self.dataset
    }

    /// Column descriptors, in display order.
    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    /// Options the table was built with.
    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Current widget state.
    pub fn state(&self) -> &TableState {
        &self.state
    }

    /// Rows passing the current search and filters.
    pub fn total_matched(&self) -> usize {
        self.total_matched
    }

    /// Page count for the current search, filters and page size.
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// The visible page for the current state.
    ///
    /// Reports to the configured observer, if any.
    pub fn view(&self) -> ProcessedResult {
        process_observed(
            &self.dataset,
            &self.columns,
            &self.state.query(),
            self.options.observer.as_deref(),
        )
    }

    /// Replace the dataset, keeping search, filters and sort.
    pub fn set_dataset(&mut self, dataset: DataSet) -> TableResult<()> {
        check_columns(&dataset.schema, &self.columns)?;
        self.dataset = dataset;
        self.state.expanded_row = None;
        self.refresh();
        Ok(())
    }

    /// Restore a previously saved state.
    ///
    /// A page size outside the allow-list falls back to the initial page size and filters on
    /// columns that are not filterable are dropped. The page is clamped to the restored result,
    /// and an expanded row past the visible page is cleared.
    pub fn restore_state(&mut self, mut state: TableState) {
        if !self.options.allows_page_size(state.page_size) {
            state.page_size = self.options.initial_page_size();
        }
        state.filters.retain(|key, _| self.is_filterable(key));
        self.state = state;
        self.refresh();
        if self
            .state
            .expanded_row
            .is_some_and(|position| position >= self.visible_len())
        {
            self.state.expanded_row = None;
        }
    }

    /// Set the free-text search term.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.state.search = term.into();
        self.state.expanded_row = None;
        self.refresh();
    }

    /// Select `value` in the filter of column `key`. An empty value clears the filter.
    ///
    /// Returns `false` (and changes nothing) if `key` is not a filterable column.
    pub fn set_filter(&mut self, key: &str, value: impl Into<String>) -> bool {
        if !self.is_filterable(key) {
            return false;
        }
        let value = value.into();
        if value.is_empty() {
            self.state.filters.remove(key);
        } else {
            self.state.filters.insert(key.to_string(), value);
        }
        self.state.expanded_row = None;
        self.refresh();
        true
    }

    /// Remove the filter on column `key`. Returns whether a filter was set.
    pub fn clear_filter(&mut self, key: &str) -> bool {
        let removed = self.state.filters.remove(key).is_some();
        if removed {
            self.state.expanded_row = None;
            self.refresh();
        }
        removed
    }

    /// Remove every filter.
    pub fn clear_filters(&mut self) {
        self.state.filters.clear();
        self.state.expanded_row = None;
        self.refresh();
    }

    /// Handle a click on the header of column `key`.
    ///
    /// The current ascending column flips to descending; anything else sorts `key` ascending.
    /// Returns the new sort, or `None` if `key` is not a described column.
    pub fn toggle_sort(&mut self, key: &str) -> Option<SortState> {
        self.column(key)?;
        self.state.sort = self.state.sort.toggled(key);
        self.state.expanded_row = None;
        self.refresh();
        Some(self.state.sort.clone())
    }

    /// Return to input order.
    pub fn clear_sort(&mut self) {
        self.state.sort = SortState::none();
        self.state.expanded_row = None;
        self.refresh();
    }

    /// Change the page size. Only allowed sizes are accepted; returns whether it applied.
    pub fn set_page_size(&mut self, size: usize) -> bool {
        if !self.options.allows_page_size(size) {
            return false;
        }
        self.state.page_size = size;
        self.state.expanded_row = None;
        self.refresh();
        true
    }

    /// Jump to `page`, clamped into `1..=total_pages`.
    pub fn go_to_page(&mut self, page: usize) {
        self.state.page = page;
        self.state.expanded_row = None;
        self.refresh();
    }

    /// Go to page 1.
    pub fn first_page(&mut self) {
        self.go_to_page(1);
    }

    /// Go back one page (stays on page 1).
    pub fn previous_page(&mut self) {
        self.go_to_page(self.state.page.saturating_sub(1));
    }

    /// Go forward one page (stays on the last page).
    pub fn next_page(&mut self) {
        self.go_to_page(self.state.page.saturating_add(1));
    }

    /// Go to the last page.
    pub fn last_page(&mut self) {
        self.go_to_page(self.total_pages);
    }

    /// Whether "first"/"previous" are enabled.
    pub fn can_go_previous(&self) -> bool {
        self.state.page > 1
    }

    /// Whether "next"/"last" are enabled.
    pub fn can_go_next(&self) -> bool {
        self.state.page < self.total_pages
    }

    /// Expand the visible row at `position`, or collapse it if it is already expanded.
    ///
    /// Returns the expanded position afterwards. Positions past the visible page are ignored.
    pub fn toggle_expanded(&mut self, position: usize) -> Option<usize> {
        if position < self.visible_len() {
            self.state.expanded_row = match self.state.expanded_row {
                Some(current) if current == position => None,
                _ => Some(position),
            };
        }
        self.state.expanded_row
    }

    /// Options of the filter selector for column `key`: distinct values in first-seen order.
    ///
    /// Empty for columns that are not filterable.
    pub fn filter_options(&self, key: &str) -> Vec<String> {
        if !self.is_filterable(key) {
            return Vec::new();
        }
        distinct_values(&self.dataset, key)
    }

    /// Chips for the active filters, in column order.
    pub fn active_filters(&self) -> Vec<FilterChip> {
        filter_chips(&self.columns, &self.state.filters)
    }

    /// `"Page {page} of {total_pages}"`.
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.state.page, self.total_pages)
    }

    fn column(&self, key: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.key == key)
    }

    fn is_filterable(&self, key: &str) -> bool {
        self.column(key).is_some_and(|c| c.filterable)
    }

    fn visible_len(&self) -> usize {
        paginate(self.total_matched, self.state.page, self.state.page_size)
            .range
            .len()
    }

    fn refresh(&mut self) {
        let result = process(&self.dataset, &self.columns, &self.state.query());
        self.state.page = result.page;
        self.state.page_size = result.page_size;
        self.total_matched = result.total_matched;
        self.total_pages = result.total_pages;
    }
}

fn check_columns(schema: &Schema, columns: &[ColumnDescriptor]) -> TableResult<()> {
    match columns.iter().find(|c| schema.index_of(&c.key).is_none()) {
        Some(missing) => Err(TableError::InvalidConfig {
            message: format!(
                "column '{}' is not in the dataset. fields={:?}",
                missing.key,
                schema.field_names().collect::<Vec<_>>()
            ),
        }),
        None => Ok(()),
    }
}
