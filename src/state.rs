//! Per-widget mutable state.

use serde::{Deserialize, Serialize};

use crate::processing::{FilterState, SortState, TableQuery, DEFAULT_PAGE_SIZE};

/// The state slots owned by one table widget instance.
///
/// [`crate::table::DataTable`] is the usual owner; it keeps `page` clamped after every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableState {
    /// Free-text search term.
    pub search: String,
    /// Per-column filter selections.
    pub filters: FilterState,
    /// Active sort.
    pub sort: SortState,
    /// Current 1-based page.
    pub page: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Position (within the visible page) of the expanded row, if any.
    pub expanded_row: Option<usize>,
}

impl TableState {
    /// Fresh state on page 1 with `page_size` rows per page.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }

    /// The processing query described by this state.
    pub fn query(&self) -> TableQuery {
        TableQuery {
            search: self.search.clone(),
            filters: self.filters.clone(),
            sort: self.sort.clone(),
            page: self.page,
            page_size: self.page_size,
        }
    }
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            search: String::new(),
            filters: FilterState::new(),
            sort: SortState::none(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            expanded_row: None,
        }
    }
}
