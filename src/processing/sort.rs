//! Single-column stable sorting.

use serde::{Deserialize, Serialize};

use crate::types::DataSet;

/// Sort order for the active sort column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    /// Largest first.
    #[serde(alias = "desc")]
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Which column (if any) the table is sorted by, and in which direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    /// Sort column key; `None` keeps input order.
    pub key: Option<String>,
    /// Sort direction; ignored while `key` is `None`.
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortState {
    /// Unsorted.
    pub fn none() -> Self {
        Self::default()
    }

    /// Sort by `key`, smallest first.
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            direction: SortDirection::Ascending,
        }
    }

    /// Sort by `key`, largest first.
    pub fn descending(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            direction: SortDirection::Descending,
        }
    }

    /// State after the header of column `key` is clicked.
    ///
    /// Clicking the current ascending column flips it to descending; any other click sorts
    /// `key` ascending.
    pub fn toggled(&self, key: &str) -> Self {
        match (&self.key, self.direction) {
            (Some(current), SortDirection::Ascending) if current == key => Self::descending(key),
            _ => Self::ascending(key),
        }
    }

    /// Direction applied to column `key`, if it is the sort column.
    pub fn direction_for(&self, key: &str) -> Option<SortDirection> {
        match &self.key {
            Some(current) if current == key => Some(self.direction),
            _ => None,
        }
    }
}

/// Stable-sort `indices` by the natural order of the sort column.
///
/// Returns `false` (leaving `indices` untouched) when `sort` has no key or the key is not a
/// dataset column.
pub fn sort_indices(dataset: &DataSet, indices: &mut [usize], sort: &SortState) -> bool {
    let Some(col) = sort
        .key
        .as_deref()
        .and_then(|key| dataset.schema.index_of(key))
    else {
        return false;
    };

    indices.sort_by(|&a, &b| {
        let ord = dataset.value(a, col).cmp_natural(dataset.value(b, col));
        match sort.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    true
}
