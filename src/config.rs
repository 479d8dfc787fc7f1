//! Table configuration.
//!
//! [`TableOptions`] is the programmatic configuration handed to [`crate::table::DataTable`].
//! [`TableConfig`] is its file form: a JSON document listing the columns and page sizes, e.g.
//!
//! ```json
//! {
//!   "columns": [
//!     { "key": "id", "label": "ID", "filterable": true },
//!     { "key": "name", "label": "Name" }
//!   ],
//!   "page_size_options": [5, 10, 25]
//! }
//! ```

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::columns::ColumnDescriptor;
use crate::error::{TableError, TableResult};
use crate::processing::ProcessingObserver;

/// Page sizes offered when none are configured.
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 20];

/// Options controlling a [`crate::table::DataTable`].
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct TableOptions {
    /// Allowed page sizes, in selector order.
    pub page_size_options: Vec<usize>,
    /// Initial page size; `None` picks the first allowed size.
    pub default_page_size: Option<usize>,
    /// Optional observer for processing events.
    pub observer: Option<Arc<dyn ProcessingObserver>>,
}

impl TableOptions {
    /// Options offering `sizes` as page sizes.
    pub fn with_page_sizes(sizes: impl Into<Vec<usize>>) -> Self {
        Self {
            page_size_options: sizes.into(),
            ..Self::default()
        }
    }

    /// Attach an observer for processing events.
    pub fn with_observer(mut self, observer: Arc<dyn ProcessingObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Page size a fresh table starts with.
    pub fn initial_page_size(&self) -> usize {
        self.default_page_size
            .or_else(|| self.page_size_options.first().copied())
            .unwrap_or(DEFAULT_PAGE_SIZE_OPTIONS[0])
    }

    /// Whether `size` is one of the allowed page sizes.
    pub fn allows_page_size(&self, size: usize) -> bool {
        self.page_size_options.contains(&size)
    }

    /// Check that the allow-list is non-empty, positive, and contains the default size.
    pub fn validate(&self) -> TableResult<()> {
        if self.page_size_options.is_empty() {
            return Err(TableError::InvalidConfig {
                message: "page_size_options must not be empty".to_string(),
            });
        }
        if self.page_size_options.contains(&0) {
            return Err(TableError::InvalidConfig {
                message: format!(
                    "page sizes must be > 0, got {:?}",
                    self.page_size_options
                ),
            });
        }
        if let Some(size) = self.default_page_size {
            if !self.allows_page_size(size) {
                return Err(TableError::InvalidConfig {
                    message: format!(
                        "default page size {size} is not one of {:?}",
                        self.page_size_options
                    ),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Debug for TableOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableOptions")
            .field("page_size_options", &self.page_size_options)
            .field("default_page_size", &self.default_page_size)
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            default_page_size: None,
            observer: None,
        }
    }
}

/// One column entry of a [`TableConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColumnSpec {
    /// Record field key.
    pub key: String,
    /// Header text; defaults to the key.
    #[serde(default)]
    pub label: Option<String>,
    /// Whether a filter selector is offered.
    #[serde(default)]
    pub filterable: bool,
}

impl From<ColumnSpec> for ColumnDescriptor {
    fn from(spec: ColumnSpec) -> Self {
        let label = spec.label.unwrap_or_else(|| spec.key.clone());
        ColumnDescriptor::new(spec.key, label).filterable(spec.filterable)
    }
}

/// File form of a table configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TableConfig {
    /// Columns in display order.
    pub columns: Vec<ColumnSpec>,
    /// Allowed page sizes.
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
    /// Initial page size.
    #[serde(default)]
    pub default_page_size: Option<usize>,
}

fn default_page_size_options() -> Vec<usize> {
    DEFAULT_PAGE_SIZE_OPTIONS.to_vec()
}

impl TableConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json_str(input: &str) -> TableResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.options().validate()?;
        Ok(config)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> TableResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Column descriptors for the configured columns.
    pub fn column_descriptors(&self) -> Vec<ColumnDescriptor> {
        self.columns.iter().cloned().map(ColumnDescriptor::from).collect()
    }

    /// Table options for the configured page sizes.
    pub fn options(&self) -> TableOptions {
        TableOptions {
            page_size_options: self.page_size_options.clone(),
            default_page_size: self.default_page_size,
            observer: None,
        }
    }
}
