//! View configuration: field accessors, filters, sort keys, defaults.
//!
//! The configuration is the single source of truth for what a list view can
//! do. It is supplied once at controller construction and is designed to be:
//!
//! - **Explicit**: every searchable, sortable, or filterable field is named
//!   up front; a typo fails at `build()`, not silently at render time.
//! - **Testable**: tests can construct one directly without any UI layer.
//!
//! # Example
//!
//! ```rust
//! use tabula::{FieldValue, ViewConfig, ViewRecord};
//!
//! #[derive(Clone)]
//! struct Candidate {
//!     id: u32,
//!     name: String,
//!     status: String,
//! }
//!
//! impl ViewRecord for Candidate {
//!     type Id = u32;
//!     fn id(&self) -> u32 {
//!         self.id
//!     }
//! }
//!
//! let config = ViewConfig::<Candidate>::builder()
//!     .field("name", |c| FieldValue::text(&c.name))
//!     .field("status", |c| FieldValue::status(&c.status))
//!     .searchable(&["name"])
//!     .sortable(&["name", "status"])
//!     .choice_filter("status", "status")
//!     .status_rank("Applied", 0)
//!     .status_rank("Hired", 1)
//!     .default_page_size(10)
//!     .build()
//!     .unwrap();
//! # let _ = config;
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{Result, ViewError};
use crate::filter::FilterTarget;
use crate::paginate::DEFAULT_PAGE_SIZE;
use crate::record::{FieldValue, ViewRecord};
use crate::sort::{SortDirection, SortState};

/// Filter name the search box registers under by default.
pub const SEARCH_FILTER: &str = "search";

/// Default catch-all choice that clears a categorical filter.
pub const ALL_SENTINEL: &str = "all";

/// A field accessor: extracts one typed value from a record.
pub type FieldAccessor<R> = Arc<dyn Fn(&R) -> FieldValue + Send + Sync>;

/// Immutable configuration for a list view.
#[derive(Clone)]
pub struct ViewConfig<R: ViewRecord> {
    fields: HashMap<String, FieldAccessor<R>>,
    sortable: Vec<String>,
    filters: HashMap<String, FilterTarget>,
    status_ranks: HashMap<String, usize>,
    default_page_size: usize,
    default_sort: Option<SortState>,
    all_sentinel: String,
}

impl<R: ViewRecord> ViewConfig<R> {
    /// Starts a configuration builder.
    #[must_use]
    pub fn builder() -> ViewConfigBuilder<R> {
        ViewConfigBuilder::new()
    }

    /// Evaluates the named field on a record.
    ///
    /// Unknown field names yield [`FieldValue::Missing`]; `build()` already
    /// validated every name the configuration itself references.
    #[must_use]
    pub fn value_of(&self, field: &str, record: &R) -> FieldValue {
        self.fields
            .get(field)
            .map_or(FieldValue::Missing, |accessor| accessor(record))
    }

    /// Returns the target of a declared filter.
    #[must_use]
    pub fn filter_target(&self, name: &str) -> Option<&FilterTarget> {
        self.filters.get(name)
    }

    /// Returns whether the field may be used as a sort key.
    #[must_use]
    pub fn is_sortable(&self, key: &str) -> bool {
        self.sortable.iter().any(|k| k == key)
    }

    /// Returns the status rank table for enum-ordered sorts.
    #[must_use]
    pub const fn status_ranks(&self) -> &HashMap<String, usize> {
        &self.status_ranks
    }

    /// Returns the configured default page size.
    #[must_use]
    pub const fn default_page_size(&self) -> usize {
        self.default_page_size
    }

    /// Returns the configured default sort, if any.
    #[must_use]
    pub const fn default_sort(&self) -> Option<&SortState> {
        self.default_sort.as_ref()
    }

    /// Returns the catch-all choice word that clears a categorical filter.
    #[must_use]
    pub fn all_sentinel(&self) -> &str {
        &self.all_sentinel
    }
}

impl<R: ViewRecord> fmt::Debug for ViewConfig<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields: Vec<&String> = self.fields.keys().collect();
        fields.sort();
        f.debug_struct("ViewConfig")
            .field("fields", &fields)
            .field("sortable", &self.sortable)
            .field("filters", &self.filters)
            .field("default_page_size", &self.default_page_size)
            .field("default_sort", &self.default_sort)
            .finish_non_exhaustive()
    }
}

/// Builder for [`ViewConfig`]. Validation happens in [`build`](Self::build).
pub struct ViewConfigBuilder<R: ViewRecord> {
    fields: HashMap<String, FieldAccessor<R>>,
    searchable: Vec<String>,
    search_filter_name: String,
    sortable: Vec<String>,
    choice_filters: Vec<(String, String)>,
    date_filters: Vec<(String, String)>,
    status_ranks: HashMap<String, usize>,
    default_page_size: usize,
    default_sort: Option<SortState>,
    all_sentinel: String,
}

impl<R: ViewRecord> Default for ViewConfigBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ViewRecord> ViewConfigBuilder<R> {
    /// Creates a builder with no fields and the documented defaults
    /// (page size 10, no default sort, `"all"` sentinel).
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
            searchable: Vec::new(),
            search_filter_name: SEARCH_FILTER.to_string(),
            sortable: Vec::new(),
            choice_filters: Vec::new(),
            date_filters: Vec::new(),
            status_ranks: HashMap::new(),
            default_page_size: DEFAULT_PAGE_SIZE,
            default_sort: None,
            all_sentinel: ALL_SENTINEL.to_string(),
        }
    }

    /// Registers a field accessor under `name`.
    #[must_use]
    pub fn field(
        mut self,
        name: impl Into<String>,
        accessor: impl Fn(&R) -> FieldValue + Send + Sync + 'static,
    ) -> Self {
        self.fields.insert(name.into(), Arc::new(accessor));
        self
    }

    /// Declares the fields the text search spans (OR across them). Also
    /// registers the search filter itself, under
    /// [`SEARCH_FILTER`] unless renamed via
    /// [`search_filter_name`](Self::search_filter_name).
    #[must_use]
    pub fn searchable(mut self, fields: &[&str]) -> Self {
        self.searchable = fields.iter().map(ToString::to_string).collect();
        self
    }

    /// Renames the search filter.
    #[must_use]
    pub fn search_filter_name(mut self, name: impl Into<String>) -> Self {
        self.search_filter_name = name.into();
        self
    }

    /// Declares which fields may be sort keys.
    #[must_use]
    pub fn sortable(mut self, fields: &[&str]) -> Self {
        self.sortable = fields.iter().map(ToString::to_string).collect();
        self
    }

    /// Declares a categorical equality filter named `name` over `field`.
    #[must_use]
    pub fn choice_filter(mut self, name: impl Into<String>, field: impl Into<String>) -> Self {
        self.choice_filters.push((name.into(), field.into()));
        self
    }

    /// Declares an inclusive date-range filter named `name` over `field`.
    #[must_use]
    pub fn date_filter(mut self, name: impl Into<String>, field: impl Into<String>) -> Self {
        self.date_filters.push((name.into(), field.into()));
        self
    }

    /// Assigns a sort rank to a status value. Lower ranks sort first
    /// ascending; unranked statuses sort after every ranked one.
    #[must_use]
    pub fn status_rank(mut self, value: impl Into<String>, rank: usize) -> Self {
        self.status_ranks.insert(value.into(), rank);
        self
    }

    /// Sets the default page size (default 10).
    #[must_use]
    pub fn default_page_size(mut self, size: usize) -> Self {
        self.default_page_size = size;
        self
    }

    /// Sets the sort applied at construction.
    #[must_use]
    pub fn default_sort(mut self, key: impl Into<String>, direction: SortDirection) -> Self {
        self.default_sort = Some(SortState {
            key: key.into(),
            direction,
        });
        self
    }

    /// Overrides the catch-all choice word (default `"all"`).
    #[must_use]
    pub fn all_sentinel(mut self, word: impl Into<String>) -> Self {
        self.all_sentinel = word.into();
        self
    }

    /// Validates and builds the configuration.
    ///
    /// # Errors
    ///
    /// - [`ViewError::UnknownField`] if a searchable, sortable, or filter
    ///   target field has no registered accessor, or the default sort key is
    ///   not sortable.
    /// - [`ViewError::InvalidPageSize`] if the default page size is zero.
    pub fn build(self) -> Result<ViewConfig<R>> {
        if self.default_page_size == 0 {
            return Err(ViewError::InvalidPageSize(0));
        }

        let known = |field: &String| -> Result<()> {
            if self.fields.contains_key(field) {
                Ok(())
            } else {
                Err(ViewError::UnknownField(field.clone()))
            }
        };

        for field in self.searchable.iter().chain(&self.sortable) {
            known(field)?;
        }

        let mut filters = HashMap::new();
        if !self.searchable.is_empty() {
            filters.insert(
                self.search_filter_name,
                FilterTarget::Search(self.searchable),
            );
        }
        for (name, field) in self.choice_filters {
            known(&field)?;
            filters.insert(name, FilterTarget::Choice(field));
        }
        for (name, field) in self.date_filters {
            known(&field)?;
            filters.insert(name, FilterTarget::DateRange(field));
        }

        if let Some(sort) = &self.default_sort {
            if !self.sortable.iter().any(|k| *k == sort.key) {
                return Err(ViewError::UnknownField(sort.key.clone()));
            }
        }

        Ok(ViewConfig {
            fields: self.fields,
            sortable: self.sortable,
            filters,
            status_ranks: self.status_ranks,
            default_page_size: self.default_page_size,
            default_sort: self.default_sort,
            all_sentinel: self.all_sentinel,
        })
    }
}
