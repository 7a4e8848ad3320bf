//! The list-view controller: one façade over filter, sort, paginate, and
//! selection.
//!
//! The controller owns the record store and all view state, exposes the
//! mutation API the presentation layer calls, and derives the visible slice
//! on demand. The pipeline order is fixed: filter → sort → paginate.
//! Selection is independent of the pipeline and overlaid on the result.
//!
//! Everything is single-threaded and synchronous: each mutator runs to
//! completion, validates its input up front, and fires the optional
//! `on_change` callback exactly once on success. [`derive_view`] is a pure
//! function of the current state — calling it twice without an intervening
//! mutation yields structurally equal views.
//!
//! [`derive_view`]: ListView::derive_view
//!
//! # Example
//!
//! ```rust
//! use tabula::{FieldValue, FilterValue, ListView, ViewConfig, ViewRecord};
//!
//! #[derive(Debug, Clone, PartialEq)]
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
//!     .sortable(&["name"])
//!     .choice_filter("status", "status")
//!     .build()
//!     .unwrap();
//!
//! let records = vec![
//!     Candidate { id: 1, name: "Sarah Chen".into(), status: "hired".into() },
//!     Candidate { id: 2, name: "Michael Park".into(), status: "applied".into() },
//! ];
//!
//! let mut view = ListView::new(config, records);
//! view.set_filter("status", FilterValue::Choice("hired".into())).unwrap();
//! assert_eq!(view.derive_view().total_filtered, 1);
//! ```

use std::collections::HashSet;
use std::fmt;

use tracing::{debug, trace};

use crate::config::ViewConfig;
use crate::error::{Result, ViewError};
use crate::filter::{FilterSet, FilterValue};
use crate::paginate::{self, PageState};
use crate::record::ViewRecord;
use crate::select::Selection;
use crate::sort::{SortState, sort_records};
use crate::view::DerivedView;

/// Callback fired after every successful mutation.
///
/// A single synchronous notification, not an event stream: the rendering
/// layer re-derives on it.
pub type ChangeListener = Box<dyn FnMut() + Send>;

/// Controller state for one filterable, sortable, paginated list view.
///
/// Owned by the caller, one instance per view, torn down with it. There are
/// no module-level singletons and no hidden counters.
pub struct ListView<R: ViewRecord> {
    config: ViewConfig<R>,
    records: Vec<R>,
    filters: FilterSet,
    sort: Option<SortState>,
    page: PageState,
    selection: Selection<R::Id>,
    on_change: Option<ChangeListener>,
}

impl<R: ViewRecord> ListView<R> {
    /// Creates a controller over the given store with the configured
    /// defaults: no filters, the configured default sort (or none), page 1,
    /// empty selection.
    ///
    /// The configuration was validated at `build()`, so construction cannot
    /// fail.
    #[must_use]
    pub fn new(config: ViewConfig<R>, records: Vec<R>) -> Self {
        let page = PageState::new(config.default_page_size())
            .unwrap_or_default();
        let sort = config.default_sort().cloned();
        Self {
            config,
            records,
            filters: FilterSet::new(),
            sort,
            page,
            selection: Selection::new(),
            on_change: None,
        }
    }

    /// Registers the change callback, replacing any previous one.
    pub fn on_change(&mut self, listener: impl FnMut() + Send + 'static) {
        self.on_change = Some(Box::new(listener));
    }

    /// Returns the record store.
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Returns the active sort, if any.
    #[must_use]
    pub const fn sort_state(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Returns the active filter constraint under `name`.
    #[must_use]
    pub fn filter(&self, name: &str) -> Option<&FilterValue> {
        self.filters.get(name)
    }

    /// Replaces the record store wholesale.
    ///
    /// The swap is atomic from the controller's point of view: a subsequent
    /// derive sees either the old store or the new one, never a mix.
    /// Selected ids that left the store are pruned, and the current page is
    /// re-clamped.
    pub fn set_records(&mut self, records: Vec<R>) {
        debug!(count = records.len(), "replacing record store");
        self.records = records;
        let live: HashSet<R::Id> = self.records.iter().map(ViewRecord::id).collect();
        self.selection.prune(&live);
        let total = self.filtered_count();
        self.page.clamp(total);
        self.notify();
    }

    /// Stores or clears the named filter constraint.
    ///
    /// A value meaning "no constraint" (empty search string, the configured
    /// `all` sentinel, a fully open date range) clears the filter instead of
    /// storing it.
    ///
    /// # Errors
    ///
    /// [`ViewError::UnknownFilter`] if the configuration declares no filter
    /// under `name`, or the value shape does not fit the declared target.
    pub fn set_filter(&mut self, name: &str, value: FilterValue) -> Result<()> {
        let Some(target) = self.config.filter_target(name) else {
            return Err(ViewError::UnknownFilter(name.to_string()));
        };
        if !value_fits_target(&value, target) {
            return Err(ViewError::UnknownFilter(name.to_string()));
        }
        if value.is_unconstrained(self.config.all_sentinel()) {
            trace!(filter = name, "clearing filter via sentinel value");
            self.filters.clear(name);
        } else {
            trace!(filter = name, "setting filter");
            self.filters.set(name, value);
        }
        let total = self.filtered_count();
        self.page.clamp(total);
        self.notify();
        Ok(())
    }

    /// Clears the named filter constraint.
    ///
    /// # Errors
    ///
    /// [`ViewError::UnknownFilter`] if the configuration declares no filter
    /// under `name`.
    pub fn clear_filter(&mut self, name: &str) -> Result<()> {
        if self.config.filter_target(name).is_none() {
            return Err(ViewError::UnknownFilter(name.to_string()));
        }
        self.filters.clear(name);
        self.notify();
        Ok(())
    }

    /// Clears every filter constraint.
    pub fn reset_filters(&mut self) {
        self.filters.reset();
        self.notify();
    }

    /// Selects `key` as the sort column: same key flips direction, a new
    /// key sorts ascending.
    ///
    /// # Errors
    ///
    /// [`ViewError::UnknownSortKey`] if `key` is not configured as sortable.
    pub fn set_sort(&mut self, key: &str) -> Result<()> {
        if !self.config.is_sortable(key) {
            return Err(ViewError::UnknownSortKey(key.to_string()));
        }
        let next = SortState::toggled(self.sort.as_ref(), key);
        trace!(key, direction = ?next.direction, "sort changed");
        self.sort = Some(next);
        self.notify();
        Ok(())
    }

    /// Moves to `page`, clamping into range. Never errors: out-of-range
    /// pages are reachable through rapid clicks during a data refresh.
    pub fn set_page(&mut self, page: usize) {
        let total = self.filtered_count();
        self.page.set_page(page, total);
        self.notify();
    }

    /// Changes the page size and re-clamps the current page.
    ///
    /// # Errors
    ///
    /// [`ViewError::InvalidPageSize`] if `size` is zero.
    pub fn set_page_size(&mut self, size: usize) -> Result<()> {
        let total = self.filtered_count();
        self.page.set_page_size(size, total)?;
        self.notify();
        Ok(())
    }

    /// Toggles selection of one record id.
    pub fn toggle_select(&mut self, id: R::Id) {
        self.selection.toggle(id);
        self.notify();
    }

    /// Toggle-all over the current visible page: selects every id on the
    /// page unless all already are, in which case it deselects them.
    /// Selections on other pages are untouched.
    pub fn toggle_select_all_visible(&mut self) {
        let ids = self.visible_page_ids();
        self.selection.toggle_all(&ids);
        self.notify();
    }

    /// Empties the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.notify();
    }

    /// Returns whether the id is currently selected.
    #[must_use]
    pub fn is_selected(&self, id: &R::Id) -> bool {
        self.selection.is_selected(id)
    }

    /// Returns the number of selected records.
    #[must_use]
    pub fn selection_len(&self) -> usize {
        self.selection.len()
    }

    /// Returns the sorted id snapshot a bulk action should operate on.
    ///
    /// The snapshot is frozen at invocation time: if the store changes
    /// before the bulk action completes, the action still applies to the
    /// snapshot and the caller re-derives (and re-confirms if counts
    /// changed) afterwards.
    #[must_use]
    pub fn selection_snapshot(&self) -> Vec<R::Id> {
        self.selection.snapshot()
    }

    /// Derives the view: filter → sort → paginate, selection overlaid.
    ///
    /// Pure with respect to controller state; calling it twice with no
    /// intervening mutation returns structurally equal views.
    #[must_use]
    pub fn derive_view(&self) -> DerivedView<R> {
        let filtered: Vec<R> = self
            .records
            .iter()
            .filter(|r| self.filters.matches(&self.config, r))
            .cloned()
            .collect();

        let mut sorted = filtered.clone();
        if let Some(sort) = &self.sort {
            sort_records(
                &mut sorted,
                |r| self.config.value_of(&sort.key, r),
                sort.direction,
                self.config.status_ranks(),
            );
        }

        let total_filtered = sorted.len();
        let page_size = self.page.page_size();
        let total_pages = paginate::total_pages(total_filtered, page_size);
        let current_page = self.page.clamped_page(total_filtered);
        let (start, end) = paginate::slice_bounds(total_filtered, current_page, page_size);
        let visible_page: Vec<R> = sorted[start..end].to_vec();

        let selected_on_page: Vec<R::Id> = visible_page
            .iter()
            .map(ViewRecord::id)
            .filter(|id| self.selection.is_selected(id))
            .collect();

        trace!(
            total_filtered,
            total_pages,
            current_page,
            visible = visible_page.len(),
            "derived view"
        );

        DerivedView {
            filtered,
            sorted,
            visible_page,
            total_filtered,
            total_pages,
            current_page,
            page_size,
            selected_on_page,
        }
    }

    fn visible_page_ids(&self) -> Vec<R::Id> {
        self.derive_view().visible_ids()
    }

    fn filtered_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| self.filters.matches(&self.config, r))
            .count()
    }

    fn notify(&mut self) {
        if let Some(listener) = self.on_change.as_mut() {
            listener();
        }
    }
}

// Manual Debug: the change listener is an opaque closure.
impl<R: ViewRecord + fmt::Debug> fmt::Debug for ListView<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListView")
            .field("records", &self.records.len())
            .field("filters", &self.filters)
            .field("sort", &self.sort)
            .field("page", &self.page)
            .field("selection", &self.selection)
            .field("has_listener", &self.on_change.is_some())
            .finish_non_exhaustive()
    }
}

const fn value_fits_target(value: &FilterValue, target: &crate::filter::FilterTarget) -> bool {
    use crate::filter::FilterTarget;
    matches!(
        (value, target),
        (FilterValue::Search(_), FilterTarget::Search(_))
            | (FilterValue::Choice(_), FilterTarget::Choice(_))
            | (FilterValue::DateRange { .. }, FilterTarget::DateRange(_))
    )
}
