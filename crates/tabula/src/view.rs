//! The derived view: the computed slice the presentation layer renders.
//!
//! A [`DerivedView`] is recomputed from the record store plus
//! filter/sort/page/selection state on every call to
//! [`ListView::derive_view`](crate::ListView::derive_view). It is a plain
//! value — never mutated in place, safe to diff or compare structurally in
//! tests.

use crate::record::ViewRecord;

/// Snapshot of everything the rendering layer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView<R: ViewRecord> {
    /// Records passing the active filters, in store order.
    pub filtered: Vec<R>,
    /// Filtered records in the active sort order (store order when no sort
    /// is active).
    pub sorted: Vec<R>,
    /// The slice of `sorted` on the current page.
    pub visible_page: Vec<R>,
    /// Number of records passing the filters.
    pub total_filtered: usize,
    /// Number of pages, minimum 1 even when `total_filtered` is 0.
    pub total_pages: usize,
    /// Current page after clamping, 1-indexed.
    pub current_page: usize,
    /// Page size in effect.
    pub page_size: usize,
    /// Ids on the visible page that are selected, in page order.
    pub selected_on_page: Vec<R::Id>,
}

impl<R: ViewRecord> DerivedView<R> {
    /// Returns whether the filters matched nothing.
    ///
    /// An empty result is a valid view (an explicit empty state), distinct
    /// from a loading or error state in the presentation layer.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_filtered == 0
    }

    /// Returns the ids on the visible page, in page order.
    #[must_use]
    pub fn visible_ids(&self) -> Vec<R::Id> {
        self.visible_page.iter().map(ViewRecord::id).collect()
    }
}
