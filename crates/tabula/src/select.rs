//! Multi-selection that survives filter, sort, and page changes.
//!
//! Selection is a set of record identifiers, independent of the visible
//! slice: paging away and back does not lose it. It is kept a subset of the
//! live store by pruning whenever the store is replaced — a selected record
//! that disappears from the store is silently unselected.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

/// A set of selected record identifiers.
#[derive(Clone, PartialEq, Eq)]
pub struct Selection<Id: Eq + Hash> {
    selected: HashSet<Id>,
}

impl<Id: Eq + Hash> Default for Selection<Id> {
    fn default() -> Self {
        Self {
            selected: HashSet::new(),
        }
    }
}

impl<Id: fmt::Debug + Eq + Hash> fmt::Debug for Selection<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.selected.iter()).finish()
    }
}

impl<Id> Selection<Id>
where
    Id: Clone + Eq + Hash + Ord,
{
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles a single id in or out of the selection.
    pub fn toggle(&mut self, id: Id) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Toggle-all over the given ids (typically the ids on the visible
    /// page).
    ///
    /// If every id is already selected, all of them are deselected;
    /// otherwise all of them are selected. Ids outside `ids` — selections
    /// made on other pages — are left alone, so calling this twice in a row
    /// returns the selection to its original state.
    pub fn toggle_all(&mut self, ids: &[Id]) {
        if ids.is_empty() {
            return;
        }
        if ids.iter().all(|id| self.selected.contains(id)) {
            for id in ids {
                self.selected.remove(id);
            }
        } else {
            for id in ids {
                self.selected.insert(id.clone());
            }
        }
    }

    /// Empties the selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Returns whether the id is selected.
    #[must_use]
    pub fn is_selected(&self, id: &Id) -> bool {
        self.selected.contains(id)
    }

    /// Returns the number of selected ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Drops every selected id not present in `live`.
    ///
    /// Called when the record store is replaced; afterwards the selection is
    /// again a subset of the store.
    pub fn prune(&mut self, live: &HashSet<Id>) {
        self.selected.retain(|id| live.contains(id));
    }

    /// Returns the selected ids, sorted, as a frozen snapshot.
    ///
    /// Bulk actions operate on this snapshot: if the store changes between
    /// taking it and finishing the action, the action still applies to the
    /// snapshot and the caller re-derives afterwards. No automatic retry.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Id> {
        let mut ids: Vec<Id> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }
}
