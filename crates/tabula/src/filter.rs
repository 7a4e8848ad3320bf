//! Named filter constraints, combined conjunctively.
//!
//! A filter set maps filter names to constraint values. A record passes when
//! it satisfies *every* active constraint (logical AND). Within a text
//! search, the configured searchable fields combine with OR: a record whose
//! name matches is shown even if its email does not.
//!
//! Setting a filter to its "no constraint" value — an empty search string,
//! the configured `all` sentinel for a choice, a date range open on both
//! ends — removes the constraint entirely, so an untouched dropdown never
//! filters anything out.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::ViewConfig;
use crate::record::{FieldValue, ViewRecord};

/// A single filter constraint value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterValue {
    /// Case-insensitive substring search across the configured searchable
    /// fields (OR across those fields).
    Search(String),
    /// Exact equality against one categorical field.
    Choice(String),
    /// Inclusive date range against one date field. Either bound may be
    /// open.
    DateRange {
        /// Earliest date to admit, inclusive.
        from: Option<NaiveDate>,
        /// Latest date to admit, inclusive.
        to: Option<NaiveDate>,
    },
}

impl FilterValue {
    /// Returns whether this value means "no constraint" and should clear
    /// the filter rather than store it. `all_sentinel` is the configured
    /// catch-all choice (conventionally `"all"`).
    #[must_use]
    pub fn is_unconstrained(&self, all_sentinel: &str) -> bool {
        match self {
            Self::Search(term) => term.trim().is_empty(),
            Self::Choice(choice) => choice.eq_ignore_ascii_case(all_sentinel),
            Self::DateRange { from, to } => from.is_none() && to.is_none(),
        }
    }
}

/// What a named filter applies to, declared by the view configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterTarget {
    /// Substring search over these fields.
    Search(Vec<String>),
    /// Equality against this categorical field.
    Choice(String),
    /// Inclusive range against this date field.
    DateRange(String),
}

/// The set of currently active filter constraints.
///
/// Ordered by name so that iteration (and anything derived from it) is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    active: BTreeMap<String, FilterValue>,
}

impl FilterSet {
    /// Creates an empty filter set (the identity filter: matches
    /// everything).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a constraint under `name`, replacing any previous one.
    ///
    /// Name validation against the configuration happens at the controller
    /// boundary; the set itself is plain storage.
    pub fn set(&mut self, name: impl Into<String>, value: FilterValue) {
        self.active.insert(name.into(), value);
    }

    /// Removes the constraint under `name`, if any.
    pub fn clear(&mut self, name: &str) {
        self.active.remove(name);
    }

    /// Removes every constraint.
    pub fn reset(&mut self) {
        self.active.clear();
    }

    /// Returns the active constraint under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FilterValue> {
        self.active.get(name)
    }

    /// Returns the number of active constraints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Returns whether no constraint is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Returns whether the record satisfies every active constraint.
    pub fn matches<R: ViewRecord>(&self, config: &ViewConfig<R>, record: &R) -> bool {
        self.active.iter().all(|(name, value)| {
            // Names were validated when the constraint was stored; a stale
            // entry with no target cannot constrain anything.
            config
                .filter_target(name)
                .is_none_or(|target| constraint_matches(value, target, config, record))
        })
    }
}

fn constraint_matches<R: ViewRecord>(
    value: &FilterValue,
    target: &FilterTarget,
    config: &ViewConfig<R>,
    record: &R,
) -> bool {
    match (value, target) {
        (FilterValue::Search(term), FilterTarget::Search(fields)) => {
            let needle = term.to_lowercase();
            fields.iter().any(|field| {
                config
                    .value_of(field, record)
                    .search_text()
                    .is_some_and(|text| text.to_lowercase().contains(&needle))
            })
        }
        (FilterValue::Choice(choice), FilterTarget::Choice(field)) => {
            match config.value_of(field, record) {
                FieldValue::Status(s) | FieldValue::Text(s) => s == *choice,
                _ => false,
            }
        }
        (FilterValue::DateRange { from, to }, FilterTarget::DateRange(field)) => {
            match config.value_of(field, record) {
                FieldValue::Date(d) => {
                    from.is_none_or(|f| d >= f) && to.is_none_or(|t| d <= t)
                }
                // A record without the date cannot fall inside a range.
                _ => false,
            }
        }
        // Value shape does not fit the declared target (e.g. a Choice value
        // sent to a search filter): nothing matches. The controller rejects
        // these before they are stored.
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconstrained_values() {
        assert!(FilterValue::Search(String::new()).is_unconstrained("all"));
        assert!(FilterValue::Search("   ".into()).is_unconstrained("all"));
        assert!(!FilterValue::Search("sarah".into()).is_unconstrained("all"));

        assert!(FilterValue::Choice("all".into()).is_unconstrained("all"));
        assert!(FilterValue::Choice("All".into()).is_unconstrained("all"));
        assert!(!FilterValue::Choice("hired".into()).is_unconstrained("all"));

        assert!(FilterValue::DateRange { from: None, to: None }.is_unconstrained("all"));
        let d = NaiveDate::from_ymd_opt(2024, 1, 1);
        assert!(!FilterValue::DateRange { from: d, to: None }.is_unconstrained("all"));
    }

    #[test]
    fn test_set_and_clear() {
        let mut filters = FilterSet::new();
        assert!(filters.is_empty());

        filters.set("status", FilterValue::Choice("hired".into()));
        assert_eq!(filters.len(), 1);
        assert!(filters.get("status").is_some());

        filters.clear("status");
        assert!(filters.is_empty());
    }

    #[test]
    fn test_reset() {
        let mut filters = FilterSet::new();
        filters.set("status", FilterValue::Choice("hired".into()));
        filters.set("search", FilterValue::Search("sarah".into()));
        filters.reset();
        assert!(filters.is_empty());
    }
}
