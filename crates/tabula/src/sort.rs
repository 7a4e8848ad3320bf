//! Sort state and the field comparator.
//!
//! One sort key is active at a time. Selecting the active key again flips the
//! direction; selecting a different key replaces the sort and starts
//! ascending. Comparison dispatches on the field's [`FieldValue`] variant:
//! case-insensitive lexicographic for text, chronological for dates, numeric
//! for numbers, and rank-table order for categorical statuses (pipeline
//! stages like "Applied" < "Interview" are not alphabetical).
//!
//! Two rules keep the order total and reproducible across renders:
//!
//! - missing values sort after every present value, in either direction;
//! - equal primary keys fall back to identifier ascending (the tie-break is
//!   never flipped by the direction).

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::record::{FieldValue, ViewRecord};

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Applies this direction to an ascending ordering.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// The active sort: one key and a direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    /// Configured field name to sort by.
    pub key: String,
    /// Sort direction.
    pub direction: SortDirection,
}

impl SortState {
    /// Creates an ascending sort on the given key.
    #[must_use]
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Computes the next sort state after the caller selects `key`.
    ///
    /// Selecting the current key flips the direction; selecting any other
    /// key replaces the sort, ascending. This is the toggle behavior of a
    /// clickable column header.
    #[must_use]
    pub fn toggled(current: Option<&Self>, key: &str) -> Self {
        match current {
            Some(state) if state.key == key => Self {
                key: state.key.clone(),
                direction: state.direction.flipped(),
            },
            _ => Self::ascending(key),
        }
    }
}

// Cross-variant comparisons should not normally happen (one accessor feeds
// one sort key), but the order must stay total if a caller mixes variants.
const fn variant_rank(value: &FieldValue) -> u8 {
    match value {
        FieldValue::Text(_) => 0,
        FieldValue::Status(_) => 1,
        FieldValue::Date(_) => 2,
        FieldValue::Number(_) => 3,
        FieldValue::Missing => 4,
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    // Case-insensitive first, raw bytes as the deterministic tie-break.
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Compares two present field values under the given status rank table.
///
/// Statuses found in the rank table order by rank; unranked statuses sort
/// after every ranked one, alphabetically among themselves.
#[must_use]
pub fn compare_values(
    a: &FieldValue,
    b: &FieldValue,
    status_ranks: &HashMap<String, usize>,
) -> Ordering {
    match (a, b) {
        (FieldValue::Text(a), FieldValue::Text(b)) => compare_text(a, b),
        (FieldValue::Status(a), FieldValue::Status(b)) => {
            match (status_ranks.get(a), status_ranks.get(b)) {
                (Some(ra), Some(rb)) => ra.cmp(rb).then_with(|| compare_text(a, b)),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => compare_text(a, b),
            }
        }
        (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
        (FieldValue::Number(a), FieldValue::Number(b)) => {
            a.partial_cmp(b).unwrap_or(Ordering::Equal)
        }
        _ => variant_rank(a).cmp(&variant_rank(b)),
    }
}

/// Sorts records in place by the value the accessor yields, with the
/// documented missing-last and id-ascending tie-break rules.
pub fn sort_records<R, F>(
    records: &mut [R],
    accessor: F,
    direction: SortDirection,
    status_ranks: &HashMap<String, usize>,
) where
    R: ViewRecord,
    F: Fn(&R) -> FieldValue,
{
    records.sort_by(|a, b| {
        let va = accessor(a);
        let vb = accessor(b);
        let primary = match (va.is_present(), vb.is_present()) {
            // Missing values go last regardless of direction.
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => Ordering::Equal,
            (true, true) => direction.apply(compare_values(&va, &vb, status_ranks)),
        };
        primary.then_with(|| a.id().cmp(&b.id()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        name: &'static str,
        status: Option<&'static str>,
    }

    impl ViewRecord for Row {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, name: "Sarah", status: Some("Hired") },
            Row { id: 2, name: "Michael", status: Some("Applied") },
            Row { id: 3, name: "Emily", status: Some("Interview") },
            Row { id: 4, name: "David", status: None },
            Row { id: 5, name: "Lisa", status: Some("Applied") },
        ]
    }

    fn ranks() -> HashMap<String, usize> {
        [("Applied", 0), ("Interview", 1), ("Hired", 2)]
            .into_iter()
            .map(|(s, r)| (s.to_string(), r))
            .collect()
    }

    #[test]
    fn test_toggled_flips_same_key() {
        let state = SortState::ascending("name");
        let next = SortState::toggled(Some(&state), "name");
        assert_eq!(next.direction, SortDirection::Descending);

        let again = SortState::toggled(Some(&next), "name");
        assert_eq!(again.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_toggled_new_key_starts_ascending() {
        let state = SortState {
            key: "name".into(),
            direction: SortDirection::Descending,
        };
        let next = SortState::toggled(Some(&state), "status");
        assert_eq!(next.key, "status");
        assert_eq!(next.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_text_sort_case_insensitive() {
        let mut records = rows();
        sort_records(
            &mut records,
            |r| FieldValue::text(r.name),
            SortDirection::Ascending,
            &HashMap::new(),
        );
        let names: Vec<_> = records.iter().map(|r| r.name).collect();
        assert_eq!(names, ["David", "Emily", "Lisa", "Michael", "Sarah"]);
    }

    #[test]
    fn test_status_sort_uses_rank_table() {
        let mut records = rows();
        let ranks = ranks();
        sort_records(
            &mut records,
            |r| r.status.map_or(FieldValue::Missing, FieldValue::status),
            SortDirection::Ascending,
            &ranks,
        );
        let ids: Vec<_> = records.iter().map(|r| r.id).collect();
        // Applied (2, 5 by id), Interview (3), Hired (1), missing last (4).
        assert_eq!(ids, [2, 5, 3, 1, 4]);
    }

    #[test]
    fn test_missing_sorts_last_in_both_directions() {
        let mut records = rows();
        let ranks = ranks();
        sort_records(
            &mut records,
            |r| r.status.map_or(FieldValue::Missing, FieldValue::status),
            SortDirection::Descending,
            &ranks,
        );
        assert_eq!(records.last().map(|r| r.id), Some(4));
    }

    #[test]
    fn test_equal_keys_tie_break_by_id() {
        let mut records = vec![
            Row { id: 9, name: "same", status: None },
            Row { id: 2, name: "same", status: None },
            Row { id: 5, name: "same", status: None },
        ];
        sort_records(
            &mut records,
            |r| FieldValue::text(r.name),
            SortDirection::Descending,
            &HashMap::new(),
        );
        let ids: Vec<_> = records.iter().map(|r| r.id).collect();
        // Direction never flips the tie-break.
        assert_eq!(ids, [2, 5, 9]);
    }

    #[test]
    fn test_date_sort_chronological() {
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
        let a = FieldValue::date(d(2024, 1, 15));
        let b = FieldValue::date(d(2024, 3, 2));
        assert_eq!(compare_values(&a, &b, &HashMap::new()), Ordering::Less);
    }
}
