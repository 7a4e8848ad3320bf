//! Record abstraction: stable identifiers and typed field values.
//!
//! The controller is generic over the caller's record type. It requires only
//! two things: a stable identifier ([`ViewRecord::id`]) and, per configured
//! field, an accessor closure returning a [`FieldValue`]. Everything else
//! about the record shape is opaque to the controller.
//!
//! # Optional fields
//!
//! Records with inconsistent optional fields (some have a value, some do not)
//! are represented explicitly: an accessor returns [`FieldValue::Missing`]
//! when the field is absent. A missing value never matches a filter
//! constraint and sorts after every present value, so optional fields need no
//! ad hoc presence checks at call sites.

use std::fmt;
use std::hash::Hash;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A record that can be driven through a list view.
///
/// The identifier must be stable for the lifetime of the record: selection
/// state, sort tie-breaking, and pruning all key off of it.
pub trait ViewRecord: Clone {
    /// Stable unique identifier type.
    type Id: Clone + Eq + Hash + Ord + fmt::Debug;

    /// Returns this record's identifier.
    fn id(&self) -> Self::Id;
}

/// A typed field value produced by a field accessor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Free text (names, emails, notes). Searched and sorted
    /// case-insensitively.
    Text(String),
    /// A categorical value (a status, a department). Filtered by exact
    /// equality and sorted by a caller-supplied rank table.
    Status(String),
    /// A calendar date. Filtered by inclusive ranges, sorted
    /// chronologically.
    Date(NaiveDate),
    /// A numeric value (amounts, counts).
    Number(f64),
    /// The field is absent on this record.
    Missing,
}

impl FieldValue {
    /// Builds a text value.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Builds a categorical value.
    #[must_use]
    pub fn status(value: impl Into<String>) -> Self {
        Self::Status(value.into())
    }

    /// Builds a date value.
    #[must_use]
    pub const fn date(value: NaiveDate) -> Self {
        Self::Date(value)
    }

    /// Builds a numeric value.
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Returns whether the field carries a value on this record.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        !matches!(self, Self::Missing)
    }

    /// Returns the value rendered as searchable text, or `None` for a
    /// missing field. Dates render in ISO form so a search like `2024-03`
    /// behaves predictably.
    #[must_use]
    pub fn search_text(&self) -> Option<String> {
        match self {
            Self::Text(s) | Self::Status(s) => Some(s.clone()),
            Self::Date(d) => Some(d.format("%Y-%m-%d").to_string()),
            Self::Number(n) => Some(n.to_string()),
            Self::Missing => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) | Self::Status(s) => write!(f, "{s}"),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::Number(n) => write!(f, "{n}"),
            Self::Missing => write!(f, "—"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence() {
        assert!(FieldValue::text("Sarah").is_present());
        assert!(FieldValue::number(42.0).is_present());
        assert!(!FieldValue::Missing.is_present());
    }

    #[test]
    fn test_search_text() {
        assert_eq!(
            FieldValue::text("Sarah Chen").search_text().as_deref(),
            Some("Sarah Chen")
        );
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(
            FieldValue::date(date).search_text().as_deref(),
            Some("2024-03-07")
        );
        assert_eq!(FieldValue::Missing.search_text(), None);
    }

    #[test]
    fn test_display_missing_placeholder() {
        assert_eq!(FieldValue::Missing.to_string(), "—");
    }
}
