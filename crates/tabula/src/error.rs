//! Error types for the list-view controller.
//!
//! Every variant here represents a wiring mistake in the caller (an unknown
//! filter name, a sort key that was never configured, a zero page size), not
//! a runtime condition. They are surfaced synchronously from the mutator that
//! detected them and are never swallowed. An empty filtered result is *not*
//! an error; it is a valid [`DerivedView`](crate::DerivedView) with an empty
//! page.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ViewError>;

/// Errors reported by the list-view controller and its configuration builder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// A filter name that the view configuration does not declare.
    ///
    /// Unknown names are rejected rather than ignored so that a typo in the
    /// presentation layer fails loudly instead of silently matching nothing.
    #[error("unknown filter {0:?}")]
    UnknownFilter(String),

    /// A sort key that is not in the configured sortable field set.
    #[error("unknown sort key {0:?}")]
    UnknownSortKey(String),

    /// A page size that is not a positive integer.
    #[error("invalid page size {0}; page size must be at least 1")]
    InvalidPageSize(usize),

    /// The configuration builder referenced a field with no registered
    /// accessor (searchable, sortable, or filter target).
    #[error("unknown field {0:?}; no accessor registered under that name")]
    UnknownField(String),
}
