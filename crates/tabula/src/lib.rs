#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Tabula
//!
//! A presentation-agnostic list-view controller: the filter → sort →
//! paginate pipeline (with overlaid multi-selection) behind every data
//! table — candidate databases, application tables, payout and transaction
//! histories.
//!
//! Tabula owns state and derivation only. It renders nothing, fetches
//! nothing, and persists nothing: the caller supplies the records and a
//! [`ViewConfig`] describing how to read them, and consumes the
//! [`DerivedView`] each frame.
//!
//! Modules:
//! - **record** - The [`ViewRecord`] trait and typed [`FieldValue`]s
//! - **config** - Field accessors, filter/sort declarations, defaults
//! - **filter** - Named constraints combined conjunctively
//! - **sort** - One active key, toggleable direction, stable tie-break
//! - **paginate** - 1-indexed pages with clamping, never "page 0"
//! - **select** - Id-set selection that survives filter/sort/page changes
//! - **controller** - The [`ListView`] façade tying it all together
//!
//! ## Example
//!
//! ```rust
//! use tabula::{FieldValue, FilterValue, ListView, ViewConfig, ViewRecord};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Application {
//!     id: u64,
//!     applicant: String,
//!     status: String,
//! }
//!
//! impl ViewRecord for Application {
//!     type Id = u64;
//!     fn id(&self) -> u64 {
//!         self.id
//!     }
//! }
//!
//! let config = ViewConfig::<Application>::builder()
//!     .field("applicant", |a| FieldValue::text(&a.applicant))
//!     .field("status", |a| FieldValue::status(&a.status))
//!     .searchable(&["applicant"])
//!     .sortable(&["applicant"])
//!     .choice_filter("status", "status")
//!     .build()?;
//!
//! let mut view = ListView::new(config, vec![
//!     Application { id: 1, applicant: "Sarah Chen".into(), status: "interview".into() },
//!     Application { id: 2, applicant: "David Kim".into(), status: "applied".into() },
//! ]);
//!
//! view.set_sort("applicant")?;
//! let derived = view.derive_view();
//! assert_eq!(derived.visible_page[0].applicant, "David Kim");
//! # Ok::<(), tabula::ViewError>(())
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod paginate;
pub mod record;
pub mod select;
pub mod sort;
pub mod view;

pub use config::{ALL_SENTINEL, FieldAccessor, SEARCH_FILTER, ViewConfig, ViewConfigBuilder};
pub use controller::{ChangeListener, ListView};
pub use error::{Result, ViewError};
pub use filter::{FilterSet, FilterTarget, FilterValue};
pub use paginate::{DEFAULT_PAGE_SIZE, PageState};
pub use record::{FieldValue, ViewRecord};
pub use select::Selection;
pub use sort::{SortDirection, SortState};
pub use view::DerivedView;
