//! Mock candidate dataset for the demo.
//!
//! Stands in for the real data-fetching collaborator: it returns the same
//! shaped records a backend would, loaded from JSON. The bundled dataset is
//! embedded at compile time; `--data` swaps in a file at runtime.

use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tabula::{FieldValue, ViewConfig, ViewRecord};

const BUNDLED: &str = include_str!("../data/candidates.json");

/// One candidate row, as the data collaborator would return it.
///
/// `applied` is optional on purpose: some source records carry it, some
/// don't, and the view layer treats absence explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub status: String,
    pub department: String,
    pub applied: Option<NaiveDate>,
}

impl ViewRecord for Candidate {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }
}

/// Loads the bundled dataset.
pub fn bundled() -> anyhow::Result<Vec<Candidate>> {
    serde_json::from_str(BUNDLED).context("bundled candidate dataset is malformed")
}

/// Loads candidates from a JSON file.
pub fn from_file(path: &Path) -> anyhow::Result<Vec<Candidate>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading candidate data from {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("parsing candidate data from {}", path.display()))
}

/// The view configuration every candidate table in the demo shares.
pub fn view_config(page_size: usize) -> tabula::Result<ViewConfig<Candidate>> {
    ViewConfig::<Candidate>::builder()
        .field("name", |c: &Candidate| FieldValue::text(&c.name))
        .field("email", |c: &Candidate| FieldValue::text(&c.email))
        .field("status", |c: &Candidate| FieldValue::status(&c.status))
        .field("department", |c: &Candidate| {
            FieldValue::status(&c.department)
        })
        .field("applied", |c: &Candidate| {
            c.applied.map_or(FieldValue::Missing, FieldValue::date)
        })
        .searchable(&["name", "email"])
        .sortable(&["name", "status", "department", "applied"])
        .choice_filter("status", "status")
        .choice_filter("department", "department")
        .date_filter("applied", "applied")
        .status_rank("applied", 0)
        .status_rank("interview", 1)
        .status_rank("hired", 2)
        .status_rank("rejected", 3)
        .default_page_size(page_size)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_dataset_parses() {
        let candidates = bundled().unwrap();
        assert!(!candidates.is_empty());
        // Ids must be unique; the controller keys everything off them.
        let mut ids: Vec<u64> = candidates.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), candidates.len());
    }

    #[test]
    fn test_view_config_builds() {
        assert!(view_config(10).is_ok());
    }
}
