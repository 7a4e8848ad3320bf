//! `tabula_demo`: drive the list-view controller from the command line.
//!
//! Builds a [`tabula::ListView`] over the mock candidate dataset, applies
//! the filters/sort/page requested on the CLI, and prints the derived page —
//! the same derivation a dashboard table would render.

mod cli;
mod data;

use anyhow::Context;
use clap::Parser;
use tabula::{DerivedView, FilterValue, ListView};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::data::Candidate;

fn init_tracing(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_date(raw: &str) -> anyhow::Result<chrono::NaiveDate> {
    raw.parse()
        .with_context(|| format!("invalid date {raw:?}; expected YYYY-MM-DD"))
}

fn render(view: &DerivedView<Candidate>) {
    println!(
        "{} candidates — page {}/{} ({} per page)",
        view.total_filtered, view.current_page, view.total_pages, view.page_size
    );
    if view.is_empty() {
        println!("  (no candidates match the active filters)");
        return;
    }
    for candidate in &view.visible_page {
        let applied = candidate
            .applied
            .map_or_else(|| "—".to_string(), |d| d.format("%Y-%m-%d").to_string());
        println!(
            "  #{:<4} {:<16} {:<10} {:<12} {}",
            candidate.id, candidate.name, candidate.status, candidate.department, applied
        );
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    let records = match &cli.data {
        Some(path) => data::from_file(path)?,
        None => data::bundled()?,
    };
    info!(count = records.len(), "loaded candidate dataset");

    let config = data::view_config(cli.page_size)?;
    let mut view = ListView::new(config, records);

    if let Some(term) = &cli.search {
        view.set_filter("search", FilterValue::Search(term.clone()))?;
    }
    if let Some(status) = &cli.status {
        view.set_filter("status", FilterValue::Choice(status.clone()))?;
    }
    if cli.applied_from.is_some() || cli.applied_to.is_some() {
        let from = cli.applied_from.as_deref().map(parse_date).transpose()?;
        let to = cli.applied_to.as_deref().map(parse_date).transpose()?;
        view.set_filter("applied", FilterValue::DateRange { from, to })?;
    }
    for key in &cli.sort {
        debug!(key, "applying sort");
        view.set_sort(key)?;
    }
    view.set_page(cli.page);

    render(&view.derive_view());
    Ok(())
}
