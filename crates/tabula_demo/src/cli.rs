//! Command-line interface for `tabula_demo`.
//!
//! Defines the CLI contract using clap derive macros: every list-view
//! mutation the controller supports is reachable from a flag, so the demo
//! doubles as a quick way to poke at filter/sort/page behavior.
//!
//! # Examples
//!
//! ```bash
//! # Everyone, first page
//! tabula_demo
//!
//! # Hired candidates, sorted by name, second page of five
//! tabula_demo --status hired --sort name --page 2 --page-size 5
//!
//! # Text search across name and email
//! tabula_demo --search chen
//! ```

use std::path::PathBuf;

use clap::Parser;

/// Tabula demo - a filterable, sortable, paginated candidate list.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "tabula_demo",
    author,
    version,
    about = "Filterable, sortable, paginated candidate list driven by tabula"
)]
pub struct Cli {
    /// Case-insensitive text search across candidate name and email
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Filter by pipeline status (applied, interview, hired, rejected; "all" clears)
    #[arg(long)]
    pub status: Option<String>,

    /// Only candidates who applied on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub applied_from: Option<String>,

    /// Only candidates who applied on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub applied_to: Option<String>,

    /// Sort key (name, status, applied); repeat the same key to flip direction
    #[arg(long)]
    pub sort: Vec<String>,

    /// Page to show (1-indexed; out-of-range clamps)
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Records per page
    #[arg(long, default_value_t = 10, env = "TABULA_DEMO_PAGE_SIZE")]
    pub page_size: usize,

    /// Load candidates from a JSON file instead of the bundled dataset
    #[arg(long, env = "TABULA_DEMO_DATA")]
    pub data: Option<PathBuf>,

    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}
