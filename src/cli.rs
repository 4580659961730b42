//! Command-line surface.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::facet::FacetMode;

#[derive(Parser, Debug)]
#[command(
    name = "tps",
    version,
    about = "Faceted search over transition-pathway climate scenario metadata"
)]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug); RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Pathway data: a JSON array file or a directory of record files.
    #[arg(long, global = true, env = "TPS_DATA_DIR", value_name = "PATH")]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Filter records and print the matches.
    Search {
        /// Case-insensitive free-text search over all searchable fields.
        #[arg(long)]
        term: Option<String>,

        /// Pathway type token; repeatable. `__ABSENT__` selects records
        /// missing the field.
        #[arg(long = "pathway-type", value_name = "TOKEN")]
        pathway_type: Vec<String>,

        /// Geography token; repeatable.
        #[arg(long, value_name = "TOKEN")]
        geography: Vec<String>,

        /// Sector name token; repeatable.
        #[arg(long, value_name = "TOKEN")]
        sector: Vec<String>,

        /// Metric token; repeatable.
        #[arg(long, value_name = "TOKEN")]
        metric: Vec<String>,

        /// ANY (default) or ALL combination for geography selections.
        #[arg(long, value_name = "MODE")]
        geography_mode: Option<FacetMode>,

        /// ANY (default) or ALL combination for sector selections.
        #[arg(long, value_name = "MODE")]
        sector_mode: Option<FacetMode>,

        /// ANY (default) or ALL combination for metric selections.
        #[arg(long, value_name = "MODE")]
        metric_mode: Option<FacetMode>,

        /// Net-zero year token; repeatable. Conflicts with the range flags.
        #[arg(long, value_name = "TOKEN", conflicts_with_all = ["netzero_min", "netzero_max", "netzero_absent"])]
        netzero: Vec<String>,

        /// Net-zero year range lower bound (inclusive).
        #[arg(long, value_name = "YEAR")]
        netzero_min: Option<f64>,

        /// Net-zero year range upper bound (inclusive).
        #[arg(long, value_name = "YEAR")]
        netzero_max: Option<f64>,

        /// Also include records without a net-zero year.
        #[arg(long)]
        netzero_absent: bool,

        /// Temperature token; repeatable. Conflicts with the range flags.
        #[arg(long, value_name = "TOKEN", conflicts_with_all = ["temp_min", "temp_max", "temp_absent"])]
        temp: Vec<String>,

        /// Temperature range lower bound in °C (inclusive).
        #[arg(long, value_name = "DEG")]
        temp_min: Option<f64>,

        /// Temperature range upper bound in °C (inclusive).
        #[arg(long, value_name = "DEG")]
        temp_max: Option<f64>,

        /// Also include records without a temperature.
        #[arg(long)]
        temp_absent: bool,

        /// Machine-readable JSON output.
        #[arg(long)]
        json: bool,
    },

    /// Print the per-facet option lists derived from the data.
    Facets {
        /// Machine-readable JSON output.
        #[arg(long)]
        json: bool,
    },

    /// Browse records interactively.
    Browse,
}
