//! Faceted search over transition-pathway climate scenario metadata.
//!
//! The library exposes the Absent-aware facet model ([`facet`]), the record
//! model ([`model`]), the filter orchestrator ([`search`]), and the headless
//! filter UI state machines ([`ui`]). The `tps` binary wires them to a clap
//! CLI with `search`, `facets`, and `browse` subcommands.

pub mod cli;
pub mod config;
pub mod facet;
pub mod geo;
pub mod model;
pub mod search;
pub mod sources;
pub mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use colored::Colorize;
use tracing::warn;
use tracing_subscriber::EnvFilter;

pub use cli::{Cli, Commands};
use facet::RangeFilter;
use model::Pathway;
use search::{FacetOptions, NumericFacetFilter, SearchFilters, filter_pathways,
             global_facet_options};
use ui::INVERTED_RANGE_WARNING;

/// Keeps the rolling-file writer alive for the process lifetime.
pub type LogGuard = Option<tracing_appender::non_blocking::WorkerGuard>;

fn log_filter(verbose: u8) -> EnvFilter {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Stderr logging for one-shot commands; a rolling file while the browser
/// owns the terminal.
fn init_logging(verbose: u8, interactive: bool) -> LogGuard {
    if interactive {
        let dir = directories::ProjectDirs::from("io", "tps", "tps")
            .map(|dirs| dirs.cache_dir().join("logs"))
            .unwrap_or_else(|| std::env::temp_dir().join("tps-logs"));
        if std::fs::create_dir_all(&dir).is_err() {
            return None;
        }
        let appender = tracing_appender::rolling::daily(dir, "tps.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt()
            .with_env_filter(log_filter(verbose))
            .with_writer(writer)
            .with_ansi(false)
            .init();
        Some(guard)
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(log_filter(verbose))
            .with_writer(std::io::stderr)
            .init();
        None
    }
}

fn require_data(data: Option<PathBuf>) -> Result<PathBuf> {
    data.ok_or_else(|| {
        anyhow!("no data location configured; pass --data, set TPS_DATA_DIR, or add data_dir to config.toml")
    })
}

fn load_records(data: Option<PathBuf>) -> Result<Vec<Pathway>> {
    let path = require_data(data)?;
    sources::load_pathways(&path)
        .with_context(|| format!("loading pathway data from {}", path.display()))
}

fn numeric_selection(
    tokens: Vec<String>,
    min: Option<f64>,
    max: Option<f64>,
    include_absent: bool,
) -> Option<NumericFacetFilter> {
    if !tokens.is_empty() {
        return Some(NumericFacetFilter::Tokens(tokens));
    }
    let range = RangeFilter {
        min,
        max,
        include_absent,
    };
    if range.is_empty() {
        None
    } else {
        Some(NumericFacetFilter::Range(range))
    }
}

fn warn_if_inverted(filters: &SearchFilters) {
    for selection in [&filters.model_year_netzero, &filters.model_temp_increase] {
        if let Some(range) = selection.as_ref().and_then(NumericFacetFilter::range) {
            if range.is_inverted() {
                eprintln!("{} {}", "warning:".yellow().bold(), INVERTED_RANGE_WARNING);
            }
        }
    }
}

fn print_results(results: &[Pathway], total: usize) {
    println!(
        "{} of {} pathways match",
        results.len().to_string().bold(),
        total
    );
    for pathway in results {
        let year = pathway
            .model_year_netzero
            .map(|y| y.to_string())
            .unwrap_or_else(|| "–".to_string());
        let temp = pathway
            .model_temp_increase
            .map(|t| format!("{t}°C"))
            .unwrap_or_else(|| "–".to_string());
        let pathway_type = pathway.pathway_type.as_deref().unwrap_or("–");
        println!(
            "  {}  {}  {}",
            pathway.id.cyan(),
            pathway.name.full,
            format!("{pathway_type} · net zero {year} · {temp}").dimmed()
        );
    }
}

fn print_facet_section(name: &str, options: &[facet::LabeledOption]) {
    println!("{}", name.bold());
    for option in options {
        if option.label == option.value {
            println!("  {}", option.label);
        } else {
            println!("  {} ({})", option.label, option.value.dimmed());
        }
    }
}

fn print_facets(options: &FacetOptions) {
    print_facet_section("Pathway type", &options.pathway_type);
    print_facet_section("Net zero by", &options.model_year_netzero);
    print_facet_section("Temperature (°C)", &options.model_temp_increase);
    print_facet_section("Geography", &options.geography);
    print_facet_section("Sector", &options.sector);
    print_facet_section("Metric", &options.metric);
}

/// Dispatch a parsed CLI invocation.
pub fn run(cli: Cli) -> Result<()> {
    let interactive = matches!(cli.command, Commands::Browse);
    let _log_guard = init_logging(cli.verbose, interactive);

    let config = match config::AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            warn!(error = %err, "ignoring unreadable config");
            config::AppConfig::default()
        }
    };
    let data = config::resolve_data_path(cli.data, &config);

    match cli.command {
        Commands::Search {
            term,
            pathway_type,
            geography,
            sector,
            metric,
            geography_mode,
            sector_mode,
            metric_mode,
            netzero,
            netzero_min,
            netzero_max,
            netzero_absent,
            temp,
            temp_min,
            temp_max,
            temp_absent,
            json,
        } => {
            let pathways = load_records(data)?;
            let mut filters = SearchFilters {
                search_term: term,
                pathway_type,
                geography,
                sector,
                metric,
                model_year_netzero: numeric_selection(
                    netzero,
                    netzero_min,
                    netzero_max,
                    netzero_absent,
                ),
                model_temp_increase: numeric_selection(temp, temp_min, temp_max, temp_absent),
                ..SearchFilters::default()
            };
            if let Some(mode) = geography_mode {
                filters.modes.geography = mode;
            }
            if let Some(mode) = sector_mode {
                filters.modes.sector = mode;
            }
            if let Some(mode) = metric_mode {
                filters.modes.metric = mode;
            }

            warn_if_inverted(&filters);
            let results = filter_pathways(&pathways, &filters);
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                print_results(&results, pathways.len());
            }
            Ok(())
        }
        Commands::Facets { json } => {
            let pathways = load_records(data)?;
            let options = global_facet_options(&pathways);
            if json {
                println!("{}", serde_json::to_string_pretty(&options)?);
            } else {
                print_facets(&options);
            }
            Ok(())
        }
        Commands::Browse => {
            let pathways = load_records(data)?;
            ui::run_browser(pathways)
        }
    }
}
