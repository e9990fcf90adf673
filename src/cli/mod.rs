//! CLI command definitions and handlers

mod airports;
mod init;
mod path;
mod stats;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use routegraph::config::{self, ProjectConfig};
use routegraph::datasource::CsvDataSource;
use routegraph::graph::{GraphBuilder, RouteGraph};
use std::path::{Path, PathBuf};

/// Routegraph - Graph-powered flight route connectivity
///
/// Builds an undirected airport graph from CSV flight data, keeping only
/// airports served by more than a threshold number of distinct airlines and
/// collapsing all routes between a pair into one delay-aggregated edge.
#[derive(Parser, Debug)]
#[command(name = "routegraph")]
#[command(
    version,
    about = "Graph-powered flight route connectivity: filter airports by airline count and query paths between them",
    after_help = "\
Examples:
  routegraph stats                              Graph size at the default threshold
  routegraph stats --threshold 5                Only airports with more than 5 airlines
  routegraph airports --threshold 5             List the airports in that graph
  routegraph path ATL DEN                       Shortest-hop route between two airports
  routegraph path ATL DEN --format json         JSON output for scripting
  routegraph init                               Write an example routegraph.toml

Data files (airports.csv, flights.csv) are read from --data-dir."
)]
pub struct Cli {
    /// Path to the data directory (default: current directory)
    #[arg(long, global = true, default_value = ".")]
    pub data_dir: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a routegraph.toml config file with example settings
    Init,

    /// Show graph statistics (airport and edge counts at a threshold)
    Stats {
        /// Keep airports with more than this many distinct airlines
        #[arg(long, short = 't')]
        threshold: Option<i64>,

        /// Output format (table, json)
        #[arg(long, default_value = "table", value_parser = ["table", "json"])]
        format: String,
    },

    /// List the airports that survive the threshold filter
    Airports {
        /// Keep airports with more than this many distinct airlines
        #[arg(long, short = 't')]
        threshold: Option<i64>,

        /// Output format (table, json)
        #[arg(long, default_value = "table", value_parser = ["table", "json"])]
        format: String,
    },

    /// Find a route between two airports by IATA code
    #[command(after_help = "\
Examples:
  routegraph path ATL DEN                       Route at the default threshold
  routegraph path ATL DEN --threshold 5         Route through well-served airports only
  routegraph path ATL DEN --format json         JSON output for scripting")]
    Path {
        /// Origin airport IATA code
        origin: String,

        /// Destination airport IATA code
        destination: String,

        /// Keep airports with more than this many distinct airlines
        #[arg(long, short = 't')]
        threshold: Option<i64>,

        /// Output format (table, json)
        #[arg(long, default_value = "table", value_parser = ["table", "json"])]
        format: String,
    },
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init => init::run(&cli.data_dir),

        Commands::Stats { threshold, format } => stats::run(&cli.data_dir, threshold, &format),

        Commands::Airports { threshold, format } => {
            airports::run(&cli.data_dir, threshold, &format)
        }

        Commands::Path {
            origin,
            destination,
            threshold,
            format,
        } => path::run(&cli.data_dir, &origin, &destination, threshold, &format),
    }
}

/// A resolved data directory: its config plus a builder over its CSV files.
pub(crate) struct Dataset {
    pub config: ProjectConfig,
    pub builder: GraphBuilder<CsvDataSource>,
}

impl Dataset {
    /// Open the dataset under `data_dir`, honoring `routegraph.toml`.
    pub(crate) fn open(data_dir: &Path) -> Result<Self> {
        let data_dir = data_dir
            .canonicalize()
            .with_context(|| format!("Path does not exist: {}", data_dir.display()))?;

        let config = config::load_config(&data_dir);
        let airports_path = data_dir.join(&config.data.airports);
        let flights_path = data_dir.join(&config.data.flights);

        if !airports_path.exists() {
            anyhow::bail!(
                "No airport data found at {}. Expected {} and {} in the data directory.",
                airports_path.display(),
                config.data.airports,
                config.data.flights
            );
        }

        let source = CsvDataSource::open(&airports_path, &flights_path)
            .context("Failed to load flight dataset")?;

        Ok(Self {
            config,
            builder: GraphBuilder::new(source),
        })
    }

    /// Build the graph, falling back to the configured default threshold.
    pub(crate) fn build(&self, threshold: Option<i64>) -> Result<(RouteGraph, i64)> {
        let threshold = threshold.unwrap_or(self.config.defaults.threshold);
        let graph = self
            .builder
            .build_graph(threshold)
            .context("Failed to build route graph")?;
        Ok((graph, threshold))
    }
}
