//! Flight data sources
//!
//! The graph builder consumes raw airports and route records through the
//! [`RouteDataSource`] trait so the construction logic stays independent of
//! where the data lives. The shipped implementation reads the CSV dataset
//! (`airports.csv` + `flights.csv`).

mod csv_source;

pub use csv_source::CsvDataSource;

use crate::models::{Airport, AirportId, Route};
use rustc_hash::FxHashMap;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading flight data
#[derive(Error, Debug)]
pub enum DataSourceError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type DataSourceResult<T> = Result<T, DataSourceError>;

/// Common interface for flight data sources
///
/// Contract: `load_all_airports` is total and idempotent; `airline_count`
/// is defined for every airport (an airport no airline serves has count 0);
/// `routes` returns every directional route record. Record direction is
/// informative only; edge identity in the built graph is undirected.
pub trait RouteDataSource {
    /// Load every known airport, keyed by id.
    fn load_all_airports(&self) -> DataSourceResult<FxHashMap<AirportId, Airport>>;

    /// Number of distinct airlines operating flights out of this airport.
    fn airline_count(&self, airport: &Airport) -> i64;

    /// All directional route records whose endpoints resolve in `airports`.
    fn routes(&self, airports: &FxHashMap<AirportId, Airport>) -> DataSourceResult<Vec<Route>>;
}
