//! CSV-backed flight data source
//!
//! Reads the two-file dataset layout:
//!
//! - `airports.csv`: `id,iata,name,city,state,latitude,longitude`
//! - `flights.csv`: one row per flight leg,
//!   `origin_airport_id,destination_airport_id,airline,arrival_delay`
//!
//! Flight legs are aggregated at load time into one directional [`Route`]
//! per ordered (origin, destination) pair, and into per-airport distinct
//! airline counts. Legs referencing an airport id that is not in
//! `airports.csv` violate the dataset contract and are skipped with a
//! warning; the graph layer never observes them.

use super::{DataSourceError, DataSourceResult, RouteDataSource};
use crate::models::{Airport, AirportId, Route};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// One flight leg as recorded in `flights.csv`.
///
/// Arrival delay may be negative (early arrival); route weights clamp each
/// leg at zero because link-record weights are non-negative by contract.
#[derive(Debug, Deserialize)]
struct FlightRow {
    origin_airport_id: AirportId,
    destination_airport_id: AirportId,
    airline: String,
    arrival_delay: f64,
}

/// CSV dataset, fully materialized at open time.
#[derive(Debug)]
pub struct CsvDataSource {
    airports: FxHashMap<AirportId, Airport>,
    airline_counts: FxHashMap<AirportId, i64>,
    routes: Vec<Route>,
    skipped_rows: usize,
}

impl CsvDataSource {
    /// Open and materialize the dataset from the two CSV files.
    pub fn open(airports_path: &Path, flights_path: &Path) -> DataSourceResult<Self> {
        let airports = read_airports(airports_path)?;

        let mut airlines_by_airport: FxHashMap<AirportId, FxHashSet<String>> =
            FxHashMap::default();
        let mut delay_by_pair: FxHashMap<(AirportId, AirportId), f64> = FxHashMap::default();
        let mut skipped_rows = 0usize;

        for row in read_flights(flights_path)? {
            if !airports.contains_key(&row.origin_airport_id)
                || !airports.contains_key(&row.destination_airport_id)
            {
                warn!(
                    origin = row.origin_airport_id,
                    destination = row.destination_airport_id,
                    "flight row references unknown airport id, skipping"
                );
                skipped_rows += 1;
                continue;
            }

            airlines_by_airport
                .entry(row.origin_airport_id)
                .or_default()
                .insert(row.airline);

            *delay_by_pair
                .entry((row.origin_airport_id, row.destination_airport_id))
                .or_default() += row.arrival_delay.max(0.0);
        }

        let airline_counts = airlines_by_airport
            .into_iter()
            .map(|(id, airlines)| (id, airlines.len() as i64))
            .collect();

        let routes: Vec<Route> = delay_by_pair
            .into_iter()
            .map(|((origin, destination), weight)| Route::new(origin, destination, weight))
            .collect();

        debug!(
            airports = airports.len(),
            routes = routes.len(),
            skipped_rows,
            "flight dataset loaded"
        );

        Ok(Self {
            airports,
            airline_counts,
            routes,
            skipped_rows,
        })
    }

    /// Number of flight rows dropped for referencing unknown airports.
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }
}

impl RouteDataSource for CsvDataSource {
    fn load_all_airports(&self) -> DataSourceResult<FxHashMap<AirportId, Airport>> {
        Ok(self.airports.clone())
    }

    fn airline_count(&self, airport: &Airport) -> i64 {
        self.airline_counts.get(&airport.id).copied().unwrap_or(0)
    }

    fn routes(&self, airports: &FxHashMap<AirportId, Airport>) -> DataSourceResult<Vec<Route>> {
        Ok(self
            .routes
            .iter()
            .filter(|r| airports.contains_key(&r.origin) && airports.contains_key(&r.destination))
            .cloned()
            .collect())
    }
}

fn read_airports(path: &Path) -> DataSourceResult<FxHashMap<AirportId, Airport>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| csv_error(path, e))?;
    let mut airports = FxHashMap::default();
    for record in reader.deserialize::<Airport>() {
        let airport = record.map_err(|e| csv_error(path, e))?;
        airports.insert(airport.id, airport);
    }
    Ok(airports)
}

fn read_flights(path: &Path) -> DataSourceResult<Vec<FlightRow>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| csv_error(path, e))?;
    let mut rows = Vec::new();
    for record in reader.deserialize::<FlightRow>() {
        rows.push(record.map_err(|e| csv_error(path, e))?);
    }
    Ok(rows)
}

fn csv_error(path: &Path, source: csv::Error) -> DataSourceError {
    // csv wraps I/O failures; unwrap them so callers see the right variant
    if source.is_io_error() {
        if let csv::ErrorKind::Io(io) = source.into_kind() {
            return DataSourceError::Io {
                path: path.to_path_buf(),
                source: io,
            };
        }
        unreachable!("is_io_error guarantees an Io kind");
    }
    DataSourceError::Csv {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const AIRPORTS_CSV: &str = "\
id,iata,name,city,state,latitude,longitude
1,ATL,Hartsfield-Jackson,Atlanta,GA,33.63,-84.42
2,ORD,O'Hare,Chicago,IL,41.97,-87.90
3,DEN,Denver Intl,Denver,CO,39.85,-104.67
";

    fn write_dataset(flights: &str) -> (TempDir, CsvDataSource) {
        let dir = tempfile::tempdir().expect("temp dir");
        let airports_path = dir.path().join("airports.csv");
        let flights_path = dir.path().join("flights.csv");
        fs::write(&airports_path, AIRPORTS_CSV).expect("write airports");
        fs::write(&flights_path, flights).expect("write flights");
        let source = CsvDataSource::open(&airports_path, &flights_path).expect("open dataset");
        (dir, source)
    }

    #[test]
    fn test_legs_aggregate_per_direction() {
        let (_dir, source) = write_dataset(
            "\
origin_airport_id,destination_airport_id,airline,arrival_delay
1,2,DL,10.0
1,2,UA,5.0
2,1,AA,7.0
",
        );

        let airports = source.load_all_airports().unwrap();
        let mut routes = source.routes(&airports).unwrap();
        routes.sort_by_key(|r| (r.origin, r.destination));

        assert_eq!(
            routes,
            vec![Route::new(1, 2, 15.0), Route::new(2, 1, 7.0)]
        );
    }

    #[test]
    fn test_negative_delays_clamp_to_zero() {
        let (_dir, source) = write_dataset(
            "\
origin_airport_id,destination_airport_id,airline,arrival_delay
1,2,DL,-12.0
1,2,DL,4.0
",
        );

        let airports = source.load_all_airports().unwrap();
        let routes = source.routes(&airports).unwrap();
        assert_eq!(routes, vec![Route::new(1, 2, 4.0)]);
    }

    #[test]
    fn test_airline_counts_are_distinct_per_origin() {
        let (_dir, source) = write_dataset(
            "\
origin_airport_id,destination_airport_id,airline,arrival_delay
1,2,DL,1.0
1,3,DL,1.0
1,2,UA,1.0
2,1,DL,1.0
",
        );

        let airports = source.load_all_airports().unwrap();
        assert_eq!(source.airline_count(&airports[&1]), 2);
        assert_eq!(source.airline_count(&airports[&2]), 1);
        // DEN has no departures: metric is total, defined as 0
        assert_eq!(source.airline_count(&airports[&3]), 0);
    }

    #[test]
    fn test_unknown_airport_rows_are_skipped() {
        let (_dir, source) = write_dataset(
            "\
origin_airport_id,destination_airport_id,airline,arrival_delay
1,99,DL,10.0
99,2,UA,10.0
1,2,AA,3.0
",
        );

        assert_eq!(source.skipped_rows(), 2);
        let airports = source.load_all_airports().unwrap();
        let routes = source.routes(&airports).unwrap();
        assert_eq!(routes, vec![Route::new(1, 2, 3.0)]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let airports_path = dir.path().join("airports.csv");
        fs::write(&airports_path, AIRPORTS_CSV).expect("write airports");

        let err = CsvDataSource::open(&airports_path, &dir.path().join("missing.csv"))
            .expect_err("missing flights file");
        assert!(matches!(err, DataSourceError::Io { .. }));
    }

    #[test]
    fn test_malformed_row_is_csv_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let airports_path = dir.path().join("airports.csv");
        let flights_path = dir.path().join("flights.csv");
        fs::write(&airports_path, AIRPORTS_CSV).expect("write airports");
        fs::write(
            &flights_path,
            "origin_airport_id,destination_airport_id,airline,arrival_delay\n1,2,DL,not-a-number\n",
        )
        .expect("write flights");

        let err = CsvDataSource::open(&airports_path, &flights_path)
            .expect_err("malformed delay");
        assert!(matches!(err, DataSourceError::Csv { .. }));
    }
}
