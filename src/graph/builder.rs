//! Graph construction from raw flight data
//!
//! Two passes over the data source: filter airports by their distinct
//! airline count, then fold every route record whose endpoints both
//! survived into the aggregated edge set. Records touching a filtered-out
//! airport are dropped entirely; the built graph never holds a dangling
//! endpoint.

use super::RouteGraph;
use crate::datasource::{DataSourceResult, RouteDataSource};
use tracing::debug;

/// Builds [`RouteGraph`]s from a [`RouteDataSource`].
///
/// Each `build_graph` call produces a fresh, independent graph; rebuilding
/// with a different threshold does not touch previously returned graphs.
pub struct GraphBuilder<S: RouteDataSource> {
    source: S,
}

impl<S: RouteDataSource> GraphBuilder<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Build the aggregated graph of airports with airline count
    /// strictly greater than `threshold`.
    ///
    /// The threshold is unconstrained: a negative value keeps every airport,
    /// one above all counts yields an empty graph.
    pub fn build_graph(&self, threshold: i64) -> DataSourceResult<RouteGraph> {
        let airports = self.source.load_all_airports()?;

        let mut graph = RouteGraph::new();
        for airport in airports.values() {
            if self.source.airline_count(airport) > threshold {
                graph.add_airport(airport.clone());
            }
        }

        let routes = self.source.routes(&airports)?;
        let mut kept = 0usize;
        for route in &routes {
            if graph.contains(route.origin) && graph.contains(route.destination) {
                graph.accumulate_route(route.origin, route.destination, route.weight);
                kept += 1;
            }
        }

        debug!(
            threshold,
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            routes_seen = routes.len(),
            routes_kept = kept,
            "route graph built"
        );

        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::DataSourceResult;
    use crate::models::{Airport, AirportId, Route};
    use rustc_hash::FxHashMap;

    /// In-memory data source for exercising the builder without CSV files.
    struct MemorySource {
        airports: FxHashMap<AirportId, Airport>,
        counts: FxHashMap<AirportId, i64>,
        routes: Vec<Route>,
    }

    impl MemorySource {
        fn new(counts: &[(AirportId, i64)], routes: &[(AirportId, AirportId, f64)]) -> Self {
            let airports = counts
                .iter()
                .map(|&(id, _)| {
                    (
                        id,
                        Airport {
                            id,
                            iata: format!("A{id:02}"),
                            name: format!("Airport {id}"),
                            city: String::new(),
                            state: String::new(),
                            latitude: 0.0,
                            longitude: 0.0,
                        },
                    )
                })
                .collect();
            Self {
                airports,
                counts: counts.iter().copied().collect(),
                routes: routes
                    .iter()
                    .map(|&(o, d, w)| Route::new(o, d, w))
                    .collect(),
            }
        }
    }

    impl RouteDataSource for MemorySource {
        fn load_all_airports(&self) -> DataSourceResult<FxHashMap<AirportId, Airport>> {
            Ok(self.airports.clone())
        }

        fn airline_count(&self, airport: &Airport) -> i64 {
            self.counts.get(&airport.id).copied().unwrap_or(0)
        }

        fn routes(
            &self,
            _airports: &FxHashMap<AirportId, Airport>,
        ) -> DataSourceResult<Vec<Route>> {
            Ok(self.routes.clone())
        }
    }

    #[test]
    fn test_threshold_is_strict() {
        let builder = GraphBuilder::new(MemorySource::new(&[(1, 3), (2, 5), (3, 5)], &[]));

        let graph = builder.build_graph(5).unwrap();
        assert_eq!(graph.vertex_count(), 0);

        let graph = builder.build_graph(4).unwrap();
        assert_eq!(graph.vertex_count(), 2);
        assert!(!graph.contains(1));
        assert!(graph.contains(2) && graph.contains(3));
    }

    #[test]
    fn test_negative_threshold_keeps_everything() {
        let builder = GraphBuilder::new(MemorySource::new(&[(1, 0), (2, 1)], &[(1, 2, 4.0)]));
        let graph = builder.build_graph(-1).unwrap();
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_routes_to_filtered_airports_are_dropped() {
        let builder = GraphBuilder::new(MemorySource::new(
            &[(1, 5), (2, 5), (3, 1)],
            &[(1, 2, 2.0), (1, 3, 9.0), (3, 2, 9.0)],
        ));

        let graph = builder.build_graph(2).unwrap();
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_weight(1, 2), Some(2.0));
        assert_eq!(graph.edge_weight(1, 3), None);
    }

    #[test]
    fn test_empty_source_yields_empty_graph() {
        let builder = GraphBuilder::new(MemorySource::new(&[], &[]));
        let graph = builder.build_graph(0).unwrap();
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_rebuild_is_independent() {
        let builder = GraphBuilder::new(MemorySource::new(
            &[(1, 1), (2, 2), (3, 3)],
            &[(1, 2, 1.0), (2, 3, 1.0)],
        ));

        let loose = builder.build_graph(0).unwrap();
        let strict = builder.build_graph(2).unwrap();

        // The earlier graph is untouched by the rebuild
        assert_eq!(loose.vertex_count(), 3);
        assert_eq!(loose.edge_count(), 2);
        assert_eq!(strict.vertex_count(), 1);
        assert_eq!(strict.edge_count(), 0);
    }

    #[test]
    fn test_small_network_aggregation() {
        // A=1, B=2, C=3, D=4; A→B (2), B→A (3), B→C (1)
        let builder = GraphBuilder::new(MemorySource::new(
            &[(1, 9), (2, 9), (3, 9), (4, 9)],
            &[(1, 2, 2.0), (2, 1, 3.0), (2, 3, 1.0)],
        ));

        let graph = builder.build_graph(0).unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edge_weight(1, 2), Some(5.0));
        assert_eq!(graph.edge_weight(2, 3), Some(1.0));
        // D passed the filter but is isolated
        assert!(graph.contains(4));
        assert!(graph.neighbors(4).is_empty());
    }
}
