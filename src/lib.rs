//! Routegraph - Graph-powered flight route connectivity
//!
//! Builds an undirected, weighted airport graph from raw flight data and
//! answers connectivity queries over it. Airports are filtered by how many
//! distinct airlines serve them; parallel and opposite-direction routes
//! between the same pair collapse into a single delay-aggregated edge.

pub mod config;
pub mod datasource;
pub mod graph;
pub mod models;
