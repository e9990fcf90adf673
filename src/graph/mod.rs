//! Airport route graph
//!
//! Construction and traversal of the undirected, delay-weighted airport
//! graph. Pure in-memory structures keyed by airport id; no graph library,
//! edge identity is a normalized unordered pair.

pub mod builder;
pub mod route_graph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use route_graph::RouteGraph;
pub use traversal::find_path;
