//! Breadth-first path finding
//!
//! Queue-driven BFS over the adjacency lists with a spanning-tree parent
//! map, followed by parent-pointer path reconstruction. The parent map is
//! allocated per call: consecutive queries never observe each other's
//! state.

use super::RouteGraph;
use crate::models::AirportId;
use rustc_hash::FxHashMap;
use std::collections::VecDeque;

/// Find a path between two airports of `graph`.
///
/// Runs a breadth-first traversal of the connected component containing
/// `source` to completion, then walks the spanning-tree parent map back
/// from `target`. The returned sequence is ordered source → target and each
/// consecutive pair is joined by a graph edge. Hop count is minimal as a
/// side effect of BFS ordering; edge weights are not consulted.
///
/// Returns `None` when no path exists: the endpoints lie in different
/// connected components, or one of them is not a vertex of the graph.
/// `find_path(g, v, v)` is `Some(vec![v])` for any vertex `v`.
pub fn find_path(
    graph: &RouteGraph,
    source: AirportId,
    target: AirportId,
) -> Option<Vec<AirportId>> {
    if !graph.contains(source) || !graph.contains(target) {
        return None;
    }

    // Spanning tree of the visit: discovered airport → the airport it was
    // first reached from. The root is recorded with no parent, which also
    // marks it visited.
    let mut parents: FxHashMap<AirportId, Option<AirportId>> = FxHashMap::default();
    let mut frontier: VecDeque<AirportId> = VecDeque::new();

    parents.insert(source, None);
    frontier.push_back(source);

    while let Some(current) = frontier.pop_front() {
        for &neighbor in graph.neighbors(current) {
            if !parents.contains_key(&neighbor) {
                parents.insert(neighbor, Some(current));
                frontier.push_back(neighbor);
            }
        }
    }

    if !parents.contains_key(&target) {
        return None;
    }

    // Walk target → source through the parent map, then flip to forward order.
    let mut path = Vec::new();
    let mut step = target;
    while step != source {
        path.push(step);
        match parents.get(&step) {
            Some(&Some(parent)) => step = parent,
            // Every visited non-root airport has a parent; a hole here means
            // the map was not built by this traversal.
            _ => return None,
        }
    }
    path.push(source);
    path.reverse();
    Some(path)
}
