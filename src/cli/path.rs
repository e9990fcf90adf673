//! Path command - breadth-first route between two airports

use super::Dataset;
use anyhow::Result;
use console::style;
use routegraph::graph::{find_path, RouteGraph};
use routegraph::models::AirportId;
use std::path::Path;

pub fn run(
    data_dir: &Path,
    origin: &str,
    destination: &str,
    threshold: Option<i64>,
    format: &str,
) -> Result<()> {
    let dataset = Dataset::open(data_dir)?;
    let (graph, threshold) = dataset.build(threshold)?;

    let origin_id = resolve_iata(&graph, origin, threshold)?;
    let destination_id = resolve_iata(&graph, destination, threshold)?;

    let path = find_path(&graph, origin_id, destination_id);

    if format == "json" {
        let hops = path.as_ref().map(|p| p.len().saturating_sub(1));
        let steps = path.as_ref().map(|p| {
            p.iter()
                .filter_map(|id| graph.airport(*id))
                .map(|a| serde_json::json!({"id": a.id, "iata": a.iata, "name": a.name}))
                .collect::<Vec<_>>()
        });
        let result = serde_json::json!({
            "origin": origin.to_uppercase(),
            "destination": destination.to_uppercase(),
            "threshold": threshold,
            "connected": path.is_some(),
            "hops": hops,
            "path": steps,
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    match path {
        Some(path) => {
            println!(
                "\n{} Route from {} to {} ({} hops, threshold {})\n",
                style("✈").bold(),
                style(origin.to_uppercase()).cyan(),
                style(destination.to_uppercase()).cyan(),
                path.len() - 1,
                threshold
            );
            for (i, id) in path.iter().enumerate() {
                // Path members are graph vertices by construction
                if let Some(airport) = graph.airport(*id) {
                    let arrow = if i == 0 { " " } else { "→" };
                    println!("  {} {}  {}", arrow, style(&airport.iata).cyan(), airport.name);
                }
            }
        }
        None => {
            println!(
                "\n{} {} and {} are not connected at threshold {}.",
                style("✗").red(),
                style(origin.to_uppercase()).cyan(),
                style(destination.to_uppercase()).cyan(),
                threshold
            );
            println!("  Try a lower --threshold to include more airports.");
        }
    }

    Ok(())
}

/// Resolve an IATA code against the built graph's vertex set.
fn resolve_iata(graph: &RouteGraph, code: &str, threshold: i64) -> Result<AirportId> {
    let code = code.to_uppercase();
    graph
        .airports()
        .find(|a| a.iata == code)
        .map(|a| a.id)
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Airport '{}' is not in the graph at threshold {}. \
                 Check the code, or lower the threshold.",
                code,
                threshold
            )
        })
}
