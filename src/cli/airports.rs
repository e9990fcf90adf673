//! Airports command - list the filtered vertex set

use super::Dataset;
use anyhow::Result;
use console::style;
use std::path::Path;

pub fn run(data_dir: &Path, threshold: Option<i64>, format: &str) -> Result<()> {
    let dataset = Dataset::open(data_dir)?;
    let (graph, threshold) = dataset.build(threshold)?;

    // The vertex set is unordered; sort by code for stable output
    let mut airports: Vec<_> = graph.airports().collect();
    airports.sort_by(|a, b| a.iata.cmp(&b.iata));

    if format == "json" {
        let list: Vec<_> = airports
            .iter()
            .map(|a| {
                serde_json::json!({
                    "id": a.id,
                    "iata": a.iata,
                    "name": a.name,
                    "city": a.city,
                    "state": a.state,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }

    println!(
        "\n{} Airports ({}, threshold {})\n",
        style("📊").bold(),
        airports.len(),
        threshold
    );
    for airport in &airports {
        println!(
            "  {}  {} ({}, {})",
            style(&airport.iata).cyan(),
            airport.name,
            airport.city,
            airport.state
        );
    }

    Ok(())
}
