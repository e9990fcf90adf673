//! Stats command - graph size at a threshold

use super::Dataset;
use anyhow::Result;
use console::style;
use std::path::Path;

pub fn run(data_dir: &Path, threshold: Option<i64>, format: &str) -> Result<()> {
    let dataset = Dataset::open(data_dir)?;
    let (graph, threshold) = dataset.build(threshold)?;

    if format == "json" {
        let stats = serde_json::json!({
            "threshold": threshold,
            "airports": graph.vertex_count(),
            "edges": graph.edge_count(),
        });
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("\n{} Route Graph Statistics\n", style("📊").bold());
    println!("  {}: {}", style("Threshold").cyan(), style(threshold).bold());
    println!(
        "  {}: {}",
        style("Airports").cyan(),
        style(graph.vertex_count()).bold()
    );
    println!(
        "  {}: {}",
        style("Edges").cyan(),
        style(graph.edge_count()).bold()
    );

    Ok(())
}
