//! Init command - write an example config file

use anyhow::{Context, Result};
use console::style;
use routegraph::config::CONFIG_FILE;
use std::path::Path;

const EXAMPLE_CONFIG: &str = "\
# routegraph.toml - dataset configuration
#
# File names are relative to the data directory.

[data]
airports = \"airports.csv\"
flights = \"flights.csv\"

[defaults]
# Keep airports served by more than this many distinct airlines.
threshold = 0
";

pub fn run(data_dir: &Path) -> Result<()> {
    let path = data_dir.join(CONFIG_FILE);
    if path.exists() {
        anyhow::bail!("{} already exists, not overwriting", path.display());
    }

    std::fs::write(&path, EXAMPLE_CONFIG)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("{} Config initialized at: {}", style("✅").bold(), path.display());
    println!("\nEdit it to point at your dataset, then run:");
    println!("  routegraph stats");
    Ok(())
}
