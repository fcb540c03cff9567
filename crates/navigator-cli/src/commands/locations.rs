//! Locations command: list every known location in sorted order.

use std::io::Write;

use anyhow::{Context, Result};

use navigator_lib::Graph;

use crate::commands::{load_dataset, DataArgs};
use crate::output::OutputFormat;
use crate::terminal::ColorPalette;

/// Handle the `locations` subcommand.
pub fn handle_locations_command(
    data: &DataArgs,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    let graph = load_dataset(data)?;
    write_locations(&graph, format, &ColorPalette::detect(), out)
}

/// Write the locations of `graph`. Node ids are already in lexical order.
pub fn write_locations(
    graph: &Graph,
    format: OutputFormat,
    palette: &ColorPalette,
    out: &mut dyn Write,
) -> Result<()> {
    let locations = graph.node_ids();
    format
        .render_locations(&locations, palette, out)
        .context("failed to write locations")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locations_are_sorted() {
        let graph = Graph::from_edges([("Shire", "Bree", 3), ("Anduin", "Bree", 4)]);
        let mut buffer = Vec::new();
        write_locations(&graph, OutputFormat::Json, &ColorPalette::plain(), &mut buffer)
            .expect("write");
        let names: Vec<String> = serde_json::from_slice(&buffer).expect("json");
        assert_eq!(names, ["Anduin", "Bree", "Shire"]);
    }
}
