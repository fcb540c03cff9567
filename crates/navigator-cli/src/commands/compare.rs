//! Compare command: run BFS and Dijkstra between the same endpoints.

use std::io::Write;

use anyhow::{Context, Result};

use navigator_lib::{compare_algorithms, Graph};

use crate::commands::{describe_route_error, load_dataset, DataArgs};
use crate::output::OutputFormat;

/// Handle the compare subcommand.
pub fn handle_compare_command(
    data: &DataArgs,
    format: OutputFormat,
    from: &str,
    to: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let graph = load_dataset(data)?;
    write_comparison(&graph, format, from, to, out)
}

/// Compare both algorithms on `graph` and render the report.
pub fn write_comparison(
    graph: &Graph,
    format: OutputFormat,
    from: &str,
    to: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let comparison = compare_algorithms(graph, from, to)
        .map_err(|err| anyhow::anyhow!(describe_route_error(&err)))?;
    format
        .render_comparison(&comparison, out)
        .context("failed to write comparison")
}
