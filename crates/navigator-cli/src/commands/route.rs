//! Route command handler for computing paths between locations.

use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;

use navigator_lib::{plan_route, Graph, RouteAlgorithm, RouteRequest, RouteSummary};

use crate::commands::{describe_route_error, load_dataset, DataArgs};
use crate::output::OutputFormat;
use crate::terminal::ColorPalette;

/// Algorithm choice exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AlgorithmArg {
    /// Fewest hops, ignoring weights.
    Bfs,
    /// Lowest total weight.
    #[default]
    Dijkstra,
}

impl From<AlgorithmArg> for RouteAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Bfs => RouteAlgorithm::Bfs,
            AlgorithmArg::Dijkstra => RouteAlgorithm::Dijkstra,
        }
    }
}

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting location name.
    pub from: String,
    /// Destination location name.
    pub to: String,
    /// Algorithm to use when planning the route.
    pub algorithm: RouteAlgorithm,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest {
            start: self.from.clone(),
            goal: self.to.clone(),
            algorithm: self.algorithm,
        }
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(
    data: &DataArgs,
    format: OutputFormat,
    args: &RouteCommandArgs,
    out: &mut dyn Write,
) -> Result<()> {
    let graph = load_dataset(data)?;
    write_route(&graph, format, &ColorPalette::detect(), args, out)
}

/// Plan the requested route on `graph` and render it.
pub fn write_route(
    graph: &Graph,
    format: OutputFormat,
    palette: &ColorPalette,
    args: &RouteCommandArgs,
    out: &mut dyn Write,
) -> Result<()> {
    let plan = plan_route(graph, &args.to_request())
        .map_err(|err| anyhow::anyhow!(describe_route_error(&err)))?;
    let summary = RouteSummary::from_plan(graph, &plan)
        .context("failed to build route summary for display")?;

    format
        .render_route(&summary, palette, out)
        .context("failed to write route")
}
