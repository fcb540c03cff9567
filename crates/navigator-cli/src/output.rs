//! Output formatting for routes, comparisons and location listings.
//!
//! Every renderer writes to a caller-supplied [`Write`] so the interactive
//! shell and the tests can capture output.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use navigator_lib::{render_comparison, AlgorithmComparison, RouteSummary};

use crate::terminal::ColorPalette;

/// Number of location names printed per row.
const LOCATION_COLUMNS: usize = 3;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Render a planned route.
    pub fn render_route(
        self,
        summary: &RouteSummary,
        palette: &ColorPalette,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        match self {
            OutputFormat::Text => render_route_text(summary, palette, out),
            OutputFormat::Json => write_json(summary, out),
        }
    }

    /// Render the BFS/Dijkstra comparison report.
    pub fn render_comparison(
        self,
        comparison: &AlgorithmComparison,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        match self {
            OutputFormat::Text => out.write_all(render_comparison(comparison).as_bytes()),
            OutputFormat::Json => write_json(comparison, out),
        }
    }

    /// Render the sorted list of location names.
    pub fn render_locations(
        self,
        locations: &[String],
        palette: &ColorPalette,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        match self {
            OutputFormat::Text => render_locations_text(locations, palette, out),
            OutputFormat::Json => write_json(&locations, out),
        }
    }
}

/// Print the route in the `A --(w)--> B` style.
///
/// With a plain palette the text matches [`RouteSummary::render_plain`].
pub fn render_route_text(
    summary: &RouteSummary,
    palette: &ColorPalette,
    out: &mut dyn Write,
) -> io::Result<()> {
    writeln!(out, "Path found with {} steps:", summary.hops)?;

    let weighted = summary.algorithm.is_weighted();
    for step in &summary.steps {
        if step.index > 0 {
            match step.weight {
                Some(weight) if weighted => write!(
                    out,
                    "{} --({}{}{})--> {}",
                    palette.gray, palette.green, weight, palette.gray, palette.reset
                )?,
                _ => write!(out, "{} --> {}", palette.gray, palette.reset)?,
            }
        }
        write!(out, "{}", palette.paint(palette.white_bold, &step.id))?;
    }
    writeln!(out)?;

    if weighted {
        writeln!(
            out,
            "Total journey distance: {}",
            palette.paint(palette.green, &summary.total_weight.to_string())
        )?;
    }
    Ok(())
}

fn render_locations_text(
    locations: &[String],
    palette: &ColorPalette,
    out: &mut dyn Write,
) -> io::Result<()> {
    writeln!(out, "\n{}", palette.paint(palette.cyan, "Available Locations:"))?;
    writeln!(out, "-------------------")?;
    for row in locations.chunks(LOCATION_COLUMNS) {
        writeln!(out, "{}", row.join("\t"))?;
    }
    writeln!(out)
}

fn write_json<T: Serialize + ?Sized>(value: &T, out: &mut dyn Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use navigator_lib::{plan_route, Graph, RouteRequest};

    fn summary(request: RouteRequest) -> RouteSummary {
        let graph = Graph::from_edges([("A", "B", 2), ("B", "C", 3), ("A", "C", 9)]);
        let plan = plan_route(&graph, &request).expect("route exists");
        RouteSummary::from_plan(&graph, &plan).expect("summary")
    }

    fn render(format: OutputFormat, summary: &RouteSummary) -> String {
        let mut buffer = Vec::new();
        format
            .render_route(summary, &ColorPalette::plain(), &mut buffer)
            .expect("render");
        String::from_utf8(buffer).expect("utf8")
    }

    #[test]
    fn plain_text_matches_library_rendering() {
        let summary = summary(RouteRequest::dijkstra("A", "C"));
        assert_eq!(render(OutputFormat::Text, &summary), summary.render_plain());
    }

    #[test]
    fn json_route_includes_steps() {
        let summary = summary(RouteRequest::bfs("A", "C"));
        let value: serde_json::Value =
            serde_json::from_str(&render(OutputFormat::Json, &summary)).expect("json");
        assert_eq!(value["algorithm"], "bfs");
        assert_eq!(value["hops"], 1);
        assert_eq!(value["total_weight"], 9);
        assert_eq!(value["steps"][1]["id"], "C");
    }

    #[test]
    fn locations_are_printed_three_per_row() {
        let names: Vec<String> = ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect();
        let mut buffer = Vec::new();
        OutputFormat::Text
            .render_locations(&names, &ColorPalette::plain(), &mut buffer)
            .expect("render");
        assert_eq!(
            String::from_utf8(buffer).expect("utf8"),
            "\nAvailable Locations:\n-------------------\nA\tB\tC\nD\n\n"
        );
    }
}
