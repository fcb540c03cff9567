//! Interactive shell: the line-oriented navigator loop.
//!
//! Commands are read one per line and matched case-insensitively. Route
//! commands prompt for the start and end locations on the following lines.
//! End of input behaves like `exit`.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use navigator_lib::{
    plan_route, resolve_node, Error as LibError, Graph, RouteAlgorithm, RouteRequest,
    RouteSummary,
};

use crate::commands::compare::write_comparison;
use crate::commands::locations::write_locations;
use crate::commands::{describe_route_error, load_dataset, DataArgs};
use crate::output::{render_route_text, OutputFormat};
use crate::terminal::ColorPalette;

const BANNER: &str = "=== Middle Earth Navigator ===";

const HELP: &str = "\
Available commands:
  help          - Show this help message
  locations     - Show all available locations
  bfs           - Find route using BFS algorithm
  dijkstra      - Find route using Dijkstra's algorithm
  compare       - Compare both algorithms for a route
  exit/quit     - Exit the program
";

/// Handle the `shell` subcommand on stdin/stdout.
pub fn handle_shell_command(data: &DataArgs) -> Result<()> {
    let graph = load_dataset(data)?;
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    writeln!(
        stdout,
        "Data loaded successfully: {} locations and {} paths.",
        graph.num_nodes(),
        graph.num_edges()
    )?;
    run_shell(&graph, stdin.lock(), &mut stdout, &ColorPalette::detect())
}

/// Run the interactive loop until `exit`, `quit` or end of input.
pub fn run_shell<R: BufRead, W: Write>(
    graph: &Graph,
    mut input: R,
    out: &mut W,
    palette: &ColorPalette,
) -> Result<()> {
    writeln!(out, "{}", palette.paint(palette.cyan, BANNER))?;
    writeln!(out, "Enter 'help' for a list of commands.")?;

    loop {
        let Some(command) = prompt(&mut input, out, "\nCommand: ")? else {
            break;
        };
        let command = command.to_lowercase();
        debug!(command = %command, "shell command");

        match command.as_str() {
            "exit" | "quit" => break,
            "help" => out.write_all(HELP.as_bytes())?,
            "locations" => write_locations(graph, OutputFormat::Text, palette, out)?,
            "bfs" | "dijkstra" | "compare" => {
                let Some((start, end)) = prompt_endpoints(&mut input, out)? else {
                    break;
                };
                match command.as_str() {
                    "bfs" => find_route(graph, &start, &end, RouteAlgorithm::Bfs, palette, out)?,
                    "dijkstra" => {
                        find_route(graph, &start, &end, RouteAlgorithm::Dijkstra, palette, out)?
                    }
                    _ => compare(graph, &start, &end, palette, out)?,
                }
            }
            _ => writeln!(out, "Unknown command. Type 'help' for a list of commands.")?,
        }
    }

    writeln!(out, "Thank you for using Middle Earth Navigator. Goodbye!")?;
    out.flush().context("failed to flush shell output")
}

/// Print `message` and read one line. `None` on end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> Result<Option<String>> {
    write!(out, "{message}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line).context("failed to read input")? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt_endpoints<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<Option<(String, String)>> {
    let Some(start) = prompt(input, out, "Enter start location: ")? else {
        return Ok(None);
    };
    let Some(end) = prompt(input, out, "Enter end location: ")? else {
        return Ok(None);
    };
    Ok(Some((start, end)))
}

/// Report an unknown location. Returns `false` when either name fails to resolve.
fn check_locations<W: Write>(
    graph: &Graph,
    names: [&str; 2],
    palette: &ColorPalette,
    out: &mut W,
) -> Result<bool> {
    for name in names {
        if let Err(err) = resolve_node(graph, name) {
            writeln!(
                out,
                "{} {}",
                palette.paint(palette.red, "Error:"),
                describe_route_error(&err)
            )?;
            return Ok(false);
        }
    }
    Ok(true)
}

fn find_route<W: Write>(
    graph: &Graph,
    start: &str,
    end: &str,
    algorithm: RouteAlgorithm,
    palette: &ColorPalette,
    out: &mut W,
) -> Result<()> {
    if !check_locations(graph, [start, end], palette, out)? {
        return Ok(());
    }

    let label = match algorithm {
        RouteAlgorithm::Bfs => "BFS",
        RouteAlgorithm::Dijkstra => "Dijkstra's",
    };
    writeln!(out, "\nFinding route using {label} algorithm...")?;

    let request = RouteRequest {
        start: start.to_string(),
        goal: end.to_string(),
        algorithm,
    };
    match plan_route(graph, &request) {
        Ok(plan) => {
            let summary = RouteSummary::from_plan(graph, &plan)?;
            render_route_text(&summary, palette, out)?;
        }
        Err(LibError::RouteNotFound { .. }) => writeln!(out, "No path found!")?,
        Err(err) => writeln!(
            out,
            "{} {}",
            palette.paint(palette.red, "Error:"),
            describe_route_error(&err)
        )?,
    }
    Ok(())
}

fn compare<W: Write>(
    graph: &Graph,
    start: &str,
    end: &str,
    palette: &ColorPalette,
    out: &mut W,
) -> Result<()> {
    if !check_locations(graph, [start, end], palette, out)? {
        return Ok(());
    }
    write_comparison(graph, OutputFormat::Text, start, end, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> Graph {
        let mut graph = Graph::from_edges([
            ("Shire", "Bree", 3),
            ("Bree", "Rivendell", 9),
            ("Shire", "Rivendell", 20),
        ]);
        graph.add_node("Valinor");
        graph
    }

    fn run(script: &str) -> String {
        let mut out = Vec::new();
        run_shell(&graph(), script.as_bytes(), &mut out, &ColorPalette::plain()).expect("shell");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn help_then_quit() {
        let output = run("HELP\nquit\n");
        assert!(output.starts_with("=== Middle Earth Navigator ===\n"));
        assert!(output.contains("  compare       - Compare both algorithms for a route\n"));
        assert!(output.ends_with("Thank you for using Middle Earth Navigator. Goodbye!\n"));
    }

    #[test]
    fn dijkstra_prompts_for_endpoints() {
        let output = run("dijkstra\nShire\nRivendell\nexit\n");
        assert!(output.contains("Enter start location: Enter end location: "));
        assert!(output.contains("Finding route using Dijkstra's algorithm..."));
        assert!(output.contains("Shire --(3)--> Bree --(9)--> Rivendell\n"));
        assert!(output.contains("Total journey distance: 12\n"));
    }

    #[test]
    fn bfs_takes_the_direct_edge() {
        let output = run("bfs\nShire\nRivendell\n");
        assert!(output.contains("Finding route using BFS algorithm..."));
        assert!(output.contains("Path found with 1 steps:\nShire --> Rivendell\n"));
    }

    #[test]
    fn unreachable_and_unknown_locations_keep_the_loop_running() {
        let output = run("bfs\nShire\nValinor\ncompare\nMordor\nShire\nlocations\n");
        assert!(output.contains("No path found!\n"));
        assert!(output.contains("Error: Location 'Mordor' does not exist."));
        assert!(output.contains("Bree\tRivendell\tShire\nValinor\n"));
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn unknown_command_is_reported() {
        let output = run("teleport\n");
        assert!(output.contains("Unknown command. Type 'help' for a list of commands.\n"));
    }

    #[test]
    fn end_of_input_inside_prompt_exits() {
        let output = run("compare\nShire\n");
        assert!(!output.contains("Comparing"));
        assert!(output.ends_with("Goodbye!\n"));
    }
}
