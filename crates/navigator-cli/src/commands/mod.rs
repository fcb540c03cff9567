// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. main.rs parses arguments and
// dispatches here; the shared dataset options live in this file.

pub mod compare;
pub mod locations;
pub mod route;
pub mod shell;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, warn};

use navigator_lib::{default_data_dir, load_graph, DatasetPaths, Error as LibError, Graph};

/// Directory searched for `vertices.txt`/`edges.csv` when nothing is configured.
const LOCAL_DATA_DIR: &str = "data";

/// Dataset location options shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct DataArgs {
    /// Directory holding `vertices.txt` and `edges.csv`.
    #[arg(long, env = "NAVIGATOR_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Override the vertices file (one location per line).
    #[arg(long, global = true)]
    pub vertices: Option<PathBuf>,

    /// Override the edges file (`from,to,weight` records).
    #[arg(long, global = true)]
    pub edges: Option<PathBuf>,
}

impl DataArgs {
    /// Resolve the dataset file locations.
    ///
    /// Explicit file overrides win, then `--data-dir`/`NAVIGATOR_DATA_DIR`,
    /// then `./data` if it exists, then the platform data directory.
    pub fn resolve_paths(&self) -> Result<DatasetPaths> {
        let dir = match &self.data_dir {
            Some(dir) => dir.clone(),
            None if Path::new(LOCAL_DATA_DIR).is_dir() => PathBuf::from(LOCAL_DATA_DIR),
            None => default_data_dir().context("failed to resolve a default data directory")?,
        };

        let mut paths = DatasetPaths::in_dir(&dir);
        if let Some(vertices) = &self.vertices {
            paths.vertices = vertices.clone();
        }
        if let Some(edges) = &self.edges {
            paths.edges = edges.clone();
        }
        Ok(paths)
    }
}

/// Resolve and load the configured dataset.
pub fn load_dataset(args: &DataArgs) -> Result<Graph> {
    let paths = args.resolve_paths()?;
    debug!(vertices = %paths.vertices.display(), edges = %paths.edges.display(), "loading dataset");

    let (graph, report) = load_graph(&paths).with_context(|| {
        format!(
            "failed to load dataset from {} and {}",
            paths.vertices.display(),
            paths.edges.display()
        )
    })?;

    if report.skipped_edges > 0 {
        warn!(
            skipped = report.skipped_edges,
            "some edges referenced unknown locations and were ignored"
        );
    }
    Ok(graph)
}

/// Turn library routing errors into the messages shown to users.
pub fn describe_route_error(err: &LibError) -> String {
    match err {
        LibError::UnknownNode { name, suggestions } => {
            let mut message = format!("Location '{}' does not exist.", name);
            match suggestions.as_slice() {
                [] => {}
                [only] => message.push_str(&format!(" Did you mean '{only}'?")),
                many => {
                    let joined = many
                        .iter()
                        .map(|s| format!("'{}'", s))
                        .collect::<Vec<_>>()
                        .join(", ");
                    message.push_str(&format!(" Did you mean one of: {}?", joined));
                }
            }
            message
        }
        LibError::RouteNotFound { start, goal } => {
            format!("No path found between {} and {}.", start, goal)
        }
        other => other.to_string(),
    }
}
