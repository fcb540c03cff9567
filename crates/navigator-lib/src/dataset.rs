//! Loading graphs from the vertices/edges text format.
//!
//! A dataset is a pair of files:
//!
//! - a vertices file with one location name per line, and
//! - an edges file with `from,to,weight` records and no header row.
//!
//! Names are trimmed before they reach the [`Graph`]. Edges that reference
//! unknown locations are skipped with a warning rather than failing the load.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use directories::ProjectDirs;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::node::Weight;

/// Conventional file name of the vertices file inside a data directory.
pub const VERTICES_FILENAME: &str = "vertices.txt";

/// Conventional file name of the edges file inside a data directory.
pub const EDGES_FILENAME: &str = "edges.csv";

/// Locations of the two files that make up a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub vertices: PathBuf,
    pub edges: PathBuf,
}

impl DatasetPaths {
    /// Use the conventional file names inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            vertices: dir.join(VERTICES_FILENAME),
            edges: dir.join(EDGES_FILENAME),
        }
    }

    /// Fail with [`Error::DatasetNotFound`] for the first missing file.
    pub fn ensure_exists(&self) -> Result<()> {
        for path in [&self.vertices, &self.edges] {
            if !path.is_file() {
                return Err(Error::DatasetNotFound { path: path.clone() });
            }
        }
        Ok(())
    }
}

/// Resolve the platform data directory used when no directory is configured.
pub fn default_data_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("org", "navigator", "navigator")
        .ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Counters describing what a load added to the graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub nodes: usize,
    pub edges: usize,
    /// Records naming an already-connected pair; the first weight is kept.
    pub duplicate_edges: usize,
    /// Records naming a location missing from the vertices file.
    pub skipped_edges: usize,
}

/// Load a dataset from disk into a fresh graph.
pub fn load_graph(paths: &DatasetPaths) -> Result<(Graph, LoadReport)> {
    paths.ensure_exists()?;

    let mut graph = Graph::new();
    let mut report = LoadReport::default();

    let vertices = BufReader::new(File::open(&paths.vertices)?);
    report.nodes = load_vertices(&mut graph, vertices)?;

    let edges = File::open(&paths.edges)?;
    load_edges(&mut graph, edges, &mut report)?;

    debug!(
        vertices = %paths.vertices.display(),
        edges = %paths.edges.display(),
        nodes = graph.num_nodes(),
        edge_count = graph.num_edges(),
        skipped = report.skipped_edges,
        "loaded dataset"
    );
    Ok((graph, report))
}

/// Add one node per non-empty line of `reader`. Returns how many were new.
pub fn load_vertices<R: BufRead>(graph: &mut Graph, reader: R) -> Result<usize> {
    let mut added = 0;
    for line in reader.lines() {
        let line = line?;
        let name = line.trim();
        if name.is_empty() {
            continue;
        }
        if graph.add_node(name) {
            added += 1;
        }
    }
    Ok(added)
}

/// Add the `from,to,weight` records of `reader` to `graph`.
///
/// Malformed records abort the load; records naming unknown locations are
/// skipped and counted in `report`.
pub fn load_edges<R: Read>(graph: &mut Graph, reader: R, report: &mut LoadReport) -> Result<()> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();
        let (from, to, weight) = parse_edge(&record, line)?;

        match graph.add_edge(from, to, weight) {
            Ok(true) => report.edges += 1,
            Ok(false) => report.duplicate_edges += 1,
            Err(err) => {
                warn!(line, %err, "skipping edge");
                report.skipped_edges += 1;
            }
        }
    }
    Ok(())
}

fn parse_edge(record: &StringRecord, line: u64) -> Result<(&str, &str, Weight)> {
    let fields = (record.get(0), record.get(1), record.get(2));
    let (Some(from), Some(to), Some(weight)) = fields else {
        return Err(Error::MalformedEdge {
            line,
            content: record.iter().collect::<Vec<_>>().join(","),
        });
    };
    if from.is_empty() || to.is_empty() {
        return Err(Error::MalformedEdge {
            line,
            content: record.iter().collect::<Vec<_>>().join(","),
        });
    }

    let weight = weight.parse::<Weight>().map_err(|_| Error::InvalidWeight {
        line,
        value: weight.to_string(),
    })?;
    Ok((from, to, weight))
}
