//! Navigator library entry points.
//!
//! This crate holds the weighted undirected [`Graph`], the
//! [`IndexedMinHeap`] priority queue and the [`PathFinder`] that runs
//! breadth-first search and Dijkstra's algorithm over it. On top of the core
//! it offers dataset loading, name-based route planning and route summaries.
//! Higher-level consumers (the CLI) should only depend on the items exported
//! here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod graph;
pub mod heap;
pub mod node;
pub mod output;
pub mod path;
pub mod routing;

pub use dataset::{default_data_dir, load_graph, DatasetPaths, LoadReport};
pub use error::{Error, Result};
pub use graph::Graph;
pub use heap::IndexedMinHeap;
pub use node::{Distance, Node, Weight};
pub use output::{render_comparison, RouteStep, RouteSummary};
pub use path::{reconstruct_path, PathFinder};
pub use routing::{
    compare_algorithms, plan_route, resolve_node, AlgorithmComparison, ComparisonOutcome,
    RouteAlgorithm, RoutePlan, RouteRequest,
};
