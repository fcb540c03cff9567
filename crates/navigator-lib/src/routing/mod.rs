//! Route planning on top of the core path finder.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported routing algorithms (BFS, Dijkstra)
//! - [`RouteRequest`] - High-level route planning request using location names
//! - [`RoutePlan`] - Planned route with hop count and total weight
//! - [`plan_route`] - Main entry point for computing routes
//! - [`compare_algorithms`] - Run both algorithms and classify the difference
//!
//! Unlike [`crate::PathFinder`], which reports "no route" as an empty vector,
//! the functions here resolve user-supplied names and turn failures into
//! [`Error`] values that a presentation layer can report.
//!
//! # Example
//!
//! ```
//! use navigator_lib::{plan_route, Graph, RouteRequest};
//!
//! let graph = Graph::from_edges([("Shire", "Bree", 3), ("Bree", "Rivendell", 9)]);
//! let plan = plan_route(&graph, &RouteRequest::dijkstra("shire", "Rivendell")).unwrap();
//! assert_eq!(plan.steps, ["Shire", "Bree", "Rivendell"]);
//! assert_eq!(plan.total_weight, 12);
//! ```

mod planner;

pub use planner::{select_planner, BfsPlanner, DijkstraPlanner, RoutePlanner};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::node::Distance;

/// Similarity threshold for suggesting alternative location names.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Maximum number of suggestions attached to an unknown-location error.
const MAX_SUGGESTIONS: usize = 3;

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Breadth-first search (unweighted graph).
    Bfs,
    /// Dijkstra's algorithm (weighted graph).
    #[default]
    Dijkstra,
}

impl RouteAlgorithm {
    /// Whether routes from this algorithm minimise edge weight.
    pub fn is_weighted(self) -> bool {
        matches!(self, RouteAlgorithm::Dijkstra)
    }
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Bfs => "bfs",
            RouteAlgorithm::Dijkstra => "dijkstra",
        };
        f.write_str(value)
    }
}

impl FromStr for RouteAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(RouteAlgorithm::Bfs),
            "dijkstra" => Ok(RouteAlgorithm::Dijkstra),
            _ => Err(Error::UnsupportedAlgorithm {
                name: s.to_string(),
            }),
        }
    }
}

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub algorithm: RouteAlgorithm,
}

impl RouteRequest {
    /// Convenience constructor for BFS routes.
    pub fn bfs(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm: RouteAlgorithm::Bfs,
        }
    }

    /// Convenience constructor for Dijkstra routes.
    pub fn dijkstra(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm: RouteAlgorithm::Dijkstra,
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub start: String,
    pub goal: String,
    pub steps: Vec<String>,
    /// Sum of the edge weights along `steps`.
    pub total_weight: Distance,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// How the BFS and Dijkstra routes for the same endpoints relate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonOutcome {
    SamePath,
    SameHopsDifferentNodes,
    BfsFewerHops,
    DijkstraFewerHops,
    NoRoute,
}

impl ComparisonOutcome {
    /// One-line explanation suitable for console output.
    pub fn describe(self) -> &'static str {
        match self {
            ComparisonOutcome::SamePath => "Both algorithms found the same path.",
            ComparisonOutcome::SameHopsDifferentNodes => {
                "Both algorithms found paths with the same number of steps, but different nodes."
            }
            ComparisonOutcome::BfsFewerHops => "BFS found a shorter path (fewer steps).",
            ComparisonOutcome::DijkstraFewerHops => {
                "Dijkstra's found a shorter path (fewer steps)."
            }
            ComparisonOutcome::NoRoute => "Neither algorithm found a path.",
        }
    }
}

/// Result of running both algorithms between the same endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmComparison {
    pub start: String,
    pub goal: String,
    pub bfs: Option<RoutePlan>,
    pub dijkstra: Option<RoutePlan>,
    pub outcome: ComparisonOutcome,
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Resolve a user-supplied location name to a node identifier.
///
/// Surrounding whitespace is ignored and an exact match wins over a
/// case-insensitive one. Unknown names produce [`Error::UnknownNode`] with up
/// to three similar names as suggestions.
pub fn resolve_node(graph: &Graph, name: &str) -> Result<String> {
    let trimmed = name.trim();
    if graph.contains(trimmed) {
        return Ok(trimmed.to_string());
    }

    if let Some(node) = graph
        .nodes()
        .find(|node| node.id().eq_ignore_ascii_case(trimmed))
    {
        return Ok(node.id().to_string());
    }

    Err(Error::UnknownNode {
        name: trimmed.to_string(),
        suggestions: fuzzy_matches(graph, trimmed, MAX_SUGGESTIONS),
    })
}

/// Location names that closely resemble `name`, best match first.
pub fn fuzzy_matches(graph: &Graph, name: &str, limit: usize) -> Vec<String> {
    let needle = name.to_lowercase();
    let mut scored: Vec<(f64, &str)> = graph
        .nodes()
        .map(|node| {
            let score = strsim::jaro_winkler(&needle, &node.id().to_lowercase());
            (score, node.id())
        })
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, id)| id.to_string())
        .collect()
}

fn run_planner(
    graph: &Graph,
    algorithm: RouteAlgorithm,
    start: &str,
    goal: &str,
) -> Option<RoutePlan> {
    let steps = select_planner(algorithm).find_path(graph, start, goal);
    let total_weight = graph.path_weight(&steps)?;
    Some(RoutePlan {
        algorithm,
        start: start.to_string(),
        goal: goal.to_string(),
        steps,
        total_weight,
    })
}

// =============================================================================
// Main Entry Points
// =============================================================================

/// Compute a route using the requested algorithm.
pub fn plan_route(graph: &Graph, request: &RouteRequest) -> Result<RoutePlan> {
    let start = resolve_node(graph, &request.start)?;
    let goal = resolve_node(graph, &request.goal)?;

    let plan = run_planner(graph, request.algorithm, &start, &goal).ok_or_else(|| {
        Error::RouteNotFound {
            start: start.clone(),
            goal: goal.clone(),
        }
    })?;

    tracing::debug!(
        algorithm = %plan.algorithm,
        hops = plan.hop_count(),
        weight = plan.total_weight,
        "planned route"
    );
    Ok(plan)
}

/// Run BFS and Dijkstra between the same endpoints and compare the routes.
///
/// Unknown names are reported as errors; an unreachable goal is not, it shows
/// up as [`ComparisonOutcome::NoRoute`].
pub fn compare_algorithms(graph: &Graph, start: &str, goal: &str) -> Result<AlgorithmComparison> {
    let start = resolve_node(graph, start)?;
    let goal = resolve_node(graph, goal)?;

    let bfs = run_planner(graph, RouteAlgorithm::Bfs, &start, &goal);
    let dijkstra = run_planner(graph, RouteAlgorithm::Dijkstra, &start, &goal);
    let outcome = classify(bfs.as_ref(), dijkstra.as_ref());

    Ok(AlgorithmComparison {
        start,
        goal,
        bfs,
        dijkstra,
        outcome,
    })
}

fn classify(bfs: Option<&RoutePlan>, dijkstra: Option<&RoutePlan>) -> ComparisonOutcome {
    let (Some(bfs), Some(dijkstra)) = (bfs, dijkstra) else {
        return ComparisonOutcome::NoRoute;
    };

    if bfs.steps == dijkstra.steps {
        ComparisonOutcome::SamePath
    } else if bfs.steps.len() == dijkstra.steps.len() {
        ComparisonOutcome::SameHopsDifferentNodes
    } else if bfs.steps.len() < dijkstra.steps.len() {
        ComparisonOutcome::BfsFewerHops
    } else {
        ComparisonOutcome::DijkstraFewerHops
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_plan_hop_count() {
        let plan = RoutePlan {
            algorithm: RouteAlgorithm::Bfs,
            start: "A".to_string(),
            goal: "C".to_string(),
            steps: vec!["A".to_string(), "B".to_string(), "C".to_string()],
            total_weight: 2,
        };
        assert_eq!(plan.hop_count(), 2);
    }

    #[test]
    fn algorithm_parses_case_insensitively() {
        assert_eq!("BFS".parse::<RouteAlgorithm>().unwrap(), RouteAlgorithm::Bfs);
        assert_eq!(
            " dijkstra ".parse::<RouteAlgorithm>().unwrap(),
            RouteAlgorithm::Dijkstra
        );
        assert!("a-star".parse::<RouteAlgorithm>().is_err());
    }

    #[test]
    fn algorithm_display_round_trips() {
        for algorithm in [RouteAlgorithm::Bfs, RouteAlgorithm::Dijkstra] {
            assert_eq!(
                algorithm.to_string().parse::<RouteAlgorithm>().unwrap(),
                algorithm
            );
        }
    }

    #[test]
    fn classify_prefers_identical_paths() {
        let graph = Graph::from_edges([("A", "B", 1)]);
        let bfs = run_planner(&graph, RouteAlgorithm::Bfs, "A", "B");
        let dijkstra = run_planner(&graph, RouteAlgorithm::Dijkstra, "A", "B");
        assert_eq!(
            classify(bfs.as_ref(), dijkstra.as_ref()),
            ComparisonOutcome::SamePath
        );
        assert_eq!(classify(None, dijkstra.as_ref()), ComparisonOutcome::NoRoute);
    }
}
