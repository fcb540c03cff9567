//! Route planning strategies.
//!
//! Each algorithm is wrapped in a [`RoutePlanner`] so the orchestration in
//! [`super::plan_route`] does not need to know which search it is running.

use crate::graph::Graph;
use crate::path::PathFinder;

use super::RouteAlgorithm;

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Execute the search, returning an empty route when `goal` is
    /// unreachable.
    fn find_path(&self, graph: &Graph, start: &str, goal: &str) -> Vec<String>;
}

/// Breadth-first search planner.
///
/// Finds the route with the fewest hops and ignores edge weights.
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsPlanner;

impl RoutePlanner for BfsPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Bfs
    }

    fn find_path(&self, graph: &Graph, start: &str, goal: &str) -> Vec<String> {
        PathFinder::new(graph).find_path_bfs(start, goal)
    }
}

/// Dijkstra planner minimising the summed edge weight.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraPlanner;

impl RoutePlanner for DijkstraPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dijkstra
    }

    fn find_path(&self, graph: &Graph, start: &str, goal: &str) -> Vec<String> {
        PathFinder::new(graph).find_path_dijkstra(start, goal)
    }
}

/// Select the planner implementing `algorithm`.
pub fn select_planner(algorithm: RouteAlgorithm) -> Box<dyn RoutePlanner> {
    match algorithm {
        RouteAlgorithm::Bfs => Box::new(BfsPlanner),
        RouteAlgorithm::Dijkstra => Box::new(DijkstraPlanner),
    }
}
