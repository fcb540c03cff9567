use std::collections::{HashMap, HashSet, VecDeque};

use tracing::debug;

use crate::graph::Graph;
use crate::heap::IndexedMinHeap;
use crate::node::Distance;

/// Single-source path finder over a borrowed [`Graph`].
///
/// Both searches return the route as node identifiers from `start` to `goal`
/// inclusive, or an empty vector when either endpoint is unknown or the goal
/// is unreachable.
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'g> {
    graph: &'g Graph,
}

impl<'g> PathFinder<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Breadth-first search: the route with the fewest hops, ignoring weights.
    pub fn find_path_bfs(&self, start: &str, goal: &str) -> Vec<String> {
        if !self.graph.contains(start) || !self.graph.contains(goal) {
            debug!(start, goal, "bfs endpoint missing from graph");
            return Vec::new();
        }

        let mut queue = VecDeque::new();
        let mut visited = HashSet::new();
        let mut predecessors: HashMap<String, String> = HashMap::new();

        visited.insert(start.to_string());
        queue.push_back(start.to_string());

        while let Some(current) = queue.pop_front() {
            if current == goal {
                break;
            }

            let Some(node) = self.graph.node(&current) else {
                continue;
            };
            for neighbor in node.neighbors().keys() {
                if visited.insert(neighbor.clone()) {
                    predecessors.insert(neighbor.clone(), current.clone());
                    queue.push_back(neighbor.clone());
                }
            }
        }

        let path = reconstruct_path(start, goal, &predecessors);
        debug!(start, goal, hops = path.len().saturating_sub(1), "bfs finished");
        path
    }

    /// Dijkstra's algorithm: the route with the smallest summed edge weight.
    pub fn find_path_dijkstra(&self, start: &str, goal: &str) -> Vec<String> {
        if !self.graph.contains(start) || !self.graph.contains(goal) {
            debug!(start, goal, "dijkstra endpoint missing from graph");
            return Vec::new();
        }

        let mut distances: HashMap<String, Distance> = self
            .graph
            .node_ids()
            .into_iter()
            .map(|id| (id, Distance::MAX))
            .collect();
        let mut predecessors: HashMap<String, String> = HashMap::new();
        let mut finalized: HashSet<String> = HashSet::new();
        let mut heap = IndexedMinHeap::with_capacity(self.graph.num_nodes());

        distances.insert(start.to_string(), 0);
        heap.insert(start, 0);

        while let Some((current, current_distance)) = heap.pop_min() {
            if current == goal {
                break;
            }
            if !finalized.insert(current.clone()) {
                continue;
            }

            let Some(node) = self.graph.node(&current) else {
                continue;
            };
            for (neighbor, &weight) in node.neighbors() {
                if finalized.contains(neighbor) {
                    continue;
                }

                let candidate = current_distance.saturating_add(Distance::from(weight));
                let known = distances.get(neighbor).copied().unwrap_or(Distance::MAX);
                if candidate >= known {
                    continue;
                }

                distances.insert(neighbor.clone(), candidate);
                predecessors.insert(neighbor.clone(), current.clone());
                if heap.contains(neighbor) {
                    // Queued and strictly smaller, so this cannot fail.
                    let _ = heap.decrease_key(neighbor, candidate);
                } else {
                    heap.insert(neighbor.as_str(), candidate);
                }
            }
        }

        let path = reconstruct_path(start, goal, &predecessors);
        debug!(
            start,
            goal,
            hops = path.len().saturating_sub(1),
            distance = distances.get(goal).copied().filter(|d| *d != Distance::MAX),
            "dijkstra finished"
        );
        path
    }
}

/// Rebuild a `start..=goal` route by following `predecessors` back from
/// `goal`.
///
/// Returns an empty route when `goal` was never reached, or when the chain is
/// broken before arriving at `start`.
pub fn reconstruct_path(
    start: &str,
    goal: &str,
    predecessors: &HashMap<String, String>,
) -> Vec<String> {
    if start != goal && !predecessors.contains_key(goal) {
        return Vec::new();
    }

    let mut path = Vec::new();
    let mut current = goal;
    while current != start {
        path.push(current.to_string());
        // A chain can never be longer than the number of recorded predecessors.
        if path.len() > predecessors.len() {
            return Vec::new();
        }
        match predecessors.get(current) {
            Some(previous) => current = previous.as_str(),
            None => return Vec::new(),
        }
    }
    path.push(start.to_string());
    path.reverse();
    path
}
