use std::collections::BTreeMap;

use serde::Serialize;

/// Weight of a single undirected edge.
pub type Weight = u32;

/// Accumulated weight along a path.
pub type Distance = u64;

/// Graph vertex together with its weighted neighbour list.
///
/// Neighbours are kept in a sorted map so traversal order is stable across
/// runs. Self-loops are not rejected here; the [`crate::Graph`] decides what
/// edges are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    id: String,
    neighbors: BTreeMap<String, Weight>,
}

impl Node {
    /// Create a node without neighbours.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            neighbors: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Weighted neighbour entries keyed by neighbour identifier.
    pub fn neighbors(&self) -> &BTreeMap<String, Weight> {
        &self.neighbors
    }

    pub fn has_neighbor(&self, id: &str) -> bool {
        self.neighbors.contains_key(id)
    }

    /// Weight of the edge to `id`, if one exists.
    pub fn neighbor_weight(&self, id: &str) -> Option<Weight> {
        self.neighbors.get(id).copied()
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Insert or overwrite the neighbour entry for `id`.
    pub(crate) fn add_neighbor(&mut self, id: impl Into<String>, weight: Weight) {
        self.neighbors.insert(id.into(), weight);
    }

    /// Remove the neighbour entry for `id`, returning its weight.
    pub(crate) fn remove_neighbor(&mut self, id: &str) -> Option<Weight> {
        self.neighbors.remove(id)
    }
}
