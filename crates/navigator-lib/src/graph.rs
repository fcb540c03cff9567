use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::node::{Distance, Node, Weight};

/// Weighted undirected graph that owns all of its nodes.
///
/// Every undirected edge is stored as two neighbour entries (one per
/// endpoint) but counted once in [`Graph::num_edges`]. Node identifiers are
/// kept in a sorted map, so [`Graph::node_ids`] returns them in lexical order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    nodes: BTreeMap<String, Node>,
    edge_count: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(from, to, weight)` triples, creating endpoints on
    /// demand.
    pub fn from_edges<'a, I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str, Weight)>,
    {
        let mut graph = Self::new();
        for (from, to, weight) in edges {
            graph.add_node(from);
            graph.add_node(to);
            // Both endpoints were just inserted, so this cannot fail.
            let _ = graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Insert an isolated node. Returns `false` if the identifier was already
    /// present, in which case the existing node and its edges are untouched.
    pub fn add_node(&mut self, id: &str) -> bool {
        if self.nodes.contains_key(id) {
            return false;
        }
        self.nodes.insert(id.to_string(), Node::new(id));
        true
    }

    /// Remove a node and every edge incident to it.
    pub fn remove_node(&mut self, id: &str) -> Option<Node> {
        let removed = self.nodes.remove(id)?;

        let mut dropped = usize::from(removed.has_neighbor(id));
        for node in self.nodes.values_mut() {
            if node.remove_neighbor(id).is_some() {
                dropped += 1;
            }
        }
        self.edge_count -= dropped;

        Some(removed)
    }

    /// Add an undirected edge between two existing nodes.
    ///
    /// Returns `Ok(true)` when a new edge was inserted and `Ok(false)` when the
    /// nodes were already connected (the existing weight is kept). If either
    /// endpoint is missing the graph is left unchanged and
    /// [`Error::MissingNode`] is returned.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: Weight) -> Result<bool> {
        for id in [from, to] {
            if !self.nodes.contains_key(id) {
                return Err(Error::MissingNode { id: id.to_string() });
            }
        }

        if self.nodes[from].has_neighbor(to) {
            return Ok(false);
        }

        if let Some(node) = self.nodes.get_mut(from) {
            node.add_neighbor(to, weight);
        }
        if let Some(node) = self.nodes.get_mut(to) {
            node.add_neighbor(from, weight);
        }
        self.edge_count += 1;
        Ok(true)
    }

    /// Remove the undirected edge between `from` and `to`, if present.
    pub fn remove_edge(&mut self, from: &str, to: &str) -> bool {
        if !self.nodes.contains_key(to) {
            return false;
        }
        let Some(removed) = self
            .nodes
            .get_mut(from)
            .and_then(|node| node.remove_neighbor(to))
        else {
            return false;
        };

        if let Some(node) = self.nodes.get_mut(to) {
            node.remove_neighbor(from);
        }
        tracing::trace!(from, to, weight = removed, "removed edge");
        self.edge_count -= 1;
        true
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Nodes adjacent to `id`, in identifier order. Empty for unknown nodes.
    pub fn neighbors(&self, id: &str) -> Vec<&Node> {
        self.nodes
            .get(id)
            .map(|node| {
                node.neighbors()
                    .keys()
                    .filter_map(|neighbor| self.nodes.get(neighbor))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// All node identifiers in lexical order.
    pub fn node_ids(&self) -> Vec<String> {
        self.nodes.keys().cloned().collect()
    }

    /// Iterate over all nodes in identifier order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edge_count
    }

    /// Weight of the edge between `from` and `to`.
    pub fn edge_weight(&self, from: &str, to: &str) -> Option<Weight> {
        self.nodes.get(from)?.neighbor_weight(to)
    }

    /// Sum of edge weights along `path`, or `None` if two consecutive entries
    /// are not connected. A single-node path weighs zero.
    pub fn path_weight<S: AsRef<str>>(&self, path: &[S]) -> Option<Distance> {
        if path.is_empty() {
            return None;
        }
        path.windows(2).try_fold(0, |total: Distance, pair| {
            self.edge_weight(pair[0].as_ref(), pair[1].as_ref())
                .map(|weight| total + Distance::from(weight))
        })
    }
}
