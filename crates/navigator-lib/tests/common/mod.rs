//! Common test utilities and fixture helpers.
//!
//! Shared by the integration tests: fixture dataset paths, small hand-built
//! graphs, and a deterministic pseudo-random generator for invariant checks.

use std::path::PathBuf;

use navigator_lib::{DatasetPaths, Graph};

/// Path to the fixtures directory shared by the workspace.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Dataset paths of the Middle-earth fixture.
#[allow(dead_code)]
pub fn middle_earth_paths() -> DatasetPaths {
    DatasetPaths::in_dir(&fixtures_dir().join("middle_earth"))
}

/// Nodes {A, B, C} with edges (A,B,1), (B,C,1), (A,C,5).
#[allow(dead_code)]
pub fn triangle() -> Graph {
    Graph::from_edges([("A", "B", 1), ("B", "C", 1), ("A", "C", 5)])
}

/// Small linear congruential generator so invariant checks are reproducible.
#[allow(dead_code)]
pub struct Lcg(u64);

#[allow(dead_code)]
impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }

    /// Uniform-ish value in `0..bound`.
    pub fn below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }
}

/// Random connected-or-not graph with `nodes` vertices named `n0..`.
#[allow(dead_code)]
pub fn random_graph(rng: &mut Lcg, nodes: usize, edges: usize, max_weight: u32) -> Graph {
    let mut graph = Graph::new();
    let names: Vec<String> = (0..nodes).map(|i| format!("n{i}")).collect();
    for name in &names {
        graph.add_node(name);
    }
    for _ in 0..edges {
        let a = &names[rng.below(nodes as u64) as usize];
        let b = &names[rng.below(nodes as u64) as usize];
        if a == b {
            continue;
        }
        let weight = rng.below(u64::from(max_weight) + 1) as u32;
        graph.add_edge(a, b, weight).expect("endpoints exist");
    }
    graph
}
