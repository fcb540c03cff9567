use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::node::{Distance, Weight};
use crate::routing::{AlgorithmComparison, RoutePlan};
use crate::RouteAlgorithm;

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteStep {
    pub index: usize,
    pub id: String,
    /// Weight of the edge used to reach this step; absent for the start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    pub hops: usize,
    pub start: String,
    pub goal: String,
    pub total_weight: Distance,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with per-hop weights.
    pub fn from_plan(graph: &Graph, plan: &RoutePlan) -> Result<Self> {
        let (Some(start), Some(goal)) = (plan.steps.first(), plan.steps.last()) else {
            return Err(Error::EmptyRoutePlan);
        };

        let steps = plan
            .steps
            .iter()
            .enumerate()
            .map(|(index, id)| RouteStep {
                index,
                id: id.clone(),
                weight: index
                    .checked_sub(1)
                    .and_then(|previous| graph.edge_weight(&plan.steps[previous], id)),
            })
            .collect();

        Ok(Self {
            algorithm: plan.algorithm,
            hops: plan.hop_count(),
            start: start.clone(),
            goal: goal.clone(),
            total_weight: plan.total_weight,
            steps,
        })
    }

    /// Render the summary as plain text.
    ///
    /// Weighted routes show each hop's weight and the total journey distance;
    /// BFS routes only list the locations.
    pub fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "Path found with {} steps:", self.hops);

        let weighted = self.algorithm.is_weighted();
        for step in &self.steps {
            if step.index > 0 {
                match step.weight {
                    Some(weight) if weighted => {
                        let _ = write!(buffer, " --({weight})--> ");
                    }
                    _ => buffer.push_str(" --> "),
                }
            }
            buffer.push_str(&step.id);
        }
        buffer.push('\n');

        if weighted {
            let _ = writeln!(buffer, "Total journey distance: {}", self.total_weight);
        }
        buffer
    }
}

/// Render both sides of an [`AlgorithmComparison`] as plain text.
pub fn render_comparison(comparison: &AlgorithmComparison) -> String {
    let mut buffer = String::new();
    let _ = writeln!(
        buffer,
        "Comparing BFS and Dijkstra's algorithm for path from {} to {}:",
        comparison.start, comparison.goal
    );

    for (label, plan) in [
        ("BFS", comparison.bfs.as_ref()),
        ("Dijkstra", comparison.dijkstra.as_ref()),
    ] {
        let _ = writeln!(buffer, "\n{label} Results:");
        match plan {
            Some(plan) => {
                let _ = writeln!(
                    buffer,
                    "- Path found ({} steps): {}",
                    plan.hop_count(),
                    plan.steps.join(" -> ")
                );
                let _ = writeln!(buffer, "- Total path weight: {}", plan.total_weight);
            }
            None => buffer.push_str("- No path found!\n"),
        }
    }

    let _ = writeln!(buffer, "\nComparison:");
    let _ = writeln!(buffer, "{}", comparison.outcome.describe());
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compare_algorithms, plan_route, RouteRequest};

    fn triangle() -> Graph {
        Graph::from_edges([("A", "B", 1), ("B", "C", 1), ("A", "C", 5)])
    }

    #[test]
    fn summary_records_hop_weights() {
        let graph = triangle();
        let plan = plan_route(&graph, &RouteRequest::dijkstra("A", "C")).expect("route");
        let summary = RouteSummary::from_plan(&graph, &plan).expect("summary");

        let weights: Vec<_> = summary.steps.iter().map(|step| step.weight).collect();
        assert_eq!(weights, vec![None, Some(1), Some(1)]);
        assert_eq!(summary.total_weight, 2);
        assert_eq!(
            summary.render_plain(),
            "Path found with 2 steps:\nA --(1)--> B --(1)--> C\nTotal journey distance: 2\n"
        );
    }

    #[test]
    fn bfs_summary_omits_weights() {
        let graph = triangle();
        let plan = plan_route(&graph, &RouteRequest::bfs("A", "C")).expect("route");
        let summary = RouteSummary::from_plan(&graph, &plan).expect("summary");
        assert_eq!(summary.render_plain(), "Path found with 1 steps:\nA --> C\n");
    }

    #[test]
    fn empty_plan_is_rejected() {
        let plan = RoutePlan {
            algorithm: RouteAlgorithm::Bfs,
            start: "A".to_string(),
            goal: "A".to_string(),
            steps: Vec::new(),
            total_weight: 0,
        };
        assert!(matches!(
            RouteSummary::from_plan(&triangle(), &plan),
            Err(Error::EmptyRoutePlan)
        ));
    }

    #[test]
    fn comparison_report_mentions_outcome() {
        let graph = triangle();
        let comparison = compare_algorithms(&graph, "A", "C").expect("known nodes");
        let report = render_comparison(&comparison);
        assert!(report.contains("- Path found (1 steps): A -> C"));
        assert!(report.contains("- Path found (2 steps): A -> B -> C"));
        assert!(report.contains("BFS found a shorter path (fewer steps)."));
    }
}
