mod common;

use navigator_lib::{Error, Graph};

use common::{random_graph, triangle, Lcg};

#[test]
fn add_edge_is_symmetric_and_counted_once() {
    let mut graph = Graph::new();
    graph.add_node("Shire");
    graph.add_node("Bree");

    assert!(graph.add_edge("Shire", "Bree", 7).expect("both nodes exist"));
    assert_eq!(graph.num_edges(), 1);
    assert_eq!(graph.edge_weight("Shire", "Bree"), Some(7));
    assert_eq!(graph.edge_weight("Bree", "Shire"), Some(7));

    let shire = graph.node("Shire").expect("node exists");
    let bree = graph.node("Bree").expect("node exists");
    assert!(shire.has_neighbor("Bree"));
    assert!(bree.has_neighbor("Shire"));
}

#[test]
fn add_edge_with_missing_endpoint_is_reported_noop() {
    let mut graph = Graph::new();
    graph.add_node("Shire");

    let err = graph
        .add_edge("Shire", "Mordor", 3)
        .expect_err("Mordor is missing");
    assert!(matches!(err, Error::MissingNode { ref id } if id == "Mordor"));
    assert_eq!(graph.num_edges(), 0);
    assert_eq!(graph.node("Shire").map(|node| node.degree()), Some(0));
}

#[test]
fn remove_edge_is_symmetric() {
    let mut graph = triangle();
    assert!(graph.remove_edge("C", "A"));
    assert!(!graph.remove_edge("A", "C"));
    assert_eq!(graph.num_edges(), 2);
    assert_eq!(graph.edge_weight("A", "C"), None);
    assert_eq!(graph.edge_weight("C", "A"), None);
}

#[test]
fn remove_edge_on_missing_nodes_is_noop() {
    let mut graph = triangle();
    assert!(!graph.remove_edge("A", "Z"));
    assert!(!graph.remove_edge("Z", "A"));
    assert_eq!(graph.num_edges(), 3);
}

#[test]
fn remove_node_cascades_edges() {
    let mut graph = triangle();
    let removed = graph.remove_node("B").expect("B exists");

    assert_eq!(removed.id(), "B");
    assert_eq!(graph.num_nodes(), 2);
    assert_eq!(graph.num_edges(), 1);
    for node in graph.nodes() {
        assert!(!node.has_neighbor("B"), "{} still points at B", node.id());
    }
    assert!(graph.remove_node("B").is_none());
}

#[test]
fn neighbors_and_ids_are_sorted() {
    let graph = Graph::from_edges([("m", "z", 1), ("m", "a", 1), ("m", "k", 1)]);
    let neighbors: Vec<_> = graph.neighbors("m").into_iter().map(|node| node.id()).collect();
    assert_eq!(neighbors, ["a", "k", "z"]);
    assert_eq!(graph.node_ids(), ["a", "k", "m", "z"]);
    assert!(graph.neighbors("missing").is_empty());
}

#[test]
fn counters_match_structure_after_random_mutations() {
    let mut rng = Lcg::new(7);
    for _ in 0..20 {
        let mut graph = random_graph(&mut rng, 12, 30, 9);
        for _ in 0..6 {
            let victim = format!("n{}", rng.below(12));
            graph.remove_node(&victim);
            let a = format!("n{}", rng.below(12));
            let b = format!("n{}", rng.below(12));
            graph.remove_edge(&a, &b);
        }

        let entries: usize = graph.nodes().map(|node| node.degree()).sum();
        assert_eq!(graph.num_edges() * 2, entries);
        assert_eq!(graph.num_nodes(), graph.node_ids().len());

        for node in graph.nodes() {
            for (neighbor, weight) in node.neighbors() {
                assert_eq!(
                    graph.edge_weight(neighbor, node.id()),
                    Some(*weight),
                    "edge {} - {} is not symmetric",
                    node.id(),
                    neighbor
                );
            }
        }
    }
}
