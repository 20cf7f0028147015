//! Behaviour every `Graph` implementation must show, exercised through the
//! public API of `MatrixDigraph<String>`.

use matrix_digraph::prelude::*;
use std::collections::HashSet;

const DEFAULT_WEIGHT: Weight = 1;
const TEST_WEIGHT: Weight = 15;
const LETTERS: [&str; 12] = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L"];

fn s(v: &str) -> String {
    v.to_string()
}

fn with_vertices() -> MatrixDigraph<String> {
    let mut g = MatrixDigraph::new();
    for l in LETTERS {
        g.add_vertex(s(l));
    }
    g
}

/// Chains adjacent letters: A-B, B-C, ..., K-L.
fn with_chain(weight: Weight) -> MatrixDigraph<String> {
    let mut g = with_vertices();
    for pair in LETTERS.windows(2) {
        g.add_edge(&s(pair[0]), &s(pair[1]), weight);
    }
    g
}

#[test]
fn add_vertex() {
    let g = with_vertices();
    assert_eq!(g.vertex_size(), LETTERS.len());
    for l in LETTERS {
        assert!(g.contains_vertex(&s(l)), "{l} missing after add");
    }
}

#[test]
fn duplicate_vertex_is_refused() {
    let mut g = with_vertices();
    assert!(g.add_vertex(s("M")));
    assert!(!g.add_vertex(s("M")));
    assert_eq!(g.vertex_size(), LETTERS.len() + 1);
}

#[test]
fn add_edge() {
    let g = with_chain(DEFAULT_WEIGHT);
    assert_eq!(g.vertex_size(), LETTERS.len());
    assert_eq!(g.edge_size(), LETTERS.len() - 1);
    for pair in LETTERS.windows(2) {
        assert!(g.contains_edge(&s(pair[0]), &s(pair[1])));
    }
}

#[test]
fn edge_needs_both_endpoints() {
    let mut g = with_chain(DEFAULT_WEIGHT);
    assert!(g.add_edge(&s("A"), &s("L"), DEFAULT_WEIGHT));
    assert!(!g.add_edge(&s("A"), &s("M"), DEFAULT_WEIGHT));
    assert!(!g.add_edge(&s("M"), &s("A"), DEFAULT_WEIGHT));
    assert!(!g.add_edge(&s("P"), &s("M"), DEFAULT_WEIGHT));
    assert_eq!(g.edge_size(), LETTERS.len());
}

#[test]
fn duplicate_edge_is_refused() {
    let mut g = with_chain(DEFAULT_WEIGHT);
    let vertices = g.vertex_size();
    let edges = g.edge_size();
    assert!(!g.add_edge(&s("A"), &s("B"), DEFAULT_WEIGHT));
    assert!(!g.add_edge(&s("A"), &s("B"), TEST_WEIGHT));
    assert_eq!(g.vertex_size(), vertices);
    assert_eq!(g.edge_size(), edges);
    assert_eq!(g.edge_weight(&s("A"), &s("B")), Some(DEFAULT_WEIGHT));
}

#[test]
fn missing_vertex() {
    let g = with_vertices();
    assert!(!g.contains_vertex(&s("M")));
}

#[test]
fn missing_edge_before_and_after_resize() {
    let mut g = with_chain(DEFAULT_WEIGHT);
    assert!(!g.contains_edge(&s("A"), &s("A")));
    assert!(!g.contains_edge(&s("D"), &s("F")));

    for i in 1..=100 {
        g.add_vertex(i.to_string());
    }
    assert!(!g.contains_edge(&s("101"), &s("101")));
    assert!(!g.contains_edge(&s("A"), &s("50")));
    assert!(!g.contains_edge(&s("50"), &s("A")));
    // chain survived the growth
    for pair in LETTERS.windows(2) {
        assert!(g.contains_edge(&s(pair[0]), &s(pair[1])));
    }
}

#[test]
fn edges_are_directed() {
    let g = with_chain(DEFAULT_WEIGHT);
    for pair in LETTERS.windows(2) {
        assert!(g.contains_edge(&s(pair[0]), &s(pair[1])));
        assert!(!g.contains_edge(&s(pair[1]), &s(pair[0])));
    }
}

#[test]
fn vertex_set() {
    let mut g = MatrixDigraph::<String>::new();
    assert!(g.vertices().is_empty());
    for l in LETTERS {
        g.add_vertex(s(l));
    }
    let mut vertices: Vec<_> = g.vertices().into_iter().collect();
    vertices.sort();
    assert_eq!(vertices, LETTERS.map(s).to_vec());
}

#[test]
fn edge_set() {
    let mut g = with_vertices();
    assert!(g.edges().is_empty());
    for pair in LETTERS.windows(2) {
        g.add_edge(&s(pair[0]), &s(pair[1]), DEFAULT_WEIGHT);
    }
    let expected: HashSet<Edge<String>> = LETTERS
        .windows(2)
        .map(|pair| Edge::new(s(pair[0]), s(pair[1]), DEFAULT_WEIGHT))
        .collect();
    assert_eq!(g.edges(), expected);
}

#[test]
fn weights_are_stored() {
    let mut g = with_chain(TEST_WEIGHT);
    for pair in LETTERS.windows(2) {
        assert_eq!(g.edge_weight(&s(pair[0]), &s(pair[1])), Some(TEST_WEIGHT));
    }
    // occupied cell is not overwritten, whatever the weight
    assert!(!g.add_edge(&s("A"), &s("B"), 0));
    assert_eq!(g.edge_weight(&s("A"), &s("B")), Some(TEST_WEIGHT));
}

#[test]
fn round_trip_single_edge() {
    let mut g = MatrixDigraph::new();
    g.add_vertex("A");
    g.add_vertex("B");
    g.add_edge(&"A", &"B", 15);
    assert!(g.contains_edge(&"A", &"B"));
    assert_eq!(g.edge_weight(&"A", &"B"), Some(15));
    assert!(!g.contains_edge(&"B", &"A"));
    assert_eq!(g.edge_size(), 1);
}

#[test]
fn remove_vertex() {
    let mut g = with_chain(DEFAULT_WEIGHT);
    assert!(!g.remove_vertex(&s("M")));
    assert!(g.remove_vertex(&s("L")));
    assert!(!g.remove_vertex(&s("L")));

    let vertices = g.vertices();
    assert_eq!(vertices.len(), LETTERS.len() - 1);
    assert_eq!(g.vertex_size(), LETTERS.len() - 1);
    assert_eq!(g.edge_size(), LETTERS.len() - 2);

    for v in &vertices {
        assert!(g.remove_vertex(v), "{v} not removed");
    }
    assert_eq!(g.vertex_size(), 0);
    assert_eq!(g.edge_size(), 0);
    assert!(g.edges().is_empty());
}

#[test]
fn remove_edge() {
    let mut g = with_chain(DEFAULT_WEIGHT);
    assert!(!g.remove_edge(&s("A"), &s("M")));
    assert!(!g.remove_edge(&s("M"), &s("A")));
    assert!(!g.remove_edge(&s("N"), &s("M")));
    assert!(!g.remove_edge(&s("B"), &s("A")));

    let edges = g.edges();
    let first = edges.iter().next().unwrap().clone();
    assert!(g.remove_edge(first.source(), first.destination()));
    assert!(!g.contains_edge(first.source(), first.destination()));
    assert!(!g.remove_edge(first.source(), first.destination()));
    assert_eq!(g.edge_size(), LETTERS.len() - 2);

    g.add_edge(first.source(), first.destination(), DEFAULT_WEIGHT);
    for e in &edges {
        assert!(g.remove_edge(e.source(), e.destination()));
    }
    assert_eq!(g.edge_size(), 0);
    assert_eq!(g.vertex_size(), LETTERS.len());
}

#[test]
fn clear() {
    let mut g = with_chain(DEFAULT_WEIGHT);
    g.clear();
    assert_eq!(g.vertex_size(), 0);
    assert_eq!(g.edge_size(), 0);
    assert!(g.vertices().is_empty());
    assert!(g.edges().is_empty());
    assert!(g.is_empty());

    // usable again afterwards
    assert!(g.add_vertex(s("A")));
    assert!(g.add_vertex(s("B")));
    assert!(g.add_edge(&s("A"), &s("B"), TEST_WEIGHT));
    assert_eq!(g.edge_size(), 1);
    assert!(g.validate_invariants().is_ok());
}

#[test]
fn snapshots_do_not_track_later_mutation() {
    let mut g = with_chain(DEFAULT_WEIGHT);
    let vertices = g.vertices();
    let edges = g.edges();
    g.clear();
    assert_eq!(vertices.len(), LETTERS.len());
    assert_eq!(edges.len(), LETTERS.len() - 1);
}

#[test]
fn self_loops_are_ordinary_edges() {
    let mut g = with_vertices();
    assert!(g.add_edge(&s("A"), &s("A"), 3));
    assert!(g.contains_edge(&s("A"), &s("A")));
    assert_eq!(g.edges(), HashSet::from([Edge::new(s("A"), s("A"), 3)]));
    assert!(g.remove_vertex(&s("A")));
    assert_eq!(g.edge_size(), 0);
}

#[test]
fn generic_callers_use_the_trait() {
    fn fill<G: Graph<Vertex = u32>>(g: &mut G) {
        assert_eq!(g.add_vertices(0..4), 4);
        assert_eq!(g.add_vertices(2..6), 2);
        assert!(g.add_edge(&0, &5, 1));
    }
    let mut g = MatrixDigraph::new();
    fill(&mut g);
    assert_eq!(g.vertex_size(), 6);
    assert_eq!(g.edge_size(), 1);
}
