use std::path::{Path, PathBuf};
use wayfind::graphlib::{Graph, GraphOptions, WeightedEdge};
use wayfind::{Error, UnionFind, kruskal, read_edge_list};

fn fixtures_dir() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .join("fixtures")
}

/// Fails if `edges` close a cycle; returns how many sets remain over `g`'s vertices.
fn assert_acyclic(g: &Graph, edges: &[WeightedEdge]) -> usize {
    let mut uf = UnionFind::new();
    for v in g.list_of_vertices() {
        uf.makeset(v).unwrap();
    }
    for e in edges {
        assert!(
            !uf.same_set(&e.source, &e.target).unwrap(),
            "edge {e} closes a cycle"
        );
        uf.union(&e.source, &e.target).unwrap();
    }
    uf.set_count()
}

/// Minimum weight over every spanning tree, by trying all (n - 1)-edge subsets.
fn brute_force_mst_weight(g: &Graph) -> f64 {
    let edges = g.undirected_edges();
    let n = g.vertex_count();
    let k = n - 1;
    let mut best = f64::INFINITY;
    for mask in 0u32..(1u32 << edges.len()) {
        if mask.count_ones() as usize != k {
            continue;
        }
        let mut uf = UnionFind::new();
        for v in g.list_of_vertices() {
            uf.makeset(v).unwrap();
        }
        let mut weight = 0.0;
        let mut tree = true;
        for (i, e) in edges.iter().enumerate() {
            if mask & (1 << i) == 0 {
                continue;
            }
            if uf.same_set(&e.source, &e.target).unwrap() {
                tree = false;
                break;
            }
            uf.union(&e.source, &e.target).unwrap();
            weight += e.weight;
        }
        if tree && uf.set_count() == 1 {
            best = best.min(weight);
        }
    }
    best
}

#[test]
fn square_fixture_has_weight_four() {
    let g = read_edge_list(fixtures_dir().join("graphs/square.txt")).unwrap();
    let tree = kruskal(&g).unwrap();

    assert_eq!(tree.total_weight(), 4.0);
    assert_eq!(tree.len(), 3);
    let pairs: Vec<(&str, &str)> = tree
        .edges()
        .iter()
        .map(|e| (e.source.as_str(), e.target.as_str()))
        .collect();
    assert!(pairs.contains(&("A", "B")));
    assert!(pairs.contains(&("C", "D")));
    assert!(pairs.contains(&("B", "C")) || pairs.contains(&("A", "C")));
}

#[test]
fn tree_has_one_edge_fewer_than_vertices() {
    let g = read_edge_list(fixtures_dir().join("graphs/romania.txt")).unwrap();
    let tree = kruskal(&g).unwrap();

    assert_eq!(g.vertex_count(), 20);
    assert_eq!(tree.len(), g.vertex_count() - 1);
    assert_eq!(tree.total_weight(), 1835.0);
    assert_eq!(assert_acyclic(&g, tree.edges()), 1);
}

#[test]
fn tree_edges_come_out_in_ascending_weight() {
    let g = read_edge_list(fixtures_dir().join("graphs/romania.txt")).unwrap();
    let tree = kruskal(&g).unwrap();
    for pair in tree.edges().windows(2) {
        assert!(pair[0].weight <= pair[1].weight);
    }
    let summed: f64 = tree.edges().iter().map(|e| e.weight).sum();
    assert_eq!(summed, tree.total_weight());
}

#[test]
fn matches_brute_force_on_small_graphs() {
    let fixtures: Vec<Vec<(&str, &str, f64)>> = vec![
        vec![("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 2.0), ("C", "D", 1.0)],
        vec![
            ("a", "b", 4.0),
            ("a", "c", 1.0),
            ("b", "c", 2.0),
            ("b", "d", 5.0),
            ("c", "d", 8.0),
            ("d", "e", 3.0),
            ("c", "e", 9.0),
            ("a", "e", 7.5),
        ],
        vec![
            ("p", "q", 3.0),
            ("q", "r", 3.0),
            ("r", "s", 3.0),
            ("s", "p", 3.0),
            ("p", "r", 1.0),
            ("q", "s", 6.0),
            ("p", "q", 0.5),
        ],
    ];

    for edges in fixtures {
        let g = Graph::from_edges(GraphOptions::default(), edges.clone()).unwrap();
        let tree = kruskal(&g).unwrap();
        assert_eq!(tree.len(), g.vertex_count() - 1, "{edges:?}");
        assert_eq!(tree.total_weight(), brute_force_mst_weight(&g), "{edges:?}");
        assert_eq!(assert_acyclic(&g, tree.edges()), 1);
    }
}

#[test]
fn disconnected_graph_has_no_spanning_tree() {
    let g = read_edge_list(fixtures_dir().join("graphs/islands.txt")).unwrap();
    let err = kruskal(&g).unwrap_err();
    assert!(matches!(
        err,
        Error::Disconnected {
            vertices: 5,
            components: 2
        }
    ));
    assert_eq!(
        err.to_string(),
        "no spanning tree exists: 5 vertices in 2 disconnected components"
    );
}

#[test]
fn single_edge_graph_is_its_own_tree() {
    let g = Graph::from_edges(GraphOptions::default(), [("x", "y", 7.0)]).unwrap();
    let tree = kruskal(&g).unwrap();
    assert_eq!(tree.len(), 1);
    assert!(tree.edges()[0].same_connection(&WeightedEdge::new("y", "x", 7.0)));
}

#[test]
fn directed_graphs_are_spanned_as_undirected() {
    let g = Graph::from_edges(
        GraphOptions::directed(),
        [("a", "b", 2.0), ("c", "b", 1.0), ("a", "c", 5.0)],
    )
    .unwrap();
    let tree = kruskal(&g).unwrap();
    assert_eq!(tree.total_weight(), 3.0);
}

#[test]
fn negative_or_nan_weights_never_reach_the_tree() {
    let err = Graph::from_edges(
        GraphOptions::default(),
        [("a", "b", -5.0), ("b", "c", f64::NAN)],
    )
    .map_err(Error::from)
    .unwrap_err();
    assert!(matches!(err, Error::Graph(_)));
    assert_eq!(
        err.to_string(),
        "edge (a, b) has weight -5; weights must be finite and non-negative"
    );
}
