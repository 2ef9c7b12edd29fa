use planar_paths::{euclidean, solve_batch, Frontier, Graph, Point, Query, QueryResult, Solver};
use proptest::prelude::*;

fn point() -> impl Strategy<Value = Point> {
    (-60i32..60, -60i32..60).prop_map(|(x, y)| Point::new(x, y))
}

/// A random graph together with a batch of in-range queries.
fn graph_and_queries() -> impl Strategy<Value = (Vec<Point>, Vec<(usize, usize)>, Vec<Query>)> {
    (1usize..16).prop_flat_map(|n| {
        (
            prop::collection::vec(point(), n),
            prop::collection::vec((0..n, 0..n), 0..3 * n),
            prop::collection::vec((0..n, 0..n).prop_map(|(s, d)| Query::new(s, d)), 1..8),
        )
    })
}

/// All-pairs distances by Floyd-Warshall, used as the reference answer.
fn all_pairs(graph: &Graph) -> Vec<Vec<Option<u64>>> {
    let n = graph.num_vertex();
    let mut d = vec![vec![None; n]; n];
    for u in 0..n {
        d[u][u] = Some(0);
        for v in graph.neighbors(u) {
            let w = graph.weight(u, v);
            if d[u][v].map_or(true, |cur| w < cur) {
                d[u][v] = Some(w);
            }
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(a), Some(b)) = (d[i][k], d[k][j]) {
                    if d[i][j].map_or(true, |cur| a + b < cur) {
                        d[i][j] = Some(a + b);
                    }
                }
            }
        }
    }
    d
}

fn path_weight(graph: &Graph, path: &[usize]) -> u64 {
    path.windows(2).map(|pair| graph.weight(pair[0], pair[1])).sum()
}

proptest! {
    #[test]
    fn prop_euclidean_symmetric(a in point(), b in point()) {
        prop_assert_eq!(euclidean(a, a), 0);
        prop_assert_eq!(euclidean(a, b), euclidean(b, a));
        let exact = (((a.x - b.x) as f64).powi(2) + ((a.y - b.y) as f64).powi(2)).sqrt();
        prop_assert!(euclidean(a, b) as f64 <= exact);
        prop_assert!(exact < euclidean(a, b) as f64 + 1.0);
    }

    #[test]
    fn prop_paths_are_valid_and_shortest((points, edges, queries) in graph_and_queries()) {
        let graph = Graph::with_edges(points, &edges).unwrap();
        let reference = all_pairs(&graph);

        for frontier in [Frontier::Rebuild, Frontier::DecreaseKey] {
            let results = solve_batch(&graph, &queries, frontier);
            for (q, result) in queries.iter().zip(&results) {
                match result {
                    QueryResult::Reached { distance, path } => {
                        prop_assert_eq!(path.first(), Some(&q.src));
                        prop_assert_eq!(path.last(), Some(&q.dst));
                        for pair in path.windows(2) {
                            prop_assert!(graph.has_edge(pair[0], pair[1]));
                        }
                        prop_assert_eq!(path_weight(&graph, path), *distance);
                        prop_assert_eq!(reference[q.src][q.dst], Some(*distance));
                        if q.src == q.dst {
                            prop_assert_eq!(*distance, 0);
                            prop_assert_eq!(path.clone(), vec![q.src]);
                        }
                    }
                    QueryResult::Unreachable { src, dst } => {
                        prop_assert_eq!((*src, *dst), (q.src, q.dst));
                        prop_assert_eq!(reference[q.src][q.dst], None);
                    }
                }
            }
        }
    }

    #[test]
    fn prop_frontiers_agree_on_distance((points, edges, queries) in graph_and_queries()) {
        let graph = Graph::with_edges(points, &edges).unwrap();
        let rebuild = solve_batch(&graph, &queries, Frontier::Rebuild);
        let decrease_key = solve_batch(&graph, &queries, Frontier::DecreaseKey);
        for (a, b) in rebuild.iter().zip(&decrease_key) {
            prop_assert_eq!(a.distance(), b.distance());
        }
    }

    #[test]
    fn prop_repeated_query_is_identical((points, edges, queries) in graph_and_queries()) {
        let graph = Graph::with_edges(points, &edges).unwrap();
        let mut solver = Solver::new(&graph, Frontier::Rebuild);
        for q in &queries {
            let first = solver.solve(q.src, q.dst);
            let second = solver.solve(q.src, q.dst);
            prop_assert_eq!(first, second);
        }
    }
}
