use serde::{Deserialize, Serialize};

use crate::graph::*;

use super::elimination::{RemovalRecord, elimination_order};

/// Values of both curves at one `k`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub k: NumNodes,
    pub dk: NumNodes,
    pub alpha_approx: NumNodes,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub alpha_exact: Option<NumNodes>,
}

/// Steps with `vertices_before > k` are exactly the first `n - k` ones, so the value at `k`
/// is the prefix maximum of `value` over those steps. We sweep the record once and
/// fill the curve from its right end.
fn prefix_max_curve<F: Fn(usize) -> NumNodes>(n: usize, value: F) -> Vec<NumNodes> {
    let mut curve = vec![0; n];
    let mut running: NumNodes = 0;
    for s in 0..n {
        running = running.max(value(s));
        curve[n - 1 - s] = running;
    }
    curve
}

/// `curve[k] = dk(G, k)` for all `k` in `0..n`
pub fn degree_curve(record: &RemovalRecord) -> Vec<NumNodes> {
    prefix_max_curve(record.len(), |s| record[s].degree)
}

/// `curve[k]` is the largest ⌈2·edges/vertices⌉ over all intermediate subgraphs of the
/// elimination that still have more than `k` nodes
pub fn density_curve(record: &RemovalRecord) -> Vec<NumNodes> {
    prefix_max_curve(record.len(), |s| {
        record[s].ceil_average_degree().unwrap_or(0)
    })
}

/// Quadratic evaluation of [`density_curve`] that scans all steps for every `k`
pub fn density_curve_reference(record: &RemovalRecord) -> Vec<NumNodes> {
    (0..record.len() as NumNodes)
        .map(|k| {
            record
                .iter()
                .filter(|e| e.vertices_before > k)
                .filter_map(|e| e.ceil_average_degree())
                .max()
                .unwrap_or(0)
        })
        .collect()
}

/// Combines both curves into one point per `k` in `0..n`; exact values are left empty
pub fn curve_points(record: &RemovalRecord) -> Vec<CurvePoint> {
    degree_curve(record)
        .into_iter()
        .zip(density_curve(record))
        .enumerate()
        .map(|(k, (dk, alpha_approx))| CurvePoint {
            k: k as NumNodes,
            dk,
            alpha_approx,
            alpha_exact: None,
        })
        .collect()
}

fn with_k(curve: Vec<NumNodes>) -> Vec<(NumNodes, NumNodes)> {
    (0..).zip(curve).collect()
}

/// `(k, dk)` for every `k` in `0..n`
pub fn all_dk<G: AdjacencyList>(graph: &G) -> Vec<(NumNodes, NumNodes)> {
    with_k(degree_curve(&elimination_order(graph)))
}

/// `(k, alpha_approx)` for every `k` in `0..n`
pub fn all_alpha_approx<G: AdjacencyList>(graph: &G) -> Vec<(NumNodes, NumNodes)> {
    with_k(density_curve(&elimination_order(graph)))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{arboricity::dk, testing::*};
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn diamond() {
        let graph = diamond_graph();
        assert_eq!(all_dk(&graph), [(0, 2), (1, 2), (2, 2), (3, 2)]);
        // steps have (vertices, edges) = (4, 5), (3, 3), (2, 1), (1, 0)
        assert_eq!(all_alpha_approx(&graph), [(0, 3), (1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    fn empty_graph() {
        let graph = CsrGraph::new(0);
        assert!(all_dk(&graph).is_empty());
        assert!(all_alpha_approx(&graph).is_empty());
        assert!(curve_points(&elimination_order(&graph)).is_empty());
    }

    #[test]
    fn degree_curve_matches_single_k() {
        let mut rng = Pcg64::seed_from_u64(0xa11);
        for graph in random_graphs(&mut rng, 100, 1..60) {
            let curve = all_dk(&graph);
            assert_eq!(curve.len(), graph.len());
            for (k, value) in curve {
                assert_eq!(dk(&graph, k as i64), Ok(value));
            }
        }
    }

    #[test]
    fn density_curve_matches_reference() {
        let mut rng = Pcg64::seed_from_u64(0xa12);
        for graph in random_graphs(&mut rng, 100, 1..60) {
            let record = elimination_order(&graph);
            assert_eq!(density_curve(&record), density_curve_reference(&record));
        }

        for (name, graph) in named_graphs() {
            let record = elimination_order(&graph);
            assert_eq!(
                density_curve(&record),
                density_curve_reference(&record),
                "graph: {name}"
            );
        }
    }

    #[test]
    fn curves_are_non_increasing() {
        let mut rng = Pcg64::seed_from_u64(0xa13);
        for graph in random_graphs(&mut rng, 100, 1..60) {
            let record = elimination_order(&graph);
            for curve in [degree_curve(&record), density_curve(&record)] {
                assert!(curve.iter().tuple_windows().all(|(a, b)| a >= b));
            }
        }
    }

    #[test]
    fn density_dominates_degree() {
        let mut rng = Pcg64::seed_from_u64(0xa14);
        for graph in random_graphs(&mut rng, 100, 1..60) {
            for point in curve_points(&elimination_order(&graph)) {
                assert!(point.dk <= point.alpha_approx);
            }
        }
    }

    #[test]
    fn star() {
        for leaves in 2..20 {
            let points = curve_points(&elimination_order(&CsrGraph::star(leaves)));
            // at k = 0 the whole star has average degree 2·leaves/(leaves+1) ∈ (1, 2)
            assert_eq!(points[0].dk, 1);
            assert_eq!(points[0].alpha_approx, 2);
        }
    }

    #[test]
    fn regular_graphs() {
        let graphs = [
            (CsrGraph::complete(7), 6),
            (CsrGraph::cycle(9), 2),
            (CsrGraph::petersen(), 3),
            (CsrGraph::cube(), 3),
        ];

        for (graph, degree) in graphs {
            let record = elimination_order(&graph);
            assert!(density_curve(&record).iter().all(|&a| a == degree));
        }
    }

    #[test]
    fn curve_point_json() {
        let point = CurvePoint {
            k: 1,
            dk: 2,
            alpha_approx: 3,
            alpha_exact: None,
        };
        assert_eq!(
            serde_json::to_string(&point).unwrap(),
            r#"{"k":1,"dk":2,"alpha_approx":3}"#
        );

        let point = CurvePoint {
            alpha_exact: Some(3),
            ..point
        };
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(serde_json::from_str::<CurvePoint>(&json).unwrap(), point);
    }
}
