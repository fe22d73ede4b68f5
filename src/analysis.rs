use std::{fs::File, io::BufReader, path::Path};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{arboricity::*, graph::*};

/// Knobs of [`GraphAnalysis::new`]; missing fields of a JSON config take their default
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Largest `k` reported; all `k` in `0..n` if None
    pub max_k: Option<NumNodes>,
    /// Compute exact values for graphs small enough for the exact oracle
    pub exact: bool,
    /// Use the rayon version of the exact oracle
    pub parallel_exact: bool,
    /// Analyse only the largest connected component
    pub largest_component: bool,
    /// Embed the removal record and the witnesses of each reported `k` into the report
    pub include_record: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_k: None,
            exact: true,
            parallel_exact: false,
            largest_component: false,
            include_record: false,
        }
    }
}

impl AnalysisConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}

/// Bound checks of both estimates against the exact value at one `k`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointCheck {
    pub k: NumNodes,
    pub degree: BoundCheck,
    pub density: BoundCheck,
}

/// Exact values and their comparison with the estimates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExactComparison {
    pub checks: Vec<PointCheck>,
    pub degree_statistics: RatioStatistics,
    pub density_statistics: RatioStatistics,
}

/// [`RemovalEntry`] whose node is given by its id in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportedRemoval {
    pub node: u64,
    pub degree: NumNodes,
    pub step: NumNodes,
    pub vertices_before: NumNodes,
    pub edges_before: NumEdges,
}

impl ReportedRemoval {
    fn new(entry: &RemovalEntry, mapper: &NodeMapper) -> Self {
        Self {
            node: mapper.old_id_of(entry.node),
            degree: entry.degree,
            step: entry.step,
            vertices_before: entry.vertices_before,
            edges_before: entry.edges_before,
        }
    }
}

/// [`WitnessSubgraph`] with sorted input ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportedSubgraph {
    pub nodes: Vec<u64>,
    pub number_of_edges: NumEdges,
}

impl ReportedSubgraph {
    fn new(witness: &WitnessSubgraph, mapper: &NodeMapper) -> Self {
        let mut nodes = witness
            .nodes
            .iter()
            .map(|&u| mapper.old_id_of(u))
            .collect::<Vec<_>>();
        nodes.sort_unstable();

        Self {
            nodes,
            number_of_edges: witness.number_of_edges,
        }
    }
}

/// Subgraphs certifying `dk` ([`degree_witness`]) and the density curve
/// ([`density_witness`]) at `k`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportedWitness {
    pub k: NumNodes,
    pub degree: ReportedSubgraph,
    pub density: ReportedSubgraph,
}

impl ReportedWitness {
    fn new(record: &RemovalRecord, k: NumNodes, mapper: &NodeMapper) -> Self {
        Self {
            k,
            degree: ReportedSubgraph::new(&degree_witness(record, k), mapper),
            density: ReportedSubgraph::new(&density_witness(record, k), mapper),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GraphAnalysis {
    pub name: String,
    pub number_of_nodes: NumNodes,
    pub number_of_edges: NumEdges,
    pub density: f64,
    pub is_empty_graph: bool,
    pub degeneracy: NumNodes,
    pub arboricity_bound: NumNodes,
    pub points: Vec<CurvePoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact: Option<ExactComparison>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<Vec<ReportedRemoval>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub witnesses: Option<Vec<ReportedWitness>>,
}

impl GraphAnalysis {
    /// Same as [`GraphAnalysis::with_mapper`] where the nodes of `graph` are their own
    /// external ids.
    pub fn new<G: AdjacencyList>(name: &str, graph: &G, config: &AnalysisConfig) -> Self {
        Self::with_mapper(name, graph, &NodeMapper::identity(graph.number_of_nodes()), config)
    }

    /// Runs one elimination of `graph` (or its largest component) and evaluates both
    /// curves. Exact values are added if requested and the graph is small enough; otherwise
    /// the analysis falls back to the estimates only.
    ///
    /// `mapper` translates the nodes of `graph` into the ids of the input; reported nodes
    /// carry these ids.
    pub fn with_mapper<G: AdjacencyList>(
        name: &str,
        graph: &G,
        mapper: &NodeMapper,
        config: &AnalysisConfig,
    ) -> Self {
        if config.largest_component {
            let (component, inner) = graph.largest_connected_component();
            info!(
                "{name}: largest component has {} of {} nodes",
                component.number_of_nodes(),
                graph.number_of_nodes()
            );
            Self::analyse(name, &component, &mapper.compose(&inner), config)
        } else {
            Self::analyse(name, graph, mapper, config)
        }
    }

    fn analyse<G: AdjacencyList>(
        name: &str,
        graph: &G,
        mapper: &NodeMapper,
        config: &AnalysisConfig,
    ) -> Self {
        debug_assert_eq!(mapper.len(), graph.len());
        let n = graph.number_of_nodes();
        let m = graph.number_of_edges();
        info!("{name}: analysing graph with n={n} and m={m}");

        let record = elimination_order(graph);
        let mut points = curve_points(&record);
        if let Some(max_k) = config.max_k {
            points.truncate((max_k as usize).saturating_add(1));
        }

        let exact = if config.exact {
            Self::compare_with_exact(name, graph, &mut points, config.parallel_exact)
        } else {
            None
        };

        let (record_ids, witnesses) = if config.include_record {
            (
                Some(
                    record
                        .iter()
                        .map(|e| ReportedRemoval::new(e, mapper))
                        .collect(),
                ),
                Some(
                    points
                        .iter()
                        .map(|p| ReportedWitness::new(&record, p.k, mapper))
                        .collect(),
                ),
            )
        } else {
            (None, None)
        };

        let density = if n < 2 {
            0.0
        } else {
            2.0 * m as f64 / (n as f64 * (n - 1) as f64)
        };

        Self {
            name: name.to_string(),
            number_of_nodes: n,
            number_of_edges: m,
            density,
            is_empty_graph: record.is_empty(),
            degeneracy: degeneracy(&record),
            arboricity_bound: arboricity_bound(&record),
            points,
            exact,
            record: record_ids,
            witnesses,
        }
    }

    fn compare_with_exact<G: AdjacencyList>(
        name: &str,
        graph: &G,
        points: &mut [CurvePoint],
        parallel: bool,
    ) -> Option<ExactComparison> {
        let oracle = match ExactOracle::try_new(graph) {
            Ok(oracle) => oracle,
            Err(err) => {
                info!("{name}: {err}; reporting estimates only");
                return None;
            }
        };

        let curve = if parallel {
            oracle.alpha_curve_par()
        } else {
            oracle.alpha_curve()
        };

        let checks: Vec<PointCheck> = points
            .iter_mut()
            .zip(curve)
            .map(|(point, alpha)| {
                point.alpha_exact = Some(alpha);
                PointCheck {
                    k: point.k,
                    degree: verify(point.dk, alpha),
                    density: verify(point.alpha_approx, alpha),
                }
            })
            .collect();

        let comparison = ExactComparison {
            degree_statistics: checks.iter().map(|c| c.degree).collect(),
            density_statistics: checks.iter().map(|c| c.density).collect(),
            checks,
        };

        debug!(
            "{name}: {} of {} density estimates violate the bounds",
            comparison.density_statistics.violations(),
            comparison.checks.len()
        );

        Some(comparison)
    }

    /// Returns true if an exact comparison exists and the density estimate violated
    /// `dk <= alpha <= 2·dk` at some `k`
    pub fn has_density_violation(&self) -> bool {
        self.exact
            .as_ref()
            .is_some_and(|e| e.density_statistics.violations() > 0)
    }
}
