use crate::{
    algorithm::{IterativeAlgorithm, TerminatingIterativeAlgorithm},
    graph::*,
};

use super::elimination::{EliminationState, RemovalRecord};

/// Reference scheduler that finds the node of minimum degree by scanning all remaining
/// nodes in each step. Runs in `O(n^2 + m)` and uses the same tie-breaking as
/// [`super::MinDegreeElimination`], so both produce identical records.
pub struct NaiveElimination<'a, G> {
    state: EliminationState<'a, G>,
}

impl<'a, G: AdjacencyList> NaiveElimination<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self {
            state: EliminationState::new(graph),
        }
    }

    pub fn run(mut self) -> RemovalRecord {
        while !self.is_completed() {
            self.execute_step();
        }
        self.state.into_record()
    }
}

impl<G: AdjacencyList> IterativeAlgorithm<RemovalRecord> for NaiveElimination<'_, G> {
    fn execute_step(&mut self) {
        let Some(u) = self
            .state
            .remaining_nodes()
            .min_by_key(|&u| (self.state.degree_of(u), u))
        else {
            return;
        };

        self.state.eliminate(u, |_, _| {});
    }

    fn is_completed(&self) -> bool {
        self.state.number_of_remaining_nodes() == 0
    }

    fn best_known_solution(&mut self) -> Option<RemovalRecord> {
        self.is_completed().then(|| self.state.record().clone())
    }
}

impl<G: AdjacencyList> TerminatingIterativeAlgorithm<RemovalRecord> for NaiveElimination<'_, G> {}

/// Computes the minimum-degree elimination order by linear scans
pub fn naive_elimination_order<G: AdjacencyList>(graph: &G) -> RemovalRecord {
    NaiveElimination::new(graph).run()
}
