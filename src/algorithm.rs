//! Our elimination algorithms are implemented using the [`IterativeAlgorithm`] trait.
//!
//! An algorithm does a small, well-defined amount of work per step (for the schedulers:
//! exactly one elimination) and can be inspected in between. This allows callers to observe
//! intermediate states, e.g. to check invariants in tests, without the algorithm exposing
//! its internals.

/// [`IterativeAlgorithm`] provides a consistent interface to execute all our algorithms. Observe
/// that it does not prescribe any constructor which is left to the algorithm designer as each
/// algorithm has specific parameters et cetera. The construction phase should, in general, be
/// quite fast and only involve little computation.
///
/// As an adopter of [`IterativeAlgorithm`], you have to implement at least the methods
///   [`IterativeAlgorithm::execute_step`],
///   [`IterativeAlgorithm::is_completed`] and [`IterativeAlgorithm::best_known_solution`].
///
/// If your algorithm is known to eventually terminate please also implement the marker trait
/// [`TerminatingIterativeAlgorithm`]. It offers and easy interface to run the algorithm to completion.
///
/// # Example
/// ```
/// use lsa::algorithm::IterativeAlgorithm;
/// use lsa::graph::{AdjacencyList, Node};
/// struct MyAlgorithm<'a, G> {
///    graph: &'a G,
///    solution: Option<u32>
/// }
///
/// impl<'a, G> IterativeAlgorithm<u32> for MyAlgorithm<'a, G> where G: 'a + AdjacencyList {
///     fn execute_step(&mut self) {
///         // do a bounded amount of work to advance the computation
///     }
///
///     fn is_completed(&self) -> bool {
///         self.solution.is_some()
///     }
///
///     fn best_known_solution(&mut self) -> Option<u32> {
///         self.solution.clone()
///     }
/// }
/// ```
pub trait IterativeAlgorithm<Result> {
    /// Advances the computation of this algorithm by one step.
    fn execute_step(&mut self);

    /// Returns true iff the algorithm is completed and [`IterativeAlgorithm::execute_step`] may not
    /// be called again.
    fn is_completed(&self) -> bool;

    /// Returns the currently best known solution or None if no solution is known yet.
    fn best_known_solution(&mut self) -> Option<Result>;
}

/// [`TerminatingIterativeAlgorithm`] is a marker trait, i.e. to adopt it, you give an empty `impl`
/// block. Add this trait to algorithms that will eventually terminate (i.e. in contrast to an
/// algorithm does not know when to stop).
///
/// # Example
///
/// ```ignore
/// use lsa::algorithm::{IterativeAlgorithm, TerminatingIterativeAlgorithm};
///
/// struct MyAlgorithm {};
///
/// impl IterativeAlgorithm for MyAlgorithm {
///    /* implement all methods required */
/// }
///
/// impl TerminatingIterativeAlgorithm for MyAlgorithm {
///    // no implementation required
/// }
/// ```
pub trait TerminatingIterativeAlgorithm<Result>: IterativeAlgorithm<Result> {
    /// Execute the algorithm until it completed and return the solution.
    fn run_to_completion(&mut self) -> Option<Result> {
        while !self.is_completed() {
            self.execute_step();
        }
        self.best_known_solution()
    }
}
