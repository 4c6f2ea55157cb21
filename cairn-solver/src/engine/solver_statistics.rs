use crate::create_statistics_struct;

create_statistics_struct!(
    /// Structure responsible for storing several statistics of the solving process of the
    /// [`ConstraintSatisfactionSolver`](crate::engine::ConstraintSatisfactionSolver).
    SolverStatistics {
        /// The number of search nodes which were opened
        num_nodes: u64,
        /// The number of contradictions encountered during search
        num_fails: u64,
        /// The number of solutions found
        num_solutions: u64,
        /// The number of decisions taken by the solver
        num_decisions: u64,
        /// The number of decisions which were undone
        num_backtracks: u64,
        /// The number of times the solver has restarted
        num_restarts: u64,
        /// The number of propagator invocations
        num_propagations: u64,
        /// The amount of time which is spent in the solver, in milliseconds
        time_spent_in_solver: u64,
});
