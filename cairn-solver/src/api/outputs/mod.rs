pub mod solution_iterator;

use crate::basic_types::InvalidModel;
use crate::basic_types::Solution;
use crate::engine::termination::ResourceLimitReached;
#[cfg(doc)]
use crate::termination::TerminationCondition;
#[cfg(doc)]
use crate::Solver;

/// The result of a call to [`Solver::find_solution`].
#[derive(Debug)]
#[allow(clippy::large_enum_variant, reason = "a solution is the common case")]
pub enum SatisfactionResult {
    /// Indicates that a solution was found and provides the corresponding [`Solution`].
    Satisfiable(Solution),
    /// Indicates that there is no solution to the satisfaction problem.
    Unsatisfiable,
    /// Indicates that it is not known whether a solution exists.
    Unknown(UnknownCause),
    /// The model was rejected while it was built; the search was not started.
    InvalidModel(InvalidModel),
}

/// The reason why the [`Solver`] could not decide a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownCause {
    /// A [`TerminationCondition`] stopped the search.
    LimitReached(ResourceLimitReached),
    /// The search space was exhausted, but non-refutable decisions were taken along the way, so
    /// part of it was never explored.
    IncompleteSearch,
}

/// The result of a call to [`Solver::find_optimal_solution`].
#[derive(Debug)]
#[allow(clippy::large_enum_variant, reason = "a solution is the common case")]
pub enum OptimisationResult {
    /// Indicates that an optimal solution has been found and proven to be optimal. It provides an
    /// instance of [`Solution`] which contains the optimal solution.
    Optimal(Solution),
    /// Indicates that a solution was found and provides an instance of [`Solution`] which contains
    /// best known solution by the solver.
    Satisfiable(Solution),
    /// Indicates that there is no solution to the problem.
    Unsatisfiable,
    /// Indicates that it is not known whether a solution exists.
    Unknown(UnknownCause),
    /// The model was rejected while it was built; the search was not started.
    InvalidModel(InvalidModel),
}
