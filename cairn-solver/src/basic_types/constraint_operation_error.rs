use thiserror::Error;

#[cfg(doc)]
use crate::Solver;

/// Errors related to adding constraints to the [`Solver`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstraintOperationError {
    /// Error which indicates that a constraint was attempted to be added while the [`Solver`] was
    /// in an infeasible state.
    #[error("Adding constraint failed because the solver is in an infeasible state")]
    InfeasibleState,
    /// Error which indicate that adding a propagator led to infeasibility at the root.
    #[error("Adding the constraint failed because it is infeasible at the root")]
    InfeasiblePropagator,
    /// Error which indicates that the constraint was rejected because its arguments do not
    /// describe a valid model.
    #[error(transparent)]
    InvalidModel(#[from] InvalidModel),
}

/// Reasons for which a model is rejected while it is being built.
///
/// Once the [`Solver`] has recorded an invalid model, every subsequent solve call reports
/// [`crate::results::SatisfactionResult::InvalidModel`] without searching.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidModel {
    #[error("the argument arrays of '{constraint}' have different lengths ({expected} vs {actual})")]
    MismatchedLengths {
        constraint: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("task {task} of a cumulative constraint has a negative duration")]
    NegativeDuration { task: usize },
    #[error("task {task} of a cumulative constraint has a negative demand")]
    NegativeDemand { task: usize },
    #[error("variable {0} does not belong to this solver")]
    UnknownVariable(String),
    #[error("a sparse domain needs at least one value")]
    EmptySparseDomain,
}
