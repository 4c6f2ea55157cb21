use thiserror::Error;

use crate::engine::EmptyDomain;

/// The result of invoking a constraint programming propagator. The propagation can either succeed
/// or identify a conflict.
pub type PropagationStatus = Result<(), Inconsistency>;

/// Why a propagator could not reach a consistent state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inconsistency {
    /// A domain operation would have removed every remaining value of a variable.
    #[error(transparent)]
    EmptyDomain(#[from] EmptyDomain),
    /// The propagator found its constraint to be violated without emptying a domain.
    #[error("the constraint is violated")]
    Violated,
}
