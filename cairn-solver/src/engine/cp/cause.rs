use std::fmt::Display;

use crate::engine::cp::propagation::PropagatorId;

/// Who is responsible for a change to a domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cause {
    /// The change was made by applying a search decision (or its refutation).
    Decision,
    /// The change was inferred by a propagator.
    Propagator(PropagatorId),
    /// The change was made while building the model, or by the objective bound.
    Model,
}

impl Display for Cause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cause::Decision => write!(f, "decision"),
            Cause::Propagator(propagator) => write!(f, "{propagator}"),
            Cause::Model => write!(f, "model"),
        }
    }
}
