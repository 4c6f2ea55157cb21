//! A [`TerminationCondition`] is a condition which is polled by the solver during the search
//! process. It indicates when the solver should stop, even if no definitive conclusions have been
//! made. The most common example would be [`time_budget::TimeBudget`], which gives the solver a
//! certain time budget to complete its search.
//!
//! The condition is polled once every time the search opens a node. Stopping leaves the search
//! where it was, so it can be resumed later with a fresh condition.

use std::time::Duration;

use thiserror::Error;

pub(crate) mod combinator;
pub(crate) mod indefinite;
pub(crate) mod node_budget;
pub(crate) mod solution_budget;
pub(crate) mod time_budget;

pub use combinator::*;
pub use indefinite::*;
pub use node_budget::*;
pub use solution_budget::*;
pub use time_budget::*;

/// The limit which made the solver stop.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceLimitReached {
    #[error("the node budget of {0} was exhausted")]
    Nodes(u64),
    #[error("the time budget of {0:?} was exhausted")]
    Time(Duration),
    #[error("the solution budget of {0} was exhausted")]
    Solutions(u64),
}

/// The central trait that defines a termination condition. A termination condition determines when
/// the solver should give up searching for solutions.
pub trait TerminationCondition {
    /// Returns the exhausted limit when the solver should stop, `None` otherwise.
    fn should_stop(&mut self) -> Option<ResourceLimitReached>;

    /// Called every time the search opens a node and the condition did not ask to stop.
    fn node_opened(&mut self) {}

    /// Called every time the search finds a solution.
    fn solution_found(&mut self) {}
}

impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> Option<ResourceLimitReached> {
        match self {
            Some(t) => t.should_stop(),
            None => None,
        }
    }

    fn node_opened(&mut self) {
        if let Some(t) = self {
            t.node_opened()
        }
    }

    fn solution_found(&mut self) {
        if let Some(t) = self {
            t.solution_found()
        }
    }
}

impl<T: TerminationCondition + ?Sized> TerminationCondition for &mut T {
    fn should_stop(&mut self) -> Option<ResourceLimitReached> {
        (**self).should_stop()
    }

    fn node_opened(&mut self) {
        (**self).node_opened()
    }

    fn solution_found(&mut self) {
        (**self).solution_found()
    }
}
