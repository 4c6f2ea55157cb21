//! Contains structures for tie-breaking; these structures provide an interface for deciding
//! between two variables when there is a tie between them (for example during variable
//! selection there can be two variables with the same smallest value in the domain).
//!
//! The responsibility of a [`TieBreaker`] is two-fold:
//! - First of all, it should have the ability to break arbitrary ties between values, for example,
//!   if we consider the [`Smallest`] strategy then a tie could occur when two variables have the
//!   same lower-bound; one tie-breaking strategy could be to simply pick the first element that was
//!   encountered (implemented in [`InOrderTieBreaker`]), another to pick one of them uniformly at
//!   random (implemented in [`RandomTieBreaker`]).
//! - Secondly, it should keep track of which variable to consider based on the value (and based on
//!   the [`Direction`]); if we once again look at the example of [`Smallest`] then the
//!   [`TieBreaker`] should only consider tie-breaking between variables with the same value or
//!   update the "best" variable found so far.
//!
//! The following example shows how a simple [`TieBreaker`] ([`InOrderTieBreaker`]) will
//! select the first variable with the lowest-value that it has found.
//!
//! ```rust
//! # use cairn_solver::branching::InOrderTieBreaker;
//! # use cairn_solver::variables::DomainId;
//! # use cairn_solver::branching::Direction;
//! # use cairn_solver::branching::TieBreaker;
//! let mut breaker = InOrderTieBreaker::new(Direction::Minimum);
//!
//! // We consider 3 variables, where only variables with ID 1 and ID 2 should be considered.
//! // We expect the variable with ID 1 to be selected since it was the first one with
//! // the minimum value which was considered.
//! breaker.consider(DomainId::new(0), 10);
//! breaker.consider(DomainId::new(1), 5);
//! breaker.consider(DomainId::new(2), 5);
//!
//! let selected = breaker.select();
//! assert_eq!(selected, Some(DomainId::new(1)));
//! ```

mod in_order_tie_breaker;
mod random_tie_breaker;

use std::cmp::Ordering;

pub use in_order_tie_breaker::*;
pub use random_tie_breaker::*;

#[cfg(doc)]
use crate::branching::Smallest;

/// The interface for a tie-breaker which considers additional elements with values; depending on
/// the [`Direction`] it should only consider variables with the "best" value for selection.
pub trait TieBreaker<Var, Value> {
    /// Consider the next additional element with corresponding value
    fn consider(&mut self, variable: Var, value: Value);

    /// Get the final variable which was selected. After this method is called it resets the stored
    /// values such that it can be used again.
    fn select(&mut self) -> Option<Var>;

    /// Returns whether the tie-breaker is attempting to find the minimum ([`Direction::Minimum`])
    /// or maximum ([`Direction::Maximum`]) element.
    fn get_direction(&self) -> Direction;
}

/// Whether the value comparison should find the maximum [`Direction::Maximum`] variable or the
/// [`Direction::Minimum`] variable.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Maximum,
    Minimum,
}

impl Direction {
    /// How `value` compares to `incumbent`, where [`Ordering::Greater`] means `value` is strictly
    /// better.
    fn rank<Value: PartialOrd>(self, value: &Value, incumbent: &Value) -> Ordering {
        let ordering = value.partial_cmp(incumbent).unwrap_or(Ordering::Equal);
        match self {
            Direction::Maximum => ordering,
            Direction::Minimum => ordering.reverse(),
        }
    }
}
