//! Provides several implementations of [`Brancher`]s.
//!
//! [`IndependentVariableValueBrancher`] composes a [`VariableSelector`] with a [`ValueSelector`];
//! the other branchers implement a heuristic which needs more information than a single variable
//! selector has access to, or wrap other branchers.
#[cfg(doc)]
use crate::branching::Brancher;
#[cfg(doc)]
use crate::branching::ValueSelector;
#[cfg(doc)]
use crate::branching::VariableSelector;

mod activity_based;
mod dom_over_w_deg;
mod greedy;
mod independent_variable_value_brancher;
mod last_conflict;
mod random_brancher;
mod sequencer;

pub use activity_based::*;
pub use dom_over_w_deg::*;
pub use greedy::*;
pub use independent_variable_value_brancher::*;
pub use last_conflict::*;
pub use random_brancher::*;
pub use sequencer::*;
