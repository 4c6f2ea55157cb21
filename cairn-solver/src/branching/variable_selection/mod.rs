//! Provides the [`VariableSelector`] trait which is required
//! for variable selectors to implement; the main method in this trait relies on
//! [`VariableSelector::select_variable`] to select a variable given the current state.
//!
//! Variable selectors are combined with a [`ValueSelector`](crate::branching::ValueSelector) by
//! the [`IndependentVariableValueBrancher`](crate::branching::branchers::IndependentVariableValueBrancher).

mod first_fail;
mod input_order;
mod random;
mod smallest;
mod variable_selector;

pub use first_fail::*;
pub use input_order::*;
pub use random::*;
pub use smallest::*;
pub use variable_selector::VariableSelector;
