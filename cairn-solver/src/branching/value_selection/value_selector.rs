#[cfg(doc)]
use crate::branching::value_selection::InDomainMin;
#[cfg(doc)]
use crate::branching::value_selection::InDomainRandom;
use crate::branching::SelectionContext;
use crate::engine::search::Decision;

/// A trait containing the interface for [`ValueSelector`]s,
/// specifying the appropriate hooks into the solver and the methods required for selecting a value
/// for a given variable.
pub trait ValueSelector<Var> {
    /// Determines which value in the domain of `decision_variable` to branch next on.
    /// The domain of the `decision_variable` variable should have at least 2 values in it (as it
    /// otherwise should not have been selected as `decision_variable`). Returns a
    /// [`Decision`] specifying the required change in the domain.
    fn select_value(&mut self, context: &mut SelectionContext, decision_variable: Var) -> Decision;

    /// This method is called when a solution is found; either when iterating over all solutions in
    /// the case of a satisfiable problem or on solutions of increasing quality when solving an
    /// optimisation problem.
    fn on_solution(&mut self) {}

    /// This method returns whether a restart is *currently* pointless for the [`ValueSelector`].
    ///
    /// For example, if a [`ValueSelector`] is using a static strategy (e.g. [`InDomainMin`]) then a
    /// restart is pointless; however, for a [`ValueSelector`] like [`InDomainRandom`] which changes
    /// throughout the search process restarting is not pointless.
    fn is_restart_pointless(&mut self) -> bool {
        true
    }
}
