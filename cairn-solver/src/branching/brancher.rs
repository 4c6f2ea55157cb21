#[cfg(doc)]
use crate::basic_types::Random;
#[cfg(doc)]
use crate::branching;
#[cfg(doc)]
use crate::branching::value_selection::ValueSelector;
#[cfg(doc)]
use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
#[cfg(doc)]
use crate::create_statistics_struct;
use crate::engine::search::Decision;
use crate::engine::variables::DomainId;
use crate::statistics::StatisticLogger;
#[cfg(doc)]
use crate::Solver;

/// A trait for definining a branching strategy (oftentimes utilising a [`VariableSelector`] and a
/// [`ValueSelector`]).
///
/// In general, implementations of this trait define how the search of the solver proceeds (i.e. it
/// controls how the solver determines which part of the search space to explore). It is required
/// that the resulting decision creates a smaller domain for at least 1 of the variables (and more
/// domains can be affected due to subsequent inference). See [`branching`] for
/// example usages.
///
/// If the [`Brancher`] (or any component thereof) is implemented incorrectly then the
/// behaviour of the solver is undefined.
pub trait Brancher {
    /// Logs statistics of the brancher using the provided [`StatisticLogger`].
    ///
    /// It is recommended to create a struct through the [`create_statistics_struct!`] macro!
    fn log_statistics(&self, _statistic_logger: StatisticLogger) {}

    /// Returns the next decision concerning a single variable and value (or [`None`] if all
    /// variables under consideration are assigned).
    ///
    /// Note that this method **cannot** apply the decision, it should only return a suggestion
    /// in the form of a [`Decision`]; the [`SelectionContext`] is only mutable to account for the
    /// usage of random generators (e.g. see [`Random`]).
    fn next_decision(&mut self, context: &mut SelectionContext) -> Option<Decision>;

    /// Returns a decision on the given variable, as this brancher would have taken it had it
    /// selected the variable itself. Returns [`None`] if the variable is fixed or if the brancher
    /// does not branch on it.
    fn compute_decision(
        &mut self,
        _context: &mut SelectionContext,
        _variable: DomainId,
    ) -> Option<Decision> {
        None
    }

    /// Called when propagation fails, before the solver backtracks; the domains are in the state
    /// in which the contradiction was found. `last_decision` is the most recent decision on the
    /// decision path, if any.
    fn on_conflict(&mut self, _context: &mut SelectionContext, _last_decision: Option<Decision>) {}

    /// A function which is called whenever a decision is undone by the [`Solver`].
    fn on_backtrack(&mut self) {}

    /// This method is called when a solution is found; either when iterating over all solutions in
    /// the case of a satisfiable problem or on solutions of increasing quality when solving an
    /// optimisation problem.
    fn on_solution(&mut self) {}

    /// This method is called whenever a restart is performed.
    fn on_restart(&mut self) {}

    /// Called after every conflict; returning `true` makes the solver backtrack to the root and
    /// continue the search from there.
    fn should_restart(&mut self) -> bool {
        false
    }
}

impl<B: Brancher + ?Sized> Brancher for Box<B> {
    fn log_statistics(&self, statistic_logger: StatisticLogger) {
        (**self).log_statistics(statistic_logger)
    }

    fn next_decision(&mut self, context: &mut SelectionContext) -> Option<Decision> {
        (**self).next_decision(context)
    }

    fn compute_decision(
        &mut self,
        context: &mut SelectionContext,
        variable: DomainId,
    ) -> Option<Decision> {
        (**self).compute_decision(context, variable)
    }

    fn on_conflict(&mut self, context: &mut SelectionContext, last_decision: Option<Decision>) {
        (**self).on_conflict(context, last_decision)
    }

    fn on_backtrack(&mut self) {
        (**self).on_backtrack()
    }

    fn on_solution(&mut self) {
        (**self).on_solution()
    }

    fn on_restart(&mut self) {
        (**self).on_restart()
    }

    fn should_restart(&mut self) -> bool {
        (**self).should_restart()
    }
}
