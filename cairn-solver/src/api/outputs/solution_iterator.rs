//! Contains the structures corresponding to solution iterations.

use crate::basic_types::InvalidModel;
use crate::branching::Brancher;
use crate::engine::search::SearchOutcome;
use crate::engine::termination::ResourceLimitReached;
use crate::engine::ConstraintSatisfactionSolver;
use crate::results::Solution;
use crate::termination::TerminationCondition;
#[cfg(doc)]
use crate::Solver;

/// A struct which allows the retrieval of multiple solutions to a satisfaction problem.
///
/// Every call to [`SolutionIterator::next_solution`] resumes the depth-first search where the
/// previous solution was found, so no solution is reported twice. When the iterator is dropped the
/// [`Solver`] is returned to the root.
#[derive(Debug)]
pub struct SolutionIterator<'solver, 'brancher, 'termination, B: Brancher, T> {
    solver: &'solver mut ConstraintSatisfactionSolver,
    brancher: &'brancher mut B,
    termination: &'termination mut T,
    has_solution: bool,
    finished: bool,
}

impl<'solver, 'brancher, 'termination, B: Brancher, T: TerminationCondition>
    SolutionIterator<'solver, 'brancher, 'termination, B, T>
{
    pub(crate) fn new(
        solver: &'solver mut ConstraintSatisfactionSolver,
        brancher: &'brancher mut B,
        termination: &'termination mut T,
    ) -> Self {
        solver.restore_state_at_root(brancher);

        SolutionIterator {
            solver,
            brancher,
            termination,
            has_solution: false,
            finished: false,
        }
    }

    /// Find the next solution.
    ///
    /// After [`IteratedSolution::Stopped`] the search can be resumed by calling this method
    /// again; every other non-solution outcome is final, and is followed by
    /// [`IteratedSolution::Finished`].
    pub fn next_solution(&mut self) -> IteratedSolution {
        if self.finished {
            return IteratedSolution::Finished;
        }

        if let Some(reason) = self.solver.invalid_model() {
            self.finished = true;
            return IteratedSolution::InvalidModel(reason.clone());
        }

        match self.solver.solve(self.termination, self.brancher, None) {
            SearchOutcome::Solution => {
                self.has_solution = true;
                IteratedSolution::Solution(self.solver.solution())
            }
            SearchOutcome::Exhausted { complete } => {
                self.finished = true;
                if !complete {
                    IteratedSolution::Incomplete
                } else if self.has_solution {
                    IteratedSolution::Finished
                } else {
                    IteratedSolution::Unsatisfiable
                }
            }
            SearchOutcome::Stopped(limit) => IteratedSolution::Stopped(limit),
        }
    }
}

impl<B: Brancher, T: TerminationCondition> Iterator for SolutionIterator<'_, '_, '_, B, T> {
    type Item = Solution;

    fn next(&mut self) -> Option<Solution> {
        match self.next_solution() {
            IteratedSolution::Solution(solution) => Some(solution),
            _ => None,
        }
    }
}

impl<B: Brancher, T> Drop for SolutionIterator<'_, '_, '_, B, T> {
    fn drop(&mut self) {
        self.solver.restore_state_at_root(self.brancher);
    }
}

/// Enum which specifies the status of the call to [`SolutionIterator::next_solution`].
#[allow(clippy::large_enum_variant, reason = "a solution is the common case")]
#[derive(Debug)]
pub enum IteratedSolution {
    /// A new solution was identified.
    Solution(Solution),

    /// No more solutions exist.
    Finished,

    /// The termination condition stopped the search; it can be resumed.
    Stopped(ResourceLimitReached),

    /// The search space was exhausted, but non-refutable decisions cut parts of it away, so
    /// there may be solutions which were not reported.
    Incomplete,

    /// There exists no solution.
    Unsatisfiable,

    /// The model was rejected while it was built.
    InvalidModel(InvalidModel),
}
