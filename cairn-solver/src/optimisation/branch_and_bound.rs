use log::debug;

use super::OptimisationDirection;
use crate::branching::Brancher;
use crate::engine::search::SearchOutcome;
use crate::engine::ConstraintSatisfactionSolver;
use crate::results::OptimisationResult;
use crate::results::Solution;
use crate::results::UnknownCause;
use crate::termination::TerminationCondition;
use crate::variables::AffineView;
use crate::variables::DomainId;
use crate::variables::TransformableVariable;

/// Depth-first branch and bound over a single objective variable.
///
/// The search is never restarted: after every solution it backtracks as usual, but from then on
/// every node has to improve strictly on the best solution found so far. Maximisation is
/// expressed as minimisation of the negated objective.
///
/// The brancher should fix the objective (or propagation should); the value of the objective in
/// a solution is read from its lower bound.
#[derive(Debug, Clone, Copy)]
pub struct BranchAndBound {
    direction: OptimisationDirection,
    objective: DomainId,
}

impl BranchAndBound {
    pub fn new(direction: OptimisationDirection, objective: DomainId) -> Self {
        BranchAndBound {
            direction,
            objective,
        }
    }

    /// The view which is minimised.
    fn minimised(&self) -> AffineView<DomainId> {
        match self.direction {
            OptimisationDirection::Maximise => self.objective.scaled(-1),
            OptimisationDirection::Minimise => self.objective.scaled(1),
        }
    }

    pub(crate) fn optimise(
        &self,
        solver: &mut ConstraintSatisfactionSolver,
        brancher: &mut impl Brancher,
        termination: &mut impl TerminationCondition,
    ) -> OptimisationResult {
        let minimised = self.minimised();
        let mut best: Option<(Solution, i32)> = None;

        loop {
            let cut = best.as_ref().map(|&(_, value)| (minimised, value));

            match solver.solve(termination, brancher, cut) {
                SearchOutcome::Solution => {
                    let value = solver.get_lower_bound(&minimised);
                    debug!(
                        "found a solution with objective value {}",
                        solver.get_lower_bound(&self.objective)
                    );
                    best = Some((solver.solution(), value));
                }
                SearchOutcome::Exhausted { complete } => {
                    return match best {
                        Some((solution, _)) if complete => OptimisationResult::Optimal(solution),
                        Some((solution, _)) => OptimisationResult::Satisfiable(solution),
                        None if complete => OptimisationResult::Unsatisfiable,
                        None => OptimisationResult::Unknown(UnknownCause::IncompleteSearch),
                    };
                }
                SearchOutcome::Stopped(limit) => {
                    return match best {
                        Some((solution, _)) => OptimisationResult::Satisfiable(solution),
                        None => OptimisationResult::Unknown(UnknownCause::LimitReached(limit)),
                    };
                }
            }
        }
    }
}
