use crate::branching::Brancher;
use crate::branching::SelectionContext;
use crate::engine::search::Decision;
use crate::engine::variables::DomainId;
use crate::statistics::StatisticLogger;

/// A [`Brancher`] which makes the decisions of the wrapped brancher non-refutable.
///
/// Upon backtracking such a decision is discarded instead of being replaced by its refutation, so
/// the search below a greedy decision is not complete. When the search runs out of refutable
/// decisions it reports that the search space was not fully explored.
#[derive(Debug)]
pub struct Greedy<B> {
    brancher: B,
}

impl<B: Brancher> Greedy<B> {
    pub fn new(brancher: B) -> Self {
        Greedy { brancher }
    }
}

impl<B: Brancher> Brancher for Greedy<B> {
    fn log_statistics(&self, statistic_logger: StatisticLogger) {
        self.brancher.log_statistics(statistic_logger)
    }

    fn next_decision(&mut self, context: &mut SelectionContext) -> Option<Decision> {
        self.brancher
            .next_decision(context)
            .map(Decision::non_refutable)
    }

    fn compute_decision(
        &mut self,
        context: &mut SelectionContext,
        variable: DomainId,
    ) -> Option<Decision> {
        self.brancher
            .compute_decision(context, variable)
            .map(Decision::non_refutable)
    }

    fn on_conflict(&mut self, context: &mut SelectionContext, last_decision: Option<Decision>) {
        self.brancher.on_conflict(context, last_decision)
    }

    fn on_backtrack(&mut self) {
        self.brancher.on_backtrack()
    }

    fn on_solution(&mut self) {
        self.brancher.on_solution()
    }

    fn on_restart(&mut self) {
        self.brancher.on_restart()
    }

    fn should_restart(&mut self) -> bool {
        self.brancher.should_restart()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::TestRandom;
    use crate::branching::branchers::IndependentVariableValueBrancher;
    use crate::branching::InDomainMin;
    use crate::branching::InputOrder;
    use crate::engine::cp::test_solver::TestSolver;

    #[test]
    fn decisions_are_not_refutable() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 3);
        let mut brancher = Greedy::new(IndependentVariableValueBrancher::new(
            InputOrder::new(&[x]),
            InDomainMin,
        ));
        let mut test_rng = TestRandom::default();
        let mut context = solver.selection_context(&mut test_rng);

        let decision = brancher
            .next_decision(&mut context)
            .expect("x is not fixed");
        assert!(!decision.refutable);
        assert_eq!(decision, Decision::assign(x, 0).non_refutable());
    }
}
