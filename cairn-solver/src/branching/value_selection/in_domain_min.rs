use super::ValueSelector;
use crate::branching::SelectionContext;
use crate::engine::search::Decision;
use crate::engine::variables::DomainId;

/// [`ValueSelector`] which chooses to assign the provided variable to its lowest-bound.
#[derive(Debug, Copy, Clone, Default)]
pub struct InDomainMin;

impl ValueSelector<DomainId> for InDomainMin {
    fn select_value(
        &mut self,
        context: &mut SelectionContext,
        decision_variable: DomainId,
    ) -> Decision {
        Decision::assign(decision_variable, context.lower_bound(decision_variable))
    }
}

#[cfg(test)]
mod tests {
    use crate::basic_types::TestRandom;
    use crate::branching::value_selection::InDomainMin;
    use crate::branching::value_selection::ValueSelector;
    use crate::engine::cp::test_solver::TestSolver;
    use crate::engine::search::Decision;

    #[test]
    fn test_returns_correct_decision() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 10);
        let mut test_rng = TestRandom::default();
        let mut context = solver.selection_context(&mut test_rng);

        let mut selector = InDomainMin;

        let selected = selector.select_value(&mut context, x);
        assert_eq!(selected, Decision::assign(x, 0));
    }
}
