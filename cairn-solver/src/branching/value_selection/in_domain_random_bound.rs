use crate::branching::value_selection::ValueSelector;
use crate::branching::SelectionContext;
use crate::engine::search::Decision;
use crate::engine::variables::DomainId;

/// A [`ValueSelector`] which assigns the variable to either its lower-bound or its upper-bound,
/// each with equal probability.
#[derive(Debug, Clone, Copy)]
pub struct InDomainRandomBound;

impl ValueSelector<DomainId> for InDomainRandomBound {
    fn select_value(
        &mut self,
        context: &mut SelectionContext,
        decision_variable: DomainId,
    ) -> Decision {
        let value = if context.random().generate_bool(0.5) {
            context.lower_bound(decision_variable)
        } else {
            context.upper_bound(decision_variable)
        };
        Decision::assign(decision_variable, value)
    }

    fn is_restart_pointless(&mut self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use crate::basic_types::TestRandom;
    use crate::branching::value_selection::InDomainRandomBound;
    use crate::branching::value_selection::ValueSelector;
    use crate::engine::cp::test_solver::TestSolver;
    use crate::engine::search::Decision;

    #[test]
    fn picks_one_of_the_bounds() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(3, 8);
        let mut test_random = TestRandom {
            bools: vec![true, false],
            ..Default::default()
        };
        let mut context = solver.selection_context(&mut test_random);

        let mut selector = InDomainRandomBound;

        assert_eq!(
            selector.select_value(&mut context, x),
            Decision::assign(x, 3)
        );
        assert_eq!(
            selector.select_value(&mut context, x),
            Decision::assign(x, 8)
        );
    }
}
