use log::warn;

use super::VariableSelector;
use crate::branching::SelectionContext;
use crate::engine::variables::DomainId;

/// A [`VariableSelector`] which selects an unfixed variable uniformly at random, using the random
/// generator of the [`SelectionContext`].
#[derive(Debug)]
pub struct RandomSelector {
    variables: Vec<DomainId>,
}

impl RandomSelector {
    pub fn new(variables: &[DomainId]) -> Self {
        if variables.is_empty() {
            warn!("The RandomSelector variable selector was not provided with any variables");
        }
        Self {
            variables: variables.to_vec(),
        }
    }
}

impl VariableSelector<DomainId> for RandomSelector {
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<DomainId> {
        let unfixed = self
            .variables
            .iter()
            .copied()
            .filter(|&variable| !context.is_integer_fixed(variable))
            .collect::<Vec<_>>();

        if unfixed.is_empty() {
            return None;
        }

        let index = context.random().generate_usize_in_range(0..unfixed.len());
        Some(unfixed[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::TestRandom;
    use crate::engine::test_solver::TestSolver;

    #[test]
    fn test_selects_randomly() {
        let mut solver = TestSolver::default();
        let integer_variables = [
            solver.new_variable(0, 10),
            solver.new_variable(5, 20),
            solver.new_variable(1, 3),
        ];
        let mut test_rng = TestRandom {
            usizes: vec![1],
            ..Default::default()
        };
        let mut strategy = RandomSelector::new(&integer_variables);

        let mut context = solver.selection_context(&mut test_rng);
        assert_eq!(
            Some(integer_variables[1]),
            strategy.select_variable(&mut context)
        );
    }

    #[test]
    fn fixed_variables_are_skipped() {
        let mut solver = TestSolver::default();
        let integer_variables = [
            solver.new_variable(0, 0),
            solver.new_variable(5, 20),
            solver.new_variable(1, 3),
        ];
        let mut test_rng = TestRandom {
            usizes: vec![1],
            ..Default::default()
        };
        let mut strategy = RandomSelector::new(&integer_variables);

        let mut context = solver.selection_context(&mut test_rng);
        assert_eq!(
            Some(integer_variables[2]),
            strategy.select_variable(&mut context)
        );
    }
}
