use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::basic_types::Random;
use crate::branching::value_selection::InDomainRandom;
use crate::branching::value_selection::ValueSelector;
use crate::branching::variable_selection::RandomSelector;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::Brancher;
use crate::branching::SelectionContext;
use crate::engine::search::Decision;
use crate::engine::variables::DomainId;

/// A [`Brancher`] which selects an unfixed variable uniformly at random and assigns it to a random
/// value.
///
/// For a domain which can contain holes the value is drawn uniformly from the domain, otherwise it
/// is either the lower-bound or the upper-bound of the domain. The choices are drawn from a
/// generator owned by the brancher, so that the same seed leads to the same search.
#[derive(Debug)]
pub struct RandomBrancher<R = SmallRng> {
    variable_selector: RandomSelector,
    random: R,
}

impl RandomBrancher<SmallRng> {
    pub fn new(variables: &[DomainId], seed: u64) -> Self {
        RandomBrancher::with_random(variables, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Random> RandomBrancher<R> {
    pub(crate) fn with_random(variables: &[DomainId], random: R) -> Self {
        RandomBrancher {
            variable_selector: RandomSelector::new(variables),
            random,
        }
    }
}

impl<R: Random> Brancher for RandomBrancher<R> {
    fn next_decision(&mut self, context: &mut SelectionContext) -> Option<Decision> {
        let variable = context.with_random(&mut self.random, |context| {
            self.variable_selector.select_variable(context)
        })?;
        self.compute_decision(context, variable)
    }

    fn compute_decision(
        &mut self,
        context: &mut SelectionContext,
        variable: DomainId,
    ) -> Option<Decision> {
        if context.is_integer_fixed(variable) {
            return None;
        }

        // Draws a bound for interval domains
        Some(context.with_random(&mut self.random, |context| {
            InDomainRandom.select_value(context, variable)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::TestRandom;
    use crate::engine::cp::test_solver::TestSolver;

    #[test]
    fn enumerated_domains_use_any_value() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 10);
        let y = solver.new_sparse_variable(&[2, 5, 7]);
        let mut brancher = RandomBrancher::with_random(
            &[x, y],
            TestRandom {
                usizes: vec![1, 1],
                ..Default::default()
            },
        );
        let mut solver_rng = TestRandom::default();
        let mut context = solver.selection_context(&mut solver_rng);

        assert_eq!(
            brancher.next_decision(&mut context),
            Some(Decision::assign(y, 5))
        );
    }

    #[test]
    fn interval_domains_use_a_bound() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 10);
        let y = solver.new_sparse_variable(&[2, 5, 7]);
        let mut brancher = RandomBrancher::with_random(
            &[x, y],
            TestRandom {
                usizes: vec![0],
                bools: vec![false],
            },
        );
        let mut solver_rng = TestRandom::default();
        let mut context = solver.selection_context(&mut solver_rng);

        assert_eq!(
            brancher.next_decision(&mut context),
            Some(Decision::assign(x, 10))
        );
    }

    #[test]
    fn equal_seeds_give_equal_decisions() {
        let mut solver = TestSolver::default();
        let variables = [
            solver.new_variable(0, 10),
            solver.new_sparse_variable(&[2, 5, 7, 11, 13]),
            solver.new_variable(-4, 4),
        ];
        let mut first = RandomBrancher::new(&variables, 17);
        let mut second = RandomBrancher::new(&variables, 17);
        // The generator of the solver is not used
        let mut solver_rng = TestRandom::default();
        let mut context = solver.selection_context(&mut solver_rng);

        for _ in 0..20 {
            assert_eq!(
                first.next_decision(&mut context),
                second.next_decision(&mut context)
            );
        }
    }
}
