use log::warn;

use super::VariableSelector;
use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::SelectionContext;
use crate::cairn_assert_eq_simple;
use crate::engine::variables::DomainId;

/// A [`VariableSelector`] which selects the variable with the smallest value in its domain.
///
/// Uses a [`TieBreaker`] to break ties, the default is the [`InOrderTieBreaker`] but it is
/// possible to construct the variable selector with a custom [`TieBreaker`] by using
/// the method [`Smallest::with_tie_breaker`].
pub struct Smallest<Var, TieBreaking> {
    variables: Vec<Var>,
    tie_breaker: TieBreaking,
}

impl<Var, TieBreaking> std::fmt::Debug for Smallest<Var, TieBreaking> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Smallest").finish()
    }
}

impl<Var: Clone> Smallest<Var, InOrderTieBreaker<Var, i32>> {
    pub fn new(variables: &[Var]) -> Self {
        if variables.is_empty() {
            warn!("The Smallest variable selector was not provided with any variables");
        }
        Smallest {
            variables: variables.to_vec(),
            tie_breaker: InOrderTieBreaker::new(Direction::Minimum),
        }
    }
}

impl<Var: Clone, TieBreaking: TieBreaker<Var, i32>> Smallest<Var, TieBreaking> {
    pub fn with_tie_breaker(variables: &[Var], tie_breaker: TieBreaking) -> Self {
        cairn_assert_eq_simple!(
            tie_breaker.get_direction(),
            Direction::Minimum,
            "The provided tie-breaker to Smallest attempts to find the Maximum value
             instead of the Minimum value, please ensure that you have passed the correct tie-breaker");
        if variables.is_empty() {
            warn!("The Smallest variable selector was not provided with any variables");
        }

        Self {
            variables: variables.to_vec(),
            tie_breaker,
        }
    }
}

impl<TieBreaking> VariableSelector<DomainId> for Smallest<DomainId, TieBreaking>
where
    TieBreaking: TieBreaker<DomainId, i32>,
{
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<DomainId> {
        self.variables
            .iter()
            .filter(|variable| !context.is_integer_fixed(**variable))
            .for_each(|variable| {
                self.tie_breaker
                    .consider(*variable, context.lower_bound(*variable));
            });
        self.tie_breaker.select()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::TestRandom;
    use crate::engine::test_solver::TestSolver;

    #[test]
    fn test_correctly_selected() {
        let mut solver = TestSolver::default();
        let integer_variables = [solver.new_variable(11, 15), solver.new_variable(10, 20)];
        let mut strategy = Smallest::new(&integer_variables);
        let mut test_rng = TestRandom::default();

        {
            let mut context = solver.selection_context(&mut test_rng);
            let selected = strategy.select_variable(&mut context);
            assert_eq!(Some(integer_variables[1]), selected);
        }

        solver
            .set_lower_bound(integer_variables[1], 15)
            .expect("non-empty");

        let mut context = solver.selection_context(&mut test_rng);
        let selected = strategy.select_variable(&mut context);
        assert_eq!(Some(integer_variables[0]), selected);
    }

    #[test]
    fn fixed_variables_are_not_selected() {
        let mut solver = TestSolver::default();
        let integer_variables = [solver.new_variable(10, 10), solver.new_variable(20, 20)];
        let mut strategy = Smallest::new(&integer_variables);
        let mut test_rng = TestRandom::default();

        let mut context = solver.selection_context(&mut test_rng);
        assert_eq!(None, strategy.select_variable(&mut context));
    }
}
