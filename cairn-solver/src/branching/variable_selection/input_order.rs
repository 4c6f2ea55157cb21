use log::warn;

use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::engine::variables::IntegerVariable;

/// A [`VariableSelector`] which selects the first variable which is not fixed given the order in
/// the provided list.
#[derive(Debug)]
pub struct InputOrder<Var> {
    variables: Vec<Var>,
}

impl<Var: Clone> InputOrder<Var> {
    pub fn new(variables: &[Var]) -> Self {
        if variables.is_empty() {
            warn!("The InputOrder variable selector was not provided with any variables");
        }
        InputOrder {
            variables: variables.to_vec(),
        }
    }
}

impl<Var> VariableSelector<Var> for InputOrder<Var>
where
    Var: IntegerVariable,
{
    fn select_variable(&mut self, context: &mut SelectionContext) -> Option<Var> {
        self.variables
            .iter()
            .find(|&variable| !context.is_integer_fixed(variable.clone()))
            .cloned()
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
        let integer_variables = [solver.new_variable(0, 10), solver.new_variable(5, 20)];
        let mut strategy = InputOrder::new(&integer_variables);
        let mut test_rng = TestRandom::default();

        {
            let mut context = solver.selection_context(&mut test_rng);
            let selected = strategy.select_variable(&mut context);
            assert_eq!(Some(integer_variables[0]), selected);
        }

        solver
            .assign(integer_variables[0], 0)
            .expect("0 is in the domain");

        let mut context = solver.selection_context(&mut test_rng);
        let selected = strategy.select_variable(&mut context);
        assert_eq!(Some(integer_variables[1]), selected);
    }

    #[test]
    fn fixed_variables_are_not_selected() {
        let mut solver = TestSolver::default();
        let integer_variables = [solver.new_variable(10, 10), solver.new_variable(20, 20)];
        let mut strategy = InputOrder::new(&integer_variables);
        let mut test_rng = TestRandom::default();

        let mut context = solver.selection_context(&mut test_rng);
        assert_eq!(None, strategy.select_variable(&mut context));
    }
}
