use super::results::OptimisationResult;
use super::results::SatisfactionResult;
use super::results::UnknownCause;
use crate::basic_types::ConstraintOperationError;
use crate::basic_types::InvalidModel;
use crate::branching::branchers::IndependentVariableValueBrancher;
use crate::branching::Brancher;
use crate::branching::FirstFail;
use crate::branching::InDomainMin;
use crate::branching::InOrderTieBreaker;
use crate::constraints::ConstraintPoster;
use crate::engine::cp::propagation::Propagator;
use crate::engine::cp::propagation::PropagatorHandle;
use crate::engine::search::SearchMonitor;
use crate::engine::search::SearchOutcome;
use crate::engine::termination::TerminationCondition;
use crate::engine::variables::DomainId;
use crate::engine::variables::IntegerVariable;
use crate::engine::ConstraintSatisfactionSolver;
use crate::engine::SolverStatistics;
use crate::optimisation::BranchAndBound;
use crate::optimisation::OptimisationDirection;
use crate::options::SolverOptions;
use crate::results::solution_iterator::SolutionIterator;
use crate::statistics::log_statistic_postfix;

/// The main interaction point which allows the creation of variables, the addition of constraints,
/// and solving problems.
///
/// # Creating Variables
/// Every variable is an integer variable, identified by a [`DomainId`]. Its domain is either an
/// interval (only the bounds can change), or a set of values from which any value can be
/// removed.
///
/// ```rust
/// # use cairn_solver::Solver;
/// # use cairn_solver::variables::TransformableVariable;
/// let mut solver = Solver::default();
///
/// // We can create an integer variable with a domain in the range [0, 10]
/// let integer_between_bounds = solver.new_bounded_integer(0, 10);
///
/// // We can also create such a variable with a name
/// let named_integer_between_bounds = solver.new_named_bounded_integer(0, 10, "x");
///
/// // A variable over [0, 10] from which values can be removed
/// let enumerated_integer = solver.new_enumerated_integer(0, 10);
///
/// // We can also create an integer variable with a non-continuous domain in the follow way
/// let sparse_integer = solver.new_sparse_integer(vec![0, 3, 5]);
///
/// // We can also create such a variable with a name
/// let named_sparse_integer = solver.new_named_sparse_integer(vec![0, 3, 5], "y");
///
/// // A variable with the domain {0, 1}
/// let boolean = solver.new_boolean();
///
/// // Additionally, we can also create an affine view over a variable with both a scale and an
/// // offset (or either)
/// let view_over_integer = integer_between_bounds.scaled(-1).offset(15);
/// ```
///
/// # Using the Solver
/// For examples on how to use the solver, see the [root-level crate documentation](crate).
#[derive(Debug, Default)]
pub struct Solver {
    /// The internal [`ConstraintSatisfactionSolver`] which is used to solve the problems.
    pub(crate) satisfaction_solver: ConstraintSatisfactionSolver,
}

impl Solver {
    /// Creates a solver with the provided [`SolverOptions`].
    pub fn with_options(solver_options: SolverOptions) -> Self {
        Self {
            satisfaction_solver: ConstraintSatisfactionSolver::new(solver_options),
        }
    }

    /// Replaces the [`SearchMonitor`] which observes the search; by default the search is traced
    /// through the `log` crate.
    pub fn set_monitor(&mut self, monitor: impl SearchMonitor + 'static) {
        self.satisfaction_solver.set_monitor(Box::new(monitor));
    }

    /// The counters of the work the solver has done so far.
    pub fn statistics(&self) -> &SolverStatistics {
        self.satisfaction_solver.statistics()
    }

    /// Logs the statistics currently present in the solver.
    pub fn log_statistics(&self) {
        self.satisfaction_solver.log_statistics();
        log_statistic_postfix();
    }
}

/// Methods to retrieve information about variables
impl Solver {
    /// Get the lower-bound of the given [`IntegerVariable`] at the root level (after propagation).
    pub fn lower_bound(&self, variable: &impl IntegerVariable) -> i32 {
        self.satisfaction_solver.get_lower_bound(variable)
    }

    /// Get the upper-bound of the given [`IntegerVariable`] at the root level (after propagation).
    pub fn upper_bound(&self, variable: &impl IntegerVariable) -> i32 {
        self.satisfaction_solver.get_upper_bound(variable)
    }

    /// Whether `value` is in the domain of `variable` at the root level (after propagation).
    pub fn contains(&self, variable: &impl IntegerVariable, value: i32) -> bool {
        self.satisfaction_solver
            .integer_variable_contains(variable, value)
    }

    /// The number of variables which were created, including auxiliary variables created by
    /// constraints.
    pub fn num_variables(&self) -> usize {
        self.satisfaction_solver.num_variables()
    }

    /// The name the variable was created with, if any.
    pub fn variable_name(&self, variable: DomainId) -> Option<&str> {
        self.satisfaction_solver.get_variable_name(variable)
    }

    pub(crate) fn get_assigned_integer_value(&self, variable: &impl IntegerVariable) -> Option<i32> {
        self.satisfaction_solver.get_assigned_integer_value(variable)
    }
}

/// Functions to create and retrieve integer variables.
impl Solver {
    /// Create a new integer variable with the given bounds.
    ///
    /// # Example
    /// ```rust
    /// # use cairn_solver::Solver;
    /// let mut solver = Solver::default();
    ///
    /// // We can create an integer variable with a domain in the range [0, 10]
    /// let integer_between_bounds = solver.new_bounded_integer(0, 10);
    /// ```
    pub fn new_bounded_integer(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        self.satisfaction_solver
            .create_new_integer_variable(lower_bound, upper_bound, None)
    }

    /// Create a new named integer variable with the given bounds.
    ///
    /// # Example
    /// ```rust
    /// # use cairn_solver::Solver;
    /// let mut solver = Solver::default();
    ///
    /// // We can also create such a variable with a name
    /// let named_integer_between_bounds = solver.new_named_bounded_integer(0, 10, "x");
    /// ```
    pub fn new_named_bounded_integer(
        &mut self,
        lower_bound: i32,
        upper_bound: i32,
        name: impl Into<String>,
    ) -> DomainId {
        self.satisfaction_solver.create_new_integer_variable(
            lower_bound,
            upper_bound,
            Some(name.into()),
        )
    }

    /// Create a new integer variable over the given bounds whose domain keeps track of every
    /// value, so that values in between the bounds can be removed.
    pub fn new_enumerated_integer(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        self.satisfaction_solver
            .create_new_enumerated_integer_variable(lower_bound, upper_bound, None)
    }

    /// Create a new integer variable which has a domain of predefined values. Duplicates are
    /// ignored; an empty list of values makes the model invalid.
    ///
    /// # Example
    /// ```rust
    /// # use cairn_solver::Solver;
    /// let mut solver = Solver::default();
    ///
    /// // We can also create an integer variable with a non-continuous domain in the follow way
    /// let mut sparse_integer = solver.new_sparse_integer(vec![0, 3, 5]);
    /// ```
    pub fn new_sparse_integer(&mut self, values: impl Into<Vec<i32>>) -> DomainId {
        self.satisfaction_solver
            .create_new_integer_variable_sparse(values.into(), None)
    }

    /// Create a new named integer variable which has a domain of predefined values.
    ///
    /// # Example
    /// ```rust
    /// # use cairn_solver::Solver;
    /// let mut solver = Solver::default();
    ///
    /// // We can also create such a variable with a name
    /// let named_sparse_integer = solver.new_named_sparse_integer(vec![0, 3, 5], "y");
    /// ```
    pub fn new_named_sparse_integer(
        &mut self,
        values: impl Into<Vec<i32>>,
        name: impl Into<String>,
    ) -> DomainId {
        self.satisfaction_solver
            .create_new_integer_variable_sparse(values.into(), Some(name.into()))
    }

    /// Create a new variable with the domain `{0, 1}`.
    pub fn new_boolean(&mut self) -> DomainId {
        self.satisfaction_solver.create_new_boolean(None)
    }
}

/// Functions for solving with the constraints that have been added to the [`Solver`].
impl Solver {
    /// Solves the current model in the [`Solver`] until it finds a solution (or is indicated to
    /// terminate by the provided [`TerminationCondition`]) and returns a [`SatisfactionResult`].
    ///
    /// The search starts from the root, and the [`Solver`] is back at the root when this returns.
    pub fn find_solution<B: Brancher, T: TerminationCondition>(
        &mut self,
        brancher: &mut B,
        termination: &mut T,
    ) -> SatisfactionResult {
        if let Some(reason) = self.satisfaction_solver.invalid_model() {
            return SatisfactionResult::InvalidModel(reason.clone());
        }

        self.satisfaction_solver.restore_state_at_root(brancher);

        let result = match self.satisfaction_solver.solve(termination, brancher, None) {
            SearchOutcome::Solution => {
                SatisfactionResult::Satisfiable(self.satisfaction_solver.solution())
            }
            SearchOutcome::Exhausted { complete: true } => SatisfactionResult::Unsatisfiable,
            SearchOutcome::Exhausted { complete: false } => {
                SatisfactionResult::Unknown(UnknownCause::IncompleteSearch)
            }
            SearchOutcome::Stopped(limit) => {
                SatisfactionResult::Unknown(UnknownCause::LimitReached(limit))
            }
        };

        // Reset the state whenever we return a result
        self.satisfaction_solver.restore_state_at_root(brancher);

        result
    }

    /// Returns a [`SolutionIterator`] which enumerates the solutions of the model, each exactly
    /// once.
    pub fn find_all_solutions<'this, 'brancher, 'termination, B, T>(
        &'this mut self,
        brancher: &'brancher mut B,
        termination: &'termination mut T,
    ) -> SolutionIterator<'this, 'brancher, 'termination, B, T>
    where
        B: Brancher,
        T: TerminationCondition,
    {
        SolutionIterator::new(&mut self.satisfaction_solver, brancher, termination)
    }

    /// Solves the model currently in the [`Solver`] to optimality where the provided `objective`
    /// is optimised as indicated by the `direction` (or is indicated to terminate by the provided
    /// [`TerminationCondition`]), using depth-first branch and bound.
    ///
    /// The `brancher` should fix the objective; [`Solver::default_brancher`] does.
    pub fn find_optimal_solution<B: Brancher, T: TerminationCondition>(
        &mut self,
        brancher: &mut B,
        termination: &mut T,
        objective: DomainId,
        direction: OptimisationDirection,
    ) -> OptimisationResult {
        if let Some(reason) = self.satisfaction_solver.invalid_model() {
            return OptimisationResult::InvalidModel(reason.clone());
        }

        self.satisfaction_solver.restore_state_at_root(brancher);

        let result = BranchAndBound::new(direction, objective).optimise(
            &mut self.satisfaction_solver,
            brancher,
            termination,
        );

        self.satisfaction_solver.restore_state_at_root(brancher);

        result
    }
}

/// Functions for adding new constraints to the solver.
impl Solver {
    /// Add a constraint to the solver. This returns a [`ConstraintPoster`]; the constraint is
    /// only added once [`ConstraintPoster::post`] is called.
    ///
    /// If [`ConstraintPoster::post`] is not used, the constraint _is not_ actually added to the
    /// solver. In this case, a warning is emitted.
    ///
    /// # Example
    /// ```
    /// # use cairn_solver::constraints;
    /// # use cairn_solver::Solver;
    /// let mut solver = Solver::default();
    ///
    /// let a = solver.new_bounded_integer(0, 3);
    /// let b = solver.new_bounded_integer(0, 3);
    ///
    /// solver
    ///     .add_constraint(constraints::not_equals(a, b))
    ///     .post()
    ///     .expect("the model is consistent");
    /// ```
    pub fn add_constraint<Constraint>(
        &mut self,
        constraint: Constraint,
    ) -> ConstraintPoster<'_, Constraint> {
        ConstraintPoster::new(self, constraint)
    }

    /// Post a new propagator to the solver and propagate it. If unsatisfiability can be
    /// immediately determined through propagation, this will return a
    /// [`ConstraintOperationError`].
    ///
    /// If the solver is already in a conflicting state, i.e. a previous call to this method
    /// already returned an error, calling this again will not alter the solver in any way, and
    /// [`ConstraintOperationError::InfeasibleState`] will be returned.
    pub fn add_propagator<P: Propagator + 'static>(
        &mut self,
        propagator: P,
    ) -> Result<PropagatorHandle<P>, ConstraintOperationError> {
        self.satisfaction_solver.add_propagator(propagator)
    }

    /// Marks the model as invalid; every subsequent call to solve reports the (first) reason.
    pub(crate) fn declare_invalid_model(&mut self, reason: InvalidModel) {
        self.satisfaction_solver.declare_invalid_model(reason);
    }
}

/// Default brancher implementation
impl Solver {
    /// Creates an instance of the [`DefaultBrancher`] over every variable created so far.
    pub fn default_brancher(&self) -> DefaultBrancher {
        let variables = self.satisfaction_solver.variables().collect::<Vec<_>>();
        IndependentVariableValueBrancher::new(FirstFail::new(&variables), InDomainMin)
    }
}

/// The brancher which selects the variable with the smallest domain (ties broken by the order of
/// creation) and assigns it its smallest value.
pub type DefaultBrancher = IndependentVariableValueBrancher<
    DomainId,
    FirstFail<DomainId, InOrderTieBreaker<DomainId, u64>>,
    InDomainMin,
>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints;
    use crate::results::solution_iterator::IteratedSolution;
    use crate::termination::Indefinite;
    use crate::termination::NodeBudget;
    use crate::termination::ResourceLimitReached;
    use crate::variables::TransformableVariable;

    #[test]
    fn solutions_satisfy_the_constraints() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 3);
        let y = solver.new_bounded_integer(0, 3);

        solver
            .add_constraint(constraints::equals([x, y], 5))
            .post()
            .expect("consistent at the root");

        let mut brancher = solver.default_brancher();
        let SatisfactionResult::Satisfiable(solution) =
            solver.find_solution(&mut brancher, &mut Indefinite)
        else {
            panic!("x + y = 5 has solutions");
        };

        assert_eq!(5, solution.get_integer_value(x) + solution.get_integer_value(y));
        // The solver is back at the root
        assert_eq!(2, solver.lower_bound(&x));
        assert_eq!(3, solver.upper_bound(&x));
    }

    #[test]
    fn root_failure_is_unsatisfiable() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 3);
        let y = solver.new_bounded_integer(0, 3);

        let result = solver
            .add_constraint(constraints::less_than_or_equals([x, y], -1))
            .post();
        assert_eq!(Err(ConstraintOperationError::InfeasiblePropagator), result);

        let mut brancher = solver.default_brancher();
        assert!(matches!(
            solver.find_solution(&mut brancher, &mut Indefinite),
            SatisfactionResult::Unsatisfiable
        ));
    }

    #[test]
    fn invalid_models_are_not_searched() {
        let mut solver = Solver::default();
        let _ = solver.new_sparse_integer(vec![]);

        let mut brancher = solver.default_brancher();
        assert!(matches!(
            solver.find_solution(&mut brancher, &mut Indefinite),
            SatisfactionResult::InvalidModel(InvalidModel::EmptySparseDomain)
        ));
        assert_eq!(0, solver.statistics().num_nodes);
    }

    #[test]
    fn node_budget_stops_the_search() {
        let mut solver = Solver::default();
        // Eight pigeons in seven holes
        let variables = (0..8)
            .map(|_| solver.new_bounded_integer(0, 6))
            .collect::<Vec<_>>();
        solver
            .add_constraint(constraints::all_different(variables))
            .post()
            .expect("consistent at the root");

        let mut brancher = solver.default_brancher();
        let result = solver.find_solution(&mut brancher, &mut NodeBudget::new(50));

        assert!(matches!(
            result,
            SatisfactionResult::Unknown(UnknownCause::LimitReached(ResourceLimitReached::Nodes(
                50
            )))
        ));
    }

    #[test]
    fn all_solutions_are_enumerated_once() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 2);
        let y = solver.new_bounded_integer(0, 2);
        let z = solver.new_bounded_integer(0, 2);
        solver
            .add_constraint(constraints::all_different(vec![x, y, z]))
            .post()
            .expect("consistent at the root");

        let mut brancher = solver.default_brancher();
        let mut termination = Indefinite;
        let mut iterator = solver.find_all_solutions(&mut brancher, &mut termination);

        let mut solutions = Vec::new();
        loop {
            match iterator.next_solution() {
                IteratedSolution::Solution(solution) => solutions.push([
                    solution.get_integer_value(x),
                    solution.get_integer_value(y),
                    solution.get_integer_value(z),
                ]),
                IteratedSolution::Finished => break,
                other => panic!("unexpected outcome {other:?}"),
            }
        }
        assert!(matches!(iterator.next_solution(), IteratedSolution::Finished));
        drop(iterator);

        solutions.sort();
        solutions.dedup();
        assert_eq!(6, solutions.len());
    }

    #[test]
    fn minimisation_and_maximisation_find_the_optimum() {
        let mut solver = Solver::default();
        let x = solver.new_bounded_integer(0, 5);
        let y = solver.new_bounded_integer(0, 5);
        let objective = solver.new_bounded_integer(0, 10);
        solver
            .add_constraint(constraints::equals(
                [x.scaled(1), y.scaled(1), objective.scaled(-1)],
                0,
            ))
            .post()
            .expect("consistent at the root");
        solver
            .add_constraint(constraints::not_equals(x, y))
            .post()
            .expect("consistent at the root");

        let mut brancher = solver.default_brancher();
        let OptimisationResult::Optimal(solution) = solver.find_optimal_solution(
            &mut brancher,
            &mut Indefinite,
            objective,
            OptimisationDirection::Minimise,
        ) else {
            panic!("the problem has an optimum");
        };
        assert_eq!(1, solution.get_integer_value(objective));

        let OptimisationResult::Optimal(solution) = solver.find_optimal_solution(
            &mut brancher,
            &mut Indefinite,
            objective,
            OptimisationDirection::Maximise,
        ) else {
            panic!("the problem has an optimum");
        };
        assert_eq!(9, solution.get_integer_value(objective));

        // The bound on the objective does not outlive the optimisation
        assert_eq!(0, solver.lower_bound(&objective));
        assert_eq!(10, solver.upper_bound(&objective));
    }
}
