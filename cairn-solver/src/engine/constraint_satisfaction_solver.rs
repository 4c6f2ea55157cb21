//! Houses the solver which combines the domains, the propagation engine and the search loop.

use std::fmt::Debug;
use std::fmt::Formatter;
use std::time::Instant;

use log::debug;
use log::warn;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::basic_types::ConstraintOperationError;
use crate::basic_types::InvalidModel;
use crate::basic_types::Random;
use crate::basic_types::Solution;
use crate::branching::Brancher;
use crate::cairn_assert_simple;
use crate::engine::cp::domains::Domain;
use crate::engine::cp::propagation::Propagator;
use crate::engine::cp::propagation::PropagatorHandle;
use crate::engine::cp::Environment;
use crate::engine::cp::GroupPolicy;
use crate::engine::cp::PropagationEngine;
use crate::engine::search::SearchLoop;
use crate::engine::search::SearchMonitor;
use crate::engine::search::SearchOutcome;
use crate::engine::search::SearchResources;
use crate::engine::search::TraceMonitor;
use crate::engine::termination::TerminationCondition;
use crate::engine::variables::AffineView;
use crate::engine::variables::DomainId;
use crate::engine::variables::IntegerVariable;
use crate::engine::SolverStatistics;
use crate::engine::VariableNames;
use crate::statistics::should_log_statistics;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;
#[cfg(doc)]
use crate::Solver;

/// A finite-domain solver which interleaves propagation with a depth-first backtracking search.
///
/// The solver owns the variable domains (through an [`Environment`] which trails every change),
/// the propagators (through the propagation engine) and the state of the search. A search which
/// was stopped by a [`TerminationCondition`] can be resumed by calling [`Self::solve`] again;
/// [`Self::restore_state_at_root`] abandons it.
///
/// The solver follows the classical constraint programming scheme, see \[1\].
///
/// # Bibliography
/// \[1\] F. Rossi, P. Van Beek, and T. Walsh, ‘Constraint programming’, Foundations of Artificial
/// Intelligence, vol. 3, pp. 181–211, 2008.
pub struct ConstraintSatisfactionSolver {
    /// Whether the model is still usable; see [`CSPSolverState`].
    pub(crate) state: CSPSolverState,
    /// The domains of the variables together with the trail which restores them.
    environment: Environment,
    /// The propagators and the bookkeeping which schedules them.
    engine: PropagationEngine,
    /// The decisions taken so far and the phase the search is in.
    search: SearchLoop,
    /// Observes the search.
    monitor: Box<dyn SearchMonitor>,
    /// A set of counters updated during the search.
    counters: SolverStatistics,
    /// Miscellaneous constant parameters used by the solver.
    internal_parameters: SatisfactionSolverOptions,
    /// The names of the variables in the solver.
    variable_names: VariableNames,
}

impl Debug for ConstraintSatisfactionSolver {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConstraintSatisfactionSolver")
            .field("state", &self.state)
            .field("environment", &self.environment)
            .field("engine", &self.engine)
            .field("search", &self.search)
            .field("counters", &self.counters)
            .finish_non_exhaustive()
    }
}

impl Default for ConstraintSatisfactionSolver {
    fn default() -> Self {
        ConstraintSatisfactionSolver::new(SatisfactionSolverOptions::default())
    }
}

/// Options for the [`Solver`] which determine how it behaves.
pub struct SatisfactionSolverOptions {
    /// A random number generator which is used by the [`Solver`] to determine randomised values.
    pub random_generator: SmallRng,
    /// The order in which the propagation engine serves the pending propagators of one priority.
    pub group_policy: GroupPolicy,
}

impl Debug for SatisfactionSolverOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SatisfactionSolverOptions")
            .field("group_policy", &self.group_policy)
            .finish_non_exhaustive()
    }
}

impl Default for SatisfactionSolverOptions {
    fn default() -> Self {
        SatisfactionSolverOptions {
            random_generator: SmallRng::seed_from_u64(42),
            group_policy: GroupPolicy::default(),
        }
    }
}

/// The state of the model held by the solver.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum CSPSolverState {
    /// Constraints can be added and the solver can search.
    #[default]
    Ready,
    /// Propagation at the root failed; no solution exists.
    Infeasible,
    /// The model was rejected while it was built. Only the first reason is kept.
    InvalidModel(InvalidModel),
}

impl CSPSolverState {
    pub(crate) fn is_infeasible(&self) -> bool {
        matches!(self, CSPSolverState::Infeasible)
    }

    pub(crate) fn invalid_model(&self) -> Option<&InvalidModel> {
        match self {
            CSPSolverState::InvalidModel(reason) => Some(reason),
            _ => None,
        }
    }
}

impl ConstraintSatisfactionSolver {
    pub fn new(solver_options: SatisfactionSolverOptions) -> Self {
        ConstraintSatisfactionSolver {
            state: CSPSolverState::default(),
            environment: Environment::default(),
            engine: PropagationEngine::new(solver_options.group_policy),
            search: SearchLoop::default(),
            monitor: Box::new(TraceMonitor),
            counters: SolverStatistics::default(),
            internal_parameters: solver_options,
            variable_names: VariableNames::default(),
        }
    }

    /// Replaces the monitor which observes the search.
    pub fn set_monitor(&mut self, monitor: Box<dyn SearchMonitor>) {
        self.monitor = monitor;
    }

    pub fn get_random_generator(&mut self) -> &mut impl Random {
        &mut self.internal_parameters.random_generator
    }

    pub fn statistics(&self) -> &SolverStatistics {
        &self.counters
    }

    pub fn log_statistics(&self) {
        // We first check whether the statistics will/should be logged to prevent unnecessarily
        // going through all the propagators
        if should_log_statistics() {
            self.counters.log(StatisticLogger::default());
            self.engine.log_statistics(&StatisticLogger::new(["propagator"]));
        }
    }

    pub(crate) fn is_infeasible(&self) -> bool {
        self.state.is_infeasible()
    }

    pub(crate) fn invalid_model(&self) -> Option<&InvalidModel> {
        self.state.invalid_model()
    }

    /// Records that the model is invalid; the first reason wins.
    pub(crate) fn declare_invalid_model(&mut self, reason: InvalidModel) {
        if self.state.invalid_model().is_none() {
            warn!("the model is invalid: {reason}");
            self.state = CSPSolverState::InvalidModel(reason);
        }
    }

    /// Create a new integer variable. Its domain will have the given lower and upper bounds.
    pub fn create_new_integer_variable(
        &mut self,
        lower_bound: i32,
        upper_bound: i32,
        name: Option<String>,
    ) -> DomainId {
        assert!(
            lower_bound <= upper_bound,
            "cannot create a variable with an empty domain [{lower_bound}, {upper_bound}]"
        );
        self.grow(Domain::interval(lower_bound, upper_bound), name)
    }

    /// Creates an integer variable whose domain enumerates every value in the given bounds, so
    /// that values inside the bounds can be removed.
    pub fn create_new_enumerated_integer_variable(
        &mut self,
        lower_bound: i32,
        upper_bound: i32,
        name: Option<String>,
    ) -> DomainId {
        assert!(
            lower_bound <= upper_bound,
            "cannot create a variable with an empty domain [{lower_bound}, {upper_bound}]"
        );
        let values = (lower_bound..=upper_bound).collect::<Vec<_>>();
        self.grow(Domain::bitset(&values), name)
    }

    /// Creates an integer variable with a domain containing only the values in `values`.
    ///
    /// An empty list of values makes the model invalid; a placeholder variable fixed to zero is
    /// returned in that case.
    pub fn create_new_integer_variable_sparse(
        &mut self,
        mut values: Vec<i32>,
        name: Option<String>,
    ) -> DomainId {
        if values.is_empty() {
            self.declare_invalid_model(InvalidModel::EmptySparseDomain);
            return self.grow(Domain::interval(0, 0), name);
        }

        values.sort_unstable();
        values.dedup();

        self.grow(Domain::bitset(&values), name)
    }

    pub fn create_new_boolean(&mut self, name: Option<String>) -> DomainId {
        self.grow(Domain::boolean(), name)
    }

    fn grow(&mut self, domain: Domain, name: Option<String>) -> DomainId {
        cairn_assert_simple!(
            self.environment.world_index() == 0,
            "Variables can only be created at the root"
        );

        let domain_id = self.environment.grow(domain);
        self.engine.grow();

        if let Some(name) = name {
            self.variable_names.add_integer(domain_id, name);
        }

        domain_id
    }

    pub fn get_variable_name(&self, domain_id: DomainId) -> Option<&str> {
        self.variable_names.get_int_name(domain_id)
    }

    pub fn num_variables(&self) -> usize {
        self.environment.num_domains()
    }

    pub fn variables(&self) -> impl Iterator<Item = DomainId> + '_ {
        self.environment.get_domains()
    }

    pub fn get_lower_bound(&self, variable: &impl IntegerVariable) -> i32 {
        variable.lower_bound(&self.environment)
    }

    pub fn get_upper_bound(&self, variable: &impl IntegerVariable) -> i32 {
        variable.upper_bound(&self.environment)
    }

    pub fn integer_variable_contains(&self, variable: &impl IntegerVariable, value: i32) -> bool {
        variable.contains(&self.environment, value)
    }

    pub fn get_assigned_integer_value(&self, variable: &impl IntegerVariable) -> Option<i32> {
        let lower_bound = variable.lower_bound(&self.environment);
        (lower_bound == variable.upper_bound(&self.environment)).then_some(lower_bound)
    }

    /// A detached copy of the current domains.
    pub(crate) fn solution(&self) -> Solution {
        Solution::new(self.environment.detached_copy())
    }

    pub(crate) fn get_propagator<P: Propagator>(&self, handle: PropagatorHandle<P>) -> Option<&P> {
        self.engine.get_propagator(handle)
    }

    pub(crate) fn depth(&self) -> usize {
        self.search.depth()
    }
}

impl ConstraintSatisfactionSolver {
    /// Post a new propagator to the solver and propagate it to a fixpoint.
    ///
    /// The caller should ensure the solver is in the root state before calling this, either
    /// because no call to [`Self::solve()`] has been made, or because
    /// [`Self::restore_state_at_root()`] was called.
    ///
    /// If the solver is already infeasible, the propagator is not added and
    /// [`ConstraintOperationError::InfeasibleState`] is returned.
    pub fn add_propagator<P: Propagator>(
        &mut self,
        propagator: P,
    ) -> Result<PropagatorHandle<P>, ConstraintOperationError> {
        if self.state.is_infeasible() {
            return Err(ConstraintOperationError::InfeasibleState);
        }

        cairn_assert_simple!(
            self.environment.world_index() == 0,
            "Propagators can only be added at the root"
        );

        let (handle, status) = self.engine.add_propagator(&mut self.environment, propagator);

        let result = status
            .map_err(|inconsistency| inconsistency.to_string())
            .and_then(|_| {
                self.engine
                    .propagate(&mut self.environment, &mut self.counters)
                    .map_err(|contradiction| contradiction.inconsistency.to_string())
            });

        match result {
            Ok(()) => Ok(handle),
            Err(reason) => {
                debug!(
                    "{} made the model infeasible: {reason}",
                    self.engine.propagator_name(handle.untyped())
                );
                self.state = CSPSolverState::Infeasible;
                Err(ConstraintOperationError::InfeasiblePropagator)
            }
        }
    }

    /// Runs (or resumes) the search until the next solution, until the search space is exhausted,
    /// or until `termination` asks to stop.
    ///
    /// With an `objective_cut`, every node has to assign the given view a value strictly below
    /// the given bound.
    pub(crate) fn solve(
        &mut self,
        termination: &mut impl TerminationCondition,
        brancher: &mut impl Brancher,
        objective_cut: Option<(AffineView<DomainId>, i32)>,
    ) -> SearchOutcome {
        if self.state.is_infeasible() {
            return SearchOutcome::Exhausted { complete: true };
        }

        let start_time = Instant::now();

        let resources = SearchResources {
            environment: &mut self.environment,
            engine: &mut self.engine,
            statistics: &mut self.counters,
            random: &mut self.internal_parameters.random_generator,
            monitor: self.monitor.as_mut(),
            objective_cut,
        };
        let outcome = self.search.run(resources, brancher, termination);

        self.counters.time_spent_in_solver += start_time.elapsed().as_millis() as u64;

        outcome
    }

    /// Undoes every decision, returning the domains to their state after root propagation.
    pub fn restore_state_at_root(&mut self, brancher: &mut impl Brancher) {
        if self.environment.world_index() != 0 {
            brancher.on_restart();
        }
        self.search.reset(&mut self.environment, &mut self.engine);
    }

    /// Like [`Self::restore_state_at_root`], for when no brancher is at hand.
    pub(crate) fn reset_search(&mut self) {
        self.search.reset(&mut self.environment, &mut self.engine);
    }
}
