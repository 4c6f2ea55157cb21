#![cfg(any(test, doc))]
//! This module exposes helpers that aid testing of CP propagators. The [`TestSolver`] allows
//! setting up specific scenarios under which to test the various operations of a propagator.
use super::domains::Domain;
use super::propagation::Propagator;
use super::propagation::PropagatorHandle;
use super::propagation::PropagatorId;
use super::Cause;
use super::EmptyDomain;
use super::Environment;
use super::PropagationEngine;
use crate::basic_types::Inconsistency;
use crate::basic_types::Random;
use crate::branching::SelectionContext;
use crate::engine::variables::DomainId;
use crate::engine::variables::IntegerVariable;
use crate::engine::SolverStatistics;

/// A container for CP variables, which can be used to test propagators.
///
/// Changes made through the [`TestSolver`] are attributed to a decision, so every propagator
/// watching the affected variable is notified on the next call to [`TestSolver::propagate`].
#[derive(Debug, Default)]
pub(crate) struct TestSolver {
    environment: Environment,
    engine: PropagationEngine,
    statistics: SolverStatistics,
}

impl TestSolver {
    fn new_domain(&mut self, domain: Domain) -> DomainId {
        self.engine.grow();
        self.environment.grow(domain)
    }

    pub(crate) fn new_variable(&mut self, lb: i32, ub: i32) -> DomainId {
        self.new_domain(Domain::interval(lb, ub))
    }

    pub(crate) fn new_sparse_variable(&mut self, values: &[i32]) -> DomainId {
        self.new_domain(Domain::bitset(values))
    }

    pub(crate) fn new_boolean(&mut self) -> DomainId {
        self.new_domain(Domain::boolean())
    }

    /// Adds the propagator and propagates to a fixpoint.
    pub(crate) fn new_propagator<P: Propagator>(
        &mut self,
        propagator: P,
    ) -> Result<PropagatorHandle<P>, Inconsistency> {
        let (handle, status) = self.engine.add_propagator(&mut self.environment, propagator);
        status?;
        self.propagate()?;

        Ok(handle)
    }

    pub(crate) fn get_propagator<P: Propagator>(&self, handle: PropagatorHandle<P>) -> &P {
        self.engine
            .get_propagator(handle)
            .expect("the handle was created by this solver")
    }

    pub(crate) fn propagate(&mut self) -> Result<(), Inconsistency> {
        self.engine
            .propagate(&mut self.environment, &mut self.statistics)
            .map_err(|contradiction| contradiction.inconsistency)
    }

    pub(crate) fn failure_count(&self, propagator_id: PropagatorId) -> u64 {
        self.engine.failure_count(propagator_id)
    }

    pub(crate) fn num_propagations(&self) -> u64 {
        self.statistics.num_propagations
    }

    pub(crate) fn selection_context<'a>(
        &'a self,
        random: &'a mut dyn Random,
    ) -> SelectionContext<'a> {
        SelectionContext::new(&self.environment, &self.engine, random)
    }

    pub(crate) fn environment(&self) -> &Environment {
        &self.environment
    }

    pub(crate) fn contains<Var: IntegerVariable>(&self, var: Var, value: i32) -> bool {
        var.contains(&self.environment, value)
    }

    pub(crate) fn lower_bound<Var: IntegerVariable>(&self, var: Var) -> i32 {
        var.lower_bound(&self.environment)
    }

    pub(crate) fn upper_bound<Var: IntegerVariable>(&self, var: Var) -> i32 {
        var.upper_bound(&self.environment)
    }

    pub(crate) fn values(&self, var: DomainId) -> Vec<i32> {
        self.environment.iter_domain(var).collect()
    }

    pub(crate) fn set_lower_bound(&mut self, var: DomainId, bound: i32) -> Result<(), EmptyDomain> {
        self.environment
            .tighten_lower_bound(var, bound, Cause::Decision)
            .map(|_| ())
    }

    pub(crate) fn set_upper_bound(&mut self, var: DomainId, bound: i32) -> Result<(), EmptyDomain> {
        self.environment
            .tighten_upper_bound(var, bound, Cause::Decision)
            .map(|_| ())
    }

    pub(crate) fn assign(&mut self, var: DomainId, value: i32) -> Result<(), EmptyDomain> {
        self.environment
            .instantiate(var, value, Cause::Decision)
            .map(|_| ())
    }

    pub(crate) fn remove(&mut self, var: DomainId, value: i32) -> Result<(), EmptyDomain> {
        self.environment
            .remove_value(var, value, Cause::Decision)
            .map(|_| ())
    }

    pub(crate) fn push_world(&mut self) {
        self.environment.push_world();
    }

    pub(crate) fn pop_world(&mut self) {
        self.environment.pop_world();
        self.engine.synchronise(&self.environment);
    }

    pub(crate) fn assert_bounds(&self, var: DomainId, lb: i32, ub: i32) {
        let actual_lb = self.lower_bound(var);
        let actual_ub = self.upper_bound(var);

        assert_eq!(
            (lb, ub), (actual_lb, actual_ub),
            "The expected bounds [{lb}..{ub}] did not match the actual bounds [{actual_lb}..{actual_ub}]"
        );
    }
}
