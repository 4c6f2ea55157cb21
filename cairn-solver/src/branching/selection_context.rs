use std::fmt::Debug;

use crate::basic_types::Random;
#[cfg(doc)]
use crate::branching::Brancher;
use crate::engine::cp::propagation::PropagatorId;
use crate::engine::cp::Environment;
use crate::engine::cp::PropagationEngine;
use crate::engine::variables::DomainId;
use crate::engine::variables::IntegerVariable;
use crate::engine::variables::ValueOrder;

/// The context provided to the [`Brancher`],
/// it allows the retrieval of domain values of variables, information about the propagators
/// watching them, and access to methods from a [`Random`] generator.
#[derive(Debug)]
pub struct SelectionContext<'a> {
    environment: &'a Environment,
    engine: &'a PropagationEngine,
    random_generator: &'a mut dyn Random,
}

impl<'a> SelectionContext<'a> {
    pub(crate) fn new(
        environment: &'a Environment,
        engine: &'a PropagationEngine,
        rng: &'a mut dyn Random,
    ) -> Self {
        SelectionContext {
            environment,
            engine,
            random_generator: rng,
        }
    }

    /// Returns a random generator which can be used to generate random values (see [`Random`] for
    /// more information).
    pub fn random(&mut self) -> &mut dyn Random {
        self.random_generator
    }

    /// Runs `action` on a context which draws from `random` instead of the generator of the
    /// solver.
    pub(crate) fn with_random<T>(
        &mut self,
        random: &mut dyn Random,
        action: impl FnOnce(&mut SelectionContext<'_>) -> T,
    ) -> T {
        let mut context = SelectionContext {
            environment: self.environment,
            engine: self.engine,
            random_generator: random,
        };
        action(&mut context)
    }

    /// Returns the difference between the upper-bound and the lower-bound of the provided
    /// [`IntegerVariable`]. Note that this is different from the number of values which are in the
    /// domain of `var` since this calculation does not take into account holes in the domain.
    pub fn get_size_of_domain<Var: IntegerVariable>(&self, var: Var) -> i32 {
        var.upper_bound(self.environment) - var.lower_bound(self.environment)
    }

    /// The number of values in the domain of the provided [`IntegerVariable`].
    pub fn size<Var: IntegerVariable>(&self, var: Var) -> u64 {
        var.size(self.environment)
    }

    /// Returns the lower bound of the provided [`IntegerVariable`]
    pub fn lower_bound<Var: IntegerVariable>(&self, var: Var) -> i32 {
        var.lower_bound(self.environment)
    }

    /// Returns the upper bound of the provided [`IntegerVariable`]
    pub fn upper_bound<Var: IntegerVariable>(&self, var: Var) -> i32 {
        var.upper_bound(self.environment)
    }

    /// Determines whether the provided value is in the domain of the provided [`IntegerVariable`]
    pub fn contains<Var: IntegerVariable>(&self, var: Var, value: i32) -> bool {
        var.contains(self.environment, value)
    }

    /// Determines whether the provided [`IntegerVariable`] has a unit domain (i.e. a domain of size
    /// 1)
    pub fn is_integer_fixed<Var: IntegerVariable>(&self, var: Var) -> bool {
        self.lower_bound(var.clone()) == self.upper_bound(var)
    }

    /// Whether the domain of `domain` can contain holes.
    pub fn is_enumerated(&self, domain: DomainId) -> bool {
        self.environment.is_enumerated(domain)
    }

    /// The values in the domain of `domain`, enumerated in the given order.
    pub fn values_in_order(
        &self,
        domain: DomainId,
        order: ValueOrder,
    ) -> impl Iterator<Item = i32> + '_ {
        self.environment.values_in_order(domain, order)
    }

    /// Returns all currently defined [`DomainId`]s.
    pub fn get_domains(&self) -> impl Iterator<Item = DomainId> + '_ {
        self.environment.get_domains()
    }

    /// The propagators which registered to `domain`.
    pub fn propagators_watching(&self, domain: DomainId) -> &[PropagatorId] {
        self.engine.propagators_watching(domain)
    }

    /// The number of variables of the propagator which are not yet fixed.
    pub fn future_arity(&self, propagator: PropagatorId) -> usize {
        self.engine.future_arity(self.environment, propagator)
    }

    /// The number of contradictions the propagator detected so far.
    pub fn failure_count(&self, propagator: PropagatorId) -> u64 {
        self.engine.failure_count(propagator)
    }
}
