use crate::engine::cp::propagation::LocalId;
use crate::engine::cp::propagation::PropagatorId;
use crate::engine::cp::Cause;
use crate::engine::cp::DeltaEvent;
use crate::engine::cp::EmptyDomain;
use crate::engine::cp::Environment;
use crate::engine::cp::TrailedInteger;
use crate::engine::variables::DomainId;
use crate::engine::variables::IntegerVariable;

/// A variable a propagator subscribed to, together with how far the propagator has read its
/// delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Registration {
    pub(crate) local_id: LocalId,
    pub(crate) domain: DomainId,
    pub(crate) cursor: usize,
}

/// [`PropagationContext`] is passed to propagators when they may only inspect the domains, e.g.
/// when they are notified of an event or asked for their entailment.
#[derive(Clone, Copy, Debug)]
pub struct PropagationContext<'a> {
    pub(crate) environment: &'a Environment,
}

impl<'a> PropagationContext<'a> {
    pub(crate) fn new(environment: &'a Environment) -> Self {
        PropagationContext { environment }
    }
}

/// [`PropagationContextMut`] is passed to propagators during propagation.
/// It may be queried to retrieve information about the current variable domains such as the
/// lower-bound of a particular variable, or used to apply changes to the domain of a variable
/// e.g. set `x >= 5`.
///
/// Every change made through the context is attributed to the propagator, which means the
/// propagator will not be notified of it.
#[derive(Debug)]
pub struct PropagationContextMut<'a> {
    pub(crate) environment: &'a mut Environment,
    pub(crate) propagator_id: PropagatorId,
    registrations: &'a [Registration],
    first_propagation: bool,
}

impl<'a> PropagationContextMut<'a> {
    pub(crate) fn new(
        environment: &'a mut Environment,
        propagator_id: PropagatorId,
        registrations: &'a [Registration],
        first_propagation: bool,
    ) -> Self {
        PropagationContextMut {
            environment,
            propagator_id,
            registrations,
            first_propagation,
        }
    }

    pub fn as_readonly(&self) -> PropagationContext<'_> {
        PropagationContext {
            environment: self.environment,
        }
    }

    fn cause(&self) -> Cause {
        Cause::Propagator(self.propagator_id)
    }

    /// Whether the propagator did not yet complete a propagation in the current world or any world
    /// below it. The delta does not contain the changes made before the propagator was posted, so
    /// a propagator which only looks at the delta has to consider every variable in this case.
    pub fn is_first_propagation(&self) -> bool {
        self.first_propagation
    }

    /// The changes to the variable registered under `local_id` since the previous invocation of
    /// the propagator, excluding the changes the propagator made itself.
    pub fn delta(&self, local_id: LocalId) -> impl Iterator<Item = &DeltaEvent> + '_ {
        let own_cause = self.cause();
        self.registrations
            .iter()
            .filter(move |registration| registration.local_id == local_id)
            .flat_map(|registration| {
                self.environment
                    .delta_since(registration.domain, registration.cursor)
            })
            .filter(move |event| event.cause != own_cause)
    }

    pub fn remove<Var: IntegerVariable>(
        &mut self,
        var: &Var,
        value: i32,
    ) -> Result<(), EmptyDomain> {
        let cause = self.cause();
        var.remove(self.environment, value, cause).map(|_| ())
    }

    pub fn set_lower_bound<Var: IntegerVariable>(
        &mut self,
        var: &Var,
        bound: i32,
    ) -> Result<(), EmptyDomain> {
        let cause = self.cause();
        var.set_lower_bound(self.environment, bound, cause)
            .map(|_| ())
    }

    pub fn set_upper_bound<Var: IntegerVariable>(
        &mut self,
        var: &Var,
        bound: i32,
    ) -> Result<(), EmptyDomain> {
        let cause = self.cause();
        var.set_upper_bound(self.environment, bound, cause)
            .map(|_| ())
    }

    pub fn assign(&mut self, trailed_integer: TrailedInteger, value: i64) {
        self.environment
            .assign_trailed_integer(trailed_integer, value);
    }
}

/// A trait which defines common methods for retrieving the [`Environment`] from the structure
/// which implements this trait.
pub trait HasEnvironment {
    /// Returns the stored [`Environment`].
    fn environment(&self) -> &Environment;
}

mod private {
    use super::*;

    impl HasEnvironment for PropagationContext<'_> {
        fn environment(&self) -> &Environment {
            self.environment
        }
    }

    impl HasEnvironment for PropagationContextMut<'_> {
        fn environment(&self) -> &Environment {
            self.environment
        }
    }
}

pub trait ReadDomains: HasEnvironment {
    /// Returns `true` if the domain of the given variable is singleton.
    fn is_fixed<Var: IntegerVariable>(&self, var: &Var) -> bool {
        self.lower_bound(var) == self.upper_bound(var)
    }

    fn lower_bound<Var: IntegerVariable>(&self, var: &Var) -> i32 {
        var.lower_bound(self.environment())
    }

    fn upper_bound<Var: IntegerVariable>(&self, var: &Var) -> i32 {
        var.upper_bound(self.environment())
    }

    fn contains<Var: IntegerVariable>(&self, var: &Var, value: i32) -> bool {
        var.contains(self.environment(), value)
    }

    fn size<Var: IntegerVariable>(&self, var: &Var) -> u64 {
        var.size(self.environment())
    }

    fn iterate_domain<Var: IntegerVariable>(&self, var: &Var) -> impl Iterator<Item = i32> {
        var.iterate_domain(self.environment())
    }

    fn value(&self, trailed_integer: TrailedInteger) -> i64 {
        self.environment().read_trailed_integer(trailed_integer)
    }
}

impl<T: HasEnvironment> ReadDomains for T {}
