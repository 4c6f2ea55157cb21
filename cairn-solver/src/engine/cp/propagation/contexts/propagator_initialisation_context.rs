use super::HasEnvironment;
use super::PropagationContext;
use crate::engine::cp::domain_events::DomainEvents;
use crate::engine::cp::propagation::LocalId;
#[cfg(doc)]
use crate::engine::cp::propagation::Propagator;
use crate::engine::cp::propagation::PropagatorId;
use crate::engine::cp::propagation::PropagatorVarId;
use crate::engine::cp::Environment;
use crate::engine::cp::TrailedInteger;
use crate::engine::cp::WatchListCP;
use crate::engine::cp::Watchers;
use crate::engine::variables::DomainId;
use crate::engine::variables::IntegerVariable;

/// [`PropagatorInitialisationContext`] is used when [`Propagator`]s are initialised after creation.
///
/// It represents a communication point between the [`Solver`](crate::Solver) and the
/// [`Propagator`]. Propagators use the [`PropagatorInitialisationContext`] to register to domain
/// changes of variables, to retrieve the current bounds of variables, and to create their
/// trailed state.
#[derive(Debug)]
pub struct PropagatorInitialisationContext<'a> {
    watch_list: &'a mut WatchListCP,
    propagator_id: PropagatorId,
    registered: &'a mut Vec<(LocalId, DomainId)>,
    pub(crate) environment: &'a mut Environment,
}

impl PropagatorInitialisationContext<'_> {
    pub(crate) fn new<'a>(
        watch_list: &'a mut WatchListCP,
        propagator_id: PropagatorId,
        registered: &'a mut Vec<(LocalId, DomainId)>,
        environment: &'a mut Environment,
    ) -> PropagatorInitialisationContext<'a> {
        PropagatorInitialisationContext {
            watch_list,
            propagator_id,
            registered,
            environment,
        }
    }

    pub fn as_readonly(&self) -> PropagationContext<'_> {
        PropagationContext::new(self.environment)
    }

    /// Subscribes the propagator to the given [`DomainEvents`].
    ///
    /// The domain events determine when [`Propagator::notify()`] will be called on the propagator.
    /// The [`LocalId`] is internal information related to the propagator,
    /// which is used when calling [`Propagator::notify()`] and
    /// [`PropagationContextMut::delta`](super::PropagationContextMut::delta) to identify the
    /// variable.
    ///
    /// Each variable *must* have a unique [`LocalId`]. Most often this would be its index of the
    /// variable in the internal array of variables.
    pub fn register<Var: IntegerVariable>(
        &mut self,
        var: Var,
        domain_events: DomainEvents,
        local_id: LocalId,
    ) -> Var {
        let propagator_var = PropagatorVarId {
            propagator: self.propagator_id,
            variable: local_id,
        };

        let mut watchers = Watchers::new(propagator_var, self.watch_list, self.registered);
        var.watch_all(&mut watchers, domain_events.int_events());

        var
    }

    /// Creates an integer which is restored when the solver backtracks.
    pub fn new_trailed_integer(&mut self, initial_value: i64) -> TrailedInteger {
        self.environment.new_trailed_integer(initial_value)
    }
}

impl HasEnvironment for PropagatorInitialisationContext<'_> {
    fn environment(&self) -> &Environment {
        self.environment
    }
}
