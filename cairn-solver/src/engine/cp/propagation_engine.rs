use std::fmt::Display;

use itertools::Itertools;

use crate::basic_types::Inconsistency;
use crate::cairn_assert_extreme;
use crate::containers::KeyedVec;
use crate::engine::cp::propagation::Entailment;
use crate::engine::cp::propagation::EnqueueDecision;
use crate::engine::cp::propagation::Propagator;
use crate::engine::cp::propagation::PropagatorHandle;
use crate::engine::cp::propagation::PropagatorId;
use crate::engine::cp::propagation::PropagatorInitialisationContext;
use crate::engine::cp::propagation::PropagatorStore;
use crate::engine::cp::propagation::PropagationContext;
use crate::engine::cp::propagation::PropagationContextMut;
use crate::engine::cp::propagation::Registration;
use crate::engine::cp::Cause;
use crate::engine::cp::Environment;
use crate::engine::cp::GroupPolicy;
use crate::engine::cp::PropagatorQueue;
use crate::engine::cp::TrailedInteger;
use crate::engine::cp::WatchListCP;
use crate::engine::variables::DomainId;
use crate::engine::SolverStatistics;
use crate::statistics::StatisticLogger;

/// The outcome of a propagation run which ended in a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Contradiction {
    /// The propagator which detected the failure; `None` if it was detected while applying a
    /// decision or a bound of the objective.
    pub(crate) propagator: Option<PropagatorId>,
    pub(crate) inconsistency: Inconsistency,
}

impl Contradiction {
    pub(crate) fn without_propagator(inconsistency: impl Into<Inconsistency>) -> Self {
        Contradiction {
            propagator: None,
            inconsistency: inconsistency.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EngineState {
    Idle,
    Scheduled,
    Filtering(PropagatorId),
    Fixpoint,
    Contradiction,
}

impl Display for EngineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineState::Idle => write!(f, "idle"),
            EngineState::Scheduled => write!(f, "scheduled"),
            EngineState::Filtering(propagator) => write!(f, "filtering({propagator})"),
            EngineState::Fixpoint => write!(f, "fixpoint"),
            EngineState::Contradiction => write!(f, "contradiction"),
        }
    }
}

/// Runs the propagators until none of them can remove a value any more, or until one of them
/// detects a contradiction.
#[derive(Debug)]
pub(crate) struct PropagationEngine {
    store: PropagatorStore,
    watch_list: WatchListCP,
    registrations: KeyedVec<PropagatorId, Vec<Registration>>,
    /// The distinct domains each propagator registered to.
    variables: KeyedVec<PropagatorId, Vec<DomainId>>,
    /// Set to 1 once the propagator is entailed; restored on backtracking.
    passive: KeyedVec<PropagatorId, TrailedInteger>,
    /// Set once a propagator completed a propagation; undone when backtracking past it.
    propagated: KeyedVec<PropagatorId, TrailedInteger>,
    /// The number of contradictions each propagator detected. These survive backtracking.
    failure_counts: KeyedVec<PropagatorId, u64>,
    queue: PropagatorQueue,
    state: EngineState,
}

impl Default for PropagationEngine {
    fn default() -> Self {
        PropagationEngine::new(GroupPolicy::default())
    }
}

impl PropagationEngine {
    pub(crate) fn new(group_policy: GroupPolicy) -> PropagationEngine {
        PropagationEngine {
            store: PropagatorStore::default(),
            watch_list: WatchListCP::default(),
            registrations: KeyedVec::default(),
            variables: KeyedVec::default(),
            passive: KeyedVec::default(),
            propagated: KeyedVec::default(),
            failure_counts: KeyedVec::default(),
            queue: PropagatorQueue::new(group_policy),
            state: EngineState::Idle,
        }
    }

    /// Makes room for the watchers of a domain which was just added to the environment.
    pub(crate) fn grow(&mut self) {
        self.watch_list.grow();
    }

    pub(crate) fn num_propagators(&self) -> usize {
        self.store.num_propagators()
    }

    pub(crate) fn get_propagator<P: Propagator>(&self, handle: PropagatorHandle<P>) -> Option<&P> {
        self.store.get_propagator(handle)
    }

    pub(crate) fn propagator_name(&self, propagator_id: PropagatorId) -> &str {
        self.store[propagator_id].name()
    }

    /// Stores and initialises the propagator and schedules it for its first run.
    ///
    /// The propagator stays in the engine even if its initialisation reports an inconsistency.
    pub(crate) fn add_propagator<P: Propagator>(
        &mut self,
        environment: &mut Environment,
        propagator: P,
    ) -> (PropagatorHandle<P>, Result<(), Inconsistency>) {
        let handle = self.store.push(propagator);
        let propagator_id = handle.untyped();

        let mut registered = Vec::new();
        let status = {
            let mut context = PropagatorInitialisationContext::new(
                &mut self.watch_list,
                propagator_id,
                &mut registered,
                environment,
            );
            self.store[propagator_id].initialise_at_root(&mut context)
        };

        let registrations = registered
            .iter()
            .map(|&(local_id, domain)| Registration {
                local_id,
                domain,
                cursor: environment.delta_len(domain),
            })
            .collect();
        let variables = registered
            .iter()
            .map(|&(_, domain)| domain)
            .unique()
            .collect();

        let _ = self.registrations.push(registrations);
        let _ = self.variables.push(variables);
        let _ = self.passive.push(environment.new_trailed_integer(0));
        let _ = self.propagated.push(environment.new_trailed_integer(0));
        let _ = self.failure_counts.push(0);

        if status.is_ok() {
            let priority = self.store[propagator_id].priority();
            self.queue.enqueue_propagator(propagator_id, priority);
        }

        (handle, status)
    }

    /// The propagators which registered to `domain`, in the order in which they were added.
    pub(crate) fn propagators_watching(&self, domain: DomainId) -> &[PropagatorId] {
        self.watch_list.propagators_watching(domain)
    }

    /// The number of distinct variables the propagator registered to.
    pub(crate) fn arity(&self, propagator_id: PropagatorId) -> usize {
        self.variables[propagator_id].len()
    }

    /// The number of distinct variables of the propagator which are not yet fixed.
    pub(crate) fn future_arity(
        &self,
        environment: &Environment,
        propagator_id: PropagatorId,
    ) -> usize {
        self.variables[propagator_id]
            .iter()
            .filter(|&&domain| !environment.is_fixed(domain))
            .count()
    }

    pub(crate) fn failure_count(&self, propagator_id: PropagatorId) -> u64 {
        self.failure_counts[propagator_id]
    }

    pub(crate) fn is_passive(&self, environment: &Environment, propagator_id: PropagatorId) -> bool {
        environment.read_trailed_integer(self.passive[propagator_id]) != 0
    }

    /// Has to be called after the environment popped one or more worlds, so that no propagator
    /// reads past the end of a truncated delta.
    pub(crate) fn synchronise(&mut self, environment: &Environment) {
        for registration in self.registrations.iter_mut().flatten() {
            registration.cursor = registration
                .cursor
                .min(environment.delta_len(registration.domain));
        }

        self.transition(EngineState::Idle);
    }

    /// Propagates until a fixpoint is reached or a contradiction is found.
    ///
    /// After a contradiction the queue is empty and the pending domain events are dropped; the
    /// caller is expected to backtrack.
    pub(crate) fn propagate(
        &mut self,
        environment: &mut Environment,
        statistics: &mut SolverStatistics,
    ) -> Result<(), Contradiction> {
        self.transition(EngineState::Scheduled);

        loop {
            self.notify_pending(environment);

            let variables = &self.variables;
            let Some(propagator_id) = self.queue.pop(|id| variables[id].len()) else {
                break;
            };

            self.transition(EngineState::Filtering(propagator_id));
            statistics.num_propagations += 1;

            let first_propagation =
                environment.read_trailed_integer(self.propagated[propagator_id]) == 0;
            let context = PropagationContextMut::new(
                environment,
                propagator_id,
                &self.registrations[propagator_id],
                first_propagation,
            );
            let status = self.store[propagator_id].propagate(context);

            for registration in self.registrations[propagator_id].iter_mut() {
                registration.cursor = environment.delta_len(registration.domain);
            }

            if let Err(inconsistency) = status {
                return Err(self.fail(environment, propagator_id, inconsistency));
            }
            if first_propagation {
                environment.assign_trailed_integer(self.propagated[propagator_id], 1);
            }

            match self.store[propagator_id].is_entailed(PropagationContext::new(environment)) {
                Entailment::Satisfied => {
                    environment.assign_trailed_integer(self.passive[propagator_id], 1);
                }
                Entailment::Violated => {
                    return Err(self.fail(environment, propagator_id, Inconsistency::Violated));
                }
                Entailment::Undetermined => {}
            }
        }

        cairn_assert_extreme!(!environment.has_pending_events());
        self.transition(EngineState::Fixpoint);

        Ok(())
    }

    /// Offers the pending domain events to the propagators which watch them.
    fn notify_pending(&mut self, environment: &mut Environment) {
        for (event, domain, cause) in environment.take_domain_events() {
            for index in 0..self.watch_list.num_watchers(domain) {
                let watcher = self.watch_list.watcher(domain, index);
                let propagator_id = watcher.propagator_var.propagator;

                if !watcher.events.contains(event)
                    || cause == Cause::Propagator(propagator_id)
                    || self.is_passive(environment, propagator_id)
                {
                    continue;
                }

                let decision = self.store[propagator_id].notify(
                    PropagationContext::new(environment),
                    watcher.propagator_var.variable,
                    event,
                );

                if decision == EnqueueDecision::Enqueue {
                    let priority = self.store[propagator_id].priority();
                    self.queue.enqueue_propagator(propagator_id, priority);
                }
            }
        }
    }

    fn fail(
        &mut self,
        environment: &mut Environment,
        propagator_id: PropagatorId,
        inconsistency: Inconsistency,
    ) -> Contradiction {
        self.queue.clear();
        environment.clear_domain_events();
        self.failure_counts[propagator_id] += 1;

        log::trace!(
            "{} failed: {inconsistency}",
            self.store[propagator_id].name()
        );
        self.transition(EngineState::Contradiction);

        Contradiction {
            propagator: Some(propagator_id),
            inconsistency,
        }
    }

    fn transition(&mut self, state: EngineState) {
        if self.state != state {
            log::trace!("engine: {} -> {state}", self.state);
            self.state = state;
        }
    }

    pub(crate) fn log_statistics(&self, statistic_logger: &StatisticLogger) {
        for (index, propagator) in self.store.iter_propagators().enumerate() {
            propagator.log_statistics(
                statistic_logger.attach_to_prefix(format!("{}_{index}", propagator.name())),
            );
        }
    }
}
