use enumset::EnumSet;

use super::IntDomainEvent;
use crate::containers::KeyedVec;
use crate::engine::cp::propagation::LocalId;
use crate::engine::cp::propagation::PropagatorId;
use crate::engine::cp::propagation::PropagatorVarId;
use crate::engine::variables::DomainId;

/// For every domain, the propagators which asked to be notified of events on it.
#[derive(Default, Debug)]
pub(crate) struct WatchListCP {
    watchers: KeyedVec<DomainId, Vec<Watcher>>,
    /// The distinct propagators watching a domain, in registration order.
    propagators: KeyedVec<DomainId, Vec<PropagatorId>>,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Watcher {
    pub(crate) propagator_var: PropagatorVarId,
    pub(crate) events: EnumSet<IntDomainEvent>,
}

impl WatchListCP {
    pub(crate) fn grow(&mut self) {
        let _ = self.watchers.push(Vec::new());
        let _ = self.propagators.push(Vec::new());
    }

    pub(crate) fn num_watchers(&self, domain: DomainId) -> usize {
        self.watchers[domain].len()
    }

    pub(crate) fn watcher(&self, domain: DomainId, index: usize) -> Watcher {
        self.watchers[domain][index]
    }

    pub(crate) fn propagators_watching(&self, domain: DomainId) -> &[PropagatorId] {
        &self.propagators[domain]
    }

    fn watch(
        &mut self,
        propagator_var: PropagatorVarId,
        domain: DomainId,
        events: EnumSet<IntDomainEvent>,
    ) {
        self.watchers[domain].push(Watcher {
            propagator_var,
            events,
        });

        let propagators = &mut self.propagators[domain];
        if !propagators.contains(&propagator_var.propagator) {
            propagators.push(propagator_var.propagator);
        }
    }
}

/// Used to register a propagator for notifications about events to a particular variable
#[derive(Debug)]
pub struct Watchers<'a> {
    propagator_var: PropagatorVarId,
    watch_list: &'a mut WatchListCP,
    /// The domains registered through this handle
    registered: &'a mut Vec<(LocalId, DomainId)>,
}

impl<'a> Watchers<'a> {
    pub(crate) fn new(
        propagator_var: PropagatorVarId,
        watch_list: &'a mut WatchListCP,
        registered: &'a mut Vec<(LocalId, DomainId)>,
    ) -> Self {
        Watchers {
            propagator_var,
            watch_list,
            registered,
        }
    }

    pub(crate) fn watch_all(&mut self, domain: DomainId, events: EnumSet<IntDomainEvent>) {
        self.watch_list.watch(self.propagator_var, domain, events);
        self.registered
            .push((self.propagator_var.variable, domain));
    }
}
