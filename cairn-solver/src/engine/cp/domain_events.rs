use enumset::enum_set;
use enumset::EnumSet;

use crate::engine::cp::IntDomainEvent;

/// The events a propagator subscribes to for one of its variables.
///
/// A bound change is always a removal as well, so subscribing to [`DomainEvents::REMOVAL`] is
/// enough to observe every change; the narrower sets keep propagators from being scheduled for
/// changes they cannot use.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DomainEvents {
    events: EnumSet<IntDomainEvent>,
}

impl DomainEvents {
    /// The variable became fixed.
    pub const ASSIGN: DomainEvents = DomainEvents::new(enum_set!(IntDomainEvent::Assign));
    pub const LOWER_BOUND: DomainEvents = DomainEvents::new(enum_set!(IntDomainEvent::LowerBound));
    pub const UPPER_BOUND: DomainEvents = DomainEvents::new(enum_set!(IntDomainEvent::UpperBound));
    /// Either bound moved.
    pub const BOUNDS: DomainEvents = DomainEvents::new(enum_set!(
        IntDomainEvent::LowerBound | IntDomainEvent::UpperBound
    ));
    /// Any value was removed, including the bounds.
    pub const REMOVAL: DomainEvents = DomainEvents::new(enum_set!(IntDomainEvent::Removal));
    pub const ANY_INT: DomainEvents = DomainEvents::new(enum_set!(
        IntDomainEvent::Assign
            | IntDomainEvent::LowerBound
            | IntDomainEvent::UpperBound
            | IntDomainEvent::Removal
    ));

    const fn new(events: EnumSet<IntDomainEvent>) -> DomainEvents {
        DomainEvents { events }
    }

    /// The union of both sets of events.
    pub fn or(self, other: DomainEvents) -> DomainEvents {
        DomainEvents::new(self.events.union(other.events))
    }

    pub fn contains(&self, event: IntDomainEvent) -> bool {
        self.events.contains(event)
    }

    pub(crate) fn int_events(&self) -> EnumSet<IntDomainEvent> {
        self.events
    }
}
