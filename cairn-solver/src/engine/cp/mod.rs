mod cause;
pub(crate) mod delta;
pub(crate) mod domain_events;
pub(crate) mod domains;
mod environment;
pub(crate) mod propagation;
mod propagation_engine;
mod propagator_queue;
pub(crate) mod test_solver;
mod trailed;
mod watch_lists;

pub use cause::Cause;
pub use delta::DeltaEvent;
pub use delta::DeltaKind;
pub use domain_events::DomainEvents;
pub use domains::DomainKind;
pub use environment::EmptyDomain;
pub use environment::Environment;
pub(crate) use propagation_engine::Contradiction;
pub(crate) use propagation_engine::PropagationEngine;
pub use propagator_queue::GroupPolicy;
pub use propagator_queue::PropagatorOrdering;
pub(crate) use propagator_queue::PropagatorQueue;
pub use trailed::*;
pub use watch_lists::IntDomainEvent;
pub(crate) use watch_lists::WatchListCP;
pub use watch_lists::Watchers;
