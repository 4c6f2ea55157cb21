use downcast_rs::impl_downcast;
use downcast_rs::Downcast;
use enum_map::Enum;

use super::LocalId;
use super::PropagationContext;
use super::PropagationContextMut;
use super::PropagatorInitialisationContext;
#[cfg(doc)]
use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatus;
#[cfg(doc)]
use crate::create_statistics_struct;
use crate::engine::cp::IntDomainEvent;
use crate::statistics::StatisticLogger;

// We need to use this to cast from `Box<dyn Propagator>` to the concrete propagator when a user
// asks for it through a handle; rust inherently does not allow downcasting from the trait
// definition to its concrete type.
impl_downcast!(Propagator);

/// All propagators implement the [`Propagator`] trait, which defines the main propagator logic
/// with regards to filtering domains and detecting conflicts.
///
/// The only required functions are [`Propagator::name`], [`Propagator::initialise_at_root`], and
/// [`Propagator::propagate`]; all other functions have default implementations.
///
/// See the [`crate::engine::cp::propagation`] documentation for more details.
pub trait Propagator: Downcast {
    /// Return the name of the propagator, this is a convenience method that is used for printing.
    fn name(&self) -> &str;

    /// The group in which the propagator is scheduled. Non-empty groups are served in priority
    /// order, so cheap propagators should use a high priority.
    ///
    /// By default the priority is [`Priority::Medium`].
    fn priority(&self) -> Priority {
        Priority::Medium
    }

    /// Initialises the propagator at the root. This is where the propagator subscribes to the
    /// variables it needs through [`PropagatorInitialisationContext::register`].
    ///
    /// The propagator will be enqueued right after it is initialised, so it does not have to
    /// filter here; returning an [`Inconsistency`] makes the model infeasible at the root.
    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext,
    ) -> PropagationStatus;

    /// Called when an event happens to one of the variables the propagator is subscribed to. It
    /// indicates whether the provided event should cause the propagator to be enqueued.
    ///
    /// The event is the event on the underlying domain; views translate it through
    /// [`IntegerVariable::unpack_event`](crate::variables::IntegerVariable::unpack_event).
    ///
    /// By default the propagator is always enqueued for every event.
    fn notify(
        &mut self,
        _context: PropagationContext,
        _local_id: LocalId,
        _event: IntDomainEvent,
    ) -> EnqueueDecision {
        EnqueueDecision::Enqueue
    }

    /// Filters the domains of the variables of the propagator.
    ///
    /// In case no conflict has been detected it should return [`Result::Ok`], otherwise it
    /// should return an [`Inconsistency`]; either because a domain operation emptied a domain
    /// ([`Inconsistency::EmptyDomain`]) or because the propagator found its constraint violated
    /// ([`Inconsistency::Violated`]).
    ///
    /// Propagators are not required to propagate until a fixed point, but they are not notified
    /// of their own changes.
    fn propagate(&mut self, context: PropagationContextMut) -> PropagationStatus;

    /// Whether the constraint of the propagator holds for every remaining assignment.
    ///
    /// Once a propagator reports [`Entailment::Satisfied`] it becomes passive until the solver
    /// backtracks past that point. [`Entailment::Violated`] is treated as a conflict.
    ///
    /// By default the entailment is [`Entailment::Undetermined`].
    fn is_entailed(&self, _context: PropagationContext) -> Entailment {
        Entailment::Undetermined
    }

    /// Logs statistics of the propagator using the provided [`StatisticLogger`].
    ///
    /// It is recommended to create a struct through the [`create_statistics_struct!`] macro!
    fn log_statistics(&self, _statistic_logger: StatisticLogger) {}
}

/// Indicator of what to do when a propagator is notified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnqueueDecision {
    /// The propagator should be enqueued.
    Enqueue,
    /// The propagator should not be enqueued.
    Skip,
}

/// The scheduling group of a propagator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Enum)]
pub enum Priority {
    High,
    Medium,
    Low,
    VeryLow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entailment {
    Satisfied,
    Violated,
    Undetermined,
}
