use std::fmt::Debug;

use enumset::EnumSet;

use crate::engine::cp::Cause;
use crate::engine::cp::EmptyDomain;
use crate::engine::cp::Environment;
use crate::engine::cp::IntDomainEvent;
use crate::engine::cp::Watchers;
use crate::engine::variables::TransformableVariable;

/// A variable which can be read and tightened through the [`Environment`].
///
/// The mutating operations return `Ok(false)` when the domain did not change, and an
/// [`EmptyDomain`] (without touching the domain) when every remaining value would be removed.
pub trait IntegerVariable: Clone + TransformableVariable<Self::AffineView> + Debug + 'static {
    type AffineView: IntegerVariable;

    /// Get the lower bound of the variable.
    fn lower_bound(&self, environment: &Environment) -> i32;

    /// Get the upper bound of the variable.
    fn upper_bound(&self, environment: &Environment) -> i32;

    /// Determine whether the value is in the domain of this variable.
    fn contains(&self, environment: &Environment, value: i32) -> bool;

    /// The number of values in the domain.
    fn size(&self, environment: &Environment) -> u64;

    /// The values in the domain, in the order of the underlying domain.
    fn iterate_domain(&self, environment: &Environment) -> impl Iterator<Item = i32>;

    /// Remove a value from the domain of this variable.
    fn remove(
        &self,
        environment: &mut Environment,
        value: i32,
        cause: Cause,
    ) -> Result<bool, EmptyDomain>;

    /// Tighten the lower bound of the domain of this variable.
    fn set_lower_bound(
        &self,
        environment: &mut Environment,
        value: i32,
        cause: Cause,
    ) -> Result<bool, EmptyDomain>;

    /// Tighten the upper bound of the domain of this variable.
    fn set_upper_bound(
        &self,
        environment: &mut Environment,
        value: i32,
        cause: Cause,
    ) -> Result<bool, EmptyDomain>;

    /// Register a watch for this variable on the given domain events.
    fn watch_all(&self, watchers: &mut Watchers<'_>, events: EnumSet<IntDomainEvent>);

    /// Translate an event on the underlying domain to an event on this variable.
    fn unpack_event(&self, event: IntDomainEvent) -> IntDomainEvent;
}
