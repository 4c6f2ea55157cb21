use enumset::EnumSet;

use super::TransformableVariable;
use crate::containers::StorageKey;
use crate::engine::cp::Cause;
use crate::engine::cp::EmptyDomain;
use crate::engine::cp::Environment;
use crate::engine::cp::IntDomainEvent;
use crate::engine::cp::Watchers;
use crate::engine::variables::AffineView;
use crate::engine::variables::IntegerVariable;

/// A structure which represents the most basic [`IntegerVariable`]; it is simply the id which links
/// to a domain (hence the name).
#[derive(Clone, PartialEq, Eq, Copy, Hash, PartialOrd, Ord)]
pub struct DomainId {
    pub id: u32,
}

impl DomainId {
    pub fn new(id: u32) -> Self {
        DomainId { id }
    }

    pub fn id(&self) -> u32 {
        self.id
    }
}

impl IntegerVariable for DomainId {
    type AffineView = AffineView<Self>;

    fn lower_bound(&self, environment: &Environment) -> i32 {
        environment.lower_bound(*self)
    }

    fn upper_bound(&self, environment: &Environment) -> i32 {
        environment.upper_bound(*self)
    }

    fn contains(&self, environment: &Environment, value: i32) -> bool {
        environment.contains(*self, value)
    }

    fn size(&self, environment: &Environment) -> u64 {
        environment.size(*self)
    }

    fn iterate_domain(&self, environment: &Environment) -> impl Iterator<Item = i32> {
        environment.iter_domain(*self)
    }

    fn remove(
        &self,
        environment: &mut Environment,
        value: i32,
        cause: Cause,
    ) -> Result<bool, EmptyDomain> {
        environment.remove_value(*self, value, cause)
    }

    fn set_lower_bound(
        &self,
        environment: &mut Environment,
        value: i32,
        cause: Cause,
    ) -> Result<bool, EmptyDomain> {
        environment.tighten_lower_bound(*self, value, cause)
    }

    fn set_upper_bound(
        &self,
        environment: &mut Environment,
        value: i32,
        cause: Cause,
    ) -> Result<bool, EmptyDomain> {
        environment.tighten_upper_bound(*self, value, cause)
    }

    fn watch_all(&self, watchers: &mut Watchers<'_>, events: EnumSet<IntDomainEvent>) {
        watchers.watch_all(*self, events);
    }

    fn unpack_event(&self, event: IntDomainEvent) -> IntDomainEvent {
        event
    }
}

impl TransformableVariable<AffineView<DomainId>> for DomainId {
    fn scaled(&self, scale: i32) -> AffineView<DomainId> {
        AffineView::new(*self, scale, 0)
    }

    fn offset(&self, offset: i32) -> AffineView<DomainId> {
        AffineView::new(*self, 1, offset)
    }
}

impl StorageKey for DomainId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        DomainId { id: index as u32 }
    }
}

impl std::fmt::Display for DomainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}

impl std::fmt::Debug for DomainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}
