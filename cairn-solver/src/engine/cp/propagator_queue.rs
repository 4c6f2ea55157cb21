use std::collections::VecDeque;

use enum_map::EnumMap;

use crate::cairn_assert_moderate;
use crate::containers::KeyedVec;
use crate::engine::cp::propagation::Priority;
use crate::engine::cp::propagation::PropagatorId;

/// How a group of the propagator queue picks its next propagator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GroupPolicy {
    /// The propagator which was enqueued first.
    #[default]
    Fifo,
    /// The propagator which was enqueued last.
    Lifo,
    /// The pending propagator which is the smallest under the given ordering.
    One(PropagatorOrdering),
}

/// The orderings available to [`GroupPolicy::One`]; ties are broken by the smallest id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum PropagatorOrdering {
    #[default]
    LowestId,
    HighestId,
    /// The propagator registered on the fewest distinct variables.
    SmallestArity,
}

/// The propagators waiting to be run, grouped per [`Priority`].
///
/// Non-empty groups are served in priority order; within a group the [`GroupPolicy`] decides.
/// A propagator is at most once in the queue.
#[derive(Debug, Clone)]
pub(crate) struct PropagatorQueue {
    groups: EnumMap<Priority, VecDeque<PropagatorId>>,
    is_enqueued: KeyedVec<PropagatorId, bool>,
    num_enqueued: usize,
    policy: GroupPolicy,
}

impl Default for PropagatorQueue {
    fn default() -> Self {
        Self::new(GroupPolicy::default())
    }
}

impl PropagatorQueue {
    pub(crate) fn new(policy: GroupPolicy) -> PropagatorQueue {
        PropagatorQueue {
            groups: EnumMap::default(),
            is_enqueued: KeyedVec::default(),
            num_enqueued: 0,
            policy,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.num_enqueued == 0
    }

    pub(crate) fn enqueue_propagator(&mut self, propagator_id: PropagatorId, priority: Priority) {
        if !self.is_propagator_enqueued(propagator_id) {
            self.is_enqueued.accommodate(propagator_id, false);
            self.is_enqueued[propagator_id] = true;
            self.num_enqueued += 1;

            self.groups[priority].push_back(propagator_id);
        }
    }

    /// Removes the next propagator to run; `arity` is consulted by
    /// [`PropagatorOrdering::SmallestArity`].
    pub(crate) fn pop(&mut self, arity: impl Fn(PropagatorId) -> usize) -> Option<PropagatorId> {
        let policy = self.policy;
        let group = self.groups.values_mut().find(|group| !group.is_empty())?;

        let next_propagator_id = match policy {
            GroupPolicy::Fifo => group.pop_front(),
            GroupPolicy::Lifo => group.pop_back(),
            GroupPolicy::One(ordering) => {
                let position = group
                    .iter()
                    .enumerate()
                    .min_by_key(|(_, &propagator_id)| match ordering {
                        PropagatorOrdering::LowestId => (0, propagator_id.0 as i64),
                        PropagatorOrdering::HighestId => (0, -(propagator_id.0 as i64)),
                        PropagatorOrdering::SmallestArity => {
                            (arity(propagator_id), propagator_id.0 as i64)
                        }
                    })
                    .map(|(position, _)| position)?;
                group.remove(position)
            }
        };

        if let Some(propagator_id) = next_propagator_id {
            cairn_assert_moderate!(self.is_enqueued[propagator_id]);
            self.is_enqueued[propagator_id] = false;
            self.num_enqueued -= 1;
        }

        next_propagator_id
    }

    pub(crate) fn clear(&mut self) {
        for group in self.groups.values_mut() {
            group.clear();
        }

        for is_propagator_enqueued in self.is_enqueued.iter_mut() {
            *is_propagator_enqueued = false;
        }

        self.num_enqueued = 0;
    }

    pub(crate) fn is_propagator_enqueued(&self, propagator_id: PropagatorId) -> bool {
        self.is_enqueued
            .get(propagator_id)
            .copied()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_arity(_: PropagatorId) -> usize {
        0
    }

    #[test]
    fn test_ordering() {
        let mut queue = PropagatorQueue::default();

        queue.enqueue_propagator(PropagatorId(1), Priority::High);
        queue.enqueue_propagator(PropagatorId(0), Priority::Medium);
        queue.enqueue_propagator(PropagatorId(3), Priority::VeryLow);
        queue.enqueue_propagator(PropagatorId(4), Priority::Low);

        assert_eq!(Some(PropagatorId(1)), queue.pop(no_arity));
        assert_eq!(Some(PropagatorId(0)), queue.pop(no_arity));
        assert_eq!(Some(PropagatorId(4)), queue.pop(no_arity));
        assert_eq!(Some(PropagatorId(3)), queue.pop(no_arity));
        assert_eq!(None, queue.pop(no_arity));
    }

    #[test]
    fn propagators_are_enqueued_once() {
        let mut queue = PropagatorQueue::default();

        queue.enqueue_propagator(PropagatorId(2), Priority::Low);
        queue.enqueue_propagator(PropagatorId(2), Priority::Low);

        assert_eq!(Some(PropagatorId(2)), queue.pop(no_arity));
        assert!(queue.is_empty());
    }

    #[test]
    fn group_policies_pick_within_a_group() {
        let enqueue_all = |queue: &mut PropagatorQueue| {
            for id in [2, 0, 3, 1] {
                queue.enqueue_propagator(PropagatorId(id), Priority::Medium);
            }
        };
        let drain = |queue: &mut PropagatorQueue, arity: fn(PropagatorId) -> usize| {
            std::iter::from_fn(|| queue.pop(arity))
                .map(|id| id.0)
                .collect::<Vec<_>>()
        };

        let mut fifo = PropagatorQueue::new(GroupPolicy::Fifo);
        enqueue_all(&mut fifo);
        assert_eq!(drain(&mut fifo, no_arity), vec![2, 0, 3, 1]);

        let mut lifo = PropagatorQueue::new(GroupPolicy::Lifo);
        enqueue_all(&mut lifo);
        assert_eq!(drain(&mut lifo, no_arity), vec![1, 3, 0, 2]);

        let mut lowest = PropagatorQueue::new(GroupPolicy::One(PropagatorOrdering::LowestId));
        enqueue_all(&mut lowest);
        assert_eq!(drain(&mut lowest, no_arity), vec![0, 1, 2, 3]);

        let mut highest = PropagatorQueue::new(GroupPolicy::One(PropagatorOrdering::HighestId));
        enqueue_all(&mut highest);
        assert_eq!(drain(&mut highest, no_arity), vec![3, 2, 1, 0]);

        let mut smallest =
            PropagatorQueue::new(GroupPolicy::One(PropagatorOrdering::SmallestArity));
        enqueue_all(&mut smallest);
        assert_eq!(
            drain(&mut smallest, |id| [4, 4, 1, 2][id.0 as usize]),
            vec![2, 3, 0, 1]
        );
    }

    #[test]
    fn clearing_empties_every_group() {
        let mut queue = PropagatorQueue::default();
        queue.enqueue_propagator(PropagatorId(0), Priority::High);
        queue.enqueue_propagator(PropagatorId(1), Priority::Low);

        queue.clear();

        assert!(queue.is_empty());
        assert!(!queue.is_propagator_enqueued(PropagatorId(0)));
        assert_eq!(None, queue.pop(no_arity));
    }
}
