//! The record of how a domain shrank.
//!
//! Every successful domain operation appends a [`DeltaEvent`] to the delta of the affected
//! variable. Propagators read the events appended since their previous invocation through
//! [`PropagationContextMut::delta`](crate::engine::cp::propagation::PropagationContextMut::delta).
//! The delta is backtrackable state: popping a world truncates it to its length at the time the
//! world was pushed.
use std::ops::RangeInclusive;

use crate::engine::cp::Cause;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeltaKind {
    /// The lower bound was raised.
    LowerBound,
    /// The upper bound was lowered.
    UpperBound,
    /// Values strictly between the bounds were removed.
    Removal,
}

/// A single change to a domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DeltaEvent {
    pub kind: DeltaKind,
    /// The smallest removed value.
    pub lower: i32,
    /// The largest removed value.
    ///
    /// For bound events the interval `[lower, upper]` may contain values which were already
    /// absent from the domain.
    pub upper: i32,
    pub cause: Cause,
}

impl DeltaEvent {
    pub fn removed_values(&self) -> RangeInclusive<i32> {
        self.lower..=self.upper
    }
}

#[derive(Clone, Debug, Default)]
pub(crate) struct Delta {
    events: Vec<DeltaEvent>,
}

impl Delta {
    pub(crate) fn len(&self) -> usize {
        self.events.len()
    }

    pub(crate) fn push(&mut self, event: DeltaEvent) {
        self.events.push(event);
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.events.truncate(len);
    }

    /// The events appended after position `cursor`.
    pub(crate) fn since(&self, cursor: usize) -> &[DeltaEvent] {
        &self.events[cursor.min(self.events.len())..]
    }
}
