//! The representations a variable domain can take.
//!
//! A [`Domain`] is only ever mutated through the
//! [`Environment`](crate::engine::cp::Environment), which records the pre-image of every change on
//! its trail. The primitives here therefore assume that the caller already checked that the
//! change is valid and non-empty.
mod bitset_domain;
mod boolean_domain;
mod interval_domain;

use bitset_domain::BitSetDomain;
use boolean_domain::BooleanDomain;
use interval_domain::IntervalDomain;

/// Which representation backs the domain of a variable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DomainKind {
    /// Only the bounds are stored; removing a value strictly inside the bounds has no effect.
    Interval,
    /// One bit per value of the initial range; supports holes.
    BitSet,
    /// A sub-range of `{0, 1}`.
    Boolean,
}

/// The information needed to restore the bounds of a domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct DomainSnapshot {
    pub(crate) lower_bound: i32,
    pub(crate) upper_bound: i32,
    pub(crate) size: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Domain {
    Interval(IntervalDomain),
    BitSet(BitSetDomain),
    Boolean(BooleanDomain),
}

impl Domain {
    pub(crate) fn interval(lower_bound: i32, upper_bound: i32) -> Domain {
        Domain::Interval(IntervalDomain::new(lower_bound, upper_bound))
    }

    pub(crate) fn bitset(values: &[i32]) -> Domain {
        Domain::BitSet(BitSetDomain::new(values))
    }

    pub(crate) fn boolean() -> Domain {
        Domain::Boolean(BooleanDomain::default())
    }

    pub(crate) fn kind(&self) -> DomainKind {
        match self {
            Domain::Interval(_) => DomainKind::Interval,
            Domain::BitSet(_) => DomainKind::BitSet,
            Domain::Boolean(_) => DomainKind::Boolean,
        }
    }

    /// Whether every value of the domain can be removed individually.
    pub(crate) fn is_enumerated(&self) -> bool {
        !matches!(self, Domain::Interval(_))
    }

    pub(crate) fn lower_bound(&self) -> i32 {
        match self {
            Domain::Interval(domain) => domain.lower_bound(),
            Domain::BitSet(domain) => domain.lower_bound(),
            Domain::Boolean(domain) => domain.values().lower_bound(),
        }
    }

    pub(crate) fn upper_bound(&self) -> i32 {
        match self {
            Domain::Interval(domain) => domain.upper_bound(),
            Domain::BitSet(domain) => domain.upper_bound(),
            Domain::Boolean(domain) => domain.values().upper_bound(),
        }
    }

    pub(crate) fn size(&self) -> u64 {
        match self {
            Domain::Interval(domain) => domain.size(),
            Domain::BitSet(domain) => domain.size(),
            Domain::Boolean(domain) => domain.values().size(),
        }
    }

    pub(crate) fn is_fixed(&self) -> bool {
        self.lower_bound() == self.upper_bound()
    }

    pub(crate) fn contains(&self, value: i32) -> bool {
        match self {
            Domain::Interval(domain) => domain.contains(value),
            Domain::BitSet(domain) => domain.contains(value),
            Domain::Boolean(domain) => domain.values().contains(value),
        }
    }

    /// The smallest value in the domain which is at least `value`.
    pub(crate) fn first_value_at_least(&self, value: i32) -> Option<i32> {
        match self {
            Domain::Interval(domain) => domain.first_value_at_least(value),
            Domain::BitSet(domain) => domain.first_value_at_least(value),
            Domain::Boolean(domain) => domain.values().first_value_at_least(value),
        }
    }

    /// The largest value in the domain which is at most `value`.
    pub(crate) fn last_value_at_most(&self, value: i32) -> Option<i32> {
        match self {
            Domain::Interval(domain) => domain.last_value_at_most(value),
            Domain::BitSet(domain) => domain.last_value_at_most(value),
            Domain::Boolean(domain) => domain.values().last_value_at_most(value),
        }
    }

    /// The smallest value in the domain strictly greater than `value`.
    pub(crate) fn next_value(&self, value: i32) -> Option<i32> {
        if value >= self.upper_bound() {
            None
        } else {
            self.first_value_at_least(value + 1)
        }
    }

    /// The largest value in the domain strictly smaller than `value`.
    pub(crate) fn previous_value(&self, value: i32) -> Option<i32> {
        if value <= self.lower_bound() {
            None
        } else {
            self.last_value_at_most(value - 1)
        }
    }

    /// Iterates the values of the domain in ascending order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        std::iter::successors(Some(self.lower_bound()), move |&value| {
            self.next_value(value)
        })
    }

    pub(crate) fn snapshot(&self) -> DomainSnapshot {
        DomainSnapshot {
            lower_bound: self.lower_bound(),
            upper_bound: self.upper_bound(),
            size: self.size(),
        }
    }

    pub(crate) fn restore(&mut self, snapshot: DomainSnapshot) {
        match self {
            Domain::Interval(domain) => domain.set_bounds(snapshot.lower_bound, snapshot.upper_bound),
            Domain::BitSet(domain) => {
                domain.restore(snapshot.lower_bound, snapshot.upper_bound, snapshot.size)
            }
            Domain::Boolean(domain) => domain
                .values_mut()
                .set_bounds(snapshot.lower_bound, snapshot.upper_bound),
        }
    }

    /// Moves both bounds; both have to be values of the domain.
    pub(crate) fn set_bounds(&mut self, lower_bound: i32, upper_bound: i32) {
        match self {
            Domain::Interval(domain) => domain.set_bounds(lower_bound, upper_bound),
            Domain::BitSet(domain) => domain.set_bounds(lower_bound, upper_bound),
            Domain::Boolean(domain) => domain.values_mut().set_bounds(lower_bound, upper_bound),
        }
    }

    /// Removes a value strictly between the bounds of an enumerated domain.
    ///
    /// Returns false when the representation cannot express the hole.
    pub(crate) fn remove_interior(&mut self, value: i32) -> bool {
        match self {
            Domain::BitSet(domain) => {
                domain.remove_interior(value);
                true
            }
            // A boolean domain has no interior values and an interval cannot have holes.
            Domain::Interval(_) | Domain::Boolean(_) => false,
        }
    }

    pub(crate) fn reinsert(&mut self, value: i32) {
        if let Domain::BitSet(domain) = self {
            domain.reinsert(value);
        }
    }
}
