use std::cmp::max;
use std::cmp::min;

/// A domain which is fully described by its bounds.
///
/// Values strictly inside the bounds cannot be removed, the domain is always an interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct IntervalDomain {
    lower_bound: i32,
    upper_bound: i32,
}

impl IntervalDomain {
    pub(crate) fn new(lower_bound: i32, upper_bound: i32) -> Self {
        IntervalDomain {
            lower_bound,
            upper_bound,
        }
    }

    pub(crate) fn lower_bound(&self) -> i32 {
        self.lower_bound
    }

    pub(crate) fn upper_bound(&self) -> i32 {
        self.upper_bound
    }

    pub(crate) fn size(&self) -> u64 {
        (self.upper_bound as i64 - self.lower_bound as i64 + 1) as u64
    }

    pub(crate) fn contains(&self, value: i32) -> bool {
        self.lower_bound <= value && value <= self.upper_bound
    }

    pub(crate) fn first_value_at_least(&self, value: i32) -> Option<i32> {
        (value <= self.upper_bound).then(|| max(value, self.lower_bound))
    }

    pub(crate) fn last_value_at_most(&self, value: i32) -> Option<i32> {
        (value >= self.lower_bound).then(|| min(value, self.upper_bound))
    }

    pub(crate) fn set_bounds(&mut self, lower_bound: i32, upper_bound: i32) {
        self.lower_bound = lower_bound;
        self.upper_bound = upper_bound;
    }
}
