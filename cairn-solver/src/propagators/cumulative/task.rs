use std::ops::Range;

use crate::engine::cp::propagation::ReadDomains;
use crate::engine::variables::AffineView;
use crate::engine::variables::DomainId;

/// A task with a fixed duration and demand. The end is the view `start + duration`.
#[derive(Clone, Debug)]
pub struct Task {
    pub start: DomainId,
    pub end: AffineView<DomainId>,
    pub duration: i32,
    pub demand: i32,
}

impl Task {
    pub(crate) fn bounds<Context: ReadDomains>(&self, context: &Context) -> TaskBounds {
        let est = context.lower_bound(&self.start);
        TaskBounds {
            est,
            lst: context.upper_bound(&self.start),
            ect: context.lower_bound(&self.end),
            duration: self.duration,
            demand: self.demand,
        }
    }
}

/// A task of which the duration and demand may be variables.
///
/// The end is either the view `start + duration` or an auxiliary variable linked to the start and
/// duration by a linear equality.
#[derive(Clone, Debug)]
pub struct VariableTask {
    pub start: DomainId,
    pub duration: DomainId,
    pub end: AffineView<DomainId>,
    pub demand: DomainId,
}

impl VariableTask {
    /// The bounds of the task with its smallest duration and demand.
    pub(crate) fn bounds<Context: ReadDomains>(&self, context: &Context) -> TaskBounds {
        let est = context.lower_bound(&self.start);
        let duration = context.lower_bound(&self.duration);
        TaskBounds {
            est,
            lst: context.upper_bound(&self.start),
            ect: context.lower_bound(&self.end).max(est.saturating_add(duration)),
            duration,
            demand: context.lower_bound(&self.demand),
        }
    }
}

/// The bounds of a task which the time-table reasoning needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct TaskBounds {
    /// Earliest start time
    pub(crate) est: i32,
    /// Latest start time
    pub(crate) lst: i32,
    /// Earliest completion time
    pub(crate) ect: i32,
    pub(crate) duration: i32,
    pub(crate) demand: i32,
}

impl TaskBounds {
    /// The time points at which the task executes for every remaining start time, `[LST, ECT)`.
    pub(crate) fn compulsory_part(&self) -> Option<Range<i32>> {
        (self.lst < self.ect && self.demand > 0).then_some(self.lst..self.ect)
    }

    pub(crate) fn is_fixed(&self) -> bool {
        self.est == self.lst
    }
}
