use crate::propagators::cumulative::TaskBounds;

/// A rectangle in the time-table: during `[start, end)` the compulsory parts of the tasks use
/// `height` units of the resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ResourceProfile {
    /// The start time of the [`ResourceProfile`] (inclusive)
    pub(crate) start: i32,
    /// The end time of the [`ResourceProfile`] (exclusive)
    pub(crate) end: i32,
    pub(crate) height: i64,
}

impl ResourceProfile {
    pub(crate) fn is_within(&self, interval: &std::ops::Range<i32>) -> bool {
        interval.start <= self.start && self.end <= interval.end
    }
}

/// Creates the time-table of the given tasks by sweeping over the start and end events of their
/// compulsory parts.
///
/// The profiles are sorted on their start, do not overlap, and have a positive height. Every start
/// or end of a compulsory part is a boundary between profiles, so a profile is either fully
/// inside or fully outside the compulsory part of a task.
pub(crate) fn create_time_table(tasks: &[TaskBounds]) -> Vec<ResourceProfile> {
    let mut events = tasks
        .iter()
        .filter_map(|task| {
            task.compulsory_part().map(|part| {
                [
                    (part.start, task.demand as i64),
                    (part.end, -(task.demand as i64)),
                ]
            })
        })
        .flatten()
        .collect::<Vec<_>>();
    events.sort_unstable_by_key(|&(time, _)| time);

    let mut time_table = Vec::new();
    let mut height = 0;
    let mut previous_time = i32::MIN;

    for (time, change) in events {
        if time != previous_time && height > 0 {
            time_table.push(ResourceProfile {
                start: previous_time,
                end: time,
                height,
            });
        }
        height += change;
        previous_time = time;
    }

    time_table
}
