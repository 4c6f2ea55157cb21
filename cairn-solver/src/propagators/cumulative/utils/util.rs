//! The filtering rules of time-table reasoning.
use super::ResourceProfile;
use crate::basic_types::Inconsistency;
use crate::create_statistics_struct;
use crate::propagators::cumulative::TaskBounds;

create_statistics_struct!(
    /// Statistics of a propagator of the cumulative constraint.
    CumulativeStatistics {
        /// The number of times the time-table was built
        num_time_tables: u64,
        /// The number of start bounds which were tightened
        num_bound_updates: u64,
        /// The number of times the compulsory parts exceeded the capacity
        num_overloads: u64,
});

/// Reports an inconsistency if any profile is higher than the capacity.
pub(crate) fn check_overload(
    time_table: &[ResourceProfile],
    capacity: i64,
) -> Result<(), Inconsistency> {
    if time_table.iter().any(|profile| profile.height > capacity) {
        Err(Inconsistency::Violated)
    } else {
        Ok(())
    }
}

pub(crate) fn max_height(time_table: &[ResourceProfile]) -> i64 {
    time_table
        .iter()
        .map(|profile| profile.height)
        .max()
        .unwrap_or(0)
}

/// Whether placing the task over the profile would exceed the capacity; the usage of the
/// compulsory part of the task itself is not counted twice.
fn overflows(profile: &ResourceProfile, task: &TaskBounds, capacity: i64) -> bool {
    let own_usage = match task.compulsory_part() {
        Some(part) if profile.is_within(&part) => task.demand as i64,
        _ => 0,
    };

    profile.height - own_usage + task.demand as i64 > capacity
}

/// The earliest start time, at least the current one, at which the task does not overflow any
/// profile. The result exceeds the latest start time if there is no such start.
pub(crate) fn earliest_start(time_table: &[ResourceProfile], task: &TaskBounds, capacity: i64) -> i64 {
    let mut start = task.est as i64;

    loop {
        let end = start + task.duration as i64;
        let first = time_table.partition_point(|profile| (profile.end as i64) <= start);

        let conflicting = time_table[first..]
            .iter()
            .take_while(|profile| (profile.start as i64) < end)
            .filter(|profile| overflows(profile, task, capacity))
            .last();

        match conflicting {
            Some(profile) => start = profile.end as i64,
            None => return start,
        }

        if start > task.lst as i64 {
            return start;
        }
    }
}

/// The latest start time, at most the current one, at which the task does not overflow any
/// profile. The result is below the earliest start time if there is no such start.
pub(crate) fn latest_start(time_table: &[ResourceProfile], task: &TaskBounds, capacity: i64) -> i64 {
    let mut start = task.lst as i64;

    loop {
        let end = start + task.duration as i64;
        let first = time_table.partition_point(|profile| (profile.end as i64) <= start);

        let conflicting = time_table[first..]
            .iter()
            .take_while(|profile| (profile.start as i64) < end)
            .find(|profile| overflows(profile, task, capacity));

        match conflicting {
            Some(profile) => start = profile.start as i64 - task.duration as i64,
            None => return start,
        }

        if start < task.est as i64 {
            return start;
        }
    }
}

/// Converts a start time computed in `i64` back to a bound; out of range values are clamped,
/// which still empties the domain when they are applied.
pub(crate) fn to_bound(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::propagators::cumulative::create_time_table;

    fn task(est: i32, lst: i32, duration: i32, demand: i32) -> TaskBounds {
        TaskBounds {
            est,
            lst,
            ect: est + duration,
            duration,
            demand,
        }
    }

    #[test]
    fn task_is_pushed_past_a_full_profile() {
        let fixed = task(3, 3, 2, 1);
        let free = task(0, 5, 4, 1);
        let time_table = create_time_table(&[fixed, free]);

        assert_eq!(5, earliest_start(&time_table, &free, 1));
        assert_eq!(5, latest_start(&time_table, &free, 1));
    }

    #[test]
    fn own_compulsory_part_is_not_counted() {
        // Compulsory part [2, 3) of height 2 which fits a capacity of 2 on its own
        let only = task(0, 2, 3, 2);
        let time_table = create_time_table(&[only]);

        assert_eq!(0, earliest_start(&time_table, &only, 2));
        assert_eq!(2, latest_start(&time_table, &only, 2));
        assert!(check_overload(&time_table, 2).is_ok());
        assert!(check_overload(&time_table, 1).is_err());
    }

    #[test]
    fn no_feasible_start_exceeds_the_bounds() {
        let blocker = task(0, 0, 10, 1);
        let free = task(2, 4, 3, 1);
        let time_table = create_time_table(&[blocker, free]);

        assert!(earliest_start(&time_table, &free, 1) > 4);
        assert!(latest_start(&time_table, &free, 1) < 2);
        assert_eq!(2, max_height(&time_table));
    }
}
