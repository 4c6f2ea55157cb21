use std::fmt::Display;

/// Above this number of tasks the [`CumulativeFiltering::Greedy`] algorithm is used instead of
/// [`CumulativeFiltering::DynamicSweep`].
pub const GREEDY_TASK_THRESHOLD: usize = 10_000;

/// The filtering algorithm which was selected when a cumulative constraint was posted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum CumulativeFiltering {
    /// Time-table reasoning over fixed durations, demands and capacity which sweeps the start
    /// bounds in both directions until nothing changes.
    #[default]
    DynamicSweep,
    /// A single pass which only raises the start lower bounds; used for very large instances.
    Greedy,
    /// The decomposition used when a duration, a demand or the capacity is not fixed.
    TimeTable,
}

impl Display for CumulativeFiltering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CumulativeFiltering::DynamicSweep => write!(f, "dynamic-sweep"),
            CumulativeFiltering::Greedy => write!(f, "greedy"),
            CumulativeFiltering::TimeTable => write!(f, "time-table"),
        }
    }
}
