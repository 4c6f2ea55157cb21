use log::debug;

use super::check_variables_exist;
use super::equals;
use super::Constraint;
use crate::basic_types::InvalidModel;
use crate::propagators::cumulative::DynamicSweepPropagator;
use crate::propagators::cumulative::GreedyCumulativePropagator;
use crate::propagators::cumulative::Task;
use crate::propagators::cumulative::TimeTablePropagator;
use crate::propagators::cumulative::VariableTask;
use crate::propagators::cumulative::GREEDY_TASK_THRESHOLD;
use crate::propagators::CumulativeFiltering;
use crate::variables::DomainId;
use crate::variables::TransformableVariable;
use crate::ConstraintOperationError;
use crate::Solver;

/// Creates the [Cumulative](https://sofdem.github.io/gccat/gccat/Ccumulative.html) [`Constraint`].
///
/// This constraint ensures that at no point in time, the cumulative resource usage of the tasks
/// exceeds `capacity`. Task `i` starts at `starts[i]`, executes for `durations[i]` time units and
/// uses `demands[i]` units of the resource while it executes. A task is said to execute at time
/// point *t* if it holds that `start <= t < start + duration`.
///
/// The three arrays should have the same length, and no duration or demand may be negative;
/// otherwise posting reports an [`InvalidModel`].
///
/// When every duration, demand and the capacity are fixed the constraint is enforced by a single
/// time-table propagator; otherwise an auxiliary end variable is created for each task whose
/// duration is not fixed and the constraint is decomposed. See
/// [`crate::propagators::cumulative`] for the filtering algorithms and an example.
pub fn cumulative(
    starts: impl IntoIterator<Item = DomainId>,
    durations: impl IntoIterator<Item = DomainId>,
    demands: impl IntoIterator<Item = DomainId>,
    capacity: DomainId,
) -> Cumulative {
    Cumulative {
        starts: starts.into_iter().collect(),
        durations: durations.into_iter().collect(),
        demands: demands.into_iter().collect(),
        capacity,
    }
}

/// The [`Constraint`] created by [`cumulative`].
#[derive(Clone, Debug)]
pub struct Cumulative {
    starts: Vec<DomainId>,
    durations: Vec<DomainId>,
    demands: Vec<DomainId>,
    capacity: DomainId,
}

impl Cumulative {
    /// Posts the constraint and returns the filtering algorithm which enforces it.
    pub fn post_with_filtering(
        self,
        solver: &mut Solver,
    ) -> Result<CumulativeFiltering, ConstraintOperationError> {
        self.validate(solver)?;

        let mut decompose = solver.get_assigned_integer_value(&self.capacity).is_none();
        let mut tasks = Vec::with_capacity(self.starts.len());

        for ((&start, &duration), &demand) in self
            .starts
            .iter()
            .zip(self.durations.iter())
            .zip(self.demands.iter())
        {
            let end = match solver.get_assigned_integer_value(&duration) {
                Some(duration) => start.offset(duration),
                None => {
                    decompose = true;

                    let lower_bound = solver
                        .lower_bound(&start)
                        .saturating_add(solver.lower_bound(&duration));
                    let upper_bound = solver
                        .upper_bound(&start)
                        .saturating_add(solver.upper_bound(&duration));
                    let name = format!(
                        "{}_{}",
                        display_name(solver, start),
                        display_name(solver, duration)
                    );
                    let end = solver.new_named_bounded_integer(lower_bound, upper_bound, name);
                    equals([start.scaled(1), duration.scaled(1), end.scaled(-1)], 0)
                        .post(solver)?;

                    end.scaled(1)
                }
            };

            if solver.get_assigned_integer_value(&demand).is_none() {
                decompose = true;
            }

            tasks.push(VariableTask {
                start,
                duration,
                end,
                demand,
            });
        }

        let filtering = if decompose {
            TimeTablePropagator::new(tasks.into(), self.capacity).post(solver)?;
            CumulativeFiltering::TimeTable
        } else {
            let capacity = solver.lower_bound(&self.capacity);
            let tasks = tasks
                .into_iter()
                .map(|task| Task {
                    start: task.start,
                    end: task.end,
                    duration: solver.lower_bound(&task.duration),
                    demand: solver.lower_bound(&task.demand),
                })
                .collect::<Box<[_]>>();

            if tasks.len() > GREEDY_TASK_THRESHOLD {
                GreedyCumulativePropagator::new(tasks, capacity).post(solver)?;
                CumulativeFiltering::Greedy
            } else {
                DynamicSweepPropagator::new(tasks, capacity).post(solver)?;
                CumulativeFiltering::DynamicSweep
            }
        };

        debug!(
            "posted a cumulative over {} tasks with {filtering} filtering",
            self.starts.len()
        );

        Ok(filtering)
    }

    fn validate(&self, solver: &Solver) -> Result<(), InvalidModel> {
        for other in [&self.durations, &self.demands] {
            if other.len() != self.starts.len() {
                return Err(InvalidModel::MismatchedLengths {
                    constraint: "cumulative",
                    expected: self.starts.len(),
                    actual: other.len(),
                });
            }
        }

        check_variables_exist(
            solver,
            self.starts
                .iter()
                .chain(self.durations.iter())
                .chain(self.demands.iter())
                .chain(std::iter::once(&self.capacity))
                .copied(),
        )?;

        for (task, (duration, demand)) in self.durations.iter().zip(&self.demands).enumerate() {
            if solver.lower_bound(duration) < 0 {
                return Err(InvalidModel::NegativeDuration { task });
            }
            if solver.lower_bound(demand) < 0 {
                return Err(InvalidModel::NegativeDemand { task });
            }
        }

        Ok(())
    }
}

/// The name the variable was created with, or its id if it has none.
fn display_name(solver: &Solver, variable: DomainId) -> String {
    solver
        .variable_name(variable)
        .map_or_else(|| variable.to_string(), str::to_owned)
}

impl Constraint for Cumulative {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        self.post_with_filtering(solver).map(|_| ())
    }
}
