use crate::basic_types::PropagationStatus;
use crate::engine::cp::domain_events::DomainEvents;
use crate::engine::cp::propagation::Entailment;
use crate::engine::cp::propagation::LocalId;
use crate::engine::cp::propagation::PropagationContext;
use crate::engine::cp::propagation::PropagationContextMut;
use crate::engine::cp::propagation::Priority;
use crate::engine::cp::propagation::Propagator;
use crate::engine::cp::propagation::PropagatorInitialisationContext;
use crate::engine::cp::propagation::ReadDomains;
use crate::engine::variables::DomainId;
use crate::propagators::cumulative::check_overload;
use crate::propagators::cumulative::create_time_table;
use crate::propagators::cumulative::earliest_start;
use crate::propagators::cumulative::latest_start;
use crate::propagators::cumulative::max_height;
use crate::propagators::cumulative::to_bound;
use crate::propagators::cumulative::CumulativeStatistics;
use crate::propagators::cumulative::TaskBounds;
use crate::propagators::cumulative::VariableTask;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

/// [`Propagator`] which uses time-table reasoning for the cumulative constraint over tasks of which
/// the duration and demand, as well as the capacity, are variables.
///
/// The local ids of the variables are laid out as follows for `n` tasks: the starts are `0..n`,
/// the durations `n..2n`, the demands `2n..3n`, the ends `3n..4n`, and the capacity is `4n`.
#[derive(Clone, Debug)]
pub struct TimeTablePropagator {
    tasks: Box<[VariableTask]>,
    capacity: DomainId,
    statistics: CumulativeStatistics,
}

impl TimeTablePropagator {
    pub fn new(tasks: Box<[VariableTask]>, capacity: DomainId) -> Self {
        TimeTablePropagator {
            tasks,
            capacity,
            statistics: CumulativeStatistics::default(),
        }
    }
}

impl Propagator for TimeTablePropagator {
    fn name(&self) -> &str {
        "CumulativeTimeTable"
    }

    fn priority(&self) -> Priority {
        Priority::Low
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext,
    ) -> PropagationStatus {
        let n = self.tasks.len() as u32;

        for (index, task) in self.tasks.iter().enumerate() {
            let index = index as u32;
            let _ = context.register(task.start, DomainEvents::BOUNDS, LocalId::from(index));
            let _ = context.register(
                task.duration,
                DomainEvents::LOWER_BOUND,
                LocalId::from(n + index),
            );
            let _ = context.register(
                task.demand,
                DomainEvents::LOWER_BOUND,
                LocalId::from(2 * n + index),
            );
            let _ = context.register(
                task.end,
                DomainEvents::LOWER_BOUND,
                LocalId::from(3 * n + index),
            );
        }
        let _ = context.register(
            self.capacity,
            DomainEvents::UPPER_BOUND,
            LocalId::from(4 * n),
        );

        Ok(())
    }

    fn propagate(&mut self, mut context: PropagationContextMut) -> PropagationStatus {
        loop {
            let capacity = context.upper_bound(&self.capacity) as i64;
            let bounds = self
                .tasks
                .iter()
                .map(|task| task.bounds(&context))
                .collect::<Vec<TaskBounds>>();
            let time_table = create_time_table(&bounds);
            self.statistics.num_time_tables += 1;

            if let Err(inconsistency) = check_overload(&time_table, capacity) {
                self.statistics.num_overloads += 1;
                return Err(inconsistency);
            }
            context.set_lower_bound(&self.capacity, to_bound(max_height(&time_table)))?;

            let mut changed = false;
            for (task, task_bounds) in self.tasks.iter().zip(&bounds) {
                if task_bounds.is_fixed() {
                    continue;
                }

                let est = earliest_start(&time_table, task_bounds, capacity);
                if est > task_bounds.est as i64 {
                    context.set_lower_bound(&task.start, to_bound(est))?;
                    self.statistics.num_bound_updates += 1;
                    changed = true;
                }

                let lst = latest_start(&time_table, task_bounds, capacity);
                if lst < task_bounds.lst as i64 {
                    context.set_upper_bound(&task.start, to_bound(lst))?;
                    self.statistics.num_bound_updates += 1;
                    changed = true;
                }
            }

            if !changed {
                return Ok(());
            }
        }
    }

    fn is_entailed(&self, context: PropagationContext) -> Entailment {
        let all_fixed = context.is_fixed(&self.capacity)
            && self.tasks.iter().all(|task| {
                context.is_fixed(&task.start)
                    && context.is_fixed(&task.duration)
                    && context.is_fixed(&task.demand)
            });

        if all_fixed {
            Entailment::Satisfied
        } else {
            Entailment::Undetermined
        }
    }

    fn log_statistics(&self, statistic_logger: StatisticLogger) {
        self.statistics.log(statistic_logger);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::cp::test_solver::TestSolver;
    use crate::engine::variables::TransformableVariable;

    #[test]
    fn capacity_is_raised_to_the_height_of_the_time_table() {
        let mut solver = TestSolver::default();
        let start = solver.new_variable(0, 0);
        let duration = solver.new_variable(2, 2);
        let demand = solver.new_variable(3, 5);
        let capacity = solver.new_variable(0, 10);

        let _ = solver
            .new_propagator(TimeTablePropagator::new(
                [VariableTask {
                    start,
                    duration,
                    end: start.offset(2),
                    demand,
                }]
                .into(),
                capacity,
            ))
            .expect("no empty domains");

        solver.assert_bounds(capacity, 3, 10);

        solver.set_lower_bound(demand, 4).expect("non-empty domain");
        solver.propagate().expect("non-empty domains");
        solver.assert_bounds(capacity, 4, 10);
    }

    #[test]
    fn smallest_durations_and_demands_push_the_starts() {
        let mut solver = TestSolver::default();
        let s1 = solver.new_variable(2, 2);
        let d1 = solver.new_variable(3, 4);
        let e1 = solver.new_variable(5, 6);
        let s2 = solver.new_variable(0, 10);
        let d2 = solver.new_variable(2, 2);
        let demand = solver.new_variable(1, 1);
        let capacity = solver.new_variable(0, 1);

        let _ = solver
            .new_propagator(TimeTablePropagator::new(
                [
                    VariableTask {
                        start: s1,
                        duration: d1,
                        end: e1.scaled(1),
                        demand,
                    },
                    VariableTask {
                        start: s2,
                        duration: d2,
                        end: s2.offset(2),
                        demand,
                    },
                ]
                .into(),
                capacity,
            ))
            .expect("no empty domains");

        // Task 1 occupies at least [2, 5), so task 2 cannot start in [1, 4]
        solver.assert_bounds(capacity, 1, 1);
        solver.assert_bounds(s2, 0, 10);

        solver.set_lower_bound(s2, 1).expect("non-empty domain");
        solver.propagate().expect("non-empty domains");
        solver.assert_bounds(s2, 5, 10);
    }

    #[test]
    fn small_capacity_fails() {
        let mut solver = TestSolver::default();
        let start = solver.new_variable(0, 1);
        let duration = solver.new_variable(3, 3);
        let demand = solver.new_variable(2, 2);
        let capacity = solver.new_variable(0, 1);

        let result = solver.new_propagator(TimeTablePropagator::new(
            [VariableTask {
                start,
                duration,
                end: start.offset(3),
                demand,
            }]
            .into(),
            capacity,
        ));

        assert!(result.is_err());
    }
}
