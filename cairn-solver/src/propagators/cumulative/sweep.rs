use super::check_overload;
use super::create_time_table;
use super::earliest_start;
use super::latest_start;
use super::to_bound;
use super::CumulativeStatistics;
use super::Task;
use super::TaskBounds;
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
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

/// Time-table reasoning for tasks with fixed durations and demands and a fixed capacity.
///
/// Every round rebuilds the time-table from the compulsory parts, sweeps the start of every
/// unfixed task forward to the first position at which it fits, and its latest start backward to
/// the last such position. Rounds are repeated until no bound moves, since a tightened bound can
/// create a new compulsory part.
#[derive(Clone, Debug)]
pub struct DynamicSweepPropagator {
    tasks: Box<[Task]>,
    capacity: i32,
    statistics: CumulativeStatistics,
}

impl DynamicSweepPropagator {
    pub fn new(tasks: Box<[Task]>, capacity: i32) -> Self {
        DynamicSweepPropagator {
            tasks,
            capacity,
            statistics: CumulativeStatistics::default(),
        }
    }
}

impl Propagator for DynamicSweepPropagator {
    fn name(&self) -> &str {
        "CumulativeDynamicSweep"
    }

    fn priority(&self) -> Priority {
        Priority::Low
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext,
    ) -> PropagationStatus {
        for (index, task) in self.tasks.iter().enumerate() {
            let _ = context.register(task.start, DomainEvents::BOUNDS, LocalId::from(index as u32));
        }

        Ok(())
    }

    fn propagate(&mut self, mut context: PropagationContextMut) -> PropagationStatus {
        let capacity = self.capacity as i64;

        loop {
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
        // Only consulted after a successful propagation, which checked the time-table
        if self.tasks.iter().all(|task| context.is_fixed(&task.start)) {
            Entailment::Satisfied
        } else {
            Entailment::Undetermined
        }
    }

    fn log_statistics(&self, statistic_logger: StatisticLogger) {
        self.statistics.log(statistic_logger);
    }
}
