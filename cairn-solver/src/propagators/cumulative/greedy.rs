use super::check_overload;
use super::create_time_table;
use super::earliest_start;
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

/// Cheap time-table reasoning for very large sets of tasks with fixed durations and demands and a
/// fixed capacity.
///
/// The time-table is built once per invocation; it is checked for an overload and the earliest
/// start of every unfixed task is raised to the first position at which it fits. Latest starts are
/// not filtered and the propagator does not iterate to a fixpoint, so it is weaker than
/// [`super::DynamicSweepPropagator`].
#[derive(Clone, Debug)]
pub struct GreedyCumulativePropagator {
    tasks: Box<[Task]>,
    capacity: i32,
    statistics: CumulativeStatistics,
}

impl GreedyCumulativePropagator {
    pub fn new(tasks: Box<[Task]>, capacity: i32) -> Self {
        GreedyCumulativePropagator {
            tasks,
            capacity,
            statistics: CumulativeStatistics::default(),
        }
    }
}

impl Propagator for GreedyCumulativePropagator {
    fn name(&self) -> &str {
        "CumulativeGreedy"
    }

    fn priority(&self) -> Priority {
        Priority::VeryLow
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

        for (task, task_bounds) in self.tasks.iter().zip(&bounds) {
            if task_bounds.is_fixed() {
                continue;
            }

            let est = earliest_start(&time_table, task_bounds, capacity);
            if est > task_bounds.est as i64 {
                context.set_lower_bound(&task.start, to_bound(est))?;
                self.statistics.num_bound_updates += 1;
            }
        }

        Ok(())
    }

    fn is_entailed(&self, context: PropagationContext) -> Entailment {
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
