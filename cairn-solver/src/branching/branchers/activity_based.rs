use log::debug;
use log::warn;

use crate::branching::value_selection::InDomainMin;
use crate::branching::value_selection::InDomainRandom;
use crate::branching::value_selection::ValueSelector;
use crate::branching::Brancher;
use crate::branching::SelectionContext;
use crate::create_statistics_struct;
use crate::engine::search::Decision;
use crate::engine::variables::DomainId;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

/// The factor by which the activity of an unfixed variable which was not reduced decays.
const GAMMA: f64 = 0.999;
/// The required relative precision of the estimated activities before sampling stops.
const DELTA: f64 = 0.2;
/// The quantile of the normal distribution for a 95% confidence interval.
const CONFIDENCE_QUANTILE: f64 = 1.96;
const DEFAULT_PROBE_LIMIT: u64 = 1000;

create_statistics_struct!(
    /// Statistics of the [`ActivityBased`] brancher.
    ActivityStatistics {
        /// The number of probes used to initialise the activities.
        num_probes: u64,
        /// Whether the sampling stopped because the estimates converged (1) or because the probe
        /// limit was reached (0).
        sampling_converged: u64,
});

/// A [`Brancher`] which selects the unfixed variable with the highest activity relative to the
/// size of its domain.
///
/// The activity of a variable is increased whenever its domain is reduced between two consecutive
/// decisions (including reductions made by a propagation which ended in a conflict), and decays
/// by a factor [`GAMMA`] otherwise.
///
/// Before the actual search, the activities are initialised by random probes: dives from the root
/// with random decisions which end at the first conflict, after which the brancher requests a
/// restart. Sampling stops once the 95% confidence interval of every estimated activity lies
/// within [`DELTA`] of its mean, once the probe limit is reached, or once a probe reaches a
/// solution.
#[derive(Debug)]
pub struct ActivityBased<ValueSelect = InDomainMin> {
    variables: Vec<DomainId>,
    value_selector: ValueSelect,
    activities: Vec<f64>,
    /// The domain sizes at the previous decision or conflict.
    previous_sizes: Option<Vec<u64>>,
    sampling: Option<Sampling>,
    restart_requested: bool,
    statistics: ActivityStatistics,
}

/// The state of the probing phase.
#[derive(Debug)]
struct Sampling {
    /// The activities gathered during the current probe.
    probe: Vec<f64>,
    sums: Vec<f64>,
    sums_of_squares: Vec<f64>,
    num_probes: u64,
    probe_limit: u64,
}

impl Sampling {
    fn new(num_variables: usize, probe_limit: u64) -> Sampling {
        Sampling {
            probe: vec![0.0; num_variables],
            sums: vec![0.0; num_variables],
            sums_of_squares: vec![0.0; num_variables],
            num_probes: 0,
            probe_limit,
        }
    }

    fn finish_probe(&mut self) {
        for (index, activity) in self.probe.iter_mut().enumerate() {
            self.sums[index] += *activity;
            self.sums_of_squares[index] += *activity * *activity;
            *activity = 0.0;
        }
        self.num_probes += 1;
    }

    fn means(&self) -> Vec<f64> {
        let num_probes = self.num_probes.max(1) as f64;
        self.sums.iter().map(|sum| sum / num_probes).collect()
    }

    fn has_converged(&self) -> bool {
        if self.num_probes < 2 {
            return false;
        }

        let num_probes = self.num_probes as f64;
        self.sums
            .iter()
            .zip(&self.sums_of_squares)
            .all(|(sum, sum_of_squares)| {
                let mean = sum / num_probes;
                let variance = (sum_of_squares / num_probes - mean * mean).max(0.0);
                let half_width = CONFIDENCE_QUANTILE * (variance / num_probes).sqrt();
                half_width <= DELTA * mean
            })
    }
}

impl ActivityBased<InDomainMin> {
    pub fn new(variables: &[DomainId]) -> Self {
        ActivityBased::with_value_selector(variables, InDomainMin)
    }
}

impl<ValueSelect: ValueSelector<DomainId>> ActivityBased<ValueSelect> {
    pub fn with_value_selector(variables: &[DomainId], value_selector: ValueSelect) -> Self {
        if variables.is_empty() {
            warn!("The ActivityBased brancher was not provided with any variables");
        }

        ActivityBased {
            variables: variables.to_vec(),
            value_selector,
            activities: vec![0.0; variables.len()],
            previous_sizes: None,
            sampling: Some(Sampling::new(variables.len(), DEFAULT_PROBE_LIMIT)),
            restart_requested: false,
            statistics: ActivityStatistics::default(),
        }
    }

    /// Sets the maximum number of probes used to initialise the activities.
    pub fn with_probe_limit(mut self, probe_limit: u64) -> Self {
        if let Some(sampling) = self.sampling.as_mut() {
            sampling.probe_limit = probe_limit.max(1);
        }
        self
    }

    /// Whether the activities are still being initialised.
    pub fn is_sampling(&self) -> bool {
        self.sampling.is_some()
    }

    /// The current activity of the variable at position `index`.
    pub fn activity(&self, index: usize) -> f64 {
        self.activities[index]
    }

    /// Rewards every variable whose domain was reduced since the previous update.
    fn update_activities(&mut self, context: &SelectionContext) {
        let sizes = self
            .variables
            .iter()
            .map(|&variable| context.size(variable))
            .collect::<Vec<_>>();

        if let Some(previous_sizes) = self.previous_sizes.as_ref() {
            for (index, (&size, &previous_size)) in sizes.iter().zip(previous_sizes).enumerate() {
                let reduced = size < previous_size;
                match self.sampling.as_mut() {
                    Some(sampling) => {
                        if reduced {
                            sampling.probe[index] += 1.0;
                        }
                    }
                    None => {
                        if reduced {
                            self.activities[index] += 1.0;
                        } else if size > 1 {
                            self.activities[index] *= GAMMA;
                        }
                    }
                }
            }
        }

        self.previous_sizes = Some(sizes);
    }

    fn random_decision(&mut self, context: &mut SelectionContext) -> Option<Decision> {
        let unfixed = self
            .variables
            .iter()
            .copied()
            .filter(|&variable| !context.is_integer_fixed(variable))
            .collect::<Vec<_>>();
        if unfixed.is_empty() {
            return None;
        }

        let variable = unfixed[context.random().generate_usize_in_range(0..unfixed.len())];
        Some(InDomainRandom.select_value(context, variable))
    }

    fn most_active_variable(&self, context: &SelectionContext) -> Option<DomainId> {
        let mut best: Option<(DomainId, f64)> = None;
        for (index, &variable) in self.variables.iter().enumerate() {
            if context.is_integer_fixed(variable) {
                continue;
            }

            let score = self.activities[index] / context.size(variable) as f64;
            match best {
                Some((_, best_score)) if best_score >= score => {}
                _ => best = Some((variable, score)),
            }
        }
        best.map(|(variable, _)| variable)
    }

    /// Ends the current probe. Unless `is_final`, another probe follows after a restart.
    fn end_probe(&mut self, is_final: bool) {
        let Some(sampling) = self.sampling.as_mut() else {
            return;
        };

        sampling.finish_probe();
        self.statistics.num_probes = sampling.num_probes;

        let converged = sampling.has_converged();
        self.restart_requested = !is_final;
        if is_final || converged || sampling.num_probes >= sampling.probe_limit {
            debug!(
                "Activities initialised after {} probes (converged: {converged})",
                sampling.num_probes
            );
            self.activities = sampling.means();
            self.statistics.sampling_converged = u64::from(converged);
            self.sampling = None;
        }
    }
}

impl<ValueSelect: ValueSelector<DomainId>> Brancher for ActivityBased<ValueSelect> {
    fn log_statistics(&self, statistic_logger: StatisticLogger) {
        self.statistics
            .log(statistic_logger.attach_to_prefix("ActivityBased"));
    }

    fn next_decision(&mut self, context: &mut SelectionContext) -> Option<Decision> {
        self.update_activities(context);

        if self.sampling.is_some() {
            return self.random_decision(context);
        }

        let variable = self.most_active_variable(context)?;
        Some(self.value_selector.select_value(context, variable))
    }

    fn compute_decision(
        &mut self,
        context: &mut SelectionContext,
        variable: DomainId,
    ) -> Option<Decision> {
        if context.is_integer_fixed(variable) {
            return None;
        }
        Some(self.value_selector.select_value(context, variable))
    }

    fn on_conflict(&mut self, context: &mut SelectionContext, _last_decision: Option<Decision>) {
        self.update_activities(context);
        self.end_probe(false);
    }

    fn on_solution(&mut self) {
        // The search continues from the solution, so a probe reaching it ends the sampling
        self.end_probe(true);
        self.value_selector.on_solution();
    }

    fn on_restart(&mut self) {
        self.previous_sizes = None;
    }

    fn should_restart(&mut self) -> bool {
        std::mem::take(&mut self.restart_requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::TestRandom;
    use crate::engine::cp::test_solver::TestSolver;

    #[test]
    fn sampling_restarts_after_every_dive() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 9);
        let y = solver.new_variable(0, 9);
        let mut brancher = ActivityBased::new(&[x, y]).with_probe_limit(3);
        let mut test_rng = TestRandom {
            usizes: vec![0],
            bools: vec![true],
            ..Default::default()
        };

        let decision = {
            let mut context = solver.selection_context(&mut test_rng);
            brancher.next_decision(&mut context)
        };
        assert_eq!(decision, Some(Decision::assign(x, 0)));

        let mut context = solver.selection_context(&mut test_rng);
        brancher.on_conflict(&mut context, decision);
        assert!(brancher.should_restart());
        assert!(!brancher.should_restart());
        assert!(brancher.is_sampling());
    }

    #[test]
    fn reduced_variables_are_preferred_after_sampling() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 9);
        let y = solver.new_variable(0, 9);
        let z = solver.new_sparse_variable(&[0, 1, 2, 3]);
        let mut brancher = ActivityBased::new(&[x, y, z]).with_probe_limit(1);
        let mut test_rng = TestRandom {
            usizes: vec![0],
            bools: vec![true],
            ..Default::default()
        };

        let decision = {
            let mut context = solver.selection_context(&mut test_rng);
            brancher.next_decision(&mut context)
        };
        assert_eq!(decision, Some(Decision::assign(x, 0)));

        solver.push_world();
        solver.set_upper_bound(y, 4).expect("non-empty");
        {
            let mut context = solver.selection_context(&mut test_rng);
            brancher.on_conflict(&mut context, decision);
        }
        assert!(!brancher.is_sampling());
        assert!(brancher.should_restart());
        assert_eq!(brancher.activity(1), 1.0);

        solver.pop_world();
        brancher.on_restart();

        let mut context = solver.selection_context(&mut test_rng);
        assert_eq!(
            brancher.next_decision(&mut context),
            Some(Decision::assign(y, 0))
        );
    }

    #[test]
    fn sampling_ends_without_a_restart_when_a_solution_is_found() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 9);
        let y = solver.new_variable(0, 9);
        let mut brancher = ActivityBased::new(&[x, y]);
        let mut test_rng = TestRandom {
            usizes: vec![1],
            bools: vec![false],
            ..Default::default()
        };

        {
            let mut context = solver.selection_context(&mut test_rng);
            let _ = brancher.next_decision(&mut context);
        }
        brancher.on_solution();

        assert!(!brancher.is_sampling());
        assert!(!brancher.should_restart());
    }

    #[test]
    fn activities_decay_when_not_reduced() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 9);
        let y = solver.new_variable(0, 9);
        let mut brancher = ActivityBased::new(&[x, y]).with_probe_limit(1);
        let mut test_rng = TestRandom {
            usizes: vec![0],
            bools: vec![true],
            ..Default::default()
        };

        let decision = {
            let mut context = solver.selection_context(&mut test_rng);
            brancher.next_decision(&mut context)
        };
        solver.push_world();
        solver.set_upper_bound(y, 4).expect("non-empty");
        solver.set_upper_bound(x, 4).expect("non-empty");
        {
            let mut context = solver.selection_context(&mut test_rng);
            brancher.on_conflict(&mut context, decision);
        }

        // Both variables have activity 1; only y is reduced afterwards
        solver.set_upper_bound(y, 2).expect("non-empty");
        let mut context = solver.selection_context(&mut test_rng);
        let _ = brancher.next_decision(&mut context);

        assert_eq!(brancher.activity(0), GAMMA);
        assert_eq!(brancher.activity(1), 2.0);
    }
}
