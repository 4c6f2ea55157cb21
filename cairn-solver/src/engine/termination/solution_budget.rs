use super::ResourceLimitReached;
use super::TerminationCondition;

/// A [`TerminationCondition`] which triggers once the given number of solutions was found.
#[derive(Debug, Copy, Clone)]
pub struct SolutionBudget {
    budget: u64,
    num_solutions: u64,
}

impl SolutionBudget {
    pub fn new(budget: u64) -> Self {
        Self {
            budget,
            num_solutions: 0,
        }
    }
}

impl TerminationCondition for SolutionBudget {
    fn should_stop(&mut self) -> Option<ResourceLimitReached> {
        (self.num_solutions >= self.budget).then_some(ResourceLimitReached::Solutions(self.budget))
    }

    fn solution_found(&mut self) {
        self.num_solutions += 1;
    }
}
