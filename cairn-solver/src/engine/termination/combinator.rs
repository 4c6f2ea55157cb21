use super::ResourceLimitReached;
use super::TerminationCondition;

/// A [`TerminationCondition`] which triggers when one of two given [`TerminationCondition`]s
/// triggers.
#[derive(Clone, Copy, Debug)]
pub struct Combinator<T1, T2> {
    t1: T1,
    t2: T2,
}

impl<T1, T2> Combinator<T1, T2> {
    /// Combine two [`TerminationCondition`]s into one.
    pub fn new(t1: T1, t2: T2) -> Self {
        Combinator { t1, t2 }
    }
}

impl<T1: TerminationCondition, T2: TerminationCondition> TerminationCondition
    for Combinator<T1, T2>
{
    fn should_stop(&mut self) -> Option<ResourceLimitReached> {
        self.t1.should_stop().or_else(|| self.t2.should_stop())
    }

    fn node_opened(&mut self) {
        self.t1.node_opened();
        self.t2.node_opened();
    }

    fn solution_found(&mut self) {
        self.t1.solution_found();
        self.t2.solution_found();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::termination::node_budget::NodeBudget;
    use crate::engine::termination::solution_budget::SolutionBudget;

    #[test]
    fn the_first_exhausted_limit_is_reported() {
        let mut termination = Combinator::new(NodeBudget::new(2), SolutionBudget::new(1));
        assert_eq!(None, termination.should_stop());

        termination.solution_found();
        assert_eq!(
            Some(ResourceLimitReached::Solutions(1)),
            termination.should_stop()
        );

        termination.node_opened();
        termination.node_opened();
        assert_eq!(Some(ResourceLimitReached::Nodes(2)), termination.should_stop());
    }
}
