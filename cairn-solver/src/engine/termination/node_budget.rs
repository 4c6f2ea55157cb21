use super::ResourceLimitReached;
use super::TerminationCondition;

/// A [`TerminationCondition`] which triggers once the search opened the given number of nodes.
#[derive(Debug, Copy, Clone)]
pub struct NodeBudget {
    budget: u64,
    num_nodes: u64,
}

impl NodeBudget {
    pub fn new(budget: u64) -> Self {
        Self {
            budget,
            num_nodes: 0,
        }
    }
}

impl TerminationCondition for NodeBudget {
    fn should_stop(&mut self) -> Option<ResourceLimitReached> {
        (self.num_nodes >= self.budget).then_some(ResourceLimitReached::Nodes(self.budget))
    }

    fn node_opened(&mut self) {
        self.num_nodes += 1;
    }
}
