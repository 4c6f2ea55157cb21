use std::collections::VecDeque;

use crate::branching::Brancher;
use crate::branching::SelectionContext;
use crate::cairn_assert_simple;
use crate::engine::search::Decision;
use crate::engine::variables::DomainId;
use crate::statistics::StatisticLogger;

/// A [`Brancher`] which first branches on the variables whose decisions most recently led to a
/// conflict, and otherwise defers to the wrapped brancher.
///
/// The variables of the last `k` conflicting decisions are remembered; as long as one of them is
/// unfixed, the most recent one is branched on using [`Brancher::compute_decision`] of the wrapped
/// brancher.
#[derive(Debug)]
pub struct LastConflict<B> {
    brancher: B,
    capacity: usize,
    /// The conflicting variables, the most recent one at the back.
    conflicting_variables: VecDeque<DomainId>,
}

impl<B: Brancher> LastConflict<B> {
    /// Remembers the single most recent conflicting variable.
    pub fn new(brancher: B) -> Self {
        LastConflict::with_capacity(brancher, 1)
    }

    pub fn with_capacity(brancher: B, capacity: usize) -> Self {
        cairn_assert_simple!(capacity > 0, "at least one conflict should be remembered");
        LastConflict {
            brancher,
            capacity,
            conflicting_variables: VecDeque::with_capacity(capacity),
        }
    }

    fn remember(&mut self, variable: DomainId) {
        self.conflicting_variables.retain(|&other| other != variable);
        if self.conflicting_variables.len() == self.capacity {
            let _ = self.conflicting_variables.pop_front();
        }
        self.conflicting_variables.push_back(variable);
    }
}

impl<B: Brancher> Brancher for LastConflict<B> {
    fn log_statistics(&self, statistic_logger: StatisticLogger) {
        self.brancher.log_statistics(statistic_logger)
    }

    fn next_decision(&mut self, context: &mut SelectionContext) -> Option<Decision> {
        for index in (0..self.conflicting_variables.len()).rev() {
            let variable = self.conflicting_variables[index];
            if context.is_integer_fixed(variable) {
                continue;
            }
            if let Some(decision) = self.brancher.compute_decision(context, variable) {
                return Some(decision);
            }
        }

        self.brancher.next_decision(context)
    }

    fn compute_decision(
        &mut self,
        context: &mut SelectionContext,
        variable: DomainId,
    ) -> Option<Decision> {
        self.brancher.compute_decision(context, variable)
    }

    fn on_conflict(&mut self, context: &mut SelectionContext, last_decision: Option<Decision>) {
        if let Some(decision) = last_decision {
            self.remember(decision.variable);
        }
        self.brancher.on_conflict(context, last_decision);
    }

    fn on_backtrack(&mut self) {
        self.brancher.on_backtrack()
    }

    fn on_solution(&mut self) {
        self.brancher.on_solution()
    }

    fn on_restart(&mut self) {
        self.brancher.on_restart()
    }

    fn should_restart(&mut self) -> bool {
        self.brancher.should_restart()
    }
}
