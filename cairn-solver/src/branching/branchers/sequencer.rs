//! A [`Brancher`] which sequentially applies a list of [`Brancher`]s until all of them can not find
//! another decision.
//!
//! Note that this structure should be used if you want to use dynamic [`Brancher`]s but
//! require a [`Sized`] object (e.g. when a function takes as input `impl Brancher`).
use std::fmt::Debug;

use crate::branching::Brancher;
use crate::branching::SelectionContext;
use crate::engine::search::Decision;
use crate::engine::variables::DomainId;
use crate::statistics::StatisticLogger;

/// An implementation of a [`Brancher`] which takes a [`Vec`] of `Box<dyn Brancher>` and
/// sequentially applies [`Brancher::next_decision`] until all of them return [`None`].
///
/// For any other method in [`Brancher`] it will simply pass it along to all of the provided
/// `Box<dyn Brancher>`s.
///
/// # Note
/// It is important that the methods [`Sequencer::on_conflict`], [`Sequencer::on_backtrack`] and
/// [`Sequencer::on_solution`] are called at the appropriate times as these methods ensure that the
/// index to the current brancher to try is reset. If these methods are not called at the
/// appropriate time then it will (likely) lead to incomplete solutions being returned!
pub struct Sequencer {
    branchers: Vec<Box<dyn Brancher>>,
    brancher_index: usize,
}

impl Debug for Sequencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sequencer")
            .field("brancher_index", &self.brancher_index)
            .finish()
    }
}

impl Sequencer {
    /// Creates a new [`Sequencer`] with the provided `branchers`. It will attempt to use the
    /// `branchers` in the order in which they were provided.
    pub fn new(branchers: Vec<Box<dyn Brancher>>) -> Self {
        Self {
            branchers,
            brancher_index: 0,
        }
    }

    pub fn add_brancher(&mut self, brancher: Box<dyn Brancher>) {
        self.branchers.push(brancher)
    }
}

impl Brancher for Sequencer {
    fn next_decision(&mut self, context: &mut SelectionContext) -> Option<Decision> {
        loop {
            if self.brancher_index >= self.branchers.len() {
                return None;
            }
            if let Some(decision) = self.branchers[self.brancher_index].next_decision(context) {
                return Some(decision);
            } else {
                // Check whether the next brancher can make a decision
                self.brancher_index += 1;
            }
        }
    }

    fn compute_decision(
        &mut self,
        context: &mut SelectionContext,
        variable: DomainId,
    ) -> Option<Decision> {
        self.branchers
            .iter_mut()
            .find_map(|brancher| brancher.compute_decision(context, variable))
    }

    fn log_statistics(&self, statistic_logger: StatisticLogger) {
        self.branchers
            .iter()
            .enumerate()
            .for_each(move |(index, brancher)| {
                brancher.log_statistics(statistic_logger.attach_to_prefix(index))
            })
    }

    fn on_conflict(&mut self, context: &mut SelectionContext, last_decision: Option<Decision>) {
        // A conflict has occurred, we do not know which brancher now can select a variable, reset
        // to the first one
        self.brancher_index = 0;
        self.branchers
            .iter_mut()
            .for_each(|brancher| brancher.on_conflict(context, last_decision));
    }

    fn on_backtrack(&mut self) {
        // Variables of earlier branchers may have been unfixed
        self.brancher_index = 0;
        self.branchers
            .iter_mut()
            .for_each(|brancher| brancher.on_backtrack());
    }

    fn on_solution(&mut self) {
        self.brancher_index = 0;
        self.branchers
            .iter_mut()
            .for_each(|brancher| brancher.on_solution());
    }

    fn on_restart(&mut self) {
        self.brancher_index = 0;
        self.branchers
            .iter_mut()
            .for_each(|brancher| brancher.on_restart());
    }

    fn should_restart(&mut self) -> bool {
        // Every brancher is asked so that none of them misses the conflict
        self.branchers
            .iter_mut()
            .fold(false, |restart, brancher| brancher.should_restart() || restart)
    }
}
