use std::fmt::Display;

use log::debug;
use log::trace;

use super::DecisionPath;
use super::SearchMonitor;
use crate::basic_types::Random;
use crate::branching::Brancher;
use crate::cairn_assert_simple;
use crate::branching::SelectionContext;
use crate::engine::cp::Cause;
use crate::engine::cp::Contradiction;
use crate::engine::cp::Environment;
use crate::engine::cp::PropagationEngine;
use crate::engine::search::Branch;
use crate::engine::termination::ResourceLimitReached;
use crate::engine::termination::TerminationCondition;
use crate::engine::variables::AffineView;
use crate::engine::variables::DomainId;
use crate::engine::variables::IntegerVariable;
use crate::engine::SolverStatistics;

/// The phases the search moves through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SearchPhase {
    OpenNode,
    Propagate,
    Decision,
    Fail,
    Backtrack,
    Exhausted,
}

impl Display for SearchPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchPhase::OpenNode => write!(f, "open-node"),
            SearchPhase::Propagate => write!(f, "propagate"),
            SearchPhase::Decision => write!(f, "decision"),
            SearchPhase::Fail => write!(f, "fail"),
            SearchPhase::Backtrack => write!(f, "backtrack"),
            SearchPhase::Exhausted => write!(f, "exhausted"),
        }
    }
}

/// The reason [`SearchLoop::run`] returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SearchOutcome {
    /// Every variable is fixed and no propagator failed; the environment holds the solution.
    Solution,
    /// No search node is left. `complete` is false if a non-refutable decision was discarded,
    /// in which case part of the search space was never explored.
    Exhausted { complete: bool },
    /// The termination condition asked the search to stop.
    Stopped(ResourceLimitReached),
}

/// The state of the solver which the search operates on.
pub(crate) struct SearchResources<'a> {
    pub(crate) environment: &'a mut Environment,
    pub(crate) engine: &'a mut PropagationEngine,
    pub(crate) statistics: &'a mut SolverStatistics,
    pub(crate) random: &'a mut dyn Random,
    pub(crate) monitor: &'a mut dyn SearchMonitor,
    /// The variable which is minimised together with the best value found so far; every node has
    /// to improve on it.
    pub(crate) objective_cut: Option<(AffineView<DomainId>, i32)>,
}

/// A resumable depth-first search.
///
/// Every decision is applied in a fresh world, so the world index of the environment always equals
/// the length of the decision path. After a solution the search continues by backtracking from it;
/// after it was stopped it continues by opening the node at which it stopped.
#[derive(Debug)]
pub(crate) struct SearchLoop {
    phase: SearchPhase,
    path: DecisionPath,
    /// Whether a non-refutable decision was discarded.
    incomplete: bool,
    /// Whether a solution was reported since the last reset. From then on the search may not
    /// restart, since that would report the same solutions again.
    solution_reported: bool,
}

impl Default for SearchLoop {
    fn default() -> Self {
        SearchLoop {
            phase: SearchPhase::OpenNode,
            path: DecisionPath::default(),
            incomplete: false,
            solution_reported: false,
        }
    }
}

impl SearchLoop {
    pub(crate) fn depth(&self) -> usize {
        self.path.len()
    }

    /// Returns to the root, forgetting the decisions taken so far.
    pub(crate) fn reset(&mut self, environment: &mut Environment, engine: &mut PropagationEngine) {
        environment.pop_to_world(0);
        engine.synchronise(environment);
        self.path.clear();
        self.incomplete = false;
        self.solution_reported = false;
        self.transition(SearchPhase::OpenNode);
    }

    pub(crate) fn run(
        &mut self,
        resources: SearchResources<'_>,
        brancher: &mut impl Brancher,
        termination: &mut impl TerminationCondition,
    ) -> SearchOutcome {
        let SearchResources {
            environment,
            engine,
            statistics,
            random,
            monitor,
            objective_cut,
        } = resources;

        loop {
            match self.phase {
                SearchPhase::OpenNode => {
                    if let Some(limit) = termination.should_stop() {
                        debug!("search stopped: {limit}");
                        monitor.on_close();
                        return SearchOutcome::Stopped(limit);
                    }

                    termination.node_opened();
                    statistics.num_nodes += 1;
                    monitor.on_open_node(self.path.len());
                    self.transition(SearchPhase::Propagate);
                }

                SearchPhase::Propagate => {
                    let result = match objective_cut {
                        Some((objective, best)) => {
                            // The cut is undone when the search is reset
                            if environment.world_index() == 0 {
                                environment.push_world();
                            }
                            objective
                                .set_upper_bound(environment, best - 1, Cause::Model)
                                .map_err(Contradiction::without_propagator)
                                .and_then(|_| engine.propagate(environment, statistics))
                        }
                        None => engine.propagate(environment, statistics),
                    };

                    match result {
                        Ok(()) => self.transition(SearchPhase::Decision),
                        Err(contradiction) => {
                            trace!(
                                "contradiction at depth {}: {}",
                                self.path.len(),
                                contradiction.inconsistency
                            );
                            self.transition(SearchPhase::Fail);
                        }
                    }
                }

                SearchPhase::Decision => {
                    let mut context = SelectionContext::new(environment, engine, random);
                    let Some(decision) = brancher.next_decision(&mut context) else {
                        statistics.num_solutions += 1;
                        termination.solution_found();
                        brancher.on_solution();
                        monitor.on_solution();
                        self.solution_reported = true;
                        self.transition(SearchPhase::Backtrack);
                        return SearchOutcome::Solution;
                    };

                    statistics.num_decisions += 1;
                    environment.push_world();
                    let decision = self.path.push(decision);
                    monitor.on_left_branch(&decision);

                    match decision.apply(environment) {
                        Ok(_) => self.transition(SearchPhase::OpenNode),
                        Err(_) => self.transition(SearchPhase::Fail),
                    }
                }

                SearchPhase::Fail => {
                    statistics.num_fails += 1;

                    let last_decision = self.path.last().copied();
                    let mut context = SelectionContext::new(environment, engine, random);
                    brancher.on_conflict(&mut context, last_decision);

                    if !self.path.is_empty()
                        && brancher.should_restart()
                        && !self.solution_reported
                    {
                        debug!("restart after {} fails", statistics.num_fails);
                        environment.pop_to_world(0);
                        engine.synchronise(environment);
                        self.path.clear();
                        brancher.on_restart();
                        statistics.num_restarts += 1;
                        self.transition(SearchPhase::OpenNode);
                    } else {
                        self.transition(SearchPhase::Backtrack);
                    }
                }

                SearchPhase::Backtrack => {
                    let next_phase =
                        self.backtrack(environment, engine, statistics, brancher, monitor);
                    self.transition(next_phase);
                }

                SearchPhase::Exhausted => {
                    debug!("search space exhausted (complete: {})", !self.incomplete);
                    monitor.on_close();
                    return SearchOutcome::Exhausted {
                        complete: !self.incomplete,
                    };
                }
            }
        }
    }

    /// Undoes decisions until one can be refuted, and enters the refutation.
    fn backtrack(
        &mut self,
        environment: &mut Environment,
        engine: &mut PropagationEngine,
        statistics: &mut SolverStatistics,
        brancher: &mut impl Brancher,
        monitor: &mut dyn SearchMonitor,
    ) -> SearchPhase {
        while let Some(decision) = self.path.pop() {
            environment.pop_world();
            engine.synchronise(environment);
            brancher.on_backtrack();
            statistics.num_backtracks += 1;

            if decision.branch == Branch::Right {
                continue;
            }
            if !decision.refutable {
                self.incomplete = true;
                continue;
            }

            environment.push_world();
            let refutation = self.path.push(decision.refutation());
            monitor.on_right_branch(&refutation);

            return match refutation.apply(environment) {
                Ok(changed) => {
                    // Otherwise the right branch is the parent node again
                    cairn_assert_simple!(
                        changed,
                        "refuting '{decision}' did not change the domain of {}",
                        decision.variable
                    );
                    SearchPhase::OpenNode
                }
                Err(_) => SearchPhase::Fail,
            };
        }

        SearchPhase::Exhausted
    }

    fn transition(&mut self, phase: SearchPhase) {
        trace!("search: {} -> {phase}", self.phase);
        self.phase = phase;
    }
}
