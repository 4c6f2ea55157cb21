use super::Decision;

/// Hooks into the progress of the search.
///
/// Monitors observe the search; they cannot influence it.
pub trait SearchMonitor {
    /// A node is opened, before its propagation.
    fn on_open_node(&mut self, _depth: usize) {}

    /// A decision is taken and its left branch is entered.
    fn on_left_branch(&mut self, _decision: &Decision) {}

    /// A decision was refuted and its right branch is entered.
    fn on_right_branch(&mut self, _decision: &Decision) {}

    fn on_solution(&mut self) {}

    /// The search ended, either because the search space is exhausted or a limit was reached.
    fn on_close(&mut self) {}
}

/// A [`SearchMonitor`] which logs every hook at the trace level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TraceMonitor;

impl SearchMonitor for TraceMonitor {
    fn on_open_node(&mut self, depth: usize) {
        log::trace!("open node at depth {depth}");
    }

    fn on_left_branch(&mut self, decision: &Decision) {
        log::trace!("left branch: {decision}");
    }

    fn on_right_branch(&mut self, decision: &Decision) {
        log::trace!("right branch: {decision}");
    }

    fn on_solution(&mut self) {
        log::trace!("solution");
    }

    fn on_close(&mut self) {
        log::trace!("search closed");
    }
}
