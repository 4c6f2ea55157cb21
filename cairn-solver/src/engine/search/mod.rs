//! The depth-first search which interleaves propagation with the decisions of a
//! [`Brancher`](crate::branching::Brancher).
mod decision;
mod decision_path;
mod search_loop;
mod search_monitor;

pub use decision::*;
pub(crate) use decision_path::DecisionPath;
pub(crate) use search_loop::*;
pub use search_monitor::*;
