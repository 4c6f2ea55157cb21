pub(crate) mod constraint_satisfaction_solver;
pub(crate) mod cp;
pub(crate) mod search;
mod solver_statistics;
pub(crate) mod termination;
mod variable_names;
pub(crate) mod variables;

pub use constraint_satisfaction_solver::ConstraintSatisfactionSolver;
pub use constraint_satisfaction_solver::SatisfactionSolverOptions;
pub(crate) use cp::*;
pub use solver_statistics::SolverStatistics;
pub(crate) use variable_names::VariableNames;
