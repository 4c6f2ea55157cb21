//! Provides structures and traits to define the decision making procedure of the solver.
//!
//! In general, it provides 3 traits:
//! - The [`Brancher`] which defines how a branching procedure (which selects an unfixed variable
//!   and splits the domain in some way, see [`Decision`]) should operate; the main method of this
//!   trait is the [`Brancher::next_decision`] method.
//! - The [`VariableSelector`] which defines the method required of a variable selector (including
//!   the hooks into the solver); the main method of this trait is the
//!   [`VariableSelector::select_variable`] method.
//! - The [`ValueSelector`] which defines the method required of a value selector (including the
//!   hooks into the solver); the main method of this trait is the [`ValueSelector::select_value`]
//!   method.
//!
//! A [`Brancher`] is expected to be passed to [`Solver::find_solution`] and
//! [`Solver::find_all_solutions`]:
//! ```rust
//! # use cairn_solver::branching::branchers::IndependentVariableValueBrancher;
//! # use cairn_solver::branching::FirstFail;
//! # use cairn_solver::branching::InDomainMin;
//! # use cairn_solver::results::SatisfactionResult;
//! # use cairn_solver::termination::Indefinite;
//! # use cairn_solver::Solver;
//! let mut solver = Solver::default();
//!
//! let variables = vec![solver.new_bounded_integer(0, 10), solver.new_bounded_integer(5, 20)];
//!
//! let mut brancher =
//!     IndependentVariableValueBrancher::new(FirstFail::new(&variables), InDomainMin);
//! let result = solver.find_solution(&mut brancher, &mut Indefinite);
//! assert!(matches!(result, SatisfactionResult::Satisfiable(_)));
//! ```
//!
//! A composite brancher such as [`LastConflict`](branchers::LastConflict) or
//! [`Sequencer`](branchers::Sequencer) wraps other branchers and forwards the solver hooks to
//! them.
#[cfg(doc)]
use crate::engine::search::Decision;
#[cfg(doc)]
use crate::Solver;

mod brancher;
pub mod branchers;
mod selection_context;
pub mod tie_breaking;
pub mod value_selection;
pub mod variable_selection;

pub use brancher::Brancher;
pub use selection_context::SelectionContext;
pub use tie_breaking::*;
pub use value_selection::*;
pub use variable_selection::*;
