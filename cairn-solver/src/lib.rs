//! # Cairn
//! Cairn is a finite-domain constraint programming solver. Variables have integer domains, which
//! are either intervals or explicit sets of values; propagators remove the values which cannot
//! be part of a solution, and a depth-first search with backtracking over a trail of domain
//! changes explores the remaining space.
//!
//! The solver currently supports integer variables and a number of (global) constraints:
//! * [Cumulative global constraint][crate::constraints::cumulative].
//! * [All-different][crate::constraints::all_different].
//! * Arithmetic constraints: [linear integer (in)equalities][crate::constraints::less_than_or_equals]
//!   and [disequalities][crate::constraints::not_equals].
//!
//! Search strategies are assembled from the building blocks in [`branching`].
//!
//!  # Using Cairn
//! The first step to solving a problem is **adding variables**:
//! ```rust
//! # use cairn_solver::Solver;
//! // We create the solver with default options
//! let mut solver = Solver::default();
//!
//! // We create 3 variables
//! let x = solver.new_bounded_integer(5, 10);
//! let y = solver.new_bounded_integer(-3, 15);
//! let z = solver.new_bounded_integer(7, 25);
//! ```
//!
//! Then we can **add constraints** supported by the [`Solver`]:
//! ```rust
//! # use cairn_solver::Solver;
//! # use cairn_solver::constraints;
//! # let mut solver = Solver::default();
//! # let x = solver.new_bounded_integer(5, 10);
//! # let y = solver.new_bounded_integer(-3, 15);
//! # let z = solver.new_bounded_integer(7, 25);
//! // We create the constraint:
//! // x + y + z = 17
//! solver
//!     .add_constraint(constraints::equals(vec![x, y, z], 17))
//!     .post()
//!     .expect("the constraint is consistent at the root");
//! ```
//!
//! For finding a solution, a [`termination::TerminationCondition`] and a [`branching::Brancher`]
//! should be specified, which determine when the solver should stop searching and the
//! variable/value selection strategy which should be used:
//! ```rust
//! # use cairn_solver::Solver;
//! # use cairn_solver::termination::Indefinite;
//! # let mut solver = Solver::default();
//! // We create a termination condition which allows the solver to run indefinitely
//! let mut termination = Indefinite;
//! // And we create a search strategy (in this case, simply the default)
//! let mut brancher = solver.default_brancher();
//! ```
//!
//! **Finding a solution** to this problem can be done by using [`Solver::find_solution`]:
//! ```rust
//! # use cairn_solver::Solver;
//! # use cairn_solver::results::SatisfactionResult;
//! # use cairn_solver::termination::Indefinite;
//! # use cairn_solver::constraints;
//! # let mut solver = Solver::default();
//! # let x = solver.new_bounded_integer(5, 10);
//! # let y = solver.new_bounded_integer(-3, 15);
//! # let z = solver.new_bounded_integer(7, 25);
//! # solver.add_constraint(constraints::equals(vec![x, y, z], 17)).post().unwrap();
//! # let mut termination = Indefinite;
//! # let mut brancher = solver.default_brancher();
//! // Then we find a solution to the problem
//! let result = solver.find_solution(&mut brancher, &mut termination);
//!
//! if let SatisfactionResult::Satisfiable(solution) = result {
//!     let value_x = solution.get_integer_value(x);
//!     let value_y = solution.get_integer_value(y);
//!     let value_z = solution.get_integer_value(z);
//!
//!     // The constraint should hold for this solution
//!     assert!(value_x + value_y + value_z == 17);
//! } else {
//!     panic!("This problem should have a solution")
//! }
//! ```
//!
//! **Optimizing an objective** can be done in a similar way using
//! [`Solver::find_optimal_solution`]; first the objective variable and a constraint over this
//! value are added, then the solver searches for the best solution with branch and bound:
//!
//! ```rust
//! # use cairn_solver::Solver;
//! # use cairn_solver::constraints;
//! # use cairn_solver::optimisation::OptimisationDirection;
//! # use cairn_solver::results::OptimisationResult;
//! # use cairn_solver::termination::Indefinite;
//! # use cairn_solver::variables::TransformableVariable;
//! # let mut solver = Solver::default();
//! # let x = solver.new_bounded_integer(5, 10);
//! # let y = solver.new_bounded_integer(-3, 15);
//! # let z = solver.new_bounded_integer(7, 25);
//! # solver.add_constraint(constraints::equals(vec![x, y, z], 17)).post().unwrap();
//! // We add another variable, the objective
//! let objective = solver.new_bounded_integer(-10, 30);
//!
//! // We add a constraint which specifies the value of the objective: objective = x - y
//! solver
//!     .add_constraint(constraints::equals(
//!         vec![x.scaled(1), y.scaled(-1), objective.scaled(-1)],
//!         0,
//!     ))
//!     .post()
//!     .expect("the constraint is consistent at the root");
//!
//! let mut termination = Indefinite;
//! let mut brancher = solver.default_brancher();
//! let result = solver.find_optimal_solution(
//!     &mut brancher,
//!     &mut termination,
//!     objective,
//!     OptimisationDirection::Maximise,
//! );
//!
//! if let OptimisationResult::Optimal(optimal_solution) = result {
//!     // x = 10, y = -3, z = 10
//!     assert_eq!(optimal_solution.get_integer_value(objective), 13);
//! } else {
//!     panic!("This problem should have an optimal solution")
//! }
//! ```
//!
//! # Obtaining multiple solutions
//! Cairn supports enumerating all solutions of a satisfaction problem through
//! [`Solver::find_all_solutions`]; the search is resumed after every solution, so no solution is
//! reported twice.
//! ```rust
//! # use cairn_solver::Solver;
//! # use cairn_solver::termination::Indefinite;
//! # use cairn_solver::results::solution_iterator::IteratedSolution;
//! # use cairn_solver::constraints;
//! // We create the solver with default options
//! let mut solver = Solver::default();
//!
//! // We create 3 variables with domains within the range [0, 2]
//! let x = solver.new_bounded_integer(0, 2);
//! let y = solver.new_bounded_integer(0, 2);
//! let z = solver.new_bounded_integer(0, 2);
//!
//! // We create the all-different constraint
//! solver
//!     .add_constraint(constraints::all_different(vec![x, y, z]))
//!     .post()
//!     .expect("the constraint is consistent at the root");
//!
//! let mut termination = Indefinite;
//! let mut brancher = solver.default_brancher();
//!
//! let mut solution_iterator = solver.find_all_solutions(&mut brancher, &mut termination);
//!
//! let mut number_of_solutions = 0;
//! loop {
//!     match solution_iterator.next_solution() {
//!         IteratedSolution::Solution(solution) => {
//!             number_of_solutions += 1;
//!             let value_x = solution.get_integer_value(x);
//!             let value_y = solution.get_integer_value(y);
//!             let value_z = solution.get_integer_value(z);
//!             assert!(value_x != value_y && value_x != value_z && value_y != value_z);
//!         }
//!         IteratedSolution::Finished => break,
//!         other => panic!("Unexpected outcome {other:?}"),
//!     }
//! }
//!
//! // There are six possible solutions to this problem
//! assert_eq!(number_of_solutions, 6)
//! ```
//!
//! ## Feature Flags
//! - `debug-checks`: Enable expensive assertions in the solver. Turning this on slows down the
//!   solver by several orders of magnitude, so it is turned off by default.
//! - `clap`: Derive [`clap::ValueEnum`](https://docs.rs/clap) for the enumerated options.
pub(crate) mod basic_types;
pub mod branching;
pub mod constraints;
pub mod containers;
pub(crate) mod engine;
pub mod graphs;
pub mod optimisation;
pub mod propagators;
pub mod statistics;

#[doc(hidden)]
pub mod asserts;

pub use convert_case;
pub use rand;

mod api;

pub use api::*;

pub use crate::api::solver::DefaultBrancher;
pub use crate::api::solver::Solver;
pub use crate::basic_types::ConstraintOperationError;
pub use crate::basic_types::InvalidModel;
pub use crate::basic_types::Random;
pub use crate::engine::SolverStatistics;
