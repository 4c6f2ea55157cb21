//! Contains the propagators for the [Cumulative](https://sofdem.github.io/gccat/gccat/Ccumulative.html)
//! constraint; all of them are based on time-table reasoning (see
//! [`crate::propagators::cumulative::time_table`] for an explanation).
//!
//! # Theoretical
//!
//! The cumulative constraint reasons over a set of [`Task`]s over a single resource
//! with a capacity. Each [`Task`] consists of the following parameters:
//! - A variable `s_i` representing the start time of the [`Task`]
//! - The duration of the [`Task`] `p_i` which cannot be interrupted
//! - The resource usage `r_i` of the [`Task`]
//!
//! Oftentimes the following notation is used to denote certain significant time points:
//! - `EST_i` - The earliest starting time, equal to `lb(s_i)`
//! - `ECT_i` - The earliest completion time, equal to `lb(s_i) + p_i`
//! - `LST_i` - The latest start time, equal to `ub(s_i)`
//! - `LCT_i` - The latest completion time, equal to `ub(s_i) + p_i`
//!
//! A [`Task`] is said to execute at time point *t* if it holds that `s_i <= t < s_i + p_i`. The
//! constraint then ensures that at no time point *t* there is an overflow of the resource capacity
//! by the cumulative resource usage of the [`Task`]s which are being processed at point *t*.
//!
//! # Practical
//!
//! Which propagator is used is decided when the constraint is posted, see
//! [`crate::constraints::cumulative`]:
//! - [`DynamicSweepPropagator`] when durations, demands and capacity are fixed;
//! - [`GreedyCumulativePropagator`] when they are fixed and there are more than
//!   [`GREEDY_TASK_THRESHOLD`] tasks;
//! - [`TimeTablePropagator`] otherwise, together with auxiliary end variables.
//!
//! ```rust
//! // We construct three tasks for a resource with capacity 2:
//! // - Task 0: Start times: [0, 4], Processing time: 5, Resource usage: 1
//! // - Task 1: Start times: [0, 4], Processing time: 2, Resource usage: 1
//! // - Task 2: Start times: [0, 5], Processing time: 5, Resource usage: 2
//! // Task 2 cannot execute at the same time as any other task
//! # use cairn_solver::termination::Indefinite;
//! # use cairn_solver::Solver;
//! # use cairn_solver::results::SatisfactionResult;
//! # use cairn_solver::constraints;
//! let mut solver = Solver::default();
//!
//! let starts = [
//!     solver.new_bounded_integer(0, 4),
//!     solver.new_bounded_integer(0, 4),
//!     solver.new_bounded_integer(0, 5),
//! ];
//! let durations = [5, 2, 5].map(|duration| solver.new_bounded_integer(duration, duration));
//! let demands = [1, 1, 2].map(|demand| solver.new_bounded_integer(demand, demand));
//! let capacity = solver.new_bounded_integer(2, 2);
//!
//! solver
//!     .add_constraint(constraints::cumulative(starts, durations, demands, capacity))
//!     .post()
//!     .expect("the model is feasible");
//!
//! let mut brancher = solver.default_brancher();
//! let result = solver.find_solution(&mut brancher, &mut Indefinite);
//!
//! // The solution satisfies the resource constraint at every time point
//! if let SatisfactionResult::Satisfiable(solution) = result {
//!     let horizon = 15;
//!     assert!((0..=horizon).all(|t| {
//!         let usage = starts
//!             .iter()
//!             .zip([5, 2, 5].iter().zip([1, 1, 2]))
//!             .filter(|(start, (duration, _))| {
//!                 let start = solution.get_integer_value(**start);
//!                 start <= t && t < start + **duration
//!             })
//!             .map(|(_, (_, demand))| demand)
//!             .sum::<i32>();
//!         usage <= 2
//!     }));
//! } else {
//!     panic!("the model is feasible")
//! }
//! ```
mod greedy;
mod options;
mod sweep;
mod task;
pub(crate) mod time_table;
mod utils;

pub use greedy::GreedyCumulativePropagator;
pub use options::CumulativeFiltering;
pub use options::GREEDY_TASK_THRESHOLD;
pub use sweep::DynamicSweepPropagator;
pub(crate) use task::TaskBounds;
pub use task::Task;
pub use task::VariableTask;
pub use time_table::TimeTablePropagator;
pub(crate) use utils::*;
