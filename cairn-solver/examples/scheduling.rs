//! Schedules a small set of tasks on a single renewable resource such that the makespan (the time
//! at which the last task completes) is minimal.
//!
//! Usage: `RUST_LOG=debug cargo run --example scheduling`

use cairn_solver::constraints;
use cairn_solver::optimisation::OptimisationDirection;
use cairn_solver::results::OptimisationResult;
use cairn_solver::termination::TimeBudget;
use cairn_solver::variables::TransformableVariable;
use cairn_solver::Solver;

const CAPACITY: i32 = 3;
const HORIZON: i32 = 30;

/// (duration, demand) of every task.
const TASKS: [(i32, i32); 6] = [(3, 2), (2, 1), (4, 2), (2, 1), (3, 2), (5, 1)];

fn main() {
    env_logger::init();

    let mut solver = Solver::default();

    let starts = TASKS
        .iter()
        .enumerate()
        .map(|(index, (duration, _))| {
            solver.new_named_bounded_integer(0, HORIZON - duration, format!("start_{index}"))
        })
        .collect::<Vec<_>>();
    let durations = TASKS
        .iter()
        .map(|&(duration, _)| solver.new_bounded_integer(duration, duration))
        .collect::<Vec<_>>();
    let demands = TASKS
        .iter()
        .map(|&(_, demand)| solver.new_bounded_integer(demand, demand))
        .collect::<Vec<_>>();
    let capacity = solver.new_bounded_integer(CAPACITY, CAPACITY);
    let makespan = solver.new_named_bounded_integer(0, HORIZON, "makespan");

    let filtering = constraints::cumulative(starts.clone(), durations, demands, capacity)
        .post_with_filtering(&mut solver)
        .expect("the resource is large enough for every task");
    println!("Cumulative filtering: {filtering}");

    // Every task completes before the makespan: start + duration <= makespan
    for (start, (duration, _)) in starts.iter().zip(TASKS) {
        solver
            .add_constraint(constraints::less_than_or_equals(
                [start.scaled(1), makespan.scaled(-1)],
                -duration,
            ))
            .post()
            .expect("the horizon is large enough for every task");
    }

    let mut brancher = solver.default_brancher();
    let mut termination = TimeBudget::starting_now(std::time::Duration::from_secs(10));

    match solver.find_optimal_solution(
        &mut brancher,
        &mut termination,
        makespan,
        OptimisationDirection::Minimise,
    ) {
        OptimisationResult::Optimal(solution) | OptimisationResult::Satisfiable(solution) => {
            println!("Makespan: {}", solution.get_integer_value(makespan));

            for (index, (start, (duration, demand))) in starts.iter().zip(TASKS).enumerate() {
                let start = solution.get_integer_value(*start);
                println!(
                    "Task {index}: [{start}, {}) using {demand}",
                    start + duration
                );
            }
        }
        OptimisationResult::Unsatisfiable => println!("The tasks cannot be scheduled."),
        OptimisationResult::Unknown(cause) => println!("Unknown: {cause:?}"),
        OptimisationResult::InvalidModel(reason) => println!("Invalid model: {reason}"),
    }

    solver.log_statistics();
}
