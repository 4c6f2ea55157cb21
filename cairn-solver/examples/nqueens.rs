//! Places `n` queens on an `n x n` board such that no two queens attack each other.
//!
//! Usage: `cargo run --example nqueens -- <n>`

use cairn_solver::constraints;
use cairn_solver::results::SatisfactionResult;
use cairn_solver::termination::Indefinite;
use cairn_solver::variables::TransformableVariable;
use cairn_solver::Solver;

fn main() {
    env_logger::init();

    let n = std::env::args()
        .nth(1)
        .expect("Please provide a value for 'n'")
        .parse::<u32>()
        .expect("'n' is not a valid unsigned integer");

    if n < 2 {
        println!("Please provide an 'n > 1'");
        return;
    }

    let mut solver = Solver::default();
    let variables = (0..n)
        .map(|_| solver.new_enumerated_integer(0, n as i32 - 1))
        .collect::<Vec<_>>();

    let diag1 = variables
        .iter()
        .enumerate()
        .map(|(i, var)| var.offset(i as i32))
        .collect::<Vec<_>>();
    let diag2 = variables
        .iter()
        .enumerate()
        .map(|(i, var)| var.offset(-(i as i32)))
        .collect::<Vec<_>>();

    let columns = variables
        .iter()
        .map(|var| var.scaled(1))
        .collect::<Vec<_>>();

    for constraint in [
        constraints::all_different(columns),
        constraints::all_different(diag1),
        constraints::all_different(diag2),
    ] {
        if solver.add_constraint(constraint).post().is_err() {
            println!("{n}-queens is unsatisfiable.");
            return;
        }
    }

    let mut brancher = solver.default_brancher();
    match solver.find_solution(&mut brancher, &mut Indefinite) {
        SatisfactionResult::Satisfiable(solution) => {
            let row_separator = format!("{}+", "+---".repeat(n as usize));

            for variable in variables.iter() {
                println!("{row_separator}");

                let queen_col = solution.get_integer_value(*variable);

                for col in 0..n as i32 {
                    let string = if queen_col == col { "| * " } else { "|   " };

                    print!("{string}");
                }

                println!("|");
            }

            println!("{row_separator}");
        }
        SatisfactionResult::Unsatisfiable => {
            println!("{n}-queens is unsatisfiable.");
        }
        SatisfactionResult::Unknown(cause) => {
            println!("Unknown: {cause:?}");
        }
        SatisfactionResult::InvalidModel(reason) => {
            println!("Invalid model: {reason}");
        }
    }

    solver.log_statistics();
}
