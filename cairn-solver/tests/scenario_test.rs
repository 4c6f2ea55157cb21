#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

use std::cell::RefCell;
use std::rc::Rc;

use cairn_solver::branching::branchers::ActivityBased;
use cairn_solver::branching::branchers::DomOverWDeg;
use cairn_solver::constraints;
use cairn_solver::graphs::LowestCommonAncestor;
use cairn_solver::options::CumulativeFiltering;
use cairn_solver::options::GroupPolicy;
use cairn_solver::options::PropagatorOrdering;
use cairn_solver::options::SolverOptions;
use cairn_solver::rand::rngs::SmallRng;
use cairn_solver::rand::SeedableRng;
use cairn_solver::results::solution_iterator::IteratedSolution;
use cairn_solver::results::SatisfactionResult;
use cairn_solver::search::Decision;
use cairn_solver::search::SearchMonitor;
use cairn_solver::termination::Indefinite;
use cairn_solver::termination::NodeBudget;
use cairn_solver::variables::DomainId;
use cairn_solver::variables::TransformableVariable;
use cairn_solver::Solver;

#[test]
fn interval_domains_only_shrink_at_the_bounds() {
    let mut solver = Solver::default();
    let x = solver.new_bounded_integer(0, 9);
    let five = solver.new_bounded_integer(5, 5);
    let zero = solver.new_bounded_integer(0, 0);

    solver
        .add_constraint(constraints::not_equals(x, five))
        .post()
        .expect("x can differ from 5");
    solver
        .add_constraint(constraints::not_equals(x, zero))
        .post()
        .expect("x can differ from 0");

    // Removing 5 from the interior is a no-op, removing 0 moves the lower bound
    assert_eq!(1, solver.lower_bound(&x));
    assert_eq!(9, solver.upper_bound(&x));
    assert!(solver.contains(&x, 5));
}

#[test]
fn bitset_domains_keep_holes() {
    let mut solver = Solver::default();
    let x = solver.new_sparse_integer(vec![18, 0, 3]);

    assert_eq!(0, solver.lower_bound(&x));
    assert_eq!(18, solver.upper_bound(&x));
    assert!(solver.contains(&x, 3));
    assert!(!solver.contains(&x, 2));

    let three = solver.new_bounded_integer(3, 3);
    solver
        .add_constraint(constraints::not_equals(x, three))
        .post()
        .expect("x can differ from 3");
    assert!(!solver.contains(&x, 3));

    let zero = solver.new_bounded_integer(0, 0);
    solver
        .add_constraint(constraints::not_equals(x, zero))
        .post()
        .expect("x can differ from 0");

    // Only 18 remains, so the lower bound jumps over the removed values
    assert_eq!(18, solver.lower_bound(&x));
    assert_eq!(18, solver.upper_bound(&x));
}

#[test]
fn large_fixed_cumulative_uses_greedy_filtering() {
    let mut solver = Solver::default();

    // A chain of unit tasks occupying [0, 15000) and one task which can start anywhere
    let mut starts = (0..15_000)
        .map(|start| solver.new_bounded_integer(start, start))
        .collect::<Vec<_>>();
    let free = solver.new_bounded_integer(0, 20_000);
    starts.push(free);

    let duration = solver.new_bounded_integer(1, 1);
    let demand = solver.new_bounded_integer(1, 1);
    let capacity = solver.new_bounded_integer(1, 1);
    let num_variables = solver.num_variables();

    let filtering = constraints::cumulative(
        starts.iter().copied(),
        vec![duration; starts.len()],
        vec![demand; starts.len()],
        capacity,
    )
    .post_with_filtering(&mut solver)
    .expect("the free task fits after the chain");

    assert_eq!(CumulativeFiltering::Greedy, filtering);
    assert_eq!(num_variables, solver.num_variables());
    assert_eq!(15_000, solver.lower_bound(&free));
    assert_eq!(20_000, solver.upper_bound(&free));
}

#[test]
fn variable_duration_is_decomposed_with_an_end_variable() {
    let mut solver = Solver::default();
    let starts = [solver.new_bounded_integer(0, 4), solver.new_bounded_integer(0, 4)];
    let durations = [solver.new_bounded_integer(2, 3), solver.new_bounded_integer(2, 2)];
    let demands = [solver.new_bounded_integer(1, 1), solver.new_bounded_integer(1, 1)];
    let capacity = solver.new_bounded_integer(1, 1);
    let num_variables = solver.num_variables();

    let filtering = constraints::cumulative(starts, durations, demands, capacity)
        .post_with_filtering(&mut solver)
        .expect("both tasks fit");

    assert_eq!(CumulativeFiltering::TimeTable, filtering);
    assert_eq!(num_variables + 1, solver.num_variables());

    let end = DomainId::new(num_variables as u32);
    assert_eq!(Some("x0_x2"), solver.variable_name(end));
    assert_eq!(2, solver.lower_bound(&end));
    assert_eq!(7, solver.upper_bound(&end));

    let mut brancher = solver.default_brancher();
    match solver.find_solution(&mut brancher, &mut Indefinite) {
        SatisfactionResult::Satisfiable(solution) => {
            let start = solution.get_integer_value(starts[0]);
            let duration = solution.get_integer_value(durations[0]);
            assert_eq!(start + duration, solution.get_integer_value(end));

            // The tasks do not overlap on the unit resource
            let other = solution.get_integer_value(starts[1]);
            assert!(start + duration <= other || other + 2 <= start);
        }
        other => panic!("expected a solution, got {other:?}"),
    }
}

/// Records the left branches which the search takes.
#[derive(Clone, Debug, Default)]
struct DecisionRecorder {
    decisions: Rc<RefCell<Vec<Decision>>>,
}

impl SearchMonitor for DecisionRecorder {
    fn on_left_branch(&mut self, decision: &Decision) {
        self.decisions.borrow_mut().push(*decision);
    }
}

fn dom_over_w_deg_trace(seed: u64) -> Vec<Decision> {
    let mut solver = Solver::default();
    let recorder = DecisionRecorder::default();
    solver.set_monitor(recorder.clone());

    // Pigeonhole: 6 variables over 5 values, which fails often enough to update the weights
    let variables = (0..6)
        .map(|_| solver.new_enumerated_integer(0, 4))
        .collect::<Vec<_>>();
    solver
        .add_constraint(constraints::all_different(variables.clone()))
        .post()
        .expect("not detected at the root");

    let mut brancher = DomOverWDeg::new(&variables, seed);
    let result = solver.find_solution(&mut brancher, &mut NodeBudget::new(500));
    assert!(matches!(
        result,
        SatisfactionResult::Unsatisfiable | SatisfactionResult::Unknown(_)
    ));

    let decisions = recorder.decisions.borrow().clone();
    decisions
}

#[test]
fn dom_over_w_deg_is_deterministic_per_seed() {
    for seed in [0, 1, 42] {
        let first = dom_over_w_deg_trace(seed);
        let second = dom_over_w_deg_trace(seed);

        assert!(!first.is_empty());
        assert_eq!(first, second);
    }
}

#[test]
fn fixpoint_is_independent_of_the_group_policy() {
    let policies = [
        GroupPolicy::Fifo,
        GroupPolicy::Lifo,
        GroupPolicy::One(PropagatorOrdering::LowestId),
        GroupPolicy::One(PropagatorOrdering::HighestId),
    ];

    let fixpoints = policies.map(|group_policy| {
        let mut solver = Solver::with_options(SolverOptions {
            random_generator: SmallRng::seed_from_u64(42),
            group_policy,
        });

        let x = solver.new_bounded_integer(0, 10);
        let y = solver.new_bounded_integer(0, 10);
        let z = solver.new_sparse_integer(vec![1, 2, 4, 8]);
        let one = solver.new_bounded_integer(1, 1);

        solver
            .add_constraint(constraints::less_than_or_equals(
                [x.scaled(1), y.scaled(2)],
                9,
            ))
            .post()
            .expect("consistent");
        solver
            .add_constraint(constraints::equals([x.scaled(1), z.scaled(-1)], 3))
            .post()
            .expect("consistent");
        solver
            .add_constraint(constraints::not_equals(z, one))
            .post()
            .expect("consistent");
        solver
            .add_constraint(constraints::all_different(vec![x, y, z]))
            .post()
            .expect("consistent");

        [x, y, z].map(|variable| {
            (
                solver.lower_bound(&variable),
                solver.upper_bound(&variable),
            )
        })
    });

    for fixpoint in fixpoints.iter() {
        assert_eq!(&fixpoints[0], fixpoint);
    }
}

#[test]
fn lowest_common_ancestors_in_a_seven_node_tree() {
    //         0
    //       /   \
    //      1     2
    //     / \   / \
    //    3   4 5   6
    let successors = vec![
        vec![1, 2],
        vec![3, 4],
        vec![5, 6],
        vec![],
        vec![],
        vec![],
        vec![],
    ];
    let lca = LowestCommonAncestor::new(0, &successors);

    assert_eq!(Some(1), lca.query(3, 4));
    assert_eq!(Some(2), lca.query(5, 6));
    assert_eq!(Some(0), lca.query(3, 6));
    assert_eq!(Some(0), lca.query(4, 5));
    assert_eq!(Some(1), lca.query(1, 4));
    assert_eq!(Some(0), lca.query(0, 5));
    assert_eq!(Some(6), lca.query(6, 6));
}

#[test]
fn activity_based_search_enumerates_every_solution_once() {
    for seed in 0..10 {
        let mut solver = Solver::with_options(SolverOptions {
            random_generator: SmallRng::seed_from_u64(seed),
            group_policy: GroupPolicy::Fifo,
        });
        let variables = (0..4)
            .map(|_| solver.new_enumerated_integer(0, 3))
            .collect::<Vec<_>>();
        solver
            .add_constraint(constraints::all_different(variables.clone()))
            .post()
            .expect("consistent at the root");
        solver
            .add_constraint(constraints::less_than_or_equals(
                [variables[0].scaled(1), variables[3].scaled(1)],
                2,
            ))
            .post()
            .expect("consistent at the root");

        let mut brancher = ActivityBased::new(&variables);
        let mut termination = NodeBudget::new(10_000);
        let mut solutions = solver.find_all_solutions(&mut brancher, &mut termination);

        let mut found = vec![];
        loop {
            match solutions.next_solution() {
                IteratedSolution::Solution(solution) => found.push(
                    variables
                        .iter()
                        .map(|&variable| solution.get_integer_value(variable))
                        .collect::<Vec<_>>(),
                ),
                IteratedSolution::Finished => break,
                other => panic!("unexpected outcome {other:?} with seed {seed}"),
            }
        }

        // {x0, x3} is {0, 1} or {0, 2} in either order, the other two values in either order
        let num_found = found.len();
        found.sort();
        found.dedup();
        assert_eq!(8, num_found, "seed {seed}");
        assert_eq!(8, found.len(), "seed {seed}");
    }
}
