#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

//! Compares the solutions found by the solver on small random models with the solutions found by
//! enumerating every assignment.

use std::collections::BTreeSet;

use cairn_solver::branching::branchers::ActivityBased;
use cairn_solver::branching::branchers::DomOverWDeg;
use cairn_solver::branching::branchers::Greedy;
use cairn_solver::branching::branchers::IndependentVariableValueBrancher;
use cairn_solver::branching::branchers::LastConflict;
use cairn_solver::branching::branchers::RandomBrancher;
use cairn_solver::branching::branchers::Sequencer;
use cairn_solver::branching::Brancher;
use cairn_solver::branching::FirstFail;
use cairn_solver::branching::InDomainMax;
use cairn_solver::branching::InDomainMin;
use cairn_solver::branching::InDomainOrder;
use cairn_solver::branching::InDomainRandom;
use cairn_solver::branching::InDomainRandomBound;
use cairn_solver::branching::InDomainSplit;
use cairn_solver::branching::InputOrder;
use cairn_solver::branching::RandomSelector;
use cairn_solver::branching::Smallest;
use cairn_solver::constraints;
use cairn_solver::optimisation::OptimisationDirection;
use cairn_solver::rand::rngs::SmallRng;
use cairn_solver::rand::seq::SliceRandom;
use cairn_solver::rand::Rng;
use cairn_solver::rand::SeedableRng;
use cairn_solver::results::solution_iterator::IteratedSolution;
use cairn_solver::results::OptimisationResult;
use cairn_solver::termination::Indefinite;
use cairn_solver::termination::NodeBudget;
use cairn_solver::variables::DomainId;
use cairn_solver::variables::TransformableVariable;
use cairn_solver::variables::ValueOrder;
use cairn_solver::Solver;

const COEFFICIENTS: [i32; 5] = [-2, -1, 1, 2, 3];

#[derive(Clone, Debug)]
enum ModelConstraint {
    /// `x[lhs] != x[rhs] + offset`
    NotEquals { lhs: usize, rhs: usize, offset: i32 },
    /// `sum c_i * x[i] <= rhs`
    LessOrEqual { terms: Vec<(i32, usize)>, rhs: i32 },
    /// `sum c_i * x[i] = rhs`
    Equals { terms: Vec<(i32, usize)>, rhs: i32 },
    AllDifferent(Vec<usize>),
}

impl ModelConstraint {
    fn is_satisfied(&self, assignment: &[i32]) -> bool {
        let weighted_sum = |terms: &[(i32, usize)]| {
            terms
                .iter()
                .map(|&(coefficient, index)| coefficient * assignment[index])
                .sum::<i32>()
        };

        match self {
            ModelConstraint::NotEquals { lhs, rhs, offset } => {
                assignment[*lhs] != assignment[*rhs] + offset
            }
            ModelConstraint::LessOrEqual { terms, rhs } => weighted_sum(terms) <= *rhs,
            ModelConstraint::Equals { terms, rhs } => weighted_sum(terms) == *rhs,
            ModelConstraint::AllDifferent(indices) => {
                let values = indices
                    .iter()
                    .map(|&index| assignment[index])
                    .collect::<BTreeSet<_>>();
                values.len() == indices.len()
            }
        }
    }

    fn post(&self, solver: &mut Solver, variables: &[DomainId]) {
        let views = |terms: &[(i32, usize)]| {
            terms
                .iter()
                .map(|&(coefficient, index)| variables[index].scaled(coefficient))
                .collect::<Vec<_>>()
        };

        // A root failure leaves the solver infeasible, which the search reports
        let _ = match self {
            ModelConstraint::NotEquals { lhs, rhs, offset } => solver
                .add_constraint(constraints::not_equals(
                    variables[*lhs],
                    variables[*rhs].offset(*offset),
                ))
                .post(),
            ModelConstraint::LessOrEqual { terms, rhs } => solver
                .add_constraint(constraints::less_than_or_equals(views(terms), *rhs))
                .post(),
            ModelConstraint::Equals { terms, rhs } => solver
                .add_constraint(constraints::equals(views(terms), *rhs))
                .post(),
            ModelConstraint::AllDifferent(indices) => solver
                .add_constraint(constraints::all_different(
                    indices
                        .iter()
                        .map(|&index| variables[index])
                        .collect::<Vec<_>>(),
                ))
                .post(),
        };
    }
}

#[derive(Clone, Debug)]
struct Model {
    /// The values of every variable, and whether its domain is enumerated.
    domains: Vec<(Vec<i32>, bool)>,
    constraints: Vec<ModelConstraint>,
}

impl Model {
    fn random(rng: &mut SmallRng) -> Model {
        let num_variables = rng.gen_range(3..=5);

        let domains = (0..num_variables)
            .map(|_| {
                if rng.gen_bool(0.5) {
                    let lower_bound = rng.gen_range(-2..=2);
                    let upper_bound = lower_bound + rng.gen_range(0..=3);
                    ((lower_bound..=upper_bound).collect(), false)
                } else {
                    let mut values = (-3..=5).collect::<Vec<i32>>();
                    values.shuffle(rng);
                    values.truncate(rng.gen_range(1..=4));
                    values.sort_unstable();
                    (values, true)
                }
            })
            .collect::<Vec<_>>();

        let constraints = (0..rng.gen_range(1..=4))
            .map(|_| Model::random_constraint(rng, num_variables))
            .collect();

        Model {
            domains,
            constraints,
        }
    }

    fn random_constraint(rng: &mut SmallRng, num_variables: usize) -> ModelConstraint {
        let mut indices = (0..num_variables).collect::<Vec<_>>();
        indices.shuffle(rng);

        match rng.gen_range(0..4) {
            0 => ModelConstraint::NotEquals {
                lhs: indices[0],
                rhs: indices[1],
                offset: rng.gen_range(-1..=1),
            },
            1 | 2 => {
                let terms = indices[..rng.gen_range(2..=3)]
                    .iter()
                    .map(|&index| {
                        let coefficient = COEFFICIENTS[rng.gen_range(0..COEFFICIENTS.len())];
                        (coefficient, index)
                    })
                    .collect::<Vec<_>>();
                let rhs = rng.gen_range(-4..=6);

                if rng.gen_bool(0.5) {
                    ModelConstraint::LessOrEqual { terms, rhs }
                } else {
                    ModelConstraint::Equals { terms, rhs }
                }
            }
            _ => ModelConstraint::AllDifferent(indices[..rng.gen_range(2..=3)].to_vec()),
        }
    }

    fn build(&self, solver: &mut Solver) -> Vec<DomainId> {
        let variables = self
            .domains
            .iter()
            .map(|(values, enumerated)| {
                if *enumerated {
                    solver.new_sparse_integer(values.clone())
                } else {
                    solver.new_bounded_integer(values[0], values[values.len() - 1])
                }
            })
            .collect::<Vec<_>>();

        for constraint in self.constraints.iter() {
            constraint.post(solver, &variables);
        }

        variables
    }

    /// Every assignment which satisfies all constraints.
    fn brute_force(&self) -> BTreeSet<Vec<i32>> {
        let mut solutions = BTreeSet::new();
        let mut assignment = Vec::with_capacity(self.domains.len());
        self.extend(&mut assignment, &mut solutions);
        solutions
    }

    fn extend(&self, assignment: &mut Vec<i32>, solutions: &mut BTreeSet<Vec<i32>>) {
        if assignment.len() == self.domains.len() {
            if self
                .constraints
                .iter()
                .all(|constraint| constraint.is_satisfied(assignment))
            {
                let _ = solutions.insert(assignment.clone());
            }
            return;
        }

        for &value in self.domains[assignment.len()].0.iter() {
            assignment.push(value);
            self.extend(assignment, solutions);
            let _ = assignment.pop();
        }
    }
}

/// The ways of searching a model which visit the complete search space.
#[derive(Clone, Copy, Debug)]
enum Strategy {
    InputOrderMin,
    FirstFailMax,
    SmallestSplit,
    RandomSelectorRandomValue,
    InputOrderRandomBound,
    FirstFailDescending,
    InputOrderRotated,
    DomOverWDeg,
    DomOverWDegRandomValue,
    ActivityBased,
    ActivityBasedSplit,
    Random,
    LastConflict,
    Sequencer,
}

impl Strategy {
    const ALL: [Strategy; 14] = [
        Strategy::InputOrderMin,
        Strategy::FirstFailMax,
        Strategy::SmallestSplit,
        Strategy::RandomSelectorRandomValue,
        Strategy::InputOrderRandomBound,
        Strategy::FirstFailDescending,
        Strategy::InputOrderRotated,
        Strategy::DomOverWDeg,
        Strategy::DomOverWDegRandomValue,
        Strategy::ActivityBased,
        Strategy::ActivityBasedSplit,
        Strategy::Random,
        Strategy::LastConflict,
        Strategy::Sequencer,
    ];

    fn create(self, variables: &[DomainId], seed: u64) -> Box<dyn Brancher> {
        match self {
            Strategy::InputOrderMin => Box::new(IndependentVariableValueBrancher::new(
                InputOrder::new(variables),
                InDomainMin,
            )),
            Strategy::FirstFailMax => Box::new(IndependentVariableValueBrancher::new(
                FirstFail::new(variables),
                InDomainMax,
            )),
            Strategy::SmallestSplit => Box::new(IndependentVariableValueBrancher::new(
                Smallest::new(variables),
                InDomainSplit,
            )),
            Strategy::RandomSelectorRandomValue => Box::new(IndependentVariableValueBrancher::new(
                RandomSelector::new(variables),
                InDomainRandom,
            )),
            Strategy::InputOrderRandomBound => Box::new(IndependentVariableValueBrancher::new(
                InputOrder::new(variables),
                InDomainRandomBound,
            )),
            Strategy::FirstFailDescending => Box::new(IndependentVariableValueBrancher::new(
                FirstFail::new(variables),
                InDomainOrder::new(ValueOrder::Descending),
            )),
            Strategy::InputOrderRotated => Box::new(IndependentVariableValueBrancher::new(
                InputOrder::new(variables),
                InDomainOrder::new(ValueOrder::RotateLeft(2)),
            )),
            Strategy::DomOverWDeg => Box::new(DomOverWDeg::new(variables, seed)),
            Strategy::DomOverWDegRandomValue => Box::new(DomOverWDeg::with_value_selector(
                variables,
                seed,
                InDomainRandom,
            )),
            Strategy::ActivityBased => Box::new(ActivityBased::new(variables)),
            Strategy::ActivityBasedSplit => Box::new(
                ActivityBased::with_value_selector(variables, InDomainSplit).with_probe_limit(5),
            ),
            Strategy::Random => Box::new(RandomBrancher::new(variables, seed)),
            Strategy::LastConflict => Box::new(LastConflict::new(
                IndependentVariableValueBrancher::new(InputOrder::new(variables), InDomainMax),
            )),
            Strategy::Sequencer => {
                let (first, second) = variables.split_at(variables.len() / 2);
                Box::new(Sequencer::new(vec![
                    Box::new(IndependentVariableValueBrancher::new(
                        InputOrder::new(first),
                        InDomainMin,
                    )),
                    Box::new(DomOverWDeg::new(second, seed)),
                ]))
            }
        }
    }
}

/// Collects the reported solutions until the iterator reports something else, which is returned
/// as well.
fn iterate_solutions<B: Brancher>(
    model: &Model,
    create_brancher: impl FnOnce(&Solver, &[DomainId]) -> B,
) -> (Vec<Vec<i32>>, IteratedSolution) {
    let mut solver = Solver::default();
    let variables = model.build(&mut solver);

    let mut brancher = create_brancher(&solver, &variables);
    let mut termination = NodeBudget::new(100_000);
    let mut solution_iterator = solver.find_all_solutions(&mut brancher, &mut termination);

    let mut solutions = vec![];
    loop {
        match solution_iterator.next_solution() {
            IteratedSolution::Solution(solution) => solutions.push(
                variables
                    .iter()
                    .map(|&variable| solution.get_integer_value(variable))
                    .collect::<Vec<_>>(),
            ),
            other => return (solutions, other),
        }
    }
}

fn enumerate_solutions<B: Brancher>(
    model: &Model,
    description: impl std::fmt::Display,
    create_brancher: impl FnOnce(&Solver, &[DomainId]) -> B,
) -> BTreeSet<Vec<i32>> {
    let (solutions, outcome) = iterate_solutions(model, create_brancher);
    assert!(
        matches!(
            outcome,
            IteratedSolution::Finished | IteratedSolution::Unsatisfiable
        ),
        "unexpected outcome {outcome:?} with {description} for {model:?}"
    );

    let distinct = solutions.iter().cloned().collect::<BTreeSet<_>>();
    assert_eq!(
        solutions.len(),
        distinct.len(),
        "a solution was reported twice with {description} for {model:?}: {solutions:?}"
    );
    distinct
}

#[test]
fn all_solutions_match_brute_force() {
    let mut rng = SmallRng::seed_from_u64(42);

    for _ in 0..200 {
        let model = Model::random(&mut rng);

        assert_eq!(
            model.brute_force(),
            enumerate_solutions(&model, "the default brancher", |solver, _| {
                solver.default_brancher()
            }),
            "solutions differ for {model:?}"
        );
    }
}

#[test]
fn every_strategy_enumerates_the_brute_force_solutions() {
    let mut rng = SmallRng::seed_from_u64(3);

    for seed in 0..60 {
        let model = Model::random(&mut rng);
        let expected = model.brute_force();

        for strategy in Strategy::ALL {
            assert_eq!(
                expected,
                enumerate_solutions(&model, format!("{strategy:?}"), |_, variables| {
                    strategy.create(variables, seed)
                }),
                "solutions of {strategy:?} differ for {model:?}"
            );
        }
    }
}

#[test]
fn greedy_search_reports_at_most_one_valid_solution() {
    let mut rng = SmallRng::seed_from_u64(11);

    for _ in 0..200 {
        let model = Model::random(&mut rng);
        let expected = model.brute_force();

        let (solutions, outcome) = iterate_solutions(&model, |_, variables| {
            Greedy::new(IndependentVariableValueBrancher::new(
                FirstFail::new(variables),
                InDomainMin,
            ))
        });

        assert!(solutions.len() <= 1, "{solutions:?} for {model:?}");
        assert!(
            solutions.iter().all(|solution| expected.contains(solution)),
            "{solutions:?} are not all solutions of {model:?}"
        );
        match outcome {
            // Nothing was decided, so nothing was cut away
            IteratedSolution::Finished => {
                assert_eq!(expected, solutions.into_iter().collect::<BTreeSet<_>>())
            }
            IteratedSolution::Unsatisfiable => assert!(expected.is_empty()),
            IteratedSolution::Incomplete => {}
            other => panic!("unexpected outcome {other:?} for {model:?}"),
        }
    }
}

/// The optimal objective value in both directions: `None` if there is no solution, an error if the
/// solver did not prove either.
fn minimal_and_maximal_objective<B: Brancher>(
    model: &Model,
    weights: &[i32],
    create_brancher: impl Fn(&[DomainId]) -> B,
) -> [Result<Option<i32>, String>; 2] {
    [OptimisationDirection::Minimise, OptimisationDirection::Maximise].map(|direction| {
        let mut solver = Solver::default();
        let mut variables = model.build(&mut solver);

        let objective = solver.new_bounded_integer(-100, 100);
        let mut terms = variables
            .iter()
            .zip(weights.iter())
            .map(|(variable, &weight)| variable.scaled(weight))
            .collect::<Vec<_>>();
        terms.push(objective.scaled(-1));
        let _ = solver
            .add_constraint(constraints::equals(terms, 0))
            .post();
        variables.push(objective);

        let mut brancher = create_brancher(&variables);
        match solver.find_optimal_solution(&mut brancher, &mut Indefinite, objective, direction) {
            OptimisationResult::Optimal(solution) => Ok(Some(solution.get_integer_value(objective))),
            OptimisationResult::Unsatisfiable => Ok(None),
            other => Err(format!("{other:?} ({direction})")),
        }
    })
}

#[test]
fn optimal_solutions_match_brute_force() {
    let mut rng = SmallRng::seed_from_u64(7);

    for seed in 0..100 {
        let model = Model::random(&mut rng);
        let weights = (0..model.domains.len())
            .map(|_| COEFFICIENTS[rng.gen_range(0..COEFFICIENTS.len())])
            .collect::<Vec<_>>();

        let values = model
            .brute_force()
            .iter()
            .map(|assignment| {
                assignment
                    .iter()
                    .zip(weights.iter())
                    .map(|(value, weight)| value * weight)
                    .sum::<i32>()
            })
            .collect::<Vec<_>>();
        let expected = [values.iter().min(), values.iter().max()];

        let mut results = vec![(
            "the default brancher".to_owned(),
            minimal_and_maximal_objective(&model, &weights, |variables| {
                IndependentVariableValueBrancher::new(FirstFail::new(variables), InDomainMin)
            }),
        )];
        for strategy in Strategy::ALL {
            results.push((
                format!("{strategy:?}"),
                minimal_and_maximal_objective(&model, &weights, |variables| {
                    strategy.create(variables, seed)
                }),
            ));
        }

        for (description, result) in results {
            for (expected, result) in expected.iter().zip(result) {
                assert_eq!(
                    Ok(expected.copied()),
                    result,
                    "{description} differs for {model:?} with weights {weights:?}"
                );
            }
        }
    }
}
