//! Defines the constraints that cairn provides out of the box which can be added to the
//! [`Solver`].
//!
//! A constraint is a relation over variables. In the solver, constraints are enforced through
//! propagators, and therefore constraints can be viewed as a collection of propagators.
//!
//! # Example
//! ```
//! # use cairn_solver::constraints;
//! # use cairn_solver::Solver;
//! let mut solver = Solver::default();
//!
//! let a = solver.new_bounded_integer(0, 3);
//! let b = solver.new_bounded_integer(0, 3);
//!
//! solver
//!     .add_constraint(constraints::equals([a, b], 3))
//!     .post()
//!     .expect("the model is consistent at the root");
//! ```
//!
//! Any [`Propagator`] is a constraint as well, so user-defined propagators can be posted through
//! the same [`Solver::add_constraint`] entry point.

mod all_different;
mod arithmetic;
mod constraint_poster;
mod cumulative;

pub use all_different::*;
pub use arithmetic::*;
pub use constraint_poster::*;
pub use cumulative::*;

use crate::basic_types::InvalidModel;
use crate::engine::cp::propagation::Propagator;
use crate::engine::variables::DomainId;
use crate::ConstraintOperationError;
use crate::Solver;

/// A [`Constraint`] is a relation over variables. It disqualifies certain partial assignments of
/// making it into a solution of the problem.
///
/// For example, the constraint `a = b` over two variables `a` and `b` only allows assignments to
/// `a` and `b` of the same value, and rejects any assignment where `a` and `b` differ.
pub trait Constraint {
    /// Add the [`Constraint`] to the [`Solver`].
    ///
    /// This method returns a [`ConstraintOperationError`] if the addition of the [`Constraint`] led
    /// to a root-level conflict, or if its arguments do not form a valid model.
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError>;
}

impl<ConcretePropagator> Constraint for ConcretePropagator
where
    ConcretePropagator: Propagator + 'static,
{
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        solver.add_propagator(self).map(|_| ())
    }
}

impl<C: Constraint> Constraint for Vec<C> {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        self.into_iter().try_for_each(|c| c.post(solver))
    }
}

/// Checks that every variable was created by `solver`.
fn check_variables_exist(
    solver: &Solver,
    variables: impl IntoIterator<Item = DomainId>,
) -> Result<(), InvalidModel> {
    let num_variables = solver.num_variables();
    variables
        .into_iter()
        .find(|variable| variable.id() as usize >= num_variables)
        .map_or(Ok(()), |variable| {
            Err(InvalidModel::UnknownVariable(variable.to_string()))
        })
}
