use crate::constraints::Constraint;
use crate::propagators::LinearLessOrEqualPropagator;
use crate::variables::IntegerVariable;
use crate::variables::TransformableVariable;
use crate::ConstraintOperationError;
use crate::Solver;

/// Create the [`Constraint`] `\sum terms_i <= rhs`.
pub fn less_than_or_equals<Var: IntegerVariable>(
    terms: impl Into<Box<[Var]>>,
    rhs: i32,
) -> impl Constraint {
    Inequality {
        terms: terms.into(),
        rhs,
    }
}

/// Creates the [`Constraint`] `lhs <= rhs`.
pub fn binary_less_than_or_equals<Var: IntegerVariable>(lhs: Var, rhs: Var) -> impl Constraint {
    less_than_or_equals([lhs.scaled(1), rhs.scaled(-1)], 0)
}

/// Creates the [`Constraint`] `lhs < rhs`.
pub fn binary_less_than<Var: IntegerVariable>(lhs: Var, rhs: Var) -> impl Constraint {
    less_than_or_equals([lhs.scaled(1), rhs.scaled(-1)], -1)
}

pub(super) struct Inequality<Var> {
    pub(super) terms: Box<[Var]>,
    pub(super) rhs: i32,
}

impl<Var: IntegerVariable> Constraint for Inequality<Var> {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        LinearLessOrEqualPropagator::new(self.terms, self.rhs).post(solver)
    }
}
