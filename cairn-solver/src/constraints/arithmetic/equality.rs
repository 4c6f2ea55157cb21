use super::inequality::Inequality;
use crate::constraints::Constraint;
use crate::propagators::BinaryNotEqualsPropagator;
use crate::variables::IntegerVariable;
use crate::variables::TransformableVariable;
use crate::ConstraintOperationError;
use crate::Solver;

/// Creates the [`Constraint`] `\sum terms_i = rhs`.
///
/// The equality is enforced by the two inequalities `\sum terms_i <= rhs` and
/// `\sum -terms_i <= -rhs`.
pub fn equals<Var: IntegerVariable>(terms: impl Into<Box<[Var]>>, rhs: i32) -> impl Constraint {
    EqualConstraint {
        terms: terms.into(),
        rhs,
    }
}

/// Creates the [`Constraint`] `lhs = rhs`.
pub fn binary_equals<Var: IntegerVariable>(lhs: Var, rhs: Var) -> impl Constraint {
    equals([lhs.scaled(1), rhs.scaled(-1)], 0)
}

/// Creates the [`Constraint`] `lhs != rhs`.
///
/// Offsets are expressed through views, e.g. `x != y + 3` is `not_equals(x, y.offset(3))`.
pub fn not_equals<AVar, BVar>(lhs: AVar, rhs: BVar) -> impl Constraint
where
    AVar: IntegerVariable,
    BVar: IntegerVariable,
{
    BinaryNotEqualsPropagator::new(lhs, rhs)
}

struct EqualConstraint<Var> {
    terms: Box<[Var]>,
    rhs: i32,
}

impl<Var: IntegerVariable> Constraint for EqualConstraint<Var> {
    fn post(self, solver: &mut Solver) -> Result<(), ConstraintOperationError> {
        let negated_terms = self
            .terms
            .iter()
            .map(|var| var.scaled(-1))
            .collect::<Box<[_]>>();

        Inequality {
            terms: self.terms,
            rhs: self.rhs,
        }
        .post(solver)?;

        Inequality {
            terms: negated_terms,
            rhs: -self.rhs,
        }
        .post(solver)
    }
}
