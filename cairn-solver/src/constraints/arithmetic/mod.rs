mod equality;
mod inequality;

pub use equality::*;
pub use inequality::*;

use super::Constraint;
use crate::variables::IntegerVariable;
use crate::variables::TransformableVariable;

/// Creates the [`Constraint`] `a + b = c`.
pub fn plus<Var: IntegerVariable>(a: Var, b: Var, c: Var) -> impl Constraint {
    equals([a.scaled(1), b.scaled(1), c.scaled(-1)], 0)
}
