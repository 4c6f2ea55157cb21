use std::fmt::Display;

use crate::cairn_assert_simple;
use crate::engine::cp::Cause;
use crate::engine::cp::EmptyDomain;
use crate::engine::cp::Environment;
use crate::engine::variables::DomainId;

/// The relation a [`Decision`] imposes between its variable and value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecisionOperator {
    Eq,
    NotEq,
    LessOrEqual,
    GreaterOrEqual,
}

impl Display for DecisionOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecisionOperator::Eq => write!(f, "="),
            DecisionOperator::NotEq => write!(f, "!="),
            DecisionOperator::LessOrEqual => write!(f, "<="),
            DecisionOperator::GreaterOrEqual => write!(f, ">="),
        }
    }
}

/// Whether a decision is the first alternative tried at its node, or its refutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Branch {
    Left,
    Right,
}

/// A branching decision: the constraint `variable <operator> value`.
///
/// A refutable left decision is replaced by its [`Decision::refutation`] when the search
/// backtracks over it; any other decision is simply discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Decision {
    pub variable: DomainId,
    pub operator: DecisionOperator,
    pub value: i32,
    pub branch: Branch,
    pub refutable: bool,
    /// The position in the decision path of the decision under which this one was taken.
    pub parent: Option<usize>,
}

impl Decision {
    /// A refutable left decision.
    pub fn new(variable: DomainId, operator: DecisionOperator, value: i32) -> Decision {
        Decision {
            variable,
            operator,
            value,
            branch: Branch::Left,
            refutable: true,
            parent: None,
        }
    }

    /// `variable = value`
    pub fn assign(variable: DomainId, value: i32) -> Decision {
        Decision::new(variable, DecisionOperator::Eq, value)
    }

    /// `variable <= value`
    pub fn at_most(variable: DomainId, value: i32) -> Decision {
        Decision::new(variable, DecisionOperator::LessOrEqual, value)
    }

    /// `variable >= value`
    pub fn at_least(variable: DomainId, value: i32) -> Decision {
        Decision::new(variable, DecisionOperator::GreaterOrEqual, value)
    }

    /// The same decision, but one which is not reconsidered upon backtracking.
    pub fn non_refutable(self) -> Decision {
        Decision {
            refutable: false,
            ..self
        }
    }

    /// The decision which excludes exactly the assignments this decision allows.
    ///
    /// A bound decision on `i32::MAX` (resp. `i32::MIN`) excludes nothing, so it has no refutation.
    pub fn refutation(&self) -> Decision {
        let (operator, value) = match self.operator {
            DecisionOperator::Eq => (DecisionOperator::NotEq, self.value),
            DecisionOperator::NotEq => (DecisionOperator::Eq, self.value),
            DecisionOperator::LessOrEqual => {
                cairn_assert_simple!(
                    self.value < i32::MAX,
                    "'{self}' excludes no value and cannot be refuted"
                );
                (
                    DecisionOperator::GreaterOrEqual,
                    self.value.saturating_add(1),
                )
            }
            DecisionOperator::GreaterOrEqual => {
                cairn_assert_simple!(
                    self.value > i32::MIN,
                    "'{self}' excludes no value and cannot be refuted"
                );
                (DecisionOperator::LessOrEqual, self.value.saturating_sub(1))
            }
        };

        Decision {
            operator,
            value,
            branch: Branch::Right,
            refutable: false,
            ..*self
        }
    }

    /// Imposes the decision on the domain of its variable.
    pub(crate) fn apply(&self, environment: &mut Environment) -> Result<bool, EmptyDomain> {
        match self.operator {
            DecisionOperator::Eq => {
                environment.instantiate(self.variable, self.value, Cause::Decision)
            }
            DecisionOperator::NotEq => {
                environment.remove_value(self.variable, self.value, Cause::Decision)
            }
            DecisionOperator::LessOrEqual => {
                environment.tighten_upper_bound(self.variable, self.value, Cause::Decision)
            }
            DecisionOperator::GreaterOrEqual => {
                environment.tighten_lower_bound(self.variable, self.value, Cause::Decision)
            }
        }
    }
}

impl Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.variable, self.operator, self.value)
    }
}
