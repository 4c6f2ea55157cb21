use crate::cairn_assert_simple;
use crate::engine::cp::Environment;
use crate::engine::variables::DomainId;
use crate::variables::IntegerVariable;

/// A solution which takes ownership of its inner structures.
///
/// It is a detached copy of the variable domains at the moment the solution was found, without
/// any of the backtracking state.
#[derive(Clone, Debug, Default)]
pub struct Solution {
    environment: Environment,
}

impl Solution {
    pub(crate) fn new(environment: Environment) -> Self {
        Self { environment }
    }

    /// Returns the number of defined [`DomainId`]s.
    pub fn num_domains(&self) -> usize {
        self.environment.num_domains()
    }

    pub fn get_domains(&self) -> impl Iterator<Item = DomainId> + '_ {
        self.environment.get_domains()
    }

    pub fn contains_domain_id(&self, domain_id: DomainId) -> bool {
        (domain_id.id() as usize) < self.environment.num_domains()
    }

    /// Returns the value of `var` in this solution.
    ///
    /// Panics when `var` was not fixed, which can only happen for variables the brancher did not
    /// branch on.
    pub fn get_integer_value<Var: IntegerVariable>(&self, var: Var) -> i32 {
        let value = var.lower_bound(&self.environment);
        cairn_assert_simple!(
            value == var.upper_bound(&self.environment),
            "Expected retrieved integer variable from solution to be assigned"
        );
        value
    }
}
