use crate::branching::value_selection::ValueSelector;
use crate::branching::SelectionContext;
use crate::engine::search::Decision;
use crate::engine::variables::DomainId;
use crate::engine::variables::ValueOrder;

/// A [`ValueSelector`] which assigns the variable to the first value of its domain when the
/// domain is enumerated in the given [`ValueOrder`].
///
/// A rotation can start strictly between the bounds; on an interval domain, whose refutation could
/// not remove such a value, the lower-bound is used instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct InDomainOrder {
    order: ValueOrder,
}

impl InDomainOrder {
    pub fn new(order: ValueOrder) -> Self {
        InDomainOrder { order }
    }
}

impl ValueSelector<DomainId> for InDomainOrder {
    fn select_value(
        &mut self,
        context: &mut SelectionContext,
        decision_variable: DomainId,
    ) -> Decision {
        let lower_bound = context.lower_bound(decision_variable);
        let value = context
            .values_in_order(decision_variable, self.order)
            .next()
            .unwrap_or(lower_bound);

        if context.is_enumerated(decision_variable)
            || value == lower_bound
            || value == context.upper_bound(decision_variable)
        {
            Decision::assign(decision_variable, value)
        } else {
            Decision::assign(decision_variable, lower_bound)
        }
    }
}
