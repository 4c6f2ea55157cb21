use crate::branching::value_selection::InDomainRandomBound;
use crate::branching::value_selection::ValueSelector;
use crate::branching::SelectionContext;
use crate::engine::search::Decision;
use crate::engine::variables::DomainId;
use crate::engine::variables::ValueOrder;

/// A [`ValueSelector`] which assigns to a random value in the domain.
///
/// An interval domain cannot exclude a value strictly between its bounds, so for such a domain one
/// of the bounds is drawn instead, as [`InDomainRandomBound`] does.
#[derive(Debug, Clone, Copy)]
pub struct InDomainRandom;

impl ValueSelector<DomainId> for InDomainRandom {
    fn select_value(
        &mut self,
        context: &mut SelectionContext,
        decision_variable: DomainId,
    ) -> Decision {
        if !context.is_enumerated(decision_variable) {
            return InDomainRandomBound.select_value(context, decision_variable);
        }

        let size = context.size(decision_variable) as usize;
        let random_index = context.random().generate_usize_in_range(0..size);
        let value = context
            .values_in_order(decision_variable, ValueOrder::Ascending)
            .nth(random_index)
            .unwrap_or_else(|| context.lower_bound(decision_variable));
        Decision::assign(decision_variable, value)
    }

    fn is_restart_pointless(&mut self) -> bool {
        false
    }
}
