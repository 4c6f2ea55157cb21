use crate::branching::value_selection::ValueSelector;
use crate::branching::SelectionContext;
use crate::cairn_assert_advanced;
use crate::engine::search::Decision;
use crate::engine::variables::DomainId;

/// A [`ValueSelector`] which splits the domain in half (based on the lower-bound and upper-bound,
/// disregarding holes) and removes the upper-half from the domain.
///
/// Note that this strategy will not necessarily result in an equal split if there are holes in the
/// domain.
#[derive(Debug, Copy, Clone)]
pub struct InDomainSplit;

impl ValueSelector<DomainId> for InDomainSplit {
    fn select_value(
        &mut self,
        context: &mut SelectionContext,
        decision_variable: DomainId,
    ) -> Decision {
        InDomainSplit::get_decision_excluding_upper_half(context, decision_variable)
    }
}

impl InDomainSplit {
    pub fn get_decision_excluding_upper_half(
        context: &SelectionContext,
        decision_variable: DomainId,
    ) -> Decision {
        // Note that the domain of the variable should always have at least 2 values in it
        // (otherwise it should have been reported as fixed and not selected)
        let bound =
            context.lower_bound(decision_variable) + context.get_size_of_domain(decision_variable) / 2;
        cairn_assert_advanced!(
            bound >= context.lower_bound(decision_variable)
                && bound < context.upper_bound(decision_variable),
            "It should hold that {} <= {bound} < {}",
            context.lower_bound(decision_variable),
            context.upper_bound(decision_variable)
        );
        Decision::at_most(decision_variable, bound)
    }
}
