use crate::basic_types::PropagationStatus;
use crate::engine::cp::domain_events::DomainEvents;
use crate::engine::cp::propagation::Entailment;
use crate::engine::cp::propagation::LocalId;
use crate::engine::cp::propagation::PropagationContext;
use crate::engine::cp::propagation::PropagationContextMut;
use crate::engine::cp::propagation::Priority;
use crate::engine::cp::propagation::Propagator;
use crate::engine::cp::propagation::PropagatorInitialisationContext;
use crate::engine::cp::propagation::ReadDomains;
use crate::engine::variables::IntegerVariable;

/// Propagator for the constraint `a != b`.
///
/// Offsets are expressed through views, e.g. `x != y + c` is `a = x` and `b = y.offset(c)`.
/// The propagator only acts once one of the two sides is fixed.
#[derive(Clone, Debug)]
pub struct BinaryNotEqualsPropagator<AVar, BVar> {
    a: AVar,
    b: BVar,
}

impl<AVar, BVar> BinaryNotEqualsPropagator<AVar, BVar> {
    pub fn new(a: AVar, b: BVar) -> Self {
        BinaryNotEqualsPropagator { a, b }
    }
}

impl<AVar, BVar> Propagator for BinaryNotEqualsPropagator<AVar, BVar>
where
    AVar: IntegerVariable,
    BVar: IntegerVariable,
{
    fn name(&self) -> &str {
        "BinaryNotEq"
    }

    fn priority(&self) -> Priority {
        Priority::High
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext,
    ) -> PropagationStatus {
        // We only care about the case where one of the two is assigned
        let _ = context.register(self.a.clone(), DomainEvents::ASSIGN, LocalId::from(0));
        let _ = context.register(self.b.clone(), DomainEvents::ASSIGN, LocalId::from(1));

        Ok(())
    }

    fn propagate(&mut self, mut context: PropagationContextMut) -> PropagationStatus {
        if context.is_fixed(&self.a) {
            let value = context.lower_bound(&self.a);
            context.remove(&self.b, value)?;
        }

        if context.is_fixed(&self.b) {
            let value = context.lower_bound(&self.b);
            context.remove(&self.a, value)?;
        }

        Ok(())
    }

    fn is_entailed(&self, context: PropagationContext) -> Entailment {
        let a_lb = context.lower_bound(&self.a);
        let a_ub = context.upper_bound(&self.a);
        let b_lb = context.lower_bound(&self.b);
        let b_ub = context.upper_bound(&self.b);

        if a_ub < b_lb || b_ub < a_lb {
            // The domains are non-overlapping
            Entailment::Satisfied
        } else if context.is_fixed(&self.a) && context.is_fixed(&self.b) {
            Entailment::Violated
        } else if context.is_fixed(&self.a) && !context.contains(&self.b, a_lb) {
            Entailment::Satisfied
        } else if context.is_fixed(&self.b) && !context.contains(&self.a, b_lb) {
            Entailment::Satisfied
        } else {
            Entailment::Undetermined
        }
    }
}
