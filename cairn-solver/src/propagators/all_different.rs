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

/// Forward checking for the constraint that all variables take different values.
///
/// Whenever a variable becomes fixed its value is removed from every other variable. The delta
/// tells which variables were fixed since the previous invocation, so only those are visited; the
/// first propagation visits every fixed variable.
#[derive(Clone, Debug)]
pub struct AllDifferentPropagator<Var> {
    variables: Box<[Var]>,
}

impl<Var: IntegerVariable> AllDifferentPropagator<Var> {
    pub fn new(variables: Box<[Var]>) -> Self {
        AllDifferentPropagator { variables }
    }

    fn remove_from_others(
        &self,
        context: &mut PropagationContextMut,
        fixed: usize,
        worklist: &mut Vec<usize>,
    ) -> PropagationStatus {
        let value = context.lower_bound(&self.variables[fixed]);

        for (index, var) in self.variables.iter().enumerate() {
            if index == fixed || !context.contains(var, value) {
                continue;
            }

            let was_fixed = context.is_fixed(var);
            context.remove(var, value)?;
            if !was_fixed && context.is_fixed(var) {
                worklist.push(index);
            }
        }

        Ok(())
    }
}

impl<Var: IntegerVariable> Propagator for AllDifferentPropagator<Var> {
    fn name(&self) -> &str {
        "AllDifferent"
    }

    fn priority(&self) -> Priority {
        Priority::High
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext,
    ) -> PropagationStatus {
        for (index, var) in self.variables.iter().enumerate() {
            let _ = context.register(var.clone(), DomainEvents::ASSIGN, LocalId::from(index as u32));
        }

        Ok(())
    }

    fn propagate(&mut self, mut context: PropagationContextMut) -> PropagationStatus {
        let first_propagation = context.is_first_propagation();
        let mut worklist = (0..self.variables.len())
            .filter(|&index| {
                context.is_fixed(&self.variables[index])
                    && (first_propagation
                        || context.delta(LocalId::from(index as u32)).next().is_some())
            })
            .collect::<Vec<_>>();

        while let Some(fixed) = worklist.pop() {
            self.remove_from_others(&mut context, fixed, &mut worklist)?;
        }

        Ok(())
    }

    fn is_entailed(&self, context: PropagationContext) -> Entailment {
        if !self.variables.iter().all(|var| context.is_fixed(var)) {
            return Entailment::Undetermined;
        }

        let mut values = self
            .variables
            .iter()
            .map(|var| context.lower_bound(var))
            .collect::<Vec<_>>();
        values.sort_unstable();

        if values.windows(2).any(|pair| pair[0] == pair[1]) {
            Entailment::Violated
        } else {
            Entailment::Satisfied
        }
    }
}
