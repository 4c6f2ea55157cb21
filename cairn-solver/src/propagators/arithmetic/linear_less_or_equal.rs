use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatus;
use crate::engine::cp::domain_events::DomainEvents;
use crate::engine::cp::propagation::Entailment;
use crate::engine::cp::propagation::LocalId;
use crate::engine::cp::propagation::PropagationContext;
use crate::engine::cp::propagation::PropagationContextMut;
use crate::engine::cp::propagation::Propagator;
use crate::engine::cp::propagation::PropagatorInitialisationContext;
use crate::engine::cp::propagation::ReadDomains;
use crate::engine::variables::IntegerVariable;

/// Propagator for the constraint `\sum x_i <= c`.
///
/// Weights are expressed through views, e.g. `2a - b <= c` is `x = [a.scaled(2), b.scaled(-1)]`.
/// The propagator enforces bounds consistency; it iterates itself until none of its upper bounds
/// moves, which only takes more than one pass if a domain occurs in several terms.
#[derive(Clone, Debug)]
pub struct LinearLessOrEqualPropagator<Var> {
    x: Box<[Var]>,
    c: i32,
}

impl<Var> LinearLessOrEqualPropagator<Var>
where
    Var: IntegerVariable,
{
    pub fn new(x: Box<[Var]>, c: i32) -> Self {
        LinearLessOrEqualPropagator { x, c }
    }

    fn lower_bound_left_hand_side<Context: ReadDomains>(&self, context: &Context) -> i64 {
        self.x
            .iter()
            .map(|var| context.lower_bound(var) as i64)
            .sum()
    }
}

impl<Var: IntegerVariable> Propagator for LinearLessOrEqualPropagator<Var> {
    fn name(&self) -> &str {
        "LinearLeq"
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext,
    ) -> PropagationStatus {
        for (index, var) in self.x.iter().enumerate() {
            let _ = context.register(
                var.clone(),
                DomainEvents::LOWER_BOUND,
                LocalId::from(index as u32),
            );
        }

        Ok(())
    }

    fn propagate(&mut self, mut context: PropagationContextMut) -> PropagationStatus {
        loop {
            let lower_bound_left_hand_side = self.lower_bound_left_hand_side(&context);
            let slack = self.c as i64 - lower_bound_left_hand_side;
            if slack < 0 {
                return Err(Inconsistency::Violated);
            }

            let mut changed = false;
            for var in self.x.iter() {
                let bound = context.lower_bound(var) as i64 + slack;
                if bound < context.upper_bound(var) as i64 {
                    // The bound is below an `i32` upper bound, so it fits
                    context.set_upper_bound(var, bound as i32)?;
                    changed = true;
                }
            }

            if !changed {
                return Ok(());
            }
        }
    }

    fn is_entailed(&self, context: PropagationContext) -> Entailment {
        let upper_bound_left_hand_side = self
            .x
            .iter()
            .map(|var| context.upper_bound(var) as i64)
            .sum::<i64>();

        if upper_bound_left_hand_side <= self.c as i64 {
            Entailment::Satisfied
        } else if self.lower_bound_left_hand_side(&context) > self.c as i64 {
            Entailment::Violated
        } else {
            Entailment::Undetermined
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::cp::test_solver::TestSolver;
    use crate::engine::variables::TransformableVariable;

    #[test]
    fn bounds_are_propagated() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(1, 5);
        let y = solver.new_variable(0, 10);

        let _ = solver
            .new_propagator(LinearLessOrEqualPropagator::new([x, y].into(), 7))
            .expect("no empty domains");

        solver.assert_bounds(x, 1, 5);
        solver.assert_bounds(y, 0, 6);
    }

    #[test]
    fn negative_weights_raise_lower_bounds() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 10);
        let y = solver.new_variable(0, 4);

        // y - x <= -3, i.e. x >= y + 3
        let _ = solver
            .new_propagator(LinearLessOrEqualPropagator::new(
                [y.scaled(1), x.scaled(-1)].into(),
                -3,
            ))
            .expect("no empty domains");

        solver.assert_bounds(x, 3, 10);
        solver.assert_bounds(y, 0, 4);

        solver.set_upper_bound(x, 5).expect("non-empty domain");
        solver.propagate().expect("non-empty domain");
        solver.assert_bounds(y, 0, 2);
    }

    #[test]
    fn small_upper_bounds_are_entailed() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(0, 3);
        let y = solver.new_variable(0, 10);

        let handle = solver
            .new_propagator(LinearLessOrEqualPropagator::new([x, y].into(), 8))
            .expect("no empty domains");
        let context = PropagationContext::new(solver.environment());
        assert_eq!(
            Entailment::Undetermined,
            solver.get_propagator(handle).is_entailed(context)
        );

        solver.set_upper_bound(y, 5).expect("non-empty domain");
        let context = PropagationContext::new(solver.environment());
        assert_eq!(
            Entailment::Satisfied,
            solver.get_propagator(handle).is_entailed(context)
        );
    }

    #[test]
    fn lower_bounds_exceeding_the_constant_fail() {
        let mut solver = TestSolver::default();
        let x = solver.new_variable(3, 5);
        let y = solver.new_variable(4, 10);

        let result = solver.new_propagator(LinearLessOrEqualPropagator::new([x, y].into(), 6));

        assert!(result.is_err());
    }
}
