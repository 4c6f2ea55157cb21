use std::cmp::Ordering;

use fnv::FnvHashMap;
use log::warn;

use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::RandomTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::value_selection::InDomainMin;
use crate::branching::value_selection::ValueSelector;
use crate::branching::Brancher;
use crate::branching::SelectionContext;
use crate::engine::cp::propagation::PropagatorId;
use crate::engine::search::Decision;
use crate::engine::variables::DomainId;

/// The ratio between the domain size and the weighted degree of a variable.
///
/// Ratios are compared by cross-multiplication so that no precision is lost.
#[derive(Clone, Copy, Debug)]
pub struct DomWDegRatio {
    size: u64,
    weight: u64,
}

impl PartialEq for DomWDegRatio {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for DomWDegRatio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let lhs = self.size as u128 * other.weight as u128;
        let rhs = other.size as u128 * self.weight as u128;
        Some(lhs.cmp(&rhs))
    }
}

/// A [`Brancher`] which selects the unfixed variable with the smallest ratio between its domain
/// size and its weighted degree.
///
/// The weighted degree of a variable is one plus the number of failures of every propagator
/// watching the variable that still has at least two unfixed variables. Ties are broken uniformly
/// at random with a generator seeded at construction, the value is chosen by a [`ValueSelector`]
/// (by default [`InDomainMin`]).
///
/// Failure counts are kept by the propagation engine and are not undone on backtracking, so the
/// heuristic focuses on the parts of the problem which failed most often.
pub struct DomOverWDeg<ValueSelect = InDomainMin> {
    variables: Vec<DomainId>,
    value_selector: ValueSelect,
    tie_breaker: RandomTieBreaker<DomainId, DomWDegRatio>,
    /// The future arity of each propagator, valid for the duration of one selection.
    future_arities: FnvHashMap<PropagatorId, usize>,
}

impl<ValueSelect> std::fmt::Debug for DomOverWDeg<ValueSelect> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DomOverWDeg")
            .field("variables", &self.variables)
            .finish()
    }
}

impl DomOverWDeg<InDomainMin> {
    pub fn new(variables: &[DomainId], seed: u64) -> Self {
        DomOverWDeg::with_value_selector(variables, seed, InDomainMin)
    }
}

impl<ValueSelect: ValueSelector<DomainId>> DomOverWDeg<ValueSelect> {
    pub fn with_value_selector(
        variables: &[DomainId],
        seed: u64,
        value_selector: ValueSelect,
    ) -> Self {
        if variables.is_empty() {
            warn!("The DomOverWDeg brancher was not provided with any variables");
        }

        DomOverWDeg {
            variables: variables.to_vec(),
            value_selector,
            tie_breaker: RandomTieBreaker::new(Direction::Minimum, seed),
            future_arities: FnvHashMap::default(),
        }
    }

    /// The weighted degree of `variable`.
    fn weight(&mut self, context: &SelectionContext, variable: DomainId) -> u64 {
        let mut weight = 1;
        for &propagator in context.propagators_watching(variable) {
            let future_arity = *self
                .future_arities
                .entry(propagator)
                .or_insert_with(|| context.future_arity(propagator));

            if future_arity > 1 {
                weight += context.failure_count(propagator);
            }
        }
        weight
    }

    fn select_variable(&mut self, context: &SelectionContext) -> Option<DomainId> {
        self.future_arities.clear();

        for index in 0..self.variables.len() {
            let variable = self.variables[index];
            if context.is_integer_fixed(variable) {
                continue;
            }

            let ratio = DomWDegRatio {
                size: context.size(variable),
                weight: self.weight(context, variable),
            };
            self.tie_breaker.consider(variable, ratio);
        }

        self.tie_breaker.select()
    }
}

impl<ValueSelect: ValueSelector<DomainId>> Brancher for DomOverWDeg<ValueSelect> {
    fn next_decision(&mut self, context: &mut SelectionContext) -> Option<Decision> {
        let variable = self.select_variable(context)?;
        Some(self.value_selector.select_value(context, variable))
    }

    fn compute_decision(
        &mut self,
        context: &mut SelectionContext,
        variable: DomainId,
    ) -> Option<Decision> {
        if context.is_integer_fixed(variable) {
            return None;
        }
        Some(self.value_selector.select_value(context, variable))
    }

    fn on_solution(&mut self) {
        self.value_selector.on_solution();
    }
}
