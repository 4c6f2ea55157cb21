use std::cmp::Ordering;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use super::Direction;
use super::TieBreaker;
use crate::basic_types::Random;

/// A tie breaker which selects the variable with the "best" value (according to the [`Direction`]),
/// if there is a tie then it selects one of the variables part of this tie with equal
/// probability.
///
/// All tied variables are collected and one of them is drawn when [`TieBreaker::select`] is
/// called, using a generator seeded at construction; the same seed and the same sequence of
/// considered variables thus always give the same selection.
#[derive(Debug)]
pub struct RandomTieBreaker<Var, Value> {
    /// The variables which share the best value seen so far.
    ties: Vec<Var>,
    best_value: Option<Value>,
    rng: SmallRng,
    direction: Direction,
}

impl<Var, Value> RandomTieBreaker<Var, Value> {
    pub fn new(direction: Direction, seed: u64) -> Self {
        Self {
            ties: vec![],
            best_value: None,
            rng: SmallRng::seed_from_u64(seed),
            direction,
        }
    }
}

impl<Var: Copy, Value: PartialOrd> TieBreaker<Var, Value> for RandomTieBreaker<Var, Value> {
    fn consider(&mut self, variable: Var, value: Value) {
        let ordering = match &self.best_value {
            Some(best_value) => self.direction.rank(&value, best_value),
            None => Ordering::Greater,
        };

        match ordering {
            Ordering::Greater => {
                self.ties.clear();
                self.ties.push(variable);
                self.best_value = Some(value);
            }
            Ordering::Equal => self.ties.push(variable),
            Ordering::Less => {}
        }
    }

    fn select(&mut self) -> Option<Var> {
        self.best_value = None;
        if self.ties.is_empty() {
            return None;
        }

        let index = self.rng.generate_usize_in_range(0..self.ties.len());
        let selected = self.ties[index];
        self.ties.clear();

        Some(selected)
    }

    fn get_direction(&self) -> Direction {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::variables::DomainId;

    #[test]
    fn only_tied_variables_are_selected() {
        let mut breaker = RandomTieBreaker::new(Direction::Minimum, 7);

        for _ in 0..20 {
            breaker.consider(DomainId::new(0), 3);
            breaker.consider(DomainId::new(1), 1);
            breaker.consider(DomainId::new(2), 1);

            let selected = breaker.select().expect("variables were considered");
            assert!(selected == DomainId::new(1) || selected == DomainId::new(2));
        }
    }

    #[test]
    fn same_seed_gives_same_selections() {
        let selections = |seed| {
            let mut breaker = RandomTieBreaker::new(Direction::Maximum, seed);
            (0..10)
                .map(|_| {
                    for id in 0..5 {
                        breaker.consider(DomainId::new(id), 0);
                    }
                    breaker.select()
                })
                .collect::<Vec<_>>()
        };

        assert_eq!(selections(3), selections(3));
    }
}
