use std::fmt::Debug;
use std::ops::Range;

use rand::Rng;
use rand::SeedableRng;

use crate::cairn_assert_moderate;

/// The source of randomness of the branchers.
///
/// Every seeded generator of the `rand` crate implements it; unit tests replace it by a generator
/// which replays a fixed sequence of values.
pub trait Random: Debug {
    /// `true` with the given probability, which has to lie in `[0, 1]`.
    ///
    /// # Example
    /// ```rust
    /// # use rand::rngs::SmallRng;
    /// # use rand::SeedableRng;
    /// # use cairn_solver::Random;
    /// let mut rng = SmallRng::seed_from_u64(42);
    /// assert!(rng.generate_bool(1.0));
    /// assert!(!rng.generate_bool(0.0));
    /// ```
    fn generate_bool(&mut self, probability: f64) -> bool;

    /// A uniformly drawn index in `range`, which may not be empty.
    ///
    /// # Example
    /// ```rust
    /// # use rand::rngs::SmallRng;
    /// # use rand::SeedableRng;
    /// # use cairn_solver::Random;
    /// let mut rng = SmallRng::seed_from_u64(42);
    /// let values = [3, 1, 4, 1, 5];
    /// let index = rng.generate_usize_in_range(0..values.len());
    /// assert!(index < values.len());
    /// ```
    fn generate_usize_in_range(&mut self, range: Range<usize>) -> usize;
}

impl<T> Random for T
where
    T: SeedableRng + Rng + Debug,
{
    fn generate_bool(&mut self, probability: f64) -> bool {
        cairn_assert_moderate!(
            (0.0..=1.0).contains(&probability),
            "{probability} is not a probability"
        );

        self.gen_bool(probability)
    }

    fn generate_usize_in_range(&mut self, range: Range<usize>) -> usize {
        self.gen_range(range)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::ops::Range;

    use super::Random;

    /// Replays the given values in order; generating more values than provided panics.
    #[derive(Debug, Default)]
    pub(crate) struct TestRandom {
        pub(crate) usizes: Vec<usize>,
        pub(crate) bools: Vec<bool>,
    }

    impl Random for TestRandom {
        fn generate_bool(&mut self, _probability: f64) -> bool {
            self.bools.remove(0)
        }

        fn generate_usize_in_range(&mut self, range: Range<usize>) -> usize {
            let selected = self.usizes.remove(0);
            assert!(
                range.contains(&selected),
                "the replayed index {selected} lies outside of {range:?}"
            );
            selected
        }
    }
}
