use std::cmp::max;
use std::cmp::min;

use crate::cairn_assert_moderate;
use crate::cairn_assert_simple;

const WORD_SIZE: usize = u64::BITS as usize;

/// A domain which stores one bit per value of its initial range.
///
/// Bits outside of `[lower_bound, upper_bound]` are meaningless; moving a bound does not clear
/// them. Only values strictly inside the bounds are removed by clearing their bit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct BitSetDomain {
    /// The value which corresponds to bit 0
    offset: i32,
    words: Vec<u64>,
    lower_bound: i32,
    upper_bound: i32,
    size: u64,
}

impl BitSetDomain {
    /// Create a domain containing exactly `values`; duplicates are ignored.
    pub(crate) fn new(values: &[i32]) -> Self {
        cairn_assert_simple!(!values.is_empty(), "a bitset domain needs at least one value");

        let lower_bound = values.iter().copied().min().unwrap_or_default();
        let upper_bound = values.iter().copied().max().unwrap_or_default();
        let num_bits = (upper_bound as i64 - lower_bound as i64 + 1) as usize;

        let mut domain = BitSetDomain {
            offset: lower_bound,
            words: vec![0; num_bits.div_ceil(WORD_SIZE)],
            lower_bound,
            upper_bound,
            size: 0,
        };

        for &value in values {
            let index = domain.index_of(value);
            domain.words[index / WORD_SIZE] |= 1_u64 << (index % WORD_SIZE);
        }
        domain.size = domain.count_between(lower_bound, upper_bound);

        domain
    }

    fn index_of(&self, value: i32) -> usize {
        (value as i64 - self.offset as i64) as usize
    }

    fn value_of(&self, index: usize) -> i32 {
        (self.offset as i64 + index as i64) as i32
    }

    fn is_set(&self, index: usize) -> bool {
        (self.words[index / WORD_SIZE] >> (index % WORD_SIZE)) & 1 == 1
    }

    pub(crate) fn lower_bound(&self) -> i32 {
        self.lower_bound
    }

    pub(crate) fn upper_bound(&self) -> i32 {
        self.upper_bound
    }

    pub(crate) fn size(&self) -> u64 {
        self.size
    }

    pub(crate) fn contains(&self, value: i32) -> bool {
        self.lower_bound <= value && value <= self.upper_bound && self.is_set(self.index_of(value))
    }

    /// The smallest value in the domain which is at least `value`.
    pub(crate) fn first_value_at_least(&self, value: i32) -> Option<i32> {
        if value > self.upper_bound {
            return None;
        }

        let start = self.index_of(max(value, self.lower_bound));
        let end = self.index_of(self.upper_bound);

        let mut word_index = start / WORD_SIZE;
        let mut word = self.words[word_index] & (u64::MAX << (start % WORD_SIZE));
        loop {
            if word != 0 {
                let index = word_index * WORD_SIZE + word.trailing_zeros() as usize;
                return (index <= end).then(|| self.value_of(index));
            }

            word_index += 1;
            if word_index * WORD_SIZE > end {
                return None;
            }
            word = self.words[word_index];
        }
    }

    /// The largest value in the domain which is at most `value`.
    pub(crate) fn last_value_at_most(&self, value: i32) -> Option<i32> {
        if value < self.lower_bound {
            return None;
        }

        let start = self.index_of(self.lower_bound);
        let end = self.index_of(min(value, self.upper_bound));

        let mut word_index = end / WORD_SIZE;
        let mut word = self.words[word_index] & (u64::MAX >> (WORD_SIZE - 1 - end % WORD_SIZE));
        loop {
            if word != 0 {
                let index = word_index * WORD_SIZE + (WORD_SIZE - 1 - word.leading_zeros() as usize);
                return (index >= start).then(|| self.value_of(index));
            }

            if word_index * WORD_SIZE <= start {
                return None;
            }
            word_index -= 1;
            word = self.words[word_index];
        }
    }

    /// Counts the set bits for the values in `[from, to]`.
    fn count_between(&self, from: i32, to: i32) -> u64 {
        let start = self.index_of(from);
        let end = self.index_of(to);

        let first_word = start / WORD_SIZE;
        let last_word = end / WORD_SIZE;
        let first_mask = u64::MAX << (start % WORD_SIZE);
        let last_mask = u64::MAX >> (WORD_SIZE - 1 - end % WORD_SIZE);

        if first_word == last_word {
            return (self.words[first_word] & first_mask & last_mask).count_ones() as u64;
        }

        let inner = self.words[first_word + 1..last_word]
            .iter()
            .map(|word| word.count_ones() as u64)
            .sum::<u64>();

        (self.words[first_word] & first_mask).count_ones() as u64
            + inner
            + (self.words[last_word] & last_mask).count_ones() as u64
    }

    /// Moves both bounds; both new bounds have to be values of the domain.
    pub(crate) fn set_bounds(&mut self, lower_bound: i32, upper_bound: i32) {
        cairn_assert_moderate!(lower_bound <= upper_bound);
        cairn_assert_moderate!(self.is_set(self.index_of(lower_bound)));
        cairn_assert_moderate!(self.is_set(self.index_of(upper_bound)));

        self.lower_bound = lower_bound;
        self.upper_bound = upper_bound;
        self.size = self.count_between(lower_bound, upper_bound);
    }

    /// Removes a value strictly between the bounds.
    pub(crate) fn remove_interior(&mut self, value: i32) {
        cairn_assert_moderate!(self.lower_bound < value && value < self.upper_bound);
        cairn_assert_moderate!(self.contains(value));

        let index = self.index_of(value);
        self.words[index / WORD_SIZE] &= !(1_u64 << (index % WORD_SIZE));
        self.size -= 1;
    }

    /// Puts back a value which was removed by [`BitSetDomain::remove_interior`].
    pub(crate) fn reinsert(&mut self, value: i32) {
        let index = self.index_of(value);
        cairn_assert_moderate!(!self.is_set(index));

        self.words[index / WORD_SIZE] |= 1_u64 << (index % WORD_SIZE);
        self.size += 1;
    }

    pub(crate) fn restore(&mut self, lower_bound: i32, upper_bound: i32, size: u64) {
        self.lower_bound = lower_bound;
        self.upper_bound = upper_bound;
        self.size = size;
    }
}
