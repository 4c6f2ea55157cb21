use std::iter::Rev;
use std::ops::Deref;
use std::vec::Drain;

use crate::cairn_assert_simple;

/// An ordered sequence of undo entries, partitioned into worlds.
///
/// World 0 is the root; entries recorded in it are never popped. Pushing a world opens a new
/// partition and popping it hands back the entries recorded since, most recent first.
#[derive(Clone, Debug)]
pub(crate) struct Trail<T> {
    current_world: usize,
    /// At index i is the position where the i-th world ends (exclusive) on the trail
    world_delimiter: Vec<usize>,
    trail: Vec<T>,
}

// We explicitly implement the Default and not as a macro, because we want to avoid imposing Default
// on the generic type T.
impl<T> Default for Trail<T> {
    fn default() -> Self {
        Trail {
            current_world: Default::default(),
            world_delimiter: Default::default(),
            trail: Default::default(),
        }
    }
}

impl<T> Trail<T> {
    pub(crate) fn push_world(&mut self) {
        self.current_world += 1;
        self.world_delimiter.push(self.trail.len());
    }

    pub(crate) fn world_index(&self) -> usize {
        self.current_world
    }

    pub(crate) fn values_in_world(&self, world: usize) -> &[T] {
        cairn_assert_simple!(world <= self.current_world);

        let start = if world == 0 {
            0
        } else {
            self.world_delimiter[world - 1]
        };

        let end = if world == self.current_world {
            self.trail.len()
        } else {
            self.world_delimiter[world]
        };

        &self.trail[start..end]
    }

    /// Removes the most recent world and returns its entries in reverse order of recording.
    pub(crate) fn pop_world(&mut self) -> Rev<Drain<'_, T>> {
        cairn_assert_simple!(self.current_world > 0, "cannot pop the root world");
        self.synchronise(self.current_world - 1)
    }

    /// Removes every world above `new_world` and returns their entries in reverse order of
    /// recording.
    pub(crate) fn synchronise(&mut self, new_world: usize) -> Rev<Drain<'_, T>> {
        cairn_assert_simple!(new_world < self.current_world);

        let new_trail_len = self.world_delimiter[new_world];

        self.current_world = new_world;
        self.world_delimiter.truncate(new_world);
        self.trail.drain(new_trail_len..).rev()
    }

    pub(crate) fn push(&mut self, elem: T) {
        self.trail.push(elem)
    }
}

impl<T> Deref for Trail<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.trail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pushed_values_are_observed_through_indexing() {
        let mut trail = Trail::default();

        let expected = [1, 2, 3, 4];
        for &elem in expected.iter() {
            trail.push(elem);
        }

        assert_eq!(&expected, trail.deref());
    }

    #[test]
    fn popping_a_world_removes_its_elements() {
        let mut trail = Trail::default();

        trail.push_world();
        trail.push(1);
        let _ = trail.pop_world();

        assert!(trail.is_empty());
        assert_eq!(trail.world_index(), 0);
    }

    #[test]
    fn synchronising_skips_several_worlds() {
        let mut trail = Trail::default();
        trail.push(1);

        trail.push_world();
        trail.push(2);
        trail.push_world();
        trail.push(3);
        trail.push_world();
        trail.push(4);

        let _ = trail.synchronise(1);

        assert_eq!(&[1, 2], trail.deref());
        assert_eq!(trail.world_index(), 1);
    }

    #[test]
    fn popped_elements_are_given_in_reverse_order_when_backtracking() {
        let mut trail = Trail::default();
        trail.push(1);

        trail.push_world();
        trail.push(2);
        trail.push_world();
        trail.push(3);
        trail.push(4);

        let popped = trail.pop_world().collect::<Vec<_>>();
        assert_eq!(vec![4, 3], popped);

        let popped = trail.pop_world().collect::<Vec<_>>();
        assert_eq!(vec![2], popped);
    }

    #[test]
    fn elements_in_current_world() {
        let mut trail = Trail::default();
        trail.push(1);
        trail.push(2);

        trail.push_world();
        trail.push(3);
        trail.push_world();
        trail.push(4);
        trail.push(5);

        assert_eq!(&[1, 2], trail.values_in_world(0));
        assert_eq!(&[3], trail.values_in_world(1));
        assert_eq!(&[4, 5], trail.values_in_world(2));
    }

    #[test]
    fn empty_worlds_are_tracked() {
        let mut trail: Trail<i32> = Trail::default();

        trail.push_world();
        trail.push_world();
        assert_eq!(trail.world_index(), 2);

        assert_eq!(trail.pop_world().count(), 0);
        assert_eq!(trail.world_index(), 1);
    }
}
