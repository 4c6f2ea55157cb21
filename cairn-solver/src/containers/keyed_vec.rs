use std::marker::PhantomData;
use std::ops::Index;
use std::ops::IndexMut;

/// A [`Vec`] which can only be indexed by `Key`, so that the ids of different arenas (domains,
/// propagators, trailed integers) cannot be mixed up.
#[derive(Debug, Hash, PartialEq, Eq)]
pub struct KeyedVec<Key, Value> {
    elements: Vec<Value>,
    key: PhantomData<Key>,
}

/// An id which is a position in a [`KeyedVec`].
pub trait StorageKey {
    fn index(&self) -> usize;

    fn create_from_index(index: usize) -> Self;
}

impl StorageKey for usize {
    fn index(&self) -> usize {
        *self
    }

    fn create_from_index(index: usize) -> Self {
        index
    }
}

// Derives would require `Key: Clone` and `Key: Default`.
impl<Key, Value: Clone> Clone for KeyedVec<Key, Value> {
    fn clone(&self) -> Self {
        KeyedVec {
            elements: self.elements.clone(),
            key: PhantomData,
        }
    }
}

impl<Key, Value> Default for KeyedVec<Key, Value> {
    fn default() -> Self {
        KeyedVec {
            elements: Vec::new(),
            key: PhantomData,
        }
    }
}

impl<Key: StorageKey, Value> KeyedVec<Key, Value> {
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Stores `value` and returns the key under which it is stored.
    pub fn push(&mut self, value: Value) -> Key {
        let key = Key::create_from_index(self.elements.len());
        self.elements.push(value);
        key
    }

    pub fn get(&self, key: Key) -> Option<&Value> {
        self.elements.get(key.index())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.elements.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Value> {
        self.elements.iter_mut()
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = Key> {
        (0..self.elements.len()).map(Key::create_from_index)
    }
}

impl<Key: StorageKey, Value: Clone> KeyedVec<Key, Value> {
    /// Grows the vector with copies of `filler` until `key` is a valid index.
    pub(crate) fn accommodate(&mut self, key: Key, filler: Value) {
        let required = key.index() + 1;
        if self.elements.len() < required {
            self.elements.resize(required, filler);
        }
    }
}

impl<Key: StorageKey, Value> Index<Key> for KeyedVec<Key, Value> {
    type Output = Value;

    fn index(&self, key: Key) -> &Value {
        &self.elements[key.index()]
    }
}

impl<Key: StorageKey, Value> Index<&Key> for KeyedVec<Key, Value> {
    type Output = Value;

    fn index(&self, key: &Key) -> &Value {
        &self.elements[key.index()]
    }
}

impl<Key: StorageKey, Value> IndexMut<Key> for KeyedVec<Key, Value> {
    fn index_mut(&mut self, key: Key) -> &mut Value {
        &mut self.elements[key.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pushed_values_are_found_under_their_key() {
        let mut vec: KeyedVec<usize, &str> = KeyedVec::default();
        let first = vec.push("first");
        let second = vec.push("second");

        assert_eq!((0, 1), (first, second));
        assert_eq!("second", vec[second]);
        assert_eq!(None, vec.get(2));
    }

    #[test]
    fn accommodate_fills_missing_slots() {
        let mut vec: KeyedVec<usize, u32> = KeyedVec::default();
        let _ = vec.push(7);

        vec.accommodate(3, 0);
        vec.accommodate(1, 9);

        assert_eq!(vec![7, 0, 0, 0], vec.iter().copied().collect::<Vec<_>>());
    }
}
