use crate::containers::StorageKey;

/// Handle to an `i64` stored in the [`Environment`](crate::engine::cp::Environment) which is
/// restored when a world is popped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrailedInteger {
    id: u32,
}

impl StorageKey for TrailedInteger {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        Self { id: index as u32 }
    }
}
