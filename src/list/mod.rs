mod array_list;
mod linked_list;

pub use array_list::ArrayList;
pub use linked_list::LinkedList;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    #[error("index {index} is out of range for list of size {size}")]
    IndexOutOfRange { index: usize, size: usize },
}

/// Index-addressable sequence with positional insert and remove.
pub trait List<T> {
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    fn new() -> Self;

    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Get the item at the index.
    ///
    /// If the index is out of [0, size), return None.
    fn at(&self, index: usize) -> Option<&T>;

    fn at_mut(&mut self, index: usize) -> Option<&mut T>;

    /// Insert the item at the index, shifting later items right by one.
    ///
    /// The index should be in [0, size].
    fn insert(&mut self, item: T, index: usize) -> Result<(), ListError>;

    /// Remove the item at the index, shifting later items left by one.
    fn remove_at(&mut self, index: usize) -> Result<T, ListError>;

    /// Remove the item at the index, moving the last item into its place.
    fn swap_remove(&mut self, index: usize) -> Result<T, ListError>;

    fn push(&mut self, item: T) {
        let size = self.size();

        if let Err(e) = self.insert(item, size) {
            unreachable!("inserting at the end of the list failed: {}", e);
        }
    }

    fn pop(&mut self) -> Option<T> {
        match self.size() {
            0 => None,
            size => self.remove_at(size - 1).ok(),
        }
    }

    fn clear(&mut self);

    fn iter(&self) -> Self::Iter<'_>;
}
