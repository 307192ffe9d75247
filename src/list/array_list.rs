use std::slice;

use super::{List, ListError};

// contiguous list backed by Vec
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayList<T> {
    items: Vec<T>,
}

impl<T> ArrayList<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T> List<T> for ArrayList<T> {
    type Iter<'a> = slice::Iter<'a, T> where T: 'a;

    fn new() -> Self {
        Self::default()
    }

    fn size(&self) -> usize {
        self.items.len()
    }

    fn at(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    fn at_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    fn insert(&mut self, item: T, index: usize) -> Result<(), ListError> {
        if index > self.items.len() {
            return Err(ListError::IndexOutOfRange {
                index,
                size: self.items.len(),
            });
        }

        self.items.insert(index, item);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        if index >= self.items.len() {
            return Err(ListError::IndexOutOfRange {
                index,
                size: self.items.len(),
            });
        }

        Ok(self.items.remove(index))
    }

    fn swap_remove(&mut self, index: usize) -> Result<T, ListError> {
        if index >= self.items.len() {
            return Err(ListError::IndexOutOfRange {
                index,
                size: self.items.len(),
            });
        }

        Ok(self.items.swap_remove(index))
    }

    fn push(&mut self, item: T) {
        self.items.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn clear(&mut self) {
        self.items.clear();
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.items.iter()
    }
}
