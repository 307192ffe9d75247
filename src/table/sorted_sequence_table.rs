use std::{cmp::Ordering, fmt::Debug};

use crate::{
    list::{ArrayList, List},
    map::SequentialMap,
};

use super::{sequence_table::SequenceTable, Table, TableError, TableItem, TableKind};

/// Table whose items are kept in strictly ascending key order, so keys are
/// found by bisection.
///
/// The items live in `L`, an `ArrayList` unless another list is given.
pub struct SortedSequenceTable<K, V, L = ArrayList<TableItem<K, V>>> {
    table: SequenceTable<K, V, L>,
}

impl<K, V> SortedSequenceTable<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: SequenceTable::with_list(ArrayList::with_capacity(capacity)),
        }
    }
}

impl<K, V, L> SortedSequenceTable<K, V, L>
where
    K: Ord,
    L: List<TableItem<K, V>>,
{
    pub fn size(&self) -> usize {
        self.table.size()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Search the key over the whole table.
    ///
    /// Returns Ok(index) of the item with the key, or Err(index) where an item
    /// with the key should be inserted to keep the order.
    pub fn search(&self, key: &K) -> Result<usize, usize> {
        self.search_range(key, 0, self.size())
    }

    /// Search the key in [start, end) by bisection.
    ///
    /// If the key is not found, the returned insertion point is the first
    /// index in the range whose key is greater than the key, or `end`.
    ///
    /// # Panics
    /// Panics if `start > end` or `end > size`.
    pub fn search_range(&self, key: &K, start: usize, end: usize) -> Result<usize, usize> {
        assert!(
            start <= end && end <= self.size(),
            "invalid search range [{}, {}) on table of size {}",
            start,
            end,
            self.size()
        );

        let (mut start, mut end) = (start, end);

        while start < end {
            let mid = start + (end - start) / 2;

            let item = match self.table.item_at(mid) {
                Some(item) => item,
                None => unreachable!("{} is in [{}, {}) but has no item", mid, start, end),
            };

            match key.cmp(item.key()) {
                Ordering::Equal => return Ok(mid),
                Ordering::Less => end = mid,
                Ordering::Greater => start = mid + 1,
            }
        }

        Err(start)
    }

    pub fn insert(&mut self, key: K, value: V) -> Result<(), TableError> {
        match self.search(&key) {
            Ok(_) => Err(TableError::DuplicateKey),
            Err(index) => self.table.insert_at(index, TableItem::new(key, value)),
        }
    }

    pub fn lookup(&self, key: &K) -> Option<&TableItem<K, V>> {
        match self.search(key) {
            Ok(index) => self.table.item_at(index),
            Err(_) => None,
        }
    }

    pub fn lookup_mut(&mut self, key: &K) -> Option<&mut V> {
        match self.search(key) {
            Ok(index) => self.table.value_at_mut(index),
            Err(_) => None,
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.lookup(key).map(TableItem::value)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.search(key).is_ok()
    }

    pub fn remove(&mut self, key: &K) -> Result<V, TableError> {
        match self.search(key) {
            Ok(index) => Ok(self.table.remove_at(index)?.into_value()),
            Err(_) => Err(TableError::KeyNotFound),
        }
    }

    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Items in ascending key order.
    pub fn items(&self) -> L::Iter<'_> {
        self.table.items()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.items().map(|item| (item.key(), item.value()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.items().map(TableItem::key)
    }

    /// Replace the whole content with an owned copy of `other`.
    pub fn assign(&mut self, other: &Self)
    where
        L: Clone,
    {
        self.table.clone_from(&other.table);
    }

    pub fn equals(&self, other: &Self) -> bool
    where
        L: PartialEq,
    {
        self.table == other.table
    }
}

impl<K, V, L> Default for SortedSequenceTable<K, V, L>
where
    L: List<TableItem<K, V>>,
{
    fn default() -> Self {
        Self {
            table: SequenceTable::new(),
        }
    }
}

impl<K, V, L: Clone> Clone for SortedSequenceTable<K, V, L> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.table.clone_from(&source.table);
    }
}

impl<K, V, L: PartialEq> PartialEq for SortedSequenceTable<K, V, L> {
    fn eq(&self, other: &Self) -> bool {
        self.table == other.table
    }
}

impl<K, V, L: Eq> Eq for SortedSequenceTable<K, V, L> {}

impl<K, V, L> Debug for SortedSequenceTable<K, V, L>
where
    K: Debug,
    V: Debug,
    L: List<TableItem<K, V>>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.table.fmt(f)
    }
}

impl<K, V, L> Table<K, V> for SortedSequenceTable<K, V, L>
where
    K: Ord,
    L: List<TableItem<K, V>>,
{
    fn kind(&self) -> TableKind {
        TableKind::Sorted
    }

    fn size(&self) -> usize {
        SortedSequenceTable::size(self)
    }

    fn insert(&mut self, key: K, value: V) -> Result<(), TableError> {
        SortedSequenceTable::insert(self, key, value)
    }

    fn lookup(&self, key: &K) -> Option<&TableItem<K, V>> {
        SortedSequenceTable::lookup(self, key)
    }

    fn lookup_mut(&mut self, key: &K) -> Option<&mut V> {
        SortedSequenceTable::lookup_mut(self, key)
    }

    fn remove(&mut self, key: &K) -> Result<V, TableError> {
        SortedSequenceTable::remove(self, key)
    }

    fn contains_key(&self, key: &K) -> bool {
        SortedSequenceTable::contains_key(self, key)
    }

    fn clear(&mut self) {
        SortedSequenceTable::clear(self)
    }
}

impl<K, V, L> SequentialMap<K, V> for SortedSequenceTable<K, V, L>
where
    K: Ord + Clone,
    L: List<TableItem<K, V>>,
{
    fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, key: &K, value: V) -> Result<(), V> {
        match self.search(key) {
            Ok(_) => Err(value),
            Err(index) => {
                if let Err(e) = self.table.insert_at(index, TableItem::new(key.clone(), value)) {
                    unreachable!("insertion point {} is out of the table: {}", index, e);
                }

                Ok(())
            }
        }
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn remove(&mut self, key: &K) -> Result<V, ()> {
        SortedSequenceTable::remove(self, key).map_err(|_| ())
    }
}
