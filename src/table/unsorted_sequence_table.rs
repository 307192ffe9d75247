use std::fmt::Debug;

use crate::{
    list::{ArrayList, List},
    map::SequentialMap,
};

use super::{sequence_table::SequenceTable, Table, TableError, TableItem, TableKind};

// items in insertion order, found by linear scan
pub struct UnsortedSequenceTable<K, V, L = ArrayList<TableItem<K, V>>> {
    table: SequenceTable<K, V, L>,
}

impl<K, V> UnsortedSequenceTable<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            table: SequenceTable::with_list(ArrayList::with_capacity(capacity)),
        }
    }
}

impl<K, V, L> UnsortedSequenceTable<K, V, L>
where
    K: Eq,
    L: List<TableItem<K, V>>,
{
    pub fn size(&self) -> usize {
        self.table.size()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    fn position(&self, key: &K) -> Option<usize> {
        self.table.items().position(|item| item.key() == key)
    }

    pub fn insert(&mut self, key: K, value: V) -> Result<(), TableError> {
        if self.position(&key).is_some() {
            return Err(TableError::DuplicateKey);
        }

        self.table.push(TableItem::new(key, value));
        Ok(())
    }

    pub fn lookup(&self, key: &K) -> Option<&TableItem<K, V>> {
        self.table.items().find(|item| item.key() == key)
    }

    pub fn lookup_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.position(key)?;
        self.table.value_at_mut(index)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.lookup(key).map(TableItem::value)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    /// Remove the item with the key. The last item takes its place.
    pub fn remove(&mut self, key: &K) -> Result<V, TableError> {
        match self.position(key) {
            Some(index) => Ok(self.table.swap_remove_at(index)?.into_value()),
            None => Err(TableError::KeyNotFound),
        }
    }

    pub fn clear(&mut self) {
        self.table.clear();
    }

    pub fn items(&self) -> L::Iter<'_> {
        self.table.items()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.items().map(|item| (item.key(), item.value()))
    }

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

impl<K, V, L> Default for UnsortedSequenceTable<K, V, L>
where
    L: List<TableItem<K, V>>,
{
    fn default() -> Self {
        Self {
            table: SequenceTable::new(),
        }
    }
}

impl<K, V, L: Clone> Clone for UnsortedSequenceTable<K, V, L> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.table.clone_from(&source.table);
    }
}

impl<K, V, L: PartialEq> PartialEq for UnsortedSequenceTable<K, V, L> {
    fn eq(&self, other: &Self) -> bool {
        self.table == other.table
    }
}

impl<K, V, L: Eq> Eq for UnsortedSequenceTable<K, V, L> {}

impl<K, V, L> Debug for UnsortedSequenceTable<K, V, L>
where
    K: Debug,
    V: Debug,
    L: List<TableItem<K, V>>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.table.fmt(f)
    }
}

impl<K, V, L> Table<K, V> for UnsortedSequenceTable<K, V, L>
where
    K: Eq,
    L: List<TableItem<K, V>>,
{
    fn kind(&self) -> TableKind {
        TableKind::Unsorted
    }

    fn size(&self) -> usize {
        UnsortedSequenceTable::size(self)
    }

    fn insert(&mut self, key: K, value: V) -> Result<(), TableError> {
        UnsortedSequenceTable::insert(self, key, value)
    }

    fn lookup(&self, key: &K) -> Option<&TableItem<K, V>> {
        UnsortedSequenceTable::lookup(self, key)
    }

    fn lookup_mut(&mut self, key: &K) -> Option<&mut V> {
        UnsortedSequenceTable::lookup_mut(self, key)
    }

    fn remove(&mut self, key: &K) -> Result<V, TableError> {
        UnsortedSequenceTable::remove(self, key)
    }

    fn clear(&mut self) {
        UnsortedSequenceTable::clear(self)
    }
}

impl<K, V, L> SequentialMap<K, V> for UnsortedSequenceTable<K, V, L>
where
    K: Ord + Clone,
    L: List<TableItem<K, V>>,
{
    fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, key: &K, value: V) -> Result<(), V> {
        if self.contains_key(key) {
            return Err(value);
        }

        self.table.push(TableItem::new(key.clone(), value));
        Ok(())
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn remove(&mut self, key: &K) -> Result<V, ()> {
        UnsortedSequenceTable::remove(self, key).map_err(|_| ())
    }
}
