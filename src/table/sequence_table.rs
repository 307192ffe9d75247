use std::{fmt::Debug, marker::PhantomData};

use crate::list::List;

use super::{TableError, TableItem};

/// Table items kept in a list, in the order the owning table decides.
///
/// The owning table is responsible for the key invariants, so everything that
/// moves items around is only visible inside the crate.
pub(crate) struct SequenceTable<K, V, L> {
    list: L,
    _marker: PhantomData<TableItem<K, V>>,
}

impl<K, V, L> SequenceTable<K, V, L>
where
    L: List<TableItem<K, V>>,
{
    pub(crate) fn new() -> Self {
        Self::with_list(L::new())
    }

    pub(crate) fn with_list(list: L) -> Self {
        Self {
            list,
            _marker: PhantomData,
        }
    }

    pub(crate) fn size(&self) -> usize {
        self.list.size()
    }

    pub(crate) fn item_at(&self, index: usize) -> Option<&TableItem<K, V>> {
        self.list.at(index)
    }

    pub(crate) fn value_at_mut(&mut self, index: usize) -> Option<&mut V> {
        self.list.at_mut(index).map(TableItem::value_mut)
    }

    pub(crate) fn insert_at(&mut self, index: usize, item: TableItem<K, V>) -> Result<(), TableError> {
        Ok(self.list.insert(item, index)?)
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> Result<TableItem<K, V>, TableError> {
        Ok(self.list.remove_at(index)?)
    }

    pub(crate) fn swap_remove_at(&mut self, index: usize) -> Result<TableItem<K, V>, TableError> {
        Ok(self.list.swap_remove(index)?)
    }

    pub(crate) fn push(&mut self, item: TableItem<K, V>) {
        self.list.push(item);
    }

    pub(crate) fn clear(&mut self) {
        self.list.clear();
    }

    pub(crate) fn items(&self) -> L::Iter<'_> {
        self.list.iter()
    }
}

impl<K, V, L: Clone> Clone for SequenceTable<K, V, L> {
    fn clone(&self) -> Self {
        Self {
            list: self.list.clone(),
            _marker: PhantomData,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.list.clone_from(&source.list);
    }
}

impl<K, V, L: PartialEq> PartialEq for SequenceTable<K, V, L> {
    fn eq(&self, other: &Self) -> bool {
        self.list == other.list
    }
}

impl<K, V, L: Eq> Eq for SequenceTable<K, V, L> {}

impl<K, V, L> Debug for SequenceTable<K, V, L>
where
    K: Debug,
    V: Debug,
    L: List<TableItem<K, V>>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.items().map(|item| (item.key(), item.value())))
            .finish()
    }
}
