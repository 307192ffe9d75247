mod any_table;
mod error;
mod item;
mod sequence_table;
mod sorted_sequence_table;
mod unsorted_sequence_table;

pub use any_table::AnyTable;
pub use error::TableError;
pub use item::TableItem;
pub use sorted_sequence_table::SortedSequenceTable;
pub use unsorted_sequence_table::UnsortedSequenceTable;

use std::fmt;

/// Concrete kinds of tables, used to report mismatches between tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Sorted,
    Unsorted,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKind::Sorted => write!(f, "SortedSequenceTable"),
            TableKind::Unsorted => write!(f, "UnsortedSequenceTable"),
        }
    }
}

/// Associative container with unique keys.
pub trait Table<K, V> {
    fn kind(&self) -> TableKind;

    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Insert (key, value) into the table.
    ///
    /// If the key is already in the table, return Err(DuplicateKey) and leave
    /// the table as it was.
    fn insert(&mut self, key: K, value: V) -> Result<(), TableError>;

    /// Find the item with the key. Not finding it is not an error.
    fn lookup(&self, key: &K) -> Option<&TableItem<K, V>>;

    /// Find the value with the key for in-place update.
    fn lookup_mut(&mut self, key: &K) -> Option<&mut V>;

    /// Remove the item with the key, returning its value.
    ///
    /// If the key is not in the table, return Err(KeyNotFound).
    fn remove(&mut self, key: &K) -> Result<V, TableError>;

    fn get<'a>(&'a self, key: &K) -> Option<&'a V>
    where
        K: 'a,
    {
        self.lookup(key).map(TableItem::value)
    }

    fn contains_key(&self, key: &K) -> bool {
        self.lookup(key).is_some()
    }

    fn clear(&mut self);
}
