use super::{
    SortedSequenceTable, Table, TableError, TableItem, TableKind, UnsortedSequenceTable,
};

/// One of the concrete table kinds, for code that picks the kind at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyTable<K, V> {
    Sorted(SortedSequenceTable<K, V>),
    Unsorted(UnsortedSequenceTable<K, V>),
}

impl<K: Ord, V> AnyTable<K, V> {
    pub fn new(kind: TableKind) -> Self {
        match kind {
            TableKind::Sorted => AnyTable::Sorted(SortedSequenceTable::new()),
            TableKind::Unsorted => AnyTable::Unsorted(UnsortedSequenceTable::new()),
        }
    }

    /// Replace the whole content with an owned copy of `other`.
    ///
    /// Both tables should be of the same kind, or Err(TypeMismatch) is
    /// returned and this table is not changed.
    pub fn assign(&mut self, other: &AnyTable<K, V>) -> Result<(), TableError>
    where
        K: Clone,
        V: Clone,
    {
        match (self, other) {
            (AnyTable::Sorted(this), AnyTable::Sorted(other)) => this.assign(other),
            (AnyTable::Unsorted(this), AnyTable::Unsorted(other)) => this.assign(other),
            (this, other) => {
                return Err(TableError::TypeMismatch {
                    expected: this.kind(),
                    found: other.kind(),
                })
            }
        }

        Ok(())
    }

    /// True if both tables are of the same kind and have the same items in
    /// the same order.
    pub fn equals(&self, other: &AnyTable<K, V>) -> bool
    where
        V: PartialEq,
    {
        match (self, other) {
            (AnyTable::Sorted(this), AnyTable::Sorted(other)) => this.equals(other),
            (AnyTable::Unsorted(this), AnyTable::Unsorted(other)) => this.equals(other),
            _ => false,
        }
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        match self {
            AnyTable::Sorted(table) => Box::new(table.iter()),
            AnyTable::Unsorted(table) => Box::new(table.iter()),
        }
    }

    fn as_table(&self) -> &dyn Table<K, V> {
        match self {
            AnyTable::Sorted(table) => table,
            AnyTable::Unsorted(table) => table,
        }
    }

    fn as_table_mut(&mut self) -> &mut dyn Table<K, V> {
        match self {
            AnyTable::Sorted(table) => table,
            AnyTable::Unsorted(table) => table,
        }
    }
}

impl<K: Ord, V> Table<K, V> for AnyTable<K, V> {
    fn kind(&self) -> TableKind {
        match self {
            AnyTable::Sorted(_) => TableKind::Sorted,
            AnyTable::Unsorted(_) => TableKind::Unsorted,
        }
    }

    fn size(&self) -> usize {
        self.as_table().size()
    }

    fn insert(&mut self, key: K, value: V) -> Result<(), TableError> {
        self.as_table_mut().insert(key, value)
    }

    fn lookup(&self, key: &K) -> Option<&TableItem<K, V>> {
        self.as_table().lookup(key)
    }

    fn lookup_mut(&mut self, key: &K) -> Option<&mut V> {
        self.as_table_mut().lookup_mut(key)
    }

    fn remove(&mut self, key: &K) -> Result<V, TableError> {
        self.as_table_mut().remove(key)
    }

    fn clear(&mut self) {
        self.as_table_mut().clear()
    }
}

impl<K, V> From<SortedSequenceTable<K, V>> for AnyTable<K, V> {
    fn from(table: SortedSequenceTable<K, V>) -> Self {
        AnyTable::Sorted(table)
    }
}

impl<K, V> From<UnsortedSequenceTable<K, V>> for AnyTable<K, V> {
    fn from(table: UnsortedSequenceTable<K, V>) -> Self {
        AnyTable::Unsorted(table)
    }
}
