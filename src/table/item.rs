/// An owned (key, value) entry of a table.
///
/// The key can not be changed after the item is created, so a table can hand
/// out mutable access to the value without breaking its key order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableItem<K, V> {
    key: K,
    value: V,
}

impl<K, V> TableItem<K, V> {
    pub fn new(key: K, value: V) -> TableItem<K, V> {
        TableItem { key, value }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }

    pub fn into_value(self) -> V {
        self.value
    }
}

impl<K, V> From<(K, V)> for TableItem<K, V> {
    fn from((key, value): (K, V)) -> Self {
        TableItem::new(key, value)
    }
}
