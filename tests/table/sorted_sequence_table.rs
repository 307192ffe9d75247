use proptest::prelude::*;
use rand::{prelude::SliceRandom, thread_rng};
use structures::{
    list::LinkedList,
    table::{SortedSequenceTable, Table, TableError, TableItem, TableKind},
};

use crate::util::map::stress_sequential;

fn keys<K: Ord + Clone, V>(table: &SortedSequenceTable<K, V>) -> Vec<K> {
    table.keys().cloned().collect()
}

#[test]
fn test_insert_lookup_sorted_table() {
    let mut table: SortedSequenceTable<i32, &str> = SortedSequenceTable::new();

    assert_eq!(table.insert(5, "five"), Ok(()));
    assert_eq!(table.insert(1, "one"), Ok(()));
    assert_eq!(table.insert(3, "three"), Ok(()));
    assert_eq!(keys(&table), vec![1, 3, 5]);

    // duplicated key does not change anything
    assert_eq!(table.insert(3, "another"), Err(TableError::DuplicateKey));
    assert_eq!(keys(&table), vec![1, 3, 5]);
    assert_eq!(table.size(), 3);

    let item = table.lookup(&3).unwrap();
    assert_eq!(item.key(), &3);
    assert_eq!(item.value(), &"three");

    assert_eq!(table.lookup(&4), None);
    assert_eq!(table.get(&5), Some(&"five"));
    assert!(table.contains_key(&1));
    assert!(!table.contains_key(&0));
}

#[test]
fn test_empty_sorted_table() {
    let table: SortedSequenceTable<i32, i32> = SortedSequenceTable::default();

    assert!(table.is_empty());
    assert_eq!(table.lookup(&0), None);
    assert_eq!(table.lookup(&i32::MAX), None);
    assert_eq!(table.search(&42), Err(0));
    assert_eq!(table.search_range(&42, 0, 0), Err(0));
}

#[test]
fn test_search_sorted_table() {
    let mut table = SortedSequenceTable::new();

    for i in 1..=64 {
        assert_eq!(table.insert(i * 2, i), Ok(()));
    }

    assert_eq!(table.search(&1), Err(0));
    assert_eq!(table.search(&2), Ok(0));
    assert_eq!(table.search(&3), Err(1));
    assert_eq!(table.search(&4), Ok(1));
    assert_eq!(table.search(&128), Ok(63));
    assert_eq!(table.search(&129), Err(64));

    // restricted ranges
    assert_eq!(table.search_range(&2, 1, 10), Err(1));
    assert_eq!(table.search_range(&20, 1, 10), Ok(9));
    assert_eq!(table.search_range(&22, 1, 10), Err(10));
    assert_eq!(table.search_range(&22, 10, 10), Err(10));
}

#[test]
#[should_panic]
fn test_search_out_of_range() {
    let mut table = SortedSequenceTable::new();
    table.insert(1, 1).unwrap();

    let _ = table.search_range(&1, 0, 2);
}

#[test]
fn test_sorted_table_stays_sorted() {
    let mut rng = thread_rng();
    let mut inserted: Vec<u64> = (0..4096).collect();
    inserted.shuffle(&mut rng);

    let mut table = SortedSequenceTable::new();

    for (i, key) in inserted.iter().enumerate() {
        assert_eq!(table.insert(*key, *key), Ok(()));
        assert_eq!(table.size(), i + 1);

        let keys = keys(&table);
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }

    for key in &inserted {
        assert_eq!(table.insert(*key, 0), Err(TableError::DuplicateKey));
        assert_eq!(table.get(key), Some(key));
    }

    assert_eq!(keys(&table), (0..4096).collect::<Vec<_>>());
}

#[test]
fn test_update_remove_sorted_table() {
    let mut table = SortedSequenceTable::new();

    for i in 0..10 {
        table.insert(i, i * 10).unwrap();
    }

    *table.lookup_mut(&4).unwrap() += 1;
    assert_eq!(table.get(&4), Some(&41));
    assert_eq!(table.lookup_mut(&10), None);

    assert_eq!(table.remove(&4), Ok(41));
    assert_eq!(table.remove(&4), Err(TableError::KeyNotFound));
    assert_eq!(table.size(), 9);
    assert_eq!(keys(&table), vec![0, 1, 2, 3, 5, 6, 7, 8, 9]);

    table.clear();
    assert!(table.is_empty());
    assert_eq!(table.insert(4, 4), Ok(()));
}

#[test]
fn test_assign_equals_sorted_table() {
    let mut table = SortedSequenceTable::new();
    for key in ["c", "a", "b"] {
        table.insert(key.to_string(), key.len()).unwrap();
    }

    let mut copied = SortedSequenceTable::new();
    copied.insert("z".to_string(), 26).unwrap();
    assert!(!copied.equals(&table));

    copied.assign(&table);
    assert!(copied.equals(&table));
    assert_eq!(copied, table);

    // the copy owns its items
    copied.insert("d".to_string(), 1).unwrap();
    *copied.lookup_mut(&"a".to_string()).unwrap() = 100;

    assert_eq!(table.size(), 3);
    assert_eq!(table.get(&"a".to_string()), Some(&1));
    assert!(!copied.equals(&table));

    let cloned = table.clone();
    assert!(cloned.equals(&table));
}

#[test]
fn test_sorted_table_as_table() {
    let mut table: Box<dyn Table<i32, i32>> = Box::new(SortedSequenceTable::new());

    assert_eq!(table.kind(), TableKind::Sorted);
    assert_eq!(table.insert(2, 2), Ok(()));
    assert_eq!(table.insert(1, 1), Ok(()));
    assert_eq!(table.insert(2, 3), Err(TableError::DuplicateKey));
    assert_eq!(table.lookup(&1), Some(&TableItem::new(1, 1)));
    assert_eq!(table.get(&2), Some(&2));
    assert_eq!(table.remove(&1), Ok(1));
    assert_eq!(table.size(), 1);
}

#[test]
fn test_sorted_table_debug() {
    let mut table = SortedSequenceTable::with_capacity(3);
    table.insert(2, 'b').unwrap();
    table.insert(1, 'a').unwrap();

    assert_eq!(format!("{:?}", table), "{1: 'a', 2: 'b'}");
}

#[test]
fn test_sorted_table_on_linked_list() {
    let mut table: SortedSequenceTable<i32, i32, LinkedList<TableItem<i32, i32>>> =
        SortedSequenceTable::default();

    for i in [5, 1, 3, 4, 2] {
        assert_eq!(table.insert(i, -i), Ok(()));
    }

    assert_eq!(table.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    assert_eq!(table.insert(3, 0), Err(TableError::DuplicateKey));
    assert_eq!(table.get(&4), Some(&-4));
    assert_eq!(table.remove(&1), Ok(-1));
    assert_eq!(table.search(&1), Err(0));

    let copied = table.clone();
    assert!(copied.equals(&table));
}

#[test]
fn test_sorted_table_get_through_trait() {
    super::check_get(SortedSequenceTable::<i32, String>::new());
    super::check_get(
        SortedSequenceTable::<i32, String, LinkedList<TableItem<i32, String>>>::default(),
    );
}

#[test]
fn test_sorted_table_items() {
    let mut table = SortedSequenceTable::new();
    for (key, value) in [(2, "b"), (3, "c"), (1, "a")] {
        table.insert(key, value).unwrap();
    }

    let items = table.items().cloned().collect::<Vec<_>>();
    assert_eq!(
        items,
        vec![
            TableItem::from((1, "a")),
            TableItem::from((2, "b")),
            TableItem::from((3, "c"))
        ]
    );

    let pairs = items.into_iter().map(TableItem::into_parts).collect::<Vec<_>>();
    assert_eq!(pairs, vec![(1, "a"), (2, "b"), (3, "c")]);
}

#[test]
fn stress_sorted_table() {
    let table = stress_sequential::<i32, SortedSequenceTable<_, _>>(30_000);
    assert!(keys(&table).windows(2).all(|w| w[0] < w[1]));

    let table = stress_sequential::<String, SortedSequenceTable<_, _>>(20_000);
    assert!(keys(&table).windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn stress_sorted_table_on_linked_list() {
    stress_sequential::<i32, SortedSequenceTable<_, _, LinkedList<_>>>(5_000);
}

proptest! {
    #[test]
    fn search_finds_key_or_insertion_point(
        mut keys in prop::collection::vec(-1000i32..1000, 0..200),
        target in -1100i32..1100,
    ) {
        keys.sort_unstable();
        keys.dedup();

        let mut table = SortedSequenceTable::new();
        for key in &keys {
            table.insert(*key, ()).unwrap();
        }

        match table.search(&target) {
            Ok(index) => prop_assert_eq!(keys[index], target),
            Err(index) => {
                prop_assert!(!keys.contains(&target));
                let expected = keys.iter().position(|key| *key > target).unwrap_or(keys.len());
                prop_assert_eq!(index, expected);
            }
        }
    }

    #[test]
    fn search_range_stays_in_range(
        keys in prop::collection::btree_set(any::<u16>(), 1..100),
        target in any::<u16>(),
        bounds in (0usize..100, 0usize..100),
    ) {
        let keys: Vec<u16> = keys.into_iter().collect();
        let end = bounds.0.max(bounds.1).min(keys.len());
        let start = bounds.0.min(bounds.1).min(end);

        let mut table = SortedSequenceTable::new();
        for key in &keys {
            table.insert(*key, *key).unwrap();
        }

        let range = &keys[start..end];
        match table.search_range(&target, start, end) {
            Ok(index) => {
                prop_assert!(start <= index && index < end);
                prop_assert_eq!(keys[index], target);
            }
            Err(index) => {
                prop_assert!(!range.contains(&target));
                let expected = range.iter().position(|key| *key > target).unwrap_or(range.len());
                prop_assert_eq!(index, start + expected);
            }
        }
    }

    #[test]
    fn duplicate_insert_changes_nothing(
        keys in prop::collection::vec(any::<i16>(), 1..100),
        value in any::<i64>(),
    ) {
        let mut table = SortedSequenceTable::new();
        for key in &keys {
            let _ = table.insert(*key, i64::from(*key));
        }

        let before = table.clone();
        for key in &keys {
            prop_assert_eq!(table.insert(*key, value), Err(TableError::DuplicateKey));
        }
        prop_assert!(table.equals(&before));
    }
}
