pub mod list;
pub mod map;
pub mod table;
pub mod util;

pub use list::{ArrayList, LinkedList, List};
pub use map::SequentialMap;
pub use table::{
    AnyTable, SortedSequenceTable, Table, TableError, TableItem, TableKind, UnsortedSequenceTable,
};
