use crate::list::ListError;

use super::TableKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// The key is already in the table. The table is not changed.
    #[error("key is already in table")]
    DuplicateKey,
    /// The key is not in the table. The table is not changed.
    #[error("key is not in table")]
    KeyNotFound,
    /// Assigning a table of a different kind.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: TableKind, found: TableKind },
    #[error("list error: {0}")]
    List(#[from] ListError),
}
