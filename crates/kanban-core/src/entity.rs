//! Domain Layer - Core Entity Trait
//!
//! Every board entity carries a string identifier that must be unique
//! within its scope (items across the whole board, lists within the board).

use std::collections::HashSet;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Core trait for all board entities
pub trait Entity: Clone {
    /// The type of the entity's unique identifier
    type Id: ?Sized + Eq + Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Returns true when no two entities share an identifier
pub fn has_unique_ids<'a, E, I>(entities: I) -> bool
where
    E: Entity + 'a,
    I: IntoIterator<Item = &'a E>,
{
    let mut seen = HashSet::new();
    entities.into_iter().all(|e| seen.insert(e.id()))
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainError {
    NotFound(String),
    InvalidInput(String),
    /// A drag position outside the bounds of its list
    InvalidIndex {
        list_id: String,
        index: usize,
        len: usize,
    },
    Conflict(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::InvalidIndex { list_id, index, len } => write!(
                f,
                "Invalid index: {} is out of range for list {} (len {})",
                index, list_id, len
            ),
            DomainError::Conflict(msg) => write!(f, "Conflict: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Item;

    #[test]
    fn test_unique_ids() {
        let items = vec![Item::new("a", "A"), Item::new("b", "B")];
        assert!(has_unique_ids(&items));
    }

    #[test]
    fn test_duplicate_ids() {
        let items = vec![Item::new("a", "A"), Item::new("a", "again")];
        assert!(!has_unique_ids(&items));
    }

    #[test]
    fn test_invalid_index_display() {
        let err = DomainError::InvalidIndex {
            list_id: "1".to_string(),
            index: 4,
            len: 2,
        };
        assert_eq!(
            err.to_string(),
            "Invalid index: 4 is out of range for list 1 (len 2)"
        );
    }
}
