//! List Entity
//!
//! A named column of items. Item order is the display and drag order.

use serde::{Deserialize, Serialize};
use super::entity::Entity;
use super::item::Item;

pub type ListId = String;

/// A named, ordered sequence of items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    /// Unique within the board
    pub id: ListId,
    pub name: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl List {
    pub fn new(id: impl Into<ListId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn with_items(id: impl Into<ListId>, name: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            items,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Entity for List {
    type Id = str;

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_creation() {
        let list = List::new("7", "Backlog");
        assert_eq!(list.id(), "7");
        assert_eq!(list.name, "Backlog");
        assert!(list.is_empty());
    }

    #[test]
    fn test_items_default_when_missing() {
        let list: List = serde_json::from_str(r#"{"id":"1","name":"To Do"}"#).unwrap();
        assert_eq!(list.len(), 0);
    }
}
