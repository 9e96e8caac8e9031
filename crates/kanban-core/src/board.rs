//! Board Snapshot
//!
//! The whole ordered collection of lists. Mutations here are plain
//! append/filter operations; moving items lives in `reorder`.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::entity::{has_unique_ids, DomainError, DomainResult};
use super::id::{Clock, IdGenerator};
use super::item::{Item, ItemId};
use super::list::{List, ListId};
use super::reorder::{self, DragEnd};

/// Ordered collection of lists, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    lists: Vec<List>,
}

impl Board {
    pub fn new(lists: Vec<List>) -> Self {
        Self { lists }
    }

    pub fn lists(&self) -> &[List] {
        &self.lists
    }

    pub fn list(&self, list_id: &str) -> Option<&List> {
        self.lists.iter().find(|list| list.id == list_id)
    }

    fn list_mut(&mut self, list_id: &str) -> DomainResult<&mut List> {
        self.lists
            .iter_mut()
            .find(|list| list.id == list_id)
            .ok_or_else(|| DomainError::NotFound(format!("list {}", list_id)))
    }

    pub fn contains_list(&self, list_id: &str) -> bool {
        self.list(list_id).is_some()
    }

    pub fn contains_item(&self, item_id: &str) -> bool {
        self.items().any(|item| item.id == item_id)
    }

    /// All items across every list, list by list
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.lists.iter().flat_map(|list| list.items.iter())
    }

    pub fn item_count(&self) -> usize {
        self.lists.iter().map(List::len).sum()
    }

    /// Check list and item identifier uniqueness
    pub fn validate(&self) -> DomainResult<()> {
        if !has_unique_ids(&self.lists) {
            return Err(DomainError::Conflict("duplicate list id".to_string()));
        }
        if !has_unique_ids(self.items()) {
            return Err(DomainError::Conflict("duplicate item id".to_string()));
        }
        Ok(())
    }

    /// Append a new empty list; returns its id
    pub fn add_list<C: Clock>(&mut self, name: &str, ids: &IdGenerator<C>) -> DomainResult<ListId> {
        let name = non_blank(name, "list name")?;
        let id = ids.next_list_id(self);
        log::debug!("[BOARD] add list {} ({})", id, name);
        self.lists.push(List::new(id.clone(), name));
        Ok(id)
    }

    /// Append a new item to the end of a list; returns its id
    pub fn add_item<C: Clock>(
        &mut self,
        list_id: &str,
        content: &str,
        ids: &IdGenerator<C>,
    ) -> DomainResult<ItemId> {
        let content = non_blank(content, "item content")?;
        if !self.contains_list(list_id) {
            return Err(DomainError::NotFound(format!("list {}", list_id)));
        }
        let id = ids.next_item_id(self, list_id);
        log::debug!("[BOARD] add item {} to list {}", id, list_id);
        self.list_mut(list_id)?.items.push(Item::new(id.clone(), content));
        Ok(id)
    }

    /// Remove a list together with its items
    pub fn remove_list(&mut self, list_id: &str) -> DomainResult<List> {
        let pos = self
            .lists
            .iter()
            .position(|list| list.id == list_id)
            .ok_or_else(|| DomainError::NotFound(format!("list {}", list_id)))?;
        let removed = self.lists.remove(pos);
        log::debug!("[BOARD] removed list {} with {} items", list_id, removed.len());
        Ok(removed)
    }

    pub fn rename_list(&mut self, list_id: &str, name: &str) -> DomainResult<()> {
        let name = non_blank(name, "list name")?;
        self.list_mut(list_id)?.name = name.to_string();
        Ok(())
    }

    /// See [`reorder::reorder`]
    pub fn reorder(&self, event: &DragEnd) -> DomainResult<Cow<'_, Board>> {
        reorder::reorder(self, event)
    }

    /// Replace the lists touched by a move, leaving every other list as is
    pub(crate) fn with_replaced(&self, replacements: &[&List]) -> Board {
        let lists = self
            .lists
            .iter()
            .map(|list| {
                replacements
                    .iter()
                    .find(|r| r.id == list.id)
                    .map_or_else(|| list.clone(), |r| (*r).clone())
            })
            .collect();
        Board { lists }
    }
}

fn non_blank<'a>(value: &'a str, what: &str) -> DomainResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(DomainError::InvalidInput(format!("{} is empty", what)))
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{seed_board, FixedClock};

    fn ids() -> IdGenerator<FixedClock> {
        IdGenerator::new(FixedClock(1000))
    }

    #[test]
    fn test_add_list_appends_empty() {
        let mut board = seed_board();
        let id = board.add_list("  Review ", &ids()).unwrap();
        let last = board.lists().last().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.name, "Review");
        assert!(last.is_empty());
        assert_eq!(board.lists().len(), 4);
    }

    #[test]
    fn test_add_list_blank_name() {
        let mut board = seed_board();
        let err = board.add_list("   ", &ids()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert_eq!(board, seed_board());
    }

    #[test]
    fn test_add_item_appends_to_end() {
        let mut board = seed_board();
        let id = board.add_item("2", "Task 4", &ids()).unwrap();
        assert_eq!(id, "2-1000");
        let list = board.list("2").unwrap();
        assert_eq!(list.items.last().unwrap(), &Item::new("2-1000", "Task 4"));
        assert_eq!(board.item_count(), 4);
    }

    #[test]
    fn test_add_item_unknown_list() {
        let mut board = seed_board();
        let err = board.add_item("missing", "x", &ids()).unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[test]
    fn test_add_item_blank_content() {
        let mut board = seed_board();
        assert!(board.add_item("1", "\t", &ids()).is_err());
        assert_eq!(board.item_count(), 3);
    }

    #[test]
    fn test_add_twice_same_millisecond() {
        let mut board = seed_board();
        let a = board.add_item("3", "a", &ids()).unwrap();
        let b = board.add_item("3", "b", &ids()).unwrap();
        assert_ne!(a, b);
        assert!(board.validate().is_ok());
    }

    #[test]
    fn test_remove_list() {
        let mut board = seed_board();
        let removed = board.remove_list("1").unwrap();
        assert_eq!(removed.len(), 2);
        assert!(!board.contains_list("1"));
        assert!(!board.contains_item("1-1"));
        assert_eq!(board.item_count(), 1);
    }

    #[test]
    fn test_remove_unknown_list() {
        let mut board = seed_board();
        assert!(board.remove_list("9").is_err());
        assert_eq!(board, seed_board());
    }

    #[test]
    fn test_rename_list() {
        let mut board = seed_board();
        board.rename_list("3", "Shipped").unwrap();
        assert_eq!(board.list("3").unwrap().name, "Shipped");
        assert!(board.rename_list("3", " ").is_err());
    }

    #[test]
    fn test_validate_duplicates() {
        let board = Board::new(vec![List::new("1", "A"), List::new("1", "B")]);
        assert!(matches!(board.validate(), Err(DomainError::Conflict(_))));

        let board = Board::new(vec![
            List::with_items("1", "A", vec![Item::new("x", "one")]),
            List::with_items("2", "B", vec![Item::new("x", "two")]),
        ]);
        assert!(board.validate().is_err());
    }

    #[test]
    fn test_board_json_is_list_array() {
        let json = serde_json::to_value(seed_board()).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["name"], "To Do");
        assert_eq!(json[1]["items"][0]["content"], "Task 3");
    }
}
