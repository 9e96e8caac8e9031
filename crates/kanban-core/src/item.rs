//! Item Entity
//!
//! A card on the board. Content is fixed once created; only its position moves.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

pub type ItemId = String;

/// A single card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique across the whole board
    pub id: ItemId,
    pub content: String,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }
}

impl Entity for Item {
    type Id = str;

    fn id(&self) -> &str {
        &self.id
    }
}
