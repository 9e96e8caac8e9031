//! Kanban Core
//!
//! Layered the same way as any domain layer:
//! - entity: identity contract and domain errors
//! - item / list / board: the board snapshot and its collection mutations
//! - reorder: the drag-completion engine
//! - id / seed: identifier generation and the starting board
//!
//! Nothing in here knows about Leptos or the browser.

mod entity;
mod item;
mod list;
mod board;
mod reorder;
mod id;
mod seed;

pub use entity::{Entity, DomainError, DomainResult, has_unique_ids};
pub use item::{Item, ItemId};
pub use list::{List, ListId};
pub use board::Board;
pub use reorder::{reorder, resolve_gap, DragEnd, Position};
pub use id::{Clock, FixedClock, IdGenerator};
pub use seed::seed_board;
