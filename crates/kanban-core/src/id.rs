//! Identifier Generation
//!
//! Lists get `"{now_ms}"`, items get `"{list_id}-{now_ms}"`. Two creations in
//! the same millisecond would collide, so a numeric suffix is appended until
//! the id is free on the board.

use super::board::Board;
use super::item::ItemId;
use super::list::ListId;

/// Millisecond wall clock
pub trait Clock {
    fn now_millis(&self) -> u64;
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.0
    }
}

/// Derives fresh list and item ids from a clock
#[derive(Debug, Clone)]
pub struct IdGenerator<C: Clock> {
    clock: C,
}

impl<C: Clock> IdGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn next_list_id(&self, board: &Board) -> ListId {
        let base = self.clock.now_millis().to_string();
        disambiguate(base, |candidate| board.contains_list(candidate))
    }

    pub fn next_item_id(&self, board: &Board, list_id: &str) -> ItemId {
        let base = format!("{}-{}", list_id, self.clock.now_millis());
        disambiguate(base, |candidate| board.contains_item(candidate))
    }
}

fn disambiguate(base: String, taken: impl Fn(&str) -> bool) -> String {
    if !taken(&base) {
        return base;
    }
    (1u32..)
        .map(|n| format!("{}-{}", base, n))
        .find(|candidate| !taken(candidate))
        .unwrap_or(base)
}
