//! Starting board shown when nothing else is configured.

use super::board::Board;
use super::item::Item;
use super::list::List;

pub fn seed_board() -> Board {
    Board::new(vec![
        List::with_items(
            "1",
            "To Do",
            vec![Item::new("1-1", "Task 1"), Item::new("1-2", "Task 2")],
        ),
        List::with_items("2", "In Progress", vec![Item::new("2-1", "Task 3")]),
        List::new("3", "Done"),
    ])
}
