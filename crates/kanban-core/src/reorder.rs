//! Reorder Engine
//!
//! Applies a completed drag to a board snapshot. The result borrows the input
//! whenever the drag changes nothing, so no-op drops never allocate.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::entity::{DomainError, DomainResult};
use super::list::ListId;

/// A slot in a list: which list, and the index within its items
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub list_id: ListId,
    pub index: usize,
}

impl Position {
    pub fn new(list_id: impl Into<ListId>, index: usize) -> Self {
        Self {
            list_id: list_id.into(),
            index,
        }
    }
}

/// A finished drag gesture. `destination` is `None` when the card was
/// released outside every drop target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragEnd {
    pub source: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<Position>,
}

impl DragEnd {
    pub fn new(source: Position, destination: Option<Position>) -> Self {
        Self { source, destination }
    }

    pub fn cancelled(source: Position) -> Self {
        Self::new(source, None)
    }
}

/// Apply a drag to the board.
///
/// Returns `Cow::Borrowed` when nothing moves: no destination, destination
/// equal to source, or a list id that is not on the board. Out-of-range
/// indices are rejected with [`DomainError::InvalidIndex`].
pub fn reorder<'a>(board: &'a Board, event: &DragEnd) -> DomainResult<Cow<'a, Board>> {
    let source = &event.source;
    let Some(destination) = event.destination.as_ref() else {
        log::debug!("[REORDER] drag from {:?} cancelled", source);
        return Ok(Cow::Borrowed(board));
    };
    if source == destination {
        return Ok(Cow::Borrowed(board));
    }

    let (Some(source_list), Some(destination_list)) =
        (board.list(&source.list_id), board.list(&destination.list_id))
    else {
        log::warn!(
            "[REORDER] unknown list in drag {} -> {}, ignoring",
            source.list_id,
            destination.list_id
        );
        return Ok(Cow::Borrowed(board));
    };

    if source.index >= source_list.len() {
        return Err(DomainError::InvalidIndex {
            list_id: source.list_id.clone(),
            index: source.index,
            len: source_list.len(),
        });
    }

    let mut new_source = source_list.clone();
    let moved = new_source.items.remove(source.index);

    let next = if source_list.id == destination_list.id {
        check_insert(&new_source.id, destination.index, new_source.len())?;
        new_source.items.insert(destination.index, moved);
        board.with_replaced(&[&new_source])
    } else {
        let mut new_destination = destination_list.clone();
        check_insert(&new_destination.id, destination.index, new_destination.len())?;
        new_destination.items.insert(destination.index, moved);
        board.with_replaced(&[&new_source, &new_destination])
    };

    log::debug!(
        "[REORDER] moved {}[{}] -> {}[{}]",
        source.list_id,
        source.index,
        destination.list_id,
        destination.index
    );
    Ok(Cow::Owned(next))
}

fn check_insert(list_id: &str, index: usize, len: usize) -> DomainResult<()> {
    if index > len {
        return Err(DomainError::InvalidIndex {
            list_id: list_id.to_string(),
            index,
            len,
        });
    }
    Ok(())
}

/// Turn a drop gap into the final index of the moved card.
///
/// Gap `g` sits before the card currently at `g` (gap `len` is the end of the
/// list). Within the source list every gap after the dragged card shifts down
/// by one once that card is lifted out.
pub fn resolve_gap(source: &Position, gap: Position) -> Position {
    if gap.list_id == source.list_id && gap.index > source.index {
        Position::new(gap.list_id, gap.index - 1)
    } else {
        gap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{seed_board, Item, List};

    fn contents(board: &Board, list_id: &str) -> Vec<String> {
        board
            .list(list_id)
            .unwrap()
            .items
            .iter()
            .map(|item| item.content.clone())
            .collect()
    }

    fn three_tasks() -> Board {
        Board::new(vec![
            List::with_items(
                "todo",
                "To Do",
                vec![
                    Item::new("t1", "Task1"),
                    Item::new("t2", "Task2"),
                    Item::new("t3", "Task3"),
                ],
            ),
            List::with_items("doing", "In Progress", vec![Item::new("t4", "Task4")]),
            List::new("done", "Done"),
        ])
    }

    fn drag(from: (&str, usize), to: Option<(&str, usize)>) -> DragEnd {
        DragEnd::new(
            Position::new(from.0, from.1),
            to.map(|(list, index)| Position::new(list, index)),
        )
    }

    #[test]
    fn test_no_destination_is_noop() {
        let board = three_tasks();
        let result = reorder(&board, &DragEnd::cancelled(Position::new("todo", 0))).unwrap();
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(*result, board);
    }

    #[test]
    fn test_same_position_is_noop() {
        let board = three_tasks();
        let result = reorder(&board, &drag(("todo", 1), Some(("todo", 1)))).unwrap();
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn test_unknown_list_is_noop() {
        let board = three_tasks();
        let result = reorder(&board, &drag(("nope", 0), Some(("todo", 0)))).unwrap();
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(*result, board);

        let result = reorder(&board, &drag(("todo", 0), Some(("nope", 0)))).unwrap();
        assert_eq!(*result, board);
    }

    #[test]
    fn test_move_down_within_list() {
        let board = three_tasks();
        let result = reorder(&board, &drag(("todo", 0), Some(("todo", 2)))).unwrap();
        assert_eq!(contents(&result, "todo"), ["Task2", "Task3", "Task1"]);
    }

    #[test]
    fn test_move_up_within_list() {
        let board = three_tasks();
        let result = reorder(&board, &drag(("todo", 2), Some(("todo", 0)))).unwrap();
        assert_eq!(contents(&result, "todo"), ["Task3", "Task1", "Task2"]);
    }

    #[test]
    fn test_move_across_lists() {
        let board = Board::new(vec![
            List::with_items(
                "todo",
                "To Do",
                vec![Item::new("t1", "Task1"), Item::new("t2", "Task2")],
            ),
            List::new("done", "Done"),
            List::with_items("other", "Other", vec![Item::new("o1", "Other1")]),
        ]);
        let result = reorder(&board, &drag(("todo", 0), Some(("done", 0)))).unwrap();
        assert_eq!(contents(&result, "todo"), ["Task2"]);
        assert_eq!(contents(&result, "done"), ["Task1"]);
        assert_eq!(result.list("other"), board.list("other"));
    }

    #[test]
    fn test_move_to_end_of_other_list() {
        let board = three_tasks();
        let result = reorder(&board, &drag(("todo", 1), Some(("doing", 1)))).unwrap();
        assert_eq!(contents(&result, "doing"), ["Task4", "Task2"]);
        assert_eq!(contents(&result, "todo"), ["Task1", "Task3"]);
    }

    #[test]
    fn test_untouched_lists_unchanged() {
        let board = three_tasks();
        let result = reorder(&board, &drag(("todo", 0), Some(("todo", 1)))).unwrap();
        assert_eq!(result.list("doing"), board.list("doing"));
        assert_eq!(result.list("done"), board.list("done"));
        let order: Vec<_> = result.lists().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(order, ["todo", "doing", "done"]);
    }

    #[test]
    fn test_source_index_out_of_range() {
        let board = three_tasks();
        let err = reorder(&board, &drag(("done", 0), Some(("todo", 0)))).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidIndex {
                list_id: "done".to_string(),
                index: 0,
                len: 0,
            }
        );
    }

    #[test]
    fn test_destination_index_out_of_range() {
        let board = three_tasks();
        // Same list: only two slots remain after lifting the card out.
        let err = reorder(&board, &drag(("todo", 0), Some(("todo", 3)))).unwrap_err();
        assert!(matches!(err, DomainError::InvalidIndex { len: 2, .. }));

        let err = reorder(&board, &drag(("todo", 0), Some(("done", 1)))).unwrap_err();
        assert!(matches!(err, DomainError::InvalidIndex { len: 0, .. }));
    }

    #[test]
    fn test_conservation_over_every_move() {
        let board = three_tasks();
        let lists: Vec<(String, usize)> = board
            .lists()
            .iter()
            .map(|list| (list.id.clone(), list.len()))
            .collect();

        for (from_list, from_len) in &lists {
            for from_index in 0..*from_len {
                for (to_list, to_len) in &lists {
                    let max = if to_list == from_list { to_len - 1 } else { *to_len };
                    for to_index in 0..=max {
                        let event = drag(
                            (from_list.as_str(), from_index),
                            Some((to_list.as_str(), to_index)),
                        );
                        let result = reorder(&board, &event).unwrap();
                        assert_eq!(result.item_count(), board.item_count());
                        assert!(result.validate().is_ok());

                        let moved = &board.list(from_list).unwrap().items[from_index];
                        assert_eq!(&result.list(to_list).unwrap().items[to_index], moved);
                    }
                }
            }
        }
    }

    #[test]
    fn test_seed_board_flow() {
        let board = seed_board();
        let step = reorder(&board, &drag(("1", 0), Some(("3", 0)))).unwrap().into_owned();
        let step = reorder(&step, &drag(("2", 0), Some(("3", 1)))).unwrap().into_owned();
        assert_eq!(contents(&step, "1"), ["Task 2"]);
        assert!(step.list("2").unwrap().is_empty());
        assert_eq!(contents(&step, "3"), ["Task 1", "Task 3"]);
    }

    #[test]
    fn test_resolve_gap_same_list() {
        let source = Position::new("todo", 1);
        // Gaps on either side of the dragged card land back where it started.
        assert_eq!(resolve_gap(&source, Position::new("todo", 1)), source);
        assert_eq!(resolve_gap(&source, Position::new("todo", 2)), source);
        assert_eq!(resolve_gap(&source, Position::new("todo", 0)), Position::new("todo", 0));
        assert_eq!(resolve_gap(&source, Position::new("todo", 3)), Position::new("todo", 2));
    }

    #[test]
    fn test_resolve_gap_other_list() {
        let source = Position::new("todo", 0);
        assert_eq!(resolve_gap(&source, Position::new("done", 3)), Position::new("done", 3));
    }

    #[test]
    fn test_gap_to_end_of_same_list() {
        let board = three_tasks();
        let source = Position::new("todo", 0);
        let destination = resolve_gap(&source, Position::new("todo", 3));
        let result = reorder(&board, &DragEnd::new(source, Some(destination))).unwrap();
        assert_eq!(contents(&result, "todo"), ["Task2", "Task3", "Task1"]);
    }

    #[test]
    fn test_drag_end_wire_shape() {
        let event: DragEnd = serde_json::from_str(
            r#"{"source":{"listId":"1","index":0},"destination":{"listId":"3","index":2}}"#,
        )
        .unwrap();
        assert_eq!(event, drag(("1", 0), Some(("3", 2))));

        let cancelled: DragEnd =
            serde_json::from_str(r#"{"source":{"listId":"1","index":0}}"#).unwrap();
        assert_eq!(cancelled.destination, None);
        assert_eq!(
            serde_json::to_string(&cancelled).unwrap(),
            r#"{"source":{"listId":"1","index":0}}"#
        );
    }
}
