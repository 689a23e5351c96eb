//! Live drag-and-drop repositioning of cards.
//!
//! A gesture starts when the user picks up a card and ends on drop or
//! cancel. Every pointer sample over a list or card is resolved into a
//! target position and applied immediately, so cards part to make room while
//! the pointer moves. There is no commit-on-drop and no revert on cancel.

use crate::domain::{
    board::{Board, CardPosition},
    id::CardId,
};
use tracing::debug;

/// Vertical extent of a rendered card, in the presentation's coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// Pointer above the midpoint lands before the card, anything else after
    pub fn placement(&self, pointer_y: f64) -> Placement {
        if pointer_y < self.midpoint() {
            Placement::Before
        } else {
            Placement::After
        }
    }
}

/// Which side of a hovered card the dragged card should land on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Before,
    After,
}

/// A drop target currently under the pointer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropTarget {
    /// A list container with no card beneath the pointer
    List { list: usize },
    /// A rendered card within a list
    Card {
        list: usize,
        index: usize,
        bounds: Bounds,
    },
}

impl DropTarget {
    pub fn list(&self) -> usize {
        match self {
            Self::List { list } | Self::Card { list, .. } => *list,
        }
    }
}

/// Resolves a drop target into the position the card should occupy once the
/// move has been applied.
///
/// `current` is where the dragged card sits now. Returns `None` when the
/// target refers to a list or card that no longer exists.
pub fn resolve_drop(
    board: &Board,
    current: CardPosition,
    target: DropTarget,
    pointer_y: f64,
) -> Option<CardPosition> {
    let list = board.lists.get(target.list())?;
    let same_list = target.list() == current.list;
    // Length of the target list once the dragged card has been lifted out
    let len = if same_list {
        list.len().saturating_sub(1)
    } else {
        list.len()
    };

    let index = match target {
        DropTarget::List { .. } => len,
        DropTarget::Card { index, bounds, .. } => {
            if index >= list.len() {
                return None;
            }
            let mut insert_at = match bounds.placement(pointer_y) {
                Placement::Before => index,
                Placement::After => index + 1,
            };
            // Lifting the card out shifts everything below it up by one
            if same_list && current.index < index {
                insert_at -= 1;
            }
            insert_at
        }
    };

    Some(CardPosition::new(target.list(), index.min(len)))
}

/// The short-lived context of one drag gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragGesture {
    card: CardId,
    position: CardPosition,
}

impl DragGesture {
    /// Picks up a card. Returns `None` if the card is not on the board.
    pub fn begin(board: &Board, card: &CardId) -> Option<Self> {
        let position = board.locate_card(card)?;
        Some(Self {
            card: card.clone(),
            position,
        })
    }

    pub fn card(&self) -> &CardId {
        &self.card
    }

    /// Where the dragged card currently sits
    pub fn position(&self) -> CardPosition {
        self.position
    }

    /// Handles one pointer sample over `target`, moving the card live.
    ///
    /// Returns `true` if the board changed.
    pub fn drag_over(&mut self, board: &mut Board, target: DropTarget, pointer_y: f64) -> bool {
        if !self.sync(board) {
            return false;
        }

        if let DropTarget::Card { list, index, .. } = target {
            if list == self.position.list && index == self.position.index {
                return false;
            }
        }

        let Some(destination) = resolve_drop(board, self.position, target, pointer_y) else {
            return false;
        };
        if destination == self.position {
            return false;
        }

        let from = self.position;
        match board.move_card(from.list, from.index, destination.list, destination.index) {
            Some(position) => {
                debug!(card = %self.card, ?from, to = ?position, "Card moved during drag");
                self.position = position;
                true
            }
            None => false,
        }
    }

    /// Re-reads the card's position if the board changed under the gesture.
    /// Returns `false` once the card is gone.
    fn sync(&mut self, board: &Board) -> bool {
        if board.card_at(self.position).map(|c| &c.id) == Some(&self.card) {
            return true;
        }
        match board.locate_card(&self.card) {
            Some(position) => {
                self.position = position;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{card::Card, list::List};

    const CARD_HEIGHT: f64 = 40.0;

    fn bounds(index: usize) -> Bounds {
        Bounds::new(index as f64 * CARD_HEIGHT, CARD_HEIGHT)
    }

    fn over_card(list: usize, index: usize) -> DropTarget {
        DropTarget::Card {
            list,
            index,
            bounds: bounds(index),
        }
    }

    fn upper_half(index: usize) -> f64 {
        bounds(index).top + 5.0
    }

    fn lower_half(index: usize) -> f64 {
        bounds(index).top + CARD_HEIGHT - 5.0
    }

    fn board() -> Board {
        Board::new(vec![
            List::new(
                "A",
                vec![Card::titled("a0"), Card::titled("a1"), Card::titled("a2")],
            ),
            List::new("B", vec![Card::titled("b0"), Card::titled("b1")]),
            List::empty("C"),
        ])
    }

    fn titles(board: &Board, list: usize) -> Vec<&str> {
        board.lists[list]
            .cards
            .iter()
            .map(|c| c.title.as_str())
            .collect()
    }

    fn pick(board: &Board, list: usize, index: usize) -> DragGesture {
        let id = board.lists[list].cards[index].id.clone();
        DragGesture::begin(board, &id).unwrap()
    }

    #[test]
    fn test_placement_midpoint() {
        let b = Bounds::new(100.0, 40.0);
        assert_eq!(b.midpoint(), 120.0);
        assert_eq!(b.placement(119.9), Placement::Before);
        assert_eq!(b.placement(120.0), Placement::After);
        assert_eq!(b.placement(139.0), Placement::After);
    }

    #[test]
    fn test_resolve_list_targets_end() {
        let board = board();
        let current = CardPosition::new(0, 0);

        let to_other = resolve_drop(&board, current, DropTarget::List { list: 1 }, 0.0);
        assert_eq!(to_other, Some(CardPosition::new(1, 2)));

        let to_empty = resolve_drop(&board, current, DropTarget::List { list: 2 }, 0.0);
        assert_eq!(to_empty, Some(CardPosition::new(2, 0)));

        let to_own = resolve_drop(&board, current, DropTarget::List { list: 0 }, 0.0);
        assert_eq!(to_own, Some(CardPosition::new(0, 2)));
    }

    #[test]
    fn test_resolve_card_in_other_list() {
        let board = board();
        let current = CardPosition::new(0, 0);

        let before = resolve_drop(&board, current, over_card(1, 1), upper_half(1));
        assert_eq!(before, Some(CardPosition::new(1, 1)));

        let after = resolve_drop(&board, current, over_card(1, 1), lower_half(1));
        assert_eq!(after, Some(CardPosition::new(1, 2)));
    }

    #[test]
    fn test_resolve_stale_target() {
        let board = board();
        let current = CardPosition::new(0, 0);

        assert!(resolve_drop(&board, current, DropTarget::List { list: 5 }, 0.0).is_none());
        assert!(resolve_drop(&board, current, over_card(1, 4), 0.0).is_none());
    }

    #[test]
    fn test_drag_into_other_list() {
        let mut board = board();
        let mut gesture = pick(&board, 0, 0);

        assert!(gesture.drag_over(&mut board, over_card(1, 0), upper_half(0)));
        assert_eq!(titles(&board, 0), vec!["a1", "a2"]);
        assert_eq!(titles(&board, 1), vec!["a0", "b0", "b1"]);
        assert_eq!(gesture.position(), CardPosition::new(1, 0));
    }

    #[test]
    fn test_drag_down_within_list() {
        let mut board = board();
        let mut gesture = pick(&board, 0, 0);

        // Upper half of the next card keeps the card where it is
        assert!(!gesture.drag_over(&mut board, over_card(0, 1), upper_half(1)));
        assert_eq!(titles(&board, 0), vec!["a0", "a1", "a2"]);

        assert!(gesture.drag_over(&mut board, over_card(0, 1), lower_half(1)));
        assert_eq!(titles(&board, 0), vec!["a1", "a0", "a2"]);
        assert_eq!(gesture.position(), CardPosition::new(0, 1));

        assert!(gesture.drag_over(&mut board, over_card(0, 2), lower_half(2)));
        assert_eq!(titles(&board, 0), vec!["a1", "a2", "a0"]);
    }

    #[test]
    fn test_drag_up_within_list() {
        let mut board = board();
        let mut gesture = pick(&board, 0, 2);

        assert!(!gesture.drag_over(&mut board, over_card(0, 1), lower_half(1)));

        assert!(gesture.drag_over(&mut board, over_card(0, 1), upper_half(1)));
        assert_eq!(titles(&board, 0), vec!["a0", "a2", "a1"]);

        assert!(gesture.drag_over(&mut board, over_card(0, 0), upper_half(0)));
        assert_eq!(titles(&board, 0), vec!["a2", "a0", "a1"]);
        assert_eq!(gesture.position(), CardPosition::new(0, 0));
    }

    #[test]
    fn test_hovering_itself_is_noop() {
        let mut board = board();
        let before = board.clone();
        let mut gesture = pick(&board, 1, 1);

        assert!(!gesture.drag_over(&mut board, over_card(1, 1), upper_half(1)));
        assert!(!gesture.drag_over(&mut board, over_card(1, 1), lower_half(1)));
        // Already last in its own list
        assert!(!gesture.drag_over(&mut board, DropTarget::List { list: 1 }, 0.0));
        assert_eq!(board, before);
    }

    #[test]
    fn test_live_reorder_across_lists_conserves_cards() {
        let mut board = board();
        let total = board.card_count();
        let mut gesture = pick(&board, 0, 1);

        let samples = [
            (over_card(0, 0), upper_half(0)),
            (DropTarget::List { list: 2 }, 0.0),
            (over_card(1, 1), lower_half(1)),
            (over_card(1, 0), upper_half(0)),
            (DropTarget::List { list: 0 }, 0.0),
        ];
        for (target, y) in samples {
            gesture.drag_over(&mut board, target, y);
            assert_eq!(board.card_count(), total);
            assert_eq!(board.locate_card(gesture.card()), Some(gesture.position()));
        }

        assert_eq!(titles(&board, 0), vec!["a0", "a2", "a1"]);
        assert!(board.lists[2].is_empty());
    }

    #[test]
    fn test_gesture_resyncs_after_external_change() {
        let mut board = board();
        let mut gesture = pick(&board, 0, 2);

        board.lists[0].cards.remove(0);
        assert!(gesture.drag_over(&mut board, DropTarget::List { list: 2 }, 0.0));
        assert_eq!(titles(&board, 2), vec!["a2"]);
        assert_eq!(titles(&board, 0), vec!["a1"]);
    }

    #[test]
    fn test_gesture_on_removed_card_is_noop() {
        let mut board = board();
        let mut gesture = pick(&board, 1, 0);

        board.lists[1].cards.remove(0);
        let before = board.clone();
        assert!(!gesture.drag_over(&mut board, DropTarget::List { list: 2 }, 0.0));
        assert_eq!(board, before);
    }

    #[test]
    fn test_begin_unknown_card() {
        let board = board();
        let other = Card::titled("elsewhere");
        assert!(DragGesture::begin(&board, &other.id).is_none());
    }
}
