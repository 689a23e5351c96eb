use crate::domain::{
    card::Card,
    id::{CardId, ListId},
    list::List,
};
use crate::error::{Result, TrackerError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Direction for reordering a list among its neighbours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

/// Location of a card on the board, by list index and card index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardPosition {
    pub list: usize,
    pub index: usize,
}

impl CardPosition {
    pub fn new(list: usize, index: usize) -> Self {
        Self { list, index }
    }
}

/// The root aggregate: lists left to right, cards top to bottom
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub lists: Vec<List>,
}

impl Board {
    pub fn new(lists: Vec<List>) -> Self {
        Self { lists }
    }

    /// The demo layout used when no valid stored board exists
    pub fn seed() -> Self {
        Self::new(vec![
            List::new(
                "To Do",
                vec![
                    Card::new("Draft project README", "Outline features and usage"),
                    Card::new("Sketch UI", "Wireframe lists and cards"),
                ],
            ),
            List::new(
                "In Progress",
                vec![
                    Card::titled("Implement drag & drop"),
                    Card::new("Add persistence", "Use localStorage"),
                ],
            ),
            List::new("Done", vec![Card::titled("Initial scaffold")]),
        ])
    }

    /// Appends a new empty list and returns its id
    pub fn add_list(&mut self, title: impl Into<String>) -> ListId {
        let list = List::empty(title);
        let id = list.id.clone();
        self.lists.push(list);
        id
    }

    /// Removes the list at `index` together with its cards
    pub fn delete_list(&mut self, index: usize) -> Option<List> {
        if index >= self.lists.len() {
            return None;
        }
        Some(self.lists.remove(index))
    }

    /// Swaps the list at `from_index` with its neighbour in `direction`.
    ///
    /// Returns the list's new index, or `None` when it is already at the
    /// boundary or `from_index` is out of range.
    pub fn move_list(&mut self, from_index: usize, direction: Direction) -> Option<usize> {
        if from_index >= self.lists.len() {
            return None;
        }
        let to_index = match direction {
            Direction::Left => from_index.checked_sub(1)?,
            Direction::Right => from_index + 1,
        };
        if to_index >= self.lists.len() {
            return None;
        }
        self.lists.swap(from_index, to_index);
        Some(to_index)
    }

    /// Moves a card between (or within) lists.
    ///
    /// The card is removed first, then `to_index` is clamped to the target
    /// list's length and the card inserted there, so stale indices from a
    /// live drag can never insert out of range. Returns where the card ended
    /// up, or `None` if either list index or `from_index` is invalid.
    pub fn move_card(
        &mut self,
        from_list: usize,
        from_index: usize,
        to_list: usize,
        to_index: usize,
    ) -> Option<CardPosition> {
        if to_list >= self.lists.len() {
            return None;
        }
        let source = self.lists.get_mut(from_list)?;
        if from_index >= source.cards.len() {
            return None;
        }
        let card = source.cards.remove(from_index);

        let target = &mut self.lists[to_list];
        let index = to_index.min(target.cards.len());
        target.cards.insert(index, card);

        Some(CardPosition::new(to_list, index))
    }

    pub fn list(&self, id: &ListId) -> Option<&List> {
        self.lists.iter().find(|l| &l.id == id)
    }

    pub fn list_mut(&mut self, id: &ListId) -> Option<&mut List> {
        self.lists.iter_mut().find(|l| &l.id == id)
    }

    pub fn list_index(&self, id: &ListId) -> Option<usize> {
        self.lists.iter().position(|l| &l.id == id)
    }

    /// Finds the list and index currently holding a card
    pub fn locate_card(&self, id: &CardId) -> Option<CardPosition> {
        self.lists.iter().enumerate().find_map(|(list, l)| {
            l.card_index(id).map(|index| CardPosition::new(list, index))
        })
    }

    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.lists.iter().find_map(|l| l.card(id))
    }

    pub fn card_at(&self, position: CardPosition) -> Option<&Card> {
        self.lists.get(position.list)?.cards.get(position.index)
    }

    /// Total number of cards across all lists
    pub fn card_count(&self) -> usize {
        self.lists.iter().map(List::len).sum()
    }

    /// Checks that list ids and card ids are each unique on the board
    pub fn validate(&self) -> Result<()> {
        let mut list_ids = HashSet::new();
        let mut card_ids = HashSet::new();

        for list in &self.lists {
            if !list_ids.insert(&list.id) {
                return Err(TrackerError::InvalidState(format!(
                    "duplicate list id {}",
                    list.id
                )));
            }
            for card in &list.cards {
                if !card_ids.insert(&card.id) {
                    return Err(TrackerError::InvalidState(format!(
                        "duplicate card id {}",
                        card.id
                    )));
                }
            }
        }

        Ok(())
    }
}
