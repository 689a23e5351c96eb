use crate::domain::{
    card::Card,
    id::{CardId, ListId},
    normalize_title,
};
use serde::{Deserialize, Serialize};

/// A named, ordered column of cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: ListId,
    pub title: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl List {
    /// Creates a new list holding the given cards. The title is kept verbatim.
    pub fn new(title: impl Into<String>, cards: Vec<Card>) -> Self {
        Self {
            id: ListId::generate(),
            title: title.into(),
            cards,
        }
    }

    /// Creates a new list with no cards
    pub fn empty(title: impl Into<String>) -> Self {
        Self::new(title, Vec::new())
    }

    /// Renames the list, falling back to the placeholder for blank input
    pub fn rename(&mut self, new_title: &str) {
        self.title = normalize_title(new_title);
    }

    /// Appends a new card with an empty description and returns its id
    pub fn add_card(&mut self, title: impl Into<String>) -> CardId {
        let card = Card::titled(title);
        let id = card.id.clone();
        self.cards.push(card);
        id
    }

    /// Removes the card with the given id. Returns the removed card, if any.
    pub fn delete_card(&mut self, card_id: &CardId) -> Option<Card> {
        let index = self.card_index(card_id)?;
        Some(self.cards.remove(index))
    }

    pub fn card_index(&self, card_id: &CardId) -> Option<usize> {
        self.cards.iter().position(|c| &c.id == card_id)
    }

    pub fn card(&self, card_id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| &c.id == card_id)
    }

    pub fn card_mut(&mut self, card_id: &CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| &c.id == card_id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UNTITLED;
    use std::str::FromStr;

    #[test]
    fn test_rename_blank_uses_placeholder() {
        let mut list = List::empty("Backlog");
        list.rename("   ");
        assert_eq!(list.title, UNTITLED);

        list.rename("  Doing ");
        assert_eq!(list.title, "Doing");
    }

    #[test]
    fn test_add_card_appends() {
        let mut list = List::empty("To Do");
        let first = list.add_card("First");
        let second = list.add_card("Second");

        assert_eq!(list.len(), 2);
        assert_eq!(list.cards[0].id, first);
        assert_eq!(list.cards[1].id, second);
        assert_eq!(list.cards[1].description, "");
    }

    #[test]
    fn test_delete_card() {
        let mut list = List::empty("To Do");
        let a = list.add_card("A");
        let b = list.add_card("B");
        let c = list.add_card("C");

        let removed = list.delete_card(&b).unwrap();
        assert_eq!(removed.title, "B");
        assert_eq!(list.card_index(&a), Some(0));
        assert_eq!(list.card_index(&c), Some(1));
    }

    #[test]
    fn test_delete_unknown_card_is_noop() {
        let mut list = List::empty("To Do");
        list.add_card("A");
        list.add_card("B");
        let before = list.cards.clone();

        let unknown = CardId::from_str("missing").unwrap();
        assert!(list.delete_card(&unknown).is_none());
        assert_eq!(list.cards, before);
    }

    #[test]
    fn test_list_without_cards_field_deserializes() {
        let list: List = serde_json::from_str(r#"{"id": "l1", "title": "Bare"}"#).unwrap();
        assert!(list.is_empty());
    }
}
