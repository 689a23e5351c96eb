//! The top-level state container handed to the presentation layer.
//!
//! A [`Session`] owns the board, the active drag gesture and the persistence
//! bridge. Every mutation runs synchronously on the board and is persisted
//! afterwards; the presentation re-renders from [`Session::board`].

use crate::{
    config::TrackerConfig,
    domain::{Board, CardId, CardPosition, Direction, DragGesture, DropTarget, ListId},
    persistence::Persistence,
    storage::Storage,
};
use tracing::{debug, info};

/// A destructive action waiting for the user's yes/no answer.
///
/// Pass it to [`Session::confirm`] to carry out the action; dropping it
/// declines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub title: String,
    pub message: String,
    action: PendingAction,
}

impl Confirmation {
    pub fn action(&self) -> &PendingAction {
        &self.action
    }
}

/// What a [`Confirmation`] does when accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    DeleteList { list: ListId },
    DeleteCard { list: ListId, card: CardId },
    ResetBoard,
}

/// The fields shown in the card edit dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDraft {
    pub list: ListId,
    pub card: CardId,
    pub title: String,
    pub description: String,
}

/// One user's board for the lifetime of the process
pub struct Session<S: Storage> {
    board: Board,
    gesture: Option<DragGesture>,
    persistence: Persistence<S>,
    config: TrackerConfig,
}

impl<S: Storage> Session<S> {
    /// Opens the stored board, falling back to the seed board when nothing
    /// valid is stored
    pub async fn open(storage: S, config: TrackerConfig) -> Self {
        let persistence = Persistence::new(storage, config.storage_key.clone());
        let board = match persistence.load().await {
            Some(board) => board,
            None => {
                info!(key = %config.storage_key, "Starting from seed board");
                Board::seed()
            }
        };

        Self {
            board,
            gesture: None,
            persistence,
            config,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn gesture(&self) -> Option<&DragGesture> {
        self.gesture.as_ref()
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    async fn commit(&self, operation: &'static str) {
        debug!(operation, "Board mutated");
        self.persistence.save(&self.board).await;
    }

    /// Appends a list, using the configured default title when none is given
    pub async fn add_list(&mut self, title: Option<&str>) -> ListId {
        let title = title.unwrap_or(&self.config.new_list_title).to_string();
        let id = self.board.add_list(title);
        self.commit("add_list").await;
        id
    }

    pub async fn rename_list(&mut self, list: &ListId, title: &str) -> bool {
        let Some(target) = self.board.list_mut(list) else {
            return false;
        };
        target.rename(title);
        self.commit("rename_list").await;
        true
    }

    pub async fn move_list(&mut self, index: usize, direction: Direction) -> Option<usize> {
        let moved = self.board.move_list(index, direction)?;
        self.commit("move_list").await;
        Some(moved)
    }

    /// Appends a card, using the configured default title when none is given
    pub async fn add_card(&mut self, list: &ListId, title: Option<&str>) -> Option<CardId> {
        let title = title.unwrap_or(&self.config.new_card_title).to_string();
        let id = self.board.list_mut(list)?.add_card(title);
        self.commit("add_card").await;
        Some(id)
    }

    pub async fn edit_card(&mut self, card: &CardId, title: &str, description: &str) -> bool {
        let Some(position) = self.board.locate_card(card) else {
            return false;
        };
        self.board.lists[position.list].cards[position.index].edit(title, description);
        self.commit("edit_card").await;
        true
    }

    pub async fn move_card(
        &mut self,
        from_list: usize,
        from_index: usize,
        to_list: usize,
        to_index: usize,
    ) -> Option<CardPosition> {
        let position = self
            .board
            .move_card(from_list, from_index, to_list, to_index)?;
        self.commit("move_card").await;
        Some(position)
    }

    /// Asks before deleting the list at `index` and all its cards
    pub fn request_delete_list(&self, index: usize) -> Option<Confirmation> {
        let list = self.board.lists.get(index)?;
        Some(Confirmation {
            title: "Delete list".to_string(),
            message: format!("Delete list \"{}\" and all its cards?", list.title),
            action: PendingAction::DeleteList {
                list: list.id.clone(),
            },
        })
    }

    /// Asks before deleting a card
    pub fn request_delete_card(&self, list: &ListId, card: &CardId) -> Option<Confirmation> {
        let found = self.board.list(list)?.card(card)?;
        Some(Confirmation {
            title: "Delete card".to_string(),
            message: format!("Delete card \"{}\"?", found.title),
            action: PendingAction::DeleteCard {
                list: list.clone(),
                card: card.clone(),
            },
        })
    }

    /// Asks before replacing the board with the seed data
    pub fn request_reset(&self) -> Confirmation {
        Confirmation {
            title: "Reset board".to_string(),
            message: "This will clear the board and load demo data again.".to_string(),
            action: PendingAction::ResetBoard,
        }
    }

    /// Carries out an accepted confirmation.
    ///
    /// Returns `false` if the list or card it refers to has disappeared.
    pub async fn confirm(&mut self, confirmation: Confirmation) -> bool {
        match confirmation.action {
            PendingAction::DeleteList { list } => {
                let Some(index) = self.board.list_index(&list) else {
                    return false;
                };
                self.board.delete_list(index);
                self.commit("delete_list").await;
                true
            }
            PendingAction::DeleteCard { list, card } => {
                let removed = self
                    .board
                    .list_mut(&list)
                    .and_then(|l| l.delete_card(&card));
                if removed.is_none() {
                    return false;
                }
                self.commit("delete_card").await;
                true
            }
            PendingAction::ResetBoard => {
                self.reset().await;
                true
            }
        }
    }

    /// Reads the current card fields for the edit dialog
    pub fn open_card_editor(&self, list: &ListId, card: &CardId) -> Option<CardDraft> {
        let found = self.board.list(list)?.card(card)?;
        Some(CardDraft {
            list: list.clone(),
            card: card.clone(),
            title: found.title.clone(),
            description: found.description.clone(),
        })
    }

    /// Saves the edit dialog's fields back onto the card
    pub async fn save_card(&mut self, draft: CardDraft) -> bool {
        let Some(card) = self
            .board
            .list_mut(&draft.list)
            .and_then(|l| l.card_mut(&draft.card))
        else {
            return false;
        };
        card.edit(&draft.title, draft.description);
        self.commit("edit_card").await;
        true
    }

    /// Picks up a card, replacing any gesture still in progress
    pub fn begin_drag(&mut self, card: &CardId) -> bool {
        self.gesture = DragGesture::begin(&self.board, card);
        self.gesture.is_some()
    }

    /// Feeds one pointer sample to the active gesture. Returns `true` if the
    /// card moved.
    pub async fn drag_over(&mut self, target: DropTarget, pointer_y: f64) -> bool {
        let Some(gesture) = self.gesture.as_mut() else {
            return false;
        };
        if !gesture.drag_over(&mut self.board, target, pointer_y) {
            return false;
        }
        self.commit("move_card").await;
        true
    }

    /// Handles the drop event: a final sample, then the gesture ends
    pub async fn drop_on(&mut self, target: DropTarget, pointer_y: f64) -> bool {
        let moved = self.drag_over(target, pointer_y).await;
        self.end_drag();
        moved
    }

    /// Ends the gesture. The card stays wherever the last sample put it.
    pub fn end_drag(&mut self) -> Option<DragGesture> {
        self.gesture.take()
    }

    /// Replaces the board with the seed data and persists it
    pub async fn reset(&mut self) -> &Board {
        self.gesture = None;
        self.board = self.persistence.reset().await;
        &self.board
    }
}
