use crate::domain::{id::CardId, normalize_title};
use serde::{Deserialize, Serialize};

/// A single task item on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(rename = "desc", default)]
    pub description: String,
}

impl Card {
    /// Creates a new card with a fresh identifier. The title is kept verbatim.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: CardId::generate(),
            title: title.into(),
            description: description.into(),
        }
    }

    /// Creates a new card with an empty description
    pub fn titled(title: impl Into<String>) -> Self {
        Self::new(title, String::new())
    }

    /// Applies an edit from the card dialog.
    ///
    /// The title is trimmed and replaced by the placeholder when empty; the
    /// description is stored as given so multi-line text survives.
    pub fn edit(&mut self, title: &str, description: impl Into<String>) {
        self.title = normalize_title(title);
        self.description = description.into();
    }
}
