use serde::{Deserialize, Serialize};

/// Tracker configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Storage key the board blob lives under
    pub storage_key: String,
    /// Title given to lists created without one
    pub new_list_title: String,
    /// Title given to cards created without one
    pub new_card_title: String,
}

impl TrackerConfig {
    pub const DEFAULT_STORAGE_KEY: &'static str = "trello_project_board_v1";

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage_key: Self::DEFAULT_STORAGE_KEY.to_string(),
            new_list_title: "New list".to_string(),
            new_card_title: "New card".to_string(),
        }
    }
}
