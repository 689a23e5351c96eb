pub mod board;
pub mod card;
pub mod drag;
pub mod id;
pub mod list;

pub use board::{Board, CardPosition, Direction};
pub use card::Card;
pub use drag::{resolve_drop, Bounds, DragGesture, DropTarget, Placement};
pub use id::{CardId, ListId};
pub use list::List;

/// Placeholder used whenever a list or card title is edited to blank
pub const UNTITLED: &str = "Untitled";

/// Trims an edited title, substituting the placeholder for blank input
pub(crate) fn normalize_title(title: &str) -> String {
    match title.trim() {
        "" => UNTITLED.to_string(),
        trimmed => trimmed.to_string(),
    }
}
