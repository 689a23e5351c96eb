//! # Tackboard Core
//!
//! State and reordering engine for a single-board task tracker: an ordered
//! set of named lists, each holding an ordered set of cards.
//!
//! The crate owns the data model, the mutations that keep list and card
//! order consistent, live drag-and-drop repositioning, and persistence of the
//! whole board as one JSON blob. Rendering and dialogs are left to the
//! embedding application, which drives everything through [`Session`].

pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use config::TrackerConfig;
pub use domain::{
    board::{Board, CardPosition, Direction},
    card::Card,
    drag::{Bounds, DragGesture, DropTarget, Placement},
    id::{CardId, ListId},
    list::List,
    UNTITLED,
};
pub use error::{Result, TrackerError};
pub use persistence::Persistence;
pub use session::{CardDraft, Confirmation, PendingAction, Session};
pub use storage::Storage;
