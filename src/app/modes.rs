//! Input mode and load status types for the application.
//!
//! These enums decide which keybindings are active, how input is processed,
//! and which panel the gallery area shows.
//!
//! # State Machine
//!
//! The application operates in one of two primary input modes:
//! - **Normal**: Card navigation and command mode
//! - **Search**: The search bar has focus (typing) or the submitted results are
//!   being navigated
//!
//! Independently, the profile batch moves through [`LoadStatus`]:
//!
//! ```text
//! AwaitingPermission ──► Loading ──► Loaded
//!          │                │
//!          └────────────────┴──────► Failed(error)
//! ```
//!
//! # Example
//!
//! ```rust
//! use rolodex::app::modes::{InputMode, SearchFocus};
//!
//! let input_mode = InputMode::Search(SearchFocus::Typing);
//! assert!(input_mode.is_typing());
//! ```

use crate::domain::DirectoryError;

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    ///
    /// Every character re-filters the gallery. Enter submits.
    Typing,

    /// User submitted the query and is navigating the matching cards.
    ///
    /// Accepts h/j/k/l for movement, enter to open, and / to return to Typing.
    Navigating,
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default card navigation mode.
    Normal,

    /// Search mode with focus state.
    Search(SearchFocus),
}

impl InputMode {
    /// Returns `true` while keystrokes go into the search field.
    #[must_use]
    pub const fn is_typing(self) -> bool {
        matches!(self, Self::Search(SearchFocus::Typing))
    }
}

/// Progress of the one-time profile batch load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Waiting for the user to grant web access.
    AwaitingPermission,
    /// Request issued, waiting for the host to deliver the result.
    Loading,
    /// Batch received and stored.
    Loaded,
    /// The batch could not be obtained. Shown in place of the gallery.
    Failed(DirectoryError),
}
