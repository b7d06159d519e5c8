//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! plugin runtime (main.rs) and the client/store/ui layers. It implements the
//! event-driven architecture that powers the interactive directory.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └────────── Web Responses ─────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modal`]: Detail modal state machine and Prev/Next scope
//! - [`modes`]: Input mode and load status types
//! - [`search`]: Search term and profile filtering
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use rolodex::app::{handle_event, AppState, Event};
//! use rolodex::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let (_render, actions) = handle_event(&mut state, &Event::SearchMode)?;
//! assert!(actions.is_empty());
//! # Ok::<(), rolodex::DirectoryError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modal;
pub mod modes;
pub mod search;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modal::{ModalController, ModalState, NavigationScope};
pub use modes::{InputMode, LoadStatus, SearchFocus};
pub use search::SearchController;
pub use state::AppState;
