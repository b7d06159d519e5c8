//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input and
//! host events, translating them into state changes and action sequences. It
//! serves as the primary control flow coordinator for the application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime (`main.rs` maps Zellij events)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Loading**: `PermissionsGranted`, `PermissionsDenied`, `ProfilesFetched`
//! - **Gallery**: `KeyUp`/`KeyDown`/`KeyLeft`/`KeyRight`, `ScrollUp`/`ScrollDown`,
//!   `OpenSelected`, `Click`
//! - **Modal**: `ModalPrev`, `ModalNext`, `ModalClose`
//! - **Search**: `SearchMode`, `FocusSearchBar`, `Char`, `Backspace`,
//!   `SubmitSearch`, `ExitSearch`, `Escape`
//!
//! # Example
//!
//! ```rust
//! use rolodex::app::{handle_event, AppState, Event};
//! use rolodex::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(actions.is_empty());
//! # Ok::<(), rolodex::DirectoryError>(())
//! ```

use super::modes::{InputMode, LoadStatus, SearchFocus};
use crate::app::{Action, AppState};
use crate::client::ProfileClient;
use crate::domain::error::Result;
use crate::domain::DirectoryError;
use crate::ui::layout::{is_search_bar_row, ModalButton};

/// Events triggered by user input or host responses.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. Mouse coordinates are 1-indexed terminal cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Web access was granted; the batch fetch may start.
    PermissionsGranted,
    /// Web access was refused; the fetch can never happen.
    PermissionsDenied,
    /// The host delivered the response to the profile batch request.
    ProfilesFetched {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: Vec<u8>,
    },

    /// Moves the selection one grid row down.
    KeyDown,
    /// Moves the selection one grid row up.
    KeyUp,
    /// Moves the selection one card left.
    KeyLeft,
    /// Moves the selection one card right.
    KeyRight,
    /// Mouse wheel up over the gallery.
    ScrollUp,
    /// Mouse wheel down over the gallery.
    ScrollDown,
    /// Opens the detail modal for the selected card.
    OpenSelected,
    /// Left click at `(row, col)`.
    Click { row: usize, col: usize },

    /// Shows the previous profile in the modal.
    ModalPrev,
    /// Shows the next profile in the modal.
    ModalNext,
    /// Closes the detail modal.
    ModalClose,

    /// Enters search mode with typing focus.
    SearchMode,
    /// Returns focus to the search input (from navigating results).
    FocusSearchBar,
    /// Appends a character to the search term.
    Char(char),
    /// Removes the last character from the search term.
    Backspace,
    /// Submits the search form (Enter while typing).
    SubmitSearch,
    /// Clears the search term and returns to normal mode.
    ExitSearch,
    /// Closes the modal if open, otherwise behaves like `ExitSearch`.
    Escape,
    /// Hides the plugin pane.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`: whether the UI changed, and the side effects
/// to perform in order.
///
/// # Errors
///
/// Returns [`DirectoryError::OutOfRange`] if an event asks to open a profile
/// that is not in the store. A failed fetch is not an error here; it is
/// recorded in `state.load_status` and shown to the user.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::PermissionsGranted => {
            if state.store.is_loaded() || state.load_status == LoadStatus::Loading {
                return Ok((false, vec![]));
            }
            let Some(client) = &state.client else {
                tracing::warn!("no usable profile client, skipping fetch");
                return Ok((true, vec![]));
            };

            let request = client.fetch_request(state.batch_size);
            tracing::info!(url = %request.url, "requesting profile batch");
            state.load_status = LoadStatus::Loading;
            Ok((true, vec![Action::FetchProfiles(request)]))
        }
        Event::PermissionsDenied => {
            tracing::warn!("web access permission denied");
            state.load_status = LoadStatus::Failed(DirectoryError::Network(
                "web access permission denied".to_string(),
            ));
            Ok((true, vec![]))
        }
        Event::ProfilesFetched { status, body } => {
            if state.store.is_loaded() {
                tracing::debug!("profiles already loaded, ignoring response");
                return Ok((false, vec![]));
            }

            match ProfileClient::parse_response(*status, body) {
                Ok(records) => {
                    tracing::info!(count = records.len(), "profile batch loaded");
                    state.store.load(records);
                    state.load_status = LoadStatus::Loaded;
                    state.apply_search_filter();
                }
                Err(e) => {
                    tracing::error!(error = %e, status = status, "profile batch failed");
                    state.gallery.render(&[]);
                    state.load_status = LoadStatus::Failed(e);
                }
            }
            Ok((true, vec![]))
        }
        Event::KeyDown | Event::ScrollDown => {
            if state.modal.is_open() {
                return Ok((false, vec![]));
            }
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp | Event::ScrollUp => {
            if state.modal.is_open() {
                return Ok((false, vec![]));
            }
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::KeyLeft | Event::KeyRight => {
            if state.modal.is_open() {
                return Ok((false, vec![]));
            }
            if matches!(event, Event::KeyLeft) {
                state.move_selection_left();
            } else {
                state.move_selection_right();
            }
            Ok((true, vec![]))
        }
        Event::OpenSelected => {
            let Some(index) = state.selected_profile_index() else {
                tracing::debug!("no card selected");
                return Ok((false, vec![]));
            };
            state.open_profile(index)?;
            Ok((true, vec![]))
        }
        Event::Click { row, col } => handle_click(state, *row, *col),
        Event::ModalPrev => Ok((state.modal_prev(), vec![])),
        Event::ModalNext => Ok((state.modal_next(), vec![])),
        Event::ModalClose => Ok((state.modal.close(), vec![])),
        Event::SearchMode | Event::FocusSearchBar => {
            tracing::debug!("focusing search input");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if !state.input_mode.is_typing() || state.modal.is_open() {
                return Ok((false, vec![]));
            }

            state.search.push(*c);
            tracing::trace!(query = %state.search.query(), char = %c, "search query updated");
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !state.input_mode.is_typing() || state.modal.is_open() || !state.search.pop() {
                return Ok((false, vec![]));
            }
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::SubmitSearch => {
            if !state.input_mode.is_typing() {
                return Ok((false, vec![]));
            }

            state.apply_search_filter();
            state.input_mode = if state.search.query().is_empty() {
                InputMode::Normal
            } else {
                InputMode::Search(SearchFocus::Navigating)
            };
            tracing::debug!(
                query = %state.search.query(),
                matched = state.gallery.len(),
                "search submitted"
            );
            Ok((true, vec![]))
        }
        Event::Escape if state.modal.is_open() => Ok((state.modal.close(), vec![])),
        Event::ExitSearch | Event::Escape => {
            tracing::debug!(query = %state.search.query(), "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.search.clear();
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

/// Resolves a click against the modal (when open) or the gallery and search bar.
fn handle_click(state: &mut AppState, row: usize, col: usize) -> Result<(bool, Vec<Action>)> {
    if state.modal.is_open() {
        let changed = match state.modal_layout().button_at(row, col) {
            Some(ModalButton::Prev) => state.modal_prev(),
            Some(ModalButton::Next) => state.modal_next(),
            Some(ModalButton::Close) => state.modal.close(),
            None => false,
        };
        return Ok((changed, vec![]));
    }

    if is_search_bar_row(row) {
        state.input_mode = InputMode::Search(SearchFocus::Typing);
        return Ok((true, vec![]));
    }

    let layout = state.gallery_layout();
    let Some(index) = state.gallery.card_at(&layout, row, col) else {
        return Ok((false, vec![]));
    };

    tracing::debug!(index = index, row = row, col = col, "card clicked");
    state.open_profile(index)?;
    Ok((true, vec![]))
}
