//! View model types representing renderable UI state.
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data:
//! capitalized and truncated text, highlight ranges, and screen geometry.

use crate::ui::layout::{GalleryLayout, ModalLayout};

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Header information (title, counts).
    pub header: HeaderInfo,

    /// Search form state. The form is always shown.
    pub search_bar: SearchBarInfo,

    /// Cards in the visible window of the gallery.
    pub cards: Vec<CardView>,

    /// Grid placement used to draw `cards`.
    pub gallery: GalleryLayout,

    /// Panel shown instead of the gallery (loading, error, no matches).
    pub empty_state: Option<EmptyState>,

    /// Detail overlay, drawn on top of everything else.
    pub modal: Option<ModalView>,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,
}

/// Display information for a single card.
///
/// Highlight ranges are `(start, end)` character indices into the field they
/// belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Position within the gallery (not the store index).
    pub position: usize,
    pub name: String,
    pub email: String,
    pub location: String,
    pub initials: String,
    pub is_selected: bool,
    pub name_highlights: Vec<(usize, usize)>,
    pub email_highlights: Vec<(usize, usize)>,
    pub location_highlights: Vec<(usize, usize)>,
}

/// Contents of the detail modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    /// 1-based position in the Prev/Next sequence, 0 if not part of it.
    pub position: usize,
    /// Length of the Prev/Next sequence.
    pub total: usize,
    pub name: String,
    pub email: String,
    pub city: String,
    pub phone: String,
    /// `"<number> <street>, <city>, <state> <postcode>"`.
    pub address: String,
    /// `MM-DD-YYYY`, or the raw value if it could not be parsed.
    pub birthday: String,
    pub picture_url: String,
    pub has_prev: bool,
    pub has_next: bool,
    pub layout: ModalLayout,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,
}

/// Message shown in place of the gallery.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No profiles match ...").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,

    /// Drawn in the error color when `true`.
    pub is_error: bool,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,

    /// Whether keystrokes currently go into the search field.
    pub is_focused: bool,
}
