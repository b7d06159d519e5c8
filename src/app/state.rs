//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the plugin.
//! It owns the one-time profile batch, the gallery contents derived from it,
//! the search term, the detail modal and the current selection, and it turns a
//! snapshot of all of that into a [`UIViewModel`] for the renderer.
//!
//! # State Components
//!
//! - **Store**: The fetched profile batch, in fetch order, loaded once
//! - **Gallery**: Cards for the profiles matching the current search
//! - **Selection**: Keyboard cursor, a position within the gallery
//! - **Modal**: Detail overlay for one store index
//! - **Load Status**: Permission, loading, loaded or failed
//!
//! # Example
//!
//! ```rust
//! use rolodex::app::AppState;
//! use rolodex::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! state.apply_search_filter();
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.cards.is_empty());
//! ```

use super::modal::{ModalController, NavigationScope};
use super::modes::{InputMode, LoadStatus, SearchFocus};
use super::search::SearchController;
use crate::client::ProfileClient;
use crate::domain::error::Result;
use crate::domain::ProfileRecord;
use crate::store::ProfileStore;
use crate::ui::gallery::{Card, CardRenderer};
use crate::ui::helpers::{capitalize_words, truncate};
use crate::ui::layout::{GalleryLayout, ModalLayout, Viewport, CARD_WIDTH};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CardView, EmptyState, FooterInfo, HeaderInfo, ModalView, SearchBarInfo, UIViewModel,
};

/// Number of profiles requested when no `results` option is configured.
pub const DEFAULT_BATCH_SIZE: usize = 12;

const TITLE: &str = "Employee Directory";

/// Central application state container.
///
/// Mutated by the event handler in response to user input and host events.
/// View models are computed on demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Profiles from the single fetch, in fetch order.
    pub store: ProfileStore,

    /// Cards currently shown, one per profile matching the search.
    ///
    /// Rebuilt by `apply_search_filter()`.
    pub gallery: CardRenderer,

    /// Current search term and its compiled matcher.
    pub search: SearchController,

    /// Detail overlay state.
    pub modal: ModalController,

    /// Records walked by the modal's Prev/Next controls.
    pub navigation: NavigationScope,

    /// Zero-based position of the selected card within `gallery`.
    ///
    /// Clamped to valid bounds by `apply_search_filter()`.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Progress of the profile batch fetch.
    pub load_status: LoadStatus,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Pane size from the last render, used to resolve clicks and grid moves.
    pub viewport: Viewport,

    /// Builds the batch request. `None` if the configured endpoint was invalid.
    pub client: Option<ProfileClient>,

    /// Number of profiles requested in the batch.
    pub batch_size: usize,
}

impl AppState {
    /// Creates an empty state awaiting web access permission.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            store: ProfileStore::new(),
            gallery: CardRenderer::new(),
            search: SearchController::new(),
            modal: ModalController::new(),
            navigation: NavigationScope::default(),
            selected_index: 0,
            input_mode: InputMode::Normal,
            load_status: LoadStatus::AwaitingPermission,
            theme,
            viewport: Viewport::default(),
            client: None,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Records the pane size reported by the last render.
    pub fn set_viewport(&mut self, rows: usize, cols: usize) {
        self.viewport = Viewport { rows, cols };
    }

    /// Grid placement of the gallery at the current viewport and selection.
    #[must_use]
    pub fn gallery_layout(&self) -> GalleryLayout {
        GalleryLayout::compute(self.viewport, self.gallery.len(), self.selected_index)
    }

    #[must_use]
    pub fn modal_layout(&self) -> ModalLayout {
        ModalLayout::compute(self.viewport)
    }

    /// Store index of the selected card, if the gallery is not empty.
    #[must_use]
    pub fn selected_profile_index(&self) -> Option<usize> {
        self.gallery.cards().get(self.selected_index).map(|card| card.index)
    }

    /// Moves the selection one card to the right, stopping at the last card.
    pub fn move_selection_right(&mut self) {
        self.move_selection_by(1, true);
    }

    /// Moves the selection one card to the left, stopping at the first card.
    pub fn move_selection_left(&mut self) {
        self.move_selection_by(1, false);
    }

    /// Moves the selection one grid row down.
    pub fn move_selection_down(&mut self) {
        self.move_selection_by(self.gallery_layout().columns, true);
    }

    /// Moves the selection one grid row up.
    pub fn move_selection_up(&mut self) {
        self.move_selection_by(self.gallery_layout().columns, false);
    }

    fn move_selection_by(&mut self, step: usize, forward: bool) {
        if self.gallery.is_empty() {
            return;
        }
        let last = self.gallery.len() - 1;
        self.selected_index = if forward {
            (self.selected_index + step).min(last)
        } else {
            self.selected_index.saturating_sub(step)
        };
    }

    /// Filters the store by the current search term and re-renders the gallery.
    ///
    /// The selection is clamped so it always points at an existing card.
    pub fn apply_search_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_search_filter",
            total_profiles = self.store.len(),
            query_len = self.search.query().len()
        )
        .entered();

        let subset = self.search.filter(&self.store);
        self.gallery.render(&subset);

        if self.gallery.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.gallery.len() - 1);
        }
    }

    /// Opens the detail modal on store index `index` and selects its card.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::OutOfRange`](crate::DirectoryError::OutOfRange)
    /// if `index` is not in the store.
    pub fn open_profile(&mut self, index: usize) -> Result<()> {
        self.modal.open(index, &self.store)?;
        self.sync_selection_with_modal();
        Ok(())
    }

    /// Store indices walked by Prev/Next, per the configured scope.
    #[must_use]
    pub fn navigation_sequence(&self) -> Vec<usize> {
        match self.navigation {
            NavigationScope::Store => (0..self.store.len()).collect(),
            NavigationScope::Filtered => self.gallery.indices(),
        }
    }

    /// Steps the modal to the previous profile. Returns `false` at the start.
    pub fn modal_prev(&mut self) -> bool {
        let sequence = self.navigation_sequence();
        let moved = self.modal.prev(&sequence);
        if moved {
            self.sync_selection_with_modal();
        }
        moved
    }

    /// Steps the modal to the next profile. Returns `false` at the end.
    pub fn modal_next(&mut self) -> bool {
        let sequence = self.navigation_sequence();
        let moved = self.modal.next(&sequence);
        if moved {
            self.sync_selection_with_modal();
        }
        moved
    }

    fn sync_selection_with_modal(&mut self) {
        if let Some(position) = self
            .modal
            .current()
            .and_then(|index| self.gallery.position_of(index))
        {
            self.selected_index = position;
        }
    }

    /// Computes a renderable view model for a pane of `rows` x `cols` cells.
    ///
    /// The gallery is windowed around the selection. Match highlighting is
    /// applied to every visible card field while a search term is set.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let viewport = Viewport { rows, cols };
        let gallery = GalleryLayout::compute(viewport, self.gallery.len(), self.selected_index);

        let cards = gallery
            .visible_range()
            .filter_map(|position| {
                self.gallery
                    .cards()
                    .get(position)
                    .map(|card| self.compute_card_view(card, position))
            })
            .collect();

        UIViewModel {
            header: self.compute_header(),
            search_bar: self.compute_search_bar(),
            cards,
            gallery,
            empty_state: self.compute_empty_state(),
            modal: self.compute_modal(viewport),
            footer: self.compute_footer(),
        }
    }

    fn compute_card_view(&self, card: &Card, position: usize) -> CardView {
        const TEXT_WIDTH: usize = CARD_WIDTH - 4 - 5;

        let name = truncate(&capitalize_words(&card.name), TEXT_WIDTH);
        let email = truncate(&card.email, TEXT_WIDTH);
        let location = truncate(&capitalize_words(&card.location), TEXT_WIDTH);

        CardView {
            position,
            name_highlights: self.search.highlight_ranges(&name),
            email_highlights: self.search.highlight_ranges(&email),
            location_highlights: self.search.highlight_ranges(&location),
            name,
            email,
            location,
            initials: card.initials.clone(),
            is_selected: position == self.selected_index,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = if self.store.is_loaded() {
            format!(" {TITLE} ({}/{}) ", self.gallery.len(), self.store.len())
        } else {
            format!(" {TITLE} ")
        };
        HeaderInfo { title }
    }

    fn compute_search_bar(&self) -> SearchBarInfo {
        SearchBarInfo {
            query: self.search.query().to_string(),
            is_focused: self.input_mode.is_typing() && !self.modal.is_open(),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        let (message, subtitle, is_error) = match &self.load_status {
            LoadStatus::AwaitingPermission => (
                "Waiting for web access".to_string(),
                "Grant the permission request to load the directory".to_string(),
                false,
            ),
            LoadStatus::Loading => (
                "Loading profiles...".to_string(),
                format!("Requesting {} profiles", self.batch_size),
                false,
            ),
            LoadStatus::Failed(error) => (
                error.to_string(),
                "The directory could not be loaded. Press q to close".to_string(),
                true,
            ),
            LoadStatus::Loaded if !self.gallery.is_empty() => return None,
            LoadStatus::Loaded if self.store.is_empty() => (
                "No profiles returned".to_string(),
                "The directory service sent an empty batch".to_string(),
                false,
            ),
            LoadStatus::Loaded => (
                format!("No profiles match \"{}\"", self.search.query()),
                "Press Esc to clear the search".to_string(),
                false,
            ),
        };

        Some(EmptyState {
            message,
            subtitle,
            is_error,
        })
    }

    fn compute_modal(&self, viewport: Viewport) -> Option<ModalView> {
        let index = self.modal.current()?;
        let profile = self.store.get(index).ok()?;

        let sequence = self.navigation_sequence();
        let position = sequence.iter().position(|&i| i == index);

        Some(Self::modal_view(
            profile,
            position,
            sequence.len(),
            ModalLayout::compute(viewport),
        ))
    }

    fn modal_view(
        profile: &ProfileRecord,
        position: Option<usize>,
        total: usize,
        layout: ModalLayout,
    ) -> ModalView {
        ModalView {
            position: position.map_or(0, |p| p + 1),
            total,
            name: capitalize_words(&profile.full_name()),
            email: profile.email.clone(),
            city: capitalize_words(&profile.city),
            phone: profile.phone.clone(),
            address: capitalize_words(&profile.street_address()),
            birthday: profile.birthday(),
            picture_url: profile.picture_url.clone(),
            has_prev: position.is_some_and(|p| p > 0),
            has_next: position.is_some_and(|p| p + 1 < total),
            layout,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.modal.is_open() {
            "h/←: previous  l/→: next  ESC/x: close  Click [X] to close"
        } else {
            match self.input_mode {
                InputMode::Search(SearchFocus::Typing) => {
                    "ESC: clear search  Enter: browse results  Type to filter"
                }
                InputMode::Search(SearchFocus::Navigating) => {
                    "ESC: clear search  /: edit query  h/j/k/l: navigate  Enter: details"
                }
                InputMode::Normal => {
                    "h/j/k/l: navigate  Enter: details  /: search  Click a card  q: quit"
                }
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}
