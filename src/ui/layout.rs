//! Screen geometry shared by drawing and click resolution.
//!
//! Card and modal positions are computed here once, from the pane size, and
//! used both by the ANSI components (where to draw) and by the event handler
//! (what a mouse click at `(row, col)` landed on). All coordinates are
//! 1-indexed terminal cells, matching `position_cursor`.
//!
//! # Screen Layout
//!
//! ```text
//! row 1   [blank]
//! row 2   [Header]
//! row 3   [Border]
//! row 4-6 [Search Bar]
//! row 7   [blank]
//! row 8.. [Card grid, windowed around the selection]
//!         ...
//! rows-1  [Border]
//! rows    [Footer]
//! ```

/// Row of the header line.
pub const HEADER_ROW: usize = 2;

/// First row of the 3-line search box.
pub const SEARCH_BAR_ROW: usize = 4;

/// Height of the search box.
pub const SEARCH_BAR_HEIGHT: usize = 3;

/// First row of the card grid.
pub const GALLERY_TOP: usize = 8;

/// Rows reserved below the grid (border + footer).
const BOTTOM_CHROME: usize = 2;

/// Outer width of one card, borders included.
pub const CARD_WIDTH: usize = 40;

/// Outer height of one card, borders included.
pub const CARD_HEIGHT: usize = 5;

/// Blank columns between two cards.
const CARD_GAP_COLS: usize = 2;

/// Blank rows between two card rows.
const CARD_GAP_ROWS: usize = 1;

/// Left margin of the grid.
pub const GALLERY_LEFT: usize = 3;

/// Preferred modal width.
const MODAL_MAX_WIDTH: usize = 64;

/// Modal height: borders plus eleven content lines.
pub const MODAL_HEIGHT: usize = 13;

/// Label of the modal's previous-profile button.
pub const PREV_LABEL: &str = "[ < Prev ]";

/// Label of the modal's next-profile button.
pub const NEXT_LABEL: &str = "[ Next > ]";

/// Label of the modal's close button, drawn on the top border.
pub const CLOSE_LABEL: &str = "[X]";

/// Size of the plugin pane in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub rows: usize,
    pub cols: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { rows: 24, cols: 80 }
    }
}

/// Placement of the card grid for one frame.
///
/// Positions are indices into the rendered card list (not store indices).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryLayout {
    /// Cards per grid row.
    pub columns: usize,
    /// Number of grid rows that fit on screen.
    pub visible_rows: usize,
    /// First grid row shown (scroll offset).
    pub first_row: usize,
    /// Total number of cards in the gallery.
    pub card_count: usize,
}

impl GalleryLayout {
    /// Computes the grid for `card_count` cards, scrolled so that the card at
    /// `selected` is visible and as centered as the grid allows.
    #[must_use]
    pub fn compute(viewport: Viewport, card_count: usize, selected: usize) -> Self {
        let usable_cols = viewport.cols.saturating_sub(GALLERY_LEFT - 1);
        let columns = ((usable_cols + CARD_GAP_COLS) / (CARD_WIDTH + CARD_GAP_COLS)).max(1);

        let available_rows = viewport.rows.saturating_sub(GALLERY_TOP - 1 + BOTTOM_CHROME);
        let visible_rows = ((available_rows + CARD_GAP_ROWS) / Self::slot_height()).max(1);

        let total_rows = (card_count + columns - 1) / columns;
        let selected_row = selected.min(card_count.saturating_sub(1)) / columns;

        let mut first_row = selected_row.saturating_sub(visible_rows / 2);
        if first_row + visible_rows > total_rows {
            first_row = total_rows.saturating_sub(visible_rows);
        }

        Self {
            columns,
            visible_rows,
            first_row,
            card_count,
        }
    }

    const fn slot_height() -> usize {
        CARD_HEIGHT + CARD_GAP_ROWS
    }

    const fn slot_width() -> usize {
        CARD_WIDTH + CARD_GAP_COLS
    }

    /// Range of card positions drawn in this frame.
    #[must_use]
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let start = (self.first_row * self.columns).min(self.card_count);
        let end = ((self.first_row + self.visible_rows) * self.columns).min(self.card_count);
        start..end
    }

    /// Top-left cell `(row, col)` of the card at `position`, if it is on screen.
    #[must_use]
    pub fn card_origin(&self, position: usize) -> Option<(usize, usize)> {
        if !self.visible_range().contains(&position) {
            return None;
        }
        let grid_row = position / self.columns - self.first_row;
        let grid_col = position % self.columns;
        Some((
            GALLERY_TOP + grid_row * Self::slot_height(),
            GALLERY_LEFT + grid_col * Self::slot_width(),
        ))
    }

    /// Resolves a click at `(row, col)` to the card position under it.
    ///
    /// Clicks on gaps between cards, outside the grid, or on empty grid slots
    /// resolve to `None`.
    #[must_use]
    pub fn card_at(&self, row: usize, col: usize) -> Option<usize> {
        let rel_row = row.checked_sub(GALLERY_TOP)?;
        let rel_col = col.checked_sub(GALLERY_LEFT)?;

        if rel_row % Self::slot_height() >= CARD_HEIGHT
            || rel_col % Self::slot_width() >= CARD_WIDTH
        {
            return None;
        }

        let grid_row = rel_row / Self::slot_height();
        let grid_col = rel_col / Self::slot_width();
        if grid_row >= self.visible_rows || grid_col >= self.columns {
            return None;
        }

        let position = (self.first_row + grid_row) * self.columns + grid_col;
        (position < self.card_count).then_some(position)
    }
}

/// Clickable controls of the detail modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalButton {
    Prev,
    Next,
    Close,
}

/// Placement of the detail modal, centered in the pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalLayout {
    pub top: usize,
    pub left: usize,
    pub width: usize,
    pub height: usize,
}

impl ModalLayout {
    #[must_use]
    pub fn compute(viewport: Viewport) -> Self {
        let width = MODAL_MAX_WIDTH.min(viewport.cols.saturating_sub(4)).max(30);
        let height = MODAL_HEIGHT;
        let top = (viewport.rows.saturating_sub(height) / 2).max(1);
        let left = (viewport.cols.saturating_sub(width) / 2 + 1).max(1);
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Width available for text between the borders and their padding.
    #[must_use]
    pub const fn inner_width(&self) -> usize {
        self.width.saturating_sub(4)
    }

    /// Row of the Prev/Next buttons (last content line).
    #[must_use]
    pub const fn button_row(&self) -> usize {
        self.top + self.height - 2
    }

    /// First column of the Prev button.
    #[must_use]
    pub const fn prev_col(&self) -> usize {
        self.left + 2
    }

    /// First column of the Next button.
    #[must_use]
    pub const fn next_col(&self) -> usize {
        self.left + self.width - 2 - NEXT_LABEL.len()
    }

    /// First column of the close button on the top border.
    #[must_use]
    pub const fn close_col(&self) -> usize {
        self.left + self.width - 2 - CLOSE_LABEL.len()
    }

    /// Resolves a click at `(row, col)` to a modal control.
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<ModalButton> {
        let within = |start: usize, label: &str| col >= start && col < start + label.len();

        if row == self.top && within(self.close_col(), CLOSE_LABEL) {
            return Some(ModalButton::Close);
        }
        if row == self.button_row() {
            if within(self.prev_col(), PREV_LABEL) {
                return Some(ModalButton::Prev);
            }
            if within(self.next_col(), NEXT_LABEL) {
                return Some(ModalButton::Next);
            }
        }
        None
    }
}

/// Returns `true` if `row` is part of the search box.
#[must_use]
pub const fn is_search_bar_row(row: usize) -> bool {
    row >= SEARCH_BAR_ROW && row < SEARCH_BAR_ROW + SEARCH_BAR_HEIGHT
}
