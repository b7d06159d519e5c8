//! Composable UI component renderers.
//!
//! Each component is responsible for rendering one part of the interface.
//!
//! # Components
//!
//! - [`header`]: Title bar with profile counts
//! - [`footer`]: Keybinding hints
//! - [`search`]: Search form (border, query text)
//! - [`gallery`]: Card grid
//! - [`empty`]: Loading, error and no-match panel
//! - [`modal`]: Detail overlay with Prev/Next controls
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines]
//! [blank line]
//! [Card grid or empty state]
//! [Border]
//! [Footer]
//! ```
//!
//! The modal, when present, is drawn last over the middle of the pane.

mod empty;
mod footer;
mod gallery;
mod header;
mod modal;
mod search;

use crate::ui::helpers::position_cursor;
use crate::ui::layout::{GALLERY_TOP, HEADER_ROW, SEARCH_BAR_ROW};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::render_footer;
use gallery::render_gallery;
use header::render_header;
use modal::render_modal;
use search::render_search_bar;

/// Renders a horizontal border line at `row` and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full directory screen for `vm`.
pub fn render_directory(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let current_row = render_header(HEADER_ROW, &vm.header, theme, cols);
    render_border(current_row, &theme.colors.border, cols);
    render_search_bar(SEARCH_BAR_ROW, &vm.search_bar, theme, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(GALLERY_TOP + 1, empty, theme, cols);
    } else {
        render_gallery(&vm.cards, &vm.gallery, theme);
    }

    let footer_row = rows.max(GALLERY_TOP + 2);
    render_border(footer_row - 1, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);

    if let Some(modal) = &vm.modal {
        render_modal(modal, theme);
    }
}
