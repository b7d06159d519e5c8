//! Header component renderer.
//!
//! Renders the title bar with the directory name and the shown/total profile
//! counts, centered and bold.

use crate::ui::helpers::{display_width, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title bar at `row` and returns the next free row.
///
/// The title is truncated on panes narrower than the title itself.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = truncate(&header.title, cols);
    let title_len = display_width(&title);
    let padding = cols.saturating_sub(title_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}{title}", " ".repeat(padding));
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));

    print!("{}", Theme::reset());
    row + 1
}
