//! Empty state component renderer.
//!
//! Shown in place of the gallery while waiting for permission or the batch,
//! when the fetch failed, and when no profile matches the search.

use crate::ui::helpers::{display_width, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the centered two-line message starting at `row`.
///
/// Errors use the `error_fg` theme color, everything else `empty_state_fg`.
/// The subtitle is always dimmed.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    let color = if empty.is_error {
        &theme.colors.error_fg
    } else {
        &theme.colors.empty_state_fg
    };

    render_centered(row, &empty.message, &Theme::fg(color), cols);

    let subtitle_style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    render_centered(row + 1, &empty.subtitle, &subtitle_style, cols);
}

fn render_centered(row: usize, text: &str, style: &str, cols: usize) {
    let text = truncate(text, cols);
    let len = display_width(&text);
    let padding = cols.saturating_sub(len) / 2;

    position_cursor(row, 1);
    print!("{style}{}{text}", " ".repeat(padding));
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
    print!("{}", Theme::reset());
}
