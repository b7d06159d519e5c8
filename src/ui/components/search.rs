//! Search bar component renderer.
//!
//! The search form is always on screen. It is drawn in the accent color while
//! it has keyboard focus and in the plain border color otherwise.

use crate::ui::helpers::{display_width, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

const PLACEHOLDER: &str = "press / or click to search by name, email or city";

/// Renders the 3-line search box starting at `row` and returns the next free row.
///
/// ```text
/// [margin] ┌─────────────┐
/// [margin] │ Search: ... │
/// [margin] └─────────────┘
/// ```
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2).max(2);
    let inner_width = box_width - 2;
    let frame = if search.is_focused {
        Theme::fg(&theme.colors.search_bar_border)
    } else {
        Theme::fg(&theme.colors.border)
    };

    position_cursor(row, 1);
    print!("{}{frame}┌{}┐{}", " ".repeat(SEARCH_BOX_MARGIN), "─".repeat(inner_width), Theme::reset());

    let (text, text_style) = if search.query.is_empty() && !search.is_focused {
        (format!(" Search: {PLACEHOLDER}"), Theme::fg(&theme.colors.text_dim))
    } else if search.is_focused {
        (format!(" Search: {}▏", search.query), Theme::fg(&theme.colors.text_normal))
    } else {
        (format!(" Search: {}", search.query), Theme::fg(&theme.colors.text_normal))
    };
    let text = truncate(&text, inner_width);
    let padding = inner_width.saturating_sub(display_width(&text));

    position_cursor(row + 1, 1);
    print!("{}{frame}│", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{text_style}{text}{}", " ".repeat(padding));
    print!("{frame}│{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}{frame}└{}┘{}", " ".repeat(SEARCH_BOX_MARGIN), "─".repeat(inner_width), Theme::reset());

    row + 3
}
