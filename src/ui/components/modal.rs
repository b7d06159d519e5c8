//! Detail modal component renderer.
//!
//! Drawn last, on top of the gallery, inside the box described by
//! [`ModalLayout`]. Every line is padded to the full box width so nothing
//! underneath shows through.
//!
//! ```text
//! ╭─ Profile 2 of 12 ──────────────────[X]─╮
//! │                                         │
//! │               Bob Jones                 │
//! │            bob@example.com              │
//! │                 Denver                  │
//! │ ─────────────────────────────────────── │
//! │ Phone     (555) 010-0101                │
//! │ Address   2 Oak Ave, Denver, CO 80201   │
//! │ Birthday  06-07-1985                    │
//! │ Photo     https://...                   │
//! │                                         │
//! │ [ < Prev ]                 [ Next > ]   │
//! ╰─────────────────────────────────────────╯
//! ```

use crate::ui::helpers::{display_width, position_cursor, truncate};
use crate::ui::layout::{ModalLayout, CLOSE_LABEL, NEXT_LABEL, PREV_LABEL};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ModalView;

const LABEL_WIDTH: usize = 10;

/// Renders the detail overlay for `modal`.
pub fn render_modal(modal: &ModalView, theme: &Theme) {
    let layout = &modal.layout;
    let inner = layout.inner_width();
    let frame = Theme::fg(&theme.colors.modal_border);

    render_top_border(modal, &frame, theme);

    let name_style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.name_fg));
    let text_style = Theme::fg(&theme.colors.text_normal);
    let dim_style = Theme::fg(&theme.colors.text_dim);

    let mut row = layout.top + 1;
    let mut line = |content: &str, style: &str| {
        render_line(layout, row, &frame, &centered(content, inner), style);
        row += 1;
    };

    line("", &text_style);
    line(&modal.name, &name_style);
    line(&modal.email, &text_style);
    line(&modal.city, &dim_style);

    let separator = "─".repeat(inner);
    render_line(layout, row, &frame, &separator, &dim_style);
    row += 1;

    for (label, value) in [
        ("Phone", &modal.phone),
        ("Address", &modal.address),
        ("Birthday", &modal.birthday),
        ("Photo", &modal.picture_url),
    ] {
        let content = format!("{label:<width$}{value}", width = LABEL_WIDTH);
        render_line(layout, row, &frame, &content, &text_style);
        row += 1;
    }

    render_line(layout, row, &frame, "", &text_style);
    render_line(layout, layout.button_row(), &frame, "", &text_style);
    render_buttons(modal, theme);

    position_cursor(layout.top + layout.height - 1, layout.left);
    print!("{frame}╰{}╯{}", "─".repeat(layout.width.saturating_sub(2)), Theme::reset());
}

fn render_top_border(modal: &ModalView, frame: &str, theme: &Theme) {
    let layout = &modal.layout;

    position_cursor(layout.top, layout.left);
    print!("{frame}╭{}╮{}", "─".repeat(layout.width.saturating_sub(2)), Theme::reset());

    let title = if modal.position == 0 {
        " Profile ".to_string()
    } else {
        format!(" Profile {} of {} ", modal.position, modal.total)
    };
    position_cursor(layout.top, layout.left + 2);
    print!("{}{}{title}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg), Theme::reset());

    position_cursor(layout.top, layout.close_col());
    print!("{}{CLOSE_LABEL}{}", Theme::fg(&theme.colors.error_fg), Theme::reset());
}

fn render_buttons(modal: &ModalView, theme: &Theme) {
    let layout = &modal.layout;
    let style = |enabled: bool| {
        if enabled {
            format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.selection_fg))
        } else {
            format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim))
        }
    };

    position_cursor(layout.button_row(), layout.prev_col());
    print!("{}{PREV_LABEL}{}", style(modal.has_prev), Theme::reset());

    position_cursor(layout.button_row(), layout.next_col());
    print!("{}{NEXT_LABEL}{}", style(modal.has_next), Theme::reset());
}

/// Draws one framed content line; `content` is cut or padded to the inner width.
fn render_line(layout: &ModalLayout, row: usize, frame: &str, content: &str, style: &str) {
    let inner = layout.inner_width();
    let content = truncate(content, inner);
    let padding = inner.saturating_sub(display_width(&content));

    position_cursor(row, layout.left);
    print!("{frame}│{} ", Theme::reset());
    print!("{style}{content}{}{}", " ".repeat(padding), Theme::reset());
    print!(" {frame}│{}", Theme::reset());
}

fn centered(text: &str, width: usize) -> String {
    let text = truncate(text, width);
    let padding = width.saturating_sub(display_width(&text)) / 2;
    format!("{}{text}", " ".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered() {
        assert_eq!(centered("ab", 6), "  ab");
        assert_eq!(centered("abcdefgh", 4), "abc…");
        assert_eq!(centered("", 4), "  ");
    }
}
