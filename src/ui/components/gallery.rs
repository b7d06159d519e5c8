//! Card grid component renderer.
//!
//! Each card is a rounded box with an initials avatar and three text lines:
//!
//! ```text
//! ╭──────────────────────────────────────╮
//! │  AS  Alice Smith                     │
//! │      alice.smith@example.com         │
//! │      Boston, Massachusetts           │
//! ╰──────────────────────────────────────╯
//! ```
//!
//! The selected card gets the selection border color and bold text. Search
//! matches are highlighted in every text line.

use crate::ui::helpers::{display_width, position_cursor, render_highlighted_text};
use crate::ui::layout::{GalleryLayout, CARD_WIDTH};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardView;

/// Cells between the left border and the text column (avatar included).
const TEXT_INDENT: usize = 6;

/// Renders every card in `cards` at the position `layout` assigns it.
pub fn render_gallery(cards: &[CardView], layout: &GalleryLayout, theme: &Theme) {
    for card in cards {
        if let Some((row, col)) = layout.card_origin(card.position) {
            render_card(row, col, card, theme);
        }
    }
}

fn render_card(row: usize, col: usize, card: &CardView, theme: &Theme) {
    let inner = CARD_WIDTH - 2;
    let frame = if card.is_selected {
        format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.selection_fg))
    } else {
        Theme::fg(&theme.colors.card_border)
    };

    position_cursor(row, col);
    print!("{frame}╭{}╮{}", "─".repeat(inner), Theme::reset());

    let name_style = if card.is_selected {
        format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.name_fg))
    } else {
        Theme::fg(&theme.colors.name_fg)
    };
    let dim_style = Theme::fg(&theme.colors.text_dim);

    let lines = [
        (&card.name, &card.name_highlights, &name_style, &theme.colors.name_fg),
        (&card.email, &card.email_highlights, &dim_style, &theme.colors.text_dim),
        (&card.location, &card.location_highlights, &dim_style, &theme.colors.text_dim),
    ];

    for (offset, (text, highlights, style, color)) in lines.into_iter().enumerate() {
        position_cursor(row + 1 + offset, col);
        print!("{frame}│{}", Theme::reset());

        if offset == 0 {
            print!(" ");
            print!("{}", Theme::fg(&theme.colors.avatar_fg));
            print!("{}", Theme::bg(&theme.colors.avatar_bg));
            print!("{:^4}", card.initials);
            print!("{} ", Theme::reset());
        } else {
            print!("{}", " ".repeat(TEXT_INDENT));
        }

        print!("{style}");
        render_highlighted_text(text, highlights, theme, color);
        print!("{}", Theme::reset());
        print!("{}", " ".repeat(inner.saturating_sub(TEXT_INDENT + display_width(text))));

        print!("{frame}│{}", Theme::reset());
    }

    position_cursor(row + 4, col);
    print!("{frame}╰{}╯{}", "─".repeat(inner), Theme::reset());
}
