//! Shared rendering utilities and helpers.
//!
//! Low-level text helpers used across the UI components: cursor positioning,
//! match highlighting with proper ANSI reset management, display
//! capitalization, and width-bounded truncation. All text operations work on
//! character indices, not byte indices.
//!
//! # Example
//!
//! ```rust
//! use rolodex::ui::helpers::{capitalize_words, truncate};
//!
//! assert_eq!(capitalize_words("alice smith"), "Alice Smith");
//! assert_eq!(truncate("alice.smith@example.com", 10), "alice.smi…");
//! ```

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Renders `text` with the character ranges in `ranges` highlighted.
///
/// After each highlighted section the foreground color `restore_fg` is
/// re-applied, so the surrounding text keeps its own color.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    restore_fg: &str,
) {
    print!("{}", highlighted_text(text, ranges, theme, restore_fg));
}

/// Builds the ANSI string printed by [`render_highlighted_text`].
///
/// Ranges are clamped to the text, and overlapping or out-of-order ranges
/// are skipped.
#[must_use]
pub fn highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    restore_fg: &str,
) -> String {
    if ranges.is_empty() {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() * 2);
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        out.extend(&chars[current_pos..start]);
        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(&Theme::fg(restore_fg));

        current_pos = end;
    }

    out.extend(&chars[current_pos..]);
    out
}

/// Uppercases the first letter of every space-separated word.
///
/// The remaining letters are left as they are, so `"mcdonald"` becomes
/// `"Mcdonald"` and `"O'Neil"` stays `"O'Neil"`.
#[must_use]
pub fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = c.is_whitespace();
    }

    out
}

/// Shortens `text` to at most `max_chars` characters, ending with `…` if cut.
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }

    let mut out: String = text.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}

/// Number of terminal cells `text` occupies, assuming one cell per character.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_words() {
        assert_eq!(capitalize_words("alice smith"), "Alice Smith");
        assert_eq!(capitalize_words("boston, massachusetts"), "Boston, Massachusetts");
        assert_eq!(capitalize_words("émile zola"), "Émile Zola");
        assert_eq!(capitalize_words(""), "");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
        assert_eq!(truncate("much too long", 5), "much…");
        assert_eq!(truncate("anything", 0), "");
    }

    #[test]
    fn test_highlighted_text_wraps_ranges() {
        let theme = Theme::default();
        let restore = theme.colors.text_normal.clone();
        let out = highlighted_text("Alice Smith", &[(6, 11)], &theme, &restore);

        assert!(out.starts_with("Alice "));
        assert!(out.contains("Smith"));
        assert!(out.contains(&Theme::bg(&theme.colors.match_highlight_bg)));
        assert!(out.ends_with(&Theme::fg(&restore)));
    }

    #[test]
    fn test_highlighted_text_clamps_ranges() {
        let theme = Theme::default();
        let out = highlighted_text("abc", &[(1, 99)], &theme, "#ffffff");
        assert!(out.starts_with('a'));
        assert!(out.contains("bc"));

        assert_eq!(highlighted_text("abc", &[], &theme, "#ffffff"), "abc");
        assert_eq!(highlighted_text("abc", &[(5, 9)], &theme, "#ffffff"), "abc");
    }
}
