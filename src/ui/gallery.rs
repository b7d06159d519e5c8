//! Card gallery contents.
//!
//! [`CardRenderer`] owns the list of cards currently in the gallery, one per
//! profile of the subset it was last asked to render. Each card carries its
//! profile's store index as identity, so a card shown in a filtered gallery
//! still resolves to the right record. Drawing the cards on screen is the job
//! of `ui::components::gallery`; this type only decides *which* cards exist.

use crate::domain::ProfileRecord;
use crate::ui::layout::GalleryLayout;

/// Compact visual summary of one profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Store index of the profile (the card's identity).
    pub index: usize,
    /// `"First Last"` as fetched; capitalization is applied when drawing.
    pub name: String,
    pub email: String,
    /// `"City, State"`.
    pub location: String,
    pub initials: String,
}

impl Card {
    fn from_profile(index: usize, profile: &ProfileRecord) -> Self {
        Self {
            index,
            name: profile.full_name(),
            email: profile.email.clone(),
            location: profile.location(),
            initials: profile.initials(),
        }
    }
}

/// The gallery container: the cards currently rendered, in display order.
#[derive(Debug, Clone, Default)]
pub struct CardRenderer {
    cards: Vec<Card>,
}

impl CardRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the gallery contents with one card per entry of `subset`.
    pub fn render(&mut self, subset: &[(usize, &ProfileRecord)]) {
        self.cards.clear();
        self.cards.extend(
            subset
                .iter()
                .map(|(index, profile)| Card::from_profile(*index, profile)),
        );
        tracing::debug!(card_count = self.cards.len(), "gallery rendered");
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Store indices of the rendered cards, in display order.
    #[must_use]
    pub fn indices(&self) -> Vec<usize> {
        self.cards.iter().map(|card| card.index).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Display position of the card for store index `index`, if rendered.
    #[must_use]
    pub fn position_of(&self, index: usize) -> Option<usize> {
        self.cards.iter().position(|card| card.index == index)
    }

    /// Resolves a click at `(row, col)` to the store index of the card under it.
    #[must_use]
    pub fn card_at(&self, layout: &GalleryLayout, row: usize, col: usize) -> Option<usize> {
        layout
            .card_at(row, col)
            .and_then(|position| self.cards.get(position))
            .map(|card| card.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::layout::{Viewport, CARD_WIDTH, GALLERY_LEFT, GALLERY_TOP};

    fn profile(first: &str, last: &str) -> ProfileRecord {
        ProfileRecord {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}@example.com", first.to_lowercase()),
            city: "Boston".to_string(),
            state: "Massachusetts".to_string(),
            ..ProfileRecord::default()
        }
    }

    #[test]
    fn test_render_tags_cards_with_store_index() {
        let a = profile("alice", "smith");
        let c = profile("carol", "white");
        let mut gallery = CardRenderer::new();
        gallery.render(&[(0, &a), (2, &c)]);

        assert_eq!(gallery.indices(), vec![0, 2]);
        let card = &gallery.cards()[1];
        assert_eq!(card.index, 2);
        assert_eq!(card.name, "carol white");
        assert_eq!(card.email, "carol@example.com");
        assert_eq!(card.location, "Boston, Massachusetts");
        assert_eq!(card.initials, "CW");
    }

    #[test]
    fn test_render_clears_previous_cards() {
        let a = profile("alice", "smith");
        let b = profile("bob", "jones");
        let mut gallery = CardRenderer::new();
        gallery.render(&[(0, &a), (1, &b)]);
        gallery.render(&[(1, &b)]);

        assert_eq!(gallery.indices(), vec![1]);
        gallery.render(&[]);
        assert!(gallery.is_empty());
    }

    #[test]
    fn test_click_resolves_to_store_index() {
        let a = profile("alice", "smith");
        let c = profile("carol", "white");
        let mut gallery = CardRenderer::new();
        gallery.render(&[(0, &a), (2, &c)]);

        let layout = GalleryLayout::compute(Viewport { rows: 40, cols: 130 }, gallery.len(), 0);
        let second_card_col = GALLERY_LEFT + CARD_WIDTH + 2 + 5;

        assert_eq!(gallery.card_at(&layout, GALLERY_TOP + 1, GALLERY_LEFT + 1), Some(0));
        assert_eq!(gallery.card_at(&layout, GALLERY_TOP + 2, second_card_col), Some(2));
        assert_eq!(gallery.card_at(&layout, 1, 1), None);
        assert_eq!(gallery.position_of(2), Some(1));
        assert_eq!(gallery.position_of(1), None);
    }
}
