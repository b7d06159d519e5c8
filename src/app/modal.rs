//! Detail modal state machine.
//!
//! The modal is either [`ModalState::Closed`] or [`ModalState::Open`] on one
//! store index. Opening always replaces the current overlay; Prev/Next step
//! through a navigation sequence and are no-ops at its ends, so the modal never
//! closes from navigation alone.
//!
//! ```text
//!            open(i)                 prev()/next() (not at an end)
//!  Closed ───────────► Open(i) ◄─────────────────────────────┐
//!    ▲                   │  └───────────────────────────────┘
//!    └──── close() ──────┘
//! ```
//!
//! The navigation sequence is chosen by [`NavigationScope`]: either every store
//! index in order, or only the cards currently shown in the gallery.

use crate::domain::error::Result;
use crate::store::ProfileStore;

/// Whether the detail modal is showing, and for which store index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open(usize),
}

/// Which records Prev/Next walk through while the modal is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationScope {
    /// Every record in store order, regardless of the active search.
    #[default]
    Store,
    /// Only the records matching the active search, in gallery order.
    Filtered,
}

impl NavigationScope {
    /// Parses the `navigation` configuration value (`store` or `filtered`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "store" | "all" => Some(Self::Store),
            "filtered" | "visible" => Some(Self::Filtered),
            _ => None,
        }
    }
}

/// Drives the detail overlay.
///
/// `generation` counts overlay constructions. Every successful `open`,
/// `prev` or `next` builds a fresh overlay and bumps it; boundary no-ops leave
/// it untouched.
#[derive(Debug, Clone, Default)]
pub struct ModalController {
    state: ModalState,
    generation: u64,
}

impl ModalController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> ModalState {
        self.state
    }

    /// The store index being shown, if the modal is open.
    #[must_use]
    pub const fn current(&self) -> Option<usize> {
        match self.state {
            ModalState::Open(index) => Some(index),
            ModalState::Closed => None,
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Shows the profile at `index`, replacing any open overlay.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::OutOfRange`](crate::DirectoryError::OutOfRange)
    /// if `index` is not in the store; the state is left unchanged.
    pub fn open(&mut self, index: usize, store: &ProfileStore) -> Result<()> {
        store.get(index)?;

        if let ModalState::Open(previous) = self.state {
            tracing::debug!(previous = previous, "replacing open modal");
        }

        self.show(index);
        Ok(())
    }

    /// Moves to the entry before the current one in `sequence`.
    ///
    /// Returns `false` (and does nothing) if the modal is closed, already at
    /// the first entry, or the current index is not part of `sequence`.
    pub fn prev(&mut self, sequence: &[usize]) -> bool {
        let Some(position) = self.position_in(sequence) else {
            return false;
        };
        if position == 0 {
            tracing::debug!("modal already at first profile");
            return false;
        }
        self.show(sequence[position - 1]);
        true
    }

    /// Moves to the entry after the current one in `sequence`.
    ///
    /// Returns `false` (and does nothing) if the modal is closed, already at
    /// the last entry, or the current index is not part of `sequence`.
    pub fn next(&mut self, sequence: &[usize]) -> bool {
        let Some(position) = self.position_in(sequence) else {
            return false;
        };
        if position + 1 >= sequence.len() {
            tracing::debug!("modal already at last profile");
            return false;
        }
        self.show(sequence[position + 1]);
        true
    }

    /// Destroys the overlay. Returns `false` if it was already closed.
    pub fn close(&mut self) -> bool {
        if self.state == ModalState::Closed {
            return false;
        }
        tracing::debug!("closing modal");
        self.state = ModalState::Closed;
        true
    }

    fn position_in(&self, sequence: &[usize]) -> Option<usize> {
        let current = self.current()?;
        sequence.iter().position(|&index| index == current)
    }

    fn show(&mut self, index: usize) {
        self.state = ModalState::Open(index);
        self.generation += 1;
        tracing::debug!(index = index, generation = self.generation, "modal opened");
    }
}
