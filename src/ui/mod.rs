//! User interface rendering layer with component-based architecture.
//!
//! Transforms view models into ANSI-styled output through composable rendering
//! components, with theme support, a responsive card grid, and search match
//! highlighting.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`gallery`]: The card container (which cards exist, click resolution)
//! - [`layout`]: Screen geometry shared by drawing and hit-testing
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, formatting)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod gallery;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use gallery::{Card, CardRenderer};
pub use layout::{GalleryLayout, ModalLayout, Viewport};
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    CardView, EmptyState, FooterInfo, HeaderInfo, ModalView, SearchBarInfo, UIViewModel,
};
