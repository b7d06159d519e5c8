//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the component renderers
//!
//! Output goes to stdout, which Zellij captures as the plugin pane contents.

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI for a pane of `rows` x `cols` cells.
///
/// Does not clear the screen; Zellij hands the plugin a fresh frame on every
/// render call.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let _span = tracing::trace_span!("render", rows = rows, cols = cols).entered();
    let viewmodel = state.compute_viewmodel(rows, cols);

    components::render_directory(&viewmodel, &state.theme, cols, rows);
}
