//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`catalog`]: grouped list of sample values with the current selection
//! - [`detail`]: decoded report, predicate flags and referent chain of the
//!   selected value
//! - [`search`]: live lower-bound search over a fixed sorted sequence
//! - [`status`]: status bar with keybindings and position
//!
//! Each pane module exports a primary `render_*_pane()` (or
//! `render_status_bar()`) function that draws into the given area and
//! keeps no state of its own beyond the scroll offset it is handed.

pub mod catalog;
pub mod detail;
pub mod search;
pub mod status;

pub use catalog::render_catalog_pane;
pub use detail::render_detail_pane;
pub use search::{render_search_pane, SearchRenderData};
pub use status::render_status_bar;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Border style shared by all panes
fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Clamp `offset` so that `total` rows fill a pane of `visible` rows
fn clamp_scroll(offset: &mut usize, total: usize, visible: usize) {
    if total > visible {
        *offset = (*offset).min(total - visible);
    } else {
        *offset = 0;
    }
}
