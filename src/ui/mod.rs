use ratatui::prelude::*;

use crate::app::ViewState;
use crate::config::Config;
use crate::dice::DieKind;

pub mod grid;
pub mod render;

pub use render::draw_screen;

/// The die whose button covers (`column`, `row`) on a screen of size `area`.
pub fn button_at(area: Rect, state: &ViewState, cfg: &Config, column: u16, row: u16) -> Option<DieKind> {
    if area.height < grid::MIN_HEIGHT {
        return None;
    }
    let arrangement = state.arrangement();
    let screen = grid::screen_layout(area, arrangement.rows.len());
    let rects = grid::button_rects(screen.grid, &arrangement, cfg);
    grid::hit(&rects, column, row).map(|i| DieKind::ALL[i])
}
