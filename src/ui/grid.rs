use ratatui::prelude::*;

use crate::config::{Config, BUTTON_H, MESSAGE_H};
use crate::layout::Arrangement;

/// Smallest height that still fits the title, one message line, one button row and the status bar.
pub const MIN_HEIGHT: u16 = 1 + MESSAGE_H + BUTTON_H + 1;

pub struct Screen {
    pub title: Rect,
    pub message: Rect,
    pub grid: Rect,
    pub status: Rect,
}

pub fn screen_layout(area: Rect, grid_rows: usize) -> Screen {
    let grid_h = (grid_rows as u32 * u32::from(BUTTON_H)).min(u32::from(u16::MAX)) as u16;
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(MESSAGE_H),
            Constraint::Length(grid_h),
            Constraint::Length(1),
        ])
        .split(area);
    Screen {
        title: parts[0],
        message: parts[1],
        grid: parts[2],
        status: parts[3],
    }
}

/// Where each button lands inside `grid`, clipped to it. Buttons pushed
/// entirely out of view are left out.
pub fn button_rects(grid: Rect, arrangement: &Arrangement, cfg: &Config) -> Vec<(usize, Rect)> {
    let bw = u32::from(cfg.button_width);
    let gap = u32::from(cfg.spacing);
    let pad = u32::from(cfg.horizontal_padding);
    let inner_x = u32::from(grid.x) + pad;
    let inner_w = u32::from(grid.width).saturating_sub(2 * pad);
    let row_width = |n: usize| {
        let n = n as u32;
        n * bw + n.saturating_sub(1) * gap
    };
    let block_w = row_width(arrangement.columns);

    let mut rects = Vec::new();
    for (r, row) in arrangement.rows.iter().enumerate() {
        let y = u32::from(grid.y) + r as u32 * u32::from(BUTTON_H);
        let width = if row.centered { row_width(row.len) } else { block_w };
        let x0 = inner_x + inner_w.saturating_sub(width) / 2;
        for (i, index) in row.indices().enumerate() {
            let x = x0 + i as u32 * (bw + gap);
            if x >= u32::from(grid.right()) || y >= u32::from(grid.bottom()) {
                continue;
            }
            let rect = Rect::new(x as u16, y as u16, cfg.button_width, BUTTON_H).intersection(grid);
            if rect.width > 0 && rect.height > 0 {
                rects.push((index, rect));
            }
        }
    }
    rects
}

pub fn hit(rects: &[(usize, Rect)], column: u16, row: u16) -> Option<usize> {
    rects
        .iter()
        .find(|(_, r)| column >= r.x && column < r.right() && row >= r.y && row < r.bottom())
        .map(|(i, _)| *i)
}
