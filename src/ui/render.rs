use ratatui::prelude::*;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::app::ViewState;
use crate::config::{Config, TITLE};
use crate::dice::DieKind;

use super::grid::{button_rects, screen_layout, MIN_HEIGHT};

pub fn draw_screen(frame: &mut Frame, state: &ViewState, cfg: &Config) {
    let area = frame.size();

    if area.height < MIN_HEIGHT {
        let msg = Paragraph::new(format!("RESIZE (min height: {})", MIN_HEIGHT))
            .alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    let arrangement = state.arrangement();
    let screen = screen_layout(area, arrangement.rows.len());

    draw_title(frame, screen.title);
    draw_message(frame, state, screen.message);
    for (index, rect) in button_rects(screen.grid, &arrangement, cfg) {
        draw_button(frame, DieKind::ALL[index], index == state.selected, rect);
    }
    draw_status(frame, state, screen.status);
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(TITLE)
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn draw_message(frame: &mut Frame, state: &ViewState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = match state.last_roll {
        None => Line::styled("Pick a die and roll it", Style::default().add_modifier(Modifier::DIM)),
        Some(roll) => {
            // Top face and a one get their own colour.
            let style = match roll.outcome {
                n if n == roll.kind.sides() => Style::default().fg(Color::Green),
                1 => Style::default().fg(Color::Red),
                _ => Style::default(),
            };
            Line::styled(state.message.as_str(), style.add_modifier(Modifier::BOLD))
        }
    };

    // Roughly center the sentence vertically.
    let line_count = 1 + (text.width() as u16).saturating_sub(1) / inner.width.max(1);
    let top = inner.height.saturating_sub(line_count) / 2;
    let body = Rect {
        y: inner.y + top,
        height: inner.height - top,
        ..inner
    };
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, body);
}

fn draw_button(frame: &mut Frame, kind: DieKind, selected: bool, area: Rect) {
    let (border, style) = if selected {
        (
            BorderType::Thick,
            Style::default()
                .fg(Color::Yellow)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (BorderType::Rounded, Style::default().fg(Color::White).bg(Color::Red))
    };
    let button = Paragraph::new(kind.label())
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_type(border));
    frame.render_widget(button, area);
}

fn draw_status(frame: &mut Frame, state: &ViewState, area: Rect) {
    let status = Paragraph::new(Line::raw(format!(
        "{} {} per row │ ←→↑↓ pick  enter roll  1-7 quick  m mode  q quit",
        state.mode, state.plan.items_per_row
    )))
    .style(Style::default().add_modifier(Modifier::DIM))
    .alignment(Alignment::Left);
    frame.render_widget(status, area);
}
