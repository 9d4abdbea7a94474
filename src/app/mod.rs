use std::io::{stdout, Stdout};
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use crate::config::Config;
use crate::dice::DieKind;
use crate::error::AppError;
use crate::logging;
use crate::ui::{button_at, draw_screen};

mod state;

pub use state::{Action, ViewState};

type Term = Terminal<CrosstermBackend<Stdout>>;

pub fn run() -> Result<(), AppError> {
    let cfg = Config::from_env()?;
    let _log_guard = logging::init(cfg.log_dir.as_deref())?;
    info!(mode = %cfg.mode, button_width = cfg.button_width, "starting");

    let mut tui = TuiGuard::new()?;
    let result = run_loop(tui.terminal_mut(), &cfg);
    info!("exiting");
    result
}

fn run_loop(terminal: &mut Term, cfg: &Config) -> Result<(), AppError> {
    let mut rng = rand::thread_rng();
    let mut state = ViewState::new(cfg, terminal.size()?.width);

    loop {
        terminal.draw(|frame| draw_screen(frame, &state, cfg))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    break;
                }
                key_action(key.code)
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let area = terminal.size()?;
                button_at(area, &state, cfg, mouse.column, mouse.row).map(Action::Roll)
            }
            Event::Resize(width, _) => Some(Action::Resize(width)),
            _ => None,
        };
        if let Some(action) = action {
            state = state.apply(action, cfg, &mut rng);
        }
    }
    Ok(())
}

fn key_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Left => Some(Action::Left),
        KeyCode::Right => Some(Action::Right),
        KeyCode::Up => Some(Action::Up),
        KeyCode::Down => Some(Action::Down),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::RollSelected),
        KeyCode::Char('m') => Some(Action::CycleMode),
        KeyCode::Char(c) => {
            let slot = c.to_digit(10)? as usize;
            DieKind::ALL.get(slot.checked_sub(1)?).copied().map(Action::Roll)
        }
        _ => None,
    }
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = self.terminal.show_cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_roll_by_catalog_position() {
        assert_eq!(key_action(KeyCode::Char('1')), Some(Action::Roll(DieKind::D4)));
        assert_eq!(key_action(KeyCode::Char('7')), Some(Action::Roll(DieKind::D100)));
        assert_eq!(key_action(KeyCode::Char('0')), None);
        assert_eq!(key_action(KeyCode::Char('8')), None);
        assert_eq!(key_action(KeyCode::Char('x')), None);
    }

    #[test]
    fn keys_map_to_actions() {
        assert_eq!(key_action(KeyCode::Enter), Some(Action::RollSelected));
        assert_eq!(key_action(KeyCode::Char(' ')), Some(Action::RollSelected));
        assert_eq!(key_action(KeyCode::Char('m')), Some(Action::CycleMode));
        assert_eq!(key_action(KeyCode::Up), Some(Action::Up));
        assert_eq!(key_action(KeyCode::Tab), None);
    }
}
