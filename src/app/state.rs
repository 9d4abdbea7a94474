use rand::Rng;
use tracing::{debug, info, trace};

use crate::config::Config;
use crate::dice::{DieKind, RollResult};
use crate::layout::{arrange, plan, Arrangement, GridMode, LayoutPlan};

const DICE_COUNT: usize = DieKind::ALL.len();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Resize(u16),
    Left,
    Right,
    Up,
    Down,
    RollSelected,
    Roll(DieKind),
    CycleMode,
}

/// Everything the screen shows. Each event produces a new value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub message: String,
    pub last_roll: Option<RollResult>,
    pub plan: LayoutPlan,
    pub mode: GridMode,
    pub selected: usize,
    pub width: u16,
}

impl ViewState {
    pub fn new(cfg: &Config, width: u16) -> Self {
        Self {
            message: String::new(),
            last_roll: None,
            plan: plan_for(cfg, cfg.mode, width),
            mode: cfg.mode,
            selected: 0,
            width,
        }
    }

    pub fn arrangement(&self) -> Arrangement {
        arrange(self.mode, self.plan, DICE_COUNT)
    }

    pub fn selected_kind(&self) -> DieKind {
        DieKind::ALL[self.selected.min(DICE_COUNT - 1)]
    }

    pub fn apply<R: Rng>(self, action: Action, cfg: &Config, rng: &mut R) -> Self {
        match action {
            Action::Resize(width) => {
                let plan = plan_for(cfg, self.mode, width);
                trace!(width, per_row = plan.items_per_row, overflow = plan.overflow_count, "replanned");
                Self { plan, width, ..self }
            }
            Action::Left => Self {
                selected: (self.selected + DICE_COUNT - 1) % DICE_COUNT,
                ..self
            },
            Action::Right => Self {
                selected: (self.selected + 1) % DICE_COUNT,
                ..self
            },
            Action::Up => self.step_row(-1),
            Action::Down => self.step_row(1),
            Action::RollSelected => {
                let kind = self.selected_kind();
                self.rolled(RollResult::roll_with(kind, rng))
            }
            Action::Roll(kind) => self.rolled(RollResult::roll_with(kind, rng)),
            Action::CycleMode => {
                let mode = self.mode.next();
                info!(%mode, "grid mode changed");
                Self {
                    plan: plan_for(cfg, mode, self.width),
                    mode,
                    ..self
                }
            }
        }
    }

    fn rolled(self, roll: RollResult) -> Self {
        debug!(die = %roll.kind, outcome = roll.outcome, "rolled");
        Self {
            message: roll.message(),
            last_roll: Some(roll),
            selected: roll.kind.index(),
            ..self
        }
    }

    fn step_row(self, delta: isize) -> Self {
        let grid = self.arrangement();
        let Some((row, col)) = grid.position_of(self.selected) else {
            return self;
        };
        let target = row as isize + delta;
        if target < 0 {
            return self;
        }
        match grid.index_at(target as usize, col) {
            Some(selected) => Self { selected, ..self },
            None => self,
        }
    }
}

fn plan_for(cfg: &Config, mode: GridMode, width: u16) -> LayoutPlan {
    match mode {
        GridMode::Fixed => LayoutPlan::with_columns(usize::from(cfg.fixed_columns), DICE_COUNT),
        GridMode::Adaptive | GridMode::Wrapped => plan(
            width,
            cfg.button_width,
            cfg.spacing,
            DICE_COUNT,
            cfg.horizontal_padding,
        ),
    }
}
