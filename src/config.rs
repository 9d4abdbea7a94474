use std::path::PathBuf;
use std::str::FromStr;

use crate::error::AppError;
use crate::layout::GridMode;

// Defaults, in terminal cells.
pub const BUTTON_W: u16 = 14; // "100-sided" plus border and a little air
pub const BUTTON_H: u16 = 3;
pub const SPACING: u16 = 1;
pub const H_PADDING: u16 = 2;
pub const FIXED_COLUMNS: u16 = 3;
pub const MESSAGE_H: u16 = 3;
pub const TITLE: &str = "Dungeon Dice";

pub const ENV_BUTTON_W: &str = "DUNGEON_DICE_BUTTON_W";
pub const ENV_SPACING: &str = "DUNGEON_DICE_SPACING";
pub const ENV_PADDING: &str = "DUNGEON_DICE_PADDING";
pub const ENV_COLUMNS: &str = "DUNGEON_DICE_COLUMNS";
pub const ENV_MODE: &str = "DUNGEON_DICE_MODE";
pub const ENV_LOG_DIR: &str = "DUNGEON_DICE_LOG_DIR";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub button_width: u16,
    pub spacing: u16,
    pub horizontal_padding: u16,
    pub fixed_columns: u16,
    pub mode: GridMode,
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            button_width: BUTTON_W,
            spacing: SPACING,
            horizontal_padding: H_PADDING,
            fixed_columns: FIXED_COLUMNS,
            mode: GridMode::default(),
            log_dir: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from `lookup`; unset or blank entries keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut cfg = Config::default();

        if let Some(v) = get(ENV_BUTTON_W) {
            cfg.button_width = parse_nonzero(ENV_BUTTON_W, &v)?;
        }
        if let Some(v) = get(ENV_SPACING) {
            cfg.spacing = parse(ENV_SPACING, &v)?;
        }
        if let Some(v) = get(ENV_PADDING) {
            cfg.horizontal_padding = parse(ENV_PADDING, &v)?;
        }
        if let Some(v) = get(ENV_COLUMNS) {
            cfg.fixed_columns = parse_nonzero(ENV_COLUMNS, &v)?;
        }
        if let Some(v) = get(ENV_MODE) {
            cfg.mode = GridMode::parse(&v).ok_or_else(|| AppError::Config {
                var: ENV_MODE,
                value: v.clone(),
            })?;
        }
        cfg.log_dir = get(ENV_LOG_DIR).map(PathBuf::from);
        Ok(cfg)
    }
}

fn parse<T: FromStr>(var: &'static str, value: &str) -> Result<T, AppError> {
    value.trim().parse().map_err(|_| AppError::Config {
        var,
        value: value.to_string(),
    })
}

fn parse_nonzero(var: &'static str, value: &str) -> Result<u16, AppError> {
    match parse::<u16>(var, value)? {
        0 => Err(AppError::Config {
            var,
            value: value.to_string(),
        }),
        n => Ok(n),
    }
}
