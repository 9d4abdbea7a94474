use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal i/o: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid value {value:?} for {var}")]
    Config { var: &'static str, value: String },

    #[error("cannot install log subscriber: {0}")]
    Logging(String),
}
