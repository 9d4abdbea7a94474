pub mod kind;
pub mod roll;

pub use kind::DieKind;
pub use roll::RollResult;
