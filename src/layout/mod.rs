pub mod arrange;
pub mod planner;

pub use arrange::{arrange, Arrangement, GridMode};
pub use planner::{plan, LayoutPlan};
