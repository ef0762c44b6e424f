//! Projection engine: doubling rules, series generation and milestones

mod state;
mod engine;
mod series;
pub mod milestones;

pub use state::GrowthState;
pub use engine::{project, DoublingRule, GrowthProjector, ProjectionConfig, DEFAULT_MAX_MONTHS};
pub use series::{ChartPoint, ProjectionPoint, ProjectionResult, ProjectionSummary};
