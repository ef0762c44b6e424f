//! Growth Projector - monthly investment growth series and doubling milestones
//!
//! This library provides:
//! - The growth projection (`project`) under either doubling rule
//! - Derived milestones: doubling month/value, annual rate, risk-free month
//! - Axis, currency and stat-card formatting for a chart front-end
//! - A slider-driven calculator that recomputes on every input change
//! - Batch and slider-grid sweeps

pub mod config;
pub mod error;
pub mod format;
pub mod inputs;
pub mod projection;
pub mod scenario;
pub mod session;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{ConfigError, LoadError, ProjectionError};
pub use inputs::{ProjectionInput, SliderRange};
pub use projection::{
    project, DoublingRule, GrowthProjector, ProjectionConfig, ProjectionPoint, ProjectionResult,
};
pub use scenario::ScenarioRunner;
pub use session::Calculator;
