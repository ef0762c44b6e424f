//! Projection inputs, slider ranges and scenario loading

mod data;
pub mod loader;

pub use data::{
    ProjectionInput, SliderRange, DEFAULT_INITIAL_INVESTMENT, DEFAULT_MONTHLY_RATE_PERCENT,
};
pub use loader::{load_inputs, load_inputs_from_reader};
