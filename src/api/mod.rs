mod chart_state;
mod config;
mod controller;
mod frame_builder;

pub use chart_state::ChartState;
pub use config::ChartConfig;
pub use controller::{MarkerPosition, ScatterChart};
pub use frame_builder::{AxisLabelState, axis_label_states};
