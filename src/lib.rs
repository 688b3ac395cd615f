//! scatter-rs: renderer-agnostic interactive scatter chart engine.
//!
//! The crate owns axis-selection state and linear-scale derivation and emits
//! backend-agnostic render frames. CSV decoding is delegated to the `csv`
//! crate, drawing to a [`render::Renderer`] implementation, and event delivery
//! to the host application.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ScatterChart};
pub use error::{ChartError, ChartResult};
