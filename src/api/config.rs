use serde::{Deserialize, Serialize};

use crate::core::{AxisSelection, Margins, Viewport, XField, YField};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, Transition};

/// Public chart bootstrap configuration.
///
/// Serializable so host applications can persist/load chart setup without
/// inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default)]
    pub initial_selection: AxisSelection,
    #[serde(default = "default_marker_radius")]
    pub marker_radius: f64,
    #[serde(default = "default_marker_fill")]
    pub marker_fill: Color,
    #[serde(default = "default_active_label_color")]
    pub active_label_color: Color,
    #[serde(default = "default_inactive_label_color")]
    pub inactive_label_color: Color,
    #[serde(default)]
    pub transition: Transition,
}

impl ChartConfig {
    /// Creates a config with default layout and styling for a viewport.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: Margins::default(),
            initial_selection: AxisSelection::default(),
            marker_radius: default_marker_radius(),
            marker_fill: default_marker_fill(),
            active_label_color: default_active_label_color(),
            inactive_label_color: default_inactive_label_color(),
            transition: Transition::default(),
        }
    }

    /// Sets chart margins.
    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Sets the initially active axis fields.
    #[must_use]
    pub fn with_initial_selection(mut self, x: XField, y: YField) -> Self {
        self.initial_selection = AxisSelection::new(x, y);
        self
    }

    /// Sets marker circle radius in pixels.
    #[must_use]
    pub fn with_marker_radius(mut self, radius: f64) -> Self {
        self.marker_radius = radius;
        self
    }

    /// Sets marker fill color.
    #[must_use]
    pub fn with_marker_fill(mut self, fill: Color) -> Self {
        self.marker_fill = fill;
        self
    }

    /// Sets the transition attached to selection-driven re-renders.
    #[must_use]
    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.margins.validate()?;
        if !self.marker_radius.is_finite() || self.marker_radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "marker radius must be finite and > 0".to_owned(),
            ));
        }
        self.marker_fill.validate()?;
        self.active_label_color.validate()?;
        self.inactive_label_color.validate()?;
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_marker_radius() -> f64 {
    10.0
}

fn default_marker_fill() -> Color {
    Color::rgba(0.0, 0.0, 1.0, 0.6)
}

fn default_active_label_color() -> Color {
    Color::rgb(0.0, 0.0, 0.0)
}

fn default_inactive_label_color() -> Color {
    Color::rgb(0.6, 0.6, 0.6)
}
