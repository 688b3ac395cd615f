use tracing::{debug, trace};

use crate::core::{Axis, AxisSelection, LinearScale, Viewport, XField, YField};
use crate::data::Dataset;
use crate::error::ChartResult;
use crate::interaction::ChartEvent;
use crate::render::Renderer;

use super::frame_builder::{AxisLabelState, axis_label_states, build_frame};
use super::{ChartConfig, ChartState};

/// Pixel position of one marker, exposed for hosts and tests.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPosition {
    pub abbr: String,
    pub x: f64,
    pub y: f64,
}

/// Chart controller facade consumed by host applications.
///
/// Owns the dataset, the current axis selection and derived scales, and the
/// renderer; hosts drive it through select/resize commands or [`ChartEvent`]
/// dispatch.
pub struct ScatterChart<R: Renderer> {
    renderer: R,
    dataset: Dataset,
    config: ChartConfig,
    state: ChartState,
}

impl<R: Renderer> ScatterChart<R> {
    /// Builds scales for the initial selection and renders the first frame
    /// immediately (no transition).
    ///
    /// Fails on invalid config geometry or an empty/invalid dataset; nothing
    /// is rendered on failure.
    pub fn new(renderer: R, dataset: Dataset, config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let state = ChartState::derive(
            &dataset,
            config.viewport,
            config.margins,
            config.initial_selection,
        )?;

        let mut chart = Self {
            renderer,
            dataset,
            config,
            state,
        };
        debug!(
            records = chart.dataset.len(),
            x_field = chart.state.selection().x.name(),
            y_field = chart.state.selection().y.name(),
            "initializing scatter chart"
        );
        chart.render_immediate()?;
        Ok(chart)
    }

    /// Activates an x field.
    ///
    /// Re-selecting the active field is a no-op returning `false`: selection,
    /// scales, and rendered positions all stay untouched and no frame is
    /// emitted. Otherwise only the x scale is re-derived and a transitioned
    /// re-render runs.
    pub fn select_x_field(&mut self, field: XField) -> ChartResult<bool> {
        if field == self.state.selection().x {
            trace!(field = field.name(), "x field already active, skipping");
            return Ok(false);
        }

        self.state = self.state.with_x_field(&self.dataset, field)?;
        debug!(field = field.name(), "x field selected");
        self.render_transitioned()?;
        Ok(true)
    }

    /// Activates a y field. Same no-op and single-axis-rescale semantics as
    /// [`Self::select_x_field`].
    pub fn select_y_field(&mut self, field: YField) -> ChartResult<bool> {
        if field == self.state.selection().y {
            trace!(field = field.name(), "y field already active, skipping");
            return Ok(false);
        }

        self.state = self.state.with_y_field(&self.dataset, field)?;
        debug!(field = field.name(), "y field selected");
        self.render_transitioned()?;
        Ok(true)
    }

    /// Activates a field by raw name, as delivered by label-click events.
    ///
    /// Names that match no selectable field on `axis` are an explicit ignored
    /// no-op rather than an error.
    pub fn select_axis_by_name(&mut self, axis: Axis, name: &str) -> ChartResult<bool> {
        match axis {
            Axis::X => match XField::parse(name) {
                Some(field) => self.select_x_field(field),
                None => {
                    debug!(field = name, "ignoring unknown x field selection");
                    Ok(false)
                }
            },
            Axis::Y => match YField::parse(name) {
                Some(field) => self.select_y_field(field),
                None => {
                    debug!(field = name, "ignoring unknown y field selection");
                    Ok(false)
                }
            },
        }
    }

    /// Rebuilds the chart for a new viewport.
    ///
    /// A deliberate full teardown/rebuild rather than an incremental
    /// relayout: plot geometry and both scales are re-derived for the current
    /// selection, then an immediate (untransitioned) frame is rendered.
    pub fn on_resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        debug!(
            width = viewport.width,
            height = viewport.height,
            "rebuilding chart for resized viewport"
        );
        self.state = ChartState::derive(
            &self.dataset,
            viewport,
            self.config.margins,
            self.state.selection(),
        )?;
        self.config.viewport = viewport;
        self.render_immediate()
    }

    /// Dispatches one host event.
    pub fn handle_event(&mut self, event: &ChartEvent) -> ChartResult<()> {
        match event {
            ChartEvent::AxisLabelActivated { axis, field } => {
                self.select_axis_by_name(*axis, field).map(|_| ())
            }
            ChartEvent::ViewportResized { width, height } => {
                self.on_resize(Viewport::new(*width, *height))
            }
        }
    }

    /// Renders the current state with the configured transition.
    pub fn render_transitioned(&mut self) -> ChartResult<()> {
        let frame = build_frame(
            &self.dataset,
            self.state,
            &self.config,
            Some(self.config.transition),
        )?;
        self.renderer.render(&frame)
    }

    /// Renders the current state immediately, without a transition.
    pub fn render_immediate(&mut self) -> ChartResult<()> {
        let frame = build_frame(&self.dataset, self.state, &self.config, None)?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn selection(&self) -> AxisSelection {
        self.state.selection()
    }

    #[must_use]
    pub fn state(&self) -> ChartState {
        self.state
    }

    #[must_use]
    pub fn x_scale(&self) -> LinearScale {
        self.state.x_scale()
    }

    #[must_use]
    pub fn y_scale(&self) -> LinearScale {
        self.state.y_scale()
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Active/inactive label assignment for every selectable field.
    ///
    /// Exactly one label per axis is active, and it always matches the
    /// current selection.
    #[must_use]
    pub fn axis_label_states(&self) -> Vec<AxisLabelState> {
        axis_label_states(self.state.selection())
    }

    /// Current plot-relative marker pixel positions, one per record.
    pub fn marker_positions(&self) -> ChartResult<Vec<MarkerPosition>> {
        let selection = self.state.selection();
        self.dataset
            .records()
            .iter()
            .map(|record| {
                Ok(MarkerPosition {
                    abbr: record.abbr.clone(),
                    x: self
                        .state
                        .x_scale()
                        .value_to_pixel(record.x_value(selection.x))?,
                    y: self
                        .state
                        .y_scale()
                        .value_to_pixel(record.y_value(selection.y))?,
                })
            })
            .collect()
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
