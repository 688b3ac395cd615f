use crate::core::{Axis, AxisSelection, PlotArea, XField, YField};
use crate::data::Dataset;
use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, Color, FontWeight, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive,
    Transition,
};

use super::{ChartConfig, ChartState};

const AXIS_COLOR: Color = Color::rgb(0.0, 0.0, 0.0);
const AXIS_STROKE_WIDTH: f64 = 1.0;
const TICK_COUNT: usize = 6;
const TICK_LENGTH_PX: f64 = 6.0;
const TICK_FONT_SIZE_PX: f64 = 11.0;
const MARKER_LABEL_FONT_SIZE_PX: f64 = 10.0;
const AXIS_LABEL_FONT_SIZE_PX: f64 = 16.0;
// Stacked x-field labels start this far below the plot, one row apiece.
const X_LABEL_BLOCK_OFFSET_PX: f64 = 20.0;
const X_LABEL_ROW_HEIGHT_PX: f64 = 20.0;
// Y-field labels sit left of the axis, innermost row first.
const Y_LABEL_FIRST_OFFSET_PX: f64 = 30.0;
const Y_LABEL_ROW_WIDTH_PX: f64 = 20.0;

/// Active/inactive assignment for one axis field label.
///
/// Computed declaratively from the selection, so exactly one label per axis is
/// active by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisLabelState {
    pub axis: Axis,
    pub field: &'static str,
    pub text: &'static str,
    pub active: bool,
}

/// Maps every selectable field to its active/inactive label state.
#[must_use]
pub fn axis_label_states(selection: AxisSelection) -> Vec<AxisLabelState> {
    let mut states = Vec::with_capacity(XField::ALL.len() + YField::ALL.len());
    for field in XField::ALL {
        states.push(AxisLabelState {
            axis: Axis::X,
            field: field.name(),
            text: field.display_label(),
            active: field == selection.x,
        });
    }
    for field in YField::ALL {
        states.push(AxisLabelState {
            axis: Axis::Y,
            field: field.name(),
            text: field.display_label(),
            active: field == selection.y,
        });
    }
    states
}

/// Builds one coordinated draw pass: axis lines and ticks, markers, marker
/// labels, then axis field labels with active/inactive styling.
pub(super) fn build_frame(
    dataset: &Dataset,
    state: ChartState,
    config: &ChartConfig,
    transition: Option<Transition>,
) -> ChartResult<RenderFrame> {
    let plot = state.plot();
    let mut frame = RenderFrame::new(state.viewport());
    if let Some(transition) = transition {
        frame = frame.with_transition(transition);
    }

    frame = push_axis_lines(frame, plot);
    frame = push_axis_ticks(frame, state)?;
    frame = push_markers(frame, dataset, state, config)?;
    frame = push_axis_field_labels(frame, state.selection(), plot, config);

    Ok(frame)
}

fn push_axis_lines(frame: RenderFrame, plot: PlotArea) -> RenderFrame {
    frame
        .with_line(LinePrimitive::new(
            plot.left,
            plot.bottom(),
            plot.right(),
            plot.bottom(),
            AXIS_STROKE_WIDTH,
            AXIS_COLOR,
        ))
        .with_line(LinePrimitive::new(
            plot.left,
            plot.top,
            plot.left,
            plot.bottom(),
            AXIS_STROKE_WIDTH,
            AXIS_COLOR,
        ))
}

fn push_axis_ticks(mut frame: RenderFrame, state: ChartState) -> ChartResult<RenderFrame> {
    let plot = state.plot();
    let denominator = (TICK_COUNT - 1) as f64;

    for step in 0..TICK_COUNT {
        let ratio = (step as f64) / denominator;

        let x = plot.left + plot.width * ratio;
        let x_value = state.x_scale().pixel_to_value(plot.width * ratio)?;
        frame = frame
            .with_line(LinePrimitive::new(
                x,
                plot.bottom(),
                x,
                plot.bottom() + TICK_LENGTH_PX,
                AXIS_STROKE_WIDTH,
                AXIS_COLOR,
            ))
            .with_text(TextPrimitive::new(
                format_tick_value(x_value),
                x,
                plot.bottom() + TICK_LENGTH_PX + TICK_FONT_SIZE_PX,
                TICK_FONT_SIZE_PX,
                AXIS_COLOR,
                TextHAlign::Center,
            ));

        // Pixel y grows downward; walk ticks from the bottom of the plot up.
        let y = plot.bottom() - plot.height * ratio;
        let y_value = state.y_scale().pixel_to_value(plot.height * (1.0 - ratio))?;
        frame = frame
            .with_line(LinePrimitive::new(
                plot.left - TICK_LENGTH_PX,
                y,
                plot.left,
                y,
                AXIS_STROKE_WIDTH,
                AXIS_COLOR,
            ))
            .with_text(TextPrimitive::new(
                format_tick_value(y_value),
                plot.left - TICK_LENGTH_PX - 2.0,
                y + TICK_FONT_SIZE_PX / 2.0,
                TICK_FONT_SIZE_PX,
                AXIS_COLOR,
                TextHAlign::Right,
            ));
    }

    Ok(frame)
}

fn push_markers(
    mut frame: RenderFrame,
    dataset: &Dataset,
    state: ChartState,
    config: &ChartConfig,
) -> ChartResult<RenderFrame> {
    let plot = state.plot();
    let selection = state.selection();

    for record in dataset.records() {
        let cx = plot.left + state.x_scale().value_to_pixel(record.x_value(selection.x))?;
        let cy = plot.top + state.y_scale().value_to_pixel(record.y_value(selection.y))?;
        frame = frame
            .with_circle(CirclePrimitive::new(
                cx,
                cy,
                config.marker_radius,
                config.marker_fill,
            ))
            .with_text(TextPrimitive::new(
                record.abbr.clone(),
                cx,
                cy + config.marker_radius / 2.0,
                MARKER_LABEL_FONT_SIZE_PX,
                Color::rgb(1.0, 1.0, 1.0),
                TextHAlign::Center,
            ));
    }

    Ok(frame)
}

fn push_axis_field_labels(
    mut frame: RenderFrame,
    selection: AxisSelection,
    plot: PlotArea,
    config: &ChartConfig,
) -> RenderFrame {
    let mut x_row = 0_usize;
    let mut y_row = 0_usize;

    for label in axis_label_states(selection) {
        let (x, y, h_align) = match label.axis {
            Axis::X => {
                let position = (
                    plot.left + plot.width / 2.0,
                    plot.bottom()
                        + X_LABEL_BLOCK_OFFSET_PX
                        + X_LABEL_ROW_HEIGHT_PX * ((x_row + 1) as f64),
                    TextHAlign::Center,
                );
                x_row += 1;
                position
            }
            Axis::Y => {
                // Glyph rotation for vertical labels stays with the backend.
                let position = (
                    plot.left - Y_LABEL_FIRST_OFFSET_PX - Y_LABEL_ROW_WIDTH_PX * (y_row as f64),
                    plot.top + plot.height / 2.0,
                    TextHAlign::Center,
                );
                y_row += 1;
                position
            }
        };

        let (color, weight) = if label.active {
            (config.active_label_color, FontWeight::Bold)
        } else {
            (config.inactive_label_color, FontWeight::Normal)
        };

        frame = frame.with_text(
            TextPrimitive::new(label.text, x, y, AXIS_LABEL_FONT_SIZE_PX, color, h_align)
                .with_weight(weight),
        );
    }

    frame
}

fn format_tick_value(value: f64) -> String {
    if value.abs() >= 100.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
