use std::time::Duration;

use scatter_rs::api::{ChartConfig, ScatterChart};
use scatter_rs::core::{Viewport, XField};
use scatter_rs::data::{Dataset, Record};
use scatter_rs::error::ChartResult;
use scatter_rs::render::{
    CirclePrimitive, Color, LinePrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
    Transition,
};

/// Test renderer keeping the last frame for content assertions.
#[derive(Debug, Default)]
struct RecordingRenderer {
    frames: Vec<RenderFrame>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames.push(frame.clone());
        Ok(())
    }
}

fn dataset() -> Dataset {
    Dataset::new(vec![Record {
        abbr: "TX".to_owned(),
        age: 34.0,
        income: 54_000.0,
        healthcare: 17.1,
        obesity: 32.4,
        smokes: 14.3,
    }, Record {
        abbr: "VT".to_owned(),
        age: 42.0,
        income: 57_000.0,
        healthcare: 3.7,
        obesity: 24.7,
        smokes: 16.0,
    }])
    .expect("valid dataset")
}

#[test]
fn frame_validation_rejects_bad_geometry() {
    let viewport = Viewport::new(800, 600);

    let bad_circle = RenderFrame::new(viewport).with_circle(CirclePrimitive::new(
        10.0,
        10.0,
        -1.0,
        Color::rgb(0.0, 0.0, 1.0),
    ));
    assert!(bad_circle.validate().is_err());

    let bad_color = RenderFrame::new(viewport).with_line(LinePrimitive::new(
        0.0,
        0.0,
        10.0,
        10.0,
        1.0,
        Color::rgb(2.0, 0.0, 0.0),
    ));
    assert!(bad_color.validate().is_err());

    let empty_text = RenderFrame::new(viewport).with_text(TextPrimitive::new(
        "",
        0.0,
        0.0,
        12.0,
        Color::rgb(0.0, 0.0, 0.0),
        TextHAlign::Left,
    ));
    assert!(empty_text.validate().is_err());
}

#[test]
fn frame_validation_rejects_empty_viewport() {
    let frame = RenderFrame::new(Viewport::new(0, 600));
    assert!(frame.validate().is_err());
}

#[test]
fn initial_frame_is_immediate_and_selection_frames_are_transitioned() {
    let mut chart = ScatterChart::new(
        RecordingRenderer::default(),
        dataset(),
        ChartConfig::new(Viewport::new(400, 420)),
    )
    .expect("chart init");

    chart.select_x_field(XField::Income).expect("select");
    chart.on_resize(Viewport::new(800, 450)).expect("resize");

    let renderer = chart.into_renderer();
    assert_eq!(renderer.frames.len(), 3);
    assert_eq!(renderer.frames[0].transition, None);
    assert_eq!(
        renderer.frames[1].transition,
        Some(Transition::default()),
        "selection re-renders carry the configured transition"
    );
    assert_eq!(renderer.frames[2].transition, None, "resize renders immediately");
}

#[test]
fn configured_transition_duration_is_attached() {
    let config = ChartConfig::new(Viewport::new(400, 420))
        .with_transition(Transition::new(Duration::from_millis(250)));
    let mut chart =
        ScatterChart::new(RecordingRenderer::default(), dataset(), config).expect("chart init");

    chart.select_x_field(XField::Healthcare).expect("select");

    let renderer = chart.into_renderer();
    let transition = renderer.frames[1].transition.expect("transitioned frame");
    assert_eq!(transition.duration, Duration::from_millis(250));
}

#[test]
fn markers_and_labels_move_together() {
    let mut chart = ScatterChart::new(
        RecordingRenderer::default(),
        dataset(),
        ChartConfig::new(Viewport::new(400, 420)),
    )
    .expect("chart init");
    chart.select_x_field(XField::Income).expect("select");

    let renderer = chart.into_renderer();
    let frame = renderer.frames.last().expect("frame");

    for (circle, abbr) in frame.circles.iter().zip(["TX", "VT"]) {
        let label = frame
            .texts
            .iter()
            .find(|text| text.text == abbr)
            .expect("marker label");
        assert_eq!(label.x, circle.cx);
        assert!((label.y - circle.cy).abs() <= circle.radius);
    }
}
