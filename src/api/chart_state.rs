use crate::core::{AxisSelection, LinearScale, Margins, PlotArea, Viewport, XField, YField};
use crate::data::Dataset;
use crate::error::ChartResult;

/// Controller-held derived state for the current viewport and selection.
///
/// Scales are recreated, never mutated in place: selecting a field rebuilds
/// that axis's scale only, while a resize rebuilds the whole value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartState {
    viewport: Viewport,
    plot: PlotArea,
    selection: AxisSelection,
    x_scale: LinearScale,
    y_scale: LinearScale,
}

impl ChartState {
    /// Derives plot geometry and both scales for a viewport and selection.
    pub fn derive(
        dataset: &Dataset,
        viewport: Viewport,
        margins: Margins,
        selection: AxisSelection,
    ) -> ChartResult<Self> {
        let plot = PlotArea::from_viewport(viewport, margins)?;
        let x_scale = x_scale_for(dataset, selection.x, plot)?;
        let y_scale = y_scale_for(dataset, selection.y, plot)?;
        Ok(Self {
            viewport,
            plot,
            selection,
            x_scale,
            y_scale,
        })
    }

    /// Returns a copy with a new x field and a freshly derived x scale.
    ///
    /// The y scale is untouched.
    pub fn with_x_field(mut self, dataset: &Dataset, field: XField) -> ChartResult<Self> {
        self.selection.x = field;
        self.x_scale = x_scale_for(dataset, field, self.plot)?;
        Ok(self)
    }

    /// Returns a copy with a new y field and a freshly derived y scale.
    ///
    /// The x scale is untouched.
    pub fn with_y_field(mut self, dataset: &Dataset, field: YField) -> ChartResult<Self> {
        self.selection.y = field;
        self.y_scale = y_scale_for(dataset, field, self.plot)?;
        Ok(self)
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn plot(self) -> PlotArea {
        self.plot
    }

    #[must_use]
    pub fn selection(self) -> AxisSelection {
        self.selection
    }

    #[must_use]
    pub fn x_scale(self) -> LinearScale {
        self.x_scale
    }

    #[must_use]
    pub fn y_scale(self) -> LinearScale {
        self.y_scale
    }
}

fn x_scale_for(dataset: &Dataset, field: XField, plot: PlotArea) -> ChartResult<LinearScale> {
    LinearScale::new(dataset.x_extent(field), (0.0, plot.width))
}

// Inverted range: pixel y grows downward while the value should grow upward.
fn y_scale_for(dataset: &Dataset, field: YField, plot: PlotArea) -> ChartResult<LinearScale> {
    LinearScale::new(dataset.y_extent(field), (plot.height, 0.0))
}
