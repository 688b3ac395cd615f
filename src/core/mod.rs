pub mod field;
pub mod scale;
pub mod types;

pub use field::{Axis, AxisSelection, XField, YField};
pub use scale::LinearScale;
pub use types::{Margins, PlotArea, Viewport};
