//! Host-facing event model.
//!
//! The hosting environment delivers events synchronously, one at a time; the
//! controller never sees overlapping invocations.

use serde::{Deserialize, Serialize};

use crate::core::Axis;

/// Event delivered by the host environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartEvent {
    /// An axis field label was activated (clicked).
    ///
    /// `field` carries the raw field name; names that match no selectable
    /// field on `axis` are ignored.
    AxisLabelActivated { axis: Axis, field: String },
    /// The hosting viewport changed size.
    ViewportResized { width: u32, height: u32 },
}
