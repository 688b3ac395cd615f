use serde::{Deserialize, Serialize};

/// Axis identifier used by events and selection commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Fields selectable on the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum XField {
    #[default]
    Age,
    Income,
    Healthcare,
}

impl XField {
    pub const ALL: [Self; 3] = [Self::Age, Self::Income, Self::Healthcare];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Income => "income",
            Self::Healthcare => "healthcare",
        }
    }

    /// Parses a field name; unknown names yield `None` so callers can treat
    /// them as an ignored no-op.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    #[must_use]
    pub fn display_label(self) -> &'static str {
        match self {
            Self::Age => "Age (Median)",
            Self::Income => "Household Income (Median)",
            Self::Healthcare => "Lack of Healthcare (%)",
        }
    }
}

/// Fields selectable on the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum YField {
    #[default]
    Obesity,
    Smokes,
}

impl YField {
    pub const ALL: [Self; 2] = [Self::Obesity, Self::Smokes];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Obesity => "obesity",
            Self::Smokes => "smokes",
        }
    }

    /// Parses a field name; unknown names yield `None` so callers can treat
    /// them as an ignored no-op.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    #[must_use]
    pub fn display_label(self) -> &'static str {
        match self {
            Self::Obesity => "Obese (%)",
            Self::Smokes => "Smokes (%)",
        }
    }
}

/// The pair of currently active fields driving marker placement.
///
/// Exactly one field is active per axis at any time; each axis is an
/// independent single-token selector whose only transition is a matching
/// select command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AxisSelection {
    pub x: XField,
    pub y: YField,
}

impl AxisSelection {
    #[must_use]
    pub fn new(x: XField, y: YField) -> Self {
        Self { x, y }
    }
}
