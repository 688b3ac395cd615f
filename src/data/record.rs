use serde::Deserialize;

use crate::core::{XField, YField};
use crate::error::{ChartError, ChartResult};

/// One data row: a U.S. state with its demographic/health metrics.
///
/// Immutable after load. Extra CSV columns are ignored by the deserializer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    pub abbr: String,
    pub age: f64,
    pub income: f64,
    pub healthcare: f64,
    pub obesity: f64,
    pub smokes: f64,
}

impl Record {
    #[must_use]
    pub fn x_value(&self, field: XField) -> f64 {
        match field {
            XField::Age => self.age,
            XField::Income => self.income,
            XField::Healthcare => self.healthcare,
        }
    }

    #[must_use]
    pub fn y_value(&self, field: YField) -> f64 {
        match field {
            YField::Obesity => self.obesity,
            YField::Smokes => self.smokes,
        }
    }

    pub(crate) fn validate(&self) -> ChartResult<()> {
        if self.abbr.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "record abbreviation must not be empty".to_owned(),
            ));
        }
        for (name, value) in [
            ("age", self.age),
            ("income", self.income),
            ("healthcare", self.healthcare),
            ("obesity", self.obesity),
            ("smokes", self.smokes),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "record `{}` has non-finite `{name}` value",
                    self.abbr
                )));
            }
        }
        Ok(())
    }
}
