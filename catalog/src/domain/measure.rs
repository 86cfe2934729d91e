//! [`Measure`]-related definitions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[cfg(doc)]
use crate::domain::Property;

/// Physical measurement of a [`Property`] (area, height).
///
/// The source catalog carries these either as a bare scalar or as a
/// structured `{value, unit, display}` object; both forms are accepted.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Measure {
    /// Bare scalar value, unit implied by the field.
    Scalar(Decimal),

    /// Structured value with an explicit unit and an optional preformatted
    /// display string.
    Structured {
        /// Numeric value.
        value: Decimal,

        /// Unit of the value (e.g. `"sq.ft."`).
        #[serde(default)]
        unit: Option<String>,

        /// Preformatted display string, taking precedence when rendering.
        #[serde(default)]
        display: Option<String>,
    },
}

impl Measure {
    /// Renders this [`Measure`] for display.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Scalar(value) => value.normalize().to_string(),
            Self::Structured {
                value,
                unit,
                display,
            } => display.clone().unwrap_or_else(|| {
                unit.as_ref().map_or_else(
                    || value.normalize().to_string(),
                    |unit| format!("{} {unit}", value.normalize()),
                )
            }),
        }
    }
}
