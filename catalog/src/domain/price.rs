//! Price-related definitions.

use common::{money::Currency, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[cfg(doc)]
use crate::domain::Property;

/// Literal rendered when a price is absent or unspecified.
pub const PRICE_ON_REQUEST: &str = "Price on Request";

/// Price of a [`Property`], as provided by the source catalog.
///
/// Amounts are bare decimals; the owning record carries the [`Currency`]
/// they are denominated in.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PriceRange {
    /// No price supplied.
    #[default]
    Unspecified,

    /// A single asking price.
    Single(Decimal),

    /// An inclusive price bracket.
    Between {
        /// Lower bound of the bracket.
        min: Decimal,

        /// Upper bound of the bracket.
        max: Decimal,
    },
}

impl PriceRange {
    /// Formats this [`PriceRange`] into a human display string.
    ///
    /// Absent, zero and degenerate inputs all render as
    /// [`PRICE_ON_REQUEST`]; a bracket with equal bounds renders as a single
    /// price. Input is always the raw structured value, never an already
    /// formatted string.
    #[must_use]
    pub fn display(&self, currency: Currency) -> String {
        let compact = |amount: Decimal| Money { amount, currency }.compact();

        match *self {
            Self::Unspecified => PRICE_ON_REQUEST.to_owned(),
            Self::Single(amount) => {
                if amount.is_zero() {
                    PRICE_ON_REQUEST.to_owned()
                } else {
                    compact(amount)
                }
            }
            Self::Between { min, max } => {
                if min.is_zero() || max.is_zero() || min > max {
                    PRICE_ON_REQUEST.to_owned()
                } else if min == max {
                    compact(min)
                } else {
                    format!("{} \u{2013} {}", compact(min), compact(max))
                }
            }
        }
    }
}
