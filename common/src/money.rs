//! [`Money`]-related definitions.

use std::{fmt, str::FromStr};

use rust_decimal::{prelude::ToPrimitive as _, Decimal};

use crate::define_kind;

/// Amount of money in some [`Currency`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Money {
    /// Amount of this [`Money`].
    pub amount: Decimal,

    /// [`Currency`] of this amount.
    pub currency: Currency,
}

impl Money {
    /// Renders this [`Money`] in a compact human form.
    ///
    /// Currencies grouped by the Indian numbering system render in lakh and
    /// crore (`₹45 L`, `₹1.25 Cr`), the rest in thousand and million
    /// (`$450K`, `$1.25M`). Scaled amounts are rounded to two decimal places
    /// and trailing zeros are dropped.
    #[must_use]
    pub fn compact(&self) -> String {
        let Self { amount, currency } = self;

        let (scaled, suffix) = if currency.indian_grouping() {
            let crore = Decimal::from(10_000_000_u32);
            let lakh = Decimal::from(100_000_u32);
            if amount.abs() >= crore {
                (amount / crore, " Cr")
            } else if amount.abs() >= lakh {
                (amount / lakh, " L")
            } else {
                (*amount, "")
            }
        } else {
            let million = Decimal::from(1_000_000_u32);
            let thousand = Decimal::from(1_000_u32);
            if amount.abs() >= million {
                (amount / million, "M")
            } else if amount.abs() >= thousand {
                (amount / thousand, "K")
            } else {
                (*amount, "")
            }
        };

        let scaled = scaled.round_dp(2).normalize();
        format!("{}{scaled}{suffix}", currency.symbol())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { amount, currency } = self;
        if amount.is_integer() {
            write!(f, "{}{currency}", amount.to_i128().expect("integer"))
        } else {
            write!(f, "{amount}{currency}")
        }
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() < 4 {
            return Err("too short");
        }

        let (amount, currency) = s.split_at(s.len() - 3);
        let amount = Decimal::from_str(amount).map_err(|_| "invalid amount")?;
        let currency =
            Currency::from_str(currency).map_err(|_| "invalid currency")?;

        Ok(Self { amount, currency })
    }
}

define_kind! {
    #[doc = "Currency of a [`Money`] amount."]
    enum Currency {
        #[doc = "Indian Rupee."]
        Inr = 1,

        #[doc = "US Dollar."]
        Usd = 2,

        #[doc = "Euro."]
        Eur = 3,
    }
}

impl Currency {
    /// Returns the symbol of this [`Currency`].
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Inr => "\u{20b9}",
            Self::Usd => "$",
            Self::Eur => "\u{20ac}",
        }
    }

    /// Indicates whether amounts of this [`Currency`] are grouped by the
    /// Indian numbering system (lakh/crore).
    #[must_use]
    pub const fn indian_grouping(self) -> bool {
        match self {
            Self::Inr => true,
            Self::Usd | Self::Eur => false,
        }
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::{Currency, Money};

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn from_str() {
        assert_eq!(
            Money::from_str("4500000INR").unwrap(),
            Money {
                amount: decimal("4500000"),
                currency: Currency::Inr,
            },
        );

        assert_eq!(
            Money::from_str("123.45USD").unwrap(),
            Money {
                amount: decimal("123.45"),
                currency: Currency::Usd,
            },
        );

        assert_eq!(
            Money::from_str("123.45EUR").unwrap(),
            Money {
                amount: decimal("123.45"),
                currency: Currency::Eur,
            },
        );

        assert!(Money::from_str("123.45").is_err());
        assert!(Money::from_str("123.45In").is_err());
        assert!(Money::from_str("123.45Rupees").is_err());

        assert!(Money::from_str("123.00INR").is_ok());
        assert!(Money::from_str("123.0INR").is_ok());
        assert!(Money::from_str("123INR").is_ok());
    }

    #[test]
    fn to_string() {
        assert_eq!(
            Money {
                amount: decimal("123.45"),
                currency: Currency::Inr,
            }
            .to_string(),
            "123.45INR",
        );

        assert_eq!(
            Money {
                amount: decimal("123.00"),
                currency: Currency::Usd,
            }
            .to_string(),
            "123USD",
        );
        assert_eq!(
            Money {
                amount: decimal("123"),
                currency: Currency::Eur,
            }
            .to_string(),
            "123EUR",
        );
    }

    #[test]
    fn compact_indian_grouping() {
        let inr = |s| Money {
            amount: decimal(s),
            currency: Currency::Inr,
        };

        assert_eq!(inr("4500000").compact(), "\u{20b9}45 L");
        assert_eq!(inr("10000000").compact(), "\u{20b9}1 Cr");
        assert_eq!(inr("12500000").compact(), "\u{20b9}1.25 Cr");
        assert_eq!(inr("45000").compact(), "\u{20b9}45000");
        assert_eq!(inr("12345678").compact(), "\u{20b9}1.23 Cr");
    }

    #[test]
    fn compact_western_grouping() {
        let usd = |s| Money {
            amount: decimal(s),
            currency: Currency::Usd,
        };

        assert_eq!(usd("450000").compact(), "$450K");
        assert_eq!(usd("1250000").compact(), "$1.25M");
        assert_eq!(usd("999").compact(), "$999");
    }
}
