//! [`Kind`]-related definitions.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[cfg(doc)]
use crate::domain::Property;

/// Classification of a [`Property`].
///
/// The recognized vocabulary is matched case-insensitively; unrecognized
/// values pass through as [`Kind::Other`] instead of erroring.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Kind {
    /// Residential project.
    Residential,

    /// Commercial project.
    Commercial,

    /// Investment offering, excluded from the standard status groupings.
    Investment,

    /// Unrecognized classification, carried through as-is.
    Other(String),
}

impl Kind {
    /// Parses a raw classification string case-insensitively.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.to_ascii_lowercase().as_str() {
            "residential" => Self::Residential,
            "commercial" => Self::Commercial,
            "investment" => Self::Investment,
            _ => Self::Other(raw.to_owned()),
        }
    }

    /// Returns the canonical wire form of this [`Kind`].
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Residential => "residential",
            Self::Commercial => "commercial",
            Self::Investment => "investment",
            Self::Other(raw) => raw,
        }
    }

    /// Matches this [`Kind`] against a raw classification name
    /// case-insensitively.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(name.trim())
    }

    /// Indicates whether this [`Kind`] is an investment offering.
    #[must_use]
    pub fn is_investment(&self) -> bool {
        match self {
            Self::Investment => true,
            Self::Residential | Self::Commercial | Self::Other(_) => false,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Kind {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Kind {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        Ok(Self::parse(&String::deserialize(deserializer)?))
    }
}

#[cfg(test)]
mod spec {
    use super::Kind;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(Kind::parse("INVESTMENT"), Kind::Investment);
        assert_eq!(Kind::parse("investment"), Kind::Investment);
        assert_eq!(Kind::parse("Investment"), Kind::Investment);
        assert_eq!(Kind::parse("Residential"), Kind::Residential);
        assert_eq!(Kind::parse("COMMERCIAL"), Kind::Commercial);
    }

    #[test]
    fn passes_unrecognized_values_through() {
        assert_eq!(
            Kind::parse("plotted development"),
            Kind::Other("plotted development".to_owned()),
        );
        assert_eq!(Kind::parse("plotted development").as_str(), "plotted development");
    }

    #[test]
    fn matches_raw_names() {
        assert!(Kind::Investment.matches("Investment"));
        assert!(Kind::Residential.matches("RESIDENTIAL"));
        assert!(Kind::Other("villa".to_owned()).matches("Villa"));
        assert!(!Kind::Commercial.matches("residential"));
    }
}
